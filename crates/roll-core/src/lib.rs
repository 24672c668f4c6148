//! # roll-core
//!
//! Core types shared across the rollcall crates:
//! - Entity structs for backend resources (lessons, files, enrollments, users, attendance)
//! - The closed [`enums::Role`] set
//! - Request/response DTOs exchanged with the attendance API
//! - The `required` form validator
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod validate;
