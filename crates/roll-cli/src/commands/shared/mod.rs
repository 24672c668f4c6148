pub mod action;
pub mod download;
pub mod input;
pub mod limit;
pub mod notify;
