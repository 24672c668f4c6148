//! The single `required` form rule: a field fails when its value is falsy.
//!
//! Falsy means an empty or blank string, `None`, zero, or `false`.

use crate::errors::CoreError;

/// Values that can be checked for falsiness.
pub trait Falsy {
    fn is_falsy(&self) -> bool;
}

impl Falsy for str {
    fn is_falsy(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Falsy for String {
    fn is_falsy(&self) -> bool {
        self.as_str().is_falsy()
    }
}

impl Falsy for i64 {
    fn is_falsy(&self) -> bool {
        *self == 0
    }
}

impl Falsy for bool {
    fn is_falsy(&self) -> bool {
        !*self
    }
}

impl<T: Falsy + ?Sized> Falsy for &T {
    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }
}

impl<T: Falsy> Falsy for Option<T> {
    fn is_falsy(&self) -> bool {
        self.as_ref().is_none_or(Falsy::is_falsy)
    }
}

/// Fail with [`CoreError::Validation`] when `value` is falsy.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming `field`.
pub fn required<T: Falsy + ?Sized>(field: &str, value: &T) -> Result<(), CoreError> {
    if value.is_falsy() {
        return Err(CoreError::Validation {
            field: field.to_string(),
            reason: "is required".to_string(),
        });
    }
    Ok(())
}
