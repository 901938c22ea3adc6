use crate::utils::error::{DemoError, Result};

/// Sum of `a` and `b`; overflowing `i64` is a validation error.
pub fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or_else(|| DemoError::ValidationError {
        message: format!("{} + {} overflows a 64-bit integer", a, b),
    })
}

pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Works for negative numbers; 0 is even.
pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}
