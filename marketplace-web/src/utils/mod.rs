//! Constants, debouncing, and input validation

pub mod constants;
pub mod debounce;
pub mod validation;
