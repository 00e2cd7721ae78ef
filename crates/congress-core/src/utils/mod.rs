pub mod error_helpers;
pub mod retry;
pub mod validation;
