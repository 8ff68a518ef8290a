//! Platform-agnostic building blocks shared by the components.

pub mod config;
pub mod locale;
pub mod validate;
