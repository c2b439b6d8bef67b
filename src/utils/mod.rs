//! Helper functions used across the application.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Target URL checks
//! - [`request_meta`] - Click metadata extraction from HTTP headers

pub mod code_generator;
pub mod request_meta;
pub mod url_validator;
