//! Core domain entities.
//!
//! - [`Link`] - A shortened URL mapping with its validity window
//! - [`Click`] - A recorded redirect on a link
//!
//! Entities come with separate `New*` structs used as creation input.

pub mod click;
pub mod link;

pub use click::{Click, DIRECT_SOURCE, NewClick, UNKNOWN_LOCATION};
pub use link::{Link, LinkState, NewLink};
