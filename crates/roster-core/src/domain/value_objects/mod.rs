//! Domain value objects.

mod status;

pub use status::*;
