//! # Roster Repository
//!
//! Data access for Roster:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>  (domain interface)
//! InMemoryUserRepository        (ordered in-memory store)
//! ```

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
