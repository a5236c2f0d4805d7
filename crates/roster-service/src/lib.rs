//! # Roster Service
//!
//! User management service layer for Roster.
//! Holds the business rules for creating, deactivating, listing, and
//! reporting users on top of a [`UserRepository`](roster_repository::UserRepository).

pub mod bootstrap;
pub mod di;
pub mod dto;
pub mod report;
pub mod user_service;
pub mod r#impl;

pub use bootstrap::*;
pub use di::*;
pub use dto::*;
pub use report::*;
pub use user_service::*;
pub use r#impl::UserServiceImpl;
