//! User status value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// User account is active.
    #[default]
    Active,
    /// User account has been deactivated.
    Inactive,
}

impl UserStatus {
    /// Checks if the account is considered active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns the label used in the user report.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "ativo",
            Self::Inactive => "inativo",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}
