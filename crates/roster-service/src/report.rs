//! Plain-text user report.

use roster_core::User;
use std::fmt;

/// First line of every user report.
pub const REPORT_HEADER: &str = "--- Relatório de Usuários ---";

/// Report listing users and their statuses, one line per user.
///
/// ```text
/// --- Relatório de Usuários ---
/// ID: 1, Nome: Alice, Status: ativo
/// ID: 2, Nome: Bob, Status: inativo
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UserReport<'a> {
    users: &'a [User],
}

impl<'a> UserReport<'a> {
    /// Creates a report over the given users, kept in the given order.
    #[must_use]
    pub const fn new(users: &'a [User]) -> Self {
        Self { users }
    }
}

impl fmt::Display for UserReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for user in self.users {
            writeln!(f, "ID: {}, Nome: {}, Status: {}", user.id, user.name, user.status.label())?;
        }
        Ok(())
    }
}
