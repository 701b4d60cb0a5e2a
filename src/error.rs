//! Error types for enemy construction and template lookup.
//!
//! Everything fallible in the crate returns `EnemyError`. Errors fall
//! into two groups, see [`ErrorKind`].

use thiserror::Error;

/// Broad classification of an [`EnemyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A builder was asked to build with invalid accumulated state.
    Configuration,
    /// A registry lookup missed.
    Lookup,
}

/// Errors that can occur while building or cloning enemies.
///
/// # Examples
///
/// ```rust
/// use enemyforge::{EnemyError, ErrorKind};
///
/// let err = EnemyError::TemplateNotFound("goblin".to_string());
/// assert_eq!(err.kind(), ErrorKind::Lookup);
/// println!("{}", err); // "No enemy template found for key: goblin"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnemyError {
    /// The builder has no name, or an empty one.
    #[error("Enemy name is required")]
    MissingName,

    /// Health must be strictly positive at build time.
    #[error("Health must be positive, got {0}")]
    NonPositiveHealth(i32),

    /// No loot table was set on the builder.
    #[error("Loot table is required")]
    MissingLootTable,

    /// A boss phase was registered under phase number zero.
    ///
    /// Phase numbers start at 1.
    #[error("Invalid boss phase number: {0}")]
    InvalidPhase(u32),

    /// No template is registered under the requested key.
    #[error("No enemy template found for key: {0}")]
    TemplateNotFound(String),
}

impl EnemyError {
    /// Which group this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnemyError::MissingName
            | EnemyError::NonPositiveHealth(_)
            | EnemyError::MissingLootTable
            | EnemyError::InvalidPhase(_) => ErrorKind::Configuration,
            EnemyError::TemplateNotFound(_) => ErrorKind::Lookup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EnemyError::NonPositiveHealth(-5);
        assert!(err.to_string().contains("-5"));

        let err = EnemyError::TemplateNotFound("dragon".to_string());
        assert!(err.to_string().contains("dragon"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(EnemyError::MissingName.kind(), ErrorKind::Configuration);
        assert_eq!(EnemyError::MissingLootTable.kind(), ErrorKind::Configuration);
        assert_eq!(EnemyError::InvalidPhase(0).kind(), ErrorKind::Configuration);
        assert_eq!(
            EnemyError::TemplateNotFound("x".into()).kind(),
            ErrorKind::Lookup
        );
    }
}
