//! Error taxonomy for dealer operations.
//!
//! Every backend operation returns `Result<_, OpsError>`. The four variants
//! map one-to-one onto client-visible failure categories, so the HTTP layer
//! can translate them without inspecting message text.

use std::fmt::Display;

use thiserror::Error;

/// Failure categories for dealer operations.
///
/// Reads for a missing ID yield [`OpsError::NotFound`], never an empty
/// success. Transition writes that fail legality checks yield
/// [`OpsError::InvalidTransition`] and leave the entity untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpsError {
    /// No entity with the given ID exists.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity family, e.g. `"order"`.
        entity: &'static str,
        /// The ID that failed to resolve.
        id: String,
    },

    /// The request was malformed or failed validation.
    #[error("{0}")]
    InvalidInput(String),

    /// The requested status change is not a legal transition.
    #[error("cannot move {entity} from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    /// The backing system failed or returned garbage.
    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl OpsError {
    /// Build a [`OpsError::NotFound`] for an entity family and ID.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Build an [`OpsError::InvalidTransition`] from a rejected status pair.
    pub fn invalid_transition(entity: &'static str, from: impl Display, to: impl Display) -> Self {
        Self::InvalidTransition {
            entity,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = OpsError::not_found("order", "ord-9999");
        assert_eq!(err.to_string(), "order not found: ord-9999");
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = OpsError::invalid_transition("lead", "won", "contacted");
        assert_eq!(err.to_string(), "cannot move lead from won to contacted");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = OpsError::InvalidInput("at least one line item is required".to_string());
        assert_eq!(err.to_string(), "at least one line item is required");
    }
}
