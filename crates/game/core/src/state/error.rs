//! Property store errors.

use crate::error::{ErrorSeverity, GameError};
use crate::skill::SkillKind;

/// Errors raised by a [`PlayerProperties`](crate::state::PlayerProperties) implementation.
///
/// Skill operations never recover from these; they are propagated unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyError {
    /// The backing store cannot be reached right now.
    #[error("property store unavailable")]
    Unavailable,

    /// A slot for this skill was already registered.
    #[error("skill {0} is already registered")]
    DuplicateSkill(SkillKind),
}

impl GameError for PropertyError {
    fn severity(&self) -> ErrorSeverity {
        use PropertyError::*;
        match self {
            Unavailable => ErrorSeverity::Recoverable,
            // Registering twice means construction ran twice for one player
            DuplicateSkill(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use PropertyError::*;
        match self {
            Unavailable => "PROPERTY_UNAVAILABLE",
            DuplicateSkill(_) => "PROPERTY_DUPLICATE_SKILL",
        }
    }
}
