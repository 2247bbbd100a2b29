//! Common error infrastructure for skills-core.
//!
//! Every error enum in the crate implements [`GameError`] so callers can classify
//! failures uniformly. Domain errors live next to the code that raises them:
//! [`SkillError`] here, [`PropertyError`](crate::state::PropertyError) in the store module.

use crate::skill::SkillKind;
use crate::state::PropertyError;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same call may succeed later.
    ///
    /// Examples: property store unavailable
    Recoverable,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: unknown skill name, unknown vocation id
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    ///
    /// Examples: skill registered twice
    Internal,

    /// Player state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all skills-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable `SCREAMING_SNAKE` code from [`GameError::error_code`]
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised by [`SkillSet`](crate::skill::SkillSet) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    /// The player's property store holds no slot for this skill.
    #[error("skill {0} is not registered on this player")]
    SkillNotRegistered(SkillKind),

    /// A textual skill tag did not name any known skill.
    #[error("unknown skill '{0}'")]
    UnknownSkill(String),

    /// A numeric vocation id has no vocation attached to it.
    #[error("unknown vocation id {0}")]
    UnknownVocation(u8),

    #[error(transparent)]
    Property(#[from] PropertyError),
}

impl GameError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        use SkillError::*;
        match self {
            SkillNotRegistered(_) | UnknownSkill(_) | UnknownVocation(_) => {
                ErrorSeverity::Validation
            }
            Property(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use SkillError::*;
        match self {
            SkillNotRegistered(_) => "SKILL_NOT_REGISTERED",
            UnknownSkill(_) => "SKILL_UNKNOWN",
            UnknownVocation(_) => "SKILL_UNKNOWN_VOCATION",
            Property(inner) => inner.error_code(),
        }
    }
}
