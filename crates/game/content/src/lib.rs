//! Data-driven skill content and loaders.
//!
//! This crate provides loaders for the files a server reads at startup:
//! - Skill configuration: curve constants and starting points (TOML)
//! - Player profiles: vocation and accumulated skill points (RON)
//!
//! All loaders deserialize skills-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, PlayerProfile, ProfileLoader};
