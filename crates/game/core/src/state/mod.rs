//! Player-side state the skill system reads and writes.
//!
//! [`PlayerProperties`] is the boundary: the skill set never holds a reference to
//! the player, it receives the store on every call. [`PropertyMap`] is the in-memory
//! implementation used by [`Player`](crate::player::Player).
mod error;
mod fields;
mod store;

pub use error::PropertyError;
pub use fields::PropertyFields;
pub use store::{PlayerProperties, PropertyMap};
