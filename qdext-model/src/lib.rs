//! Boundary types between the qd extension and its host platform.
//!
//! The host owns the user entity, its persistence, and the serializers that
//! render it. This crate defines the extension-side view of that boundary:
//! - [`UserRef`] — the slice of a host user the extension is allowed to see
//! - [`PropertyStore`] — read seam over a user's extension-data store
//! - [`UserSerializer`] — one serializer variant for the user entity
//!
//! All feature-specific behavior (attribute resolution, route declarations)
//! belongs in the `qdext-serializer` and `qdext-routes` crates, not here.

mod serializer;
mod user;

pub use serializer::UserSerializer;
pub use user::{PropertyStore, UserRef};
