//! Attribute augmentation layer for the host's user serializers.
//!
//! Makes the qd extension attributes (`avatar_frame_id`,
//! `decoration_badge_id`, `custom_fields`) appear in every serializer
//! variant that renders a user, computed from that user's property store,
//! without modifying the host's serializer sources:
//! - [`attributes`] — pure resolvers, defined once and shared by every
//!   target variant
//! - [`AugmentedUserSerializer`] — decorator that merges the extension
//!   attributes into a wrapped variant's output
//! - [`SerializerRegistry`] — named variant table the host serializes
//!   through after augmentation
//!
//! Resolution is read-only and synchronous; a missing or malformed property
//! store degrades to null attribute values, never an error.

pub mod attributes;
mod decorator;
mod error;
mod registry;

pub use decorator::AugmentedUserSerializer;
pub use error::SerializerError;
pub use registry::SerializerRegistry;
