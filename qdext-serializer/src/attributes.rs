//! Pure attribute resolvers, shared by every augmented variant.
//!
//! Each resolver is a free function of the property store so two decorator
//! instances (full profile, summary card) invoke identical logic instead of
//! re-implementing it per target.

use qdext_model::PropertyStore;
use serde_json::{Map, Value};

/// Property-store key and attribute name for the equipped avatar frame.
pub const AVATAR_FRAME_ID: &str = "avatar_frame_id";

/// Property-store key and attribute name for the equipped decoration badge.
pub const DECORATION_BADGE_ID: &str = "decoration_badge_id";

/// Attribute name for the denormalized projection of the two keys above.
pub const CUSTOM_FIELDS: &str = "custom_fields";

/// Every attribute name the extension adds to a user variant.
pub const EXTENSION_ATTRIBUTES: [&str; 3] = [AVATAR_FRAME_ID, DECORATION_BADGE_ID, CUSTOM_FIELDS];

/// Avatar frame lookup; absent key resolves to null.
pub fn resolve_avatar_frame(store: &dyn PropertyStore) -> Value {
    store.property(AVATAR_FRAME_ID).cloned().unwrap_or(Value::Null)
}

/// Decoration badge lookup; absent key resolves to null.
pub fn resolve_decoration_badge(store: &dyn PropertyStore) -> Value {
    store.property(DECORATION_BADGE_ID).cloned().unwrap_or(Value::Null)
}

/// Freshly built two-key projection of the property store.
///
/// Only the declared subset is re-exposed — whatever else the store holds
/// never leaks through this attribute. Values always agree with the flat
/// `avatar_frame_id` / `decoration_badge_id` attributes because both forms
/// go through the same resolvers.
pub fn resolve_custom_fields(store: &dyn PropertyStore) -> Value {
    let mut fields = Map::new();
    fields.insert(AVATAR_FRAME_ID.to_string(), resolve_avatar_frame(store));
    fields.insert(DECORATION_BADGE_ID.to_string(), resolve_decoration_badge(store));
    Value::Object(fields)
}
