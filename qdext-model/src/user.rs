use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extension-side view of a host user entity.
///
/// The host owns the full record; the extension only sees the identity and
/// the per-user property store (`custom_fields`), a JSON object holding
/// arbitrary extension-written values. The store is the single source of
/// truth for extension data — the extension keeps no shadow state and never
/// writes through this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    /// Raw property store. Normally a JSON object; readers treat anything
    /// else (including `null`) as an empty store.
    #[serde(default)]
    pub custom_fields: Value,
}

impl UserRef {
    /// Creates a view with an empty property store.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            custom_fields: Value::Null,
        }
    }

    /// Creates a view over an existing property store.
    pub fn with_custom_fields(id: impl Into<String>, custom_fields: Value) -> Self {
        Self {
            id: id.into(),
            custom_fields,
        }
    }
}

/// Read seam over a user's property store.
///
/// Absent keys resolve to `None`, and a malformed (non-object) store behaves
/// like an empty one. Implementations must never panic on missing or
/// unexpected data — degradation is the caller's policy, not this trait's.
pub trait PropertyStore {
    /// Returns the raw value stored under `key`, if any.
    fn property(&self, key: &str) -> Option<&Value>;
}

impl PropertyStore for UserRef {
    fn property(&self, key: &str) -> Option<&Value> {
        self.custom_fields.as_object().and_then(|store| store.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn property_lookup_returns_stored_value() {
        let user = UserRef::with_custom_fields("u1", json!({"avatar_frame_id": "frame_3"}));
        assert_eq!(user.property("avatar_frame_id"), Some(&json!("frame_3")));
    }

    #[test]
    fn absent_key_resolves_to_none() {
        let user = UserRef::with_custom_fields("u1", json!({}));
        assert_eq!(user.property("decoration_badge_id"), None);
    }

    #[test]
    fn empty_store_resolves_to_none() {
        let user = UserRef::new("u1");
        assert_eq!(user.property("avatar_frame_id"), None);
    }

    #[test]
    fn malformed_store_behaves_like_empty() {
        let user = UserRef::with_custom_fields("u1", json!("not an object"));
        assert_eq!(user.property("avatar_frame_id"), None);

        let user = UserRef::with_custom_fields("u1", json!([1, 2, 3]));
        assert_eq!(user.property("avatar_frame_id"), None);
    }

    #[test]
    fn deserializes_without_custom_fields() {
        let user: UserRef = serde_json::from_str(r#"{"id": "u9"}"#).unwrap();
        assert_eq!(user.id, "u9");
        assert_eq!(user.custom_fields, Value::Null);
    }
}
