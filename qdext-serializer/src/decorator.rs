use crate::attributes::{self, EXTENSION_ATTRIBUTES};
use qdext_model::{UserRef, UserSerializer};
use serde_json::{Map, Value};

/// Decorator that merges the extension attributes into a host variant's
/// output.
///
/// Precedence on a name collision is extension-wins: if the wrapped variant
/// later grows its own `avatar_frame_id` (or either other name), the value
/// computed here replaces it in the merged map. Hosts that need the opposite
/// precedence must rename their attribute.
pub struct AugmentedUserSerializer {
    inner: Box<dyn UserSerializer>,
}

impl AugmentedUserSerializer {
    /// Wraps `inner` — unless it already declares every extension attribute,
    /// in which case it is returned unchanged. Re-augmenting a variant is
    /// therefore a no-op, not a duplicate declaration.
    pub fn wrap(inner: Box<dyn UserSerializer>) -> Box<dyn UserSerializer> {
        let declared = inner.attribute_names();
        let already_augmented = EXTENSION_ATTRIBUTES
            .iter()
            .all(|name| declared.iter().any(|d| d == name));
        if already_augmented {
            return inner;
        }
        Box::new(Self { inner })
    }
}

impl UserSerializer for AugmentedUserSerializer {
    fn attribute_names(&self) -> Vec<String> {
        let mut names = self.inner.attribute_names();
        for name in EXTENSION_ATTRIBUTES {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    fn serialize(&self, user: &UserRef) -> Map<String, Value> {
        let mut out = self.inner.serialize(user);
        out.insert(
            attributes::AVATAR_FRAME_ID.to_string(),
            attributes::resolve_avatar_frame(user),
        );
        out.insert(
            attributes::DECORATION_BADGE_ID.to_string(),
            attributes::resolve_decoration_badge(user),
        );
        out.insert(
            attributes::CUSTOM_FIELDS.to_string(),
            attributes::resolve_custom_fields(user),
        );
        out
    }
}
