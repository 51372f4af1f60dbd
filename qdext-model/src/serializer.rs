use crate::UserRef;
use serde_json::{Map, Value};

/// One serializer variant for the host's user entity.
///
/// The host maintains several variants per entity (a full profile, a summary
/// card) and each independently declares which attributes it emits. The
/// extension composes around this trait instead of touching the host's
/// serializer sources, so variants must stay usable as `Box<dyn
/// UserSerializer>` and callable from concurrent request workers behind
/// `&self`.
pub trait UserSerializer: Send + Sync {
    /// Attribute names this variant emits, including any added by wrapping
    /// decorators.
    fn attribute_names(&self) -> Vec<String>;

    /// Produces the attribute map for `user`. Invoked once per response
    /// render; must not mutate the user or its property store.
    fn serialize(&self, user: &UserRef) -> Map<String, Value>;
}
