use crate::decorator::AugmentedUserSerializer;
use crate::error::SerializerError;
use qdext_model::{UserRef, UserSerializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// Named table of every serializer variant the host exposes for its user
/// entity (e.g. `"user"` for the full profile, `"user_card"` for the
/// summary card).
///
/// The host registers its variants during boot, the extension augments them
/// all once, and request handlers serialize through the registry afterwards.
/// Augmentation happens strictly before any serialization call, so the table
/// is read-only at request time and safe to share behind `&self`.
#[derive(Default)]
pub struct SerializerRegistry {
    variants: HashMap<String, Box<dyn UserSerializer>>,
}

impl SerializerRegistry {
    pub fn new() -> Self {
        Self {
            variants: HashMap::new(),
        }
    }

    /// Registers a host variant under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        serializer: Box<dyn UserSerializer>,
    ) -> Result<(), SerializerError> {
        let name = name.into();
        if self.variants.contains_key(&name) {
            return Err(SerializerError::VariantAlreadyRegistered(name));
        }
        self.variants.insert(name, serializer);
        Ok(())
    }

    /// Applies the attribute augmentation to every registered variant.
    ///
    /// Safe to call more than once: already-augmented variants pass through
    /// [`AugmentedUserSerializer::wrap`] untouched.
    pub fn augment_all(&mut self) {
        let variants = std::mem::take(&mut self.variants);
        self.variants = variants
            .into_iter()
            .map(|(name, serializer)| {
                debug!(variant = %name, "augmenting user serializer variant");
                (name, AugmentedUserSerializer::wrap(serializer))
            })
            .collect();
    }

    /// Serializes `user` through the named variant.
    pub fn serialize(
        &self,
        variant: &str,
        user: &UserRef,
    ) -> Result<Map<String, Value>, SerializerError> {
        self.variants
            .get(variant)
            .map(|serializer| serializer.serialize(user))
            .ok_or_else(|| SerializerError::VariantNotFound(variant.to_string()))
    }

    /// Attribute names declared by the named variant.
    pub fn attribute_names(&self, variant: &str) -> Result<Vec<String>, SerializerError> {
        self.variants
            .get(variant)
            .map(|serializer| serializer.attribute_names())
            .ok_or_else(|| SerializerError::VariantNotFound(variant.to_string()))
    }

    /// Names of all registered variants, in no particular order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct IdOnly;

    impl UserSerializer for IdOnly {
        fn attribute_names(&self) -> Vec<String> {
            vec!["id".into()]
        }

        fn serialize(&self, user: &UserRef) -> Map<String, Value> {
            let mut out = Map::new();
            out.insert("id".into(), json!(user.id));
            out
        }
    }

    #[test]
    fn duplicate_variant_registration_is_an_error() {
        let mut registry = SerializerRegistry::new();
        registry.register("user", Box::new(IdOnly)).unwrap();
        assert_eq!(
            registry.register("user", Box::new(IdOnly)),
            Err(SerializerError::VariantAlreadyRegistered("user".into()))
        );
    }

    #[test]
    fn unknown_variant_is_an_error() {
        let registry = SerializerRegistry::new();
        let user = UserRef::new("u1");
        assert_eq!(
            registry.serialize("user_card", &user),
            Err(SerializerError::VariantNotFound("user_card".into()))
        );
    }

    #[test]
    fn augment_all_reaches_every_variant() {
        let mut registry = SerializerRegistry::new();
        registry.register("user", Box::new(IdOnly)).unwrap();
        registry.register("user_card", Box::new(IdOnly)).unwrap();
        registry.augment_all();

        for variant in ["user", "user_card"] {
            let names = registry.attribute_names(variant).unwrap();
            assert!(names.contains(&"custom_fields".to_string()), "{variant}");
        }
    }

    #[test]
    fn augment_all_is_idempotent() {
        let mut registry = SerializerRegistry::new();
        registry.register("user", Box::new(IdOnly)).unwrap();
        registry.augment_all();
        registry.augment_all();

        let names = registry.attribute_names("user").unwrap();
        let frames = names.iter().filter(|n| *n == "avatar_frame_id").count();
        assert_eq!(frames, 1);
        assert_eq!(names.len(), 4);
    }
}
