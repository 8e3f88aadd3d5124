//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Into<String>` implementations
///
/// IDs are opaque strings: the storage format assigns no meaning to their
/// content, only to their uniqueness within a collection.
///
/// # Example
///
/// ```rust
/// # use petstore_core::define_id;
/// define_id!(PromotionId);
/// define_id!(ProductId);
///
/// let promotion_id = PromotionId::new("1");
/// let product_id = ProductId::new("1");
///
/// // These are different types, so this won't compile:
/// // let _: PromotionId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(PromotionId);
define_id!(ProductId);

impl PromotionId {
    /// Generate a fresh collision-free promotion ID (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = PromotionId::new("promo-1");
        assert_eq!(id.as_str(), "promo-1");
    }

    #[test]
    fn test_generate_is_unique() {
        let a = PromotionId::generate();
        let b = PromotionId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_display() {
        let id = ProductId::new("3");
        assert_eq!(format!("{id}"), "3");
    }

    #[test]
    fn test_serde_transparent() {
        let id = PromotionId::new("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");

        let parsed: PromotionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_conversions() {
        let id: ProductId = "7".into();
        assert_eq!(id, ProductId::new("7"));

        let s: String = id.into();
        assert_eq!(s, "7");
    }
}
