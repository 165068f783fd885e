//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// The record store assigns opaque string identifiers at document creation,
/// so IDs wrap `String` rather than an integer. Creates a newtype with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```
/// # use classic_cuts_core::define_id;
/// define_id!(AppointmentId);
/// define_id!(AdminUid);
///
/// let appointment = AppointmentId::new("a1b2c3");
/// let admin = AdminUid::new("a1b2c3");
///
/// // These are different types, so this won't compile:
/// // let _: AppointmentId = admin;
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
    };
}

// Define standard entity IDs
define_id!(AppointmentId);
define_id!(AdminUid);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_matches_inner() {
        let id = AppointmentId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_id_from_conversions() {
        let from_str = AdminUid::from("uid-1");
        let from_string = AdminUid::from(String::from("uid-1"));
        assert_eq!(from_str, from_string);
        assert_eq!(String::from(from_str), "uid-1");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = AppointmentId::new("doc-9");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"doc-9\"");
        let back: AppointmentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
