//! Per-field converter overrides for `#[serde(with = "...")]`.
//!
//! [`Seq`] and [`Arr`] already serialize as plain JSON arrays through their
//! own `Serialize`/`Deserialize` implementations, so most code needs nothing
//! from this module. These modules exist for the cases where a field names
//! its converter explicitly: an attribute-level override takes the place of
//! the type-level implementation at that field.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_persistent::Seq;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "serde_persistent::fields::seq")]
//!     values: Seq<i32>,
//! }
//! ```
//!
//! Optional fields use the `*_option` variants, which frame `null` themselves
//! (absent, never empty):
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_persistent::Arr;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "serde_persistent::fields::arr_option")]
//!     values: Option<Arr<i32>>,
//! }
//! ```
//!
//! Either way the bytes written are identical to the registry-wide default;
//! the override changes which code runs, not the wire shape.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::{Arr, Seq};

/// Explicit converter for a `Seq<T>` field.
pub mod seq {
    use super::*;

    pub fn serialize<S, T>(value: &Seq<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        crate::ser::serialize_elements(serializer, value.len(), value.iter())
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Seq<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Seq::deserialize(deserializer)
    }
}

/// Explicit converter for an `Arr<T>` field.
pub mod arr {
    use super::*;

    pub fn serialize<S, T>(value: &Arr<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        crate::ser::serialize_elements(serializer, value.len(), value.iter())
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Arr<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Arr::deserialize(deserializer)
    }
}

/// Explicit converter for an `Option<Seq<T>>` field.
///
/// `None` writes the literal `null`; `null` reads back as `None`. An empty
/// sequence stays `[]` in both directions.
pub mod seq_option {
    use super::*;

    pub fn serialize<S, T>(value: &Option<Seq<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        crate::ser::serialize_nullable(value.as_ref(), serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Seq<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        crate::de::deserialize_nullable(deserializer)
    }
}

/// Explicit converter for an `Option<Arr<T>>` field.
///
/// `None` writes the literal `null`; `null` reads back as `None`. An empty
/// array stays `[]` in both directions.
pub mod arr_option {
    use super::*;

    pub fn serialize<S, T>(value: &Option<Arr<T>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        crate::ser::serialize_nullable(value.as_ref(), serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Arr<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        crate::de::deserialize_nullable(deserializer)
    }
}
