//! Write-side converters.
//!
//! This module implements [`Serialize`] for [`Seq`] and [`Arr`] so that both
//! containers hit the wire exactly like a `Vec<T>` would: a plain JSON array
//! of elements. Element encoding is delegated entirely to the serializer, so
//! the element type may be a primitive, a struct, or another container;
//! nothing here special-cases it.
//!
//! Absence is handled before any array logic: an `Option` holding no
//! container serializes as the literal `null`, never as `[]`. The shared
//! framing helpers live here and are reused by the per-field override modules
//! in [`crate::fields`].
//!
//! ```rust
//! use serde_persistent::{to_string, Seq};
//!
//! let seq = Seq::new().push_back(1).push_back(2);
//! assert_eq!(to_string(&seq).unwrap(), "[1,2]");
//! assert_eq!(to_string(&seq).unwrap(), to_string(&vec![1, 2]).unwrap());
//! ```

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{Arr, Seq};

/// Writes `len` elements as a JSON array, delegating each element to the
/// serializer's own encoding for its type. Element order is the iterator's
/// order; nothing is reordered or dropped.
pub(crate) fn serialize_elements<S, I>(
    serializer: S,
    len: usize,
    elements: I,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut state = serializer.serialize_seq(Some(len))?;
    for element in elements {
        state.serialize_element(&element)?;
    }
    state.end()
}

/// Writes an optional container: `None` becomes the literal `null`, `Some`
/// defers to the container's own array encoding. The null branch comes first
/// so an absent container is never confused with an empty one.
pub(crate) fn serialize_nullable<S, C>(value: Option<&C>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    C: Serialize,
{
    match value {
        None => serializer.serialize_none(),
        Some(container) => serializer.serialize_some(container),
    }
}

impl<T: Serialize> Serialize for Seq<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_elements(serializer, self.len(), self.iter())
    }
}

impl<T: Serialize> Serialize for Arr<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_elements(serializer, self.len(), self.iter())
    }
}
