//! Read-side converters.
//!
//! This module implements [`Deserialize`] for [`Seq`] and [`Arr`] from the
//! same wire shape a `Vec<T>` reads from: a plain JSON array. Elements are
//! accumulated in read order and the container is built from the buffer in
//! one step, so iteration order of the result always equals array order.
//!
//! Two token kinds are accepted where a container is expected:
//!
//! - an array, decoded element by element by delegating each to the
//!   deserializer's own decoding for the element type
//! - `null`, but only at an optional position (`Option<Seq<T>>`), where it
//!   produces the absent state, never an empty container
//!
//! Anything else (a number, a string, an object) is a format error surfaced
//! through the deserializer's own error type, with its position diagnostics
//! intact. Element-level failures propagate verbatim and abort the whole
//! top-level call; no partial container is ever returned.
//!
//! ```rust
//! use serde_persistent::{from_str, Seq};
//!
//! let seq: Seq<i32> = from_str("[1,2]").unwrap();
//! assert_eq!(seq, vec![1, 2]);
//!
//! let absent: Option<Seq<i32>> = from_str("null").unwrap();
//! assert!(absent.is_none());
//!
//! // A bare container rejects null: absence needs the Option wrapper.
//! assert!(from_str::<Seq<i32>>("null").is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};

use crate::{Arr, Seq};

/// Drains a sequence access into a buffer, delegating each element to the
/// deserializer's own decoding and keeping read order. Consumes exactly the
/// array's tokens; the first failing element aborts the drain.
pub(crate) fn collect_elements<'de, A, T>(mut access: A) -> Result<Vec<T>, A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
{
    let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0));
    while let Some(element) = access.next_element::<T>()? {
        elements.push(element);
    }
    Ok(elements)
}

/// Reads an optional container: `null` produces `None`, an array defers to
/// the container's own decoding. The null branch is checked first so absence
/// is never conflated with emptiness.
pub(crate) fn deserialize_nullable<'de, D, C>(deserializer: D) -> Result<Option<C>, D::Error>
where
    D: Deserializer<'de>,
    C: Deserialize<'de>,
{
    struct NullableVisitor<C>(PhantomData<fn() -> C>);

    impl<'de, C: Deserialize<'de>> Visitor<'de> for NullableVisitor<C> {
        type Value = Option<C>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a JSON array or null")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            C::deserialize(deserializer).map(Some)
        }
    }

    deserializer.deserialize_option(NullableVisitor(PhantomData))
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Seq<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeqVisitor<T>(PhantomData<fn() -> T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for SeqVisitor<T> {
            type Value = Seq<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON array of elements")
            }

            fn visit_seq<A>(self, access: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                collect_elements(access).map(Seq::from)
            }
        }

        deserializer.deserialize_seq(SeqVisitor(PhantomData))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Arr<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArrVisitor<T>(PhantomData<fn() -> T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ArrVisitor<T> {
            type Value = Arr<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON array of elements")
            }

            fn visit_seq<A>(self, access: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                collect_elements(access).map(Arr::from)
            }
        }

        deserializer.deserialize_seq(ArrVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::{from_str, Arr, Seq};

    #[test]
    fn test_seq_reads_a_plain_array() {
        let seq: Seq<i32> = from_str("[1,2]").unwrap();
        assert_eq!(seq, vec![1, 2]);
    }

    #[test]
    fn test_arr_reads_a_plain_array() {
        let arr: Arr<i32> = from_str("[1,2]").unwrap();
        assert_eq!(arr, vec![1, 2]);
    }

    #[test]
    fn test_empty_array_is_an_empty_container() {
        let seq: Seq<i32> = from_str("[]").unwrap();
        assert!(seq.is_empty());

        let arr: Arr<i32> = from_str("[]").unwrap();
        assert!(arr.is_empty());
    }

    #[test]
    fn test_null_is_absent_not_empty() {
        let seq: Option<Seq<i32>> = from_str("null").unwrap();
        assert!(seq.is_none());

        let arr: Option<Arr<i32>> = from_str("null").unwrap();
        assert!(arr.is_none());
    }

    #[test]
    fn test_bare_container_rejects_null() {
        assert!(from_str::<Seq<i32>>("null").is_err());
        assert!(from_str::<Arr<i32>>("null").is_err());
    }

    #[test]
    fn test_wrong_token_kind_is_a_format_error() {
        let err = from_str::<Seq<i32>>("42").unwrap_err();
        assert!(err.to_string().contains("a JSON array"));

        assert!(from_str::<Seq<i32>>("{}").is_err());
        assert!(from_str::<Arr<i32>>("\"text\"").is_err());
    }

    #[test]
    fn test_failing_element_aborts_the_whole_read() {
        assert!(from_str::<Seq<i32>>("[1,\"two\",3]").is_err());
    }

    #[test]
    fn test_read_order_is_array_order() {
        let seq: Seq<String> = from_str(r#"["a","b","c"]"#).unwrap();
        let collected: Vec<&str> = seq.iter().map(String::as_str).collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }
}
