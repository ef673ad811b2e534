//! # serde_persistent
//!
//! Serde-compatible JSON serialization for persistent immutable collections.
//!
//! ## What is this?
//!
//! Persistent collections are immutable values: "modifying" one returns a new
//! collection and leaves the original untouched, with storage shared between
//! versions. That makes them pleasant to pass around, and historically
//! awkward to serialize: a generic JSON engine only knows how to rebuild
//! growable, mutable containers.
//!
//! This crate provides two persistent containers and teaches the serde data
//! model to treat them exactly like plain lists on the wire:
//!
//! - [`Seq<T>`]: an append-only, insertion-ordered sequence
//! - [`Arr<T>`]: an index-addressable immutable array
//!
//! ## The wire contract
//!
//! - A present container serializes as a JSON array, byte-identical to
//!   serializing a `Vec<T>` of the same elements, and reads back from one
//! - An absent container (`Option::None`) is the JSON literal `null`
//! - A present-but-empty container is `[]`, never `null`, and never the
//!   other way around
//! - Any other JSON shape (object, scalar) is a format error
//!
//! Element encoding is delegated to the engine, so elements may be
//! primitives, structs, or further containers, without special cases.
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_persistent = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde_persistent::{from_str, to_string, Seq};
//!
//! let tags = Seq::new().push_back("rust").push_back("serde");
//!
//! let json = to_string(&tags).unwrap();
//! assert_eq!(json, r#"["rust","serde"]"#);
//!
//! let tags_back: Seq<String> = from_str(&json).unwrap();
//! assert_eq!(tags_back.len(), 2);
//! ```
//!
//! ### In Derived Structs
//!
//! The containers work anywhere a `Vec` would, including nested and optional
//! positions:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_persistent::{arr, from_str, to_string, Arr, Seq};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Inventory {
//!     name: String,
//!     quantities: Arr<u32>,
//!     discontinued: Option<Seq<String>>,
//! }
//!
//! let inventory = Inventory {
//!     name: "warehouse".to_string(),
//!     quantities: arr![3, 0, 7],
//!     discontinued: None,
//! };
//!
//! let json = to_string(&inventory).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"name":"warehouse","quantities":[3,0,7],"discontinued":null}"#
//! );
//! assert_eq!(from_str::<Inventory>(&json).unwrap(), inventory);
//! ```
//!
//! ### Explicit Per-Field Converters
//!
//! Fields can name their converter directly with `#[serde(with = "...")]`;
//! see [`fields`] for the available modules. The attribute takes the place of
//! the type-level implementation at that field and writes the same bytes.
//!
//! ## Null is not empty
//!
//! Absence is modeled with `Option` around the container, never by the
//! container itself. `None` serializes as `null` and `null` deserializes to
//! `None`; an empty container serializes as `[]` and `[]` deserializes to an
//! empty container. A bare `Seq`/`Arr` target rejects `null` outright.
//!
//! ## Safety and concurrency
//!
//! No `unsafe` code. The containers are immutable after construction and the
//! converters are stateless, so everything here is freely usable across
//! threads without locking.

pub mod arr;
pub mod de;
pub mod error;
pub mod fields;
pub mod macros;
pub mod options;
pub mod seq;
pub mod ser;

pub use arr::Arr;
pub use error::{Error, Result};
pub use options::JsonOptions;
pub use seq::Seq;

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use serde_persistent::{to_string, Seq};
///
/// let seq = Seq::from(vec![1, 2]);
/// assert_eq!(to_string(&seq).unwrap(), "[1,2]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// Pretty-printing adds newlines and indentation for readability. Note that
/// pretty output is for humans; the byte-for-byte list equivalence guarantee
/// is stated against compact output.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_persistent::{to_string_with_options, JsonOptions, Arr};
///
/// let arr = Arr::from(vec![1, 2]);
/// let options = JsonOptions::pretty().with_indent(4);
/// let json = to_string_with_options(&arr, options).unwrap();
/// assert_eq!(json, "[\n    1,\n    2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: JsonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut output = Vec::with_capacity(128);
    if options.pretty {
        let indent = " ".repeat(options.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut output, formatter);
        value.serialize(&mut serializer)?;
    } else {
        let mut serializer = serde_json::Serializer::new(&mut output);
        value.serialize(&mut serializer)?;
    }
    String::from_utf8(output).map_err(|e| Error::custom(e.to_string()))
}

/// Serialize any `T: Serialize` to a writer as compact JSON.
///
/// # Examples
///
/// ```rust
/// use serde_persistent::{to_writer, Seq};
///
/// let seq = Seq::from(vec![1, 2]);
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &seq).unwrap();
/// assert_eq!(buffer, b"[1,2]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, JsonOptions::default())
}

/// Serialize any `T: Serialize` to a writer as JSON with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: JsonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let json = to_string_with_options(value, options)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_persistent::{from_str, Arr};
///
/// let arr: Arr<i32> = from_str("[1,2]").unwrap();
/// assert_eq!(arr, vec![1, 2]);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or cannot be deserialized
/// to type `T`. Error messages include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(s)?)
}

/// Deserialize an instance of type `T` from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_slice(v)?)
}

/// Deserialize an instance of type `T` from an I/O stream of JSON.
///
/// # Examples
///
/// ```rust
/// use serde_persistent::{from_reader, Seq};
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"[1,2]");
/// let seq: Seq<i32> = from_reader(cursor).unwrap();
/// assert_eq!(seq, vec![1, 2]);
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails, the input is not valid
/// JSON, or the data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}
