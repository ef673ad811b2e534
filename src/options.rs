//! Configuration options for JSON output.
//!
//! This module provides [`JsonOptions`], an immutable configuration value
//! built once and passed into every serialize call that needs it. It controls
//! output formatting only; which converters handle which types is fixed at
//! compile time and is not configurable here.
//!
//! The default is compact output, which is what the wire-compatibility
//! guarantee is stated against: with default options, a container serializes
//! byte-identically to a `Vec` of the same elements.
//!
//! ## Examples
//!
//! ```rust
//! use serde_persistent::{to_string_with_options, JsonOptions, Seq};
//!
//! let seq = Seq::from(vec![1, 2]);
//!
//! let compact = to_string_with_options(&seq, JsonOptions::new()).unwrap();
//! assert_eq!(compact, "[1,2]");
//!
//! let pretty = to_string_with_options(&seq, JsonOptions::pretty()).unwrap();
//! assert_eq!(pretty, "[\n  1,\n  2\n]");
//! ```

/// Configuration options for JSON serialization.
///
/// Controls whether output is compact or pretty-printed, and the indent width
/// used when pretty-printing.
///
/// # Examples
///
/// ```rust
/// use serde_persistent::JsonOptions;
///
/// // Default compact output
/// let options = JsonOptions::new();
///
/// // Pretty-printed with 2-space indentation
/// let options = JsonOptions::pretty();
///
/// // Pretty-printed with a custom indent width
/// let options = JsonOptions::pretty().with_indent(4);
/// ```
#[derive(Clone, Debug)]
pub struct JsonOptions {
    pub pretty: bool,
    pub indent: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            pretty: false,
            indent: 2,
        }
    }
}

impl JsonOptions {
    /// Creates default options (compact output).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_persistent::JsonOptions;
    ///
    /// let options = JsonOptions::new();
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and
    /// indentation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_persistent::JsonOptions;
    ///
    /// let options = JsonOptions::pretty();
    /// assert!(options.pretty);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation width (number of spaces per level).
    ///
    /// Default is 2. Only affects pretty-printed output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_persistent::JsonOptions;
    ///
    /// let options = JsonOptions::pretty().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
