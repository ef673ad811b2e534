/// Creates a [`Seq`](crate::Seq) containing the given elements, in order.
///
/// ```rust
/// use serde_persistent::{seq, Seq};
///
/// let empty: Seq<i32> = seq![];
/// assert!(empty.is_empty());
///
/// let values = seq![1, 2, 3];
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Seq::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::Seq::from(vec![$($element),+])
    };
}

/// Creates an [`Arr`](crate::Arr) containing the given elements, in order.
///
/// ```rust
/// use serde_persistent::{arr, Arr};
///
/// let empty: Arr<i32> = arr![];
/// assert!(empty.is_empty());
///
/// let values = arr![1, 2, 3];
/// assert_eq!(values[0], 1);
/// ```
#[macro_export]
macro_rules! arr {
    () => {
        $crate::Arr::new()
    };

    ($($element:expr),+ $(,)?) => {
        $crate::Arr::from(vec![$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Arr, Seq};

    #[test]
    fn test_seq_macro() {
        let empty: Seq<i32> = seq![];
        assert!(empty.is_empty());

        let values = seq![1, 2, 3];
        assert_eq!(values, vec![1, 2, 3]);

        // Trailing comma is accepted.
        let trailing = seq![1, 2,];
        assert_eq!(trailing, vec![1, 2]);
    }

    #[test]
    fn test_arr_macro() {
        let empty: Arr<i32> = arr![];
        assert!(empty.is_empty());

        let values = arr!["a", "b"];
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_macros_nest() {
        let nested = seq![arr![1, 2], arr![3]];
        assert_eq!(nested.len(), 2);
        assert_eq!(nested.first().unwrap().len(), 2);
    }
}
