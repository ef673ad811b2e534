//! Property-based tests for the wire contract: list equivalence, order
//! preservation, and roundtrip identity across generated inputs.

use proptest::prelude::*;
use serde_persistent::{from_str, to_string, Arr, Seq};

proptest! {
    #[test]
    fn prop_seq_encodes_like_vec(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let seq = Seq::from(v.clone());
        prop_assert_eq!(to_string(&seq).unwrap(), to_string(&v).unwrap());
    }

    #[test]
    fn prop_arr_encodes_like_vec(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let arr = Arr::from(v.clone());
        prop_assert_eq!(to_string(&arr).unwrap(), to_string(&v).unwrap());
    }

    #[test]
    fn prop_seq_roundtrip(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let seq = Seq::from(v.clone());
        let back: Seq<i32> = from_str(&to_string(&seq).unwrap()).unwrap();
        prop_assert_eq!(back.iter().copied().collect::<Vec<_>>(), v);
    }

    #[test]
    fn prop_arr_roundtrip(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let arr = Arr::from(v.clone());
        let back: Arr<i32> = from_str(&to_string(&arr).unwrap()).unwrap();
        prop_assert_eq!(back.iter().copied().collect::<Vec<_>>(), v);
    }

    #[test]
    fn prop_string_elements_roundtrip(v in prop::collection::vec(".*", 0..10)) {
        let seq = Seq::from(v.clone());
        let back: Seq<String> = from_str(&to_string(&seq).unwrap()).unwrap();
        prop_assert_eq!(back.iter().cloned().collect::<Vec<_>>(), v);
    }

    #[test]
    fn prop_optional_seq_roundtrip(
        opt in proptest::option::of(prop::collection::vec(any::<i32>(), 0..10))
    ) {
        let optional_seq = opt.clone().map(Seq::from);
        let json = to_string(&optional_seq).unwrap();
        prop_assert_eq!(json == "null", opt.is_none());

        let back: Option<Seq<i32>> = from_str(&json).unwrap();
        prop_assert_eq!(back.map(|s| s.iter().copied().collect::<Vec<_>>()), opt);
    }

    #[test]
    fn prop_vec_json_parses_into_both_containers(v in prop::collection::vec(any::<i64>(), 0..20)) {
        let json = to_string(&v).unwrap();

        let seq: Seq<i64> = from_str(&json).unwrap();
        let arr: Arr<i64> = from_str(&json).unwrap();

        prop_assert_eq!(seq.as_slice(), v.as_slice());
        prop_assert_eq!(arr.as_slice(), v.as_slice());
    }
}
