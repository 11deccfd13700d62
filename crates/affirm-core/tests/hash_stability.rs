use affirm_core::{combine_pair_hashes, stable_hash, DefaultEquality, EqualityComparer};
use proptest::prelude::*;

#[test]
fn stable_hash_is_process_independent() {
    let first: Vec<u64> = (0..100u64).map(|v| stable_hash(&v)).collect();
    let second: Vec<u64> = (0..100u64).map(|v| stable_hash(&v)).collect();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn default_equality_is_hash_consistent(a in any::<i16>(), b in any::<i16>()) {
        if DefaultEquality.equals(&a, &b) {
            prop_assert_eq!(DefaultEquality.hash_of(&a), DefaultEquality.hash_of(&b));
        }
    }

    #[test]
    fn strings_hash_like_their_slices(text in ".{0,16}") {
        prop_assert_eq!(stable_hash(text.as_str()), stable_hash(&text));
    }

    #[test]
    fn pair_combination_matches_formula(k in any::<u64>(), v in any::<u64>()) {
        prop_assert_eq!(combine_pair_hashes(k, v), k.wrapping_mul(31).wrapping_add(v));
    }
}
