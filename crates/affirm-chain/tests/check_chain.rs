use std::cell::Cell;

use affirm_chain::{check, check_many};
use proptest::prelude::*;

#[test]
fn predicates_after_a_failure_are_not_invoked() {
    let calls = Cell::new(0);
    let counted = |_: &i32| {
        calls.set(calls.get() + 1);
        true
    };
    let outcome = check(5).that(|v| *v < 0).that(counted).not(counted).result();
    assert!(!outcome);
    assert_eq!(calls.get(), 0);
}

#[test]
fn sequence_short_circuit_reads_nothing_more() {
    let pulled = Cell::new(0);
    let source = (0..10).inspect(|_| pulled.set(pulled.get() + 1));
    let chain = check_many(source)
        .that_any(|n| *n == 2)
        .that_all(|n| *n > 100)
        .that(|items| items.len() == 10);
    assert!(!chain.result());
    assert_eq!(chain.buffered(), &[0, 1, 2]);
    assert_eq!(pulled.get(), 3);
}

#[test]
fn predicate_panics_propagate_unchanged() {
    let payload =
        std::panic::catch_unwind(|| check(1).that(|_| panic!("predicate failed hard")).result())
            .expect_err("panic escapes the chain");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"predicate failed hard"));

    let payload = std::panic::catch_unwind(|| {
        check_many(vec![1, 2])
            .that_any(|_| std::panic::panic_any(42u32))
            .result()
    })
    .expect_err("panic escapes the chain");
    assert_eq!(payload.downcast_ref::<u32>(), Some(&42));
}

proptest! {
    #[test]
    fn that_matches_the_predicate(x in any::<i64>(), bound in any::<i64>()) {
        prop_assert_eq!(check(x).that(|v| *v < bound).result(), x < bound);
    }

    #[test]
    fn not_is_the_negated_predicate(x in any::<i64>(), bound in any::<i64>()) {
        prop_assert_eq!(check(x).not(|v| *v < bound).result(), x >= bound);
        prop_assert_eq!(
            check(x).not(|v| *v < bound).result(),
            check(x).that(|v| !(*v < bound)).result()
        );
    }

    #[test]
    fn chain_is_the_conjunction(x in any::<u16>(), a in any::<u16>(), b in any::<u16>()) {
        let outcome = check(x).that(|v| *v >= a).not(|v| *v > b).result();
        prop_assert_eq!(outcome, x >= a && x <= b);
    }

    #[test]
    fn membership_agrees_with_iterator_adapters(items in prop::collection::vec(0u8..20, 0..30), needle in 0u8..20) {
        prop_assert_eq!(
            check_many(items.clone()).that_any(|n| *n == needle).result(),
            items.iter().any(|n| *n == needle)
        );
        prop_assert_eq!(
            check_many(items.clone()).that_all(|n| *n != needle).result(),
            items.iter().all(|n| *n != needle)
        );
    }
}
