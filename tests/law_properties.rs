//! Property-based tests for the combinator laws

use proptest::prelude::*;
use settle::prelude::*;
use settle::testing::settle_blocking;

fn outcome() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok),
        "[a-z]{1,8}".prop_map(Err),
    ]
}

proptest! {
    #[test]
    fn prop_map_identity(o in outcome()) {
        let mapped = settle_blocking(from_result(o.clone()).map(identity));
        prop_assert_eq!(mapped, o);
    }

    #[test]
    fn prop_map_composition(o in outcome()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);

        let composed = settle_blocking(from_result(o.clone()).map(compose(f, g)));
        let chained = settle_blocking(from_result(o).map(f).map(g));
        prop_assert_eq!(composed, chained);
    }

    #[test]
    fn prop_lift_homomorphism(x in any::<i32>()) {
        let f = |x: i32| x.wrapping_add(1);
        let lifted = settle_blocking(lift1(f, pure::<_, String>(x)));
        prop_assert_eq!(lifted, settle_blocking(pure::<_, String>(f(x))));
    }

    #[test]
    fn prop_lift_reports_lowest_index_failure(a in outcome(), b in outcome(), c in outcome()) {
        let expected = match (&a, &b, &c) {
            (Ok(x), Ok(y), Ok(z)) => Ok(x.wrapping_add(*y).wrapping_add(*z)),
            (Err(e), _, _) | (Ok(_), Err(e), _) | (Ok(_), Ok(_), Err(e)) => Err(e.clone()),
        };

        let lifted = lift3(
            |x: i32, y: i32, z: i32| x.wrapping_add(y).wrapping_add(z),
            from_result(a),
            from_result(b),
            from_result(c),
        );
        prop_assert_eq!(settle_blocking(lifted), expected);
    }

    #[test]
    fn prop_sequence_matches_collect(outcomes in prop::collection::vec(outcome(), 0..20)) {
        let expected: Result<Vec<i32>, String> = outcomes.iter().cloned().collect();
        let sequenced = settle_blocking(sequence(outcomes.into_iter().map(from_result)));
        prop_assert_eq!(sequenced, expected);
    }

    #[test]
    fn prop_traverse_preserves_order(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let expected: Vec<i64> = values.iter().map(|&x| i64::from(x) * 2).collect();
        let traversed = settle_blocking(traverse(values, |x| pure::<_, String>(i64::from(x) * 2)));
        prop_assert_eq!(traversed, Ok(expected));
    }

    #[test]
    fn prop_fold_matches_iterator_fold(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let expected = values.iter().fold(0i32, |acc, &x| acc.wrapping_add(x));
        let folded = settle_blocking(fold(values, 0i32, |acc, x| pure::<_, String>(acc.wrapping_add(x))));
        prop_assert_eq!(folded, Ok(expected));
    }

    #[test]
    fn prop_filter_matches_iterator_filter(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let expected: Vec<i32> = values.iter().copied().filter(|x| x % 3 == 0).collect();
        let kept = settle_blocking(filter(values, |x: &i32| pure::<_, String>(x % 3 == 0)));
        prop_assert_eq!(kept, Ok(expected));
    }

    #[test]
    fn prop_unfold_counts_up(start in 0u32..50, end in 0u32..50) {
        let expected: Vec<u32> = (start..=end).collect();
        let generated = settle_blocking(unfold(Vec::new(), start, move |mut acc: Vec<u32>, n: u32| {
            if n > end {
                return pure::<_, String>((acc, None));
            }
            acc.push(n);
            pure((acc, Some(n + 1)))
        }));
        prop_assert_eq!(generated, Ok(expected));
    }

    #[test]
    fn prop_recover_always_resolves(o in outcome()) {
        let recovered = settle_blocking(from_result(o.clone()).recover(|e: String| pure::<_, String>(e.len() as i32)));
        let expected = o.unwrap_or_else(|e| e.len() as i32);
        prop_assert_eq!(recovered, Ok(expected));
    }

    #[test]
    fn prop_map_err_leaves_success_untouched(o in outcome()) {
        let mapped = settle_blocking(from_result(o.clone()).map_err(|e| e.to_uppercase()));
        prop_assert_eq!(mapped, o.map_err(|e| e.to_uppercase()));
    }

    #[test]
    fn prop_bimap_matches_result_combinators(o in outcome()) {
        let expected: Result<i32, usize> = match &o {
            Ok(x) => Ok(x.wrapping_neg()),
            Err(e) => Err(e.len()),
        };
        let handled = settle_blocking(from_result(o).bimap(
            |x| Ok(x.wrapping_neg()),
            |e: String| reject::<i32, _>(e.len()),
        ));
        prop_assert_eq!(handled, expected);
    }
}
