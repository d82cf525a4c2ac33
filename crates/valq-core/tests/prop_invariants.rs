/// Property-based invariant tests.
///
/// Uses the `proptest` crate to generate random values and verify the
/// algebraic guarantees the algorithms advertise: the comparator is a strict
/// total order, pick is idempotent, index search is strictly increasing,
/// containers contain themselves, and reconstruction/merge round-trip.
///
/// Strategies generate values up to 3 levels deep with unique object keys
/// (the model's invariant) and finite numbers only — JSON has no NaN, and a
/// NaN would make the "reflexive equality" property vacuous.
use std::cmp::Ordering;

use proptest::prelude::*;
use valq_core::{
    children_of, compare, contains, equals_deep, find_indices, merge, pick, reconstruct,
    sort_values, Ctx, Path, Segment, Value,
};

// ============================================================================
// Strategies
// ============================================================================

/// Generate a leaf value: null, booleans, finite numbers, short strings.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(|n| Value::Number(n as f64)),
        // Fractional numbers with a few decimal places.
        (-10_000i64..10_000i64, 1u32..4u32)
            .prop_map(|(mantissa, decimals)| Value::Number(
                mantissa as f64 / 10f64.powi(decimals as i32)
            )),
        "[a-z0-9]{0,8}".prop_map(Value::String),
    ]
}

/// Generate a value with limited nesting. Object keys come from a
/// `btree_map` strategy, which guarantees uniqueness.
fn arb_value_inner(depth: u32) -> impl Strategy<Value = Value> {
    if depth == 0 {
        arb_leaf().boxed()
    } else {
        prop_oneof![
            3 => arb_leaf(),
            1 => prop::collection::btree_map("[a-d]{1,3}", arb_value_inner(depth - 1), 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
            1 => prop::collection::vec(arb_value_inner(depth - 1), 0..4)
                .prop_map(Value::Array),
        ]
        .boxed()
    }
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_inner(3)
}

/// Generate a path over a small segment alphabet, so that paths regularly
/// hit — and regularly miss — the values generated above.
fn arb_path() -> impl Strategy<Value = Path> {
    let segment = prop_oneof![
        "[a-d]{1,3}".prop_map(Segment::Key),
        (0usize..4).prop_map(Segment::Index),
    ];
    prop::collection::vec(segment, 0..4).prop_map(Path::from_segments)
}

// ============================================================================
// Comparator: strict total order
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// equals_deep(a, a) always holds.
    #[test]
    fn equality_is_reflexive(a in arb_value()) {
        let ctx = Ctx::new();
        prop_assert!(equals_deep(&ctx, &a, &a).unwrap());
    }

    /// compare(a, b) is the reverse of compare(b, a).
    #[test]
    fn comparison_is_antisymmetric(a in arb_value(), b in arb_value()) {
        let ctx = Ctx::new();
        let forward = compare(&ctx, &a, &b).unwrap();
        let backward = compare(&ctx, &b, &a).unwrap();
        prop_assert_eq!(forward, backward.reverse());
    }

    /// a <= b and b <= c imply a <= c.
    #[test]
    fn comparison_is_transitive(a in arb_value(), b in arb_value(), c in arb_value()) {
        let ctx = Ctx::new();
        let ab = compare(&ctx, &a, &b).unwrap();
        let bc = compare(&ctx, &b, &c).unwrap();
        let ac = compare(&ctx, &a, &c).unwrap();
        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert_ne!(ac, Ordering::Greater, "{} <= {} <= {} but {} > {}", a, b, c, a, c);
        }
    }

    /// After sort_values, no adjacent pair is out of order.
    #[test]
    fn sorting_orders_every_adjacent_pair(mut values in prop::collection::vec(arb_value(), 0..8)) {
        let ctx = Ctx::new();
        sort_values(&ctx, &mut values).unwrap();
        for window in values.windows(2) {
            prop_assert_ne!(
                compare(&ctx, &window[0], &window[1]).unwrap(),
                Ordering::Greater
            );
        }
    }
}

// ============================================================================
// Pick: idempotence
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// pick(pick(v, P), P) == pick(v, P) whenever the first pick succeeds.
    #[test]
    fn pick_is_idempotent(
        value in arb_value(),
        paths in prop::collection::vec(arb_path(), 0..4),
    ) {
        let ctx = Ctx::new();
        if let Ok(once) = pick(&ctx, &value, &paths) {
            let twice = pick(&ctx, &once, &paths).unwrap();
            prop_assert_eq!(&twice, &once, "source {} paths {:?}", value, paths);
        }
    }
}

// ============================================================================
// Index search: strictly increasing positions
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn indices_are_strictly_increasing(source in arb_value(), needle in arb_value()) {
        let positions = find_indices(&Ctx::new(), &source, &needle).unwrap();
        for window in positions.windows(2) {
            prop_assert!(window[0] < window[1], "positions not increasing: {:?}", positions);
        }
    }
}

// ============================================================================
// Containment: self-containment
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every finite value contains itself — containers by the recursive
    /// rules, scalars by the equality fallback.
    #[test]
    fn values_contain_themselves(value in arb_value()) {
        prop_assert!(contains(&Ctx::new(), &value, &value).unwrap());
    }
}

// ============================================================================
// Children and merge: structural round-trips
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// reconstruct(v, children_of(v)) == v.
    #[test]
    fn reconstruction_from_full_children_is_identity(value in arb_value()) {
        let children = children_of(&value)
            .into_iter()
            .map(|(seg, child)| (seg, child.clone()))
            .collect();
        prop_assert_eq!(reconstruct(&value, children), value);
    }

    /// merge(v, v) == v.
    #[test]
    fn merge_with_itself_is_identity(value in arb_value()) {
        let merged = merge(&Ctx::new(), &value, &value).unwrap();
        prop_assert_eq!(merged, value);
    }
}

// ============================================================================
// Marshaling boundary: serde_json::Value round-trip
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Converting to the external marshaler's value type and back preserves
    /// every finite value, nulls included.
    #[test]
    fn serde_json_conversion_round_trips(value in arb_value()) {
        let external: serde_json::Value = value.clone().into();
        prop_assert_eq!(Value::from(external), value);
    }
}
