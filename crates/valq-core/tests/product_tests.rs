/// Cross-product object builder tests.
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use valq_core::{build_objects, Ctx, Error, Field, Value};

fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

fn values(items: &[serde_json::Value]) -> Vec<Value> {
    items.iter().cloned().map(Value::from).collect()
}

// ============================================================================
// 1. Product expansion
// ============================================================================

#[test]
fn single_by_double_field_yields_both_combinations_in_order() {
    let fields = vec![
        Field::from_values("name", values(&[serde_json::json!("alpha")])),
        Field::from_values(
            "value",
            values(&[serde_json::json!("value 1"), serde_json::json!("value 2")]),
        ),
    ];
    let objects: Vec<Value> = build_objects(&Ctx::new(), fields)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(
        Value::Array(objects),
        v(serde_json::json!([
            {"name": "alpha", "value": "value 1"},
            {"name": "alpha", "value": "value 2"}
        ]))
    );
}

#[test]
fn three_fields_expand_to_the_full_product() {
    let fields = vec![
        Field::from_values("a", values(&[serde_json::json!(1), serde_json::json!(2)])),
        Field::from_values("b", values(&[serde_json::json!("x"), serde_json::json!("y")])),
        Field::from_values("c", values(&[serde_json::json!(true), serde_json::json!(false)])),
    ];
    let objects: Vec<Value> = build_objects(&Ctx::new(), fields)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(objects.len(), 8);
    // Rightmost field varies fastest.
    assert_eq!(
        objects[0],
        v(serde_json::json!({"a": 1, "b": "x", "c": true}))
    );
    assert_eq!(
        objects[1],
        v(serde_json::json!({"a": 1, "b": "x", "c": false}))
    );
    assert_eq!(
        objects[7],
        v(serde_json::json!({"a": 2, "b": "y", "c": false}))
    );
}

#[test]
fn a_field_with_no_values_empties_the_whole_product() {
    let fields = vec![
        Field::from_values("a", values(&[serde_json::json!(1), serde_json::json!(2)])),
        Field::from_values("b", Vec::new()),
        Field::from_values("c", values(&[serde_json::json!(3)])),
    ];
    let objects: Vec<Value> = build_objects(&Ctx::new(), fields)
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(objects.is_empty());
}

#[test]
fn no_fields_yields_the_empty_object_exactly_once() {
    let objects: Vec<Value> = build_objects(&Ctx::new(), Vec::new())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(objects, vec![v(serde_json::json!({}))]);
}

#[test]
fn later_fields_replay_once_per_earlier_combination() {
    let replays = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&replays);
    let fields = vec![
        Field::from_values(
            "outer",
            values(&[serde_json::json!(1), serde_json::json!(2), serde_json::json!(3)]),
        ),
        Field::new("inner", move || {
            counter.set(counter.get() + 1);
            Box::new([Ok((0, Value::Bool(true)))].into_iter())
        }),
    ];
    let objects: Vec<Value> = build_objects(&Ctx::new(), fields)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(objects.len(), 3);
    assert_eq!(replays.get(), 3, "inner stream must be produced fresh per outer value");
}

// ============================================================================
// 2. Error propagation
// ============================================================================

#[test]
fn stream_error_aborts_the_expansion() {
    let fields = vec![
        Field::from_values("a", values(&[serde_json::json!(1)])),
        Field::new("b", || {
            Box::new(
                [
                    Ok((0, Value::from("first"))),
                    Err(Error::CastMismatch {
                        expected: "string",
                        found: "number",
                    }),
                    Ok((2, Value::from("unreached"))),
                ]
                .into_iter(),
            )
        }),
    ];
    let mut products = build_objects(&Ctx::new(), fields);

    let first = products.next().unwrap().unwrap();
    assert_eq!(
        first,
        v(serde_json::json!({"a": 1, "b": "first"}))
    );
    assert_eq!(
        products.next().unwrap(),
        Err(Error::CastMismatch {
            expected: "string",
            found: "number",
        })
    );
    assert!(products.next().is_none(), "iterator is fused after an error");
}

// ============================================================================
// 3. Cancellation
// ============================================================================

#[test]
fn cancellation_stops_emission_between_combinations() {
    let flag = Arc::new(AtomicBool::new(false));
    let ctx = Ctx::with_cancel(Arc::clone(&flag));
    let fields = vec![Field::from_values(
        "n",
        values(&[serde_json::json!(1), serde_json::json!(2), serde_json::json!(3)]),
    )];
    let mut products = build_objects(&ctx, fields);

    assert!(products.next().unwrap().is_ok());
    flag.store(true, Ordering::Relaxed);
    assert_eq!(products.next().unwrap(), Err(Error::Canceled));
    assert!(products.next().is_none());
}
