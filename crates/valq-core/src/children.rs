//! Indexed view of a value's immediate members.
//!
//! This is the seam generic tree algorithms use to stay uniform over arrays
//! and objects: objects expose `Key` segments, arrays expose `Index`
//! segments, leaves expose nothing. [`reconstruct`] closes the loop by
//! rebuilding a value of the original shape from a (possibly filtered,
//! possibly reordered) child list, and [`merge`] is the recursive merge
//! algorithm expressed through that seam.

use crate::ctx::Ctx;
use crate::error::{Error, Result};
use crate::path::Segment;
use crate::value::Value;

/// The immediate children of `value`, in iteration order.
///
/// Lenient: a leaf (null, boolean, number, string) has no children and
/// yields an empty list.
pub fn children_of(value: &Value) -> Vec<(Segment, &Value)> {
    match value {
        Value::Object(entries) => entries
            .iter()
            .map(|(k, v)| (Segment::Key(k.clone()), v))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (Segment::Index(i), v))
            .collect(),
        _ => Vec::new(),
    }
}

/// Strict variant of [`children_of`]: a leaf is an error.
pub fn children_strict(value: &Value) -> Result<Vec<(Segment, &Value)>> {
    match value {
        Value::Object(_) | Value::Array(_) => Ok(children_of(value)),
        other => Err(Error::NotTraversable { kind: other.kind() }),
    }
}

/// Point access to one child, without materializing the full child list.
///
/// Lenient: a missing key, an out-of-range index, or a segment/value kind
/// mismatch all yield `None`.
pub fn child<'v>(value: &'v Value, segment: &Segment) -> Option<&'v Value> {
    match segment {
        Segment::Key(key) => value.key(key),
        Segment::Index(index) => value.at(*index),
    }
}

/// Strict variant of [`child`]: a kind mismatch is [`Error::CastMismatch`],
/// a missing child is [`Error::MissingChild`].
pub fn child_strict<'v>(value: &'v Value, segment: &Segment) -> Result<&'v Value> {
    let expected = match segment {
        Segment::Key(_) => "object",
        Segment::Index(_) => "array",
    };
    if value.kind() != expected {
        return Err(Error::CastMismatch {
            expected,
            found: value.kind(),
        });
    }
    child(value, segment).ok_or_else(|| Error::MissingChild {
        segment: segment.to_string(),
        kind: value.kind(),
    })
}

/// Rebuild a value of the same shape as `shape` from a child list.
///
/// An object stays an object, keyed by the `Key` segments (an `Index`
/// segment is stringified); an array stays an array, densely reindexed in
/// list order. Non-container shapes are returned unchanged — there is
/// nothing to rebuild.
pub fn reconstruct(shape: &Value, children: Vec<(Segment, Value)>) -> Value {
    match shape {
        Value::Object(_) => Value::Object(
            children
                .into_iter()
                .map(|(seg, v)| {
                    let key = match seg {
                        Segment::Key(k) => k,
                        Segment::Index(i) => i.to_string(),
                    };
                    (key, v)
                })
                .collect(),
        ),
        Value::Array(_) => Value::Array(children.into_iter().map(|(_, v)| v).collect()),
        other => other.clone(),
    }
}

/// Recursive deep merge, right operand winning.
///
/// Two containers of the same kind merge child-wise over the union of their
/// keys/positions: children present on both sides merge recursively,
/// one-sided children pass through unchanged. Any other pairing — leaf
/// against leaf, container against leaf, array against object — replaces
/// left with right.
pub fn merge(ctx: &Ctx, left: &Value, right: &Value) -> Result<Value> {
    ctx.checkpoint()?;

    let same_container = matches!(
        (left, right),
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_))
    );
    if !same_container {
        return Ok(right.clone());
    }

    let mut merged: Vec<(Segment, Value)> = Vec::new();
    for (seg, left_child) in children_of(left) {
        let value = match child(right, &seg) {
            Some(right_child) => merge(ctx, left_child, right_child)?,
            None => left_child.clone(),
        };
        merged.push((seg, value));
    }
    for (seg, right_child) in children_of(right) {
        if child(left, &seg).is_none() {
            merged.push((seg, right_child.clone()));
        }
    }
    Ok(reconstruct(left, merged))
}
