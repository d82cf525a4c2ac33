//! Total ordering and deep equality over values, jq semantics.
//!
//! The order, smallest to largest:
//! `null < false < true < numbers < strings < arrays < objects`.
//! Cross-kind comparison is decided by that priority alone; same-kind
//! comparison recurses structurally. The order is total: any two values are
//! fully ordered, and equality is exactly `compare == Equal`.

use std::cmp::Ordering;

use crate::ctx::Ctx;
use crate::error::Result;
use crate::value::Value;

/// Kind priority for cross-kind comparison.
fn kind_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn entry<'e>(entries: &'e [(String, Value)], key: &str) -> Option<&'e Value> {
    entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Compare two values under the jq total order.
///
/// Never fails on its own; the `Result` carries only the cancellation
/// condition, checked once per visited node so that comparing pathologically
/// large structures aborts promptly.
///
/// Same-kind rules:
/// - numbers: IEEE ordering (incomparable pairs treated as equal)
/// - strings: byte-wise lexicographic
/// - arrays: element-wise lexicographic; a strict prefix sorts first
/// - objects: sorted key sequences compared first (as arrays of text); with
///   identical key sets, values compared in ascending key order
pub fn compare(ctx: &Ctx, a: &Value, b: &Value) -> Result<Ordering> {
    ctx.checkpoint()?;

    let rank = kind_rank(a).cmp(&kind_rank(b));
    if rank != Ordering::Equal {
        return Ok(rank);
    }

    match (a, b) {
        (Value::Null, Value::Null) => Ok(Ordering::Equal),
        (Value::Bool(x), Value::Bool(y)) => Ok(x.cmp(y)),
        (Value::Number(x), Value::Number(y)) => Ok(x.partial_cmp(y).unwrap_or(Ordering::Equal)),
        (Value::String(x), Value::String(y)) => Ok(x.cmp(y)),
        (Value::Array(x), Value::Array(y)) => {
            for (xv, yv) in x.iter().zip(y.iter()) {
                match compare(ctx, xv, yv)? {
                    Ordering::Equal => continue,
                    decided => return Ok(decided),
                }
            }
            Ok(x.len().cmp(&y.len()))
        }
        (Value::Object(x), Value::Object(y)) => {
            let mut x_keys: Vec<&str> = x.iter().map(|(k, _)| k.as_str()).collect();
            let mut y_keys: Vec<&str> = y.iter().map(|(k, _)| k.as_str()).collect();
            x_keys.sort_unstable();
            y_keys.sort_unstable();

            // Key sets decide first, compared as sorted arrays of text.
            for (xk, yk) in x_keys.iter().zip(y_keys.iter()) {
                match xk.cmp(yk) {
                    Ordering::Equal => continue,
                    decided => return Ok(decided),
                }
            }
            match x_keys.len().cmp(&y_keys.len()) {
                Ordering::Equal => {}
                decided => return Ok(decided),
            }

            // Identical key sets: first differing value in ascending key
            // order decides.
            for key in x_keys {
                let (Some(xv), Some(yv)) = (entry(x, key), entry(y, key)) else {
                    // Unique-key invariant makes this unreachable.
                    continue;
                };
                match compare(ctx, xv, yv)? {
                    Ordering::Equal => continue,
                    decided => return Ok(decided),
                }
            }
            Ok(Ordering::Equal)
        }
        // Ranks matched above, so the kinds are equal.
        _ => Ok(Ordering::Equal),
    }
}

/// Deep equality: `compare(a, b) == Equal`.
pub fn equals_deep(ctx: &Ctx, a: &Value, b: &Value) -> Result<bool> {
    Ok(compare(ctx, a, b)? == Ordering::Equal)
}

/// Sort a slice in place under the jq total order (stable).
///
/// Cancellation observed mid-sort leaves the slice in an unspecified
/// permutation of its input and reports [`Error::Canceled`].
///
/// [`Error::Canceled`]: crate::error::Error::Canceled
pub fn sort_values(ctx: &Ctx, values: &mut [Value]) -> Result<()> {
    let mut failure = None;
    values.sort_by(|a, b| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        match compare(ctx, a, b) {
            Ok(ordering) => ordering,
            Err(e) => {
                failure = Some(e);
                Ordering::Equal
            }
        }
    });
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
