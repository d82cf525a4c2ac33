//! Sparse path-based projection — jq's `pick`.
//!
//! Walks each path against a source value and merges the discovered leaves
//! into one destination that contains only the requested material. Anything
//! requested but absent is present in the output as an explicit `null`,
//! never omitted.

use crate::ctx::Ctx;
use crate::error::{Error, Result};
use crate::path::{Path, Segment};
use crate::value::Value;

/// Project `source` onto `paths`.
///
/// The destination mirrors the source's Array/Object shape at every branch
/// point a path visits. An object key or array index missing from the source
/// stores an explicit `Null` at its requested position and ends that path's
/// walk; destination arrays grow with `Null` padding up to the requested
/// index. A walk that would have to continue through a `Null` — whether the
/// source itself or a null leaf mid-path — stores the explicit `Null` at its
/// current position and stops there. An empty path copies the whole source.
///
/// Picking from the output again with the same paths reproduces the output
/// (idempotent).
///
/// # Errors
///
/// [`Error::PathSegmentType`] when a segment's kind does not match the
/// source value it addresses (key into array, index into object, any
/// segment into a scalar); [`Error::Canceled`] when the context is canceled
/// mid-walk.
///
/// # Examples
///
/// ```
/// use valq_core::{pick, Ctx, Path, Value};
///
/// let source = Value::from(serde_json::json!({"a": 1, "b": {"c": 2, "d": 3}}));
/// let picked = pick(
///     &Ctx::new(),
///     &source,
///     &[Path::parse("a"), Path::parse("b.c"), Path::parse("x")],
/// )
/// .unwrap();
/// assert_eq!(
///     picked,
///     Value::from(serde_json::json!({"a": 1, "b": {"c": 2}, "x": null}))
/// );
/// ```
pub fn pick(ctx: &Ctx, source: &Value, paths: &[Path]) -> Result<Value> {
    let mut dest = Value::Null;
    for path in paths {
        pick_one(ctx, source, path, &mut dest)?;
    }
    Ok(dest)
}

/// Walk one path, writing what it finds into `dest`. Iterative: the cursor
/// pair (`src`, `node`) steps down both trees segment by segment, so the
/// call stack stays flat regardless of path length.
fn pick_one(ctx: &Ctx, source: &Value, path: &Path, dest: &mut Value) -> Result<()> {
    let mut src = source;
    let mut node = dest;
    let segments = path.segments();

    if segments.is_empty() {
        *node = src.clone();
        return Ok(());
    }

    for (depth, seg) in segments.iter().enumerate() {
        ctx.checkpoint()?;
        let last = depth + 1 == segments.len();

        match seg {
            Segment::Key(key) => {
                // Resolve against the source before touching the
                // destination, so a mismatch leaves it unmodified.
                let found = match src {
                    Value::Object(_) => src.key(key),
                    Value::Null => None,
                    other => {
                        return Err(Error::PathSegmentType {
                            kind: other.kind(),
                            segment: seg.to_string(),
                        })
                    }
                };
                let entries = object_entries(node);
                match found {
                    // Absent from source: explicit null, walk ends here.
                    None => {
                        set_entry(entries, key, Value::Null);
                        return Ok(());
                    }
                    Some(child) if last => {
                        set_entry(entries, key, child.clone());
                        return Ok(());
                    }
                    // A walk cannot continue through a null leaf; storing
                    // the explicit null here keeps pick idempotent.
                    Some(child) if child.is_null() => {
                        set_entry(entries, key, Value::Null);
                        return Ok(());
                    }
                    Some(child) => {
                        let pos = entry_slot(entries, key);
                        src = child;
                        node = &mut entries[pos].1;
                    }
                }
            }
            Segment::Index(index) => {
                let found = match src {
                    Value::Array(_) => src.at(*index),
                    Value::Null => None,
                    other => {
                        return Err(Error::PathSegmentType {
                            kind: other.kind(),
                            segment: seg.to_string(),
                        })
                    }
                };
                let items = array_items(node);
                if items.len() < index + 1 {
                    items.resize(index + 1, Value::Null);
                }
                match found {
                    // The grown slot already holds the explicit null.
                    None => return Ok(()),
                    Some(child) if last => {
                        items[*index] = child.clone();
                        return Ok(());
                    }
                    Some(child) if child.is_null() => {
                        items[*index] = Value::Null;
                        return Ok(());
                    }
                    Some(child) => {
                        src = child;
                        node = &mut items[*index];
                    }
                }
            }
        }
    }
    Ok(())
}

/// View `node` as object entries, materializing an empty object in place of
/// a fresh `Null` branch. Branch kinds never flip mid-pick: the source kind
/// at a given position is fixed, so a revisited branch is already an object.
fn object_entries(node: &mut Value) -> &mut Vec<(String, Value)> {
    if !matches!(node, Value::Object(_)) {
        *node = Value::Object(Vec::new());
    }
    match node {
        Value::Object(entries) => entries,
        _ => unreachable!("branch was just materialized as an object"),
    }
}

/// View `node` as array items, materializing an empty array in place of a
/// fresh `Null` branch.
fn array_items(node: &mut Value) -> &mut Vec<Value> {
    if !matches!(node, Value::Array(_)) {
        *node = Value::Array(Vec::new());
    }
    match node {
        Value::Array(items) => items,
        _ => unreachable!("branch was just materialized as an array"),
    }
}

fn set_entry(entries: &mut Vec<(String, Value)>, key: &str, value: Value) {
    if let Some(entry) = entries.iter_mut().find(|(k, _)| k == key) {
        entry.1 = value;
    } else {
        entries.push((key.to_string(), value));
    }
}

/// Position of `key` in `entries`, inserting a `Null` placeholder when
/// absent. The placeholder becomes a container on the next descent step.
fn entry_slot(entries: &mut Vec<(String, Value)>, key: &str) -> usize {
    match entries.iter().position(|(k, _)| k == key) {
        Some(pos) => pos,
        None => {
            entries.push((key.to_string(), Value::Null));
            entries.len() - 1
        }
    }
}
