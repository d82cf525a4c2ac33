//! Index search — jq's `indices`.
//!
//! Three strategies, chosen by the source/needle pairing:
//! literal substring search for text, contiguous-subsequence search for
//! arrays, and a deep-equality scan over immediate children for everything
//! else. Reported positions are strictly increasing.

use crate::children::children_of;
use crate::ctx::Ctx;
use crate::error::Result;
use crate::order::equals_deep;
use crate::value::Value;

/// All positions at which `needle` occurs in `source`.
///
/// - string source, string needle: byte offsets of every non-overlapping
///   literal match, left to right
/// - array source, array needle: every start index whose window is
///   element-wise deep-equal to the needle; overlapping occurrences are all
///   reported (the window slides by one)
/// - any other pairing: positions of the source's immediate children that
///   are deep-equal to the needle
///
/// An empty string or array needle matches nowhere. The scan aborts with
/// the first error it observes rather than returning partial results.
pub fn find_indices(ctx: &Ctx, source: &Value, needle: &Value) -> Result<Vec<usize>> {
    match (source, needle) {
        (Value::String(text), Value::String(pattern)) => text_indices(ctx, text, pattern),
        (Value::Array(items), Value::Array(window)) => subsequence_indices(ctx, items, window),
        _ => child_scan(ctx, source, needle),
    }
}

/// Non-overlapping literal matches: each hit advances the scan past itself.
fn text_indices(ctx: &Ctx, text: &str, pattern: &str) -> Result<Vec<usize>> {
    let mut positions = Vec::new();
    if pattern.is_empty() {
        return Ok(positions);
    }
    let mut start = 0;
    while let Some(offset) = text[start..].find(pattern) {
        ctx.checkpoint()?;
        positions.push(start + offset);
        start += offset + pattern.len();
        if start >= text.len() {
            break;
        }
    }
    Ok(positions)
}

/// Sliding-window subsequence search; overlapping matches all reported.
fn subsequence_indices(ctx: &Ctx, items: &[Value], window: &[Value]) -> Result<Vec<usize>> {
    let mut positions = Vec::new();
    if window.is_empty() || window.len() > items.len() {
        return Ok(positions);
    }
    for start in 0..=items.len() - window.len() {
        ctx.checkpoint()?;
        let mut matched = true;
        for (item, wanted) in items[start..start + window.len()].iter().zip(window) {
            if !equals_deep(ctx, item, wanted)? {
                matched = false;
                break;
            }
        }
        if matched {
            positions.push(start);
        }
    }
    Ok(positions)
}

/// Scalar scan over immediate children; leaves have none, so a scalar
/// source yields no positions.
fn child_scan(ctx: &Ctx, source: &Value, needle: &Value) -> Result<Vec<usize>> {
    let mut positions = Vec::new();
    for (position, (_, value)) in children_of(source).into_iter().enumerate() {
        ctx.checkpoint()?;
        if equals_deep(ctx, value, needle)? {
            positions.push(position);
        }
    }
    Ok(positions)
}
