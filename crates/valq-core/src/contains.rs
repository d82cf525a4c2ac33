//! Recursive containment, jq's `contains` relation.

use crate::ctx::Ctx;
use crate::error::Result;
use crate::order::equals_deep;
use crate::value::Value;

/// Whether `container` contains `needle`.
///
/// - string container: substring test (needle must be a string)
/// - array container: every needle element must be contained, recursively,
///   in **some** container element — membership, not positional matching
/// - object container: every needle key must exist in the container with a
///   value containing the needle's value
/// - any other pairing falls back to deep equality
///
/// Kind mismatches outside the three recursive forms are simply `false`,
/// never an error.
pub fn contains(ctx: &Ctx, container: &Value, needle: &Value) -> Result<bool> {
    ctx.checkpoint()?;

    match (container, needle) {
        (Value::String(haystack), Value::String(sub)) => Ok(haystack.contains(sub.as_str())),
        (Value::Array(items), Value::Array(wanted)) => {
            for w in wanted {
                let mut found = false;
                for item in items {
                    if contains(ctx, item, w)? {
                        found = true;
                        break;
                    }
                }
                if !found {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Object(_), Value::Object(wanted)) => {
            for (key, w) in wanted {
                let Some(held) = container.key(key) else {
                    return Ok(false);
                };
                if !contains(ctx, held, w)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        _ => equals_deep(ctx, container, needle),
    }
}
