//! Cross-product object construction.
//!
//! Combines several independently multi-valued named fields into the full
//! set of per-combination objects, lazily, in field order. A field's values
//! arrive as a *stream source*: a closure producing a fresh indexed stream
//! each time the expansion needs to replay that field for a new combination
//! of the fields before it.

use crate::ctx::Ctx;
use crate::error::Result;
use crate::value::Value;

/// One indexed, possibly-erroring stream of field values, consumed once.
pub type FieldValues = Box<dyn Iterator<Item = Result<(usize, Value)>>>;

/// A named field backed by a replayable stream source.
pub struct Field {
    name: String,
    source: Box<dyn Fn() -> FieldValues>,
}

impl Field {
    /// A field whose values come from `source`, invoked once per replay.
    pub fn new(name: impl Into<String>, source: impl Fn() -> FieldValues + 'static) -> Self {
        Self {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// A field backed by an in-memory value list; each replay yields the
    /// values in order, indexed from zero.
    pub fn from_values(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(name, move || {
            Box::new(
                values
                    .clone()
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| Ok((index, value))),
            )
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Lazily build the cartesian product of `fields`, one object per
/// combination.
///
/// Field order is preserved in every emitted object. A field that yields no
/// values empties every combination through it; with no fields at all, a
/// single empty object is emitted. The first error observed from any stream
/// (or from cancellation) is surfaced to the consumer and ends the
/// expansion — the iterator is fused afterwards.
///
/// # Examples
///
/// ```
/// use valq_core::{build_objects, Ctx, Field, Value};
///
/// let fields = vec![
///     Field::from_values("name", vec![Value::from("alpha")]),
///     Field::from_values("value", vec![Value::from("value 1"), Value::from("value 2")]),
/// ];
/// let objects: Result<Vec<_>, _> = build_objects(&Ctx::new(), fields).collect();
/// assert_eq!(objects.unwrap().len(), 2);
/// ```
pub fn build_objects(ctx: &Ctx, fields: Vec<Field>) -> ObjectProducts {
    ObjectProducts {
        ctx: ctx.clone(),
        fields,
        active: Vec::new(),
        chosen: Vec::new(),
        started: false,
        done: false,
    }
}

/// Iterator over the product set. Runs as an explicit odometer: one live
/// stream per field depth, advanced rightmost-first, with exhausted streams
/// popped and replayed fresh when an earlier field moves on.
pub struct ObjectProducts {
    ctx: Ctx,
    fields: Vec<Field>,
    /// Live stream for each field depth currently being expanded.
    active: Vec<FieldValues>,
    /// Value chosen at each depth above the one being advanced;
    /// `chosen.len() == active.len() - 1` on entry to the advance loop.
    chosen: Vec<(String, Value)>,
    started: bool,
    done: bool,
}

impl Iterator for ObjectProducts {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            if self.fields.is_empty() {
                // Base case: no fields yields the empty object exactly once.
                self.done = true;
                return Some(Ok(Value::Object(Vec::new())));
            }
            self.active.push((self.fields[0].source)());
        }

        loop {
            if let Err(e) = self.ctx.checkpoint() {
                self.done = true;
                return Some(Err(e));
            }
            let next_item = match self.active.last_mut() {
                Some(stream) => stream.next(),
                None => {
                    self.done = true;
                    return None;
                }
            };
            let depth = self.active.len() - 1;
            match next_item {
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                Some(Ok((_, value))) => {
                    self.chosen.push((self.fields[depth].name.clone(), value));
                    if depth + 1 == self.fields.len() {
                        let object = Value::Object(self.chosen.clone());
                        self.chosen.pop();
                        return Some(Ok(object));
                    }
                    self.active.push((self.fields[depth + 1].source)());
                }
                None => {
                    self.active.pop();
                    if self.active.is_empty() {
                        self.done = true;
                        return None;
                    }
                    self.chosen.pop();
                }
            }
        }
    }
}
