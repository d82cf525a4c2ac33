//! Labeled non-local exit for streaming traversals.
//!
//! A break is a typed control signal, not a failure: [`break_signal`]
//! produces it, and the nearest enclosing [`label_scope`] holding the same
//! name intercepts it, ending that scope's output without failing the whole
//! operation. A break whose name no scope holds escapes to the caller as a
//! genuine [`Error::Break`]. Matching is by label name — a string
//! comparison, never a downcast.

use crate::ctx::Ctx;
use crate::error::{Error, Result};
use crate::value::Value;

/// The control signal that requests an exit from the scope named `label`.
pub fn break_signal(label: impl Into<String>) -> Error {
    Error::Break(label.into())
}

/// Outcome of visiting one element during a labeled traversal.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Keep this value and continue.
    Continue(Value),
    /// Exit the scope carrying this label.
    Break(String),
}

/// Stop-on-predicate combinator over a value stream.
///
/// The first item matching the predicate is swallowed and production
/// ceases from that point; everything else passes through. An error that
/// passes through (not matching the predicate) also ends production — a
/// stream never continues past an observed failure.
pub struct StopOn<I, P> {
    inner: I,
    predicate: P,
    done: bool,
}

pub fn stop_on<I, P>(stream: I, predicate: P) -> StopOn<I::IntoIter, P>
where
    I: IntoIterator<Item = Result<Value>>,
    P: FnMut(&Result<Value>) -> bool,
{
    StopOn {
        inner: stream.into_iter(),
        predicate,
        done: false,
    }
}

impl<I, P> Iterator for StopOn<I, P>
where
    I: Iterator<Item = Result<Value>>,
    P: FnMut(&Result<Value>) -> bool,
{
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.inner.next()?;
        if (self.predicate)(&item) {
            self.done = true;
            return None;
        }
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}

/// Wrap a stream in a scope that intercepts `break_signal(label)`.
///
/// A matching break underneath the scope stops further output without
/// failing it. A break carrying any other name passes through as an
/// ordinary error, for an outer scope — or ultimately the caller — to deal
/// with.
///
/// # Examples
///
/// ```
/// use valq_core::{break_signal, label_scope, Value};
///
/// let stream = vec![
///     Ok(Value::from(1.0)),
///     Ok(Value::from(2.0)),
///     Err(break_signal("early")),
///     Ok(Value::from(3.0)),
/// ];
/// let collected: Result<Vec<_>, _> = label_scope("early", stream).collect();
/// assert_eq!(collected.unwrap().len(), 2);
/// ```
pub fn label_scope<I>(
    label: impl Into<String>,
    stream: I,
) -> StopOn<I::IntoIter, impl FnMut(&Result<Value>) -> bool>
where
    I: IntoIterator<Item = Result<Value>>,
{
    let label = label.into();
    stop_on(stream, move |item| {
        matches!(item, Err(Error::Break(name)) if *name == label)
    })
}

/// Visit `values` in order, collecting what the visitor keeps, until it
/// breaks out.
///
/// The visitor decides per element: [`Flow::Continue`] keeps the (possibly
/// transformed) value, [`Flow::Break`] with this scope's label ends the
/// traversal early with everything collected so far, and a break carrying
/// any other label surfaces as [`Error::Break`]. Visitor errors propagate
/// unchanged.
pub fn traverse<'v, I, F>(ctx: &Ctx, label: &str, values: I, mut visit: F) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = &'v Value>,
    F: FnMut(&Value) -> Result<Flow>,
{
    let mut kept = Vec::new();
    for value in values {
        ctx.checkpoint()?;
        match visit(value)? {
            Flow::Continue(mapped) => kept.push(mapped),
            Flow::Break(name) if name == label => return Ok(kept),
            Flow::Break(name) => return Err(Error::Break(name)),
        }
    }
    Ok(kept)
}
