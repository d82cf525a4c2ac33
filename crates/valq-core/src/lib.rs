//! # valq-core
//!
//! Pure-Rust implementation of **jq's value semantics** — the total order,
//! containment relation, path addressing, and product construction
//! popularized by the `jq` query tool, reimplemented as pure algorithms
//! over an owned JSON value model.
//!
//! Everything here is invoked programmatically: there is no query-language
//! parser, no I/O, and no long-lived state. Callers compose these
//! primitives with their own accessor machinery; the crate supplies the
//! value model, the algorithms, and the cancellation/error contract at that
//! boundary.
//!
//! ## Quick start
//!
//! ```rust
//! use valq_core::{pick, sort_values, Ctx, Path, Value};
//!
//! let ctx = Ctx::new();
//!
//! // jq's total order: null < booleans < numbers < strings < arrays < objects
//! let mut values = vec![Value::from(8.0), Value::from(3.0), Value::Null, Value::from(6.0)];
//! sort_values(&ctx, &mut values).unwrap();
//! assert_eq!(values[0], Value::Null);
//!
//! // Sparse projection: keep only the requested leaves
//! let source = Value::from(serde_json::json!({"a": 1, "b": {"c": 2, "d": 3}}));
//! let picked = pick(&ctx, &source, &[Path::parse("b.c")]).unwrap();
//! assert_eq!(picked, Value::from(serde_json::json!({"b": {"c": 2}})));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the closed six-kind JSON value model
//! - [`order`] — total ordering, deep equality, sorting
//! - [`contains`] — recursive containment
//! - [`path`] + [`pick`] — path addressing and sparse projection
//! - [`children`] — indexed child views, reconstruction, deep merge
//! - [`search`] — substring/subsequence/scalar index search
//! - [`product`] — lazy cross-product object construction
//! - [`label`] — labeled non-local exit for traversals
//! - [`ctx`] — execution context with the shared cancellation flag
//! - [`error`] — error types

pub mod children;
pub mod contains;
pub mod ctx;
pub mod error;
pub mod label;
pub mod order;
pub mod path;
pub mod pick;
pub mod product;
pub mod search;
pub mod value;

pub use children::{child, child_strict, children_of, children_strict, merge, reconstruct};
pub use contains::contains;
pub use ctx::Ctx;
pub use error::{Error, Result};
pub use label::{break_signal, label_scope, stop_on, traverse, Flow, StopOn};
pub use order::{compare, equals_deep, sort_values};
pub use path::{Path, Segment};
pub use pick::pick;
pub use product::{build_objects, Field, FieldValues, ObjectProducts};
pub use search::find_indices;
pub use value::Value;
