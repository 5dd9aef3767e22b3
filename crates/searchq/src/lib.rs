//! Typed expression builder for search-engine query strings: conditions,
//! range conditions, and nested logical groups, accumulated through a
//! fluent `QueryBuilder` and rendered to the `field:op:value` syntax the
//! search endpoint consumes.

// public exports are one module level down
pub mod builder;
pub mod expr;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No rendering internals or conversion helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        builder::QueryBuilder,
        expr::{CompareOp, Expr, Group, LogicOp},
        value::{FieldValue, Float64, Value},
    };
}
