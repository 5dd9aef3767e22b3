use crate::{
    expr::{CompareOp, Condition, Expr, Group, LogicOp, RangeCondition, RangeOp},
    value::FieldValue,
};
use std::fmt;

///
/// QueryBuilder
///
/// Chainable accumulator for query expressions.
///
/// This builder:
/// - Appends leaf conditions to one root `Group` (top-level logic is `AND`)
/// - Spawns scoped sub-builders for nested groups and absorbs their
///   finished root as a single child node
/// - Is purely declarative: field names and operator/value pairings are
///   accepted as given and checked, if at all, by the search service
///
/// `build` is read-only and repeatable; the accumulated tree is never
/// mutated by rendering.
///

#[derive(Clone, Debug)]
pub struct QueryBuilder {
    root: Group,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Create a new empty query builder.
    #[must_use]
    pub const fn new() -> Self {
        Self::scoped(LogicOp::And)
    }

    const fn scoped(logic: LogicOp) -> Self {
        Self {
            root: Group::new(logic),
        }
    }

    // ------------------------------------------------------------------
    // Leaf conditions
    // ------------------------------------------------------------------

    /// Append a condition with an explicit comparison operator.
    #[must_use]
    pub fn filter(
        mut self,
        field: impl Into<String>,
        op: CompareOp,
        value: impl FieldValue,
    ) -> Self {
        self.root.push(Condition::new(field, op, value).into());
        self
    }

    /// Equality convenience. Text compares with the plain equality token;
    /// numeric and boolean values dispatch to the strict-equality token
    /// the query syntax requires for typed values.
    #[must_use]
    pub fn matches(self, field: impl Into<String>, value: impl FieldValue) -> Self {
        let value = value.to_value();
        let op = if value.is_text() {
            CompareOp::Eq
        } else {
            CompareOp::StrictEq
        };

        self.filter(field, op, value)
    }

    /// Strict equality regardless of value type.
    #[must_use]
    pub fn is(self, field: impl Into<String>, value: impl FieldValue) -> Self {
        self.filter(field, CompareOp::StrictEq, value)
    }

    /// Append an inclusive range condition (`field:[from TO to]`).
    #[must_use]
    pub fn between(
        mut self,
        field: impl Into<String>,
        from: impl FieldValue,
        to: impl FieldValue,
    ) -> Self {
        self.root
            .push(RangeCondition::new(field, RangeOp::Inclusive, from, to).into());
        self
    }

    /// Append an exclusive range condition (`field:{from TO to}`).
    #[must_use]
    pub fn strict_between(
        mut self,
        field: impl Into<String>,
        from: impl FieldValue,
        to: impl FieldValue,
    ) -> Self {
        self.root
            .push(RangeCondition::new(field, RangeOp::Exclusive, from, to).into());
        self
    }

    // ------------------------------------------------------------------
    // Nested groups
    // ------------------------------------------------------------------

    /// Build a scoped group without attaching it to a parent. The closure
    /// receives a fresh builder whose root uses `logic` and returns it
    /// populated; the finished root is handed back as a plain node.
    #[must_use]
    pub fn build_group(logic: LogicOp, f: impl FnOnce(Self) -> Self) -> Group {
        f(Self::scoped(logic)).root
    }

    /// Append a nested group built through `f`. Nesting composes to any
    /// depth: the closure may itself call `and`, `or`, or `group` on the
    /// builder it receives.
    #[must_use]
    pub fn group(mut self, logic: LogicOp, f: impl FnOnce(Self) -> Self) -> Self {
        self.root.push(Expr::Group(Self::build_group(logic, f)));
        self
    }

    /// Append a nested `AND` group.
    #[must_use]
    pub fn and(self, f: impl FnOnce(Self) -> Self) -> Self {
        self.group(LogicOp::And, f)
    }

    /// Append a nested `AND NOT` group.
    #[must_use]
    pub fn and_not(self, f: impl FnOnce(Self) -> Self) -> Self {
        self.group(LogicOp::AndNot, f)
    }

    /// Append a nested `OR` group.
    #[must_use]
    pub fn or(self, f: impl FnOnce(Self) -> Self) -> Self {
        self.group(LogicOp::Or, f)
    }

    /// Append a nested `OR NOT` group.
    #[must_use]
    pub fn or_not(self, f: impl FnOnce(Self) -> Self) -> Self {
        self.group(LogicOp::OrNot, f)
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render the accumulated expression to the final query string.
    ///
    /// The root's children are joined without the wrapping parentheses a
    /// nested group of the same shape would get; parentheses owned by
    /// nested groups are kept. An empty tree renders to `""`.
    #[must_use]
    pub fn build(&self) -> String {
        let mut parts = self.root.render_parts();
        match parts.len() {
            0 => String::new(),
            1 => parts.swap_remove(0),
            _ => parts.join(&format!(" {} ", self.root.logic.token())),
        }
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
