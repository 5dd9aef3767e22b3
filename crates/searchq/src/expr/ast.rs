use crate::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

///
/// Expression AST
///
/// Pure representation of a query expression. This layer performs no
/// field-name or operator/value validation; all interpretation happens
/// on the search service that consumes the rendered string.
///

///
/// CompareOp
///
/// Comparison operators for single-value conditions. `StrictEq` is the
/// typed-equality token the query syntax requires for non-text values.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    StrictEq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl CompareOp {
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Eq => ":",
            Self::StrictEq => ":=",
            Self::Gt => ":>",
            Self::Gte => ":>=",
            Self::Lt => ":<",
            Self::Lte => ":<=",
        }
    }
}

///
/// RangeOp
///
/// Range operators carry their bracket kind; the closing bracket always
/// matches the opening one embedded in the operator token.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum RangeOp {
    Inclusive,
    Exclusive,
}

impl RangeOp {
    #[must_use]
    pub const fn opening(self) -> &'static str {
        match self {
            Self::Inclusive => ":[",
            Self::Exclusive => ":{",
        }
    }

    #[must_use]
    pub const fn closing(self) -> &'static str {
        match self {
            Self::Inclusive => "]",
            Self::Exclusive => "}",
        }
    }
}

///
/// LogicOp
///
/// Logical connectors. Used only as group join tokens, never on leaves.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LogicOp {
    And,
    AndNot,
    Or,
    OrNot,
}

impl LogicOp {
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::AndNot => "AND NOT",
            Self::Or => "OR",
            Self::OrNot => "OR NOT",
        }
    }
}

///
/// Condition
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl Condition {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl FieldValue) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.to_value(),
        }
    }
}

///
/// RangeCondition
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RangeCondition {
    pub field: String,
    pub op: RangeOp,
    pub from: Value,
    pub to: Value,
}

impl RangeCondition {
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        op: RangeOp,
        from: impl FieldValue,
        to: impl FieldValue,
    ) -> Self {
        Self {
            field: field.into(),
            op,
            from: from.to_value(),
            to: to.to_value(),
        }
    }
}

///
/// Group
///
/// Ordered, append-only child list joined by one logical connector.
/// Child order is preserved verbatim in the output.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub logic: LogicOp,
    pub children: Vec<Expr>,
}

impl Group {
    #[must_use]
    pub const fn new(logic: LogicOp) -> Self {
        Self {
            logic,
            children: Vec::new(),
        }
    }

    /// Append a child node in call order.
    pub fn push(&mut self, expr: Expr) {
        self.children.push(expr);
    }
}

///
/// Expr
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Condition(Condition),
    Range(RangeCondition),
    Group(Group),
}

impl From<Condition> for Expr {
    fn from(condition: Condition) -> Self {
        Self::Condition(condition)
    }
}

impl From<RangeCondition> for Expr {
    fn from(range: RangeCondition) -> Self {
        Self::Range(range)
    }
}

impl From<Group> for Expr {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}
