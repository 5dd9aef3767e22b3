//! Rendering rules:
//!
//! - leaf conditions render as `field<token><value>`; ranges close with
//!   the bracket matching their opening token
//! - a group joins its children with ` <logic token> `; more than one
//!   rendered child wraps the join in parentheses, exactly one renders
//!   unwrapped, zero renders empty
//! - a child whose rendered text is empty (an empty sub-group) is dropped
//!   before joining, so no dangling connector can appear

use super::{Condition, Expr, Group, RangeCondition};
use std::fmt;

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op.token(), self.value)
    }
}

impl fmt::Display for RangeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} TO {}{}",
            self.field,
            self.op.opening(),
            self.from,
            self.to,
            self.op.closing()
        )
    }
}

impl Group {
    /// Rendered child texts, in append order, with empty renders dropped.
    /// Shared with `QueryBuilder::build`, which joins the root's parts
    /// without the wrapping parentheses.
    pub(crate) fn render_parts(&self) -> Vec<String> {
        self.children
            .iter()
            .map(ToString::to_string)
            .filter(|part| !part.is_empty())
            .collect()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = self.render_parts();
        match parts.len() {
            0 => Ok(()),
            1 => f.write_str(&parts.swap_remove(0)),
            _ => write!(f, "({})", parts.join(&format!(" {} ", self.logic.token()))),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Condition(condition) => condition.fmt(f),
            Self::Range(range) => range.fmt(f),
            Self::Group(group) => group.fmt(f),
        }
    }
}
