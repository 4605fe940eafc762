//! A boolean expression replaced by its negation.

use crate::node::{SyntaxNode, UnaryOperator};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::{
    counterparts, enclosing_condition, is_boolean, is_negation_of, is_positioned, is_unary,
};
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::NegateConditional`].
#[derive(Debug)]
pub enum NegateConditional<N> {
    /// A boolean expression (or a `!` application) was deleted or inserted.
    Captured {
        /// That expression
        expression: N,
    },
}

impl<N: SyntaxNode> Pattern for NegateConditional<N> {
    type Node = N;

    const FAMILY: Family = Family::NegateConditional;

    fn start(op: &Operation<N>) -> Step<Self> {
        let expression = match *op {
            Operation::Insert(node) | Operation::Delete(node) => node,
            _ => return Step::Idle,
        };
        if is_unary(&expression, UnaryOperator::Not)
            || (expression.kind().is_expression() && is_boolean(&expression))
        {
            Step::Partial(Self::Captured { expression })
        } else {
            Step::Idle
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Captured { expression } = self;
        let found = counterparts(op).into_iter().find(|candidate| {
            is_positioned(candidate, &expression)
                && (is_negation_of(candidate, &expression) || is_negation_of(&expression, candidate))
        });
        let Some(candidate) = found else {
            return Step::Idle;
        };
        let enclosing = enclosing_condition(&expression).or_else(|| enclosing_condition(&candidate));
        Step::Accept(match enclosing {
            Some(enclosing) => Rule::ConditionalTestNegated { enclosing },
            None => Rule::BooleanExpressionNegated,
        })
    }
}
