//! `x++`, `++x`, `x--`, `--x` replaced by plain `x`.

use crate::node::SyntaxNode;
use crate::operation::Operation;
use crate::patterns::Family;
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::IncDecRemoval`].
#[derive(Debug)]
pub enum IncDecRemoval<N> {
    /// The increment or decrement was deleted.
    Deleted {
        /// The deleted operator node
        unary: N,
        /// Its operand
        operand: N,
        /// `++` rather than `--`
        increment: bool,
    },
}

impl<N: SyntaxNode> Pattern for IncDecRemoval<N> {
    type Node = N;

    const FAMILY: Family = Family::IncDecRemoval;

    fn start(op: &Operation<N>) -> Step<Self> {
        let Some(unary) = op.deleted() else {
            return Step::Idle;
        };
        let Some(operator) = unary.unary_operator() else {
            return Step::Idle;
        };
        if !operator.is_increment() && !operator.is_decrement() {
            return Step::Idle;
        }
        match unary.operand() {
            Some(operand) => Step::Partial(Self::Deleted {
                unary,
                operand,
                increment: operator.is_increment(),
            }),
            None => Step::Idle,
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Deleted {
            unary,
            operand,
            increment,
        } = self;
        match op.inserted() {
            Some(plain) if plain.deep_text_equals(&operand) && plain.is_sibling_of(&unary) => {
                Step::Accept(if increment {
                    Rule::IncrementRemoved
                } else {
                    Rule::DecrementRemoved
                })
            }
            _ => Step::Idle,
        }
    }
}
