//! A binary operator dropped in favour of one of its operands.

use crate::node::{BinaryOperator, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::recognizer::{Pattern, Step};
use crate::rule::{Rule, Side};

/// Partial matches of [`Family::BinaryDecomposition`].
#[derive(Debug)]
pub enum BinaryDecomposition<N> {
    /// The operator node was deleted.
    Deleted {
        /// The deleted operator node
        binary: N,
        /// Its operator
        operator: BinaryOperator,
    },
}

impl<N: SyntaxNode> Pattern for BinaryDecomposition<N> {
    type Node = N;

    const FAMILY: Family = Family::BinaryDecomposition;

    fn start(op: &Operation<N>) -> Step<Self> {
        let Some(binary) = op.deleted() else {
            return Step::Idle;
        };
        match binary.binary_operator() {
            Some(operator) => Step::Partial(Self::Deleted { binary, operator }),
            None => Step::Idle,
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Deleted { binary, operator } = self;
        let Some((source, destination)) = op.move_pair() else {
            return Step::Idle;
        };
        let survivor = if binary.left() == Some(source) {
            Side::Left
        } else if binary.right() == Some(source) {
            Side::Right
        } else {
            return Step::Idle;
        };
        if destination.is_sibling_of(&binary) && source.type_equals(&binary) {
            Step::Accept(Rule::BinaryOperatorDecomposed { operator, survivor })
        } else {
            Step::Idle
        }
    }
}
