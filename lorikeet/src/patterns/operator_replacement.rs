//! A binary operator swapped for another in place (`a < b` → `a <= b`).
//!
//! A single Update carries the whole change, so this family never holds a
//! partial match.

use core::marker::PhantomData;

use crate::node::SyntaxNode;
use crate::operation::Operation;
use crate::patterns::Family;
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::OperatorReplacement`]: there are none.
#[derive(Debug)]
pub struct OperatorReplacement<N>(PhantomData<N>);

impl<N: SyntaxNode> Pattern for OperatorReplacement<N> {
    type Node = N;

    const FAMILY: Family = Family::OperatorReplacement;

    fn start(op: &Operation<N>) -> Step<Self> {
        let Some((source, destination)) = op.update_pair() else {
            return Step::Idle;
        };
        match (source.binary_operator(), destination.binary_operator()) {
            (Some(from), Some(to)) if from != to => Step::Accept(Rule::OperatorReplaced { from, to }),
            _ => Step::Idle,
        }
    }

    fn advance(self, _op: &Operation<N>) -> Step<Self> {
        Step::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::BinaryOperator;
    use crate::recognizer::{Recognize, Recognizer, Status};
    use crate::syntax::{Node, SyntaxTree};
    use facet_testhelpers::test;

    #[test]
    fn test_single_update_accepts() {
        let mut tree = SyntaxTree::new();
        let (a, b) = (tree.local("a", "int"), tree.local("b", "int"));
        let lt = tree.binary(BinaryOperator::Lt, a, b);
        let (a2, b2) = (tree.local("a", "int"), tree.local("b", "int"));
        let le = tree.binary(BinaryOperator::Le, a2, b2);

        let mut r = Recognizer::<OperatorReplacement<Node<'_>>>::new();
        assert_eq!(
            r.consume(&Operation::updated(tree.node(lt), tree.node(le))),
            Status::Accepted
        );
        assert_eq!(r.consumed(), 1);
        assert_eq!(
            r.rule(),
            Some(&Rule::OperatorReplaced {
                from: BinaryOperator::Lt,
                to: BinaryOperator::Le,
            })
        );

        // the next operation starts over
        assert_eq!(
            r.consume(&Operation::updated(tree.node(a), tree.node(a2))),
            Status::Rejected
        );
        assert_eq!(r.consumed(), 0);
        assert_eq!(r.rule(), None);
    }
}
