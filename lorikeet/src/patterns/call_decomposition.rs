//! A call dropped in favour of its receiver or one of its arguments.

use crate::node::SyntaxNode;
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::name_of;
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::CallDecomposition`].
#[derive(Debug)]
pub enum CallDecomposition<N> {
    /// A method or constructor call was deleted.
    Deleted {
        /// The deleted call
        call: N,
    },
}

impl<N: SyntaxNode> Pattern for CallDecomposition<N> {
    type Node = N;

    const FAMILY: Family = Family::CallDecomposition;

    fn start(op: &Operation<N>) -> Step<Self> {
        match op.deleted() {
            Some(call) if call.kind().is_abstract_invocation() => {
                Step::Partial(Self::Deleted { call })
            }
            _ => Step::Idle,
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Deleted { call } = self;
        let Some((source, destination)) = op.move_pair() else {
            return Step::Idle;
        };
        let propagated =
            call.target() == Some(source) || call.arguments().contains(&source);
        if propagated && destination.is_sibling_of(&call) {
            Step::Accept(Rule::CallDecomposed {
                callee: name_of(&call),
            })
        } else {
            Step::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::{Recognize, Recognizer, Status};
    use crate::syntax::{Node, SyntaxTree};
    use facet_testhelpers::test;

    #[test]
    fn test_argument_propagated() {
        let mut tree = SyntaxTree::new();
        let x = tree.local("x", "String");
        let trim = tree.call("trim", "String", None, &[x]);
        let before = tree.ret(Some(trim));
        let x_after = tree.local("x", "String");
        let after = tree.ret(Some(x_after));
        tree.link(before, after);

        let mut r = Recognizer::<CallDecomposition<Node<'_>>>::new();
        assert_eq!(r.consume(&Operation::Delete(tree.node(trim))), Status::Candidate);
        assert_eq!(
            r.consume(&Operation::moved(tree.node(x), tree.node(x_after))),
            Status::Accepted
        );
        assert_eq!(
            r.rule(),
            Some(&Rule::CallDecomposed {
                callee: "trim".to_string()
            })
        );
    }

    #[test]
    fn test_constructor_argument_propagated() {
        let mut tree = SyntaxTree::new();
        let x = tree.local("x", "int");
        let boxed = tree.construct("Integer", &[x]);
        let before = tree.statement("use", &[boxed]);
        let x_after = tree.local("x", "int");
        let after = tree.statement("use", &[x_after]);
        tree.link(before, after);

        let mut r = Recognizer::<CallDecomposition<Node<'_>>>::new();
        r.consume(&Operation::Delete(tree.node(boxed)));
        assert_eq!(
            r.consume(&Operation::moved(tree.node(x), tree.node(x_after))),
            Status::Accepted
        );
        assert_eq!(
            r.rule(),
            Some(&Rule::CallDecomposed {
                callee: "Integer(int)".to_string()
            })
        );
    }

    #[test]
    fn test_insert_abandons() {
        let mut tree = SyntaxTree::new();
        let call = tree.call("next", "int", None, &[]);
        let zero = tree.literal(crate::node::Literal::Int(0));

        let mut r = Recognizer::<CallDecomposition<Node<'_>>>::new();
        r.consume(&Operation::Delete(tree.node(call)));
        assert_eq!(r.consume(&Operation::Insert(tree.node(zero))), Status::Rejected);
    }
}
