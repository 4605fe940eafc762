//! A ternary null check introduced around an existing dereference:
//! `obj.x` becomes `obj == null ? 0 : obj.x`.
//!
//! The inserted conditional starts the match. Its condition names the guarded
//! expression and, through the operator, the protected branch (`else` after
//! `== null`, `then` after `!= null`). Field accesses and calls on that
//! expression inside the protected branch are the candidates; the match
//! completes when one of them turns out to be a moved pre-existing node.

use crate::node::{NodeKind, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::{Candidates, guarded_branch, name_of, null_comparison, uses_of};
use crate::recognizer::{Pattern, Step};
use crate::rule::{Branch, GuardedUsage, Rule};

/// Partial matches of [`Family::NullGuard`].
#[derive(Debug)]
pub enum NullGuard<N> {
    /// A null-checking conditional was inserted.
    Inserted {
        /// Branch evaluated when the guarded expression is not null
        branch: Branch,
        /// Uses of the guarded expression inside that branch
        candidates: Candidates<N>,
    },
}

impl<N: SyntaxNode> NullGuard<N> {
    fn from_insert(conditional: N) -> Option<Self> {
        if conditional.kind() != NodeKind::Conditional {
            return None;
        }
        let (guarded, operator) = null_comparison(&conditional.condition()?)?;
        let branch = guarded_branch(operator);
        let protected = match branch {
            Branch::Then => conditional.then_branch(),
            Branch::Else => conditional.else_branch(),
        }?;
        let candidates = uses_of(protected, &guarded, true, true);
        if candidates.is_empty() {
            return None;
        }
        Some(Self::Inserted { branch, candidates })
    }
}

impl<N: SyntaxNode> Pattern for NullGuard<N> {
    type Node = N;

    const FAMILY: Family = Family::NullGuard;

    fn start(op: &Operation<N>) -> Step<Self> {
        op.inserted()
            .and_then(Self::from_insert)
            .map_or(Step::Idle, Step::Partial)
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Inserted { branch, candidates } = self;
        let Some((_, destination)) = op.move_pair() else {
            return Step::Idle;
        };
        if !candidates.contains(&destination) {
            return Step::Idle;
        }
        let usage = match destination.kind() {
            NodeKind::Invocation => GuardedUsage::MethodInvocation,
            _ => GuardedUsage::FieldAccess,
        };
        let target = destination
            .signature()
            .map_or_else(|| name_of(&destination), str::to_owned);
        Step::Accept(Rule::NullGuardIntroduced {
            branch,
            usage,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{BinaryOperator, Literal};
    use crate::recognizer::{Recognize, Recognizer, Status};
    use crate::syntax::{Node, SyntaxTree};
    use facet_testhelpers::test;

    #[test]
    fn test_field_access_guarded_in_else() {
        let mut tree = SyntaxTree::new();
        let obj = tree.local("obj", "Point");
        let x = tree.field_of(obj, "x", "int");
        tree.ret(Some(x));

        let obj_check = tree.local("obj", "Point");
        let nil = tree.literal(Literal::Null);
        let check = tree.binary(BinaryOperator::Eq, obj_check, nil);
        let zero = tree.literal(Literal::Int(0));
        let obj_after = tree.local("obj", "Point");
        let x_after = tree.field_of(obj_after, "x", "int");
        let guard = tree.ternary(check, zero, x_after);
        tree.ret(Some(guard));

        let mut r = Recognizer::<NullGuard<Node<'_>>>::new();
        assert_eq!(r.consume(&Operation::Insert(tree.node(guard))), Status::Candidate);
        assert_eq!(
            r.consume(&Operation::moved(tree.node(x), tree.node(x_after))),
            Status::Accepted
        );
        assert_eq!(
            r.rule(),
            Some(&Rule::NullGuardIntroduced {
                branch: Branch::Else,
                usage: GuardedUsage::FieldAccess,
                target: "x".to_string(),
            })
        );
    }

    #[test]
    fn test_call_guarded_in_then() {
        let mut tree = SyntaxTree::new();
        let s = tree.local("s", "String");
        let len = tree.call("length", "int", Some(s), &[]);

        let s_check = tree.local("s", "String");
        let nil = tree.literal(Literal::Null);
        let check = tree.binary(BinaryOperator::Ne, s_check, nil);
        let s_after = tree.local("s", "String");
        let len_after = tree.call("length", "int", Some(s_after), &[]);
        let zero = tree.literal(Literal::Int(0));
        let guard = tree.ternary(check, len_after, zero);

        let mut r = Recognizer::<NullGuard<Node<'_>>>::new();
        r.consume(&Operation::Insert(tree.node(guard)));
        assert_eq!(
            r.consume(&Operation::moved(tree.node(len), tree.node(len_after))),
            Status::Accepted
        );
        assert_eq!(
            r.rule(),
            Some(&Rule::NullGuardIntroduced {
                branch: Branch::Then,
                usage: GuardedUsage::MethodInvocation,
                target: "length()".to_string(),
            })
        );
    }

    #[test]
    fn test_unguarded_branch_does_not_start() {
        let mut tree = SyntaxTree::new();
        let s_check = tree.local("s", "String");
        let nil = tree.literal(Literal::Null);
        let check = tree.binary(BinaryOperator::Eq, s_check, nil);
        let s_then = tree.local("s", "String");
        let len = tree.call("length", "int", Some(s_then), &[]);
        let zero = tree.literal(Literal::Int(0));
        // the call sits in the branch taken when `s` is null
        let guard = tree.ternary(check, len, zero);

        let mut r = Recognizer::<NullGuard<Node<'_>>>::new();
        assert_eq!(r.consume(&Operation::Insert(tree.node(guard))), Status::Rejected);
    }

    #[test]
    fn test_move_of_other_node_abandons() {
        let mut tree = SyntaxTree::new();
        let o1 = tree.local("o", "Foo");
        let nil = tree.literal(Literal::Null);
        let check = tree.binary(BinaryOperator::Ne, o1, nil);
        let o2 = tree.local("o", "Foo");
        let f = tree.field_of(o2, "f", "int");
        let zero = tree.literal(Literal::Int(0));
        let guard = tree.ternary(check, f, zero);
        let a = tree.local("a", "int");
        let a_after = tree.local("a", "int");

        let mut r = Recognizer::<NullGuard<Node<'_>>>::new();
        r.consume(&Operation::Insert(tree.node(guard)));
        assert_eq!(
            r.consume(&Operation::moved(tree.node(a), tree.node(a_after))),
            Status::Rejected
        );
    }
}
