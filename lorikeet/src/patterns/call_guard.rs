//! An `if` null check introduced around an existing call on the checked
//! receiver.

use crate::node::{NodeKind, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::{Candidates, guarded_branch, name_of, null_comparison, uses_of};
use crate::recognizer::{Pattern, Step};
use crate::rule::{Branch, Rule};

/// Partial matches of [`Family::CallGuard`].
#[derive(Debug)]
pub enum CallGuard<N> {
    /// A null-checking `if` was inserted.
    Inserted {
        /// The checked receiver
        receiver: N,
        /// Calls on the receiver in the branch taken when it is not null
        candidates: Candidates<N>,
    },
}

impl<N: SyntaxNode> CallGuard<N> {
    fn from_insert(statement: N) -> Option<Self> {
        if statement.kind() != NodeKind::If {
            return None;
        }
        let (receiver, operator) = null_comparison(&statement.condition()?)?;
        let protected = match guarded_branch(operator) {
            Branch::Then => statement.then_branch(),
            Branch::Else => statement.else_branch(),
        }?;
        let candidates = uses_of(protected, &receiver, false, true);
        if candidates.is_empty() {
            return None;
        }
        Some(Self::Inserted {
            receiver,
            candidates,
        })
    }
}

impl<N: SyntaxNode> Pattern for CallGuard<N> {
    type Node = N;

    const FAMILY: Family = Family::CallGuard;

    fn start(op: &Operation<N>) -> Step<Self> {
        op.inserted()
            .and_then(Self::from_insert)
            .map_or(Step::Idle, Step::Partial)
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Inserted {
            receiver,
            candidates,
        } = self;
        match op.move_pair() {
            Some((_, destination)) if candidates.contains(&destination) => {
                Step::Accept(Rule::GuardedCallIntroduced {
                    receiver: receiver.text(),
                    method: name_of(&destination),
                })
            }
            _ => Step::Idle,
        }
    }
}
