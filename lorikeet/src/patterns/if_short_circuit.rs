//! An `if` statement replaced by the statements of one of its branches.
//!
//! Deleting the `if` captures the statements of both branches in source
//! order. Every following Move must take out the next pending statement of a
//! branch still being tracked; the first branch whose statements have all been
//! moved decides the rule:
//!
//! - then-branch complete and no else statements: [`Rule::IfRemoved`]
//! - then-branch complete, else statements dropped: [`Rule::ElseExtracted`]
//! - else-branch complete: [`Rule::ThenExtracted`]
//!
//! A branch that is a single statement rather than a block counts as a block
//! of one.

use crate::node::{NodeKind, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::branch_statements;
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Statements of one branch still waiting to be moved out.
#[derive(Debug)]
pub struct Track<N> {
    pending: Vec<N>,
    next: usize,
}

impl<N: SyntaxNode> Track<N> {
    fn new(branch: Option<N>) -> Self {
        Self {
            pending: branch_statements(branch),
            next: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn is_complete(&self) -> bool {
        !self.is_empty() && self.next == self.pending.len()
    }

    /// Advance past `moved` if it is the next pending statement.
    fn take(&mut self, moved: &N) -> bool {
        if self.pending.get(self.next) == Some(moved) {
            self.next += 1;
            true
        } else {
            false
        }
    }
}

/// Partial matches of [`Family::IfShortCircuit`].
#[derive(Debug)]
pub enum IfShortCircuit<N> {
    /// The `if` was deleted; its branch statements are being moved out.
    Extracting {
        /// Then-branch statements
        then: Track<N>,
        /// Else-branch statements
        otherwise: Track<N>,
    },
}

impl<N: SyntaxNode> Pattern for IfShortCircuit<N> {
    type Node = N;

    const FAMILY: Family = Family::IfShortCircuit;

    fn start(op: &Operation<N>) -> Step<Self> {
        let Some(statement) = op.deleted() else {
            return Step::Idle;
        };
        if statement.kind() != NodeKind::If {
            return Step::Idle;
        }
        let then = Track::new(statement.then_branch());
        let otherwise = Track::new(statement.else_branch());
        if then.is_empty() && otherwise.is_empty() {
            return Step::Accept(Rule::IfRemoved);
        }
        Step::Partial(Self::Extracting { then, otherwise })
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Extracting {
            mut then,
            mut otherwise,
        } = self;
        let Some((moved, _)) = op.move_pair() else {
            return Step::Idle;
        };
        let took_then = then.take(&moved);
        let took_else = otherwise.take(&moved);
        if !took_then && !took_else {
            return Step::Idle;
        }

        if then.is_complete() {
            Step::Accept(if otherwise.is_empty() {
                Rule::IfRemoved
            } else {
                Rule::ElseExtracted
            })
        } else if otherwise.is_complete() {
            Step::Accept(Rule::ThenExtracted)
        } else {
            Step::Partial(Self::Extracting { then, otherwise })
        }
    }
}
