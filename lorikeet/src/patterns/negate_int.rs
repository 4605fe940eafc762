//! An arithmetic negation removed or added.
//!
//! Either side may come first: the `-x` node or the bare `x`, deleted or
//! inserted. The counterpart then shows up in an Insert or a Move next to it.
//! Whether the negation was removed follows from what was captured: a deleted
//! `-x` or an inserted `x` means removal.
//!
//! When the operand is a literal the change is reported as a replaced
//! constant instead, as is folding `-5` into the literal `-5`.

use crate::node::{NodeKind, SyntaxNode, UnaryOperator};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::{counterparts, is_numeric, is_positioned, is_unary};
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::NegateInt`].
#[derive(Debug)]
pub enum NegateInt<N> {
    /// A negation, or a numeric expression, was deleted or inserted.
    Captured {
        /// That node
        node: N,
        /// Deleted rather than inserted
        deleted: bool,
    },
}

fn is_negation<N: SyntaxNode>(node: &N) -> bool {
    is_unary(node, UnaryOperator::Neg)
}

/// Rule for a `negation`/`bare` pair, if they are one.
fn pair_rule<N: SyntaxNode>(negation: &N, bare: &N, removed: bool) -> Option<Rule> {
    let operand = negation.operand()?;
    let post_edit = if removed { bare } else { negation };
    if operand.deep_text_equals(bare) {
        if operand.kind() == NodeKind::Literal {
            return Some(Rule::ConstantReplaced {
                value: post_edit.text(),
            });
        }
        return Some(if removed {
            Rule::NegationRemoved
        } else {
            Rule::NegationAdded
        });
    }
    // `-(5)` folded into the literal `-5`
    let folded = match (operand.literal(), bare.literal()) {
        (Some(value), Some(literal)) => value.negated().as_ref() == Some(literal),
        _ => false,
    };
    folded.then(|| Rule::ConstantReplaced {
        value: post_edit.text(),
    })
}

impl<N: SyntaxNode> Pattern for NegateInt<N> {
    type Node = N;

    const FAMILY: Family = Family::NegateInt;

    fn start(op: &Operation<N>) -> Step<Self> {
        let (node, deleted) = match *op {
            Operation::Delete(node) => (node, true),
            Operation::Insert(node) => (node, false),
            _ => return Step::Idle,
        };
        if is_negation(&node) || (node.kind().is_expression() && is_numeric(&node)) {
            Step::Partial(Self::Captured { node, deleted })
        } else {
            Step::Idle
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Captured { node, deleted } = self;
        let captured_negation = is_negation(&node);
        let removed = captured_negation == deleted;
        counterparts(op)
            .into_iter()
            .filter(|candidate| is_positioned(candidate, &node))
            .find_map(|candidate| {
                if captured_negation {
                    pair_rule(&node, &candidate, removed)
                } else if is_negation(&candidate) {
                    pair_rule(&candidate, &node, removed)
                } else {
                    None
                }
            })
            .map_or(Step::Idle, Step::Accept)
    }
}
