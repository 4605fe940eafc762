//! An operator replaced by an equivalent function call (`a + b` →
//! `a.add(b)`, `-x` → `negate(x)`), or the reverse.

use crate::node::{NodeKind, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::{call_arity, name_of, operator_arity, operator_symbol};
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::OperatorFunctionSwap`].
#[derive(Debug)]
pub enum OperatorFunctionSwap<N> {
    /// A unary or binary call was deleted.
    CallDeleted {
        /// The deleted call
        call: N,
        /// Its operand count
        arity: usize,
    },
    /// An operator application was deleted.
    OperatorDeleted {
        /// The deleted operator node
        operator: N,
        /// Its operand count
        arity: usize,
    },
}

impl<N: SyntaxNode> Pattern for OperatorFunctionSwap<N> {
    type Node = N;

    const FAMILY: Family = Family::OperatorFunctionSwap;

    fn start(op: &Operation<N>) -> Step<Self> {
        let Some(node) = op.deleted() else {
            return Step::Idle;
        };
        if node.kind() == NodeKind::Invocation {
            let arity = call_arity(&node);
            return if matches!(arity, 1 | 2) {
                Step::Partial(Self::CallDeleted { call: node, arity })
            } else {
                Step::Idle
            };
        }
        match operator_arity(&node) {
            Some(arity) => Step::Partial(Self::OperatorDeleted {
                operator: node,
                arity,
            }),
            None => Step::Idle,
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Some(inserted) = op.inserted() else {
            return Step::Idle;
        };
        match self {
            Self::CallDeleted { call, arity }
                if inserted.is_sibling_of(&call) && operator_arity(&inserted) == Some(arity) =>
            {
                match operator_symbol(&inserted) {
                    Some(symbol) => Step::Accept(Rule::FunctionToOperator {
                        function: name_of(&call),
                        operator: symbol.to_owned(),
                    }),
                    None => Step::Idle,
                }
            }
            Self::OperatorDeleted { operator, arity }
                if inserted.kind() == NodeKind::Invocation
                    && inserted.is_sibling_of(&operator)
                    && call_arity(&inserted) == arity =>
            {
                match operator_symbol(&operator) {
                    Some(symbol) => Step::Accept(Rule::OperatorToFunction {
                        operator: symbol.to_owned(),
                        function: name_of(&inserted),
                    }),
                    None => Step::Idle,
                }
            }
            _ => Step::Idle,
        }
    }
}
