//! A field read replaced by an accessor call, or the other way round.

use crate::node::{NodeKind, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::{is_field_read, name_of};
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::AccessorSwap`].
#[derive(Debug)]
pub enum AccessorSwap<N> {
    /// A field read was deleted; waiting for a call in its slot.
    FieldDeleted {
        /// The deleted read
        field: N,
    },
    /// A call was deleted; waiting for a field read in its slot.
    CallDeleted {
        /// The deleted call
        call: N,
    },
}

impl<N: SyntaxNode> Pattern for AccessorSwap<N> {
    type Node = N;

    const FAMILY: Family = Family::AccessorSwap;

    fn start(op: &Operation<N>) -> Step<Self> {
        match op.deleted() {
            Some(node) if is_field_read(&node) => Step::Partial(Self::FieldDeleted { field: node }),
            Some(node) if node.kind() == NodeKind::Invocation => {
                Step::Partial(Self::CallDeleted { call: node })
            }
            _ => Step::Idle,
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Some(inserted) = op.inserted() else {
            return Step::Idle;
        };
        match self {
            Self::FieldDeleted { field }
                if inserted.kind() == NodeKind::Invocation && inserted.is_sibling_of(&field) =>
            {
                Step::Accept(Rule::FieldToMethod {
                    field: name_of(&field),
                    method: name_of(&inserted),
                })
            }
            Self::CallDeleted { call }
                if is_field_read(&inserted) && inserted.is_sibling_of(&call) =>
            {
                Step::Accept(Rule::MethodToField {
                    method: name_of(&call),
                    field: name_of(&inserted),
                })
            }
            _ => Step::Idle,
        }
    }
}
