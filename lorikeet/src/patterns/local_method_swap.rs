//! A local variable replaced by a method call, or the reverse.
//!
//! Three shapes end in [`Rule::LocalToMethod`]:
//!
//! - the local is moved, then a call is inserted around it (`a` → `f(a)`);
//! - the local is renamed in place, then the same happens, with or without a
//!   move in between;
//! - the local is deleted and a call takes its slot.
//!
//! [`Rule::MethodToLocal`] is the deleted-call, inserted-local mirror of the
//! last shape.

use crate::node::{NodeKind, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::{is_local_read, name_of};
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::LocalMethodSwap`].
#[derive(Debug)]
pub enum LocalMethodSwap<N> {
    /// A local read was moved to `destination`.
    LocalMoved {
        /// The local as it was before the edit
        local: N,
        /// Where it went
        destination: N,
    },
    /// A local read was renamed in place.
    LocalRenamed {
        /// The local as it was before the edit
        local: N,
        /// The renamed local
        renamed: N,
    },
    /// A local read was deleted.
    LocalDeleted {
        /// The deleted read
        local: N,
    },
    /// A call was deleted.
    CallDeleted {
        /// The deleted call
        call: N,
    },
}

/// `call` is an invocation holding `slot` directly as receiver or argument.
fn wraps<N: SyntaxNode>(call: &N, slot: &N) -> bool {
    call.kind() == NodeKind::Invocation
        && slot.parent().as_ref() == Some(call)
        && (call.target().as_ref() == Some(slot) || call.arguments().contains(slot))
}

fn local_to_method<N: SyntaxNode>(local: &N, call: &N) -> Step<LocalMethodSwap<N>> {
    Step::Accept(Rule::LocalToMethod {
        local: name_of(local),
        method: name_of(call),
    })
}

impl<N: SyntaxNode> Pattern for LocalMethodSwap<N> {
    type Node = N;

    const FAMILY: Family = Family::LocalMethodSwap;

    fn start(op: &Operation<N>) -> Step<Self> {
        match *op {
            Operation::Move {
                source,
                destination,
            } if is_local_read(&source) => Step::Partial(Self::LocalMoved {
                local: source,
                destination,
            }),
            Operation::Update {
                source,
                destination,
            } if is_local_read(&source) && is_local_read(&destination) => {
                Step::Partial(Self::LocalRenamed {
                    local: source,
                    renamed: destination,
                })
            }
            Operation::Delete(local) if is_local_read(&local) => {
                Step::Partial(Self::LocalDeleted { local })
            }
            Operation::Delete(call) if call.kind() == NodeKind::Invocation => {
                Step::Partial(Self::CallDeleted { call })
            }
            _ => Step::Idle,
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        match (self, *op) {
            (Self::LocalMoved { local, destination }, Operation::Insert(call))
                if wraps(&call, &destination) && call.type_equals(&local) =>
            {
                local_to_method(&local, &call)
            }
            (Self::LocalRenamed { local, renamed }, Operation::Insert(call))
                if wraps(&call, &renamed) && call.type_equals(&renamed) =>
            {
                local_to_method(&local, &call)
            }
            (
                Self::LocalRenamed { local, .. },
                Operation::Move {
                    source,
                    destination,
                },
            ) if source == local => Step::Partial(Self::LocalMoved { local, destination }),
            (Self::LocalDeleted { local }, Operation::Insert(call))
                if call.kind() == NodeKind::Invocation
                    && call.is_sibling_of(&local)
                    && call.type_equals(&local) =>
            {
                local_to_method(&local, &call)
            }
            (Self::CallDeleted { call }, Operation::Insert(local))
                if is_local_read(&local) && local.is_sibling_of(&call) =>
            {
                Step::Accept(Rule::MethodToLocal {
                    method: name_of(&call),
                    local: name_of(&local),
                })
            }
            _ => Step::Idle,
        }
    }
}
