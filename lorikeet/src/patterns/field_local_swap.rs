//! A field reference replaced by a local variable reference, or the reverse,
//! keeping the read/write mode.

use crate::node::{Access, NodeKind, Scope, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::name_of;
use crate::recognizer::{Pattern, Step};
use crate::rule::Rule;

/// Partial matches of [`Family::FieldLocalSwap`].
#[derive(Debug)]
pub enum FieldLocalSwap<N> {
    /// A variable reference was deleted.
    Deleted {
        /// The deleted reference
        variable: N,
        /// Local or field
        scope: Scope,
        /// Read or write
        access: Access,
    },
}

impl<N: SyntaxNode> Pattern for FieldLocalSwap<N> {
    type Node = N;

    const FAMILY: Family = Family::FieldLocalSwap;

    fn start(op: &Operation<N>) -> Step<Self> {
        let Some(variable) = op.deleted() else {
            return Step::Idle;
        };
        if variable.kind() != NodeKind::Variable {
            return Step::Idle;
        }
        match (variable.scope(), variable.access()) {
            (Some(scope), Some(access)) => Step::Partial(Self::Deleted {
                variable,
                scope,
                access,
            }),
            _ => Step::Idle,
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Deleted {
            variable,
            scope,
            access,
        } = self;
        let Some(inserted) = op.inserted() else {
            return Step::Idle;
        };
        if inserted.kind() != NodeKind::Variable
            || inserted.access() != Some(access)
            || !inserted.is_sibling_of(&variable)
        {
            return Step::Idle;
        }
        match (scope, inserted.scope()) {
            (Scope::Local, Some(Scope::Field)) => Step::Accept(Rule::VariablePromoted {
                access,
                local: name_of(&variable),
                field: name_of(&inserted),
            }),
            (Scope::Field, Some(Scope::Local)) => Step::Accept(Rule::VariableDemoted {
                access,
                field: name_of(&variable),
                local: name_of(&inserted),
            }),
            _ => Step::Idle,
        }
    }
}
