//! A computed value replaced by a literal.
//!
//! The deleted expression decides the site reported in the rule: a
//! constructor call, a method call, a returned value, or anything else. A
//! constructor call can only be replaced by `null`, which has no static type,
//! so that site skips the type comparison every other site requires.

use crate::node::{NodeKind, SyntaxNode};
use crate::operation::Operation;
use crate::patterns::Family;
use crate::predicates::is_trivial_constant;
use crate::recognizer::{Pattern, Step};
use crate::rule::{ConstantSite, Rule};

/// Partial matches of [`Family::Constantification`].
#[derive(Debug)]
pub enum Constantification<N> {
    /// A non-constant expression was deleted.
    Deleted {
        /// The deleted expression
        expression: N,
        /// Where it sat
        site: ConstantSite,
    },
}

fn site_of<N: SyntaxNode>(expression: &N) -> ConstantSite {
    match expression.kind() {
        NodeKind::Constructor => ConstantSite::ConstructorCall,
        NodeKind::Invocation => ConstantSite::MethodCall,
        _ if expression
            .parent()
            .is_some_and(|parent| parent.kind() == NodeKind::Return) =>
        {
            ConstantSite::ReturnValue
        }
        _ => ConstantSite::Expression,
    }
}

impl<N: SyntaxNode> Pattern for Constantification<N> {
    type Node = N;

    const FAMILY: Family = Family::Constantification;

    fn start(op: &Operation<N>) -> Step<Self> {
        match op.deleted() {
            Some(expression)
                if expression.kind().is_expression() && !is_trivial_constant(&expression) =>
            {
                Step::Partial(Self::Deleted {
                    site: site_of(&expression),
                    expression,
                })
            }
            _ => Step::Idle,
        }
    }

    fn advance(self, op: &Operation<N>) -> Step<Self> {
        let Self::Deleted { expression, site } = self;
        let Some(literal) = op.inserted() else {
            return Step::Idle;
        };
        if literal.kind() != NodeKind::Literal || !literal.is_sibling_of(&expression) {
            return Step::Idle;
        }
        let compatible = match site {
            ConstantSite::ConstructorCall => literal.literal().is_some_and(|l| l.is_null()),
            _ => literal.type_equals(&expression),
        };
        if !compatible {
            return Step::Idle;
        }
        Step::Accept(Rule::Constantified {
            site,
            value: literal.text(),
        })
    }
}
