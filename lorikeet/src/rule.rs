//! Recognized change templates.
//!
//! A [`Rule`] is the immutable result of a completed match: a pattern tag and
//! the few names or values a report needs to describe the change.

use core::fmt;

use facet::Facet;

use crate::node::{Access, BinaryOperator};

/// Where a constant replaced a computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum ConstantSite {
    /// A method call was replaced.
    MethodCall,
    /// A constructor call was replaced (by `null`).
    ConstructorCall,
    /// A returned value was replaced.
    ReturnValue,
    /// Any other expression was replaced.
    Expression,
}

/// Which operand of a decomposed binary operator survived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Side {
    /// The left operand
    Left,
    /// The right operand
    Right,
}

/// Branch of a conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Branch {
    /// The then-branch
    Then,
    /// The else-branch
    Else,
}

/// What a null guard protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum GuardedUsage {
    /// A field access on the guarded expression
    FieldAccess,
    /// A method invocation on the guarded expression
    MethodInvocation,
}

/// Statement whose condition was negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Enclosing {
    /// `if (..)`
    If,
    /// `while (..)`
    While,
    /// `do .. while (..)`
    Do,
    /// `.. ? .. : ..`
    Ternary,
}

/// A recognized change template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Rule {
    /// A field read was replaced by an accessor call.
    FieldToMethod { field: String, method: String },
    /// An accessor call was replaced by a field read.
    MethodToField { method: String, field: String },

    /// A computed value was replaced by a literal.
    Constantified { site: ConstantSite, value: String },

    /// A binary operator was dropped, one operand took its place.
    BinaryOperatorDecomposed {
        operator: BinaryOperator,
        survivor: Side,
    },

    /// A call was dropped, its receiver or an argument took its place.
    CallDecomposed { callee: String },

    /// A local variable reference became a field reference.
    VariablePromoted {
        access: Access,
        local: String,
        field: String,
    },
    /// A field reference became a local variable reference.
    VariableDemoted {
        access: Access,
        field: String,
        local: String,
    },

    /// A ternary null check was introduced around an access.
    NullGuardIntroduced {
        branch: Branch,
        usage: GuardedUsage,
        target: String,
    },

    /// An `if` was removed and its then-block (if any) kept unconditionally.
    IfRemoved,
    /// An `if`/`else` was replaced by its then-block.
    ElseExtracted,
    /// An `if`/`else` was replaced by its else-block.
    ThenExtracted,

    /// An increment was dropped, keeping its operand.
    IncrementRemoved,
    /// A decrement was dropped, keeping its operand.
    DecrementRemoved,

    /// A local variable was replaced by a method call.
    LocalToMethod { local: String, method: String },
    /// A method call was replaced by a local variable.
    MethodToLocal { method: String, local: String },

    /// The condition of a branching statement was negated.
    ConditionalTestNegated { enclosing: Enclosing },
    /// A boolean expression outside a condition was negated.
    BooleanExpressionNegated,

    /// An arithmetic negation was removed.
    NegationRemoved,
    /// An arithmetic negation was added.
    NegationAdded,
    /// A negated constant was folded into (or unfolded from) a literal.
    ConstantReplaced { value: String },

    /// A null check was introduced around a call on the checked receiver.
    GuardedCallIntroduced { receiver: String, method: String },

    /// An operator was replaced by an equivalent function call.
    OperatorToFunction { operator: String, function: String },
    /// A function call was replaced by an equivalent operator.
    FunctionToOperator { function: String, operator: String },

    /// A binary operator was swapped for another.
    OperatorReplaced {
        from: BinaryOperator,
        to: BinaryOperator,
    },
}

impl Rule {
    /// Pattern-name tag of the rule.
    pub fn tag(&self) -> &'static str {
        match self {
            Rule::FieldToMethod { .. } => "FieldToMethod",
            Rule::MethodToField { .. } => "MethodToField",
            Rule::Constantified { .. } => "Constantified",
            Rule::BinaryOperatorDecomposed { .. } => "BinaryOperatorDecomposed",
            Rule::CallDecomposed { .. } => "CallDecomposed",
            Rule::VariablePromoted { .. } => "VariablePromoted",
            Rule::VariableDemoted { .. } => "VariableDemoted",
            Rule::NullGuardIntroduced { .. } => "NullGuardIntroduced",
            Rule::IfRemoved => "IfRemoved",
            Rule::ElseExtracted => "ElseExtracted",
            Rule::ThenExtracted => "ThenExtracted",
            Rule::IncrementRemoved => "IncrementRemoved",
            Rule::DecrementRemoved => "DecrementRemoved",
            Rule::LocalToMethod { .. } => "LocalToMethod",
            Rule::MethodToLocal { .. } => "MethodToLocal",
            Rule::ConditionalTestNegated { .. } => "ConditionalTestNegated",
            Rule::BooleanExpressionNegated => "BooleanExpressionNegated",
            Rule::NegationRemoved => "NegationRemoved",
            Rule::NegationAdded => "NegationAdded",
            Rule::ConstantReplaced { .. } => "ConstantReplaced",
            Rule::GuardedCallIntroduced { .. } => "GuardedCallIntroduced",
            Rule::OperatorToFunction { .. } => "OperatorToFunction",
            Rule::FunctionToOperator { .. } => "FunctionToOperator",
            Rule::OperatorReplaced { .. } => "OperatorReplaced",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())?;
        match self {
            Rule::FieldToMethod { field, method } => write!(f, "({field} → {method})"),
            Rule::MethodToField { method, field } => write!(f, "({method} → {field})"),
            Rule::Constantified { site, value } => write!(f, "({site:?}, {value})"),
            Rule::BinaryOperatorDecomposed { operator, survivor } => {
                write!(f, "({operator}, {survivor:?})")
            }
            Rule::CallDecomposed { callee } => write!(f, "({callee})"),
            Rule::VariablePromoted {
                access,
                local,
                field,
            } => write!(f, "({access:?} {local} → {field})"),
            Rule::VariableDemoted {
                access,
                field,
                local,
            } => write!(f, "({access:?} {field} → {local})"),
            Rule::NullGuardIntroduced {
                branch,
                usage,
                target,
            } => write!(f, "({branch:?}, {usage:?}, {target})"),
            Rule::LocalToMethod { local, method } => write!(f, "({local} → {method})"),
            Rule::MethodToLocal { method, local } => write!(f, "({method} → {local})"),
            Rule::ConditionalTestNegated { enclosing } => write!(f, "({enclosing:?})"),
            Rule::ConstantReplaced { value } => write!(f, "({value})"),
            Rule::GuardedCallIntroduced { receiver, method } => {
                write!(f, "({receiver}.{method})")
            }
            Rule::OperatorToFunction { operator, function } => {
                write!(f, "({operator} → {function})")
            }
            Rule::FunctionToOperator { function, operator } => {
                write!(f, "({function} → {operator})")
            }
            Rule::OperatorReplaced { from, to } => write!(f, "({from} → {to})"),
            Rule::IfRemoved
            | Rule::ElseExtracted
            | Rule::ThenExtracted
            | Rule::IncrementRemoved
            | Rule::DecrementRemoved
            | Rule::BooleanExpressionNegated
            | Rule::NegationRemoved
            | Rule::NegationAdded => Ok(()),
        }
    }
}
