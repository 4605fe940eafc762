//! Pattern families.
//!
//! Each submodule holds one automaton: an enum of the partial-match states of
//! that family, each variant carrying exactly what later transitions need,
//! and its [`Pattern`](crate::recognizer::Pattern) impl.

mod accessor_swap;
mod binary_decomposition;
mod call_decomposition;
mod call_guard;
mod constantification;
mod field_local_swap;
mod if_short_circuit;
mod inc_dec_removal;
mod local_method_swap;
mod negate_conditional;
mod negate_int;
mod null_guard;
mod operator_function_swap;
mod operator_replacement;

use core::fmt;

use facet::Facet;

pub use accessor_swap::AccessorSwap;
pub use binary_decomposition::BinaryDecomposition;
pub use call_decomposition::CallDecomposition;
pub use call_guard::CallGuard;
pub use constantification::Constantification;
pub use field_local_swap::FieldLocalSwap;
pub use if_short_circuit::IfShortCircuit;
pub use inc_dec_removal::IncDecRemoval;
pub use local_method_swap::LocalMethodSwap;
pub use negate_conditional::NegateConditional;
pub use negate_int::NegateInt;
pub use null_guard::NullGuard;
pub use operator_function_swap::OperatorFunctionSwap;
pub use operator_replacement::OperatorReplacement;

use crate::node::SyntaxNode;
use crate::recognizer::{Recognize, Recognizer};

/// Tag of a pattern family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Facet)]
#[repr(u8)]
pub enum Family {
    /// Field read ↔ accessor call
    AccessorSwap,
    /// Computed value → literal
    Constantification,
    /// Binary operator → one of its operands
    BinaryDecomposition,
    /// Call → its receiver or an argument
    CallDecomposition,
    /// Field reference ↔ local variable reference
    FieldLocalSwap,
    /// Ternary null check around a field access or call
    NullGuard,
    /// `if` replaced by one of its branches
    IfShortCircuit,
    /// `x++` / `x--` → `x`
    IncDecRemoval,
    /// Local variable ↔ method call
    LocalMethodSwap,
    /// Boolean condition negated
    NegateConditional,
    /// Arithmetic negation added or removed
    NegateInt,
    /// `if` null check around a call
    CallGuard,
    /// Operator ↔ equivalent function call
    OperatorFunctionSwap,
    /// Binary operator swapped for another
    OperatorReplacement,
}

impl Family {
    /// Every family, in registry order.
    pub const ALL: [Family; 14] = [
        Family::AccessorSwap,
        Family::Constantification,
        Family::BinaryDecomposition,
        Family::CallDecomposition,
        Family::FieldLocalSwap,
        Family::NullGuard,
        Family::IfShortCircuit,
        Family::IncDecRemoval,
        Family::LocalMethodSwap,
        Family::NegateConditional,
        Family::NegateInt,
        Family::CallGuard,
        Family::OperatorFunctionSwap,
        Family::OperatorReplacement,
    ];

    /// Short kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Family::AccessorSwap => "accessor-swap",
            Family::Constantification => "constantification",
            Family::BinaryDecomposition => "binary-decomposition",
            Family::CallDecomposition => "call-decomposition",
            Family::FieldLocalSwap => "field-local-swap",
            Family::NullGuard => "null-guard",
            Family::IfShortCircuit => "if-short-circuit",
            Family::IncDecRemoval => "inc-dec-removal",
            Family::LocalMethodSwap => "local-method-swap",
            Family::NegateConditional => "negate-conditional",
            Family::NegateInt => "negate-int",
            Family::CallGuard => "call-guard",
            Family::OperatorFunctionSwap => "operator-function-swap",
            Family::OperatorReplacement => "operator-replacement",
        }
    }

    /// A fresh recognizer for this family.
    pub fn recognizer<'n, N>(self) -> Box<dyn Recognize<N> + Send + 'n>
    where
        N: SyntaxNode + Send + 'n,
    {
        match self {
            Family::AccessorSwap => Box::new(Recognizer::<AccessorSwap<N>>::new()),
            Family::Constantification => Box::new(Recognizer::<Constantification<N>>::new()),
            Family::BinaryDecomposition => Box::new(Recognizer::<BinaryDecomposition<N>>::new()),
            Family::CallDecomposition => Box::new(Recognizer::<CallDecomposition<N>>::new()),
            Family::FieldLocalSwap => Box::new(Recognizer::<FieldLocalSwap<N>>::new()),
            Family::NullGuard => Box::new(Recognizer::<NullGuard<N>>::new()),
            Family::IfShortCircuit => Box::new(Recognizer::<IfShortCircuit<N>>::new()),
            Family::IncDecRemoval => Box::new(Recognizer::<IncDecRemoval<N>>::new()),
            Family::LocalMethodSwap => Box::new(Recognizer::<LocalMethodSwap<N>>::new()),
            Family::NegateConditional => Box::new(Recognizer::<NegateConditional<N>>::new()),
            Family::NegateInt => Box::new(Recognizer::<NegateInt<N>>::new()),
            Family::CallGuard => Box::new(Recognizer::<CallGuard<N>>::new()),
            Family::OperatorFunctionSwap => {
                Box::new(Recognizer::<OperatorFunctionSwap<N>>::new())
            }
            Family::OperatorReplacement => Box::new(Recognizer::<OperatorReplacement<N>>::new()),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
