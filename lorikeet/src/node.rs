//! Node capability interface.
//!
//! The recognizers never see a concrete syntax tree. They ask questions of a
//! [`SyntaxNode`] handle: what kind of node is this, who is its parent, which
//! slot does it occupy, what is its static type, and is it textually identical
//! to some other node. Any AST that can answer these questions can be scanned.
//!
//! [`crate::syntax`] provides an arena-backed implementation.

use core::fmt;
use core::hash::Hash;

use facet::Facet;

/// Syntactic category of a node, as far as the recognizers care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A literal constant (`42`, `"s"`, `null`, `true`).
    Literal,
    /// A local variable or field reference, read or written.
    Variable,
    /// A method invocation.
    Invocation,
    /// A constructor call (`new T(..)`).
    Constructor,
    /// A unary operator application.
    Unary,
    /// A binary operator application.
    Binary,
    /// A ternary conditional expression (`c ? a : b`).
    Conditional,
    /// An `if` statement.
    If,
    /// A block of statements.
    Block,
    /// A `while` loop.
    While,
    /// A `do .. while` loop.
    Do,
    /// A `for` loop.
    For,
    /// A `return` statement.
    Return,
    /// Any other statement.
    Statement,
    /// Any other expression.
    Expression,
    /// A type reference (e.g. the receiver of a static call).
    Type,
}

impl NodeKind {
    /// Whether nodes of this kind evaluate to a value.
    pub fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Literal
                | NodeKind::Variable
                | NodeKind::Invocation
                | NodeKind::Constructor
                | NodeKind::Unary
                | NodeKind::Binary
                | NodeKind::Conditional
                | NodeKind::Expression
        )
    }

    /// Method invocations and constructor calls.
    pub fn is_abstract_invocation(self) -> bool {
        matches!(self, NodeKind::Invocation | NodeKind::Constructor)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Whether a variable reference reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Access {
    /// The variable is read.
    Read,
    /// The variable is assigned.
    Write,
}

/// Where a referenced variable lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Scope {
    /// A method-local variable or parameter.
    Local,
    /// A field of an object or class.
    Field,
}

/// Value of a literal node.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `null`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integral constant
    Int(i64),
    /// Floating-point constant
    Float(f64),
    /// Character constant
    Char(char),
    /// String constant
    Str(String),
}

impl Literal {
    /// Whether this is the `null` literal.
    pub fn is_null(&self) -> bool {
        matches!(self, Literal::Null)
    }

    /// The arithmetic negation of a numeric literal.
    pub fn negated(&self) -> Option<Literal> {
        match self {
            Literal::Int(v) => v.checked_neg().map(Literal::Int),
            Literal::Float(v) => Some(Literal::Float(-v)),
            _ => None,
        }
    }

    /// Static type name a literal of this value has, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Literal::Null => None,
            Literal::Bool(_) => Some("boolean"),
            Literal::Int(_) => Some("int"),
            Literal::Float(_) => Some("double"),
            Literal::Char(_) => Some("char"),
            Literal::Str(_) => Some("String"),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Int(v) => write!(f, "{v}"),
            // Debug keeps the fractional part ("5.0", not "5")
            Literal::Float(v) => write!(f, "{v:?}"),
            Literal::Char(c) => write!(f, "'{c}'"),
            Literal::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum UnaryOperator {
    /// `!x`
    Not,
    /// `-x`
    Neg,
    /// `+x`
    Pos,
    /// `~x`
    Complement,
    /// `++x`
    PreInc,
    /// `x++`
    PostInc,
    /// `--x`
    PreDec,
    /// `x--`
    PostDec,
}

impl UnaryOperator {
    /// Source symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::Neg => "-",
            UnaryOperator::Pos => "+",
            UnaryOperator::Complement => "~",
            UnaryOperator::PreInc | UnaryOperator::PostInc => "++",
            UnaryOperator::PreDec | UnaryOperator::PostDec => "--",
        }
    }

    /// Whether the operator is written after its operand.
    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOperator::PostInc | UnaryOperator::PostDec)
    }

    /// `++x` and `x++`
    pub fn is_increment(self) -> bool {
        matches!(self, UnaryOperator::PreInc | UnaryOperator::PostInc)
    }

    /// `--x` and `x--`
    pub fn is_decrement(self) -> bool {
        matches!(self, UnaryOperator::PreDec | UnaryOperator::PostDec)
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `instanceof`
    InstanceOf,
}

impl BinaryOperator {
    /// Source symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::Shl => "<<",
            BinaryOperator::Shr => ">>",
            BinaryOperator::UShr => ">>>",
            BinaryOperator::Eq => "==",
            BinaryOperator::Ne => "!=",
            BinaryOperator::Lt => "<",
            BinaryOperator::Le => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::Ge => ">=",
            BinaryOperator::InstanceOf => "instanceof",
        }
    }

    /// Operators whose result is a boolean.
    pub fn is_boolean(self) -> bool {
        self.is_relational() || matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }

    /// Comparison operators.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            BinaryOperator::Eq
                | BinaryOperator::Ne
                | BinaryOperator::Lt
                | BinaryOperator::Le
                | BinaryOperator::Gt
                | BinaryOperator::Ge
                | BinaryOperator::InstanceOf
        )
    }

    /// The relational operator testing the opposite condition (`==` / `!=`,
    /// `<` / `>=`, `<=` / `>`).
    pub fn complement(self) -> Option<BinaryOperator> {
        Some(match self {
            BinaryOperator::Eq => BinaryOperator::Ne,
            BinaryOperator::Ne => BinaryOperator::Eq,
            BinaryOperator::Lt => BinaryOperator::Ge,
            BinaryOperator::Ge => BinaryOperator::Lt,
            BinaryOperator::Le => BinaryOperator::Gt,
            BinaryOperator::Gt => BinaryOperator::Le,
            _ => return None,
        })
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Read-only view of a syntax-tree node.
///
/// Implementors are cheap handles (`Copy`) whose equality is node identity:
/// the same node seen in two operations compares equal. The tree the handle
/// points into must outlive every recognizer fed with it.
///
/// Only the structural queries are required. Kind-specific accessors default
/// to "not applicable" so an implementation can start small.
pub trait SyntaxNode: Copy + Eq + Hash + fmt::Debug {
    /// Syntactic category.
    fn kind(&self) -> NodeKind;

    /// Parent node, `None` for a root.
    fn parent(&self) -> Option<Self>;

    /// Position among the parent's children (0-indexed).
    fn position(&self) -> usize;

    /// Static type, when the node has one.
    fn type_name(&self) -> Option<&str>;

    /// Whether `other` occupies the same slot as this node under the same
    /// (or corresponding, across trees) parent.
    fn is_sibling_of(&self, other: &Self) -> bool;

    /// Whether both subtrees render to the same source text.
    fn deep_text_equals(&self, other: &Self) -> bool;

    /// Source-like rendering of the subtree.
    fn text(&self) -> String;

    /// Direct children in source order.
    fn children(&self) -> Vec<Self>;

    /// Whether both nodes carry the same static type. Untyped nodes never
    /// compare equal.
    fn type_equals(&self, other: &Self) -> bool {
        match (self.type_name(), other.type_name()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Simple name of a variable or callee.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Callee signature of an invocation or constructor call.
    fn signature(&self) -> Option<&str> {
        None
    }

    /// Read/write mode of a variable reference.
    fn access(&self) -> Option<Access> {
        None
    }

    /// Local/field scope of a variable reference.
    fn scope(&self) -> Option<Scope> {
        None
    }

    /// Value of a literal.
    fn literal(&self) -> Option<&Literal> {
        None
    }

    /// Operator of a unary node.
    fn unary_operator(&self) -> Option<UnaryOperator> {
        None
    }

    /// Operator of a binary node.
    fn binary_operator(&self) -> Option<BinaryOperator> {
        None
    }

    /// Operand of a unary node.
    fn operand(&self) -> Option<Self> {
        None
    }

    /// Left operand of a binary node.
    fn left(&self) -> Option<Self> {
        None
    }

    /// Right operand of a binary node.
    fn right(&self) -> Option<Self> {
        None
    }

    /// Receiver of an invocation or field access.
    fn target(&self) -> Option<Self> {
        None
    }

    /// Arguments of an invocation or constructor call.
    fn arguments(&self) -> Vec<Self> {
        Vec::new()
    }

    /// Condition of an `if`, loop, or ternary.
    fn condition(&self) -> Option<Self> {
        None
    }

    /// Then-branch of an `if` or ternary.
    fn then_branch(&self) -> Option<Self> {
        None
    }

    /// Else-branch of an `if` or ternary.
    fn else_branch(&self) -> Option<Self> {
        None
    }

    /// Statements of a block, in source order.
    fn statements(&self) -> Vec<Self> {
        Vec::new()
    }
}
