//! Structural predicates shared by several pattern families.

use smallvec::{SmallVec, smallvec};

use crate::node::{Access, BinaryOperator, NodeKind, Scope, SyntaxNode, UnaryOperator};
use crate::operation::Operation;
use crate::rule::{Branch, Enclosing};

/// Candidate nodes captured by a partial match. Guarded branches rarely hold
/// more than a handful of uses.
pub type Candidates<N> = SmallVec<[N; 4]>;

/// A literal, or a unary operator applied directly to a literal (`-1`, `!true`).
pub fn is_trivial_constant<N: SyntaxNode>(node: &N) -> bool {
    match node.kind() {
        NodeKind::Literal => true,
        NodeKind::Unary => node
            .operand()
            .is_some_and(|operand| operand.kind() == NodeKind::Literal),
        _ => false,
    }
}

/// Whether `node` is a variable reference in the given scope.
pub fn is_variable_in<N: SyntaxNode>(node: &N, scope: Scope) -> bool {
    node.kind() == NodeKind::Variable && node.scope() == Some(scope)
}

/// A read of a local variable.
pub fn is_local_read<N: SyntaxNode>(node: &N) -> bool {
    is_variable_in(node, Scope::Local) && node.access() == Some(Access::Read)
}

/// A read of a field.
pub fn is_field_read<N: SyntaxNode>(node: &N) -> bool {
    is_variable_in(node, Scope::Field) && node.access() == Some(Access::Read)
}

/// Simple name of a variable or callee, else the callee signature, else the
/// source text.
pub fn name_of<N: SyntaxNode>(node: &N) -> String {
    node.name()
        .or_else(|| node.signature())
        .map_or_else(|| node.text(), str::to_owned)
}

/// `true` for `boolean` and its boxed form.
pub fn is_boolean<N: SyntaxNode>(node: &N) -> bool {
    matches!(node.type_name(), Some("boolean" | "Boolean"))
}

/// Primitive numeric types and their boxed forms.
pub fn is_numeric<N: SyntaxNode>(node: &N) -> bool {
    matches!(
        node.type_name(),
        Some(
            "byte"
                | "short"
                | "int"
                | "long"
                | "float"
                | "double"
                | "Byte"
                | "Short"
                | "Integer"
                | "Long"
                | "Float"
                | "Double"
        )
    )
}

/// A unary node with the given operator.
pub fn is_unary<N: SyntaxNode>(node: &N, op: UnaryOperator) -> bool {
    node.unary_operator() == Some(op)
}

/// Splits `expr == null` / `null != expr` into the compared expression and the
/// operator. Either side may hold the `null`.
pub fn null_comparison<N: SyntaxNode>(condition: &N) -> Option<(N, BinaryOperator)> {
    let op = condition.binary_operator()?;
    if !matches!(op, BinaryOperator::Eq | BinaryOperator::Ne) {
        return None;
    }
    let (left, right) = (condition.left()?, condition.right()?);
    let is_null = |n: &N| n.literal().is_some_and(|l| l.is_null());
    match (is_null(&left), is_null(&right)) {
        (false, true) => Some((left, op)),
        (true, false) => Some((right, op)),
        _ => None,
    }
}

/// The branch a null check protects: `else` after `== null`, `then` after
/// `!= null`.
pub fn guarded_branch(op: BinaryOperator) -> Branch {
    match op {
        BinaryOperator::Eq => Branch::Else,
        _ => Branch::Then,
    }
}

/// All nodes of the subtree rooted at `root`, root included, in pre-order.
pub fn descendants<N: SyntaxNode>(root: N) -> Vec<N> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        out.push(node);
        let children = node.children();
        stack.extend(children.into_iter().rev());
    }
    out
}

/// Uses of `receiver` inside `branch`: field accesses (when `fields`) and
/// invocations (when `calls`) whose target renders like `receiver`.
pub fn uses_of<N: SyntaxNode>(branch: N, receiver: &N, fields: bool, calls: bool) -> Candidates<N> {
    descendants(branch)
        .into_iter()
        .filter(|node| {
            let wanted = match node.kind() {
                NodeKind::Invocation => calls,
                NodeKind::Variable => fields && node.scope() == Some(Scope::Field),
                _ => false,
            };
            wanted
                && node
                    .target()
                    .is_some_and(|target| target.deep_text_equals(receiver))
        })
        .collect()
}

/// Operand count of a call: arguments plus a receiver that is an object
/// rather than a type name.
pub fn call_arity<N: SyntaxNode>(call: &N) -> usize {
    let receiver = call
        .target()
        .is_some_and(|target| target.kind() != NodeKind::Type);
    call.arguments().len() + usize::from(receiver)
}

/// Operand count of an operator node, if it is one.
pub fn operator_arity<N: SyntaxNode>(node: &N) -> Option<usize> {
    match node.kind() {
        NodeKind::Unary => Some(1),
        NodeKind::Binary => Some(2),
        _ => None,
    }
}

/// Source symbol of a unary or binary operator node.
pub fn operator_symbol<N: SyntaxNode>(node: &N) -> Option<&'static str> {
    node.unary_operator()
        .map(UnaryOperator::symbol)
        .or_else(|| node.binary_operator().map(BinaryOperator::symbol))
}

/// Post-edit nodes an operation brings into play: the inserted node, or where
/// a moved node landed.
pub fn counterparts<N: SyntaxNode>(op: &Operation<N>) -> Candidates<N> {
    match *op {
        Operation::Insert(node) | Operation::Move { destination: node, .. } => smallvec![node],
        Operation::Delete(_) | Operation::Update { .. } => Candidates::new(),
    }
}

/// `a` and `b` occupy the same slot, or one is the other's parent.
pub fn is_positioned<N: SyntaxNode>(a: &N, b: &N) -> bool {
    a.is_sibling_of(b)
        || b.is_sibling_of(a)
        || a.parent().as_ref() == Some(b)
        || b.parent().as_ref() == Some(a)
}

/// Whether `negated` is the logical negation of `plain`: `!plain`, or the
/// complementary comparison over the same operands.
pub fn is_negation_of<N: SyntaxNode>(negated: &N, plain: &N) -> bool {
    if is_unary(negated, UnaryOperator::Not) {
        return negated
            .operand()
            .is_some_and(|operand| operand.deep_text_equals(plain));
    }
    let (Some(a), Some(b)) = (negated.binary_operator(), plain.binary_operator()) else {
        return false;
    };
    a.complement() == Some(b)
        && same_operand(negated.left(), plain.left())
        && same_operand(negated.right(), plain.right())
}

fn same_operand<N: SyntaxNode>(a: Option<N>, b: Option<N>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.deep_text_equals(&b),
        _ => false,
    }
}

/// Statement kind whose condition slot holds `node`, if any.
pub fn enclosing_condition<N: SyntaxNode>(node: &N) -> Option<Enclosing> {
    let parent = node.parent()?;
    if parent.condition().as_ref() != Some(node) {
        return None;
    }
    match parent.kind() {
        NodeKind::If => Some(Enclosing::If),
        NodeKind::While => Some(Enclosing::While),
        NodeKind::Do => Some(Enclosing::Do),
        NodeKind::Conditional => Some(Enclosing::Ternary),
        _ => None,
    }
}

/// Statements of a branch: a block's statements, or the branch itself when it
/// is a single statement.
pub fn branch_statements<N: SyntaxNode>(branch: Option<N>) -> Vec<N> {
    match branch {
        Some(node) if node.kind() == NodeKind::Block => node.statements(),
        Some(node) => vec![node],
        None => Vec::new(),
    }
}
