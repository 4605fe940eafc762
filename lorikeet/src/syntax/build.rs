//! Bottom-up tree construction.

use core::hash::{Hash, Hasher};

use indextree::NodeId;
use rapidhash::RapidHasher;

use super::{Detail, NodeHash, SyntaxData, SyntaxTree};
use crate::node::{Access, BinaryOperator, Literal, NodeKind, Scope, UnaryOperator};

impl Detail {
    /// Feed the node's own label (not its children) into a hasher.
    fn hash_label<H: Hasher>(&self, state: &mut H) {
        match self {
            Detail::Literal(value) => value.to_string().hash(state),
            Detail::Variable {
                name,
                access,
                scope,
                has_target,
            } => {
                name.hash(state);
                access.hash(state);
                scope.hash(state);
                has_target.hash(state);
            }
            Detail::Invocation {
                name,
                signature,
                has_target,
            } => {
                name.hash(state);
                signature.hash(state);
                has_target.hash(state);
            }
            Detail::Constructor { signature } => signature.hash(state),
            Detail::Unary(op) => op.hash(state),
            Detail::Binary(op) => op.hash(state),
            Detail::If { has_then, has_else } => {
                has_then.hash(state);
                has_else.hash(state);
            }
            Detail::Other { label } => label.hash(state),
            Detail::Type { name } => name.hash(state),
            Detail::Conditional | Detail::Block | Detail::Loop | Detail::Return => {}
        }
    }
}

impl SyntaxTree {
    fn push(
        &mut self,
        kind: NodeKind,
        ty: Option<String>,
        detail: Detail,
        children: &[NodeId],
    ) -> NodeId {
        let mut hasher = RapidHasher::default();
        kind.hash(&mut hasher);
        detail.hash_label(&mut hasher);
        for &child in children {
            self.arena[child].get().hash.hash(&mut hasher);
        }
        let hash = NodeHash(hasher.finish());

        let id = self.arena.new_node(SyntaxData {
            kind,
            ty,
            detail,
            hash,
        });
        for &child in children {
            id.append(child, &mut self.arena);
        }
        id
    }

    fn type_of(&self, id: NodeId) -> Option<String> {
        self.arena[id].get().ty.clone()
    }

    /// A literal typed after its value (`null` is untyped).
    pub fn literal(&mut self, value: Literal) -> NodeId {
        let ty = value.type_name().map(str::to_owned);
        self.push(NodeKind::Literal, ty, Detail::Literal(value), &[])
    }

    /// A literal with an explicit static type (e.g. a `long` constant).
    pub fn typed_literal(&mut self, value: Literal, ty: &str) -> NodeId {
        self.push(
            NodeKind::Literal,
            Some(ty.to_owned()),
            Detail::Literal(value),
            &[],
        )
    }

    /// A read of a local variable.
    pub fn local(&mut self, name: &str, ty: &str) -> NodeId {
        self.variable(name, ty, Access::Read, Scope::Local, None)
    }

    /// A read of a field of the enclosing object.
    pub fn field(&mut self, name: &str, ty: &str) -> NodeId {
        self.variable(name, ty, Access::Read, Scope::Field, None)
    }

    /// A read of `target.name`.
    pub fn field_of(&mut self, target: NodeId, name: &str, ty: &str) -> NodeId {
        self.variable(name, ty, Access::Read, Scope::Field, Some(target))
    }

    /// Any variable reference.
    pub fn variable(
        &mut self,
        name: &str,
        ty: &str,
        access: Access,
        scope: Scope,
        target: Option<NodeId>,
    ) -> NodeId {
        let detail = Detail::Variable {
            name: name.to_owned(),
            access,
            scope,
            has_target: target.is_some(),
        };
        let children: Vec<NodeId> = target.into_iter().collect();
        self.push(NodeKind::Variable, Some(ty.to_owned()), detail, &children)
    }

    fn signature(&self, name: &str, args: &[NodeId]) -> String {
        let types: Vec<String> = args
            .iter()
            .map(|&arg| self.type_of(arg).unwrap_or_else(|| "?".to_owned()))
            .collect();
        format!("{name}({})", types.join(","))
    }

    /// `target.name(args)` returning `ty`, or `name(args)` without a target.
    pub fn call(&mut self, name: &str, ty: &str, target: Option<NodeId>, args: &[NodeId]) -> NodeId {
        let detail = Detail::Invocation {
            name: name.to_owned(),
            signature: self.signature(name, args),
            has_target: target.is_some(),
        };
        let children: Vec<NodeId> = target.into_iter().chain(args.iter().copied()).collect();
        self.push(NodeKind::Invocation, Some(ty.to_owned()), detail, &children)
    }

    /// `new ty(args)`.
    pub fn construct(&mut self, ty: &str, args: &[NodeId]) -> NodeId {
        let detail = Detail::Constructor {
            signature: self.signature(ty, args),
        };
        self.push(NodeKind::Constructor, Some(ty.to_owned()), detail, args)
    }

    /// A unary operator application. `!` is boolean, the rest keep the
    /// operand's type.
    pub fn unary(&mut self, op: UnaryOperator, operand: NodeId) -> NodeId {
        let ty = match op {
            UnaryOperator::Not => Some("boolean".to_owned()),
            _ => self.type_of(operand),
        };
        self.push(NodeKind::Unary, ty, Detail::Unary(op), &[operand])
    }

    /// A binary operator application. Comparisons and logical operators are
    /// boolean, the rest take the left operand's type.
    pub fn binary(&mut self, op: BinaryOperator, left: NodeId, right: NodeId) -> NodeId {
        let ty = if op.is_boolean() {
            Some("boolean".to_owned())
        } else {
            self.type_of(left)
        };
        self.push(NodeKind::Binary, ty, Detail::Binary(op), &[left, right])
    }

    /// `condition ? then : otherwise`, typed after `then` (or `otherwise` if
    /// `then` is untyped).
    pub fn ternary(&mut self, condition: NodeId, then: NodeId, otherwise: NodeId) -> NodeId {
        let ty = self.type_of(then).or_else(|| self.type_of(otherwise));
        self.push(
            NodeKind::Conditional,
            ty,
            Detail::Conditional,
            &[condition, then, otherwise],
        )
    }

    /// `if (condition) then else otherwise`; either branch may be missing.
    pub fn if_stmt(
        &mut self,
        condition: NodeId,
        then: Option<NodeId>,
        otherwise: Option<NodeId>,
    ) -> NodeId {
        let detail = Detail::If {
            has_then: then.is_some(),
            has_else: otherwise.is_some(),
        };
        let children: Vec<NodeId> = core::iter::once(condition)
            .chain(then)
            .chain(otherwise)
            .collect();
        self.push(NodeKind::If, None, detail, &children)
    }

    /// `{ statements }`.
    pub fn block(&mut self, statements: &[NodeId]) -> NodeId {
        self.push(NodeKind::Block, None, Detail::Block, statements)
    }

    /// `while (condition) body`.
    pub fn while_loop(&mut self, condition: NodeId, body: NodeId) -> NodeId {
        self.push(NodeKind::While, None, Detail::Loop, &[condition, body])
    }

    /// `do body while (condition)`.
    pub fn do_loop(&mut self, body: NodeId, condition: NodeId) -> NodeId {
        self.push(NodeKind::Do, None, Detail::Loop, &[condition, body])
    }

    /// `for (; condition; ) body`.
    pub fn for_loop(&mut self, condition: NodeId, body: NodeId) -> NodeId {
        self.push(NodeKind::For, None, Detail::Loop, &[condition, body])
    }

    /// `return value`.
    pub fn ret(&mut self, value: Option<NodeId>) -> NodeId {
        let children: Vec<NodeId> = value.into_iter().collect();
        self.push(NodeKind::Return, None, Detail::Return, &children)
    }

    /// Any other statement, rendered as `label(children)`.
    pub fn statement(&mut self, label: &str, children: &[NodeId]) -> NodeId {
        let detail = Detail::Other {
            label: label.to_owned(),
        };
        self.push(NodeKind::Statement, None, detail, children)
    }

    /// Any other expression, rendered as `label(children)`.
    pub fn expression(&mut self, label: &str, ty: Option<&str>, children: &[NodeId]) -> NodeId {
        let detail = Detail::Other {
            label: label.to_owned(),
        };
        self.push(
            NodeKind::Expression,
            ty.map(str::to_owned),
            detail,
            children,
        )
    }

    /// A type reference, e.g. `Math` in `Math.abs(x)`.
    pub fn type_ref(&mut self, name: &str) -> NodeId {
        let detail = Detail::Type {
            name: name.to_owned(),
        };
        self.push(NodeKind::Type, None, detail, &[])
    }
}
