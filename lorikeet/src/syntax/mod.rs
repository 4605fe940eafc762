//! Arena-backed reference implementation of [`SyntaxNode`].
//!
//! A single [`SyntaxTree`] holds both sides of an edit: the pre-edit and the
//! post-edit trees are simply two roots in the same `indextree` arena. Nodes
//! matched by the differ are linked with [`SyntaxTree::link`], which is what
//! lets a deleted node and an inserted node count as siblings even though
//! they live under different parents.
//!
//! Trees are built bottom-up: every constructor takes already-built children,
//! so each node's structural hash (Merkle style) is computed once, at
//! creation, and [`SyntaxNode::deep_text_equals`] is a hash comparison
//! confirmed by rendering.

mod build;
mod render;

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ptr;

use indextree::Arena;
pub use indextree::NodeId;
use rapidhash::RapidHashMap as HashMap;

use crate::node::{Access, BinaryOperator, Literal, NodeKind, Scope, SyntaxNode, UnaryOperator};

/// Structural hash of a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeHash(pub u64);

/// Kind-specific payload of a node.
#[derive(Debug, Clone)]
pub(crate) enum Detail {
    Literal(Literal),
    Variable {
        name: String,
        access: Access,
        scope: Scope,
        has_target: bool,
    },
    Invocation {
        name: String,
        signature: String,
        has_target: bool,
    },
    Constructor {
        signature: String,
    },
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    Conditional,
    If {
        has_then: bool,
        has_else: bool,
    },
    Block,
    Loop,
    Return,
    Other {
        label: String,
    },
    Type {
        name: String,
    },
}

/// Data stored per arena slot.
#[derive(Debug, Clone)]
pub struct SyntaxData {
    kind: NodeKind,
    ty: Option<String>,
    detail: Detail,
    hash: NodeHash,
}

impl SyntaxData {
    /// Syntactic category.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Static type, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.ty.as_deref()
    }

    /// Structural hash of the subtree rooted here.
    pub fn hash(&self) -> NodeHash {
        self.hash
    }
}

/// Arena holding the pre-edit and post-edit trees plus their node matching.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    arena: Arena<SyntaxData>,
    /// Matched pairs, stored in both directions
    links: HashMap<NodeId, NodeId>,
}

impl SyntaxTree {
    /// An empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to a node.
    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node { tree: self, id }
    }

    /// Raw data of a node.
    pub fn get(&self, id: NodeId) -> &SyntaxData {
        self.arena[id].get()
    }

    /// Number of nodes in the arena (both trees).
    pub fn node_count(&self) -> usize {
        self.arena.iter().count()
    }

    /// Record that `a` (pre-edit) and `b` (post-edit) are the same node.
    pub fn link(&mut self, a: NodeId, b: NodeId) {
        self.links.insert(a, b);
        self.links.insert(b, a);
    }

    /// The node `id` was matched with, if any.
    pub fn counterpart(&self, id: NodeId) -> Option<NodeId> {
        self.links.get(&id).copied()
    }

    /// Whether `a` and `b` are the same node or a matched pair.
    pub fn corresponds(&self, a: NodeId, b: NodeId) -> bool {
        a == b || self.counterpart(a) == Some(b)
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent())
    }
}

/// Copyable handle to a node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> Node<'a> {
    /// Arena id of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn data(&self) -> &'a SyntaxData {
        self.tree.arena[self.id].get()
    }

    fn wrap(&self, id: NodeId) -> Node<'a> {
        Node {
            tree: self.tree,
            id,
        }
    }

    fn child(&self, index: usize) -> Option<Node<'a>> {
        self.id
            .children(&self.tree.arena)
            .nth(index)
            .map(|id| self.wrap(id))
    }

    fn target_offset(&self) -> usize {
        match self.data().detail {
            Detail::Invocation {
                has_target: true, ..
            }
            | Detail::Variable {
                has_target: true, ..
            } => 1,
            _ => 0,
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl Hash for Node<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}({})", self.kind(), usize::from(self.id), self.text())
    }
}

impl SyntaxNode for Node<'_> {
    fn kind(&self) -> NodeKind {
        self.data().kind
    }

    fn parent(&self) -> Option<Self> {
        self.tree.parent_of(self.id).map(|id| self.wrap(id))
    }

    fn position(&self) -> usize {
        match self.tree.parent_of(self.id) {
            Some(parent) => parent
                .children(&self.tree.arena)
                .position(|c| c == self.id)
                .unwrap_or(0),
            None => 0,
        }
    }

    fn type_name(&self) -> Option<&str> {
        self.data().ty.as_deref()
    }

    fn is_sibling_of(&self, other: &Self) -> bool {
        if self == other {
            return false;
        }
        match (self.tree.parent_of(self.id), other.tree.parent_of(other.id)) {
            (Some(a), Some(b)) => {
                self.tree.corresponds(a, b) && self.position() == other.position()
            }
            _ => false,
        }
    }

    fn deep_text_equals(&self, other: &Self) -> bool {
        self.data().hash == other.data().hash && self.text() == other.text()
    }

    fn text(&self) -> String {
        let mut out = String::new();
        render::render(*self, &mut out);
        out
    }

    fn children(&self) -> Vec<Self> {
        self.id
            .children(&self.tree.arena)
            .map(|id| self.wrap(id))
            .collect()
    }

    fn name(&self) -> Option<&str> {
        match &self.data().detail {
            Detail::Variable { name, .. } | Detail::Invocation { name, .. } => Some(name),
            Detail::Type { name } => Some(name),
            _ => None,
        }
    }

    fn signature(&self) -> Option<&str> {
        match &self.data().detail {
            Detail::Invocation { signature, .. } | Detail::Constructor { signature } => {
                Some(signature)
            }
            _ => None,
        }
    }

    fn access(&self) -> Option<Access> {
        match self.data().detail {
            Detail::Variable { access, .. } => Some(access),
            _ => None,
        }
    }

    fn scope(&self) -> Option<Scope> {
        match self.data().detail {
            Detail::Variable { scope, .. } => Some(scope),
            _ => None,
        }
    }

    fn literal(&self) -> Option<&Literal> {
        match &self.data().detail {
            Detail::Literal(value) => Some(value),
            _ => None,
        }
    }

    fn unary_operator(&self) -> Option<UnaryOperator> {
        match self.data().detail {
            Detail::Unary(op) => Some(op),
            _ => None,
        }
    }

    fn binary_operator(&self) -> Option<BinaryOperator> {
        match self.data().detail {
            Detail::Binary(op) => Some(op),
            _ => None,
        }
    }

    fn operand(&self) -> Option<Self> {
        match self.data().detail {
            Detail::Unary(_) => self.child(0),
            _ => None,
        }
    }

    fn left(&self) -> Option<Self> {
        match self.data().detail {
            Detail::Binary(_) => self.child(0),
            _ => None,
        }
    }

    fn right(&self) -> Option<Self> {
        match self.data().detail {
            Detail::Binary(_) => self.child(1),
            _ => None,
        }
    }

    fn target(&self) -> Option<Self> {
        if self.target_offset() == 1 {
            self.child(0)
        } else {
            None
        }
    }

    fn arguments(&self) -> Vec<Self> {
        match self.data().detail {
            Detail::Invocation { .. } | Detail::Constructor { .. } => self
                .id
                .children(&self.tree.arena)
                .skip(self.target_offset())
                .map(|id| self.wrap(id))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn condition(&self) -> Option<Self> {
        match self.data().detail {
            Detail::Conditional | Detail::If { .. } | Detail::Loop => self.child(0),
            _ => None,
        }
    }

    fn then_branch(&self) -> Option<Self> {
        match self.data().detail {
            Detail::Conditional | Detail::If { has_then: true, .. } => self.child(1),
            _ => None,
        }
    }

    fn else_branch(&self) -> Option<Self> {
        match self.data().detail {
            Detail::Conditional => self.child(2),
            Detail::If {
                has_then,
                has_else: true,
            } => self.child(1 + usize::from(has_then)),
            _ => None,
        }
    }

    fn statements(&self) -> Vec<Self> {
        match self.data().detail {
            Detail::Block => self.children(),
            _ => Vec::new(),
        }
    }
}
