//! Recognizes higher-level change templates in tree edit scripts.
//!
//! A tree differ describes the change between two versions of a syntax tree
//! as a stream of Insert, Delete, Move and Update operations. lorikeet scans
//! that stream for recurring shapes such as "a field read was replaced by an
//! accessor call" or "an `if` was replaced by its then-block", and reports
//! each occurrence as a [`Rule`].
//!
//! lorikeet provides:
//! - **Node interface**: [`SyntaxNode`], the questions the recognizers ask of any AST
//! - **Recognizers**: one small automaton per change-template [`Family`]
//! - **Registry**: drive every family over one stream, optionally in parallel
//! - **Simplification**: collapse per-node subtree edits into one operation
//! - **Reference tree**: an arena-backed [`SyntaxNode`] implementation in [`syntax`]
//!
//! # Example
//!
//! ```rust
//! use lorikeet::{Family, Operation, Registry, RegistryConfig, Rule};
//! use lorikeet::syntax::SyntaxTree;
//!
//! // return this.x;  ->  return getX();
//! let mut tree = SyntaxTree::new();
//! let x = tree.field("x", "int");
//! let before = tree.ret(Some(x));
//! let get_x = tree.call("getX", "int", None, &[]);
//! let after = tree.ret(Some(get_x));
//! tree.link(before, after);
//!
//! let ops = [
//!     Operation::Delete(tree.node(x)),
//!     Operation::Insert(tree.node(get_x)),
//! ];
//! let mut registry = Registry::new(RegistryConfig::default());
//! let matches = registry.scan(&ops);
//!
//! assert!(matches.iter().any(|m| m.family == Family::AccessorSwap
//!     && m.rule == Rule::FieldToMethod { field: "x".into(), method: "getX".into() }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

mod tracing_macros;
pub(crate) use tracing_macros::{debug, trace};

/// Node capability interface
pub mod node;
/// Edit operations
pub mod operation;
/// Pattern families
pub mod patterns;
/// Structural predicates shared by the families
pub mod predicates;
/// Recognizer lifecycle
pub mod recognizer;
/// Driving many recognizers over one stream
pub mod registry;
/// Recognized change templates
pub mod rule;
/// Edit script simplification
pub mod script;
/// Reference syntax tree
pub mod syntax;

pub use node::{Access, BinaryOperator, Literal, NodeKind, Scope, SyntaxNode, UnaryOperator};
pub use operation::{Operation, OperationError, OperationKind, RawOperation};
pub use patterns::Family;
pub use recognizer::{Pattern, Recognize, Recognizer, Status, Step};
pub use registry::{Match, Registry, RegistryConfig};
pub use rule::{Branch, ConstantSite, Enclosing, GuardedUsage, Rule, Side};
