//! Edit operations.
//!
//! An [`Operation`] is one action of an edit script turning the pre-edit tree
//! into the post-edit tree. Inserted nodes live in the post-edit tree, deleted
//! nodes in the pre-edit tree; moves and updates pair a pre-edit node with its
//! post-edit counterpart.

use core::fmt;

use facet::Facet;

use crate::node::SyntaxNode;

/// Discriminant of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum OperationKind {
    /// A node was added to the post-edit tree.
    Insert,
    /// A node was removed from the pre-edit tree.
    Delete,
    /// A node was relocated.
    Move,
    /// A node's label or value changed in place.
    Update,
}

impl OperationKind {
    /// Whether operations of this kind pair a source with a destination.
    pub fn has_destination(self) -> bool {
        matches!(self, OperationKind::Move | OperationKind::Update)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One edit action.
///
/// Insert and Delete carry exactly one node; Move and Update carry two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation<N> {
    /// Insert a node (post-edit tree).
    Insert(N),
    /// Delete a node (pre-edit tree).
    Delete(N),
    /// Move a node.
    Move {
        /// The node in the pre-edit tree
        source: N,
        /// Its slot in the post-edit tree
        destination: N,
    },
    /// Update a node in place.
    Update {
        /// The node in the pre-edit tree
        source: N,
        /// Its counterpart in the post-edit tree
        destination: N,
    },
}

impl<N: Copy> Operation<N> {
    /// Shorthand for [`Operation::Move`].
    pub fn moved(source: N, destination: N) -> Self {
        Operation::Move {
            source,
            destination,
        }
    }

    /// Shorthand for [`Operation::Update`].
    pub fn updated(source: N, destination: N) -> Self {
        Operation::Update {
            source,
            destination,
        }
    }

    /// The same operation over different node handles.
    pub fn map<M>(self, mut f: impl FnMut(N) -> M) -> Operation<M> {
        match self {
            Operation::Insert(node) => Operation::Insert(f(node)),
            Operation::Delete(node) => Operation::Delete(f(node)),
            Operation::Move {
                source,
                destination,
            } => Operation::Move {
                source: f(source),
                destination: f(destination),
            },
            Operation::Update {
                source,
                destination,
            } => Operation::Update {
                source: f(source),
                destination: f(destination),
            },
        }
    }

    /// The operation's kind.
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Insert(_) => OperationKind::Insert,
            Operation::Delete(_) => OperationKind::Delete,
            Operation::Move { .. } => OperationKind::Move,
            Operation::Update { .. } => OperationKind::Update,
        }
    }

    /// The node the operation acts on.
    pub fn source(&self) -> N {
        match *self {
            Operation::Insert(node) | Operation::Delete(node) => node,
            Operation::Move { source, .. } | Operation::Update { source, .. } => source,
        }
    }

    /// The post-edit counterpart, for moves and updates.
    pub fn destination(&self) -> Option<N> {
        match *self {
            Operation::Insert(_) | Operation::Delete(_) => None,
            Operation::Move { destination, .. } | Operation::Update { destination, .. } => {
                Some(destination)
            }
        }
    }

    /// The inserted node, if this is an insert.
    pub fn inserted(&self) -> Option<N> {
        match *self {
            Operation::Insert(node) => Some(node),
            _ => None,
        }
    }

    /// The deleted node, if this is a delete.
    pub fn deleted(&self) -> Option<N> {
        match *self {
            Operation::Delete(node) => Some(node),
            _ => None,
        }
    }

    /// `(source, destination)`, if this is a move.
    pub fn move_pair(&self) -> Option<(N, N)> {
        match *self {
            Operation::Move {
                source,
                destination,
            } => Some((source, destination)),
            _ => None,
        }
    }

    /// `(source, destination)`, if this is an update.
    pub fn update_pair(&self) -> Option<(N, N)> {
        match *self {
            Operation::Update {
                source,
                destination,
            } => Some((source, destination)),
            _ => None,
        }
    }
}

impl<N: SyntaxNode> fmt::Display for Operation<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Insert(node) => write!(f, "Insert({} {})", node.kind(), node.text()),
            Operation::Delete(node) => write!(f, "Delete({} {})", node.kind(), node.text()),
            Operation::Move {
                source,
                destination,
            } => write!(
                f,
                "Move({} {} → @{})",
                source.kind(),
                source.text(),
                destination.position()
            ),
            Operation::Update {
                source,
                destination,
            } => write!(f, "Update({} → {})", source.text(), destination.text()),
        }
    }
}

/// An operation record as an external producer may hand it over, before its
/// shape has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawOperation<N> {
    /// What kind of edit this is
    pub kind: OperationKind,
    /// The node acted on
    pub source: N,
    /// The post-edit counterpart (moves and updates only)
    pub destination: Option<N>,
}

/// A raw operation record that violates the one-node/two-node invariant.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum OperationError {
    /// {kind} operation has no destination node
    MissingDestination { kind: OperationKind },

    /// {kind} operation must not carry a destination node
    UnexpectedDestination { kind: OperationKind },
}

impl<N> TryFrom<RawOperation<N>> for Operation<N> {
    type Error = OperationError;

    fn try_from(raw: RawOperation<N>) -> Result<Self, Self::Error> {
        let RawOperation {
            kind,
            source,
            destination,
        } = raw;
        match (kind, destination) {
            (OperationKind::Insert, None) => Ok(Operation::Insert(source)),
            (OperationKind::Delete, None) => Ok(Operation::Delete(source)),
            (OperationKind::Move, Some(destination)) => Ok(Operation::Move {
                source,
                destination,
            }),
            (OperationKind::Update, Some(destination)) => Ok(Operation::Update {
                source,
                destination,
            }),
            (OperationKind::Insert | OperationKind::Delete, Some(_)) => {
                Err(OperationError::UnexpectedDestination { kind })
            }
            (OperationKind::Move | OperationKind::Update, None) => {
                Err(OperationError::MissingDestination { kind })
            }
        }
    }
}

impl<N> From<Operation<N>> for RawOperation<N> {
    fn from(op: Operation<N>) -> Self {
        match op {
            Operation::Insert(source) => RawOperation {
                kind: OperationKind::Insert,
                source,
                destination: None,
            },
            Operation::Delete(source) => RawOperation {
                kind: OperationKind::Delete,
                source,
                destination: None,
            },
            Operation::Move {
                source,
                destination,
            } => RawOperation {
                kind: OperationKind::Move,
                source,
                destination: Some(destination),
            },
            Operation::Update {
                source,
                destination,
            } => RawOperation {
                kind: OperationKind::Update,
                source,
                destination: Some(destination),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_raw_operation_roundtrip_shapes() {
        let op: Operation<u32> = Operation::moved(1, 2);
        let raw = RawOperation::from(op);
        assert_eq!(raw.kind, OperationKind::Move);
        assert_eq!(raw.destination, Some(2));
        assert_eq!(Operation::try_from(raw), Ok(op));
    }

    #[test]
    fn test_move_without_destination_is_rejected() {
        let raw = RawOperation {
            kind: OperationKind::Move,
            source: 7u32,
            destination: None,
        };
        assert_eq!(
            Operation::try_from(raw),
            Err(OperationError::MissingDestination {
                kind: OperationKind::Move
            })
        );
    }

    #[test]
    fn test_insert_with_destination_is_rejected() {
        let raw = RawOperation {
            kind: OperationKind::Insert,
            source: 7u32,
            destination: Some(8),
        };
        let err = Operation::try_from(raw).unwrap_err();
        assert_eq!(
            err,
            OperationError::UnexpectedDestination {
                kind: OperationKind::Insert
            }
        );
        assert!(err.to_string().contains("Insert"));
    }

    #[test]
    fn test_accessors() {
        let op: Operation<u32> = Operation::Delete(3);
        assert_eq!(op.kind(), OperationKind::Delete);
        assert_eq!(op.source(), 3);
        assert_eq!(op.destination(), None);
        assert_eq!(op.deleted(), Some(3));
        assert_eq!(op.inserted(), None);
        assert!(OperationKind::Update.has_destination());
    }
}
