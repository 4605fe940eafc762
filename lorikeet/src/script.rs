//! Edit script simplification.
//!
//! A raw diff reports every node of an inserted, deleted, or moved subtree.
//! The recognizers expect subtree edits as a single operation on the subtree
//! root, so redundant child operations are dropped:
//! - an Insert whose parent is also inserted
//! - a Delete whose parent is also deleted
//! - a Move whose parent moved along with it, in both trees

use rapidhash::{RapidHashMap as HashMap, RapidHashSet as HashSet};

use crate::node::SyntaxNode;
use crate::operation::Operation;
use crate::{debug, trace};

/// Drop operations covered by an operation on an ancestor. Relative order of
/// the surviving operations is kept.
pub fn simplify<N: SyntaxNode>(ops: &[Operation<N>]) -> Vec<Operation<N>> {
    debug!(ops_count = ops.len(), "simplify start");

    let mut inserted: HashSet<N> = HashSet::default();
    let mut deleted: HashSet<N> = HashSet::default();
    // destination -> source
    let mut moves: HashMap<N, N> = HashMap::default();

    for op in ops {
        match *op {
            Operation::Insert(node) => {
                inserted.insert(node);
            }
            Operation::Delete(node) => {
                deleted.insert(node);
            }
            Operation::Move {
                source,
                destination,
            } => {
                moves.insert(destination, source);
            }
            Operation::Update { .. } => {}
        }
    }

    let covered = |set: &HashSet<N>, node: &N| node.parent().is_some_and(|p| set.contains(&p));

    // A child move is dominated only when its parents were parent and child
    // in the pre-edit tree too.
    let dominated_move = |source: &N, destination: &N| {
        let Some(parent_b) = destination.parent() else {
            return false;
        };
        match (moves.get(&parent_b), source.parent()) {
            (Some(parent_source), Some(parent_a)) => *parent_source == parent_a,
            _ => false,
        }
    };

    let result: Vec<Operation<N>> = ops
        .iter()
        .filter(|op| {
            let dominated = match op {
                Operation::Insert(node) => covered(&inserted, node),
                Operation::Delete(node) => covered(&deleted, node),
                Operation::Move {
                    source,
                    destination,
                } => dominated_move(source, destination),
                Operation::Update { .. } => false,
            };
            if dominated {
                trace!(%op, "simplify: dropping dominated op");
            }
            !dominated
        })
        .copied()
        .collect();

    debug!(before = ops.len(), after = result.len(), "simplify done");
    result
}
