//! Driving a set of recognizers over one operation stream.
//!
//! Every family gets its own [`Recognize`] instance; they share nothing, so
//! [`Registry::scan`] can run them on separate threads over the same stream.

use facet::Facet;
use rayon::prelude::*;

use crate::node::SyntaxNode;
use crate::operation::{Operation, RawOperation};
use crate::patterns::Family;
use crate::recognizer::{Recognize, Status};
use crate::rule::Rule;
use crate::script;
use crate::tracing_macros::warning;
use crate::{debug, trace};

/// Configuration for a [`Registry`].
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Families to recognize, in reporting order. Duplicates are ignored.
    pub families: Vec<Family>,

    /// Run recognizers on the rayon thread pool during [`Registry::scan`].
    pub parallel: bool,

    /// Collapse subtree operations with [`script::simplify`] before scanning.
    pub simplify: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            families: Family::ALL.to_vec(),
            parallel: true,
            simplify: true,
        }
    }
}

/// A completed match found by [`Registry::scan`].
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct Match {
    /// Family that matched
    pub family: Family,
    /// What it recognized
    pub rule: Rule,
    /// Index of the accepting operation in the scanned stream
    pub end: usize,
    /// Number of operations the match consumed, ending at `end`
    pub length: usize,
}

type BoxedRecognizer<'n, N> = Box<dyn Recognize<N> + Send + 'n>;

/// One recognizer per configured family.
pub struct Registry<'n, N> {
    config: RegistryConfig,
    recognizers: Vec<BoxedRecognizer<'n, N>>,
}

impl<'n, N> Default for Registry<'n, N>
where
    N: SyntaxNode + Send + Sync + 'n,
{
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl<'n, N> Registry<'n, N>
where
    N: SyntaxNode + Send + Sync + 'n,
{
    /// Build fresh recognizers for `config.families`.
    pub fn new(mut config: RegistryConfig) -> Self {
        let mut seen = Vec::with_capacity(config.families.len());
        config.families.retain(|family| {
            let first = !seen.contains(family);
            seen.push(*family);
            first
        });
        let recognizers = config
            .families
            .iter()
            .map(|family| family.recognizer())
            .collect();
        Self {
            config,
            recognizers,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Families, in reporting order.
    pub fn families(&self) -> &[Family] {
        &self.config.families
    }

    /// Feed one operation to every recognizer. Statuses come back in
    /// [`Registry::families`] order.
    pub fn consume(&mut self, op: &Operation<N>) -> Vec<Status> {
        trace!(%op, "consume");
        self.recognizers
            .iter_mut()
            .map(|recognizer| recognizer.consume(op))
            .collect()
    }

    /// Feed an unvalidated record. A malformed record matches nothing: every
    /// recognizer drops its partial match and reports [`Status::Rejected`].
    #[cfg_attr(not(any(test, feature = "tracing")), allow(unused_variables))]
    pub fn consume_record(&mut self, raw: RawOperation<N>) -> Vec<Status> {
        match Operation::try_from(raw) {
            Ok(op) => self.consume(&op),
            Err(error) => {
                warning!(%error, "malformed operation record, resetting recognizers");
                self.reset();
                vec![Status::Rejected; self.recognizers.len()]
            }
        }
    }

    /// Rules of the recognizers whose last operation completed a match.
    pub fn rules(&self) -> Vec<(Family, &Rule)> {
        self.recognizers
            .iter()
            .filter_map(|recognizer| recognizer.rule().map(|rule| (recognizer.family(), rule)))
            .collect()
    }

    /// Return every recognizer to its initial state.
    pub fn reset(&mut self) {
        for recognizer in &mut self.recognizers {
            recognizer.reset();
        }
    }

    /// Reset, then run the whole stream through every recognizer and collect
    /// the matches, ordered by `end` and then by family order.
    ///
    /// With [`RegistryConfig::simplify`] set, `end` indexes the simplified
    /// stream.
    pub fn scan(&mut self, ops: &[Operation<N>]) -> Vec<Match> {
        self.reset();
        let simplified;
        let ops = if self.config.simplify {
            simplified = script::simplify(ops);
            simplified.as_slice()
        } else {
            ops
        };

        let scan_one = |recognizer: &mut BoxedRecognizer<'n, N>| -> Vec<Match> {
            let family = recognizer.family();
            let mut found = Vec::new();
            for (end, op) in ops.iter().enumerate() {
                if recognizer.consume(op) != Status::Accepted {
                    continue;
                }
                if let Some(rule) = recognizer.rule() {
                    found.push(Match {
                        family,
                        rule: rule.clone(),
                        end,
                        length: recognizer.consumed(),
                    });
                }
            }
            found
        };

        let per_family: Vec<Vec<Match>> = if self.config.parallel {
            self.recognizers.par_iter_mut().map(scan_one).collect()
        } else {
            self.recognizers.iter_mut().map(scan_one).collect()
        };

        let mut matches: Vec<Match> = per_family.into_iter().flatten().collect();
        matches.sort_by_key(|m| m.end);
        debug!(
            ops = ops.len(),
            matches = matches.len(),
            parallel = self.config.parallel,
            "scan done"
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Literal, UnaryOperator};
    use crate::operation::OperationKind;
    use crate::syntax::{Node, SyntaxTree};
    use facet_testhelpers::test;

    #[test]
    fn test_duplicate_families_ignored() {
        let registry: Registry<'_, Node<'_>> = Registry::new(RegistryConfig {
            families: vec![Family::NegateInt, Family::IncDecRemoval, Family::NegateInt],
            ..RegistryConfig::default()
        });
        assert_eq!(
            registry.families(),
            &[Family::NegateInt, Family::IncDecRemoval]
        );
    }

    #[test]
    fn test_malformed_record_resets_everyone() {
        let mut tree = SyntaxTree::new();
        let five = tree.literal(Literal::Int(5));
        let neg = tree.unary(UnaryOperator::Neg, five);
        let before = tree.ret(Some(neg));
        let folded = tree.literal(Literal::Int(-5));
        let after = tree.ret(Some(folded));
        tree.link(before, after);

        let mut registry = Registry::new(RegistryConfig {
            families: vec![Family::NegateInt],
            ..RegistryConfig::default()
        });
        assert_eq!(
            registry.consume(&Operation::Delete(tree.node(neg))),
            vec![Status::Candidate]
        );

        let broken = RawOperation {
            kind: OperationKind::Move,
            source: tree.node(five),
            destination: None,
        };
        assert_eq!(registry.consume_record(broken), vec![Status::Rejected]);

        // the partial match is gone: the insert alone starts a new attempt
        let statuses = registry.consume_record(RawOperation::from(Operation::Insert(
            tree.node(folded),
        )));
        assert_eq!(statuses, vec![Status::Candidate]);
        assert!(registry.rules().is_empty());
    }
}
