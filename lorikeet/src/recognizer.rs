//! Recognizer lifecycle.
//!
//! Every pattern family is a small automaton over edit operations. The family
//! decides two things (see [`Pattern`]):
//!
//! 1. whether an operation *starts* a match, capturing what later predicates
//!    need, and
//! 2. whether an operation *continues* a partial match, abandons it, or
//!    completes it with a [`Rule`].
//!
//! [`Recognizer`] wraps a family with the shared bookkeeping: the current
//! state, the consumed-operation counter, and the status reported per step.

use core::mem;

use crate::node::SyntaxNode;
use crate::operation::Operation;
use crate::patterns::Family;
use crate::rule::Rule;
use crate::{debug, trace};

/// Outcome of feeding one operation to a recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The recognizer is (back) in its initial state.
    Rejected,
    /// A match is in progress.
    Candidate,
    /// A match completed; [`Recognize::rule`] holds its result.
    Accepted,
}

/// Result of one transition of a family automaton.
#[derive(Debug)]
pub enum Step<S> {
    /// Nothing started, or the partial match was abandoned.
    Idle,
    /// A partial match, with everything captured so far.
    Partial(S),
    /// The template completed.
    Accept(Rule),
}

/// A pattern family: the partial-match states of one automaton.
///
/// `Self` only ever represents partial matches; the initial and accepting
/// states are owned by [`Recognizer`].
pub trait Pattern: Sized + core::fmt::Debug {
    /// Node handle the automaton inspects.
    type Node: SyntaxNode;

    /// Which family this automaton recognizes.
    const FAMILY: Family;

    /// Transition out of the initial state. [`Step::Idle`] means `op` is not
    /// a start trigger.
    fn start(op: &Operation<Self::Node>) -> Step<Self>;

    /// Transition out of a partial-match state. [`Step::Idle`] abandons the
    /// match; the operation is not re-offered to [`Pattern::start`].
    fn advance(self, op: &Operation<Self::Node>) -> Step<Self>;
}

/// Driver-facing recognizer contract, object safe.
pub trait Recognize<N> {
    /// The family this recognizer matches.
    fn family(&self) -> Family;

    /// Advance by one operation.
    fn consume(&mut self, op: &Operation<N>) -> Status;

    /// The rule of the match that just completed, or `None` unless the last
    /// [`Recognize::consume`] returned [`Status::Accepted`].
    fn rule(&self) -> Option<&Rule>;

    /// Drop any partial match and return to the initial state.
    fn reset(&mut self);

    /// Operations consumed by the match in progress (0 when idle).
    fn consumed(&self) -> usize;
}

#[derive(Debug)]
enum State<P> {
    Initial,
    Matching(P),
    Accepting(Rule),
}

/// One automaton instance: current state plus consumed counter.
#[derive(Debug)]
pub struct Recognizer<P> {
    state: State<P>,
    consumed: usize,
}

impl<P> Default for Recognizer<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Recognizer<P> {
    /// A recognizer in its initial state.
    pub fn new() -> Self {
        Self {
            state: State::Initial,
            consumed: 0,
        }
    }

    /// Whether no match is in progress and none just completed.
    pub fn is_initial(&self) -> bool {
        matches!(self.state, State::Initial)
    }
}

impl<P: Pattern> Recognize<P::Node> for Recognizer<P> {
    fn family(&self) -> Family {
        P::FAMILY
    }

    #[cfg_attr(not(any(test, feature = "tracing")), allow(unused_variables))]
    fn consume(&mut self, op: &Operation<P::Node>) -> Status {
        let step = match mem::replace(&mut self.state, State::Initial) {
            State::Initial => P::start(op),
            State::Accepting(_) => {
                // a completed match never continues; restart from Initial
                self.consumed = 0;
                P::start(op)
            }
            State::Matching(partial) => partial.advance(op),
        };

        self.state = match step {
            Step::Idle => State::Initial,
            Step::Partial(partial) => State::Matching(partial),
            Step::Accept(rule) => State::Accepting(rule),
        };

        match &self.state {
            State::Initial => {
                self.consumed = 0;
                Status::Rejected
            }
            State::Matching(partial) => {
                self.consumed += 1;
                trace!(family = ?P::FAMILY, consumed = self.consumed, ?partial, "candidate");
                Status::Candidate
            }
            State::Accepting(rule) => {
                self.consumed += 1;
                debug!(family = ?P::FAMILY, consumed = self.consumed, %rule, "accepted");
                Status::Accepted
            }
        }
    }

    fn rule(&self) -> Option<&Rule> {
        match &self.state {
            State::Accepting(rule) => Some(rule),
            State::Initial | State::Matching(_) => None,
        }
    }

    fn reset(&mut self) {
        self.state = State::Initial;
        self.consumed = 0;
    }

    fn consumed(&self) -> usize {
        self.consumed
    }
}
