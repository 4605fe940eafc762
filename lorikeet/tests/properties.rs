//! Properties every family's recognizer keeps, checked over the fixture
//! stream that contains one accepting edit per family.

mod common;

use facet_testhelpers::test;
use lorikeet::syntax::{Node, SyntaxTree};
use lorikeet::{Family, Operation, Recognize, Rule, Status};

type Trace = Vec<(Status, usize, Option<Rule>)>;

fn trace<'a>(recognizer: &mut dyn Recognize<Node<'a>>, ops: &[Operation<Node<'a>>]) -> Trace {
    ops.iter()
        .map(|op| {
            let status = recognizer.consume(op);
            (status, recognizer.consumed(), recognizer.rule().cloned())
        })
        .collect()
}

#[test]
fn test_each_case_accepts_on_its_last_operation() {
    let mut tree = SyntaxTree::new();
    let cases = common::all_cases(&mut tree);
    assert_eq!(cases.len(), Family::ALL.len());

    for (case, family) in cases.iter().zip(Family::ALL) {
        assert_eq!(case.family, family);
        let ops = case.resolve(&tree);
        let mut r = family.recognizer::<Node<'_>>();
        let statuses: Vec<Status> = ops.iter().map(|op| r.consume(op)).collect();

        let (last, prefix) = statuses.split_last().expect("cases are non-empty");
        assert_eq!(*last, Status::Accepted, "{family}: {statuses:?}");
        assert!(
            prefix.iter().all(|s| *s == Status::Candidate),
            "{family}: {statuses:?}"
        );
        assert_eq!(r.rule(), Some(&case.rule), "{family}");
        assert_eq!(r.consumed(), ops.len(), "{family}");
    }
}

#[test]
fn test_same_stream_same_answers() {
    let mut tree = SyntaxTree::new();
    let (_, stream) = common::combined_stream(&mut tree);
    let ops = common::resolve(&tree, &stream);

    for family in Family::ALL {
        let mut r = family.recognizer::<Node<'_>>();
        let first = trace(r.as_mut(), &ops);
        r.reset();
        let again = trace(r.as_mut(), &ops);
        let fresh = trace(family.recognizer::<Node<'_>>().as_mut(), &ops);
        assert_eq!(first, again, "{family}");
        assert_eq!(first, fresh, "{family}");
    }
}

#[test]
fn test_consumed_count_follows_status() {
    let mut tree = SyntaxTree::new();
    let (_, stream) = common::combined_stream(&mut tree);
    let ops = common::resolve(&tree, &stream);

    for family in Family::ALL {
        let mut r = family.recognizer::<Node<'_>>();
        let mut previous = 0;
        for (status, consumed, rule) in trace(r.as_mut(), &ops) {
            match status {
                Status::Rejected => assert_eq!(consumed, 0, "{family}"),
                Status::Candidate | Status::Accepted => assert!(consumed > 0, "{family}"),
            }
            if status == Status::Candidate && previous > 0 {
                assert!(
                    consumed == previous + 1 || consumed == 1,
                    "{family}: {previous} -> {consumed}"
                );
            }
            assert_eq!(rule.is_some(), status == Status::Accepted, "{family}");
            previous = consumed;
        }
    }
}

#[test]
fn test_cases_are_minimal() {
    let mut tree = SyntaxTree::new();
    let cases = common::all_cases(&mut tree);

    for case in &cases {
        let ops = case.resolve(&tree);
        for skip in 0..ops.len() {
            let shorter: Vec<_> = ops
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, op)| *op)
                .collect();
            let mut r = case.family.recognizer::<Node<'_>>();
            let accepted = shorter
                .iter()
                .any(|op| r.consume(op) == Status::Accepted);
            assert!(!accepted, "{} accepted without op {skip}", case.family);
        }
    }
}

#[test]
fn test_recognizers_do_not_interfere() {
    let mut tree = SyntaxTree::new();
    let (_, stream) = common::combined_stream(&mut tree);
    let ops = common::resolve(&tree, &stream);

    for family in Family::ALL {
        let alone = trace(family.recognizer::<Node<'_>>().as_mut(), &ops);
        for other in Family::ALL {
            let mut mine = family.recognizer::<Node<'_>>();
            let mut theirs = other.recognizer::<Node<'_>>();
            let interleaved: Trace = ops
                .iter()
                .map(|op| {
                    theirs.consume(op);
                    let status = mine.consume(op);
                    theirs.consume(op);
                    (status, mine.consumed(), mine.rule().cloned())
                })
                .collect();
            assert_eq!(alone, interleaved, "{family} next to {other}");
        }
    }
}

#[test]
fn test_accepting_recognizer_restarts_on_next_operation() {
    let mut tree = SyntaxTree::new();
    let case = common::operator_replacement(&mut tree);
    let ops = case.resolve(&tree);
    let twice = [ops[0], ops[0]];

    let mut r = Family::OperatorReplacement.recognizer::<Node<'_>>();
    let statuses: Vec<Status> = twice.iter().map(|op| r.consume(op)).collect();
    assert_eq!(statuses, [Status::Accepted, Status::Accepted]);
    assert_eq!(r.consumed(), 1);
}
