
mod common;

use ch_fsa::{dfa, nfa, Recognizer};
use ch_grammar::{ChomskyType, Grammar, Linearity};
use common::assert_same_language;

/// `Q2` either returns to the start or finishes on 'c'.
const BRANCHING: &str = "
Q0 -> a Q1 | b Q2
Q1 -> a | b Q2
Q2 -> c Q0 | c
";

fn branching_nfa() -> nfa::Automaton<char> {
    BRANCHING.parse::<Grammar<char>>().unwrap().to_nfa().unwrap()
}

#[test]
fn right_linear_grammar_can_branch() {
    let nfa = branching_nfa();
    assert!(!nfa.is_deterministic());
    // Q0, Q1, Q2 and the final state
    assert_eq!(nfa.states().len(), 4);
    assert!(nfa.accepts("bc".chars()));
    assert!(nfa.accepts("bcaa".chars()));
}

#[test]
fn determinized_automaton_gives_regular_grammar() {
    let dfa = dfa::Automaton::from(&branching_nfa());
    let grammar = Grammar::from(&dfa);

    let report = grammar.classification();
    assert_eq!(report.kind, ChomskyType::Regular);
    assert_eq!(report.linearity, Linearity::Right);
    assert_eq!(grammar.nonterminals().len(), dfa.states().len());
    assert_eq!(grammar.start().name(), dfa.start().label());
}

#[test]
fn automaton_grammar_round_trip_keeps_the_language() {
    let nfa = branching_nfa();
    let dfa = dfa::Automaton::from(&nfa);
    let back = Grammar::from(&dfa).to_dfa().unwrap();

    assert_same_language(&dfa, &back, &['a', 'b', 'c', 'x'], 6);
    assert_same_language(&nfa, &back, &['a', 'b', 'c'], 6);
    assert!(back.accepts("aa".chars()));
    assert!(back.accepts("bcaa".chars()));
    assert!(back.accepts("bc".chars()));
    assert!(!back.accepts("b".chars()));
}

#[test]
fn round_trip_with_accepting_start() {
    // Accepts every word with an even number of 'a's, including the empty one
    let dfa = dfa::Automaton::new(
        vec!["even".into(), "odd".into()],
        "ab".chars(),
        vec![
            ("even".into(), 'a', "odd".into()),
            ("even".into(), 'b', "even".into()),
            ("odd".into(), 'a', "even".into()),
            ("odd".into(), 'b', "odd".into()),
        ],
        "even".into(),
        vec!["even".into()]).unwrap();
    let back = Grammar::from(&dfa).to_dfa().unwrap();

    assert!(back.accepts("".chars()));
    assert_same_language(&dfa, &back, &['a', 'b'], 6);
}
