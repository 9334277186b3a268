/**
 * The two instances the labs run on.
 */

use ch_fsa::{nfa, State};
use ch_grammar::Grammar;

pub const LAB_GRAMMAR: &str = "
S -> a B | b B
B -> b D | c B | a S
D -> b | a D
";

/// Checked for membership after every derivation run.
pub const TEST_WORDS: [&str; 8] = ["", "b", "ab", "aaaab", "ccc", "ac", "bbbb", "aab"];

pub fn lab_grammar() -> ch_grammar::Result<Grammar<char>> {
    LAB_GRAMMAR.parse()
}

/// Four states over {a, b, c}, `q2` branches to both `q0` and `q3` on `c`.
pub fn branching_nfa() -> ch_fsa::Result<nfa::Automaton<char>> {
    let edge = |from: &str, on: char, to: &str| (State::from(from), on, State::from(to));
    nfa::Automaton::new(
        vec!["q0".into(), "q1".into(), "q2".into(), "q3".into()],
        "abc".chars(),
        vec![
            edge("q0", 'a', "q1"),
            edge("q0", 'b', "q2"),
            edge("q1", 'a', "q3"),
            edge("q1", 'b', "q2"),
            edge("q2", 'c', "q0"),
            edge("q2", 'c', "q3"),
        ],
        "q0".into(),
        vec!["q3".into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ch_fsa::Recognizer;
    use ch_grammar::{rnd, ChomskyType};

    #[test]
    fn lab_grammar_shape() {
        let grammar = lab_grammar().unwrap();
        assert_eq!(grammar.nonterminals().len(), 3);
        assert_eq!(grammar.terminals().len(), 3);
        assert_eq!(grammar.start().name(), "S");
        assert_eq!(grammar.classify(), ChomskyType::Regular);
    }

    #[test]
    fn branching_nfa_is_nondeterministic() {
        let nfa = branching_nfa().unwrap();
        assert!(!nfa.is_deterministic());
        assert_eq!(nfa.nondeterministic_pairs().count(), 1);
    }

    #[test]
    fn lab_grammar_keeps_its_labels() {
        let grammar = lab_grammar().unwrap();
        assert!(grammar.to_nfa().unwrap().is_deterministic());

        let dfa = grammar.to_dfa().unwrap();
        assert_eq!(dfa.start().label(), "S");
        // S, B, D and the final state
        assert_eq!(dfa.states().len(), 4);
    }

    #[test]
    fn fixed_words_are_all_rejected() {
        let dfa = lab_grammar().unwrap().to_dfa().unwrap();
        for word in TEST_WORDS.iter() {
            assert!(!dfa.accepts(word.chars()), "{:?} should be rejected", word);
        }
        for word in &["bbb", "abb", "bcbb", "aabbb", "bccbaab"] {
            assert!(dfa.accepts(word.chars()), "{:?} should be accepted", word);
        }
    }

    #[test]
    fn derived_words_are_accepted() {
        let grammar = lab_grammar().unwrap();
        let dfa = grammar.to_dfa().unwrap();
        for word in grammar.generate_n(30, &mut rnd::seeded(2020)).unwrap() {
            assert!(word.len() >= 3);
            assert!(dfa.accepts(word.iter().cloned()));
        }
    }
}
