
use ch_fsa::{nfa, State, Recognizer};

/// Every word over `alphabet` of length at most `max_len`, shortest first.
pub fn words_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut result = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for word in &layer {
            for ch in alphabet {
                let mut longer = word.clone();
                longer.push(*ch);
                next.push(longer);
            }
        }
        result.extend(next.iter().cloned());
        layer = next;
    }
    result
}

pub fn assert_same_language<A, B>(a: &A, b: &B, alphabet: &[char], max_len: usize)
    where A : Recognizer<char>, B : Recognizer<char> {
    for word in words_up_to(alphabet, max_len) {
        assert_eq!(a.accepts(word.chars()), b.accepts(word.chars()),
            "the automata disagree on {:?}", word);
    }
}

/// q0..q3 over {a, b, c}; `(q2, c)` leads to both q0 and q3.
pub fn branching_nfa() -> nfa::Automaton<char> {
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
        vec!["q3".into()]).unwrap()
}
