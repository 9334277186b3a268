/**
 * Generic nondeterministic finite automaton representation.
 *
 * Every move consumes exactly one symbol, there are no epsilon-transitions.
 */

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Debug};
use crate::error::Result;
use crate::state::{self, State};
use crate::validate;
use crate::Recognizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton<T> {
    states: BTreeSet<State>,
    alphabet: BTreeSet<T>,
    transitions: BTreeMap<State, BTreeMap<T, BTreeSet<State>>>,
    start: State,
    accepting: BTreeSet<State>,
}

impl <T> Automaton<T> where T : Clone + Ord + Debug {
    /// Builds an automaton from its five components. Transitions are
    /// `(from, symbol, to)` triples, triples sharing `(from, symbol)` add up
    /// to one target set.
    pub fn new<SI, AI, TI, FI>(states: SI, alphabet: AI, transitions: TI,
        start: State, accepting: FI) -> Result<Self>
        where SI : IntoIterator<Item = State>,
              AI : IntoIterator<Item = T>,
              TI : IntoIterator<Item = (State, T, State)>,
              FI : IntoIterator<Item = State> {

        let states: BTreeSet<State> = states.into_iter().collect();
        let alphabet: BTreeSet<T> = alphabet.into_iter().collect();
        validate::start(&states, &start)?;
        let accepting = validate::accepting(&states, accepting)?;

        let mut table: BTreeMap<State, BTreeMap<T, BTreeSet<State>>> = BTreeMap::new();
        for (from, on, to) in transitions {
            validate::edge(&states, &alphabet, &from, &on, &to)?;
            table.entry(from).or_insert_with(BTreeMap::new)
                .entry(on).or_insert_with(BTreeSet::new)
                .insert(to);
        }

        Ok(Self{ states, alphabet, transitions: table, start, accepting })
    }
}

impl <T> Automaton<T> {
    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    pub fn alphabet(&self) -> &BTreeSet<T> {
        &self.alphabet
    }

    pub fn start(&self) -> &State {
        &self.start
    }

    pub fn accepting(&self) -> &BTreeSet<State> {
        &self.accepting
    }

    pub fn is_accepting(&self, state: &State) -> bool {
        self.accepting.contains(state)
    }

    /// Every edge as a `(from, symbol, to)` triple, ordered by source and symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, &T, &State)> + '_ {
        self.transitions.iter()
            .flat_map(|(from, row)| row.iter()
                .flat_map(move |(on, targets)| targets.iter().map(move |to| (from, on, to))))
    }

    /// True iff no `(state, symbol)` pair has more than one target.
    pub fn is_deterministic(&self) -> bool {
        self.transitions.values()
            .flat_map(|row| row.values())
            .all(|targets| targets.len() <= 1)
    }

    /// The `(state, symbol)` pairs that break determinism, with their targets.
    pub fn nondeterministic_pairs(&self) -> impl Iterator<Item = (&State, &T, &BTreeSet<State>)> + '_ {
        self.transitions.iter()
            .flat_map(|(from, row)| row.iter()
                .filter(|(_, targets)| targets.len() > 1)
                .map(move |(on, targets)| (from, on, targets)))
    }
}

impl <T> Automaton<T> where T : Ord {
    pub fn targets(&self, from: &State, on: &T) -> Option<&BTreeSet<State>> {
        self.transitions.get(from).and_then(|row| row.get(on))
    }

    /// The union of the targets of every state in `from` on `on`.
    pub fn batch_transition<'a, I>(&self, from: I, on: &T) -> BTreeSet<State>
        where I : IntoIterator<Item = &'a State> {

        let mut result = BTreeSet::new();
        for state in from {
            if let Some(targets) = self.targets(state, on) {
                result.extend(targets.iter().cloned());
            }
        }
        result
    }
}

impl <T> Recognizer<T> for Automaton<T> where T : Ord {
    fn accepts<I>(&self, input: I) -> bool where I : IntoIterator<Item = T> {
        let mut current = BTreeSet::new();
        current.insert(self.start.clone());

        for symbol in input {
            if !self.alphabet.contains(&symbol) {
                return false;
            }
            current = self.batch_transition(&current, &symbol);
            if current.is_empty() {
                return false;
            }
        }

        current.iter().any(|s| self.is_accepting(s))
    }
}

impl <T> fmt::Display for Automaton<T> where T : Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "states: ")?;
        state::fmt_set(f, &self.states)?;
        writeln!(f)?;
        writeln!(f, "start: {}", self.start)?;
        write!(f, "accepting: ")?;
        state::fmt_set(f, &self.accepting)?;
        writeln!(f)?;
        for (from, row) in &self.transitions {
            for (on, targets) in row {
                write!(f, "δ({}, {:?}) = ", from, on)?;
                state::fmt_set(f, targets)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn states(labels: &[&str]) -> Vec<State> {
        labels.iter().map(|l| State::from(*l)).collect()
    }

    fn edge(from: &str, on: char, to: &str) -> (State, char, State) {
        (from.into(), on, to.into())
    }

    /// a+ b, guessing on every 'a' whether it was the last one.
    fn guessing() -> Automaton<char> {
        Automaton::new(
            states(&["s", "m", "e"]),
            "ab".chars(),
            vec![edge("s", 'a', "s"), edge("s", 'a', "m"), edge("m", 'b', "e")],
            "s".into(),
            states(&["e"])).unwrap()
    }

    #[test]
    fn multi_valued_pair_is_nondeterministic() {
        let nfa = guessing();
        assert!(!nfa.is_deterministic());

        let pairs: Vec<_> = nfa.nondeterministic_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, &State::from("s"));
        assert_eq!(pairs[0].1, &'a');
        assert_eq!(pairs[0].2.len(), 2);
    }

    #[test]
    fn single_valued_relation_is_deterministic() {
        let nfa = Automaton::new(
            states(&["p", "q"]),
            "ab".chars(),
            vec![edge("p", 'a', "q"), edge("q", 'b', "p"), edge("p", 'a', "q")],
            "p".into(),
            states(&["q"])).unwrap();
        assert!(nfa.is_deterministic());
        assert_eq!(nfa.transitions().count(), 2);
    }

    #[test]
    fn batch_transition_unions_targets() {
        let nfa = guessing();
        let from: BTreeSet<State> = states(&["s", "m"]).into_iter().collect();

        let on_a = nfa.batch_transition(&from, &'a');
        assert_eq!(on_a, states(&["m", "s"]).into_iter().collect());

        let on_b = nfa.batch_transition(&from, &'b');
        assert_eq!(on_b, states(&["e"]).into_iter().collect());

        assert!(nfa.batch_transition(&from, &'x').is_empty());
        assert!(nfa.batch_transition(&BTreeSet::new(), &'a').is_empty());
    }

    #[test]
    fn simulation_follows_every_branch() {
        let nfa = guessing();
        assert!(nfa.accepts("ab".chars()));
        assert!(nfa.accepts("aaab".chars()));
        assert!(!nfa.accepts("".chars()));
        assert!(!nfa.accepts("b".chars()));
        assert!(!nfa.accepts("aba".chars()));
        assert!(!nfa.accepts("abx".chars()));
    }

    #[test]
    fn undeclared_components_are_rejected() {
        let unknown_start = Automaton::new(
            states(&["q0"]), "a".chars(), Vec::new(), "q9".into(), Vec::new());
        assert_eq!(unknown_start, Err(Error::UnknownStart("q9".into())));

        let unknown_target = Automaton::new(
            states(&["q0"]), "a".chars(), vec![edge("q0", 'a', "q1")], "q0".into(), Vec::new());
        assert!(matches!(unknown_target, Err(Error::UnknownState{ .. })));

        let unknown_symbol = Automaton::new(
            states(&["q0"]), "a".chars(), vec![edge("q0", 'b', "q0")], "q0".into(), Vec::new());
        assert!(matches!(unknown_symbol, Err(Error::UnknownSymbol{ .. })));

        let unknown_accepting = Automaton::<char>::new(
            states(&["q0"]), "a".chars(), Vec::new(), "q0".into(), states(&["q1"]));
        assert_eq!(unknown_accepting, Err(Error::UnknownAcceptingState("q1".into())));
    }
}
