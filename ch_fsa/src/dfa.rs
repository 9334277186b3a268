/**
 * Generic deterministic finite automaton representation.
 *
 * The transition function is partial: a missing edge rejects the input.
 */

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::{self, Debug};
use tracing::{debug, trace};
use crate::error::{Error, Result};
use crate::nfa::Automaton as NFA;
use crate::state::{self, State};
use crate::validate;
use crate::Recognizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton<T> {
    states: BTreeSet<State>,
    alphabet: BTreeSet<T>,
    transitions: BTreeMap<State, BTreeMap<T, State>>,
    start: State,
    accepting: BTreeSet<State>,
}

impl <T> Automaton<T> where T : Clone + Ord + Debug {
    /// Builds an automaton from its five components. Transitions are
    /// `(from, symbol, to)` triples, two triples with the same `(from, symbol)`
    /// but different targets are an error.
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

        let mut table: BTreeMap<State, BTreeMap<T, State>> = BTreeMap::new();
        for (from, on, to) in transitions {
            validate::edge(&states, &alphabet, &from, &on, &to)?;
            let row = table.entry(from.clone()).or_insert_with(BTreeMap::new);
            if let Some(existing) = row.get(&on) {
                if *existing != to {
                    return Err(Error::ConflictingTransition{
                        from,
                        symbol: format!("{:?}", on),
                        first: existing.clone(),
                        second: to,
                    });
                }
            }
            row.insert(on, to);
        }

        Ok(Self{ states, alphabet, transitions: table, start, accepting })
    }

    /// Reinterprets a nondeterministic automaton that happens to be
    /// deterministic, keeping its state labels.
    pub fn from_deterministic(nfa: &NFA<T>) -> Result<Self> {
        if let Some((state, on, targets)) = nfa.nondeterministic_pairs().next() {
            return Err(Error::Nondeterministic{
                state: state.clone(),
                symbol: format!("{:?}", on),
                targets: targets.len(),
            });
        }

        Self::new(
            nfa.states().iter().cloned(),
            nfa.alphabet().iter().cloned(),
            nfa.transitions().map(|(from, on, to)| (from.clone(), on.clone(), to.clone())),
            nfa.start().clone(),
            nfa.accepting().iter().cloned())
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
            .flat_map(|(from, row)| row.iter().map(move |(on, to)| (from, on, to)))
    }

    /// The outgoing edges of a single state, ordered by symbol.
    pub fn transitions_from<'a>(&'a self, from: &State) -> impl Iterator<Item = (&'a T, &'a State)> + 'a {
        self.transitions.get(from).into_iter().flat_map(|row| row.iter())
    }
}

impl <T> Automaton<T> where T : Ord {
    pub fn transition(&self, from: &State, on: &T) -> Option<&State> {
        self.transitions.get(from).and_then(|row| row.get(on))
    }
}

impl <T> Recognizer<T> for Automaton<T> where T : Ord {
    fn accepts<I>(&self, input: I) -> bool where I : IntoIterator<Item = T> {
        let mut current = &self.start;
        for symbol in input {
            if !self.alphabet.contains(&symbol) {
                return false;
            }
            match self.transition(current, &symbol) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.is_accepting(current)
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
        for (from, on, to) in self.transitions() {
            writeln!(f, "δ({}, {:?}) = {}", from, on, to)?;
        }
        Ok(())
    }
}

/**
 * Determinization.
 */

/// The result of a subset construction: the automaton and the set of
/// nondeterministic states each of its states stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Determinized<T> {
    pub automaton: Automaton<T>,
    pub subsets: BTreeMap<State, BTreeSet<State>>,
}

fn subset_label(index: usize) -> State {
    State::new(format!("S{}", index))
}

/// Breadth-first subset construction. Subsets are labelled `S0`, `S1`, ...
/// in discovery order, symbols are tried in ascending order, so the result
/// only depends on the input automaton. Empty subsets get no edge, the
/// result may be partial.
pub fn subset_construction<T>(nfa: &NFA<T>) -> Determinized<T> where T : Clone + Ord {
    let mut labels: BTreeMap<BTreeSet<State>, State> = BTreeMap::new();
    let mut table: BTreeMap<State, BTreeMap<T, State>> = BTreeMap::new();
    let mut frontier = VecDeque::new();

    // We need the start state's mapping
    {
        let initial: BTreeSet<State> = std::iter::once(nfa.start().clone()).collect();
        let label = subset_label(0);
        labels.insert(initial.clone(), label.clone());
        frontier.push_back((initial, label));
    }

    while let Some((subset, from)) = frontier.pop_front() {
        for on in nfa.alphabet() {
            let next = nfa.batch_transition(&subset, on);
            if next.is_empty() {
                continue;
            }

            let to = match labels.get(&next) {
                Some(label) => label.clone(),
                None => {
                    let label = subset_label(labels.len());
                    trace!(state = %label, size = next.len(), "discovered subset");
                    labels.insert(next.clone(), label.clone());
                    frontier.push_back((next, label.clone()));
                    label
                },
            };

            table.entry(from.clone()).or_insert_with(BTreeMap::new).insert(on.clone(), to);
        }
    }

    let accepting = labels.iter()
        .filter(|(subset, _)| subset.iter().any(|s| nfa.is_accepting(s)))
        .map(|(_, label)| label.clone())
        .collect();
    let subsets: BTreeMap<State, BTreeSet<State>> = labels.into_iter()
        .map(|(subset, label)| (label, subset))
        .collect();

    debug!(states = subsets.len(), source_states = nfa.states().len(), "subset construction finished");

    let automaton = Automaton{
        states: subsets.keys().cloned().collect(),
        alphabet: nfa.alphabet().clone(),
        transitions: table,
        start: subset_label(0),
        accepting,
    };
    Determinized{ automaton, subsets }
}

impl <T> From<&NFA<T>> for Automaton<T> where T : Clone + Ord {
    fn from(nfa: &NFA<T>) -> Self {
        subset_construction(nfa).automaton
    }
}

impl <T> From<NFA<T>> for Automaton<T> where T : Clone + Ord {
    fn from(nfa: NFA<T>) -> Self {
        Self::from(&nfa)
    }
}
