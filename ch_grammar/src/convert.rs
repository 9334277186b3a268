/**
 * Conversions between right-linear grammars and finite automata.
 */

use std::collections::{BTreeMap, BTreeSet};
use std::convert::TryFrom;
use std::fmt::Debug;
use ch_fsa::{dfa, nfa, State};
use tracing::debug;
use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::symbol::{self, Nonterminal, Phrase, Symbol};

/**
 * Automaton to grammar.
 */

/// States become nonterminals, the alphabet becomes the terminals. For every
/// edge `q --a--> p` the alternative `a p` is added to `q`, plus `a` alone if
/// `p` is accepting. Accepting states also get an ε alternative.
impl <T> From<&dfa::Automaton<T>> for Grammar<T> where T : Clone + Ord {
    fn from(dfa: &dfa::Automaton<T>) -> Self {
        let mut productions = BTreeMap::new();

        for state in dfa.states() {
            let mut alternatives: Vec<Phrase<T>> = Vec::new();
            for (on, to) in dfa.transitions_from(state) {
                alternatives.push(vec![Symbol::Terminal(on.clone()), Symbol::Nonterminal(to.into())]);
                if dfa.is_accepting(to) {
                    alternatives.push(vec![Symbol::Terminal(on.clone())]);
                }
            }
            if dfa.is_accepting(state) {
                alternatives.push(vec![Symbol::Epsilon]);
            }
            productions.insert(vec![Symbol::Nonterminal(state.into())], alternatives);
        }

        debug!(nonterminals = dfa.states().len(), "automaton converted to grammar");

        Grammar::from_parts(
            dfa.states().iter().map(Nonterminal::from).collect(),
            dfa.alphabet().clone(),
            productions,
            dfa.start().into())
    }
}

/**
 * Grammar to automaton.
 */

/// The label of the accepting state that single-terminal alternatives lead to,
/// primed until it clashes with no nonterminal.
fn final_state<T>(grammar: &Grammar<T>) -> State {
    let mut label = String::from("F");
    while grammar.nonterminals().contains(&Nonterminal::new(label.as_str())) {
        label.push('\'');
    }
    State::new(label)
}

/// Only defined for right-linear grammars: every left side a single
/// nonterminal, every alternative `a B`, `a`, `ε` or empty. `A → a B` becomes
/// `A --a--> B`, `A → a` becomes `A --a--> F` for a fresh accepting state `F`.
/// Nonterminals with an ε or empty alternative are accepting as well.
impl <T> TryFrom<&Grammar<T>> for nfa::Automaton<T> where T : Clone + Ord + Debug {
    type Error = Error;

    fn try_from(grammar: &Grammar<T>) -> Result<Self> {
        let accept = final_state(grammar);
        let mut transitions = Vec::new();
        let mut accepting = BTreeSet::new();
        accepting.insert(accept.clone());

        for (left, right) in grammar.rules() {
            let not_right_linear = || Error::NotRightLinear{ production: symbol::describe(left, right) };
            let from = match left.as_slice() {
                [Symbol::Nonterminal(n)] => State::from(n),
                _ => return Err(not_right_linear()),
            };
            match right.as_slice() {
                [] | [Symbol::Epsilon] => {
                    accepting.insert(from);
                },
                [Symbol::Terminal(t)] => transitions.push((from, t.clone(), accept.clone())),
                [Symbol::Terminal(t), Symbol::Nonterminal(n)] => transitions.push((from, t.clone(), State::from(n))),
                _ => return Err(not_right_linear()),
            }
        }

        let states: Vec<State> = grammar.nonterminals().iter()
            .map(State::from)
            .chain(std::iter::once(accept))
            .collect();

        Ok(nfa::Automaton::new(
            states,
            grammar.terminals().iter().cloned(),
            transitions,
            State::from(grammar.start()),
            accepting)?)
    }
}

impl <T> Grammar<T> where T : Clone + Ord + Debug {
    pub fn to_nfa(&self) -> Result<nfa::Automaton<T>> {
        nfa::Automaton::try_from(self)
    }

    /// Converts a right-linear grammar to a deterministic automaton. When the
    /// grammar never offers two ways on the same terminal, the nonterminal
    /// names are kept as state labels, otherwise the subset construction
    /// relabels the states.
    pub fn to_dfa(&self) -> Result<dfa::Automaton<T>> {
        let nfa = self.to_nfa()?;
        if nfa.is_deterministic() {
            Ok(dfa::Automaton::from_deterministic(&nfa)?)
        }
        else {
            debug!("right-linear grammar is nondeterministic, determinizing");
            Ok(dfa::Automaton::from(&nfa))
        }
    }
}
