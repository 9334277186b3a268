/**
 * Determinization of the lab automaton and its conversion to a grammar.
 */

use std::collections::BTreeSet;
use anyhow::{Context, Result};
use clap::{App, ArgMatches, SubCommand};
use ch_fsa::{dfa, State};
use ch_grammar::Grammar;
use crate::fixtures;

pub fn get_sub_command(name: &str) -> App<'static, 'static> {
    SubCommand::with_name(name)
        .about("determinizes the lab automaton, converts it to a grammar and classifies it")
}

pub fn handle_sub_matches(_matches: &ArgMatches) -> Result<()> {
    let nfa = fixtures::branching_nfa().context("the lab automaton is malformed")?;
    println!("Nondeterministic automaton:\n{}", nfa);
    println!("Deterministic: {}", nfa.is_deterministic());
    for (state, on, targets) in nfa.nondeterministic_pairs() {
        println!("  ({}, {:?}) leads to {}", state, on, subset_label(targets));
    }

    let dfa::Determinized{ automaton, subsets } = dfa::subset_construction(&nfa);
    println!("\nSubsets:");
    for (state, subset) in &subsets {
        println!("  {} = {}", state, subset_label(subset));
    }
    println!("\nDeterministic automaton:\n{}", automaton);

    let grammar = Grammar::from(&automaton);
    println!("Grammar:\n{}", grammar);
    println!("Classification: {}", grammar.classification());

    let lab = fixtures::lab_grammar().context("the lab grammar is malformed")?;
    println!("Lab grammar: {}", lab.classify());
    Ok(())
}

fn subset_label(subset: &BTreeSet<State>) -> String {
    let labels: Vec<&str> = subset.iter().map(State::label).collect();
    format!("{{{}}}", labels.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_labels() {
        let subset: BTreeSet<State> = vec![State::from("q3"), State::from("q0")].into_iter().collect();
        assert_eq!(subset_label(&subset), "{q0, q3}");
        assert_eq!(subset_label(&BTreeSet::new()), "{}");
    }
}
