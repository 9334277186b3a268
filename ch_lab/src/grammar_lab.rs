/**
 * Random derivation from the lab grammar, checked against the automaton
 * built from the same grammar.
 */

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches, SubCommand};
use ch_fsa::{dfa, Recognizer};
use ch_grammar::{rnd, Derivation, DerivationLimits, StringGenStrategy};
use tracing::{info, warn};
use crate::fixtures;

pub fn get_sub_command(name: &str) -> App<'static, 'static> {
    SubCommand::with_name(name)
        .about("derives random words from the lab grammar and tests them for membership")
        .arg(Arg::with_name("seed")
             .help("seed of the random generator, the system time by default")
             .long("seed")
             .takes_value(true))
        .arg(Arg::with_name("count")
             .help("number of words to derive")
             .short("n")
             .long("count")
             .default_value("10"))
        .arg(Arg::with_name("steps")
             .help("rewrites allowed in one derivation attempt")
             .long("steps")
             .takes_value(true))
        .arg(Arg::with_name("attempts")
             .help("derivation attempts before giving up on a word")
             .long("attempts")
             .takes_value(true))
}

pub fn handle_sub_matches(matches: &ArgMatches) -> Result<()> {
    let seed = if matches.is_present("seed") {
        value_t!(matches, "seed", u64)?
    }
    else {
        rnd::seed_from_system_time()
    };
    let count = value_t!(matches, "count", usize)?;
    let mut limits = DerivationLimits::default();
    if matches.is_present("steps") {
        limits = limits.with_step_budget(value_t!(matches, "steps", usize)?);
    }
    if matches.is_present("attempts") {
        limits = limits.with_max_attempts(value_t!(matches, "attempts", usize)?);
    }

    let grammar = fixtures::lab_grammar().context("the lab grammar is malformed")?;
    println!("Grammar:\n{}", grammar);
    println!("Classification: {}", grammar.classification());

    let automaton = grammar.to_dfa().context("the lab grammar has no automaton")?;
    println!("Automaton:\n{}", automaton);

    let derivation = Derivation::with_limits(&grammar, limits);
    info!(seed, count, limits = ?derivation.limits(), "deriving");
    let mut rng = rnd::seeded(seed);
    let words = derivation.generate_n(count, &mut rng)?;

    println!("Derived words (seed {}):", seed);
    for word in &words {
        let accepted = print_membership(&automaton, word);
        if !accepted {
            warn!(word = ?word, "derived word rejected by the automaton");
        }
    }

    println!("Fixed words:");
    for word in fixtures::TEST_WORDS.iter() {
        print_membership(&automaton, &word.chars().collect::<Vec<_>>());
    }
    Ok(())
}

fn print_membership(automaton: &dfa::Automaton<char>, word: &[char]) -> bool {
    let accepted = automaton.accepts(word.iter().cloned());
    let text: String = word.iter().collect();
    println!("  {:<16} {}", format!("{:?}", text), if accepted { "accepted" } else { "rejected" });
    accepted
}
