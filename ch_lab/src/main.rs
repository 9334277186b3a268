/**
 * Command line driver exercising the automaton and grammar libraries on two
 * fixed instances.
 */

#[macro_use]
extern crate clap;
extern crate anyhow;
extern crate ch_fsa;
extern crate ch_grammar;
extern crate tracing;
extern crate tracing_subscriber;

mod automaton_lab;
mod fixtures;
mod grammar_lab;

use clap::{App, AppSettings, Arg};
use tracing::Level;

fn init_tracing(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let matches
        = App::new("ch_lab")
        .version("0.1")
        .about("Finite automata and Chomsky grammars, side by side")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("verbose")
             .help("logs conversion summaries, twice for every step")
             .short("v")
             .multiple(true))
        .subcommand(grammar_lab::get_sub_command("grammar"))
        .subcommand(automaton_lab::get_sub_command("automaton"))
        .get_matches();

    init_tracing(matches.occurrences_of("verbose"));

    match matches.subcommand() {
        ("grammar", Some(grammar_matches)) => grammar_lab::handle_sub_matches(grammar_matches),
        ("automaton", Some(automaton_matches)) => automaton_lab::handle_sub_matches(automaton_matches),
        _ => Ok(()),
    }
}
