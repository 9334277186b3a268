/**
 * Errors of grammar construction, conversion and derivation.
 */

use thiserror::Error;
use crate::symbol::Nonterminal;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("start symbol {0} is not a declared nonterminal")]
    UnknownStart(Nonterminal),

    #[error("production {production} uses the undeclared nonterminal {nonterminal}")]
    UnknownNonterminal {
        production: String,
        nonterminal: Nonterminal,
    },

    #[error("production {production} uses the undeclared terminal {terminal}")]
    UnknownTerminal {
        production: String,
        terminal: String,
    },

    #[error("a production has an empty left side")]
    EmptyLeftSide,

    #[error("production {production} has no nonterminal on its left side")]
    NoNonterminalOnLeft {
        production: String,
    },

    #[error("ε must stand alone as a right side, found in {production}")]
    MisplacedEpsilon {
        production: String,
    },

    #[error("production {production} is not of the form A → a B, A → a or A → ε")]
    NotRightLinear {
        production: String,
    },

    #[error("no terminal string derived in {attempts} attempts of {step_budget} steps each")]
    DerivationExhausted {
        attempts: usize,
        step_budget: usize,
    },

    #[error("line {line}: {message}")]
    Parse {
        line: usize,
        message: String,
    },

    #[error(transparent)]
    Automaton(#[from] ch_fsa::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
