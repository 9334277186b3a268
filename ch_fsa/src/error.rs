/**
 * Construction errors of the automata.
 */

use thiserror::Error;
use crate::state::State;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("start state {0} is not a declared state")]
    UnknownStart(State),

    #[error("accepting state {0} is not a declared state")]
    UnknownAcceptingState(State),

    #[error("transition {from} --{symbol}--> {to} references the undeclared state {missing}")]
    UnknownState {
        from: State,
        symbol: String,
        to: State,
        missing: State,
    },

    #[error("transition {from} --{symbol}--> {to} uses a symbol outside the alphabet")]
    UnknownSymbol {
        from: State,
        symbol: String,
        to: State,
    },

    #[error("state {from} has two transitions on {symbol}: to {first} and to {second}")]
    ConflictingTransition {
        from: State,
        symbol: String,
        first: State,
        second: State,
    },

    #[error("state {state} has {targets} targets on {symbol}")]
    Nondeterministic {
        state: State,
        symbol: String,
        targets: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
