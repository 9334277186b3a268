/**
 * Finite automata over an arbitrary ordered alphabet, with string-labelled
 * states, and the subset construction connecting the two representations.
 */

extern crate thiserror;
extern crate tracing;

mod error;
mod state;
mod validate;
pub mod nfa;
pub mod dfa;

pub use error::{Error, Result};
pub use state::State;

/// Membership test shared by both automaton kinds.
pub trait Recognizer<T> {
    /// Consumes the input left to right. A symbol outside the alphabet
    /// rejects right away, without looking at the rest of the input.
    fn accepts<I>(&self, input: I) -> bool where I : IntoIterator<Item = T>;
}
