/**
 * Formal grammars over an ordered terminal type: construction, Chomsky
 * classification, random derivation and conversion to and from the finite
 * automata of `ch_fsa`.
 */

extern crate ch_fsa;
extern crate rand;
extern crate rand_pcg;
extern crate thiserror;
extern crate tracing;

mod classify;
mod convert;
mod derivation;
mod error;
mod grammar;
mod parse;
mod symbol;
pub mod rnd;

pub use classify::{ChomskyType, Classification, Linearity, ProductionReport, RegularForm};
pub use derivation::{Derivation, DerivationLimits, StringGenStrategy, DEFAULT_MAX_ATTEMPTS, DEFAULT_STEP_BUDGET};
pub use error::{Error, Result};
pub use grammar::Grammar;
pub use symbol::{Nonterminal, Phrase, Symbol};
