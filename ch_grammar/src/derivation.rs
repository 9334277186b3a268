/**
 * Random sentence generation by left-most rewriting.
 */

use rand::Rng;
use tracing::{debug, trace};
use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::rnd;
use crate::symbol::{Phrase, Symbol};

pub const DEFAULT_STEP_BUDGET: usize = 100;
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Bounds of a derivation: rewrites per attempt and attempts overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationLimits {
    pub step_budget: usize,
    pub max_attempts: usize,
}

impl DerivationLimits {
    pub fn with_step_budget(mut self, step_budget: usize) -> Self {
        self.step_budget = step_budget;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for DerivationLimits {
    fn default() -> Self {
        Self{ step_budget: DEFAULT_STEP_BUDGET, max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

pub trait StringGenStrategy<T> {
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<T>> where R : Rng;

    fn generate_n<R>(&self, count: usize, rng: &mut R) -> Result<Vec<Vec<T>>> where R : Rng {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

/**
 * Derives terminal strings from the start symbol of a grammar. Each step
 * rewrites the left-most nonterminal, picking uniformly among the
 * alternatives of every production whose left side covers it. For
 * single-nonterminal left sides that is the nonterminal's own alternatives.
 */

pub struct Derivation<'a, T> {
    grammar: &'a Grammar<T>,
    limits: DerivationLimits,
}

enum Attempt<T> {
    Derived(Vec<T>),
    OutOfSteps,
    Stuck,
}

impl <'a, T> Derivation<'a, T> where T : Clone + Ord {
    pub fn new(grammar: &'a Grammar<T>) -> Self {
        Self::with_limits(grammar, DerivationLimits::default())
    }

    pub fn with_limits(grammar: &'a Grammar<T>, limits: DerivationLimits) -> Self {
        Self{ grammar, limits }
    }

    pub fn limits(&self) -> &DerivationLimits {
        &self.limits
    }

    fn attempt<R>(&self, rng: &mut R) -> Attempt<T> where R : Rng {
        let mut sentential: Phrase<T> = vec![Symbol::Nonterminal(self.grammar.start().clone())];

        for _ in 0..self.limits.step_budget {
            if let Some(word) = terminals_only(&sentential) {
                return Attempt::Derived(word);
            }
            if !self.rewrite_leftmost(&mut sentential, rng) {
                return Attempt::Stuck;
            }
        }

        match terminals_only(&sentential) {
            Some(word) => Attempt::Derived(word),
            None => Attempt::OutOfSteps,
        }
    }

    /// Rewrites the left-most nonterminal once, false if no production
    /// covers it. Candidates are the alternatives of every left side that
    /// matches at a position covering that nonterminal.
    fn rewrite_leftmost<R>(&self, sentential: &mut Phrase<T>, rng: &mut R) -> bool where R : Rng {
        let position = match sentential.iter().position(Symbol::is_nonterminal) {
            Some(position) => position,
            None => return false,
        };

        let mut candidates: Vec<(usize, &Phrase<T>, &Phrase<T>)> = Vec::new();
        for (left, alternatives) in self.grammar.productions() {
            let first = (position + 1).saturating_sub(left.len());
            for start in first..=position {
                if sentential[start..].starts_with(left) {
                    candidates.extend(alternatives.iter().map(|right| (start, left, right)));
                }
            }
        }

        let (start, left, right) = match rnd::sample(rng, &candidates) {
            Some(choice) => *choice,
            None => return false,
        };

        trace!(start, width = left.len(), replacement = right.len(), "rewrite");
        let replacement: Vec<Symbol<T>> = right.iter()
            .filter(|s| !s.is_epsilon())
            .cloned()
            .collect();
        sentential.splice(start..(start + left.len()), replacement);
        true
    }
}

impl <'a, T> StringGenStrategy<T> for Derivation<'a, T> where T : Clone + Ord {
    /// Runs up to `max_attempts` bounded attempts, a failed attempt restarts
    /// from the start symbol.
    fn generate<R>(&self, rng: &mut R) -> Result<Vec<T>> where R : Rng {
        for attempt in 0..self.limits.max_attempts {
            match self.attempt(rng) {
                Attempt::Derived(word) => return Ok(word),
                Attempt::OutOfSteps => trace!(attempt, "step budget exhausted, restarting"),
                Attempt::Stuck => trace!(attempt, "no applicable production, restarting"),
            }
        }

        debug!(attempts = self.limits.max_attempts, step_budget = self.limits.step_budget,
            "derivation gave up");
        Err(Error::DerivationExhausted{
            attempts: self.limits.max_attempts,
            step_budget: self.limits.step_budget,
        })
    }
}

fn terminals_only<T>(phrase: &[Symbol<T>]) -> Option<Vec<T>> where T : Clone {
    phrase.iter().map(|s| s.as_terminal().cloned()).collect()
}

impl <T> Grammar<T> where T : Clone + Ord {
    /// One random terminal string, with the default limits.
    pub fn generate<R>(&self, rng: &mut R) -> Result<Vec<T>> where R : Rng {
        Derivation::new(self).generate(rng)
    }

    /// `count` random terminal strings, with the default limits.
    pub fn generate_n<R>(&self, count: usize, rng: &mut R) -> Result<Vec<Vec<T>>> where R : Rng {
        Derivation::new(self).generate_n(count, rng)
    }
}
