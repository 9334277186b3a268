/**
 * Grammar symbols: tagged terminals, named nonterminals and the epsilon marker.
 */

use std::fmt::{self, Debug, Display};
use ch_fsa::State;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nonterminal(String);

impl Nonterminal {
    pub fn new<S>(name: S) -> Self where S : Into<String> {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Nonterminal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Nonterminal {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&State> for Nonterminal {
    fn from(state: &State) -> Self {
        Self::new(state.label())
    }
}

impl From<&Nonterminal> for State {
    fn from(nonterminal: &Nonterminal) -> Self {
        State::new(nonterminal.name())
    }
}

impl Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol<T> {
    Terminal(T),
    Nonterminal(Nonterminal),
    /// The explicit empty word. Only valid as a whole alternative, `[Epsilon]`.
    Epsilon,
}

/// A sequence of symbols, both sides of a production are phrases.
pub type Phrase<T> = Vec<Symbol<T>>;

impl <T> Symbol<T> {
    pub fn nonterminal<S>(name: S) -> Self where S : Into<String> {
        Symbol::Nonterminal(Nonterminal::new(name))
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            Symbol::Terminal(_) => true,
            _ => false,
        }
    }

    pub fn is_nonterminal(&self) -> bool {
        match self {
            Symbol::Nonterminal(_) => true,
            _ => false,
        }
    }

    pub fn is_epsilon(&self) -> bool {
        match self {
            Symbol::Epsilon => true,
            _ => false,
        }
    }

    pub fn as_terminal(&self) -> Option<&T> {
        match self {
            Symbol::Terminal(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_nonterminal(&self) -> Option<&Nonterminal> {
        match self {
            Symbol::Nonterminal(n) => Some(n),
            _ => None,
        }
    }
}

impl <T> Display for Symbol<T> where T : Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(t) => Display::fmt(t, f),
            Symbol::Nonterminal(n) => Display::fmt(n, f),
            Symbol::Epsilon => f.write_str("ε"),
        }
    }
}

pub(crate) fn fmt_phrase<T>(f: &mut fmt::Formatter<'_>, phrase: &[Symbol<T>]) -> fmt::Result
    where T : Display {

    for (idx, symbol) in phrase.iter().enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", symbol)?;
    }
    Ok(())
}

/// Renders a production for error messages, without requiring `Display`.
pub(crate) fn describe<T>(left: &[Symbol<T>], right: &[Symbol<T>]) -> String where T : Debug {
    let side = |phrase: &[Symbol<T>]| phrase.iter()
        .map(|symbol| match symbol {
            Symbol::Terminal(t) => format!("{:?}", t),
            Symbol::Nonterminal(n) => n.name().to_string(),
            Symbol::Epsilon => "ε".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} → {}", side(left), side(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_render_plainly() {
        let phrase: Phrase<char> = vec![Symbol::Terminal('a'), Symbol::nonterminal("Rest"), Symbol::Epsilon];
        let rendered: Vec<String> = phrase.iter().map(|s| s.to_string()).collect();
        assert_eq!(rendered, vec!["a", "Rest", "ε"]);
        assert_eq!(describe(&phrase[1..2], &phrase[..1]), "Rest → 'a'");
    }
}
