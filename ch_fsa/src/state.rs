/**
 * State labels shared by both automaton representations.
 */

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(String);

impl State {
    pub fn new<S>(label: S) -> Self where S : Into<String> {
        Self(label.into())
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for State {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Writes a set of states as `{a, b, c}`.
pub(crate) fn fmt_set(f: &mut fmt::Formatter<'_>, states: &BTreeSet<State>) -> fmt::Result {
    write!(f, "{{")?;
    for (idx, state) in states.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", state)?;
    }
    write!(f, "}}")
}
