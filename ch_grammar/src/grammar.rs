/**
 * The grammar model: nonterminals, terminals, productions and a start symbol.
 */

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Debug, Display};
use crate::error::{Error, Result};
use crate::symbol::{self, Nonterminal, Phrase, Symbol};

/// An immutable grammar. Productions map a left side phrase to its ordered
/// list of alternatives. A left side is nonempty and holds at least one
/// nonterminal, alternatives may be empty or `[Symbol::Epsilon]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar<T> {
    nonterminals: BTreeSet<Nonterminal>,
    terminals: BTreeSet<T>,
    productions: BTreeMap<Phrase<T>, Vec<Phrase<T>>>,
    start: Nonterminal,
}

impl <T> Grammar<T> where T : Clone + Ord + Debug {
    /// Builds a grammar, checking that every symbol is declared, that each
    /// left side holds a nonterminal and that ε only appears on its own.
    /// Repeated left sides have their alternatives concatenated.
    pub fn new<NI, TI, PI, AI>(nonterminals: NI, terminals: TI, productions: PI,
        start: Nonterminal) -> Result<Self>
        where NI : IntoIterator<Item = Nonterminal>,
              TI : IntoIterator<Item = T>,
              PI : IntoIterator<Item = (Phrase<T>, AI)>,
              AI : IntoIterator<Item = Phrase<T>> {

        let nonterminals: BTreeSet<Nonterminal> = nonterminals.into_iter().collect();
        let terminals: BTreeSet<T> = terminals.into_iter().collect();
        if !nonterminals.contains(&start) {
            return Err(Error::UnknownStart(start));
        }

        let mut table: BTreeMap<Phrase<T>, Vec<Phrase<T>>> = BTreeMap::new();
        for (left, alternatives) in productions {
            let alternatives: Vec<Phrase<T>> = alternatives.into_iter().collect();
            Self::check_left(&nonterminals, &terminals, &left)?;
            for right in &alternatives {
                Self::check_right(&nonterminals, &terminals, &left, right)?;
            }
            table.entry(left).or_insert_with(Vec::new).extend(alternatives);
        }

        Ok(Self{ nonterminals, terminals, productions: table, start })
    }

    fn check_left(nonterminals: &BTreeSet<Nonterminal>, terminals: &BTreeSet<T>,
        left: &[Symbol<T>]) -> Result<()> {

        if left.is_empty() {
            return Err(Error::EmptyLeftSide);
        }
        if left.iter().any(Symbol::is_epsilon) {
            return Err(Error::MisplacedEpsilon{ production: symbol::describe(left, &[]) });
        }
        if !left.iter().any(Symbol::is_nonterminal) {
            return Err(Error::NoNonterminalOnLeft{ production: symbol::describe(left, &[]) });
        }
        Self::check_declared(nonterminals, terminals, left, left, &[])
    }

    fn check_right(nonterminals: &BTreeSet<Nonterminal>, terminals: &BTreeSet<T>,
        left: &[Symbol<T>], right: &[Symbol<T>]) -> Result<()> {

        if right.len() > 1 && right.iter().any(Symbol::is_epsilon) {
            return Err(Error::MisplacedEpsilon{ production: symbol::describe(left, right) });
        }
        Self::check_declared(nonterminals, terminals, right, left, right)
    }

    fn check_declared(nonterminals: &BTreeSet<Nonterminal>, terminals: &BTreeSet<T>,
        phrase: &[Symbol<T>], left: &[Symbol<T>], right: &[Symbol<T>]) -> Result<()> {

        for sym in phrase {
            match sym {
                Symbol::Terminal(t) if !terminals.contains(t) => {
                    return Err(Error::UnknownTerminal{
                        production: symbol::describe(left, right),
                        terminal: format!("{:?}", t),
                    });
                },
                Symbol::Nonterminal(n) if !nonterminals.contains(n) => {
                    return Err(Error::UnknownNonterminal{
                        production: symbol::describe(left, right),
                        nonterminal: n.clone(),
                    });
                },
                _ => (),
            }
        }
        Ok(())
    }
}

impl <T> Grammar<T> {
    /// Assembles a grammar whose invariants hold by construction.
    pub(crate) fn from_parts(nonterminals: BTreeSet<Nonterminal>, terminals: BTreeSet<T>,
        productions: BTreeMap<Phrase<T>, Vec<Phrase<T>>>, start: Nonterminal) -> Self {
        Self{ nonterminals, terminals, productions, start }
    }

    pub fn nonterminals(&self) -> &BTreeSet<Nonterminal> {
        &self.nonterminals
    }

    pub fn terminals(&self) -> &BTreeSet<T> {
        &self.terminals
    }

    pub fn start(&self) -> &Nonterminal {
        &self.start
    }

    pub fn productions(&self) -> &BTreeMap<Phrase<T>, Vec<Phrase<T>>> {
        &self.productions
    }

    /// Every `(left, right)` pair, one per alternative.
    pub fn rules(&self) -> impl Iterator<Item = (&Phrase<T>, &Phrase<T>)> + '_ {
        self.productions.iter()
            .flat_map(|(left, alternatives)| alternatives.iter().map(move |right| (left, right)))
    }

    /// True iff `left` is exactly the start symbol.
    pub fn is_start(&self, left: &[Symbol<T>]) -> bool {
        match left {
            [Symbol::Nonterminal(n)] => *n == self.start,
            _ => false,
        }
    }
}

impl <T> Grammar<T> where T : Clone + Ord {
    /// The alternatives of the production whose left side is `nonterminal`.
    pub fn alternatives(&self, nonterminal: &Nonterminal) -> &[Phrase<T>] {
        let key = vec![Symbol::Nonterminal(nonterminal.clone())];
        self.productions.get(&key).map(|alts| alts.as_slice()).unwrap_or(&[])
    }
}

impl <T> Display for Grammar<T> where T : Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (left, alternatives) in &self.productions {
            symbol::fmt_phrase(f, left)?;
            write!(f, " →")?;
            for (idx, right) in alternatives.iter().enumerate() {
                write!(f, "{}", if idx > 0 { " | " } else { " " })?;
                symbol::fmt_phrase(f, right)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
