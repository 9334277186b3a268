/**
 * A small textual rule syntax for character grammars:
 *
 * S -> a B | b B
 * B -> b D | c B | a S
 * D -> b | a D | ε
 *
 * Tokens are separated by whitespace. A token starting with an uppercase
 * letter is a nonterminal, `ε` is the epsilon alternative, anything else must
 * be a single character terminal. The first rule defines the start symbol.
 */

use std::collections::BTreeSet;
use std::str::FromStr;
use crate::error::{Error, Result};
use crate::grammar::Grammar;
use crate::symbol::{Nonterminal, Phrase, Symbol};

fn parse_error<S>(line: usize, message: S) -> Error where S : Into<String> {
    Error::Parse{ line, message: message.into() }
}

fn parse_symbol(line: usize, token: &str) -> Result<Symbol<char>> {
    if token == "ε" {
        return Ok(Symbol::Epsilon);
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(first), _) if first.is_uppercase() => Ok(Symbol::nonterminal(token)),
        (Some(ch), None) => Ok(Symbol::Terminal(ch)),
        _ => Err(parse_error(line, format!("terminal `{}` must be a single character", token))),
    }
}

fn parse_phrase(line: usize, source: &str) -> Result<Phrase<char>> {
    source.split_whitespace().map(|token| parse_symbol(line, token)).collect()
}

impl FromStr for Grammar<char> {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        let mut productions: Vec<(Phrase<char>, Vec<Phrase<char>>)> = Vec::new();

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let text = raw.trim().replace('→', "->");
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let mut halves = text.splitn(2, "->");
            let left = halves.next().unwrap_or("");
            let right = match halves.next() {
                Some(right) => right,
                None => return Err(parse_error(line, "expected `->`")),
            };

            let left = parse_phrase(line, left)?;
            let alternatives = right.split('|')
                .map(|alt| parse_phrase(line, alt))
                .collect::<Result<Vec<_>>>()?;
            productions.push((left, alternatives));
        }

        let start = match productions.first() {
            Some((left, _)) => match left.as_slice() {
                [Symbol::Nonterminal(n)] => n.clone(),
                _ => return Err(parse_error(1, "the first rule must define the start symbol")),
            },
            None => return Err(parse_error(1, "no rules")),
        };

        let mentioned = || productions.iter()
            .flat_map(|(left, alts)| left.iter().chain(alts.iter().flatten()));
        let nonterminals: BTreeSet<Nonterminal> = mentioned()
            .filter_map(|s| s.as_nonterminal().cloned())
            .collect();
        let terminals: BTreeSet<char> = mentioned()
            .filter_map(|s| s.as_terminal().cloned())
            .collect();

        Grammar::new(nonterminals, terminals, productions, start)
    }
}
