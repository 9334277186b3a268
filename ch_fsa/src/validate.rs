/**
 * Membership checks run by the automaton constructors.
 */

use std::collections::BTreeSet;
use std::fmt::Debug;
use crate::error::{Error, Result};
use crate::state::State;

pub(crate) fn start(states: &BTreeSet<State>, start: &State) -> Result<()> {
    if states.contains(start) {
        Ok(())
    }
    else {
        Err(Error::UnknownStart(start.clone()))
    }
}

pub(crate) fn accepting<I>(states: &BTreeSet<State>, accepting: I) -> Result<BTreeSet<State>>
    where I : IntoIterator<Item = State> {

    let mut result = BTreeSet::new();
    for state in accepting {
        if !states.contains(&state) {
            return Err(Error::UnknownAcceptingState(state));
        }
        result.insert(state);
    }
    Ok(result)
}

pub(crate) fn edge<T>(states: &BTreeSet<State>, alphabet: &BTreeSet<T>,
    from: &State, on: &T, to: &State) -> Result<()> where T : Ord + Debug {

    for endpoint in &[from, to] {
        if !states.contains(*endpoint) {
            return Err(Error::UnknownState{
                from: from.clone(),
                symbol: format!("{:?}", on),
                to: to.clone(),
                missing: (*endpoint).clone(),
            });
        }
    }
    if !alphabet.contains(on) {
        return Err(Error::UnknownSymbol{
            from: from.clone(),
            symbol: format!("{:?}", on),
            to: to.clone(),
        });
    }
    Ok(())
}
