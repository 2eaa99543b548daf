//! The tagged-variant automaton model (§4.1, §9 of the design notes): one
//! struct for DFA/NFA/epsilon-NFA, dispatched on `Kind`, replacing the
//! virtual-dispatch `Automaton`/`DFA`/`NFA`/`ENFA` hierarchy of the source.

use crate::error::Diagnostic;
use std::collections::HashMap;
use std::rc::Rc;

/// The reserved symbol denoting the empty string. Only an epsilon-NFA's
/// alphabet may contain it.
pub const EPSILON: u8 = b'E';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Dfa,
    Nfa,
    EpsilonNfa,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Dfa => "DFA",
            Kind::Nfa => "NFA",
            Kind::EpsilonNfa => "epsilon-NFA",
        }
    }
}

/// A single automaton: alphabet, state registry, transition relation, start
/// state and accept set, plus the `Kind` tag that governs which invariants
/// `add_symbol`/`add_transition`/`delta` enforce (§4.1).
#[derive(Debug, Clone)]
pub struct Automaton {
    kind: Kind,
    names: Vec<Rc<str>>,
    name_index: HashMap<Rc<str>, StateId>,
    alphabet: Vec<u8>,
    alphabet_index: HashMap<u8, usize>,
    // (state, symbol) -> successors, in insertion order, deduplicated.
    transitions: HashMap<(StateId, u8), Vec<StateId>>,
    start: Option<StateId>,
    accept: Vec<StateId>,
    accept_set: std::collections::HashSet<StateId>,
}

impl Automaton {
    pub fn new(kind: Kind) -> Self {
        Automaton {
            kind,
            names: Vec::new(),
            name_index: HashMap::new(),
            alphabet: Vec::new(),
            alphabet_index: HashMap::new(),
            transitions: HashMap::new(),
            start: None,
            accept: Vec::new(),
            accept_set: std::collections::HashSet::new(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn state_count(&self) -> usize {
        self.names.len()
    }

    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.names.len()).map(StateId)
    }

    pub fn name(&self, id: StateId) -> &str {
        &self.names[id.0]
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.name_index.get(name).copied()
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn start(&self) -> Option<StateId> {
        self.start
    }

    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accept.iter().copied()
    }

    pub fn is_accepting(&self, id: StateId) -> bool {
        self.accept_set.contains(&id)
    }

    /// `addState(s)`: appends to Q if absent; a duplicate is a no-op
    /// diagnostic, not an error that poisons the automaton.
    pub fn add_state(&mut self, name: &str) -> Result<StateId, Diagnostic> {
        if let Some(&id) = self.name_index.get(name) {
            return Err(Diagnostic::DuplicateState(self.names[id.0].to_string()));
        }
        let id = StateId(self.names.len());
        let rc: Rc<str> = Rc::from(name);
        self.names.push(rc.clone());
        self.name_index.insert(rc, id);
        Ok(id)
    }

    fn resolve(&self, name: &str) -> Result<StateId, Diagnostic> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| Diagnostic::UnknownState(name.to_string()))
    }

    /// `addSymbol(a)`: appends to Sigma unless `a == EPSILON` (only an
    /// epsilon-NFA accepts that) or it is already present.
    pub fn add_symbol(&mut self, symbol: u8) -> Result<(), Diagnostic> {
        if symbol == EPSILON && self.kind != Kind::EpsilonNfa {
            return Err(Diagnostic::EpsilonDisallowed(self.kind.label()));
        }
        if self.alphabet_index.contains_key(&symbol) {
            return Err(Diagnostic::DuplicateSymbol(symbol as char));
        }
        self.alphabet_index.insert(symbol, self.alphabet.len());
        self.alphabet.push(symbol);
        Ok(())
    }

    pub fn add_accept_state(&mut self, name: &str) -> Result<(), Diagnostic> {
        let id = self.resolve(name)?;
        if self.accept_set.contains(&id) {
            return Err(Diagnostic::DuplicateAcceptState(name.to_string()));
        }
        self.accept_set.insert(id);
        self.accept.push(id);
        Ok(())
    }

    pub fn set_start_state(&mut self, name: &str) -> Result<(), Diagnostic> {
        let id = self.resolve(name)?;
        self.start = Some(id);
        Ok(())
    }

    /// `addTransition((p,a), q)`: a DFA additionally rejects a second
    /// target for an existing `(p, a)` pair (I4).
    pub fn add_transition(&mut self, from: &str, symbol: u8, to: &str) -> Result<(), Diagnostic> {
        let p = self.resolve(from)?;
        let q = self.resolve(to)?;
        if !self.alphabet_index.contains_key(&symbol) {
            return Err(Diagnostic::UnknownSymbol(symbol as char));
        }
        let key = (p, symbol);
        let targets = self.transitions.entry(key).or_default();
        if targets.contains(&q) {
            return Err(Diagnostic::DuplicateTransition(
                from.to_string(),
                symbol as char,
                to.to_string(),
            ));
        }
        if self.kind == Kind::Dfa && !targets.is_empty() {
            return Err(Diagnostic::DuplicateTransition(
                from.to_string(),
                symbol as char,
                to.to_string(),
            ));
        }
        targets.push(q);
        Ok(())
    }

    /// Direct successors of `(state, symbol)`, ignoring epsilon-closure even
    /// on an epsilon-NFA. Used by the closure computation and by `delta`
    /// itself.
    pub fn raw_delta(&self, state: StateId, symbol: u8) -> Result<Vec<StateId>, Diagnostic> {
        if state.0 >= self.names.len() {
            return Err(Diagnostic::UnknownState(format!("#{}", state.0)));
        }
        if !self.alphabet_index.contains_key(&symbol) {
            return Err(Diagnostic::UnknownSymbol(symbol as char));
        }
        Ok(self
            .transitions
            .get(&(state, symbol))
            .cloned()
            .unwrap_or_default())
    }

    /// `delta(p, a)`: variant-dispatched single-state step. A DFA/NFA take
    /// the raw successors; an epsilon-NFA closes before and after per §4.3.
    pub fn delta(&self, state: StateId, symbol: u8) -> Result<Vec<StateId>, Diagnostic> {
        match self.kind {
            Kind::Dfa | Kind::Nfa => self.raw_delta(state, symbol),
            Kind::EpsilonNfa => {
                let mut result = Vec::new();
                for p in crate::convert::closure::epsilon_closure(self, state) {
                    for q in self.raw_delta(p, symbol)? {
                        for r in crate::convert::closure::epsilon_closure(self, q) {
                            if !result.contains(&r) {
                                result.push(r);
                            }
                        }
                    }
                }
                Ok(result)
            }
        }
    }

    /// `delta(P, a)`: pointwise lift to a set of states, deduplicated in
    /// discovery order.
    pub fn delta_set(&self, states: &[StateId], symbol: u8) -> Result<Vec<StateId>, Diagnostic> {
        let mut result = Vec::new();
        for &s in states {
            for t in self.delta(s, symbol)? {
                if !result.contains(&t) {
                    result.push(t);
                }
            }
        }
        Ok(result)
    }

    /// Resolves the previously INCOMPLETE `delta(state, word)`: the iterated
    /// pointwise lift `delta(state, "") == {state}`,
    /// `delta(state, a.w) == delta(delta(state, a), w)`.
    pub fn delta_word(&self, state: StateId, word: &[u8]) -> Result<Vec<StateId>, Diagnostic> {
        let mut current = vec![state];
        for &symbol in word {
            current = self.delta_set(&current, symbol)?;
            if current.is_empty() {
                break;
            }
        }
        Ok(current)
    }
}
