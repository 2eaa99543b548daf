//! DFA -> regex by state elimination (C6, §4.5-4.6).

pub mod simplify;

use crate::automaton::{Automaton, Kind, StateId};
use crate::error::Diagnostic;
use simplify::{simplify, simplify_parentheses, EMPTY_SENTINEL};
use std::collections::HashMap;

/// A labeled multigraph over the DFA's states: `(from, to) -> parallel
/// regex labels`, kept separate per the source's "parallel edges are kept
/// as separate entries, the simplifier unifies them" note and folded into
/// one string only when read.
#[derive(Clone, Debug, Default)]
struct RegexTable {
    edges: HashMap<(StateId, StateId), Vec<String>>,
}

impl RegexTable {
    fn add_edge(&mut self, from: StateId, to: StateId, label: String) {
        self.edges.entry((from, to)).or_default().push(label);
    }

    /// `R_{from,to}`: the empty-language sentinel if no edge exists, the
    /// label itself if there is exactly one, or `(R1)+(R2)+...` if several
    /// parallel labels were recorded.
    fn label(&self, from: StateId, to: StateId) -> String {
        match self.edges.get(&(from, to)) {
            None => EMPTY_SENTINEL.to_string(),
            Some(labels) if labels.len() == 1 => labels[0].clone(),
            Some(labels) => labels
                .iter()
                .map(|l| format!("({l})"))
                .collect::<Vec<_>>()
                .join("+"),
        }
    }

    fn has_edge(&self, from: StateId, to: StateId) -> bool {
        self.edges.contains_key(&(from, to))
    }

    fn remove_edge(&mut self, from: StateId, to: StateId) {
        self.edges.remove(&(from, to));
    }
}

/// §4.6: eliminate `s`, rewriting every `(q, p)` pair that routed through
/// it into a single combined edge, then drop every edge touching `s`.
fn eliminate_state(table: &mut RegexTable, states_in_order: &[StateId], s: StateId) {
    let incoming: Vec<StateId> = states_in_order
        .iter()
        .copied()
        .filter(|&q| q != s && table.has_edge(q, s))
        .collect();
    let outgoing: Vec<StateId> = states_in_order
        .iter()
        .copied()
        .filter(|&p| p != s && table.has_edge(s, p))
        .collect();
    let self_loop = if table.has_edge(s, s) {
        table.label(s, s)
    } else {
        EMPTY_SENTINEL.to_string()
    };

    let mut new_edges: Vec<(StateId, StateId, String)> = Vec::new();
    for &q in &incoming {
        for &p in &outgoing {
            let r_qs = table.label(q, s);
            let r_sp = table.label(s, p);
            let mut new_label = String::new();
            if table.has_edge(q, p) {
                new_label.push('(');
                new_label.push_str(&table.label(q, p));
                new_label.push_str(")+");
            }
            new_label.push_str(&r_qs);
            new_label.push('(');
            new_label.push_str(&self_loop);
            new_label.push_str(")*");
            new_label.push_str(&r_sp);
            new_edges.push((q, p, simplify(&new_label)));
        }
    }

    for &q in &incoming {
        for &p in &outgoing {
            table.remove_edge(q, p);
        }
    }
    for (q, p, label) in new_edges {
        table.add_edge(q, p, label);
    }

    let touching: Vec<(StateId, StateId)> = table
        .edges
        .keys()
        .copied()
        .filter(|&(a, b)| a == s || b == s)
        .collect();
    for key in touching {
        table.edges.remove(&key);
    }
}

/// DFA -> regex (§4.5). `dfa` must be a complete DFA (as produced by
/// [`crate::convert::to_dfa`]); the algorithm does not require a unique
/// accept state or a dead-free automaton.
pub fn to_regex(dfa: &Automaton) -> Result<String, Diagnostic> {
    if dfa.kind() != Kind::Dfa {
        return Err(Diagnostic::MalformedInput(
            "state elimination requires a DFA".to_string(),
        ));
    }
    let start = dfa
        .start()
        .ok_or_else(|| Diagnostic::MalformedInput("automaton has no start state".to_string()))?;
    let accept: Vec<StateId> = dfa.accept_states().collect();
    let all_states: Vec<StateId> = dfa.states().collect();

    let mut table = RegexTable::default();
    for &p in &all_states {
        for &symbol in dfa.alphabet() {
            for q in dfa.raw_delta(p, symbol)? {
                table.add_edge(p, q, (symbol as char).to_string());
            }
        }
    }

    let intermediate: Vec<StateId> = all_states
        .iter()
        .copied()
        .filter(|s| *s != start && !accept.contains(s))
        .collect();
    for s in intermediate {
        eliminate_state(&mut table, &all_states, s);
    }

    let backup = table.clone();
    let mut contributions: Vec<String> = Vec::new();
    for &f in &accept {
        table = backup.clone();
        let others: Vec<StateId> = accept.iter().copied().filter(|&a| a != f).collect();
        for o in others {
            eliminate_state(&mut table, &all_states, o);
        }

        if f == start {
            // Single state remains: one self-loop edge (possibly the
            // sentinel) contributes `(R)*`.
            let r = table.label(start, start);
            contributions.push(format!("({r})*"));
        } else {
            let r = table.label(start, start);
            let s_ = table.label(start, f);
            let u = table.label(f, f);
            let t = table.label(f, start);
            contributions.push(format!("(({r})+({s_})({u})*({t}))*({s_})({u})*"));
        }
    }

    let mut regex = contributions.join("+");
    regex = simplify(&regex);
    regex = simplify_parentheses(&regex);
    if regex.is_empty() {
        regex = EMPTY_SENTINEL.to_string();
    }
    Ok(regex)
}
