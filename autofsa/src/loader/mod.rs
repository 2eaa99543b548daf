//! The textual loader (C9): parses the pseudo-XML markup of §6 into an
//! [`Automaton`], tolerating malformed or missing sections the way the
//! source's `AutomataParser` does -- by skipping and recording a
//! diagnostic, never aborting.

mod grammar;

use crate::automaton::{Automaton, Kind};
use crate::error::Diagnostic;

fn split_list(content: &str) -> Vec<&str> {
    content
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

fn unescape_one_byte(raw: &str) -> Option<u8> {
    let (_, unescaped) = grammar::unescape_symbol(raw).ok()?;
    let bytes = unescaped.as_bytes();
    if bytes.len() == 1 {
        Some(bytes[0])
    } else {
        None
    }
}

fn parse_transition_entry(entry: &str) -> Option<(&str, u8, &str)> {
    let parts: Vec<&str> = entry.splitn(3, ',').collect();
    if parts.len() != 3 {
        return None;
    }
    let from = parts[0].trim();
    let symbol = unescape_one_byte(parts[1].trim())?;
    let to = parts[2].trim();
    Some((from, symbol, to))
}

/// Parses `input` into an automaton plus every diagnostic raised along the
/// way. Diagnostics never abort the load: a missing or malformed section
/// is skipped and the rest of the markup is still applied.
pub fn load(input: &str) -> (Automaton, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();

    let kind = match grammar::type_section(input) {
        Ok((_, raw)) => match raw.trim() {
            "dfa" => Kind::Dfa,
            "nfa" => Kind::Nfa,
            "enfa" => Kind::EpsilonNfa,
            other => {
                diagnostics.push(Diagnostic::UnknownAutomatonType(other.to_string()));
                Kind::EpsilonNfa
            }
        },
        Err(_) => {
            diagnostics.push(Diagnostic::MalformedInput(
                "missing <TYPE> section".to_string(),
            ));
            Kind::EpsilonNfa
        }
    };

    let mut automaton = Automaton::new(kind);

    match grammar::states_section(input) {
        Ok((_, content)) => {
            for name in split_list(content) {
                if let Err(d) = automaton.add_state(name) {
                    diagnostics.push(d);
                }
            }
        }
        Err(_) => diagnostics.push(Diagnostic::MalformedInput(
            "missing <STATES> section".to_string(),
        )),
    }

    if let Ok((_, content)) = grammar::symbols_section(input) {
        for raw in split_list(content) {
            match unescape_one_byte(raw) {
                Some(symbol) => {
                    if let Err(d) = automaton.add_symbol(symbol) {
                        diagnostics.push(d);
                    }
                }
                None => diagnostics.push(Diagnostic::MalformedInput(format!(
                    "malformed symbol entry '{raw}'"
                ))),
            }
        }
    }

    if let Ok((_, name)) = grammar::start_state_section(input) {
        if let Err(d) = automaton.set_start_state(name.trim()) {
            diagnostics.push(d);
        }
    }

    if let Ok((_, content)) = grammar::accept_states_section(input) {
        for name in split_list(content) {
            if let Err(d) = automaton.add_accept_state(name) {
                diagnostics.push(d);
            }
        }
    }

    if let Ok((_, block)) = grammar::transition_function_section(input) {
        let mut rest = block;
        while let Ok((tail, entry)) = grammar::transition_entry(rest) {
            rest = tail;
            match parse_transition_entry(entry) {
                Some((from, symbol, to)) => {
                    if let Err(d) = automaton.add_transition(from, symbol, to) {
                        diagnostics.push(d);
                    }
                }
                None => diagnostics.push(Diagnostic::MalformedInput(format!(
                    "malformed <T> entry '{entry}'"
                ))),
            }
        }
    }

    (automaton, diagnostics)
}
