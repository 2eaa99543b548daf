//! Graphviz DOT emitter (C8, §4.8).

use crate::automaton::{Automaton, StateId};

/// Renders `automaton` as a `digraph finite_state_automaton`. Grouping
/// outgoing edges by target state uses discovery order (the order targets
/// first appear while walking Sigma in insertion order), rather than the
/// source's incidental alphabetical grouping, to stay consistent with the
/// rest of the toolkit's insertion-order determinism.
pub fn to_dot(automaton: &Automaton) -> String {
    let mut out = String::new();
    out.push_str("digraph finite_state_automaton {\n");
    out.push_str("rankdir=LR;\n");

    let accept_names: Vec<&str> = automaton
        .accept_states()
        .map(|id| automaton.name(id))
        .collect();
    out.push_str(&format!(
        "node [shape = doublecircle]; {}\n",
        accept_names.join(" ")
    ));
    out.push_str("node [shape = point]; emptystartnode\n");
    out.push_str("node [shape = circle];\n");

    if let Some(start) = automaton.start() {
        out.push_str(&format!(
            "emptystartnode -> {} [ label = \"start\" ];\n",
            automaton.name(start)
        ));
    }

    for state in automaton.states() {
        let mut arrows: Vec<(StateId, Vec<u8>)> = Vec::new();
        for &symbol in automaton.alphabet() {
            for target in automaton.raw_delta(state, symbol).unwrap_or_default() {
                match arrows.iter_mut().find(|(t, _)| *t == target) {
                    Some((_, symbols)) => symbols.push(symbol),
                    None => arrows.push((target, vec![symbol])),
                }
            }
        }
        for (target, symbols) in arrows {
            let label = symbols
                .iter()
                .map(|&s| (s as char).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "{} -> {} [ label = \"{}\" ];\n",
                automaton.name(state),
                automaton.name(target),
                label
            ));
        }
    }

    out.push('}');
    out
}
