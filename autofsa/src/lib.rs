//! # autofsa
//!
//! A finite-automata toolkit: DFA, NFA and epsilon-NFA in a single tagged
//! model, the two subset-construction conversions to a DFA, DFA -> regex
//! by state elimination, and a Graphviz DOT emitter.
//!
//! ```rust
//! use autofsa::automaton::{Automaton, Kind};
//! use autofsa::{convert, regex};
//!
//! let mut nfa = Automaton::new(Kind::Nfa);
//! nfa.add_state("q0").unwrap();
//! nfa.add_state("q1").unwrap();
//! nfa.add_symbol(b'a').unwrap();
//! nfa.set_start_state("q0").unwrap();
//! nfa.add_accept_state("q1").unwrap();
//! nfa.add_transition("q0", b'a', "q1").unwrap();
//! nfa.add_transition("q0", b'a', "q0").unwrap();
//!
//! let dfa = convert::to_dfa(&nfa).unwrap();
//! let pattern = regex::to_regex(&dfa).unwrap();
//! assert!(!pattern.is_empty());
//! ```
//!
//! ## Operations
//!
//! * NFA -> DFA by [subset construction](convert::to_dfa)
//! * Epsilon-NFA -> DFA by [epsilon-closure](convert::closure::epsilon_closure) then subset construction
//! * DFA -> regex by [state elimination](regex::to_regex)
//! * [Regex simplification](regex::simplify::simplify) as a standalone pass
//! * [Graphviz DOT rendering](dot::to_dot) of any automaton
//! * [Loading](loader::load) the pseudo-XML input format, diagnostics included

pub mod automaton;
pub mod convert;
pub mod dot;
pub mod error;
pub mod loader;
pub mod regex;


pub use automaton::{Automaton, Kind, StateId};
pub use error::Diagnostic;
