//! NFA -> DFA and epsilon-NFA -> DFA conversions (C4, C5).

pub mod closure;
pub mod subset;

pub use subset::to_dfa;
