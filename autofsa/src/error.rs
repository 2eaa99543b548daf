use thiserror::Error;

/// Every recoverable condition the core and the loader can raise. No variant
/// here is fatal: raising one means "this operation was a no-op," never
/// "the automaton is now in an inconsistent state."
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("state '{0}' already exists")]
    DuplicateState(String),
    #[error("symbol '{0}' already exists in the alphabet")]
    DuplicateSymbol(char),
    #[error("transition ({0}, {1}, {2}) already exists")]
    DuplicateTransition(String, char, String),
    #[error("'{0}' is already an accept state")]
    DuplicateAcceptState(String),
    #[error("state '{0}' is not known to this automaton")]
    UnknownState(String),
    #[error("symbol '{0}' is not in this automaton's alphabet")]
    UnknownSymbol(char),
    #[error("epsilon is not allowed in a {0}'s alphabet")]
    EpsilonDisallowed(&'static str),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("unknown automaton type '{0}'; treating as an empty epsilon-NFA")]
    UnknownAutomatonType(String),
}
