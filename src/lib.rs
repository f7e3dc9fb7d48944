//! # kmp-automaton
//!
//! Single-pattern string matching with an explicit deterministic finite
//! automaton, built from the Knuth-Morris-Pratt failure function.
//!
//! The crate has two layers:
//!
//! - [`automaton`] builds the DFA: the failure function, an ordered alphabet,
//!   `m + 1` states and a total transition table.
//! - [`simulation`] replays a transition table over a text, one character per
//!   step, and records every transition so the run can be visualized or
//!   replayed with a [`Playback`](simulation::Playback) cursor.
//!
//! Both layers are pure: the same inputs always give the same outputs.
//!
//! ## Example
//!
//! ```rust
//! use kmp_automaton::prelude::*;
//!
//! let dfa = build_dfa("aba", "ababab");
//! let result = simulate_dfa("aba", "ababab", dfa.transition_table(), dfa.alphabet());
//!
//! assert_eq!(result.matches, vec![0, 2]);
//! assert_eq!(result.total_comparisons, 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod simulation;

#[cfg(feature = "serialization")]
pub mod serialization;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{
        build_dfa, compute_failure_function, Alphabet, AutomatonBuilder, Dfa, DfaState, StateId,
        Transition, TransitionTable, START_STATE,
    };
    pub use crate::simulation::{
        simulate_dfa, AcceptingPolicy, MatchResult, Playback, PlaybackStatus, SimulationStep,
        Simulator,
    };

    #[cfg(feature = "serialization")]
    pub use crate::serialization::{AutomatonSerializer, JsonSerializer, SerializationError};
}
