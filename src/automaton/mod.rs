//! Pattern-matching DFA construction.
//!
//! This module builds the classical Knuth-Morris-Pratt automaton for a single
//! pattern: one state per matched prefix length, a total transition table over
//! an alphabet derived from the pattern (and optionally a sample text), and the
//! same table flattened into an edge list.
//!
//! # Module Organization
//!
//! - `failure`: the prefix (failure) function
//! - `alphabet`: alphabet derivation and symbol indexing
//! - `state`: state and edge types
//! - `table`: the dense transition table and its map view
//! - `dfa`: the [`Dfa`] type and [`build_dfa`]
//! - `builder`: fluent [`AutomatonBuilder`]

mod alphabet;
pub mod builder;
mod dfa;
mod failure;
mod state;
pub mod table;

pub use alphabet::{is_blank, Alphabet};
pub use builder::AutomatonBuilder;
pub use dfa::{build_dfa, Dfa};
pub use failure::compute_failure_function;
pub(crate) use failure::resume_state;
pub use state::{DfaState, StateId, Transition, START_STATE};
pub use table::{TableError, TransitionMap, TransitionTable};
