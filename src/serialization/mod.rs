//! Automaton and trace serialization support.
//!
//! This module exports the [`Dfa`] and [`MatchResult`] data contracts so that
//! rendering and playback front-ends can consume them, and imports a DFA back
//! after validating that its transition table is total.
//!
//! # Example
//!
//! ```rust
//! use kmp_automaton::automaton::build_dfa;
//! use kmp_automaton::serialization::{AutomatonSerializer, JsonSerializer};
//!
//! let dfa = build_dfa("aba", "abc");
//! let mut buffer = Vec::new();
//! JsonSerializer::serialize_dfa(&dfa, &mut buffer)?;
//!
//! let loaded = JsonSerializer::deserialize_dfa(buffer.as_slice())?;
//! assert_eq!(loaded, dfa);
//! # Ok::<(), kmp_automaton::serialization::SerializationError>(())
//! ```

use std::collections::BTreeMap;
use std::io::{Read, Write};

use crate::automaton::{Alphabet, Dfa, DfaState, StateId, TableError, Transition, TransitionTable};
use crate::simulation::MatchResult;

mod json_impl;

pub use self::json_impl::JsonSerializer;

/// Trait for serializing and deserializing automata and simulation traces.
pub trait AutomatonSerializer {
    /// Serialize a DFA to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize_dfa<W: Write>(dfa: &Dfa, writer: W) -> Result<(), SerializationError>;

    /// Deserialize and validate a DFA from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails, or if the decoded
    /// automaton is inconsistent (see [`DfaDocument::into_dfa`]).
    fn deserialize_dfa<R: Read>(reader: R) -> Result<Dfa, SerializationError>;

    /// Serialize a simulation trace to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn serialize_match_result<W: Write>(
        result: &MatchResult,
        writer: W,
    ) -> Result<(), SerializationError>;

    /// Deserialize a simulation trace from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn deserialize_match_result<R: Read>(reader: R) -> Result<MatchResult, SerializationError>;
}

/// Errors that can occur during serialization/deserialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// Error during JSON encoding or decoding
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The transition table is not a total function over states and alphabet
    #[error("Invalid transition table: {0}")]
    Table(#[from] TableError),
    /// States, pattern, alphabet or edge list disagree with each other
    #[error("Inconsistent automaton: {0}")]
    Inconsistent(String),
}

/// Wire representation of a [`Dfa`].
///
/// Field names follow the camelCase contract shared with rendering
/// front-ends: `states`, `transitions`, `transitionTable`, `alphabet`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DfaDocument {
    /// Pattern the automaton recognizes
    pub pattern: String,
    /// States ordered by id
    pub states: Vec<DfaState>,
    /// Flattened edge list
    #[serde(default)]
    pub transitions: Vec<Transition>,
    /// Nested `state -> symbol -> state` table
    pub transition_table: BTreeMap<StateId, BTreeMap<char, StateId>>,
    /// Alphabet in order
    pub alphabet: Vec<char>,
}

impl From<&Dfa> for DfaDocument {
    fn from(dfa: &Dfa) -> Self {
        Self {
            pattern: dfa.pattern().to_string(),
            states: dfa.states().to_vec(),
            transitions: dfa.transitions().to_vec(),
            transition_table: dfa.transition_map(),
            alphabet: dfa.alphabet().symbols().to_vec(),
        }
    }
}

impl DfaDocument {
    /// Validate the document and turn it into a [`Dfa`].
    ///
    /// # Errors
    ///
    /// - state ids are not exactly `0..=m` in order, with `m` the pattern
    ///   length in chars, or the start/accepting flags are wrong (labels are
    ///   free-form and kept as given)
    /// - the alphabet has duplicate symbols
    /// - the table is not total over states and alphabet ([`TableError`])
    /// - a non-empty edge list disagrees with the table
    pub fn into_dfa(self) -> Result<Dfa, SerializationError> {
        let m = self.pattern.chars().count();
        if self.states.len() != m + 1 {
            return Err(SerializationError::Inconsistent(format!(
                "pattern of length {} needs {} states, found {}",
                m,
                m + 1,
                self.states.len()
            )));
        }
        for (id, state) in self.states.iter().enumerate() {
            let expected = DfaState::new(id, m);
            if (state.id, state.is_start, state.is_accepting)
                != (expected.id, expected.is_start, expected.is_accepting)
            {
                return Err(SerializationError::Inconsistent(format!(
                    "state at position {} should be q{} (start: {}, accepting: {})",
                    id,
                    id,
                    id == 0,
                    m > 0 && id == m
                )));
            }
        }

        let alphabet = Alphabet::from_symbols(self.alphabet.iter().copied());
        if alphabet.len() != self.alphabet.len() {
            return Err(SerializationError::Inconsistent(
                "alphabet contains duplicate symbols".to_string(),
            ));
        }

        let table = TransitionTable::from_map(&self.transition_table, &alphabet, m + 1)?;
        let dfa = Dfa::from_parts(self.pattern, self.states, alphabet, table);

        if !self.transitions.is_empty() && self.transitions != dfa.transitions() {
            return Err(SerializationError::Inconsistent(
                "transition list disagrees with transition table".to_string(),
            ));
        }

        Ok(dfa)
    }
}
