//! Dense transition table of a pattern-matching DFA.
//!
//! The table is stored row-major as a flat array indexed by
//! `(state, alphabet index)`, so every lookup is O(1). A nested map view
//! (`state -> symbol -> state`) can be produced for consumers that prefer it,
//! and a table can be rebuilt from such a view after validation.

use std::collections::BTreeMap;

use super::alphabet::Alphabet;
use super::state::{StateId, START_STATE};

/// Nested map view of a transition table.
pub type TransitionMap = BTreeMap<StateId, BTreeMap<char, StateId>>;

/// Error type for tables rebuilt from an external map view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A state in `[0, state_count)` has no row
    #[error("State {state} has no transition row")]
    MissingRow {
        /// State without a row
        state: StateId,
    },
    /// A row exists for a state outside the automaton
    #[error("Transition row for unknown state {state} (automaton has {state_count} states)")]
    UnknownState {
        /// Offending state
        state: StateId,
        /// Number of states in the automaton
        state_count: usize,
    },
    /// A row lacks an alphabet symbol
    #[error("State {state} has no transition on {symbol:?}")]
    MissingEntry {
        /// State whose row is incomplete
        state: StateId,
        /// Missing symbol
        symbol: char,
    },
    /// A row mentions a symbol outside the alphabet
    #[error("State {state} has a transition on {symbol:?}, which is not in the alphabet")]
    UnknownSymbol {
        /// State whose row has the extra symbol
        state: StateId,
        /// Symbol outside the alphabet
        symbol: char,
    },
    /// A transition targets a state outside the automaton
    #[error("Transition q{state} --{symbol:?}--> q{target} leaves the automaton ({state_count} states)")]
    TargetOutOfRange {
        /// Source state
        state: StateId,
        /// Symbol of the edge
        symbol: char,
        /// Target state
        target: StateId,
        /// Number of states in the automaton
        state_count: usize,
    },
}

/// Total transition function over `states x alphabet`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransitionTable {
    state_count: usize,
    width: usize,
    targets: Vec<StateId>,
}

impl TransitionTable {
    /// Create a table with every entry pointing at the start state.
    pub(crate) fn new(state_count: usize, width: usize) -> Self {
        Self {
            state_count,
            width,
            targets: vec![START_STATE; state_count * width],
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, state: StateId, symbol_index: usize, target: StateId) {
        debug_assert!(state < self.state_count && symbol_index < self.width);
        self.targets[state * self.width + symbol_index] = target;
    }

    /// Target of `state` on the symbol at `symbol_index` of the alphabet.
    #[inline]
    pub fn target(&self, state: StateId, symbol_index: usize) -> Option<StateId> {
        if state >= self.state_count || symbol_index >= self.width {
            return None;
        }
        Some(self.targets[state * self.width + symbol_index])
    }

    /// Target of `state` on `symbol`, resolving the symbol through `alphabet`.
    ///
    /// Returns `None` when the symbol is not in the alphabet or the state has
    /// no row.
    #[inline]
    pub fn next(&self, state: StateId, symbol: char, alphabet: &Alphabet) -> Option<StateId> {
        alphabet
            .index_of(symbol)
            .and_then(|index| self.target(state, index))
    }

    /// All targets of `state`, in alphabet order.
    pub fn row(&self, state: StateId) -> Option<&[StateId]> {
        if state >= self.state_count {
            return None;
        }
        let start = state * self.width;
        Some(&self.targets[start..start + self.width])
    }

    /// Number of states (rows).
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Number of alphabet symbols (columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of defined entries.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the table defines no transitions.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Produce the nested `state -> symbol -> state` view.
    ///
    /// Every state gets a row, even when the alphabet is empty.
    pub fn to_map(&self, alphabet: &Alphabet) -> TransitionMap {
        (0..self.state_count)
            .map(|state| {
                let row = alphabet
                    .iter()
                    .enumerate()
                    .filter_map(|(index, symbol)| {
                        self.target(state, index).map(|target| (symbol, target))
                    })
                    .collect();
                (state, row)
            })
            .collect()
    }

    /// Rebuild a table from a nested map view.
    ///
    /// The map must define exactly one target in `[0, state_count)` for every
    /// state in `[0, state_count)` and every symbol of `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] describing the first violation found.
    pub fn from_map(
        map: &TransitionMap,
        alphabet: &Alphabet,
        state_count: usize,
    ) -> Result<Self, TableError> {
        if let Some((&state, _)) = map.range(state_count..).next() {
            return Err(TableError::UnknownState { state, state_count });
        }

        let mut table = Self::new(state_count, alphabet.len());
        for state in 0..state_count {
            let row = map.get(&state).ok_or(TableError::MissingRow { state })?;

            if let Some(&symbol) = row.keys().find(|&&symbol| !alphabet.contains(symbol)) {
                return Err(TableError::UnknownSymbol { state, symbol });
            }

            for (index, symbol) in alphabet.iter().enumerate() {
                let target = *row
                    .get(&symbol)
                    .ok_or(TableError::MissingEntry { state, symbol })?;
                if target >= state_count {
                    return Err(TableError::TargetOutOfRange {
                        state,
                        symbol,
                        target,
                        state_count,
                    });
                }
                table.set(state, index, target);
            }
        }

        Ok(table)
    }
}
