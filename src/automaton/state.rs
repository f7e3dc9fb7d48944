//! States and edges of a pattern-matching DFA.

/// Identifier of a DFA state: the length of the pattern prefix matched so far.
pub type StateId = usize;

/// The unique start state (no prefix matched).
pub const START_STATE: StateId = 0;

/// A state of the DFA together with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DfaState {
    /// State identifier in `[0, m]`
    pub id: StateId,
    /// True only for state 0
    pub is_start: bool,
    /// True only for state `m` of a non-empty pattern
    pub is_accepting: bool,
    /// Display label, `q{id}`
    pub label: String,
}

impl DfaState {
    /// Create state `id` of an automaton for a pattern of length `pattern_len`.
    pub fn new(id: StateId, pattern_len: usize) -> Self {
        Self {
            id,
            is_start: id == START_STATE,
            is_accepting: pattern_len > 0 && id == pattern_len,
            label: format!("q{}", id),
        }
    }
}

/// One edge of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Transition {
    /// Source state
    pub from: StateId,
    /// Target state
    pub to: StateId,
    /// Symbol that triggers the edge
    #[cfg_attr(feature = "serialization", serde(rename = "char"))]
    pub symbol: char,
}

impl Transition {
    /// Create an edge.
    pub fn new(from: StateId, to: StateId, symbol: char) -> Self {
        Self { from, to, symbol }
    }

    /// Whether the edge loops back to its source.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "q{} --{:?}--> q{}", self.from, self.symbol, self.to)
    }
}
