//! Step-by-step simulation of a pattern-matching DFA over a text.
//!
//! The simulator consumes exactly one input character per step and records a
//! [`SimulationStep`] for each, so the whole run can be replayed later (see
//! [`playback`]). It only relies on the transition table and alphabet, not on
//! how they were built.
//!
//! Characters outside the alphabet always reset the automaton to the start
//! state, whatever the failure function would prescribe.

pub mod playback;
mod policy;

pub use playback::{Playback, PlaybackStatus};
pub use policy::AcceptingPolicy;

use log::{trace, warn};

use crate::automaton::{resume_state, Alphabet, StateId, TransitionTable, START_STATE};

/// One consumed input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct SimulationStep {
    /// Index of the character in the text, counted in chars
    pub char_index: usize,
    /// The character consumed
    #[cfg_attr(feature = "serialization", serde(rename = "char"))]
    pub symbol: char,
    /// State before the transition
    pub from_state: StateId,
    /// State after the transition
    ///
    /// Under [`AcceptingPolicy::Resume`] a step leaving the accepting state is
    /// read from the resume state's row, so `(from_state, to_state)` need not
    /// be an edge of the DFA's transition list.
    pub to_state: StateId,
    /// Whether `to_state` is the accepting state
    pub matched: bool,
    /// Start index of the occurrence ending here, if `matched`
    #[cfg_attr(
        feature = "serialization",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub match_start: Option<usize>,
}

/// Full trace of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct MatchResult {
    /// One step per text character, in text order
    pub steps: Vec<SimulationStep>,
    /// Start indices of every occurrence, ascending
    pub matches: Vec<usize>,
    /// Number of automaton steps taken; always the text length in chars
    pub total_comparisons: usize,
}

impl MatchResult {
    /// Whether the pattern occurs at least once.
    pub fn is_match(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Number of reported occurrences.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no character was consumed.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// State after the last step (the start state for an empty text).
    pub fn final_state(&self) -> StateId {
        self.steps.last().map_or(START_STATE, |step| step.to_state)
    }

    /// Steps at which an occurrence ends.
    pub fn matched_steps(&self) -> impl Iterator<Item = &SimulationStep> + '_ {
        self.steps.iter().filter(|step| step.matched)
    }
}

/// Replays a transition table over input texts.
///
/// # Example
///
/// ```rust
/// use kmp_automaton::automaton::build_dfa;
/// use kmp_automaton::simulation::{AcceptingPolicy, Simulator};
///
/// let dfa = build_dfa("aba", "");
/// let sim = Simulator::with_policy(AcceptingPolicy::Absorb);
/// let result = sim.simulate("aba", "ababa", dfa.transition_table(), dfa.alphabet());
/// assert_eq!(result.matches, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simulator {
    policy: AcceptingPolicy,
}

impl Simulator {
    /// Create a simulator with the default [`AcceptingPolicy::Resume`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with an explicit accepting policy.
    pub fn with_policy(policy: AcceptingPolicy) -> Self {
        Self { policy }
    }

    /// The accepting policy in use.
    pub fn policy(&self) -> AcceptingPolicy {
        self.policy
    }

    /// Run the automaton for `pattern` over `text`.
    ///
    /// `table` and `alphabet` must come from the DFA built for `pattern`; a
    /// missing row is treated like an unknown character and resets to the
    /// start state.
    pub fn simulate(
        &self,
        pattern: &str,
        text: &str,
        table: &TransitionTable,
        alphabet: &Alphabet,
    ) -> MatchResult {
        let pattern: Vec<char> = pattern.chars().collect();
        let m = pattern.len();
        let accepting = (m > 0).then_some(m);
        let resume = resume_state(&pattern);

        let mut steps = Vec::with_capacity(text.len());
        let mut matches = Vec::new();
        let mut current = START_STATE;

        for (char_index, symbol) in text.chars().enumerate() {
            let from_state = current;
            let row = match self.policy {
                AcceptingPolicy::Resume if Some(from_state) == accepting => resume,
                _ => from_state,
            };

            let to_state = match alphabet.index_of(symbol) {
                Some(index) => table.target(row, index).unwrap_or_else(|| {
                    warn!("transition table has no row for state {}, resetting", row);
                    START_STATE
                }),
                None => {
                    trace!("{:?} at {} is outside the alphabet, resetting", symbol, char_index);
                    START_STATE
                }
            };
            current = to_state;

            let matched = Some(current) == accepting;
            let match_start = matched.then(|| (char_index + 1).saturating_sub(m));
            if let Some(start) = match_start {
                matches.push(start);
            }

            steps.push(SimulationStep {
                char_index,
                symbol,
                from_state,
                to_state,
                matched,
                match_start,
            });
        }

        let total_comparisons = steps.len();
        MatchResult {
            steps,
            matches,
            total_comparisons,
        }
    }
}

/// Run the automaton for `pattern` over `text` with the default simulator.
///
/// Pure: identical inputs always produce identical results.
///
/// # Examples
///
/// ```rust
/// use kmp_automaton::automaton::build_dfa;
/// use kmp_automaton::simulation::simulate_dfa;
///
/// let dfa = build_dfa("aba", "ababa");
/// let result = simulate_dfa("aba", "ababa", dfa.transition_table(), dfa.alphabet());
/// assert_eq!(result.matches, vec![0, 2]);
/// assert_eq!(result.total_comparisons, 5);
/// ```
pub fn simulate_dfa(
    pattern: &str,
    text: &str,
    table: &TransitionTable,
    alphabet: &Alphabet,
) -> MatchResult {
    Simulator::default().simulate(pattern, text, table, alphabet)
}
