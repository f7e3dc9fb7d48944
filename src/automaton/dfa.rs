//! KMP-style string-matching DFA construction.

use log::debug;

use super::alphabet::Alphabet;
use super::failure::failure_of_chars;
use super::state::{DfaState, StateId, Transition, START_STATE};
use super::table::{TransitionMap, TransitionTable};
use crate::simulation::{MatchResult, Simulator};

/// Deterministic automaton recognizing occurrences of a fixed pattern.
///
/// State `i` means "the longest pattern prefix matched so far has length `i`".
/// State `m` (the pattern length) is the accepting state and loops to itself
/// on every symbol.
///
/// A `Dfa` is immutable. Rebuild it whenever the pattern or the sample text
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    pattern: String,
    states: Vec<DfaState>,
    alphabet: Alphabet,
    table: TransitionTable,
    transitions: Vec<Transition>,
}

/// Build the DFA for `pattern`, completing the alphabet with the symbols of `text`.
///
/// Construction is O(m·|Σ|). An empty pattern yields a single non-accepting
/// start state with no transitions.
///
/// # Examples
///
/// ```rust
/// use kmp_automaton::automaton::build_dfa;
///
/// let dfa = build_dfa("aba", "");
/// assert_eq!(dfa.states().len(), 4);
/// assert_eq!(dfa.next_state(2, 'a'), Some(3));
/// assert_eq!(dfa.next_state(3, 'b'), Some(3));
/// ```
pub fn build_dfa(pattern: &str, text: &str) -> Dfa {
    let chars: Vec<char> = pattern.chars().collect();
    let m = chars.len();

    if m == 0 {
        debug!("building degenerate DFA for empty pattern");
        return Dfa {
            pattern: String::new(),
            states: vec![DfaState::new(START_STATE, 0)],
            alphabet: Alphabet::new(),
            table: TransitionTable::new(1, 0),
            transitions: Vec::new(),
        };
    }

    let alphabet = Alphabet::derive(pattern, text);
    let states: Vec<DfaState> = (0..=m).map(|id| DfaState::new(id, m)).collect();
    let failure = failure_of_chars(&chars);

    let mut table = TransitionTable::new(m + 1, alphabet.len());
    let mut transitions = Vec::with_capacity((m + 1) * alphabet.len());

    for state in 0..=m {
        for (index, symbol) in alphabet.iter().enumerate() {
            let next = next_state(&chars, &failure, state, symbol);
            table.set(state, index, next);
            transitions.push(Transition::new(state, next, symbol));
        }
    }

    debug!(
        "built DFA for {:?}: {} states, {} symbols, {} transitions",
        pattern,
        states.len(),
        alphabet.len(),
        transitions.len()
    );

    Dfa {
        pattern: pattern.to_string(),
        states,
        alphabet,
        table,
        transitions,
    }
}

/// Transition rule of the automaton for a non-empty pattern.
fn next_state(pattern: &[char], failure: &[usize], state: StateId, symbol: char) -> StateId {
    let m = pattern.len();

    if state < m && pattern[state] == symbol {
        return state + 1;
    }
    if state == m {
        return m;
    }

    // Walk the failure chain to the longest border that extends by `symbol`
    let mut k = state;
    while k > 0 && pattern[k] != symbol {
        k = failure[k - 1];
    }
    if pattern[k] == symbol {
        k + 1
    } else {
        START_STATE
    }
}

impl Dfa {
    /// Assemble a DFA from validated parts.
    ///
    /// The transition list is regenerated from the table so both views agree.
    pub(crate) fn from_parts(
        pattern: String,
        states: Vec<DfaState>,
        alphabet: Alphabet,
        table: TransitionTable,
    ) -> Self {
        let transitions = (0..table.state_count())
            .flat_map(|state| {
                let row = table.row(state).unwrap_or(&[]);
                row.iter()
                    .zip(alphabet.iter())
                    .map(move |(&to, symbol)| Transition::new(state, to, symbol))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self {
            pattern,
            states,
            alphabet,
            table,
            transitions,
        }
    }

    /// The pattern this automaton recognizes.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Pattern length in chars, which is also the accepting state id.
    pub fn pattern_len(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// All states, ordered by id.
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    /// The input alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The dense transition table.
    pub fn transition_table(&self) -> &TransitionTable {
        &self.table
    }

    /// The transition table flattened into edges, in (state, alphabet) order.
    ///
    /// The accepting state only has self-loops here. A simulation trace under
    /// the default policy leaves it through the resume state's row instead, so
    /// those steps have no matching edge in this list.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Nested `state -> symbol -> state` view of the transition table.
    pub fn transition_map(&self) -> TransitionMap {
        self.table.to_map(&self.alphabet)
    }

    /// The start state.
    pub fn start_state(&self) -> StateId {
        START_STATE
    }

    /// The accepting state, or `None` for the empty pattern.
    pub fn accepting_state(&self) -> Option<StateId> {
        self.states.iter().find(|s| s.is_accepting).map(|s| s.id)
    }

    /// Target of `state` on `symbol`; `None` if the symbol is outside the alphabet.
    pub fn next_state(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.table.next(state, symbol, &self.alphabet)
    }

    /// Run this automaton over `text` with the default simulator.
    pub fn simulate(&self, text: &str) -> MatchResult {
        Simulator::default().simulate(&self.pattern, text, &self.table, &self.alphabet)
    }
}
