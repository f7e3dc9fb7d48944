//! Property-based tests for DFA construction and simulation
//!
//! The automaton is checked against brute-force references: a quadratic
//! failure function and a naive substring scan.

use kmp_automaton::prelude::*;
use proptest::prelude::*;

// Small alphabets make repeated borders and overlaps likely
fn pattern_strategy() -> impl Strategy<Value = String> {
    "[abc]{1,8}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[abcd]{0,40}"
}

// Helper: longest proper border of every prefix, by brute force
fn naive_failure(pattern: &str) -> Vec<usize> {
    let chars: Vec<char> = pattern.chars().collect();
    (0..chars.len())
        .map(|i| {
            let prefix = &chars[..=i];
            (0..=i)
                .rev()
                .find(|&len| len < prefix.len() && prefix[..len] == prefix[prefix.len() - len..])
                .unwrap_or(0)
        })
        .collect()
}

// Helper: every start index where `pattern` occurs in `text`, overlaps included
fn naive_matches(pattern: &str, text: &str) -> Vec<usize> {
    let p: Vec<char> = pattern.chars().collect();
    let t: Vec<char> = text.chars().collect();
    if p.is_empty() || p.len() > t.len() {
        return Vec::new();
    }
    (0..=t.len() - p.len()).filter(|&i| t[i..i + p.len()] == p[..]).collect()
}

proptest! {
    #[test]
    fn failure_function_matches_brute_force(pattern in "[ab]{0,12}") {
        prop_assert_eq!(compute_failure_function(&pattern), naive_failure(&pattern));
    }

    #[test]
    fn matches_agree_with_naive_scan(pattern in pattern_strategy(), text in text_strategy()) {
        let dfa = build_dfa(&pattern, &text);
        let result = simulate_dfa(&pattern, &text, dfa.transition_table(), dfa.alphabet());
        prop_assert_eq!(result.matches, naive_matches(&pattern, &text));
    }

    #[test]
    fn matches_agree_when_text_is_not_in_alphabet(
        pattern in pattern_strategy(),
        text in text_strategy()
    ) {
        // Symbols missing from the pattern can never be part of a match, so the
        // reset on them agrees with the classical automaton
        let dfa = build_dfa(&pattern, "");
        let result = simulate_dfa(&pattern, &text, dfa.transition_table(), dfa.alphabet());
        prop_assert_eq!(result.matches, naive_matches(&pattern, &text));
    }

    #[test]
    fn table_is_total_with_absorbing_accept(pattern in pattern_strategy(), text in text_strategy()) {
        let dfa = build_dfa(&pattern, &text);
        let m = pattern.chars().count();

        prop_assert_eq!(dfa.states().len(), m + 1);
        prop_assert_eq!(dfa.transitions().len(), (m + 1) * dfa.alphabet().len());
        for state in 0..=m {
            for symbol in dfa.alphabet().iter() {
                let target = dfa.next_state(state, symbol);
                prop_assert!(matches!(target, Some(t) if t <= m));
                if state == m {
                    prop_assert_eq!(target, Some(m));
                }
            }
        }
    }

    #[test]
    fn trace_is_chained_and_complete(pattern in pattern_strategy(), text in text_strategy()) {
        let result = build_dfa(&pattern, &text).simulate(&text);
        let m = pattern.chars().count();

        prop_assert_eq!(result.total_comparisons, text.chars().count());
        prop_assert_eq!(result.steps.len(), result.total_comparisons);

        let mut previous = START_STATE;
        for (i, step) in result.steps.iter().enumerate() {
            prop_assert_eq!(step.char_index, i);
            prop_assert_eq!(step.from_state, previous);
            prop_assert_eq!(step.matched, step.to_state == m);
            prop_assert_eq!(step.match_start.is_some(), step.matched);
            previous = step.to_state;
        }
    }

    #[test]
    fn state_is_longest_matched_prefix(pattern in pattern_strategy(), text in text_strategy()) {
        let result = build_dfa(&pattern, &text).simulate(&text);
        let p: Vec<char> = pattern.chars().collect();
        let t: Vec<char> = text.chars().collect();

        for step in &result.steps {
            let end = step.char_index + 1;
            let seen = &t[..end];
            let expected = (0..=p.len().min(end))
                .rev()
                .find(|&len| seen[end - len..] == p[..len])
                .unwrap_or(0);
            prop_assert_eq!(step.to_state, expected);
        }
    }

    #[test]
    fn simulation_is_idempotent(pattern in pattern_strategy(), text in text_strategy()) {
        let dfa = build_dfa(&pattern, &text);
        let first = simulate_dfa(&pattern, &text, dfa.transition_table(), dfa.alphabet());
        let second = simulate_dfa(&pattern, &text, dfa.transition_table(), dfa.alphabet());
        prop_assert_eq!(first, second);
    }
}
