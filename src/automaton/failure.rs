//! Failure function (prefix function) of a pattern.
//!
//! For every prefix `pattern[0..=i]` the failure function records the length
//! of the longest proper prefix that is also a suffix of it. The DFA builder
//! uses it to compute fallback transitions without rescanning the pattern, and
//! the simulator uses its last entry to leave the accepting state.

/// Compute the classical KMP failure array for `pattern`.
///
/// Runs in O(m): every fallback step shortens the currently matched border,
/// and the border only grows by one per index.
///
/// # Examples
///
/// ```rust
/// use kmp_automaton::automaton::compute_failure_function;
///
/// assert_eq!(compute_failure_function("aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
/// assert!(compute_failure_function("").is_empty());
/// ```
pub fn compute_failure_function(pattern: &str) -> Vec<usize> {
    let chars: Vec<char> = pattern.chars().collect();
    failure_of_chars(&chars)
}

/// Same as [`compute_failure_function`] over an already decoded pattern.
pub(crate) fn failure_of_chars(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut failure = vec![0; m];
    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            failure[i] = len;
            i += 1;
        } else if len > 0 {
            len = failure[len - 1];
        } else {
            failure[i] = 0;
            i += 1;
        }
    }

    failure
}

/// State the automaton continues from after a full match of `pattern`.
///
/// This is the length of the longest proper border of the whole pattern, so
/// overlapping occurrences are recognized. Empty patterns resume at 0.
pub(crate) fn resume_state(pattern: &[char]) -> usize {
    failure_of_chars(pattern).last().copied().unwrap_or(0)
}
