//! Builder pattern for creating [`Dfa`] instances.
//!
//! The `AutomatonBuilder` provides a fluent API over [`build_dfa`], which is
//! convenient when the sample text is assembled from several pieces.

use super::dfa::{build_dfa, Dfa};

/// Builder for constructing a [`Dfa`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use kmp_automaton::automaton::AutomatonBuilder;
///
/// let dfa = AutomatonBuilder::new()
///     .pattern("aba")
///     .sample_text("abacus")
///     .build();
///
/// assert_eq!(dfa.alphabet().symbols(), &['a', 'b', 'c', 's', 'u']);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    pattern: String,
    sample_text: String,
}

impl AutomatonBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern the automaton recognizes.
    ///
    /// Leaving it unset builds the degenerate automaton of the empty pattern.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Append text whose symbols should be part of the alphabet.
    ///
    /// May be called several times; the pieces are concatenated.
    pub fn sample_text(mut self, text: &str) -> Self {
        self.sample_text.push_str(text);
        self
    }

    /// Build the `Dfa`.
    pub fn build(self) -> Dfa {
        build_dfa(&self.pattern, &self.sample_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_free_function() {
        let dfa = AutomatonBuilder::new().pattern("abab").sample_text("xyz").build();
        assert_eq!(dfa, build_dfa("abab", "xyz"));
    }

    #[test]
    fn test_builder_without_pattern() {
        let dfa = AutomatonBuilder::new().sample_text("abc").build();
        assert_eq!(dfa.states().len(), 1);
        assert!(dfa.alphabet().is_empty());
    }

    #[test]
    fn test_builder_concatenates_samples() {
        let dfa = AutomatonBuilder::new()
            .sample_text("zz")
            .pattern("a")
            .sample_text("yx")
            .build();
        assert_eq!(dfa.alphabet().symbols(), &['a', 'x', 'y', 'z']);
    }
}
