//! Ordered input alphabet of a pattern-matching DFA.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Ordered sequence of distinct symbols the transition table is defined over.
///
/// Pattern symbols come first, in order of first occurrence. Symbols that only
/// appear in the sample text follow, sorted by code point. Blank symbols are
/// never part of the alphabet (see [`is_blank`]).
#[derive(Debug, Clone, Default)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: FxHashMap<char, usize>,
}

/// Whether `c` is dropped from alphabet derivation.
///
/// Covers what a Unicode whitespace trim removes: the byte order mark is
/// blank, NEL (U+0085) is not.
#[inline]
pub fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

impl Alphabet {
    /// Create an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the alphabet for `pattern`, completed with the symbols of `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kmp_automaton::automaton::Alphabet;
    ///
    /// let alphabet = Alphabet::derive("cab", "zebra cab");
    /// assert_eq!(alphabet.symbols(), &['c', 'a', 'b', 'e', 'r', 'z']);
    /// ```
    pub fn derive(pattern: &str, text: &str) -> Self {
        let mut alphabet = Self::new();
        for c in pattern.chars().filter(|&c| !is_blank(c)) {
            alphabet.push(c);
        }

        let mut extra: SmallVec<[char; 32]> = SmallVec::new();
        for c in text.chars().filter(|&c| !is_blank(c)) {
            if !alphabet.contains(c) && !extra.contains(&c) {
                extra.push(c);
            }
        }
        extra.sort_unstable();
        for c in extra {
            alphabet.push(c);
        }

        alphabet
    }

    /// Build an alphabet from an explicit symbol list, keeping first occurrences.
    pub fn from_symbols<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        let mut alphabet = Self::new();
        for c in symbols {
            alphabet.push(c);
        }
        alphabet
    }

    /// Every distinct symbol of `pattern` and `text`, blanks included, sorted by
    /// code point.
    ///
    /// Unlike [`Alphabet::derive`] this does not give pattern symbols priority;
    /// it is meant for listing the full character inventory of an input.
    pub fn extended(pattern: &str, text: &str) -> Vec<char> {
        let mut chars: Vec<char> = pattern.chars().chain(text.chars()).collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }

    fn push(&mut self, c: char) {
        if !self.index.contains_key(&c) {
            self.index.insert(c, self.symbols.len());
            self.symbols.push(c);
        }
    }

    /// Position of `c` in the alphabet, if it is a member.
    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Check membership.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    /// The symbols in alphabet order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol at position `index`.
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Iterate over the symbols in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}
