//! How the simulator leaves the accepting state.

/// Behavior of the simulator once the full pattern has been matched.
///
/// The transition table always stores the accepting state as an absorbing
/// self-loop. The policy decides whether the simulator honors that loop or
/// continues from the pattern's longest border, as the classical KMP matcher
/// does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AcceptingPolicy {
    /// Continue from the state of the pattern's longest proper border.
    ///
    /// Every occurrence is reported once, overlapping ones included:
    /// `"aba"` in `"ababa"` matches at 0 and 2.
    #[default]
    Resume,

    /// Stay in the accepting state for the rest of the text.
    ///
    /// Every step after the first occurrence reports a match.
    Absorb,
}

impl AcceptingPolicy {
    /// Get a human-readable name for this policy
    pub fn name(&self) -> &'static str {
        match self {
            AcceptingPolicy::Resume => "resume",
            AcceptingPolicy::Absorb => "absorb",
        }
    }

    /// Check if this policy reports overlapping occurrences individually
    pub fn reports_overlaps(&self) -> bool {
        matches!(self, AcceptingPolicy::Resume)
    }
}

impl std::fmt::Display for AcceptingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AcceptingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resume" | "kmp" => Ok(AcceptingPolicy::Resume),
            "absorb" | "absorbing" | "sticky" => Ok(AcceptingPolicy::Absorb),
            _ => Err(format!(
                "Unknown accepting policy: {}. Valid options: resume, absorb",
                s
            )),
        }
    }
}
