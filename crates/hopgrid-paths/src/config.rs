//! Search configuration.

/// How the frontier orders nodes whose `f` costs are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Earliest-discovered node first.
    #[default]
    Fifo,
    /// Most recently discovered node first.
    Lifo,
}

/// Configuration for A* searches run by a [`PathRange`](crate::PathRange).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Secondary ordering among equal-`f` frontier nodes.
    pub tie_break: TieBreak,
    /// Stop with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
    /// once this many nodes have been expanded. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Default configuration with the given tie-break rule.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self {
            tie_break,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fifo_unbounded() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.tie_break, TieBreak::Fifo);
        assert_eq!(cfg.max_expansions, None);
        assert_eq!(
            SearchConfig::with_tie_break(TieBreak::Lifo).tie_break,
            TieBreak::Lifo
        );
    }
}
