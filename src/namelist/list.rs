//! The in-memory watchlist and the lookup over it.

/// Queries shorter than this (in characters, after trimming) never produce
/// suggestions.
pub const MIN_SUGGESTION_CHARS: usize = 3;

/// Outcome of checking a query against the watchlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// The query equals a list entry (case-insensitive).
    Match,
    /// No entry matched and no suggestions apply.
    NotFound,
    /// No exact match, but these entries contain the query as a substring.
    /// Original casing, original list order.
    Suggestions(Vec<String>),
}

impl LookupResult {
    /// Short label for JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupResult::Match => "match",
            LookupResult::NotFound => "not_found",
            LookupResult::Suggestions(_) => "suggestions",
        }
    }

    /// Suggested entries, empty for the other variants.
    pub fn suggestions(&self) -> &[String] {
        match self {
            LookupResult::Suggestions(s) => s,
            _ => &[],
        }
    }
}

/// Immutable list of flagged names, loaded once at startup.
///
/// Keeps the entries exactly as loaded (order preserved, duplicates allowed)
/// plus a case-folded copy of each entry, index-aligned with the originals.
/// Folding is only ever used for comparison; displayed values keep their
/// original casing.
#[derive(Debug, Clone)]
pub struct NameList {
    names: Vec<String>,
    folded: Vec<String>,
}

impl NameList {
    /// Build a list from loaded entries, precomputing the folded forms.
    pub fn new(names: Vec<String>) -> Self {
        let folded = names.iter().map(|n| n.to_lowercase()).collect();
        Self { names, folded }
    }

    /// An empty list (for when the source isn't available).
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// All entries, original casing and order.
    pub fn all(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check a query against the list.
    ///
    /// The query is trimmed and case-folded. An exact (folded) match wins
    /// outright, even for queries under the suggestion threshold. Otherwise
    /// queries of at least [`MIN_SUGGESTION_CHARS`] characters collect every
    /// entry whose folded form contains the query as a substring, in list
    /// order, without de-duplication or ranking.
    pub fn lookup(&self, query: &str) -> LookupResult {
        let needle = query.trim().to_lowercase();

        if self.folded.iter().any(|entry| *entry == needle) {
            return LookupResult::Match;
        }

        if needle.chars().count() < MIN_SUGGESTION_CHARS {
            return LookupResult::NotFound;
        }

        let suggestions: Vec<String> = self
            .names
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| folded.contains(needle.as_str()))
            .map(|(original, _)| original.clone())
            .collect();

        if suggestions.is_empty() {
            LookupResult::NotFound
        } else {
            LookupResult::Suggestions(suggestions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NameList {
        NameList::new(vec![
            "Maria".to_string(),
            "Mariana".to_string(),
            "Carla".to_string(),
        ])
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let list = sample();
        assert_eq!(list.lookup("maria"), LookupResult::Match);
        assert_eq!(list.lookup("MARIA"), LookupResult::Match);
        assert_eq!(list.lookup("  Maria  "), LookupResult::Match);
    }

    #[test]
    fn substring_matches_become_suggestions() {
        let list = sample();
        assert_eq!(
            list.lookup("mari"),
            LookupResult::Suggestions(vec!["Maria".to_string(), "Mariana".to_string()])
        );
    }

    #[test]
    fn suggestions_keep_original_casing_and_order() {
        let list = NameList::new(vec![
            "ZARA_belle".to_string(),
            "Anabella".to_string(),
            "BELLA".to_string(),
        ]);
        assert_eq!(
            list.lookup("bella"),
            LookupResult::Suggestions(vec![
                "ZARA_belle".to_string(),
                "Anabella".to_string(),
            ])
        );
    }

    #[test]
    fn short_queries_never_suggest() {
        let list = sample();
        // "ma" is a substring of Maria and Mariana but is below the threshold.
        assert_eq!(list.lookup("ma"), LookupResult::NotFound);
        assert_eq!(list.lookup("xy"), LookupResult::NotFound);
        assert_eq!(list.lookup(""), LookupResult::NotFound);
        assert_eq!(list.lookup("   "), LookupResult::NotFound);
    }

    #[test]
    fn short_exact_match_still_wins() {
        let list = NameList::new(vec!["Jo".to_string()]);
        assert_eq!(list.lookup("jo"), LookupResult::Match);
        assert_eq!(list.lookup("JO "), LookupResult::Match);
    }

    #[test]
    fn no_substring_means_not_found() {
        let list = sample();
        assert_eq!(list.lookup("zzz"), LookupResult::NotFound);
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let list = NameList::new(vec![
            "Valentina".to_string(),
            "valentina".to_string(),
        ]);
        assert_eq!(
            list.lookup("valen"),
            LookupResult::Suggestions(vec![
                "Valentina".to_string(),
                "valentina".to_string(),
            ])
        );
    }

    #[test]
    fn accented_names_fold_correctly() {
        let list = NameList::new(vec!["María José".to_string()]);
        assert_eq!(list.lookup("MARÍA JOSÉ"), LookupResult::Match);
        assert_eq!(
            list.lookup("marí"),
            LookupResult::Suggestions(vec!["María José".to_string()])
        );
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        // "añé" is three characters but five bytes; it must pass the gate.
        let list = NameList::new(vec!["Cañéro".to_string()]);
        assert_eq!(
            list.lookup("añé"),
            LookupResult::Suggestions(vec!["Cañéro".to_string()])
        );
    }

    #[test]
    fn empty_list_finds_nothing() {
        let list = NameList::empty();
        assert_eq!(list.lookup("maria"), LookupResult::NotFound);
    }
}
