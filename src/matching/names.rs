use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::matching::codes::ClubCodes;

/// Fold a team name to a comparison key: accents stripped, lowercased,
/// everything but ASCII letters and digits removed.
pub fn normalize(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Exact lookup key for a fixture: `normalize(home) + "_" + normalize(away)`.
pub fn pair_key(home: &str, away: &str) -> String {
    format!("{}_{}", normalize(home), normalize(away))
}

/// One normalized name contains the other. Empty names never match.
pub fn contains_either(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

/// Team-name matching across the football and odds providers.
///
/// Two stages: normalized equality, then mutual containment. Containment must
/// hold on the home side and on the away side at once; sides are never crossed.
#[derive(Debug, Clone)]
pub struct TeamNameMatcher {
    codes: ClubCodes,
}

impl Default for TeamNameMatcher {
    fn default() -> Self {
        Self::new(ClubCodes::builtin().clone())
    }
}

impl TeamNameMatcher {
    pub fn new(codes: ClubCodes) -> Self {
        Self { codes }
    }

    pub fn codes(&self) -> &ClubCodes {
        &self.codes
    }

    /// Single-name comparison: exact normalized equality, else containment.
    pub fn same_team(&self, a: &str, b: &str) -> bool {
        let (a, b) = (normalize(a), normalize(b));
        (!a.is_empty() && a == b) || contains_either(&a, &b)
    }

    /// Whether fixture `(home, away)` and quote `(quote_home, quote_away)` are the same match.
    pub fn matches(&self, home: &str, away: &str, quote_home: &str, quote_away: &str) -> bool {
        let (home, away) = (normalize(home), normalize(away));
        let (quote_home, quote_away) = (normalize(quote_home), normalize(quote_away));

        if !home.is_empty() && home == quote_home && !away.is_empty() && away == quote_away {
            return true;
        }
        contains_either(&home, &quote_home) && contains_either(&away, &quote_away)
    }

    pub fn short_code(&self, name: &str) -> String {
        self.codes.short_code(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize("Paris Saint-Germain"), "parissaintgermain");
        assert_eq!(normalize("Paris Saint Germain"), "parissaintgermain");
        assert_eq!(normalize("Atlético Madrid"), "atleticomadrid");
        assert_eq!(normalize("Bayern München"), "bayernmunchen");
        assert_eq!(normalize("Brighton & Hove Albion"), "brightonhovealbion");
        assert_eq!(normalize("Bayer 04 Leverkusen"), "bayer04leverkusen");
        assert_eq!(normalize("  "), "");
    }

    #[test]
    fn test_pair_key() {
        assert_eq!(pair_key("Stade Rennais", "FC Nantes"), "staderennais_fcnantes");
    }

    #[test]
    fn test_exact_match() {
        let matcher = TeamNameMatcher::default();
        assert!(matcher.matches("Olympique Lyonnais", "AS Saint-Étienne", "olympique lyonnais", "AS Saint Etienne"));
    }

    #[test]
    fn test_substring_match_requires_both_sides() {
        let matcher = TeamNameMatcher::default();
        assert!(matcher.matches("Olympique de Marseille", "Stade Rennais FC", "Marseille", "Stade Rennais"));
        assert!(!matcher.matches("Olympique de Marseille", "Stade Rennais FC", "Marseille", "Lens"));
    }

    #[test]
    fn test_psg_spelling_is_a_known_false_negative() {
        let matcher = TeamNameMatcher::default();
        // The away side passes containment, the home side shares no substring.
        assert!(matcher.same_team("Olympique de Marseille", "Marseille"));
        assert!(!matcher.same_team("Paris Saint-Germain", "Paris SG"));
        assert!(!matcher.matches("Paris Saint-Germain", "Olympique de Marseille", "Paris SG", "Marseille"));
    }

    #[test]
    fn test_sides_are_not_crossed() {
        let matcher = TeamNameMatcher::default();
        assert!(!matcher.matches("Lille", "Lens", "Lens", "Lille"));
    }

    #[test]
    fn test_empty_names_never_match() {
        let matcher = TeamNameMatcher::default();
        assert!(!matcher.matches("", "", "", ""));
        assert!(!matcher.matches("---", "Lens", "Lille", "Lens"));
        assert!(!matcher.same_team("", "Lens"));
    }

    #[test]
    fn test_short_code_through_matcher() {
        let matcher = TeamNameMatcher::default();
        assert_eq!(matcher.short_code("Paris Saint-Germain"), "PSG");
        assert_eq!(matcher.short_code("Toulouse FC"), "TOU");
    }
}
