use std::ops::Range;
use std::sync::LazyLock;

use crate::models::Team;

/// One step of the chest-number heuristic.
///
/// Returning `None` hands the chest number to the next matcher in the chain.
pub trait ChestNumberMatcher: Send + Sync {
    fn match_code(&self, chest_number: &str, known_teams: &[Team]) -> Option<String>;
}

impl<F> ChestNumberMatcher for F
where
    F: Fn(&str, &[Team]) -> Option<String> + Send + Sync,
{
    fn match_code(&self, chest_number: &str, known_teams: &[Team]) -> Option<String> {
        self(chest_number, known_teams)
    }
}

fn leading_letters(chest_number: &str) -> String {
    chest_number
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// `SMD013` -> `SMD`. Longer letter runs are cut to three.
pub struct ThreeLetterPrefix;

impl ChestNumberMatcher for ThreeLetterPrefix {
    fn match_code(&self, chest_number: &str, _: &[Team]) -> Option<String> {
        let letters = leading_letters(chest_number);
        (letters.len() >= 3).then(|| letters[..3].to_string())
    }
}

/// `SM013` -> `SMD`. Unmapped pairs are returned as they are.
pub struct TwoLetterPrefix {
    remaps: Vec<(&'static str, &'static str)>,
}

impl TwoLetterPrefix {
    pub fn new(remaps: Vec<(&'static str, &'static str)>) -> Self {
        Self { remaps }
    }
}

impl Default for TwoLetterPrefix {
    fn default() -> Self {
        Self::new(vec![("SM", "SMD"), ("IN", "INT"), ("AQ", "AQS")])
    }
}

impl ChestNumberMatcher for TwoLetterPrefix {
    fn match_code(&self, chest_number: &str, _: &[Team]) -> Option<String> {
        let letters = leading_letters(chest_number);
        if letters.len() != 2 {
            return None;
        }

        let code = self
            .remaps
            .iter()
            .find(|(pair, _)| *pair == letters)
            .map(|(_, code)| code.to_string())
            .unwrap_or(letters);

        Some(code)
    }
}

pub struct SingleLetterPrefix;

impl ChestNumberMatcher for SingleLetterPrefix {
    fn match_code(&self, chest_number: &str, _: &[Team]) -> Option<String> {
        let letters = leading_letters(chest_number);
        (letters.len() == 1).then_some(letters)
    }
}

/// Purely numeric chest numbers, bucketed by hundreds.
///
/// A number outside every range maps to the first character of the chest
/// number as written, so `050` becomes `0`.
pub struct NumericRanges {
    ranges: Vec<(Range<i64>, &'static str)>,
}

impl NumericRanges {
    pub fn new(ranges: Vec<(Range<i64>, &'static str)>) -> Self {
        Self { ranges }
    }
}

impl Default for NumericRanges {
    fn default() -> Self {
        Self::new(vec![
            (600..700, "AQS"),
            (400..500, "INT"),
            (200..300, "SMD"),
            (100..200, "A"),
        ])
    }
}

impl ChestNumberMatcher for NumericRanges {
    fn match_code(&self, chest_number: &str, _: &[Team]) -> Option<String> {
        let number = chest_number.parse::<i64>().ok()?;

        self.ranges
            .iter()
            .find(|(range, _)| range.contains(&number))
            .map(|(_, code)| code.to_string())
            .or_else(|| chest_number.chars().next().map(String::from))
    }
}

/// Last resort: the first known team whose code appears anywhere in the
/// chest number.
pub struct KnownCodeSubstring;

impl ChestNumberMatcher for KnownCodeSubstring {
    fn match_code(&self, chest_number: &str, known_teams: &[Team]) -> Option<String> {
        let upper = chest_number.to_uppercase();

        known_teams
            .iter()
            .map(|team| team.code.to_uppercase())
            .find(|code| !code.is_empty() && upper.contains(code.as_str()))
    }
}

/// Ordered chain of matchers; the first one that answers wins.
pub struct TeamCodeClassifier {
    matchers: Vec<Box<dyn ChestNumberMatcher>>,
}

impl TeamCodeClassifier {
    pub fn new(matchers: Vec<Box<dyn ChestNumberMatcher>>) -> Self {
        Self { matchers }
    }

    /// Appends a matcher to the end of the chain.
    pub fn with_matcher(mut self, matcher: impl ChestNumberMatcher + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn classify(&self, chest_number: &str, known_teams: &[Team]) -> Option<String> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.match_code(chest_number, known_teams))
    }
}

impl Default for TeamCodeClassifier {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ThreeLetterPrefix),
            Box::new(TwoLetterPrefix::default()),
            Box::new(SingleLetterPrefix),
            Box::new(NumericRanges::default()),
            Box::new(KnownCodeSubstring),
        ])
    }
}

static DEFAULT_CLASSIFIER: LazyLock<TeamCodeClassifier> = LazyLock::new(TeamCodeClassifier::default);

/// Infers a team code from a chest number with the default chain.
/// Returns an empty string when nothing matches.
pub fn team_code_from_chest_number(chest_number: &str, known_teams: &[Team]) -> String {
    DEFAULT_CLASSIFIER
        .classify(chest_number, known_teams)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team::new("SMD", "Samad"),
            Team::new("INT", "Intellects"),
            Team::new("AQS", "Aqsa"),
        ]
    }

    fn classify(chest_number: &str) -> String {
        team_code_from_chest_number(chest_number, &teams())
    }

    #[test]
    fn test_three_letter_prefix() {
        assert_eq!(classify("SMD013"), "SMD");
        assert_eq!(classify("smd013"), "SMD");
        assert_eq!(classify("ABCD12"), "ABC");
        assert_eq!(classify("XYZ"), "XYZ");
    }

    #[test]
    fn test_two_letter_prefix_remaps() {
        assert_eq!(classify("SM013"), "SMD");
        assert_eq!(classify("IN42"), "INT");
        assert_eq!(classify("aq7"), "AQS");
        assert_eq!(classify("ZZ9"), "ZZ");
    }

    #[test]
    fn test_single_letter_prefix() {
        assert_eq!(classify("A150"), "A");
        assert_eq!(classify("b-12"), "B");
    }

    #[test]
    fn test_numeric_ranges() {
        assert_eq!(classify("650"), "AQS");
        assert_eq!(classify("150"), "A");
        assert_eq!(classify("450"), "INT");
        assert_eq!(classify("250"), "SMD");
    }

    #[test]
    fn test_numeric_range_boundaries() {
        let cases = [
            ("99", "9"),
            ("100", "A"),
            ("199", "A"),
            ("200", "SMD"),
            ("299", "SMD"),
            ("300", "3"),
            ("399", "3"),
            ("400", "INT"),
            ("499", "INT"),
            ("500", "5"),
            ("599", "5"),
            ("600", "AQS"),
            ("699", "AQS"),
            ("700", "7"),
        ];

        for (chest_number, expected) in cases {
            assert_eq!(classify(chest_number), expected, "chest {}", chest_number);
        }
    }

    #[test]
    fn test_numeric_out_of_range_uses_first_character() {
        assert_eq!(classify("050"), "0");
        assert_eq!(classify("1500"), "1");
        assert_eq!(classify("-5"), "-");
    }

    #[test]
    fn test_known_code_substring() {
        assert_eq!(classify("#SMD-12"), "SMD");
        assert_eq!(classify("12int"), "INT");
    }

    #[test]
    fn test_substring_takes_first_known_team() {
        let teams = vec![Team::new("AQS", "Aqsa"), Team::new("SMD", "Samad")];
        assert_eq!(team_code_from_chest_number("9-SMD-AQS", &teams), "AQS");
    }

    #[test]
    fn test_nothing_matches() {
        assert_eq!(classify(""), "");
        assert_eq!(classify("#42x"), "");
        assert_eq!(team_code_from_chest_number("#42x", &[]), "");
    }

    #[test]
    fn test_empty_team_codes_never_match() {
        let teams = vec![Team::new("", "Unnamed")];
        assert_eq!(team_code_from_chest_number("#42", &teams), "");
    }

    #[test]
    fn test_custom_chain_runs_in_order() {
        let classifier = TeamCodeClassifier::new(vec![Box::new(NumericRanges::new(vec![(
            800..900,
            "NEW",
        )]))])
        .with_matcher(|chest: &str, _: &[Team]| chest.starts_with('#').then(|| "HASH".to_string()));

        assert_eq!(classifier.classify("850", &[]), Some("NEW".to_string()));
        assert_eq!(classifier.classify("150", &[]), Some("1".to_string()));
        assert_eq!(classifier.classify("#1", &[]), Some("HASH".to_string()));
        assert_eq!(classifier.classify("SMD1", &[]), None);
    }
}
