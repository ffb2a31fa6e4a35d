//! In-memory preference document and the pure queries over it.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The loaded mapping of person name to preference record.
///
/// Missing `people` deserializes to an empty mapping. Key order follows the
/// source file.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PreferenceDocument {
    pub people: IndexMap<String, PersonRecord>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersonRecord {
    pub food_preferences: Vec<String>,
}

impl PreferenceDocument {
    /// Configured person names in document order.
    pub fn people(&self) -> Vec<String> {
        self.people.keys().cloned().collect()
    }

    /// Preferences for `person`, verbatim. Empty when the person is absent.
    pub fn preferences_for(&self, person: &str) -> &[String] {
        self.people
            .get(person)
            .map(|record| record.food_preferences.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct food names across every person.
    pub fn all_food_options(&self) -> BTreeSet<String> {
        self.people
            .values()
            .flat_map(|record| record.food_preferences.iter().cloned())
            .collect()
    }

    pub fn contains_person(&self, person: &str) -> bool {
        self.people.contains_key(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> PreferenceDocument {
        serde_json::from_str(raw).expect("parse document")
    }

    #[test]
    fn people_follow_file_order() {
        let doc = parse(
            r#"{"people": {"Zoe": {"food_preferences": []}, "Adam": {}, "Mia": {"food_preferences": ["tea"]}}}"#,
        );
        assert_eq!(doc.people(), vec!["Zoe", "Adam", "Mia"]);
    }

    #[test]
    fn missing_people_key_is_empty_mapping() {
        let doc = parse("{}");
        assert!(doc.people().is_empty());
        assert!(doc.all_food_options().is_empty());
    }

    #[test]
    fn missing_food_preferences_is_empty_sequence() {
        let doc = parse(r#"{"people": {"A": {}}}"#);
        assert_eq!(doc.people(), vec!["A"]);
        assert!(doc.preferences_for("A").is_empty());
    }

    #[test]
    fn preferences_for_preserves_order_and_duplicates() {
        let doc = parse(
            r#"{"people": {"A": {"food_preferences": ["noodles", "rice", "noodles"]}}}"#,
        );
        assert_eq!(doc.preferences_for("A"), ["noodles", "rice", "noodles"]);
    }

    #[test]
    fn preferences_for_absent_person_is_empty() {
        let doc = parse(r#"{"people": {"A": {"food_preferences": ["rice"]}}}"#);
        assert!(doc.preferences_for("Nobody").is_empty());
        assert!(!doc.contains_person("Nobody"));
    }

    #[test]
    fn all_food_options_collapses_duplicates_across_people() {
        let doc = parse(
            r#"{"people": {
                "A": {"food_preferences": ["rice", "noodles", "rice"]},
                "B": {"food_preferences": ["noodles"]}
            }}"#,
        );
        let expected: BTreeSet<String> = ["rice", "noodles"].iter().map(|s| s.to_string()).collect();
        assert_eq!(doc.all_food_options(), expected);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let doc = parse(
            r#"{"version": 2, "people": {"A": {"food_preferences": ["rice"], "allergies": ["nuts"]}}}"#,
        );
        assert_eq!(doc.preferences_for("A"), ["rice"]);
    }
}
