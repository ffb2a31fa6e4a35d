//! Plain-text rendering shared by the prompt loop and `food-lottery list`.

use std::fmt::Write as _;

use crate::document::PreferenceDocument;
use crate::select::Selection;

pub const BANNER: &str = "Welcome to the Food Lottery!";
pub const RULE: &str = "========================================";

/// Render every person and their numbered preferences.
pub fn preference_listing(document: &PreferenceDocument) -> String {
    let mut out = String::from("=== Food Preferences ===\n");
    if document.people.is_empty() {
        out.push_str("\n(no people configured)\n");
        return out;
    }
    for (person, record) in &document.people {
        let _ = writeln!(out, "\n{person}:");
        if record.food_preferences.is_empty() {
            out.push_str("  (none)\n");
        }
        for (i, food) in record.food_preferences.iter().enumerate() {
            let _ = writeln!(out, "  {:2}. {food}", i + 1);
        }
    }
    out
}

/// Two-line announcement of a draw.
pub fn selection_message(selection: &Selection) -> String {
    format!(
        "Today's selection: {}\nSelected from {}",
        selection.food, selection.method
    )
}
