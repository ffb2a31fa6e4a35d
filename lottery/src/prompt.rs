//! Interactive text front end.
//!
//! The loop is generic over its input and output so tests can drive it with
//! in-memory buffers instead of a terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rand::Rng;
use tracing::debug;

use crate::render::{BANNER, RULE, preference_listing, selection_message};
use crate::select::{Selection, select_one};
use crate::store::PreferenceStore;

/// How a prompt session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// A food was drawn.
    Selected(Selection),
    /// The user chose to exit.
    Exited,
    /// Input ended before a draw or an explicit exit.
    InputClosed,
}

/// Read one trimmed line. `None` at end of input.
pub(crate) fn read_choice<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("read stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu loop until a draw succeeds, the user exits, or input ends.
pub fn run_prompt<R, W, G>(
    store: &PreferenceStore,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<PromptOutcome>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(output, "{BANNER}")?;
    writeln!(output, "{RULE}")?;
    writeln!(output)?;
    write!(output, "{}", preference_listing(store.document()))?;
    writeln!(output, "\n{RULE}")?;
    writeln!(output, "Lottery Options:")?;
    writeln!(output, "1. Choose from all food options")?;
    writeln!(output, "2. Choose from a specific person's preferences")?;
    writeln!(output, "3. Exit")?;

    loop {
        write!(output, "\nSelect an option (1-3): ")?;
        output.flush()?;
        let Some(choice) = read_choice(input)? else {
            writeln!(output)?;
            return Ok(PromptOutcome::InputClosed);
        };
        debug!(choice = %choice, "menu choice");

        let person = match choice.as_str() {
            "1" => None,
            "2" => {
                let people = store.people();
                writeln!(output, "\nAvailable people: {}", people.join(", "))?;
                write!(output, "Enter person's name: ")?;
                output.flush()?;
                let Some(name) = read_choice(input)? else {
                    writeln!(output)?;
                    return Ok(PromptOutcome::InputClosed);
                };
                if !store.document().contains_person(&name) {
                    writeln!(output, "Person '{name}' not found in config.")?;
                    continue;
                }
                Some(name)
            }
            "3" => {
                writeln!(output, "Goodbye! Enjoy your meal!")?;
                return Ok(PromptOutcome::Exited);
            }
            _ => {
                writeln!(output, "Invalid choice. Please select 1, 2, or 3.")?;
                continue;
            }
        };

        match select_one(store.document(), person.as_deref(), rng) {
            Ok(selection) => {
                writeln!(output, "\n{}", selection_message(&selection))?;
                return Ok(PromptOutcome::Selected(selection));
            }
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::document::PreferenceDocument;
    use crate::select::SelectionMethod;
    use crate::test_support::{TWO_PEOPLE, document, seeded_rng};

    fn drive(doc: PreferenceDocument, script: &str) -> (PromptOutcome, String) {
        let store = PreferenceStore::from_document("config/config.json", doc);
        let mut rng = seeded_rng(3);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let outcome = run_prompt(&store, &mut rng, &mut input, &mut output).expect("prompt");
        (outcome, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn option_one_draws_from_all_options() {
        let (outcome, output) = drive(document(TWO_PEOPLE), "1\n");
        let selection = match outcome {
            PromptOutcome::Selected(selection) => selection,
            other => panic!("expected selection, got {other:?}"),
        };
        assert_eq!(selection.method, SelectionMethod::AllOptions);
        assert!(output.contains("=== Food Preferences ==="));
        assert!(output.contains(&format!("Today's selection: {}", selection.food)));
        assert!(output.contains("Selected from all options"));
    }

    #[test]
    fn option_two_draws_from_named_person() {
        let (outcome, output) = drive(document(TWO_PEOPLE), "2\nB\n");
        assert_eq!(
            outcome,
            PromptOutcome::Selected(Selection {
                food: "noodles".to_string(),
                method: SelectionMethod::Person {
                    person: "B".to_string()
                },
            })
        );
        assert!(output.contains("Available people: A, B"));
    }

    #[test]
    fn unknown_person_reprompts() {
        let (outcome, output) = drive(document(TWO_PEOPLE), "2\nZed\n3\n");
        assert_eq!(outcome, PromptOutcome::Exited);
        assert!(output.contains("Person 'Zed' not found in config."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (outcome, output) = drive(document(TWO_PEOPLE), "9\n\n3\n");
        assert_eq!(outcome, PromptOutcome::Exited);
        assert_eq!(output.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn empty_pool_reports_error_and_reprompts() {
        let doc = document(r#"{"people": {"A": {"food_preferences": []}}}"#);
        let (outcome, output) = drive(doc, "1\n2\nA\n3\n");
        assert_eq!(outcome, PromptOutcome::Exited);
        assert!(output.contains("Error: no food options available"));
        assert!(output.contains("Error: no food preferences found for A"));
    }

    #[test]
    fn end_of_input_closes_session() {
        let (outcome, _) = drive(document(TWO_PEOPLE), "");
        assert_eq!(outcome, PromptOutcome::InputClosed);

        let (outcome, _) = drive(document(TWO_PEOPLE), "2\n");
        assert_eq!(outcome, PromptOutcome::InputClosed);
    }
}
