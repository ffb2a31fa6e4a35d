//! Launcher menu that picks between the text and graphical front ends.

use std::env;
use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::prompt::read_choice;

/// Executable name of the graphical front end.
pub const UI_BINARY: &str = "lottery-ui";

/// Front end picked from the launcher menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherChoice {
    Text,
    Graphical,
    Exit,
    InputClosed,
}

/// Show the launcher menu and read until a valid choice is made.
pub fn choose_front_end<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<LauncherChoice> {
    writeln!(output, "Food Lottery Launcher")?;
    writeln!(output, "==============================")?;
    writeln!(output, "1. Run the text version")?;
    writeln!(output, "2. Run the graphical version")?;
    writeln!(output, "3. Exit")?;

    loop {
        write!(output, "\nSelect an option (1-3): ")?;
        output.flush()?;
        let Some(choice) = read_choice(input)? else {
            writeln!(output)?;
            return Ok(LauncherChoice::InputClosed);
        };
        match choice.as_str() {
            "1" => {
                writeln!(output, "\nStarting text version...")?;
                return Ok(LauncherChoice::Text);
            }
            "2" => {
                writeln!(output, "\nStarting graphical version...")?;
                return Ok(LauncherChoice::Graphical);
            }
            "3" => {
                writeln!(output, "Goodbye!")?;
                return Ok(LauncherChoice::Exit);
            }
            _ => writeln!(output, "Invalid choice. Please select 1, 2, or 3.")?,
        }
    }
}

/// Locate the UI executable: next to the current executable, else on `PATH`.
pub fn locate_ui_binary() -> PathBuf {
    let file_name = format!("{UI_BINARY}{}", env::consts::EXE_SUFFIX);
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&file_name)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(file_name))
}

/// Build the command that starts the UI with forwarded paths.
pub fn ui_command(binary: &Path, preferences: Option<&Path>, settings: Option<&Path>) -> Command {
    let mut cmd = Command::new(binary);
    let mut args: Vec<OsString> = Vec::new();
    if let Some(path) = preferences {
        args.push("--preferences".into());
        args.push(path.into());
    }
    if let Some(path) = settings {
        args.push("--settings".into());
        args.push(path.into());
    }
    cmd.args(args);
    cmd
}

/// Start the UI and wait for it to exit.
#[instrument(skip_all)]
pub fn run_graphical(preferences: Option<&Path>, settings: Option<&Path>) -> Result<ExitStatus> {
    let binary = locate_ui_binary();
    info!(binary = %binary.display(), "starting graphical front end");
    ui_command(&binary, preferences, settings)
        .status()
        .with_context(|| format!("start {}", binary.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn choose(script: &str) -> (LauncherChoice, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let choice = choose_front_end(&mut input, &mut output).expect("choose");
        (choice, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn picks_each_front_end() {
        assert_eq!(choose("1\n").0, LauncherChoice::Text);
        assert_eq!(choose("2\n").0, LauncherChoice::Graphical);
        assert_eq!(choose("3\n").0, LauncherChoice::Exit);
        assert_eq!(choose("").0, LauncherChoice::InputClosed);
    }

    #[test]
    fn invalid_input_reprompts() {
        let (choice, output) = choose("x\n 2 \n");
        assert_eq!(choice, LauncherChoice::Graphical);
        assert!(output.contains("Invalid choice"));
    }

    #[test]
    fn ui_command_forwards_paths() {
        let cmd = ui_command(
            Path::new("lottery-ui"),
            Some(Path::new("prefs.json")),
            Some(Path::new("settings.toml")),
        );
        let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy().into_owned()).collect();
        assert_eq!(args, vec!["--preferences", "prefs.json", "--settings", "settings.toml"]);
    }

    #[test]
    fn ui_command_without_overrides_has_no_args() {
        let cmd = ui_command(Path::new("lottery-ui"), None, None);
        assert_eq!(cmd.get_args().count(), 0);
    }
}
