//! `food-lottery`: text front end and launcher.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lottery::config::{DEFAULT_SETTINGS_PATH, LotterySettings, load_settings};
use lottery::error::LotteryError;
use lottery::exit_codes;
use lottery::launcher::{LauncherChoice, choose_front_end, run_graphical};
use lottery::prompt::run_prompt;
use lottery::render::preference_listing;
use lottery::select::{select_one, session_rng};
use lottery::store::PreferenceStore;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "food-lottery",
    version,
    about = "Randomly pick what to eat from everyone's food preferences"
)]
struct Cli {
    /// Preferences JSON file (overrides the settings file).
    #[arg(long, global = true)]
    preferences: Option<PathBuf>,

    /// Settings TOML file.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Seed for reproducible draws.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive menu (default).
    Prompt,
    /// Draw once and print the food.
    Draw {
        /// Draw only from this person's preferences.
        #[arg(short, long)]
        person: Option<String>,
    },
    /// Print every person's preferences.
    List,
    /// Choose between the text and graphical front ends.
    Launch,
}

fn main() {
    lottery::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = load_settings(&settings_path)
        .context("load settings")?
        .with_overrides(cli.preferences.clone(), cli.seed);
    debug!(preferences = %settings.preferences_path.display(), seed = ?settings.seed, "settings resolved");

    match cli.command.unwrap_or(Command::Prompt) {
        Command::Prompt => cmd_prompt(&settings),
        Command::Draw { person } => cmd_draw(&settings, person.as_deref()),
        Command::List => cmd_list(&settings),
        Command::Launch => cmd_launch(&settings, cli.preferences.as_deref(), cli.settings.as_deref()),
    }
}

fn open_store(settings: &LotterySettings) -> Result<PreferenceStore> {
    PreferenceStore::open(&settings.preferences_path).context("load preferences")
}

fn cmd_prompt(settings: &LotterySettings) -> Result<i32> {
    let stdin = io::stdin();
    prompt_session(settings, &mut stdin.lock())
}

/// Run the prompt loop on an input the caller already holds.
///
/// `Stdin` cannot be locked twice on one thread, so the launcher passes its
/// own lock through here.
fn prompt_session<R: BufRead>(settings: &LotterySettings, input: &mut R) -> Result<i32> {
    let store = open_store(settings)?;
    let mut rng = session_rng(settings.seed);
    let mut stdout = io::stdout();
    run_prompt(&store, &mut rng, input, &mut stdout)?;
    Ok(exit_codes::OK)
}

fn cmd_draw(settings: &LotterySettings, person: Option<&str>) -> Result<i32> {
    let store = open_store(settings)?;
    let mut rng = session_rng(settings.seed);
    match select_one(store.document(), person, &mut rng) {
        Ok(selection) => {
            println!("{}", selection.food);
            Ok(exit_codes::OK)
        }
        Err(err @ LotteryError::EmptyPool { .. }) => {
            eprintln!("{err}");
            Ok(exit_codes::EMPTY_POOL)
        }
        Err(err) => Err(err).context("draw"),
    }
}

fn cmd_list(settings: &LotterySettings) -> Result<i32> {
    let store = open_store(settings)?;
    print!("{}", preference_listing(store.document()));
    Ok(exit_codes::OK)
}

fn cmd_launch(
    settings: &LotterySettings,
    preferences: Option<&Path>,
    settings_path: Option<&Path>,
) -> Result<i32> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    match choose_front_end(&mut input, &mut stdout)? {
        LauncherChoice::Text => prompt_session(settings, &mut input),
        LauncherChoice::Graphical => {
            let status = run_graphical(preferences, settings_path)?;
            if !status.success() {
                bail!("graphical front end exited with {status}");
            }
            Ok(exit_codes::OK)
        }
        LauncherChoice::Exit | LauncherChoice::InputClosed => Ok(exit_codes::OK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_prompt() {
        let cli = Cli::parse_from(["food-lottery"]);
        assert!(cli.command.is_none());
        assert!(cli.preferences.is_none());
    }

    #[test]
    fn parse_draw_with_person_and_global_flags() {
        let cli = Cli::parse_from([
            "food-lottery",
            "draw",
            "--person",
            "A",
            "--seed",
            "7",
            "--preferences",
            "prefs.json",
        ]);
        assert!(matches!(cli.command, Some(Command::Draw { person: Some(ref p) }) if p == "A"));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.preferences, Some(PathBuf::from("prefs.json")));
    }

    #[test]
    fn parse_launch() {
        let cli = Cli::parse_from(["food-lottery", "launch"]);
        assert!(matches!(cli.command, Some(Command::Launch)));
    }
}
