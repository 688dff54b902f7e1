use anyhow::*;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::game::definition::QuizDefinition;
use crate::game::Game;
use crate::output::{GameOutput, Message};


const ERROR_MISSING_PATH: &'static str = "Usage: import <path to a CSV file>";
const ERROR_MISSING_POSITION: &'static str = "Usage: open <option number>";
const ERROR_NO_LIBRARY: &'static str = "No quiz library directory is configured";

lazy_static! {
    static ref COMMAND_REGEX: Regex = Regex::new(r"^\s*(\S+)(?:\s+(.*?))?\s*$").unwrap();
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Clear,
    End,
    Format,
    Help,
    Import(String),
    List,
    No,
    Open(usize),
    Quit,
    Show,
    Start,
    Yes,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Command> {
        let captures = COMMAND_REGEX
            .captures(line)
            .context("Type `help` to see the available commands")?;
        let verb = captures[1].to_lowercase();
        let argument = captures.get(2).map(|m| m.as_str()).unwrap_or_default();

        let command = match verb.as_str() {
            "clear" => Command::Clear,
            "end" => Command::End,
            "format" => Command::Format,
            "help" | "?" => Command::Help,
            "import" => {
                if argument.is_empty() {
                    return Err(anyhow!(ERROR_MISSING_PATH));
                }
                Command::Import(argument.to_owned())
            }
            "list" => Command::List,
            "no" | "n" => Command::No,
            "open" => {
                if argument.is_empty() {
                    return Err(anyhow!(ERROR_MISSING_POSITION));
                }
                let position = argument
                    .parse()
                    .with_context(|| format!("{:?} is not an option number", argument))?;
                Command::Open(position)
            }
            "quit" | "exit" => Command::Quit,
            "show" => Command::Show,
            "start" => Command::Start,
            "yes" | "y" => Command::Yes,
            other => return Err(anyhow!("Unknown command `{}`, type `help` for a list", other)),
        };
        Ok(command)
    }
}

fn resolve_quiz_path(argument: &str, library_dir: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(argument);
    if path.exists() || path.is_absolute() {
        return path;
    }
    if let Some(library_dir) = library_dir {
        let library_path = library_dir.join(&path);
        if library_path.exists() {
            return library_path;
        }
    }
    path
}

fn list_quiz_files(library_dir: &Path) -> Result<Vec<String>> {
    if !library_dir.exists() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(library_dir)
        .with_context(|| format!("Could not read quiz library {}", library_dir.display()))?
    {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            if let Some(name) = path.file_name() {
                files.push(name.to_string_lossy().into_owned());
            }
        }
    }
    Ok(files.into_iter().sorted().collect())
}

pub fn execute<O: GameOutput>(game: &mut Game<O>, command: Command) -> Result<()> {
    match command {
        Command::Clear => game.request_clear(),
        Command::End => game.end(),
        Command::Format => game.say(&Message::CsvFormat),
        Command::Help => game.say(&Message::Help),
        Command::Import(argument) => {
            let library_dir = game.get_settings().library_dir.clone();
            let path = resolve_quiz_path(&argument, library_dir.as_deref());
            log::info!("Importing quiz from {:?}", path);
            let definition = QuizDefinition::open(&path)
                .with_context(|| format!("Could not import quiz from {:?}", path));
            game.import(definition);
        }
        Command::List => {
            let library_dir = game
                .get_settings()
                .library_dir
                .clone()
                .context(ERROR_NO_LIBRARY)?;
            let files = list_quiz_files(&library_dir)?;
            game.say(&Message::QuizLibrary(library_dir, files));
        }
        Command::No => game.answer(false),
        Command::Open(position) => game.select_position(position),
        Command::Quit => (),
        Command::Show => game.show(),
        Command::Start => game.start(),
        Command::Yes => game.answer(true),
    }
    Ok(())
}

/// Runs one line of host input against the game. Returns `false` once the host asked to quit.
pub fn handle_line<O: GameOutput>(game: &mut Game<O>, line: &str) -> bool {
    if line.trim().is_empty() {
        return true;
    }

    let mut keep_running = true;
    let result = || -> Result<()> {
        let command: Command = line.parse()?;
        if command == Command::Quit {
            keep_running = false;
        }
        execute(game, command)
    }();

    if let Err(e) = result {
        log::warn!("{:#}", e);
        game.say(&Message::CommandError(format!("{:#}", e)));
    }
    keep_running
}
