use anyhow::*;
use parking_lot::Mutex;
use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

mod commands;
mod game;
mod output;

use crate::game::settings::Settings;
use crate::game::Game;
use crate::output::terminal::TerminalOutput;
use crate::output::Message;

type GameHandle = Arc<Mutex<Game<TerminalOutput<io::Stdout>>>>;

fn spawn_ticker(game: GameHandle, running: Arc<AtomicBool>) -> thread::JoinHandle<()> {
    let tick_interval = game.lock().get_settings().tick_interval;
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        while running.load(Ordering::Relaxed) {
            thread::sleep(tick_interval);
            let now = Instant::now();
            game.lock().tick(now.duration_since(last_tick));
            last_tick = now;
        }
    })
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let settings = Settings::from_env().context("Invalid settings")?;
    log::info!("Starting with {:?}", settings);

    let game: GameHandle = Arc::new(Mutex::new(Game::new(
        TerminalOutput::new(io::stdout()),
        settings,
    )));
    {
        let game = game.lock();
        game.show();
        game.say(&Message::Help);
    }

    let running = Arc::new(AtomicBool::new(true));
    let ticker = spawn_ticker(game.clone(), running.clone());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Could not read from stdin")?;
        if !commands::handle_line(&mut *game.lock(), &line) {
            break;
        }
    }

    running.store(false, Ordering::Relaxed);
    ticker
        .join()
        .map_err(|_| anyhow!("Ticker thread panicked"))?;
    Ok(())
}
