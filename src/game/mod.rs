use anyhow::Result;
use std::time::Duration;

pub mod board;
pub mod definition;
pub mod dialog;
pub mod layout;
pub mod popup;
pub mod session;
pub mod settings;


use crate::game::board::Board;
use crate::game::definition::QuizDefinition;
use crate::game::dialog::Dialog;
use crate::game::layout::GridDimensions;
use crate::game::popup::Popup;
use crate::game::session::Session;
use crate::game::settings::Settings;
use crate::output::{GameOutput, Message};

/// Drives one quiz session and everything drawn around it.
///
/// The session holds the quiz itself; the grid, the open dialog and the
/// result popup are presentation flags that only change through the
/// transitions below. Each transition re-renders the board when it changes
/// something visible.
pub struct Game<O: GameOutput> {
    session: Session,
    grid: GridDimensions,
    dialog: Option<Dialog>,
    popup: Option<Popup>,
    settings: Settings,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new(output: O, settings: Settings) -> Game<O> {
        Game {
            session: Session::default(),
            grid: GridDimensions::default(),
            dialog: None,
            popup: None,
            settings,
            output,
        }
    }

    #[cfg(test)]
    pub fn get_session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn get_grid(&self) -> GridDimensions {
        self.grid
    }

    #[cfg(test)]
    pub fn get_dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    #[cfg(test)]
    pub fn get_popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn board(&self) -> Board {
        let popup = self.popup.as_ref().map(Popup::get_verdict);
        Board::new(&self.session, self.grid, popup)
    }

    pub fn show(&self) {
        self.output.render(&self.board());
    }

    pub fn say(&self, message: &Message) {
        self.output.say(message);
    }

    fn is_blocked_by_dialog(&self) -> bool {
        if self.dialog.is_some() {
            self.output.say(&Message::DialogPending);
            return true;
        }
        false
    }

    fn log_phase(&self) {
        log::info!("Entering game phase: {:?}", self.session.get_phase());
    }

    /// Receives the outcome of parsing a quiz file.
    ///
    /// A failed parse is reported and leaves the current quiz in place.
    pub fn import(&mut self, definition: Result<QuizDefinition>) {
        if self.is_blocked_by_dialog() {
            return;
        }
        let definition = match definition {
            Ok(definition) => definition,
            Err(e) => {
                log::error!("Error parsing CSV: {:#}", e);
                self.output.say(&Message::ImportFailed(format!("{:#}", e)));
                return;
            }
        };
        if !self.session.load(definition) {
            log::debug!("Ignoring import while the game is running");
            return;
        }
        self.grid.fit(self.session.num_visible_options());
        self.log_phase();
        self.show();
    }

    pub fn start(&mut self) {
        if self.is_blocked_by_dialog() {
            return;
        }
        if !self.session.start() {
            log::debug!("Ignoring start in phase {:?}", self.session.get_phase());
            return;
        }
        self.log_phase();
        self.show();
    }

    pub fn end(&mut self) {
        if self.is_blocked_by_dialog() {
            return;
        }
        if !self.session.end() {
            log::debug!("Ignoring end in phase {:?}", self.session.get_phase());
            return;
        }
        self.log_phase();
        self.show();
    }

    /// Asks for confirmation before opening the option at `index` in the full option list.
    pub fn select_option(&mut self, index: usize) {
        if self.is_blocked_by_dialog() {
            return;
        }
        let text = match self.session.select(index) {
            Some(option) => option.text.clone(),
            None => {
                log::debug!("Option {} cannot be selected", index);
                return;
            }
        };
        self.dialog = Some(Dialog::Selection);
        self.output.say(&Message::ConfirmSelection(text));
    }

    /// Same as `select_option`, addressing the option by its 1-based board position.
    pub fn select_position(&mut self, position: usize) {
        if self.is_blocked_by_dialog() {
            return;
        }
        match self.session.option_index_at(position) {
            Some(index) => self.select_option(index),
            None => log::debug!("No option at board position {}", position),
        }
    }

    pub fn confirm_selection(&mut self) {
        if self.dialog != Some(Dialog::Selection) {
            return;
        }
        self.dialog = None;
        if let Some(verdict) = self.session.confirm_selection() {
            log::info!("Option revealed: {:?}", verdict);
            self.popup = Some(Popup::new(verdict, self.settings.popup_duration));
            self.show();
        }
    }

    pub fn cancel_selection(&mut self) {
        if self.dialog != Some(Dialog::Selection) {
            return;
        }
        self.dialog = None;
        self.session.cancel_selection();
    }

    pub fn request_clear(&mut self) {
        if self.is_blocked_by_dialog() {
            return;
        }
        if !self.session.can_clear() {
            log::debug!("Ignoring clear while the game is running");
            return;
        }
        self.dialog = Some(Dialog::Clear);
        self.output.say(&Message::ConfirmClear);
    }

    pub fn confirm_clear(&mut self) {
        if self.dialog != Some(Dialog::Clear) {
            return;
        }
        self.dialog = None;
        self.session = Session::default();
        self.grid = GridDimensions::default();
        self.log_phase();
        self.show();
    }

    pub fn cancel_clear(&mut self) {
        if self.dialog == Some(Dialog::Clear) {
            self.dialog = None;
        }
    }

    /// Answers whichever dialog is open.
    pub fn answer(&mut self, confirmed: bool) {
        match (self.dialog, confirmed) {
            (Some(Dialog::Selection), true) => self.confirm_selection(),
            (Some(Dialog::Selection), false) => self.cancel_selection(),
            (Some(Dialog::Clear), true) => self.confirm_clear(),
            (Some(Dialog::Clear), false) => self.cancel_clear(),
            (None, _) => log::debug!("No dialog to answer"),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        let expired = match &mut self.popup {
            Some(popup) => {
                popup.on_tick(dt);
                popup.is_over()
            }
            None => false,
        };
        if expired {
            self.popup = None;
            self.show();
        }
    }
}
