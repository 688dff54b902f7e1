use std::time::Duration;

use crate::game::session::Verdict;

#[cfg(test)]
mod tests;

/// Transient result message shown after an option is opened.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Popup {
    verdict: Verdict,
    time_elapsed: Duration,
    time_to_show: Duration,
}

impl Popup {
    pub fn new(verdict: Verdict, duration: Duration) -> Self {
        Popup {
            verdict,
            time_elapsed: Duration::default(),
            time_to_show: duration,
        }
    }

    pub fn get_verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn on_tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    pub fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_to_show
    }
}
