use std::rc::Rc;

use animal_farm::action::{self, Action};
use animal_farm::duty::{self, Duty};
use animal_farm::{Animal, Farm, FarmError};

const MAX_LOG: usize = 200;

/// How a log line should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Info,
    Refusal,
    Error,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub text: String,
    pub kind: EntryKind,
}

/// Application state
pub struct App {
    pub farm: Farm,
    pub cursor_position: usize,
    pub scroll_offset: usize,
    pub height: usize,
    pub log: Vec<LogEntry>,

    actions: Vec<Rc<dyn Action>>,
    duties: Vec<Rc<dyn Duty>>,
}

impl App {
    /// Create a new app driving the given farm
    pub fn new(farm: Farm) -> Self {
        let mut app = Self {
            farm,
            cursor_position: 0,
            scroll_offset: 0,
            height: 0,
            log: Vec::new(),
            actions: action::catalog(),
            duties: duty::catalog(),
        };
        let welcome = format!("Welcome to {}!", app.farm.name);
        app.push(welcome, EntryKind::Info);
        app
    }

    /// The animal under the cursor
    pub fn selected(&self) -> Option<&Animal> {
        self.farm.animals.get(self.cursor_position)
    }

    fn selected_mut(&mut self) -> Option<&mut Animal> {
        self.farm.animals.get_mut(self.cursor_position)
    }

    /// Move cursor to the next animal
    pub fn next(&mut self) {
        if self.cursor_position + 1 < self.farm.len() {
            self.cursor_position += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor to the previous animal
    pub fn previous(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.adjust_scroll();
        }
    }

    pub fn perform_action(&mut self) {
        let Some(animal) = self.selected() else { return };
        let result = animal.perform_action();
        self.record(result, EntryKind::Info);
    }

    pub fn perform_duty(&mut self) {
        let Some(animal) = self.selected() else { return };
        let kind = if animal.is_hungry() || animal.is_sleepy() {
            EntryKind::Refusal
        } else {
            EntryKind::Info
        };
        let result = animal.perform_duty();
        self.record(result, kind);
    }

    pub fn eat(&mut self) {
        if let Some(said) = self.selected_mut().map(Animal::eat) {
            self.push(said, EntryKind::Info);
        }
    }

    pub fn sleep(&mut self) {
        if let Some(said) = self.selected_mut().map(Animal::sleep) {
            self.push(said, EntryKind::Info);
        }
    }

    pub fn make_hungry(&mut self) {
        if let Some(animal) = self.selected_mut() {
            animal.make_hungry();
            let text = format!("{} is getting hungry...", animal.name());
            self.push(text, EntryKind::Info);
        }
    }

    pub fn make_sleepy(&mut self) {
        if let Some(animal) = self.selected_mut() {
            animal.make_sleepy();
            let text = format!("{} is getting sleepy...", animal.name());
            self.push(text, EntryKind::Info);
        }
    }

    /// Give the selected animal the catalog action after its current one
    pub fn cycle_action(&mut self) {
        let current = self
            .selected()
            .and_then(|a| a.action())
            .map(|a| a.name().to_string());
        let index = next_index(current.as_deref(), self.actions.iter().map(|a| a.name()));
        let Some(action) = index.and_then(|i| self.actions.get(i)).cloned() else { return };

        if let Some(animal) = self.selected_mut() {
            animal.set_action(Rc::clone(&action));
            let text = format!("{} now does: {}", animal.name(), action.name());
            self.push(text, EntryKind::Info);
        }
    }

    /// Give the selected animal the catalog duty after its current one
    pub fn cycle_duty(&mut self) {
        let current = self
            .selected()
            .and_then(|a| a.duty())
            .map(|d| d.name().to_string());
        let index = next_index(current.as_deref(), self.duties.iter().map(|d| d.name()));
        let Some(duty) = index.and_then(|i| self.duties.get(i)).cloned() else { return };

        if let Some(animal) = self.selected_mut() {
            animal.set_duty(Rc::clone(&duty));
            let text = format!("{} is now on duty: {}", animal.name(), duty.name());
            self.push(text, EntryKind::Info);
        }
    }

    fn record(&mut self, result: Result<String, FarmError>, kind: EntryKind) {
        match result {
            Ok(text) => self.push(text, kind),
            Err(err) => self.push(err.to_string(), EntryKind::Error),
        }
    }

    fn push(&mut self, text: String, kind: EntryKind) {
        self.log.push(LogEntry { text, kind });
        if self.log.len() > MAX_LOG {
            let excess = self.log.len() - MAX_LOG;
            self.log.drain(..excess);
        }
    }

    /// Adjust scroll to keep cursor in view
    fn adjust_scroll(&mut self) {
        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
        } else if self.height > 0 && self.cursor_position >= self.scroll_offset + self.height {
            self.scroll_offset = self.cursor_position - self.height + 1;
        }
    }

    /// Set the UI height for scrolling calculations
    pub fn set_ui_height(&mut self, height: usize) {
        self.height = height;
        self.adjust_scroll();
    }
}

// Index following `current` in `names`, wrapping; the first entry when unset or unknown
fn next_index<'a>(current: Option<&str>, names: impl Iterator<Item = &'a str>) -> Option<usize> {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        return None;
    }
    let next = current
        .and_then(|c| names.iter().position(|n| *n == c))
        .map(|i| (i + 1) % names.len())
        .unwrap_or(0);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last(app: &App) -> &LogEntry {
        app.log.last().unwrap()
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut app = App::new(Farm::sunny_meadows());
        app.previous();
        assert_eq!(app.cursor_position, 0);
        for _ in 0..10 {
            app.next();
        }
        assert_eq!(app.cursor_position, 3);
        assert_eq!(app.selected().unwrap().name(), "Shep");
    }

    #[test]
    fn test_duty_refusal_is_logged_as_refusal() {
        let mut app = App::new(Farm::sunny_meadows());
        app.make_hungry();
        app.perform_duty();
        assert_eq!(last(&app).kind, EntryKind::Refusal);
        assert!(last(&app).text.contains("too hungry"));

        app.eat();
        app.perform_duty();
        assert_eq!(last(&app).kind, EntryKind::Info);
        assert!(last(&app).text.contains("laid an egg"));
    }

    #[test]
    fn test_cycle_action_wraps_through_catalog() {
        let mut app = App::new(Farm::sunny_meadows());
        app.next();
        app.next();
        // Rex barks; Chase Sheep comes next, then back to Fly.
        app.cycle_action();
        assert_eq!(app.selected().unwrap().action().unwrap().name(), "Chase Sheep");
        app.cycle_action();
        assert_eq!(app.selected().unwrap().action().unwrap().name(), "Fly");
        assert_eq!(app.selected().unwrap().duty().unwrap().name(), "Guard");
    }

    #[test]
    fn test_cycle_duty_assigns_when_missing() {
        let farm = Farm::new("Empty Acres", vec![Animal::dog("Stray", None, None)]);
        let mut app = App::new(farm);
        app.perform_duty();
        assert_eq!(last(&app).kind, EntryKind::Error);
        assert!(last(&app).text.contains("Stray has no duty"));

        app.cycle_duty();
        assert_eq!(app.selected().unwrap().duty().unwrap().name(), "Guard");
    }

    #[test]
    fn test_log_is_bounded() {
        let mut app = App::new(Farm::sunny_meadows());
        for _ in 0..(MAX_LOG + 50) {
            app.perform_action();
        }
        assert_eq!(app.log.len(), MAX_LOG);
    }
}
