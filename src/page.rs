//! Page host abstraction.
//!
//! The only thing a sketch run tells its host page is the title. Putting that
//! behind a trait keeps the dispatcher free of terminal details and lets tests
//! observe title changes without a terminal.

use crossterm::{execute, terminal::SetTitle};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Receiver for page title updates.
pub trait Page: Send {
    /// Sets the page title shown by the host.
    fn set_title(&mut self, title: &str);
}

/// Page backed by the real terminal: title updates are sent to the terminal
/// emulator as an escape sequence.
#[derive(Debug, Default)]
pub struct TerminalPage;

impl TerminalPage {
    pub fn new() -> Self {
        Self
    }
}

impl Page for TerminalPage {
    fn set_title(&mut self, title: &str) {
        // A terminal that rejects the escape sequence must not abort an
        // otherwise valid dispatch.
        if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
            warn!("Failed to set terminal title: {}", e);
        }
    }
}

/// Page for tests and plain-output runs: records every title instead of
/// touching the terminal. Clones share the recorded list, so a test can keep
/// one handle while the dispatcher owns the other.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    titles: Arc<Mutex<Vec<String>>>,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// All titles set so far, in order.
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    /// The most recently set title, if any.
    pub fn last_title(&self) -> Option<String> {
        self.titles.lock().unwrap().last().cloned()
    }
}

impl Page for HeadlessPage {
    fn set_title(&mut self, title: &str) {
        self.titles.lock().unwrap().push(title.to_string());
    }
}
