//! Test utilities for rendering checks
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can assert
//! on buffer text without a real terminal.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(StatCard::new(&metric), term.area());
//! assert!(term.buffer_contains("Heart Rate"));
//! ```

use calmcare_app::config::Settings;
use calmcare_app::AppState;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Default test terminal size
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 40;

/// Narrow terminal for layouts that drop the sidebar
pub const COMPACT_WIDTH: u16 = 50;
pub const COMPACT_HEIGHT: u16 = 20;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Index of the first line containing `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|&y| line_content(buffer, y).contains(text))
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Whole buffer as text, one line per row
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// State opened at `path` on the bundled demo data
pub fn state_at(path: &str) -> AppState {
    let mut settings = Settings::default();
    settings.behavior.start_route = path.to_string();
    AppState::new(settings)
}
