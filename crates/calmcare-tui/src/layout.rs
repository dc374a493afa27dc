//! Screen layout definitions for the TUI
//!
//! Portal pages get a sidebar on the left and a header above the content.
//! Public pages (landing, sign-in, sign-up) use the full width.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width in columns, borders included
pub const SIDEBAR_WIDTH: u16 = 26;

/// Header height: border + title + subtitle + border
pub const HEADER_HEIGHT: u16 = 4;

/// Below this width the sidebar is dropped so content stays readable
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 60;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub sidebar: Option<Rect>,
    pub header: Option<Rect>,
    pub content: Rect,
    /// One-line key hint bar at the bottom
    pub footer: Rect,
}

/// Split the screen for a page with or without the portal shell
pub fn create(area: Rect, with_shell: bool) -> ScreenAreas {
    let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    if !with_shell {
        return ScreenAreas {
            sidebar: None,
            header: None,
            content: body,
            footer,
        };
    }

    let (sidebar, main) = if body.width >= MIN_WIDTH_FOR_SIDEBAR {
        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .areas(body);
        (Some(sidebar), main)
    } else {
        (None, body)
    };

    let [header, content] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)]).areas(main);

    ScreenAreas {
        sidebar,
        header: Some(header),
        content,
        footer,
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
