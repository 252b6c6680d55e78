use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub nav_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

/// Rows taken by everything except the content list's inner area:
/// nav bar, status bar and the content block's two borders.
const CHROME_HEIGHT: u16 = 4;

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Nav bar
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        nav_bar: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

/// Number of content rows visible in a terminal `height` rows tall.
pub fn content_height(height: u16) -> usize {
    height.saturating_sub(CHROME_HEIGHT).max(1) as usize
}
