use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const LOADING_TAG: &str = " loading ";
const KEYS: &str = " ↑↓ move  ⏎ open  i instances  a all  b/f history  : go  q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status_style = if state.status_message.is_some() {
        Theme::error_message().bg(Theme::BG_ELEVATED)
    } else {
        Theme::bar()
    };
    let status = format!(" {} ", state.status_line());

    let mut parts = Vec::new();
    if state.visual.is_loading() {
        parts.push(Span::styled(LOADING_TAG, Theme::key_hint()));
    }
    parts.push(Span::styled(status, status_style));

    // Key hints only when they fit beside the status text
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let width = area.width as usize;
    if used + KEYS.width() <= width {
        parts.push(Span::styled(
            " ".repeat(width - used - KEYS.width()),
            Theme::bar(),
        ));
        parts.push(Span::styled(KEYS, Theme::muted().bg(Theme::BG_ELEVATED)));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)).style(Theme::bar()), area);
}
