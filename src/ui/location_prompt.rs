use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(ref input) = state.prompt else {
        return;
    };

    let area = frame.area();

    // Centered single-line popup, 60% width, min 40 columns
    let popup_w = (area.width * 60 / 100)
        .max(40)
        .min(area.width.saturating_sub(2));
    let popup_h = 3.min(area.height);
    let popup_x = area.width.saturating_sub(popup_w) / 2;
    let popup_y = area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Go to location — Enter to open, Esc to cancel ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(input.text.as_str(), Theme::body_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    // Chevron "❯ " takes two columns
    let before_cursor = input.text[..input.cursor].width() as u16;
    let cursor_x = inner.x + 2 + before_cursor;
    frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
}
