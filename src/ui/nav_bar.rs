use crate::ui::theme::Theme;
use crate::view::compose::NavBar;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HINTS: &[(&str, &str)] = &[("w", "Works"), ("t", "Types"), ("l", "License")];

pub fn render(frame: &mut Frame, area: Rect, nav: &NavBar) {
    let hint_spans: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {} ", key), Theme::key_hint()),
                Span::styled(format!(" {} ", label), Theme::bar()),
            ]
        })
        .collect();
    let hints_width: usize = hint_spans.iter().map(|s| s.content.width()).sum();

    let title_room = (area.width as usize).saturating_sub(hints_width + 2);
    let title = truncate(&nav.title, title_room);
    let padding = title_room.saturating_sub(title.width());

    let mut parts = vec![
        Span::styled(" ", Theme::bar()),
        Span::styled(title, Theme::title().bg(Theme::BG_ELEVATED)),
        Span::styled(" ".repeat(padding + 1), Theme::bar()),
    ];
    parts.extend(hint_spans);

    frame.render_widget(Paragraph::new(Line::from(parts)).style(Theme::bar()), area);
}

/// Cut `text` to at most `max_width` columns, ending with `…` when shortened.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Iliad", 10), "Iliad");
        assert_eq!(truncate("Word Instance: μῆνιν", 8), "Word In…");
        assert_eq!(truncate("Iliad", 0), "");
    }
}
