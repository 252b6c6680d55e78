//! Content rows for each view and the scrolling list that draws them.
//!
//! Rows are computed from the content descriptor on every frame; the handler
//! computes the same rows to resolve what the selected row links to.

use crate::app::action::Action;
use crate::app::state::AppState;
use crate::corpus::model::Instance;
use crate::ui::theme::Theme;
use crate::view::label::label_number;
use crate::view::show_all::ShowItems;
use crate::view::*;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

const LICENSE_TEXT: &[&str] = &[
    "Corpus texts, annotations and this browser are distributed under the",
    "terms set by their respective publishers. The Greek source texts are in",
    "the public domain; annotations remain the work of their contributors and",
    "must be attributed when reused.",
    "",
    "This software is provided \"as is\", without warranty of any kind.",
];

/// What following a row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Location(String),
    Action(Action),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Heading,
    Text,
    Link,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub text: String,
    pub detail: Option<String>,
    pub kind: RowKind,
    /// Followed with Enter.
    pub target: Option<Target>,
    /// Followed with `i`.
    pub alt_target: Option<Target>,
}

impl Row {
    fn heading(text: impl Into<String>) -> Self {
        Self::plain(text, RowKind::Heading)
    }

    fn text(text: impl Into<String>) -> Self {
        Self::plain(text, RowKind::Text)
    }

    fn muted(text: impl Into<String>) -> Self {
        Self::plain(text, RowKind::Muted)
    }

    fn plain(text: impl Into<String>, kind: RowKind) -> Self {
        Self {
            text: text.into(),
            detail: None,
            kind,
            target: None,
            alt_target: None,
        }
    }

    fn link(text: impl Into<String>, url: String) -> Self {
        Self {
            text: text.into(),
            detail: None,
            kind: RowKind::Link,
            target: Some(Target::Location(url)),
            alt_target: None,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn with_alt(mut self, url: String) -> Self {
        self.alt_target = Some(Target::Location(url));
        self
    }
}

pub fn rows(content: &Content) -> Vec<Row> {
    match content {
        Content::Empty => Vec::new(),
        Content::License => LICENSE_TEXT.iter().map(|line| Row::text(*line)).collect(),
        Content::WorkList(view) => work_list_rows(view),
        Content::TypeList(view) => type_list_rows(view),
        Content::Work(view) => work_rows(view),
        Content::Word(view) => word_rows(view),
        Content::ValueList(view) => value_list_rows(view),
        Content::InstanceList(view) => instance_list_rows(view),
    }
}

fn work_list_rows(view: &WorkListView) -> Vec<Row> {
    view.works
        .iter()
        .enumerate()
        .map(|(i, work)| {
            Row::link(work.title.clone(), (view.get_work_url)(i))
                .with_detail(label_number(work.word_infos.len(), "word", "words"))
        })
        .collect()
}

fn type_list_rows(view: &TypeListView) -> Vec<Row> {
    let mut rows = vec![Row::heading("Stages")];
    for (i, stage) in view.stages.iter().enumerate() {
        rows.push(Row::text(format!("{}. {}", i + 1, stage.title)));
    }
    rows.push(Row::heading("Types"));
    for (i, type_info) in view.types.iter().enumerate() {
        let stage = type_info
            .stage
            .and_then(|s| view.stages.get(s))
            .map(|s| format!(" · {}", s.title))
            .unwrap_or_default();
        rows.push(
            Row::link(type_info.title.clone(), (view.get_type_url)(i)).with_detail(format!(
                "{}{}",
                label_number(type_info.values.len(), "value", "values"),
                stage
            )),
        );
    }
    rows
}

fn work_rows(view: &WorkView) -> Vec<Row> {
    let surface = view.special_types.surface;
    let mut rows = Vec::new();
    if let Some(title) = view.lookup.type_title(surface) {
        rows.push(Row::link(
            format!("Words by {}", title),
            (view.get_value_list_url)(surface),
        ));
    }

    let info = view.show_items.info(view.work.words.len());
    for (i, word) in view.work.words.iter().enumerate().take(info.visible) {
        let value = word.first_value_of(surface);
        let text = value
            .and_then(|v| view.lookup.value_title(surface, v))
            .unwrap_or("?");
        let annotations: Vec<String> = word
            .annotations()
            .iter()
            .filter(|(t, _)| *t != surface)
            .filter_map(|(t, values)| {
                let value = values.first()?;
                Some(format!(
                    "{}: {}",
                    view.lookup.type_title(*t)?,
                    view.lookup.value_title(*t, *value)?
                ))
            })
            .collect();
        let mut row = Row::link(
            format!("{:>5}  {}", i + 1, text),
            (view.get_word_url)(view.work_index, i),
        )
        .with_detail(annotations.join("; "));
        if let Some(v) = value {
            row = row.with_alt((view.get_instance_list_url)(surface, v));
        }
        rows.push(row);
    }
    push_show_all(&mut rows, view.show_items, view.work.words.len());
    rows
}

fn word_rows(view: &WordView) -> Vec<Row> {
    let mut rows = vec![Row::muted(format!(
        "Work {} · word {}",
        view.work_index + 1,
        view.word_index + 1
    ))];

    let stage_of = |type_index: usize| {
        view.lookup
            .type_info(type_index)
            .and_then(|t| t.stage)
            .filter(|s| *s < view.stages.len())
    };

    let push_annotation = |rows: &mut Vec<Row>, type_index: usize, values: &[usize]| {
        let title = view.lookup.type_title(type_index).unwrap_or("?");
        rows.push(Row::link(title.to_string(), (view.get_value_list_url)(type_index)));
        for &value_index in values {
            let value = view.lookup.value_title(type_index, value_index).unwrap_or("?");
            rows.push(Row::link(
                format!("    {}", value),
                (view.get_instance_list_url)(type_index, value_index),
            ));
        }
    };

    for (s, stage) in view.stages.iter().enumerate() {
        let annotations: Vec<_> = view
            .word
            .annotations()
            .iter()
            .filter(|(t, _)| stage_of(*t) == Some(s))
            .collect();
        if annotations.is_empty() {
            continue;
        }
        rows.push(Row::heading(stage.title.clone()));
        for (t, values) in annotations {
            push_annotation(&mut rows, *t, values);
        }
    }

    let unstaged: Vec<_> = view
        .word
        .annotations()
        .iter()
        .filter(|(t, _)| stage_of(*t).is_none())
        .collect();
    if !unstaged.is_empty() {
        rows.push(Row::heading("Other"));
        for (t, values) in unstaged {
            push_annotation(&mut rows, *t, values);
        }
    }
    rows
}

fn value_list_rows(view: &ValueListView) -> Vec<Row> {
    let info = view.show_items.info(view.values.len());
    let mut rows: Vec<Row> = view
        .values
        .iter()
        .enumerate()
        .take(info.visible)
        .map(|(i, value)| {
            Row::link(value.t.clone(), (view.get_instance_list_url)(view.type_index, i))
                .with_detail(label_number(value.c, "instance", "instances"))
        })
        .collect();
    push_show_all(&mut rows, view.show_items, view.values.len());
    rows
}

fn instance_list_rows(view: &InstanceListView) -> Vec<Row> {
    let mut rows = Vec::new();
    let value_count = view
        .lookup
        .type_info(view.type_index)
        .map_or(0, |t| t.values.len());
    if view.value_index > 0 {
        let prev = view.value_index - 1;
        rows.push(value_nav_row("← ", view, prev));
    }
    if view.value_index + 1 < value_count {
        let next = view.value_index + 1;
        rows.push(value_nav_row("→ ", view, next));
    }

    let info = view.show_items.info(view.instances.len());
    for instance in view.instances.iter().take(info.visible) {
        rows.push(instance_row(view, instance));
    }
    push_show_all(&mut rows, view.show_items, view.instances.len());
    rows
}

fn value_nav_row(arrow: &str, view: &InstanceListView, value_index: usize) -> Row {
    let title = view
        .lookup
        .type_info(view.type_index)
        .and_then(|t| t.values.get(value_index))
        .map_or("?", |v| v.t.as_str());
    Row::link(
        format!("{}{}", arrow, title),
        (view.get_instance_list_url)(view.type_index, value_index),
    )
}

fn instance_row(view: &InstanceListView, instance: &Instance) -> Row {
    let work = view
        .lookup
        .work_info(instance.work_index)
        .map_or("?", |w| w.title.as_str());
    Row::link(
        work.to_string(),
        (view.get_word_url)(instance.work_index, instance.word_index),
    )
    .with_detail(format!("word {}", instance.word_index + 1))
}

fn push_show_all(rows: &mut Vec<Row>, show_items: ShowItems, total: usize) {
    let info = show_items.info(total);
    if info.loading {
        rows.push(Row::muted("Loading…"));
    } else if info.hidden > 0 {
        rows.push(Row {
            text: format!("Show all {} ({} more)", total, info.hidden),
            detail: None,
            kind: RowKind::Link,
            target: Some(Target::Action(Action::ShowAll)),
            alt_target: None,
        });
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, rows: &[Row]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if rows.is_empty() || inner.height == 0 {
        return;
    }

    let height = inner.height as usize;
    let start = state.scroll_offset.min(rows.len().saturating_sub(1));
    let end = (start + height).min(rows.len());

    let lines: Vec<Line> = rows[start..end]
        .iter()
        .enumerate()
        .map(|(offset, row)| row_line(row, start + offset == state.cursor))
        .collect();
    let list_area = Rect::new(inner.x, inner.y, inner.width.saturating_sub(1), inner.height);
    frame.render_widget(Paragraph::new(lines), list_area);

    if rows.len() > height {
        let scrollbar_area = Rect::new(
            inner.x + inner.width.saturating_sub(1),
            inner.y,
            1,
            inner.height,
        );
        let mut scrollbar_state =
            ScrollbarState::new(rows.len().saturating_sub(height)).position(start);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .thumb_style(Theme::scrollbar_thumb())
                .track_style(Theme::scrollbar_track()),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

fn row_line(row: &Row, selected: bool) -> Line<'_> {
    let style = match row.kind {
        RowKind::Heading => Theme::heading(),
        RowKind::Text => Theme::body_text(),
        RowKind::Link => Theme::link(),
        RowKind::Muted => Theme::muted(),
    };
    let style = if selected { Theme::selected() } else { style };

    let mut spans = vec![Span::styled(format!(" {}", row.text), style)];
    if let Some(detail) = row.detail.as_deref().filter(|d| !d.is_empty()) {
        spans.push(Span::styled(
            format!("  {}", detail),
            if selected { Theme::selected() } else { Theme::muted() },
        ));
    }
    Line::from(spans)
}

/// The standalone panel shown when a view cannot be built.
pub fn render_error(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        crate::view::compose::ERROR_TEXT,
        Theme::error_message(),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border())
            .style(Theme::panel_bg()),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{CorpusData, Ephemeral, Visual};
    use crate::corpus::model::fixtures;
    use crate::route::links::{instance_list_url, value_list_url, word_url, work_url};
    use crate::view::select::select;

    fn data() -> CorpusData {
        let mut data = CorpusData {
            index: Some(fixtures::index()),
            ..Default::default()
        };
        data.works.insert(0, fixtures::iliad());
        data.types.insert(1, fixtures::case_instances());
        data
    }

    fn rows_for(visual: Visual, data: &CorpusData, ephemeral: Ephemeral, limit: usize) -> Vec<Row> {
        rows(&select(&visual, data, &ephemeral, limit).unwrap().content)
    }

    fn targets(rows: &[Row]) -> Vec<Target> {
        rows.iter().filter_map(|r| r.target.clone()).collect()
    }

    #[test]
    fn test_work_list_rows_link_to_works() {
        let rows = rows_for(Visual::WorkList, &data(), Ephemeral::default(), 100);
        assert_eq!(
            targets(&rows),
            vec![Target::Location(work_url(0)), Target::Location(work_url(1))]
        );
        assert_eq!(rows[0].detail.as_deref(), Some("2 words"));
        assert_eq!(rows[1].detail.as_deref(), Some("1 word"));
    }

    #[test]
    fn test_work_rows_link_words_and_surface_occurrences() {
        let rows = rows_for(Visual::Work { work_index: 0 }, &data(), Ephemeral::default(), 100);
        assert_eq!(rows[0].target, Some(Target::Location(value_list_url(0))));
        assert_eq!(rows[1].target, Some(Target::Location(word_url(0, 0))));
        assert_eq!(rows[1].alt_target, Some(Target::Location(instance_list_url(0, 0))));
        assert_eq!(rows[1].detail.as_deref(), Some("Case: Accusative"));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_truncated_lists_offer_show_all() {
        let data = data();
        let rows = rows_for(Visual::Work { work_index: 0 }, &data, Ephemeral::default(), 1);
        assert_eq!(rows.last().unwrap().target, Some(Target::Action(Action::ShowAll)));

        let loading = Ephemeral { show_all_loading: true, show_all_items: false };
        let rows = rows_for(Visual::Work { work_index: 0 }, &data, loading, 1);
        assert_eq!(rows.last().unwrap().text, "Loading…");

        let expanded = Ephemeral { show_all_loading: false, show_all_items: true };
        let rows = rows_for(Visual::Work { work_index: 0 }, &data, expanded, 1);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_word_rows_group_by_stage() {
        let rows = rows_for(
            Visual::Word { work_index: 0, word_index: 0 },
            &data(),
            Ephemeral::default(),
            100,
        );
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Work 1 · word 1", "Tokens", "Surface", "    μῆνιν", "Morphology", "Case", "    Accusative"]
        );
        assert_eq!(rows[5].target, Some(Target::Location(value_list_url(1))));
        assert_eq!(rows[6].target, Some(Target::Location(instance_list_url(1, 0))));
    }

    #[test]
    fn test_instance_list_rows_navigate_values_and_words() {
        let rows = rows_for(
            Visual::InstanceList { type_index: 1, value_index: 0 },
            &data(),
            Ephemeral::default(),
            100,
        );
        assert_eq!(rows[0].text, "→ Nominative");
        assert_eq!(rows[1].text, "Iliad");
        assert_eq!(rows[1].target, Some(Target::Location(word_url(0, 0))));
        assert_eq!(rows[2].text, "Odyssey");
    }

    #[test]
    fn test_empty_content_has_no_rows() {
        assert!(rows(&Content::Empty).is_empty());
    }
}
