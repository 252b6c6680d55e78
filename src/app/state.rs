use crate::corpus::model::{IndexData, TypeInstances, Work};
use std::collections::{HashMap, HashSet};

/// The screen currently shown, with exactly the indices that screen needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visual {
    License,
    LoadingIndex,
    LoadingWork { work_index: usize },
    LoadingType { type_index: usize },
    WorkList,
    TypeList,
    Work { work_index: usize },
    Word { work_index: usize, word_index: usize },
    ValueList { type_index: usize },
    InstanceList { type_index: usize, value_index: usize },
}

impl Visual {
    /// Name used for the `view` key of a location fragment.
    pub fn view_name(&self) -> &'static str {
        match self {
            Visual::License => "license",
            Visual::LoadingIndex => "loadingIndex",
            Visual::LoadingWork { .. } => "loadingWork",
            Visual::LoadingType { .. } => "loadingType",
            Visual::WorkList => "workList",
            Visual::TypeList => "typeList",
            Visual::Work { .. } => "work",
            Visual::Word { .. } => "word",
            Visual::ValueList { .. } => "valueList",
            Visual::InstanceList { .. } => "instanceList",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            Visual::LoadingIndex | Visual::LoadingWork { .. } | Visual::LoadingType { .. }
        )
    }
}

/// Corpus data fetched so far. Entries are added once and never evicted.
#[derive(Debug, Default)]
pub struct CorpusData {
    pub index: Option<IndexData>,
    pub works: HashMap<usize, Work>,
    pub types: HashMap<usize, TypeInstances>,
}

/// Transient UI flags, never part of the location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ephemeral {
    pub show_all_loading: bool,
    pub show_all_items: bool,
}

/// Back/forward list of visited locations.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    position: usize,
}

impl History {
    pub fn push(&mut self, location: String) {
        if self.entries.is_empty() {
            self.entries.push(location);
            self.position = 0;
            return;
        }
        if self.entries[self.position] == location {
            return;
        }
        self.entries.truncate(self.position + 1);
        self.entries.push(location);
        self.position = self.entries.len() - 1;
    }

    /// Overwrite the current entry, like `location.replace`.
    pub fn replace(&mut self, location: String) {
        match self.entries.get_mut(self.position) {
            Some(entry) => *entry = location,
            None => self.push(location),
        }
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.position == 0 || self.entries.is_empty() {
            return None;
        }
        self.position -= 1;
        self.entries.get(self.position).map(|s| s.as_str())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        self.entries.get(self.position).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Single-line editor for the location prompt.
#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

pub struct AppState {
    pub visual: Visual,
    pub data: CorpusData,
    pub ephemeral: Ephemeral,
    /// Current location fragment, e.g. `#view=work&workIndex=2`.
    pub location: String,
    pub history: History,
    /// Screen to show once the data behind a loading placeholder arrives.
    pub pending: Option<Visual>,
    pub index_requested: bool,
    pub requested_works: HashSet<usize>,
    pub requested_types: HashSet<usize>,
    /// Selected content row.
    pub cursor: usize,
    pub scroll_offset: usize,
    /// Content rows that fit on screen, updated on resize.
    pub viewport_height: usize,
    pub prompt: Option<InputState>,
    pub status_message: Option<String>,
    pub show_items_limit: usize,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(location: String, show_items_limit: usize) -> Self {
        let mut history = History::default();
        history.push(location.clone());
        Self {
            visual: Visual::LoadingIndex,
            data: CorpusData::default(),
            ephemeral: Ephemeral::default(),
            location,
            history,
            pending: None,
            index_requested: false,
            requested_works: HashSet::new(),
            requested_types: HashSet::new(),
            cursor: 0,
            scroll_offset: 0,
            viewport_height: 20,
            prompt: None,
            status_message: None,
            show_items_limit,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn set_visual(&mut self, visual: Visual) {
        if self.visual != visual {
            tracing::debug!(from = ?self.visual, to = ?visual, "visual changed");
        }
        self.visual = visual;
        self.dirty = true;
    }

    pub fn reset_scroll(&mut self) {
        self.cursor = 0;
        self.scroll_offset = 0;
        self.dirty = true;
    }

    /// Move the cursor to `row`, scrolling so it stays visible.
    pub fn select_row(&mut self, row: usize, row_count: usize) {
        self.cursor = row.min(row_count.saturating_sub(1));
        let height = self.viewport_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        match self.status_message {
            Some(ref msg) => msg.clone(),
            None => self.location.clone(),
        }
    }
}
