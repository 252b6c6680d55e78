use crate::app::action::{visual_for_action, Action, Command};
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::corpus::loader::LoadTarget;
use crate::route::links::{license_url, type_list_url, work_list_url};
use crate::route::router::{on_hash_change, Routed};
use crate::ui::content::{rows, Row, Target};
use crate::view::compose::{compose, Page};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Command> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::IndexLoaded(index) => {
            tracing::info!(
                works = index.works.len(),
                types = index.types.len(),
                "corpus index loaded"
            );
            state.data.index = Some(index);
            state.status_message = None;
            route_location(state)
        }
        AppEvent::WorkLoaded { work_index, work } => {
            state.data.works.entry(work_index).or_insert(work);
            resolve_pending(state);
            vec![]
        }
        AppEvent::TypeLoaded {
            type_index,
            instances,
        } => {
            state.data.types.entry(type_index).or_insert(instances);
            resolve_pending(state);
            vec![]
        }
        AppEvent::LoadFailed { target, error } => {
            // Forget the request so navigating there again retries it
            match target {
                LoadTarget::Index => state.index_requested = false,
                LoadTarget::Work(i) => {
                    state.requested_works.remove(&i);
                }
                LoadTarget::Type(i) => {
                    state.requested_types.remove(&i);
                }
            }
            state.status_message = Some(format!("Failed to load {}: {}", target, error));
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    // Expansion is applied one tick after it was requested so the
    // loading marker gets drawn before the long list.
    if state.ephemeral.show_all_loading {
        state.ephemeral.show_all_loading = false;
        state.ephemeral.show_all_items = true;
        state.dirty = true;
    }
}

/// Set a new location, as following a link does.
pub fn navigate(state: &mut AppState, location: String) -> Vec<Command> {
    state.status_message = None;
    state.history.push(location.clone());
    tracing::debug!(location = %location, depth = state.history.len(), "navigate");
    state.location = location;
    route_location(state)
}

/// Typed location text as a fragment, with the leading `#` optional.
pub fn normalize_location(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else if text.starts_with('#') {
        Some(text.to_string())
    } else {
        Some(format!("#{}", text))
    }
}

/// Route the current location. Unusable locations are replaced with the
/// work list.
pub fn route_location(state: &mut AppState) -> Vec<Command> {
    if state.data.index.is_none() {
        state.set_visual(Visual::LoadingIndex);
        if state.index_requested {
            return vec![];
        }
        state.index_requested = true;
        return vec![Command::FetchIndex];
    }

    loop {
        state.reset_scroll();
        match on_hash_change(&state.location) {
            Routed::Dispatch(action) => return apply_action(state, action),
            Routed::Reset(location) => {
                state.history.replace(location.clone());
                state.location = location;
            }
        }
    }
}

pub fn apply_action(state: &mut AppState, action: Action) -> Vec<Command> {
    if action == Action::ShowAll {
        if !state.ephemeral.show_all_items {
            state.ephemeral.show_all_loading = true;
            state.dirty = true;
        }
        return vec![];
    }

    let Some(target) = visual_for_action(&action) else {
        return vec![];
    };
    state.ephemeral = Ephemeral::default();

    match placeholder_for(&state.data, &target) {
        None => {
            state.pending = None;
            state.set_visual(target);
            vec![]
        }
        Some(placeholder) => {
            state.pending = Some(target);
            state.set_visual(placeholder);
            fetch_for(state, &placeholder)
        }
    }
}

/// Loading screen to show while `target`'s fetched data is absent.
fn placeholder_for(data: &CorpusData, target: &Visual) -> Option<Visual> {
    match *target {
        Visual::Work { work_index } | Visual::Word { work_index, .. }
            if !data.works.contains_key(&work_index) =>
        {
            Some(Visual::LoadingWork { work_index })
        }
        Visual::InstanceList { type_index, .. } if !data.types.contains_key(&type_index) => {
            Some(Visual::LoadingType { type_index })
        }
        _ => None,
    }
}

fn fetch_for(state: &mut AppState, placeholder: &Visual) -> Vec<Command> {
    match *placeholder {
        Visual::LoadingWork { work_index } if state.requested_works.insert(work_index) => {
            vec![Command::FetchWork(work_index)]
        }
        Visual::LoadingType { type_index } if state.requested_types.insert(type_index) => {
            vec![Command::FetchType(type_index)]
        }
        _ => vec![],
    }
}

/// Show the pending screen if its data is now present and the user is still
/// waiting on it. Loads finishing for screens left behind only fill the cache.
fn resolve_pending(state: &mut AppState) {
    let Some(target) = state.pending else {
        return;
    };
    if placeholder_for(&state.data, &target).is_some() {
        return;
    }
    let waiting = match (state.visual, target) {
        (
            Visual::LoadingWork { work_index },
            Visual::Work { work_index: w } | Visual::Word { work_index: w, .. },
        ) => work_index == w,
        (Visual::LoadingType { type_index }, Visual::InstanceList { type_index: t, .. }) => {
            type_index == t
        }
        _ => false,
    };
    if waiting {
        state.pending = None;
        state.set_visual(target);
    }
}

/// Rows of the screen as currently drawn.
pub fn current_rows(state: &AppState) -> Vec<Row> {
    match compose(state) {
        Page::View { content, .. } => rows(&content),
        Page::Error => Vec::new(),
    }
}

fn follow(state: &mut AppState, target: Option<Target>) -> Vec<Command> {
    match target {
        Some(Target::Location(location)) => navigate(state, location),
        Some(Target::Action(action)) => apply_action(state, action),
        None => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Command> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, height) => {
            state.viewport_height = crate::ui::layout::content_height(height);
            let row_count = current_rows(state).len();
            state.select_row(state.cursor, row_count);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Command::Quit];
    }

    // Location prompt captures all input when open
    if state.prompt.is_some() {
        return handle_prompt_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') => vec![Command::Quit],
        KeyCode::Char('w') => navigate(state, work_list_url()),
        KeyCode::Char('t') => navigate(state, type_list_url()),
        KeyCode::Char('l') => navigate(state, license_url()),
        KeyCode::Char('a') => apply_action(state, Action::ShowAll),
        KeyCode::Char(':') | KeyCode::Char('g') => {
            state.prompt = Some(InputState::with_text(&state.location));
            vec![]
        }
        KeyCode::Backspace | KeyCode::Char('b') => {
            match state.history.back().map(str::to_string) {
                Some(location) => {
                    state.location = location;
                    route_location(state)
                }
                None => vec![],
            }
        }
        KeyCode::Char('f') => match state.history.forward().map(str::to_string) {
            Some(location) => {
                state.location = location;
                route_location(state)
            }
            None => vec![],
        },
        KeyCode::Enter => {
            let target = current_rows(state)
                .into_iter()
                .nth(state.cursor)
                .and_then(|row| row.target);
            follow(state, target)
        }
        KeyCode::Char('i') => {
            let target = current_rows(state)
                .into_iter()
                .nth(state.cursor)
                .and_then(|row| row.alt_target);
            follow(state, target)
        }
        KeyCode::Up | KeyCode::Char('k') => move_cursor(state, |cursor, _| cursor.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(state, |cursor, _| cursor + 1),
        KeyCode::PageUp => move_cursor(state, |cursor, page| cursor.saturating_sub(page)),
        KeyCode::PageDown => move_cursor(state, |cursor, page| cursor + page),
        KeyCode::Home => move_cursor(state, |_, _| 0),
        KeyCode::End => move_cursor(state, |_, _| usize::MAX),
        _ => vec![],
    }
}

fn move_cursor(state: &mut AppState, to: impl Fn(usize, usize) -> usize) -> Vec<Command> {
    let row_count = current_rows(state).len();
    let row = to(state.cursor, state.viewport_height.max(1));
    state.select_row(row, row_count);
    vec![]
}

fn handle_prompt_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    let Some(input) = state.prompt.as_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Esc => {
            state.prompt = None;
            vec![]
        }
        KeyCode::Enter => {
            let location = normalize_location(&input.text);
            state.prompt = None;
            match location {
                Some(location) => navigate(state, location),
                None => vec![],
            }
        }
        KeyCode::Char(c) => {
            input.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            input.move_left();
            vec![]
        }
        KeyCode::Right => {
            input.move_right();
            vec![]
        }
        KeyCode::Home => {
            input.move_home();
            vec![]
        }
        KeyCode::End => {
            input.move_end();
            vec![]
        }
        _ => vec![],
    }
}
