pub mod content;
pub mod layout;
mod location_prompt;
mod nav_bar;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::view::compose::{compose, Page};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    match compose(state) {
        Page::Error => content::render_error(frame, area),
        Page::View { nav, content } => {
            let app_layout = layout::compute_layout(area);
            let rows = content::rows(&content);

            nav_bar::render(frame, app_layout.nav_bar, &nav);
            content::render(frame, app_layout.content, state, &rows);
            status_bar::render(frame, app_layout.status_bar, state);
        }
    }

    location_prompt::render(frame, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{InputState, Visual};
    use crate::corpus::model::fixtures;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_work_list() {
        let mut state = AppState::new("#view=workList".into(), 100);
        state.data.index = Some(fixtures::index());
        state.visual = Visual::WorkList;

        let text = screen_text(&state);
        assert!(text.contains("2 Greek Works, 3 Words"));
        assert!(text.contains("Iliad"));
        assert!(text.contains("Odyssey"));
        assert!(text.contains("#view=workList"));
    }

    #[test]
    fn test_draws_error_page() {
        let mut state = AppState::new(String::new(), 100);
        state.visual = Visual::Work { work_index: 3 };

        assert!(screen_text(&state).contains("Whoopsie! Something went wrong."));
    }

    #[test]
    fn test_draws_prompt_over_view() {
        let mut state = AppState::new(String::new(), 100);
        state.prompt = Some(InputState::with_text("#view=typeList"));

        let text = screen_text(&state);
        assert!(text.contains("Go to location"));
        assert!(text.contains("#view=typeList"));
    }
}
