use super::select::select;
use super::Content;
use crate::app::state::AppState;
use crate::route::links::{license_url, type_list_url, work_list_url};

pub const ERROR_TEXT: &str = "Whoopsie! Something went wrong.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub title: String,
    pub work_list_url: String,
    pub type_list_url: String,
    pub license_url: String,
}

/// A whole screen: nav bar plus content, or the standalone error panel.
#[derive(Debug)]
pub enum Page<'a> {
    Error,
    View { nav: NavBar, content: Content<'a> },
}

pub fn compose(state: &AppState) -> Page<'_> {
    match select(
        &state.visual,
        &state.data,
        &state.ephemeral,
        state.show_items_limit,
    ) {
        Ok(info) => Page::View {
            nav: NavBar {
                title: info.nav_title,
                work_list_url: work_list_url(),
                type_list_url: type_list_url(),
                license_url: license_url(),
            },
            content: info.content,
        },
        Err(e) => {
            tracing::error!(visual = ?state.visual, error = %e, "cannot show view");
            Page::Error
        }
    }
}
