//! Link targets for every navigable screen.
//!
//! These are handed to views as plain function values so a view can build
//! links without knowing how locations are encoded.

use crate::app::action::{visual_for_action, Action};
use crate::route::codec::encode;

/// One-index link builder, e.g. [`work_url`].
pub type UrlFn = fn(usize) -> String;
/// Two-index link builder, e.g. [`word_url`].
pub type UrlFn2 = fn(usize, usize) -> String;

/// Location an action navigates to. `None` for actions that don't navigate.
pub fn url_for(action: &Action) -> Option<String> {
    visual_for_action(action).map(|visual| encode(&visual))
}

fn navigate(action: Action) -> String {
    url_for(&action).unwrap_or_default()
}

pub fn work_list_url() -> String {
    navigate(Action::ViewWorkList)
}

pub fn type_list_url() -> String {
    navigate(Action::ViewTypeList)
}

pub fn license_url() -> String {
    navigate(Action::ViewLicense)
}

pub fn work_url(work_index: usize) -> String {
    navigate(Action::ViewWork { work_index })
}

pub fn word_url(work_index: usize, word_index: usize) -> String {
    navigate(Action::ViewWord {
        work_index,
        word_index,
    })
}

pub fn value_list_url(type_index: usize) -> String {
    navigate(Action::ViewValueList { type_index })
}

pub fn instance_list_url(type_index: usize, value_index: usize) -> String {
    navigate(Action::ViewInstanceList {
        type_index,
        value_index,
    })
}
