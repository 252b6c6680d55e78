//! Navigation actions and their correspondence with [`Visual`] states.
//!
//! Actions are inert descriptors: building one has no effect until it is
//! handed to [`crate::app::handler::apply_action`]. Loop-level side effects
//! produced by applying them are [`Command`]s.

use crate::app::state::Visual;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewWorkList,
    ViewTypeList,
    ViewWork { work_index: usize },
    ViewWord { work_index: usize, word_index: usize },
    ViewValueList { type_index: usize },
    ViewInstanceList { type_index: usize, value_index: usize },
    ViewLicense,
    /// Load the work if needed, then show it.
    FetchViewWork { work_index: usize },
    /// Expand truncated lists in the current view.
    ShowAll,
}

/// Side effects requested by the handler and executed by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchIndex,
    FetchWork(usize),
    FetchType(usize),
    Quit,
}

/// The screen an action leads to, ignoring whether its data is loaded yet.
pub fn visual_for_action(action: &Action) -> Option<Visual> {
    match *action {
        Action::ViewWorkList => Some(Visual::WorkList),
        Action::ViewTypeList => Some(Visual::TypeList),
        Action::ViewLicense => Some(Visual::License),
        Action::ViewWork { work_index } | Action::FetchViewWork { work_index } => {
            Some(Visual::Work { work_index })
        }
        Action::ViewWord {
            work_index,
            word_index,
        } => Some(Visual::Word {
            work_index,
            word_index,
        }),
        Action::ViewValueList { type_index } => Some(Visual::ValueList { type_index }),
        Action::ViewInstanceList {
            type_index,
            value_index,
        } => Some(Visual::InstanceList {
            type_index,
            value_index,
        }),
        Action::ShowAll => None,
    }
}

/// The action that reproduces a screen. Loading placeholders are transient
/// and have none.
pub fn action_for_visual(visual: &Visual) -> Option<Action> {
    match *visual {
        Visual::License => Some(Action::ViewLicense),
        Visual::WorkList => Some(Action::ViewWorkList),
        Visual::TypeList => Some(Action::ViewTypeList),
        Visual::Work { work_index } => Some(Action::FetchViewWork { work_index }),
        Visual::Word {
            work_index,
            word_index,
        } => Some(Action::ViewWord {
            work_index,
            word_index,
        }),
        Visual::ValueList { type_index } => Some(Action::ViewValueList { type_index }),
        Visual::InstanceList {
            type_index,
            value_index,
        } => Some(Action::ViewInstanceList {
            type_index,
            value_index,
        }),
        Visual::LoadingIndex | Visual::LoadingWork { .. } | Visual::LoadingType { .. } => None,
    }
}
