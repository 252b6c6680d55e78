use crate::corpus::loader::LoadTarget;
use crate::corpus::model::{IndexData, TypeInstances, Work};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Corpus data arrived from the loader
    IndexLoaded(IndexData),
    WorkLoaded {
        work_index: usize,
        work: Work,
    },
    TypeLoaded {
        type_index: usize,
        instances: TypeInstances,
    },
    LoadFailed {
        target: LoadTarget,
        error: String,
    },

    /// Tick for UI refresh and deferred "show all" expansion
    Tick,
}
