use super::builders;
use super::lookup::Lookup;
use super::show_all::ShowItems;
use super::ViewInfo;
use crate::app::state::{CorpusData, Ephemeral, Visual};
use crate::corpus::model::IndexData;
use crate::route::links::{instance_list_url, value_list_url, word_url, work_url};
use thiserror::Error;

/// Data a screen needs is missing or out of range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("corpus index is not loaded")]
    IndexNotLoaded,
    #[error("no work {0}")]
    NoSuchWork(usize),
    #[error("work {0} is not loaded")]
    WorkNotLoaded(usize),
    #[error("work {work_index} has no word {word_index}")]
    NoSuchWord { work_index: usize, word_index: usize },
    #[error("no type {0}")]
    NoSuchType(usize),
    #[error("type {type_index} has no value {value_index}")]
    NoSuchValue { type_index: usize, value_index: usize },
    #[error("instances of type {0} are not loaded")]
    TypeNotLoaded(usize),
}

/// Pick and parametrize the view for `visual`.
pub fn select<'a>(
    visual: &Visual,
    data: &'a CorpusData,
    ephemeral: &Ephemeral,
    show_items_limit: usize,
) -> Result<ViewInfo<'a>, SelectError> {
    let show_items = ShowItems {
        limit: show_items_limit,
        loading: ephemeral.show_all_loading,
        expanded: ephemeral.show_all_items,
    };
    let index = data.index.as_ref();

    let info = match *visual {
        Visual::License => builders::license(),
        Visual::LoadingIndex => builders::loading_index(),
        Visual::LoadingWork { work_index } => builders::loading_work(
            index
                .and_then(|i| i.works.get(work_index))
                .map(|w| w.title.as_str()),
        ),
        Visual::LoadingType { type_index } => builders::loading_type(
            index
                .and_then(|i| i.types.get(type_index))
                .map(|t| t.title.as_str()),
        ),
        Visual::WorkList => builders::work_list(&loaded(index)?.works, work_url),
        Visual::TypeList => {
            let index = loaded(index)?;
            builders::type_list(&index.stages, &index.types, value_list_url)
        }
        Visual::Work { work_index } => {
            let index = loaded(index)?;
            let info = index
                .works
                .get(work_index)
                .ok_or(SelectError::NoSuchWork(work_index))?;
            let work = data
                .works
                .get(&work_index)
                .ok_or(SelectError::WorkNotLoaded(work_index))?;
            builders::work(
                &info.title,
                work_index,
                work,
                index.special,
                word_url,
                Lookup::new(index),
                value_list_url,
                instance_list_url,
                show_items,
            )
        }
        Visual::Word {
            work_index,
            word_index,
        } => {
            let index = loaded(index)?;
            let word = data
                .works
                .get(&work_index)
                .ok_or(SelectError::WorkNotLoaded(work_index))?
                .words
                .get(word_index)
                .ok_or(SelectError::NoSuchWord {
                    work_index,
                    word_index,
                })?;
            builders::word(
                work_index,
                word_index,
                word,
                index.special,
                &index.stages,
                Lookup::new(index),
                value_list_url,
                instance_list_url,
            )
        }
        Visual::ValueList { type_index } => {
            let index = loaded(index)?;
            let type_info = Lookup::new(index)
                .type_info(type_index)
                .ok_or(SelectError::NoSuchType(type_index))?;
            builders::value_list(
                &type_info.values,
                &type_info.title,
                type_index,
                instance_list_url,
                show_items,
            )
        }
        Visual::InstanceList {
            type_index,
            value_index,
        } => {
            let index = loaded(index)?;
            let lookup = Lookup::new(index);
            let missing_value = SelectError::NoSuchValue {
                type_index,
                value_index,
            };
            let type_title = lookup
                .type_title(type_index)
                .ok_or(SelectError::NoSuchType(type_index))?;
            let value_title = lookup
                .value_title(type_index, value_index)
                .ok_or_else(|| missing_value.clone())?;
            let instances = &data
                .types
                .get(&type_index)
                .ok_or(SelectError::TypeNotLoaded(type_index))?
                .values
                .get(value_index)
                .ok_or(missing_value)?
                .i;
            builders::instance_list(
                lookup,
                instances,
                type_index,
                value_index,
                type_title,
                value_title,
                word_url,
                instance_list_url,
                show_items,
            )
        }
    };
    Ok(info)
}

fn loaded(index: Option<&IndexData>) -> Result<&IndexData, SelectError> {
    index.ok_or(SelectError::IndexNotLoaded)
}
