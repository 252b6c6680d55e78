//! One builder per screen. Each takes exactly what its content needs and
//! formats the nav title.

use super::label::label_number;
use super::lookup::Lookup;
use super::show_all::ShowItems;
use super::*;

pub const LOADING_TEXT: &str = "Loading…";

fn loading_item_text(item: &str) -> String {
    format!("Loading {} …", item)
}

pub fn license<'a>() -> ViewInfo<'a> {
    ViewInfo {
        nav_title: "License".to_string(),
        content: Content::License,
    }
}

pub fn loading_index<'a>() -> ViewInfo<'a> {
    ViewInfo {
        nav_title: LOADING_TEXT.to_string(),
        content: Content::Empty,
    }
}

/// `title` is known once the index has loaded.
pub fn loading_work<'a>(title: Option<&str>) -> ViewInfo<'a> {
    ViewInfo {
        nav_title: title.map_or_else(|| LOADING_TEXT.to_string(), loading_item_text),
        content: Content::Empty,
    }
}

pub fn loading_type<'a>(title: Option<&str>) -> ViewInfo<'a> {
    ViewInfo {
        nav_title: title.map_or_else(|| LOADING_TEXT.to_string(), loading_item_text),
        content: Content::Empty,
    }
}

pub fn work_list(works: &[WorkInfo], get_work_url: UrlFn) -> ViewInfo<'_> {
    let word_count: usize = works.iter().map(|w| w.word_infos.len()).sum();
    ViewInfo {
        nav_title: format!(
            "{}, {}",
            label_number(works.len(), "Greek Work", "Greek Works"),
            label_number(word_count, "Word", "Words")
        ),
        content: Content::WorkList(WorkListView {
            works,
            get_work_url,
        }),
    }
}

pub fn type_list<'a>(
    stages: &'a [StageInfo],
    types: &'a [TypeInfo],
    get_type_url: UrlFn,
) -> ViewInfo<'a> {
    ViewInfo {
        nav_title: format!(
            "{}, {}",
            label_number(stages.len(), "Stage", "Stages"),
            label_number(types.len(), "Type", "Types")
        ),
        content: Content::TypeList(TypeListView {
            stages,
            types,
            get_type_url,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn work<'a>(
    work_title: &str,
    work_index: usize,
    work: &'a Work,
    special_types: SpecialTypes,
    get_word_url: UrlFn2,
    lookup: Lookup<'a>,
    get_value_list_url: UrlFn,
    get_instance_list_url: UrlFn2,
    show_items: ShowItems,
) -> ViewInfo<'a> {
    ViewInfo {
        nav_title: work_title.to_string(),
        content: Content::Work(WorkView {
            work_index,
            work,
            special_types,
            get_word_url,
            lookup,
            get_value_list_url,
            get_instance_list_url,
            show_items,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn word<'a>(
    work_index: usize,
    word_index: usize,
    word: &'a Word,
    special_types: SpecialTypes,
    stages: &'a [StageInfo],
    lookup: Lookup<'a>,
    get_value_list_url: UrlFn,
    get_instance_list_url: UrlFn2,
) -> ViewInfo<'a> {
    let word_text = word
        .first_value_of(special_types.surface)
        .and_then(|value_index| lookup.value_title(special_types.surface, value_index))
        .unwrap_or("Unknown");
    ViewInfo {
        nav_title: format!("Word Instance: {}", word_text),
        content: Content::Word(WordView {
            work_index,
            word_index,
            word,
            stages,
            lookup,
            get_value_list_url,
            get_instance_list_url,
        }),
    }
}

pub fn value_list<'a>(
    values: &'a [ValueInfo],
    type_title: &str,
    type_index: usize,
    get_instance_list_url: UrlFn2,
    show_items: ShowItems,
) -> ViewInfo<'a> {
    ViewInfo {
        nav_title: format!(
            "{}, {}",
            type_title,
            label_number(values.len(), "Value", "Values")
        ),
        content: Content::ValueList(ValueListView {
            values,
            type_index,
            get_instance_list_url,
            show_items,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn instance_list<'a>(
    lookup: Lookup<'a>,
    instances: &'a [Instance],
    type_index: usize,
    value_index: usize,
    type_title: &str,
    value_title: &str,
    get_word_url: UrlFn2,
    get_instance_list_url: UrlFn2,
    show_items: ShowItems,
) -> ViewInfo<'a> {
    ViewInfo {
        nav_title: format!(
            "{}, {}, {}",
            type_title,
            value_title,
            label_number(instances.len(), "Instance", "Instances")
        ),
        content: Content::InstanceList(InstanceListView {
            lookup,
            type_index,
            value_index,
            instances,
            get_word_url,
            get_instance_list_url,
            show_items,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::model::fixtures;
    use crate::route::links::{instance_list_url, value_list_url, word_url, work_url};

    #[test]
    fn test_work_list_title_counts_word_infos() {
        let works = vec![
            WorkInfo {
                title: "a".into(),
                word_infos: vec![serde_json::json!(0), serde_json::json!(1)],
            },
            WorkInfo {
                title: "b".into(),
                word_infos: vec![serde_json::json!(2)],
            },
        ];
        assert_eq!(work_list(&works, work_url).nav_title, "2 Greek Works, 3 Words");
        assert_eq!(work_list(&works[..1], work_url).nav_title, "1 Greek Work, 2 Words");
    }

    #[test]
    fn test_loading_titles() {
        assert_eq!(loading_work(None).nav_title, "Loading…");
        assert_eq!(loading_work(Some("Iliad")).nav_title, "Loading Iliad …");
        assert_eq!(loading_type(Some("Case")).nav_title, "Loading Case …");
        assert!(matches!(loading_index().content, Content::Empty));
    }

    #[test]
    fn test_word_without_surface_is_unknown() {
        let index = fixtures::index();
        let annotated = Word(vec![(1, vec![0])]);
        let info = word(
            0,
            0,
            &annotated,
            index.special,
            &index.stages,
            Lookup::new(&index),
            value_list_url,
            instance_list_url,
        );
        assert_eq!(info.nav_title, "Word Instance: Unknown");
    }

    #[test]
    fn test_word_title_uses_surface_value() {
        let index = fixtures::index();
        let work = fixtures::iliad();
        let info = word(
            0,
            1,
            &work.words[1],
            index.special,
            &index.stages,
            Lookup::new(&index),
            value_list_url,
            instance_list_url,
        );
        assert_eq!(info.nav_title, "Word Instance: ἄειδε");
    }

    #[test]
    fn test_instance_list_title() {
        let index = fixtures::index();
        let instances = fixtures::case_instances();
        let show_items = ShowItems { limit: 100, loading: false, expanded: false };
        let info = instance_list(
            Lookup::new(&index),
            &instances.values[0].i,
            1,
            0,
            "Case",
            "Accusative",
            word_url,
            instance_list_url,
            show_items,
        );
        assert_eq!(info.nav_title, "Case, Accusative, 2 Instances");
    }
}
