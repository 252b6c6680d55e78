//! View selection: from the current [`Visual`](crate::app::state::Visual)
//! and loaded data to a nav title plus a content descriptor for the UI.
//!
//! Content descriptors hold borrowed data and the link builders a view
//! needs. They never fetch or mutate anything.

pub mod builders;
pub mod compose;
pub mod label;
pub mod lookup;
pub mod select;
pub mod show_all;

use crate::corpus::model::{
    Instance, SpecialTypes, StageInfo, TypeInfo, ValueInfo, Work, WorkInfo, Word,
};
use crate::route::links::{UrlFn, UrlFn2};
use lookup::Lookup;
use show_all::ShowItems;

/// Title for the nav bar and the content below it.
#[derive(Debug)]
pub struct ViewInfo<'a> {
    pub nav_title: String,
    pub content: Content<'a>,
}

#[derive(Debug)]
pub enum Content<'a> {
    /// Placeholder while data loads.
    Empty,
    License,
    WorkList(WorkListView<'a>),
    TypeList(TypeListView<'a>),
    Work(WorkView<'a>),
    Word(WordView<'a>),
    ValueList(ValueListView<'a>),
    InstanceList(InstanceListView<'a>),
}

#[derive(Debug)]
pub struct WorkListView<'a> {
    pub works: &'a [WorkInfo],
    pub get_work_url: UrlFn,
}

#[derive(Debug)]
pub struct TypeListView<'a> {
    pub stages: &'a [StageInfo],
    pub types: &'a [TypeInfo],
    pub get_type_url: UrlFn,
}

#[derive(Debug)]
pub struct WorkView<'a> {
    pub work_index: usize,
    pub work: &'a Work,
    pub special_types: SpecialTypes,
    pub get_word_url: UrlFn2,
    /// Type and value titles.
    pub lookup: Lookup<'a>,
    pub get_value_list_url: UrlFn,
    pub get_instance_list_url: UrlFn2,
    pub show_items: ShowItems,
}

#[derive(Debug)]
pub struct WordView<'a> {
    pub work_index: usize,
    pub word_index: usize,
    pub word: &'a Word,
    pub stages: &'a [StageInfo],
    /// Type info and value titles.
    pub lookup: Lookup<'a>,
    pub get_value_list_url: UrlFn,
    pub get_instance_list_url: UrlFn2,
}

#[derive(Debug)]
pub struct ValueListView<'a> {
    pub values: &'a [ValueInfo],
    pub type_index: usize,
    pub get_instance_list_url: UrlFn2,
    pub show_items: ShowItems,
}

#[derive(Debug)]
pub struct InstanceListView<'a> {
    /// Work info and type info.
    pub lookup: Lookup<'a>,
    pub type_index: usize,
    pub value_index: usize,
    pub instances: &'a [Instance],
    pub get_word_url: UrlFn2,
    pub get_instance_list_url: UrlFn2,
    pub show_items: ShowItems,
}
