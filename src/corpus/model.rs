//! Corpus data model.
//!
//! Mirrors the JSON files served alongside the corpus: one `index.json` with
//! corpus-wide metadata, plus `works/<n>.json` and `types/<n>.json` fetched on
//! demand. Field names follow the on-disk format, short keys included.

use serde::{Deserialize, Serialize};

/// Corpus-wide metadata, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexData {
    #[serde(default)]
    pub works: Vec<WorkInfo>,
    #[serde(default)]
    pub types: Vec<TypeInfo>,
    #[serde(default)]
    pub stages: Vec<StageInfo>,
    #[serde(default)]
    pub special: SpecialTypes,
}

/// Summary of a single work as listed in the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkInfo {
    pub title: String,
    /// Per-word metadata. Only the count matters to the views.
    #[serde(rename = "wordInfos", default)]
    pub word_infos: Vec<serde_json::Value>,
}

/// A morphological or semantic category and its possible values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub title: String,
    #[serde(default)]
    pub values: Vec<ValueInfo>,
    /// Annotation stage this type belongs to, if any.
    #[serde(default)]
    pub stage: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueInfo {
    /// Display title.
    pub t: String,
    /// Number of instances carrying this value.
    #[serde(default)]
    pub c: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageInfo {
    pub title: String,
}

/// Type indices with a fixed role in the views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTypes {
    /// The type whose values are the surface forms of words.
    #[serde(default)]
    pub surface: usize,
}

/// Full content of a work: its words in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Work {
    #[serde(default)]
    pub words: Vec<Word>,
}

/// Annotations of one token, as `(type index, value indices)` pairs.
/// On disk: `[[0, [12]], [3, [1, 4]]]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(pub Vec<(usize, Vec<usize>)>);

impl Word {
    pub fn annotations(&self) -> &[(usize, Vec<usize>)] {
        &self.0
    }

    /// First value of the first annotation for `type_index`.
    pub fn first_value_of(&self, type_index: usize) -> Option<usize> {
        self.0
            .iter()
            .find(|(t, _)| *t == type_index)
            .and_then(|(_, values)| values.first().copied())
    }
}

/// Instances of every value of one type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeInstances {
    #[serde(default)]
    pub values: Vec<ValueInstances>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueInstances {
    #[serde(default)]
    pub i: Vec<Instance>,
}

/// A token occurrence, stored on disk as `[work, word]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Instance {
    pub work_index: usize,
    pub word_index: usize,
}

impl From<(usize, usize)> for Instance {
    fn from((work_index, word_index): (usize, usize)) -> Self {
        Self {
            work_index,
            word_index,
        }
    }
}

impl From<Instance> for (usize, usize) {
    fn from(instance: Instance) -> Self {
        (instance.work_index, instance.word_index)
    }
}
