//! Location fragment encoding.
//!
//! A [`Visual`] is written as a query string behind `#`, keys in ascending
//! order so the same screen always produces the same fragment:
//! `#view=word&wordIndex=7&workIndex=0`.

use crate::app::state::Visual;
use crate::route::RouteError;
use std::collections::HashMap;
use url::form_urlencoded;

const VIEW: &str = "view";
const WORK_INDEX: &str = "workIndex";
const WORD_INDEX: &str = "wordIndex";
const TYPE_INDEX: &str = "typeIndex";
const VALUE_INDEX: &str = "valueIndex";

pub fn encode(visual: &Visual) -> String {
    let mut pairs: Vec<(&str, String)> = vec![(VIEW, visual.view_name().to_string())];
    match *visual {
        Visual::License
        | Visual::LoadingIndex
        | Visual::WorkList
        | Visual::TypeList => {}
        Visual::LoadingWork { work_index } | Visual::Work { work_index } => {
            pairs.push((WORK_INDEX, work_index.to_string()));
        }
        Visual::Word {
            work_index,
            word_index,
        } => {
            pairs.push((WORK_INDEX, work_index.to_string()));
            pairs.push((WORD_INDEX, word_index.to_string()));
        }
        Visual::LoadingType { type_index } | Visual::ValueList { type_index } => {
            pairs.push((TYPE_INDEX, type_index.to_string()));
        }
        Visual::InstanceList {
            type_index,
            value_index,
        } => {
            pairs.push((TYPE_INDEX, type_index.to_string()));
            pairs.push((VALUE_INDEX, value_index.to_string()));
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut serializer = form_urlencoded::Serializer::for_suffix(String::from("#"), 1);
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

pub fn decode(fragment: &str) -> Result<Visual, RouteError> {
    let query = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut fields: HashMap<String, String> = HashMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        fields.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }

    let view = fields
        .get(VIEW)
        .ok_or_else(|| RouteError::UnrecognizedView(String::new()))?;
    let index = |field: &'static str| -> Result<usize, RouteError> {
        let raw = fields.get(field).ok_or_else(|| RouteError::MissingField {
            view: view.clone(),
            field,
        })?;
        raw.parse().map_err(|_| RouteError::InvalidIndex {
            field,
            value: raw.clone(),
        })
    };

    let visual = match view.as_str() {
        "license" => Visual::License,
        "loadingIndex" => Visual::LoadingIndex,
        "loadingWork" => Visual::LoadingWork {
            work_index: index(WORK_INDEX)?,
        },
        "loadingType" => Visual::LoadingType {
            type_index: index(TYPE_INDEX)?,
        },
        "workList" => Visual::WorkList,
        "typeList" => Visual::TypeList,
        "work" => Visual::Work {
            work_index: index(WORK_INDEX)?,
        },
        "word" => Visual::Word {
            work_index: index(WORK_INDEX)?,
            word_index: index(WORD_INDEX)?,
        },
        "valueList" => Visual::ValueList {
            type_index: index(TYPE_INDEX)?,
        },
        "instanceList" => Visual::InstanceList {
            type_index: index(TYPE_INDEX)?,
            value_index: index(VALUE_INDEX)?,
        },
        other => return Err(RouteError::UnrecognizedView(other.to_string())),
    };
    Ok(visual)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_visuals() -> Vec<Visual> {
        vec![
            Visual::License,
            Visual::LoadingIndex,
            Visual::LoadingWork { work_index: 2 },
            Visual::LoadingType { type_index: 11 },
            Visual::WorkList,
            Visual::TypeList,
            Visual::Work { work_index: 0 },
            Visual::Word { work_index: 3, word_index: 1024 },
            Visual::ValueList { type_index: 5 },
            Visual::InstanceList { type_index: 5, value_index: 17 },
        ]
    }

    #[test]
    fn test_decode_reverses_encode() {
        for visual in all_visuals() {
            assert_eq!(decode(&encode(&visual)).unwrap(), visual, "{}", encode(&visual));
        }
    }

    #[test]
    fn test_encode_sorts_keys() {
        assert_eq!(encode(&Visual::WorkList), "#view=workList");
        assert_eq!(
            encode(&Visual::Word { work_index: 0, word_index: 7 }),
            "#view=word&wordIndex=7&workIndex=0"
        );
        assert_eq!(
            encode(&Visual::InstanceList { type_index: 2, value_index: 9 }),
            "#typeIndex=2&valueIndex=9&view=instanceList"
        );
    }

    #[test]
    fn test_decode_ignores_unknown_keys_and_order() {
        let visual = decode("#workIndex=4&utm=x&view=work&typeIndex=1").unwrap();
        assert_eq!(visual, Visual::Work { work_index: 4 });
    }

    #[test]
    fn test_decode_without_hash_and_first_key_wins() {
        assert_eq!(
            decode("view=valueList&typeIndex=3&typeIndex=8").unwrap(),
            Visual::ValueList { type_index: 3 }
        );
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode(""), Err(RouteError::UnrecognizedView(String::new())));
        assert_eq!(
            decode("#view=nonsense"),
            Err(RouteError::UnrecognizedView("nonsense".into()))
        );
        assert_eq!(
            decode("#view=word&workIndex=1"),
            Err(RouteError::MissingField { view: "word".into(), field: "wordIndex" })
        );
        assert_eq!(
            decode("#view=work&workIndex=-1"),
            Err(RouteError::InvalidIndex { field: "workIndex", value: "-1".into() })
        );
    }

    #[test]
    fn test_decode_garbage_does_not_panic() {
        for garbage in ["#%%%", "#&&&==", "#view", "#=work", "\u{0}", "#view=work&workIndex=99999999999999999999999"] {
            assert!(decode(garbage).is_err(), "{}", garbage);
        }
    }
}
