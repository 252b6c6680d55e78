use crate::app::event::AppEvent;
use crate::corpus::model::{IndexData, TypeInstances, Work};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What a load request was for, echoed back in [`AppEvent::LoadFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    Index,
    Work(usize),
    Type(usize),
}

impl std::fmt::Display for LoadTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadTarget::Index => write!(f, "corpus index"),
            LoadTarget::Work(i) => write!(f, "work {}", i),
            LoadTarget::Type(i) => write!(f, "type {}", i),
        }
    }
}

/// Reads corpus files in background tasks and reports back over the event
/// channel. One task per request; callers deduplicate.
pub struct CorpusLoader {
    data_dir: PathBuf,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl CorpusLoader {
    pub fn new(data_dir: PathBuf, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { data_dir, event_tx }
    }

    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join("index.json")
    }

    pub fn work_path(&self, work_index: usize) -> PathBuf {
        self.data_dir.join("works").join(format!("{}.json", work_index))
    }

    pub fn type_path(&self, type_index: usize) -> PathBuf {
        self.data_dir.join("types").join(format!("{}.json", type_index))
    }

    pub fn fetch_index(&self) {
        let path = self.index_path();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match read_json::<IndexData>(&path).await {
                Ok(index) => AppEvent::IndexLoaded(index),
                Err(e) => load_failed(LoadTarget::Index, e),
            };
            let _ = tx.send(event);
        });
    }

    pub fn fetch_work(&self, work_index: usize) {
        let path = self.work_path(work_index);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match read_json::<Work>(&path).await {
                Ok(work) => AppEvent::WorkLoaded { work_index, work },
                Err(e) => load_failed(LoadTarget::Work(work_index), e),
            };
            let _ = tx.send(event);
        });
    }

    pub fn fetch_type(&self, type_index: usize) {
        let path = self.type_path(type_index);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match read_json::<TypeInstances>(&path).await {
                Ok(instances) => AppEvent::TypeLoaded {
                    type_index,
                    instances,
                },
                Err(e) => load_failed(LoadTarget::Type(type_index), e),
            };
            let _ = tx.send(event);
        });
    }
}

fn load_failed(target: LoadTarget, error: LoadError) -> AppEvent {
    tracing::error!(%target, %error, "corpus load failed");
    AppEvent::LoadFailed {
        target,
        error: error.to_string(),
    }
}

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "loaded corpus file");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, rel: &str, contents: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_fetch_index_posts_loaded_event() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "index.json",
            r#"{"works": [{"title": "Iliad", "wordInfos": []}], "special": {"surface": 0}}"#,
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let loader = CorpusLoader::new(dir.path().to_path_buf(), tx);

        loader.fetch_index();

        match rx.recv().await {
            Some(AppEvent::IndexLoaded(index)) => assert_eq!(index.works[0].title, "Iliad"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_work_and_type_use_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "works/3.json", r#"{"words": [[[0, [1]]]]}"#);
        write(dir.path(), "types/2.json", r#"{"values": [{"i": [[3, 0]]}]}"#);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let loader = CorpusLoader::new(dir.path().to_path_buf(), tx);

        loader.fetch_work(3);
        match rx.recv().await {
            Some(AppEvent::WorkLoaded { work_index, work }) => {
                assert_eq!(work_index, 3);
                assert_eq!(work.words.len(), 1);
            }
            other => panic!("unexpected event: {:?}", other),
        }

        loader.fetch_type(2);
        match rx.recv().await {
            Some(AppEvent::TypeLoaded { type_index, instances }) => {
                assert_eq!(type_index, 2);
                assert_eq!(instances.values[0].i[0].work_index, 3);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let loader = CorpusLoader::new(dir.path().to_path_buf(), tx);

        loader.fetch_work(7);

        match rx.recv().await {
            Some(AppEvent::LoadFailed { target, error }) => {
                assert_eq!(target, LoadTarget::Work(7));
                assert!(error.contains("7.json"), "{}", error);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_demo_corpus_is_consistent() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demo-data");
        let index: IndexData = read_json(&dir.join("index.json")).await.unwrap();

        for (w, info) in index.works.iter().enumerate() {
            let work: Work = read_json(&dir.join(format!("works/{}.json", w))).await.unwrap();
            assert_eq!(work.words.len(), info.word_infos.len(), "{}", info.title);
        }
        for (t, info) in index.types.iter().enumerate() {
            let types: TypeInstances =
                read_json(&dir.join(format!("types/{}.json", t))).await.unwrap();
            assert_eq!(types.values.len(), info.values.len(), "{}", info.title);
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.json", "{not json");

        let result = read_json::<IndexData>(&dir.path().join("index.json")).await;

        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }
}
