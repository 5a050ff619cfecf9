//! The [`ProjectSource`] trait and its local implementations.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use showcase_core::{Project, ProjectDocument};

use crate::{Error, Result};

/// Anything that can hand over the project document.
///
/// Screens fetch through this trait exactly once per mount.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Fetches the whole document.
    async fn fetch_document(&self) -> Result<ProjectDocument>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

#[async_trait]
impl<S: ProjectSource + ?Sized> ProjectSource for std::sync::Arc<S> {
    async fn fetch_document(&self) -> Result<ProjectDocument> {
        (**self).fetch_document().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

// ============================================================================
// StaticSource
// ============================================================================

/// In-memory source with a fixed answer.
///
/// Counts fetches so callers can check how often a screen went to the
/// network.
#[derive(Debug)]
pub struct StaticSource {
    outcome: std::result::Result<ProjectDocument, String>,
    fetches: AtomicUsize,
}

impl StaticSource {
    /// Source that always returns `projects`.
    pub fn new(projects: Vec<Project>) -> Self {
        Self::from_document(ProjectDocument::new(projects))
    }

    /// Source that always returns `document`.
    pub fn from_document(document: ProjectDocument) -> Self {
        Self {
            outcome: Ok(document),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Source whose every fetch fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectSource for StaticSource {
    async fn fetch_document(&self) -> Result<ProjectDocument> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(doc) => Ok(doc.clone()),
            Err(message) => Err(Error::Unavailable {
                message: message.clone(),
            }),
        }
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

// ============================================================================
// FileSource
// ============================================================================

/// Reads the document from a local JSON file with the store's envelope.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading `path` on every fetch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file being read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProjectSource for FileSource {
    async fn fetch_document(&self) -> Result<ProjectDocument> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::io_with_path(e, &self.path))?;
        let doc = ProjectDocument::from_json(&text)?;
        tracing::debug!(
            path = %self.path.display(),
            count = doc.record.products.len(),
            "Loaded project document from file"
        );
        Ok(doc)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
