//! Shared fixtures for screen integration tests.

use std::path::PathBuf;

use showcase_client::{FileSource, StaticSource};
use showcase_core::{Project, ProjectDocument};
use tempfile::TempDir;

/// The projects every test starts from.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(1, "Portfolio")
            .with_description(
                "A personal site built with a static generator and deployed to a CDN \
                 with automatic previews for every branch pushed to the repository. \
                 Each preview gets its own address and is torn down once the branch is merged",
            )
            .with_images(["p1.png", "p2.png", "p3.png"])
            .with_rating(5.0)
            .with_date("January 2025")
            .with_link("https://portfolio.test"),
        Project::new("42", "Task Board")
            .with_description("Kanban board with drag and drop")
            .with_images(["t1.png", "t2.png"]),
        Project::new(7, "Landing Page").with_images(["l1.png"]),
    ]
}

/// Test fixture holding a document on disk and an in-memory twin.
pub struct Fixture {
    _dir: TempDir,
    /// Path of the JSON document
    pub path: PathBuf,
}

impl Fixture {
    /// Writes [`sample_projects`] to a temporary file in the store's
    /// envelope.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("projects.json");
        let doc = ProjectDocument::new(sample_projects());
        std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
        Self { _dir: dir, path }
    }

    /// Source reading the file.
    pub fn file_source(&self) -> FileSource {
        FileSource::new(&self.path)
    }

    /// In-memory source over the same projects.
    pub fn static_source(&self) -> StaticSource {
        StaticSource::new(sample_projects())
    }
}
