//! Image carousel state.
//!
//! An [`ImageCursor`] tracks which image of one project is showing; a
//! [`CarouselSet`] holds one cursor per rendered project. Every operation
//! returns a new value and leaves the receiver untouched.
//!
//! ```rust
//! use showcase_core::ImageCursor;
//!
//! let cursor = ImageCursor::new(3);
//! assert_eq!(cursor.advanced().advanced().advanced().index(), 0);
//! assert_eq!(cursor.retreated().index(), 2);
//! ```

use crate::types::Project;
use crate::{Error, Result};

// ============================================================================
// ImageCursor
// ============================================================================

/// Position within one project's image list.
///
/// Invariant: `index < len` whenever `len > 0`; an empty list pins the
/// index at zero and every move is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCursor {
    index: usize,
    len: usize,
}

impl ImageCursor {
    /// Cursor at the first of `len` images.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Cursor for a project's images.
    pub fn for_project(project: &Project) -> Self {
        Self::new(project.images.len())
    }

    /// Current index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of images the cursor ranges over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Next image, wrapping from the last back to the first.
    #[must_use]
    pub fn advanced(&self) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            index: (self.index + 1) % self.len,
            len: self.len,
        }
    }

    /// Previous image, wrapping from the first to the last.
    #[must_use]
    pub fn retreated(&self) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            len: self.len,
        }
    }

    /// Jumps straight to `target`.
    pub fn jumped_to(&self, target: usize) -> Result<Self> {
        if target >= self.len {
            return Err(Error::IndexOutOfRange {
                index: target,
                len: self.len,
            });
        }
        Ok(Self {
            index: target,
            len: self.len,
        })
    }

    /// The image URL this cursor points at in `project`, if any.
    pub fn current<'a>(&self, project: &'a Project) -> Option<&'a str> {
        project.image(self.index)
    }
}

// ============================================================================
// CarouselSet
// ============================================================================

/// One [`ImageCursor`] per rendered project, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselSet {
    cursors: Vec<ImageCursor>,
}

impl CarouselSet {
    /// All cursors at zero, one per project.
    pub fn for_projects(projects: &[Project]) -> Self {
        Self {
            cursors: projects.iter().map(ImageCursor::for_project).collect(),
        }
    }

    /// Number of tracked carousels.
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Returns `true` when no carousels are tracked.
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Cursor for the project at `project`.
    pub fn cursor(&self, project: usize) -> Option<ImageCursor> {
        self.cursors.get(project).copied()
    }

    /// Current image index of the project at `project`.
    pub fn current(&self, project: usize) -> Option<usize> {
        self.cursor(project).map(|c| c.index())
    }

    /// Advances the carousel of one project; other projects are unchanged.
    ///
    /// An unknown project index yields an unchanged copy.
    #[must_use]
    pub fn advance(&self, project: usize) -> Self {
        self.map_one(project, |c| c.advanced())
    }

    /// Moves the carousel of one project back by one image.
    #[must_use]
    pub fn retreat(&self, project: usize) -> Self {
        self.map_one(project, |c| c.retreated())
    }

    /// Sets the carousel of one project to `target` (thumbnail click).
    pub fn jump_to(&self, project: usize, target: usize) -> Result<Self> {
        let cursor = self.cursor(project).ok_or(Error::IndexOutOfRange {
            index: project,
            len: self.cursors.len(),
        })?;
        let moved = cursor.jumped_to(target)?;
        Ok(self.map_one(project, |_| moved))
    }

    fn map_one(&self, project: usize, f: impl Fn(&ImageCursor) -> ImageCursor) -> Self {
        Self {
            cursors: self
                .cursors
                .iter()
                .enumerate()
                .map(|(i, c)| if i == project { f(c) } else { *c })
                .collect(),
        }
    }
}
