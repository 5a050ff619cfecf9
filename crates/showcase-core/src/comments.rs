//! Volatile comment board.
//!
//! Comments live only as long as the [`CommentBoard`] value that holds
//! them; nothing here talks to the document store.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Message shown when a comment is submitted with a missing field.
pub const SUBMIT_ALERT: &str = "Please fill all fields and select an avatar.";

/// How many avatars are visible at once.
pub const VISIBLE_AVATARS: usize = 4;

/// The fixed avatar set offered to commenters.
pub const DEFAULT_AVATARS: [&str; 6] = [
    "assets/img/1.jpg",
    "assets/img/2.jpg",
    "assets/img/3.jpg",
    "assets/img/4.jpg",
    "assets/img/5359af2ff56b783dc1b06699fcc0983a.jpg",
    "assets/img/a8381ed241fe8fbb6d90e483a214c30a.jpg",
];

// ============================================================================
// AvatarCarousel
// ============================================================================

/// Windowed view over the avatar set.
///
/// The set is split into `ceil(count / visible)` windows; the last one may
/// be partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarCarousel {
    avatars: Vec<String>,
    visible: usize,
    window: usize,
}

impl Default for AvatarCarousel {
    fn default() -> Self {
        Self::new(DEFAULT_AVATARS, VISIBLE_AVATARS)
    }
}

impl AvatarCarousel {
    /// Carousel over `avatars`, showing `visible` at a time (at least one).
    pub fn new<I, S>(avatars: I, visible: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            avatars: avatars.into_iter().map(Into::into).collect(),
            visible: visible.max(1),
            window: 0,
        }
    }

    /// Every avatar, in order.
    pub fn avatars(&self) -> &[String] {
        &self.avatars
    }

    /// Avatars shown per window.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Index of the window currently shown.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Total number of windows: `ceil(count / visible)`.
    pub fn window_count(&self) -> usize {
        self.avatars.len().div_ceil(self.visible)
    }

    /// Avatars in the current window; the final window may hold fewer than
    /// [`visible`](Self::visible).
    pub fn visible_avatars(&self) -> &[String] {
        let start = (self.window * self.visible).min(self.avatars.len());
        let end = (start + self.visible).min(self.avatars.len());
        &self.avatars[start..end]
    }

    /// Width of the sliding track relative to the viewport, in percent.
    pub fn track_width_percent(&self) -> f64 {
        self.avatars.len() as f64 / self.visible as f64 * 100.0
    }

    /// Horizontal offset of the track for the current window, in percent.
    pub fn offset_percent(&self) -> f64 {
        self.window as f64 * 100.0
    }

    /// Shows the next window, wrapping to the first.
    #[must_use]
    pub fn next_window(&self) -> Self {
        let count = self.window_count();
        if count == 0 {
            return self.clone();
        }
        Self {
            window: (self.window + 1) % count,
            ..self.clone()
        }
    }

    /// Shows the previous window, wrapping to the last.
    #[must_use]
    pub fn prev_window(&self) -> Self {
        let count = self.window_count();
        if count == 0 {
            return self.clone();
        }
        Self {
            window: (self.window + count - 1) % count,
            ..self.clone()
        }
    }

    /// Returns `true` if `url` belongs to the avatar set.
    pub fn contains(&self, url: &str) -> bool {
        self.avatars.iter().any(|a| a == url)
    }
}

// ============================================================================
// Comment / CommentDraft
// ============================================================================

/// A posted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Commenter's name as typed
    pub name: String,
    /// Comment body as typed
    pub text: String,
    /// Chosen avatar URL
    pub avatar: String,
}

/// Uncommitted input of the comment form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentDraft {
    /// Name field
    pub name: String,
    /// Comment field
    pub text: String,
    /// Selected avatar, if any
    pub avatar: Option<String>,
}

impl CommentDraft {
    /// Returns `true` when every field is blank and no avatar is chosen.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.text.is_empty() && self.avatar.is_none()
    }

    fn validate(&self) -> Result<Comment> {
        let missing = if self.name.trim().is_empty() {
            Some("name")
        } else if self.text.trim().is_empty() {
            Some("comment")
        } else if self.avatar.is_none() {
            Some("avatar")
        } else {
            None
        };

        match (missing, &self.avatar) {
            (None, Some(avatar)) => Ok(Comment {
                name: self.name.clone(),
                text: self.text.clone(),
                avatar: avatar.clone(),
            }),
            (Some(field), _) => Err(Error::validation_field(field, SUBMIT_ALERT)),
            (None, None) => Err(Error::validation_field("avatar", SUBMIT_ALERT)),
        }
    }
}

// ============================================================================
// CommentBoard
// ============================================================================

/// Comment form plus the comments posted during this session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentBoard {
    draft: CommentDraft,
    comments: Vec<Comment>,
    avatars: AvatarCarousel,
}

impl CommentBoard {
    /// Empty board over the default avatar set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty board over a custom avatar carousel.
    pub fn with_avatars(avatars: AvatarCarousel) -> Self {
        Self {
            avatars,
            ..Self::default()
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    /// Posted comments, oldest first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Avatar carousel state.
    pub fn avatars(&self) -> &AvatarCarousel {
        &self.avatars
    }

    /// Replaces the draft name.
    #[must_use]
    pub fn set_name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.draft.name = name.into();
        next
    }

    /// Replaces the draft comment text.
    #[must_use]
    pub fn set_text(&self, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.draft.text = text.into();
        next
    }

    /// Selects an avatar by URL. The avatar window does not move.
    pub fn select_avatar(&self, url: &str) -> Result<Self> {
        if !self.avatars.contains(url) {
            return Err(Error::UnknownAvatar {
                url: url.to_string(),
            });
        }
        let mut next = self.clone();
        next.draft.avatar = Some(url.to_string());
        Ok(next)
    }

    /// Selects an avatar by its position in the full set.
    pub fn select_avatar_at(&self, index: usize) -> Result<Self> {
        let url = self
            .avatars
            .avatars()
            .get(index)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.avatars.avatars().len(),
            })?;
        self.select_avatar(url)
    }

    /// Shows the next avatar window.
    #[must_use]
    pub fn next_avatar_window(&self) -> Self {
        Self {
            avatars: self.avatars.next_window(),
            ..self.clone()
        }
    }

    /// Shows the previous avatar window.
    #[must_use]
    pub fn prev_avatar_window(&self) -> Self {
        Self {
            avatars: self.avatars.prev_window(),
            ..self.clone()
        }
    }

    /// Posts the draft.
    ///
    /// On success the comment is appended and the draft cleared. On failure
    /// the error carries [`SUBMIT_ALERT`] and `self` is left as it was, so
    /// the caller keeps the draft by keeping the old value.
    pub fn submit(&self) -> Result<Self> {
        let comment = self.draft.validate().inspect_err(|e| {
            log::debug!("Comment rejected: {e}");
        })?;
        let mut next = self.clone();
        next.comments.push(comment);
        next.draft = CommentDraft::default();
        Ok(next)
    }
}
