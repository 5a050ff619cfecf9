//! Project records and the document envelope they arrive in.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ProjectId;

/// Placeholder shown on cards when a project carries no date.
pub const NO_DATE_PLACEHOLDER: &str = "No date provided";

/// Audience category of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Aimed at men
    Male,
    /// Aimed at women
    Female,
    /// Aimed at anyone
    Unisex,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Male => write!(f, "male"),
            Category::Female => write!(f, "female"),
            Category::Unisex => write!(f, "unisex"),
        }
    }
}

/// A displayable project as stored in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier, unique within the document
    pub id: ProjectId,

    /// Display title
    pub name: String,

    /// Price; carried but not rendered
    #[serde(default)]
    pub price: f64,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Image URLs in carousel order
    #[serde(default)]
    pub images: Vec<String>,

    /// Audience category; carried but not rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// External link to the live project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Sale flag; carried but not rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,

    /// Rating, if the author set one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    /// Free-form display date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Project {
    /// Creates a project with the required fields and nothing else.
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: 0.0,
            description: String::new(),
            images: Vec::new(),
            category: None,
            link: None,
            on_sale: None,
            rating: None,
            date: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image list.
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the display date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the external link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Rating to display, falling back to `default`.
    ///
    /// A stored rating of zero (or NaN) counts as unset.
    pub fn rating_or(&self, default: f64) -> f64 {
        self.rating
            .filter(|r| *r != 0.0 && !r.is_nan())
            .unwrap_or(default)
    }

    /// Display date, or [`NO_DATE_PLACEHOLDER`] when missing or empty.
    pub fn date_or_placeholder(&self) -> &str {
        match self.date.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DATE_PLACEHOLDER,
        }
    }

    /// Returns `true` if the project has at least one image.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Image URL at `index`, if any.
    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// Route of the detail screen for this project.
    pub fn detail_route(&self) -> String {
        format!("/newprojects/{}", self.id)
    }
}

/// The full document served by the store: `{ "record": { "products": [...] } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    /// The stored record
    #[serde(default)]
    pub record: ProjectRecord,
}

/// The record body of a [`ProjectDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Projects in document order
    #[serde(default)]
    pub products: Vec<Project>,
}

impl ProjectDocument {
    /// Wraps a list of projects in the document envelope.
    pub fn new(products: Vec<Project>) -> Self {
        Self {
            record: ProjectRecord { products },
        }
    }

    /// Parses a document from JSON text.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Unwraps the project list.
    pub fn into_projects(self) -> Vec<Project> {
        self.record.products
    }
}
