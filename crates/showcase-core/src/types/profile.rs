//! The "About Developer" block shown under full project details.

use serde::{Deserialize, Serialize};

/// One contact channel, e.g. `GitHub` pointing at a profile URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    /// Channel name shown before the URL
    pub label: String,
    /// `https:`, `mailto:` or similar target
    pub url: String,
}

/// Who built the portfolio and how to reach them.
///
/// Nothing is compiled in; a profile comes from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperProfile {
    /// Developer's display name
    pub name: String,
    /// Studio or brand the developer runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Contact channels in display order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<ContactLink>,
}

impl DeveloperProfile {
    /// Profile for `name` with no brand and no links.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the brand.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Appends a contact link.
    #[must_use]
    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(ContactLink {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    /// Introductory sentence, e.g. `Hello, I'm Ada, the creator of Lovelace Labs.`
    pub fn greeting(&self) -> String {
        match self.brand.as_deref().filter(|b| !b.trim().is_empty()) {
            Some(brand) => format!("Hello, I'm {}, the creator of {brand}.", self.name),
            None => format!("Hello, I'm {}.", self.name),
        }
    }
}
