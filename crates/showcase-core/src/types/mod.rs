//! Record types served by the document store.

mod id;
mod profile;
mod project;

pub use id::{IdMatching, ProjectId};
pub use profile::{ContactLink, DeveloperProfile};
pub use project::{Category, NO_DATE_PLACEHOLDER, Project, ProjectDocument, ProjectRecord};
