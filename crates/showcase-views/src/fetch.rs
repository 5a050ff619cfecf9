//! The one fetch every screen performs on mount.

use showcase_client::ProjectSource;
use showcase_core::Catalog;

/// State of data a screen is waiting for.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    /// The fetch has not completed yet.
    #[default]
    Loading,
    /// The fetch completed, successfully or not.
    Loaded(T),
}

impl<T> Loadable<T> {
    /// Returns `true` while waiting.
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loading => None,
            Loadable::Loaded(value) => Some(value),
        }
    }

    /// Applies `f` to the loaded value; a loading state stays loading.
    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Loadable<U> {
        match self {
            Loadable::Loading => Loadable::Loading,
            Loadable::Loaded(value) => Loadable::Loaded(f(value)),
        }
    }
}

/// Fetches the project list from `source`.
///
/// A failed fetch is logged and yields an empty catalog: screens show their
/// empty or not-found state rather than an error.
pub async fn fetch_catalog<S>(source: &S) -> Catalog
where
    S: ProjectSource + ?Sized,
{
    match source.fetch_document().await {
        Ok(doc) => {
            let catalog = Catalog::from(doc);
            tracing::debug!(
                source = %source.describe(),
                count = catalog.len(),
                "Fetched projects"
            );
            catalog
        }
        Err(e) => {
            tracing::error!(
                source = %source.describe(),
                error = %e,
                "Error fetching projects"
            );
            Catalog::default()
        }
    }
}
