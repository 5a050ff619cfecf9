//! Lookup and sampling over a fetched project list.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::{IdMatching, Project, ProjectDocument};

/// Number of projects picked by the random screen.
pub const RANDOM_SAMPLE_SIZE: usize = 2;

/// The projects of one fetch, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Catalog over `projects`.
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// All projects.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Takes the project list.
    pub fn into_projects(self) -> Vec<Project> {
        self.projects
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if nothing was fetched.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// First project whose id matches `route`.
    pub fn find(&self, route: &str, matching: IdMatching) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.id.matches_route(route, matching))
    }

    /// Up to `count` distinct projects in random order.
    ///
    /// Shuffles a copy with Fisher–Yates and keeps the head, so every
    /// subset is equally likely. Fewer projects than `count` returns them
    /// all.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Project> {
        let mut shuffled = self.projects.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(count);
        shuffled
    }
}

impl From<ProjectDocument> for Catalog {
    fn from(doc: ProjectDocument) -> Self {
        Self::new(doc.into_projects())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ProjectId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog(n: i64) -> Catalog {
        Catalog::new(
            (1..=n)
                .map(|i| Project::new(i, format!("P{i}")).with_images(["x.png"]))
                .collect(),
        )
    }

    #[test]
    fn test_find_by_string_id() {
        let cat = Catalog::new(vec![
            Project::new("7", "seven"),
            Project::new("42", "answer"),
        ]);
        let found = cat.find("42", IdMatching::Exact).unwrap();
        assert_eq!(found.name, "answer");
        assert!(cat.find("43", IdMatching::Exact).is_none());
    }

    #[test]
    fn test_find_returns_first_match() {
        let cat = Catalog::new(vec![Project::new(1, "first"), Project::new("1", "second")]);
        assert_eq!(cat.find("1", IdMatching::Canonical).unwrap().name, "first");
        assert_eq!(cat.find("1", IdMatching::Exact).unwrap().name, "second");
        assert_eq!(cat.find("1", IdMatching::Numeric).unwrap().name, "first");
    }

    #[test]
    fn test_sample_two_distinct() {
        let cat = catalog(10);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = cat.sample(RANDOM_SAMPLE_SIZE, &mut rng);
        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0].id, picked[1].id);
    }

    #[test]
    fn test_sample_fewer_than_requested() {
        let cat = catalog(1);
        let mut rng = StdRng::seed_from_u64(1);
        let picked = cat.sample(RANDOM_SAMPLE_SIZE, &mut rng);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, ProjectId::Number(1));
        assert!(Catalog::default().sample(2, &mut rng).is_empty());
    }

    #[test]
    fn test_sample_is_deterministic_for_seed() {
        let cat = catalog(20);
        let a = cat.sample(2, &mut StdRng::seed_from_u64(99));
        let b = cat.sample(2, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_does_not_reorder_catalog() {
        let cat = catalog(5);
        let before = cat.clone();
        let _ = cat.sample(2, &mut StdRng::seed_from_u64(3));
        assert_eq!(cat, before);
    }

    #[test]
    fn test_from_document() {
        let doc = ProjectDocument::new(vec![Project::new(1, "a")]);
        let cat = Catalog::from(doc);
        assert_eq!(cat.len(), 1);
    }
}
