//! Typed candidate predicates
//!
//! Category selection is expressed as a trait object rather than ad hoc
//! field comparisons, so multi-field filters compose without branching
//! in the pipeline.

use crate::model::Candidate;

/// Predicate deciding whether a feature enters the candidate set.
///
/// Implementations must be `Send + Sync`: the pipeline shares the filter
/// across rayon worker threads.
pub trait CandidateFilter: Send + Sync {
    fn matches(&self, candidate: &Candidate) -> bool;
}

impl<F> CandidateFilter for F
where
    F: Fn(&Candidate) -> bool + Send + Sync,
{
    fn matches(&self, candidate: &Candidate) -> bool {
        self(candidate)
    }
}

/// Keeps candidates whose tag `key` equals `value` exactly.
#[derive(Debug, Clone)]
pub struct TagEquals {
    key: String,
    value: String,
}

impl TagEquals {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The default category predicate: `amenity == "cafe"`.
    pub fn cafes() -> Self {
        Self::new("amenity", crate::DEFAULT_CATEGORY)
    }
}

impl CandidateFilter for TagEquals {
    fn matches(&self, candidate: &Candidate) -> bool {
        candidate.tag(&self.key) == Some(self.value.as_str())
    }
}

/// Conjunction of filters; matches only if every inner filter matches.
pub struct AllOf(Vec<Box<dyn CandidateFilter>>);

impl AllOf {
    pub fn new(filters: Vec<Box<dyn CandidateFilter>>) -> Self {
        Self(filters)
    }
}

impl CandidateFilter for AllOf {
    fn matches(&self, candidate: &Candidate) -> bool {
        self.0.iter().all(|filter| filter.matches(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;
    use hashbrown::HashMap;

    fn candidate(pairs: &[(&str, &str)]) -> Candidate {
        let tags: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Candidate::new(Point::new(0.0, 0.0), tags)
    }

    #[test]
    fn tag_equals_matches_exact_value() {
        let filter = TagEquals::cafes();
        assert!(filter.matches(&candidate(&[("amenity", "cafe")])));
        assert!(!filter.matches(&candidate(&[("amenity", "pub")])));
        assert!(!filter.matches(&candidate(&[])));
    }

    #[test]
    fn closures_are_filters() {
        let filter = |c: &Candidate| c.tag("amenity").is_some();
        assert!(filter.matches(&candidate(&[("amenity", "pub")])));
        assert!(!filter.matches(&candidate(&[("landuse", "park")])));
    }

    #[test]
    fn all_of_composes() {
        let filter = AllOf::new(vec![
            Box::new(TagEquals::cafes()),
            Box::new(TagEquals::new("wheelchair", "yes")),
        ]);
        assert!(filter.matches(&candidate(&[("amenity", "cafe"), ("wheelchair", "yes")])));
        assert!(!filter.matches(&candidate(&[("amenity", "cafe")])));
    }
}
