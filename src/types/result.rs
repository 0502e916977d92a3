//! Colour sets and extraction results.

use std::collections::BTreeSet;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::CanonicalColour;

/// A deduplicated set of canonical colours.
///
/// Iteration order is deterministic (see [`CanonicalColour`]'s ordering), but
/// only membership is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColourSet(BTreeSet<CanonicalColour>);

impl ColourSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a colour. Returns false if it was already present.
    pub fn insert(&mut self, colour: CanonicalColour) -> bool {
        self.0.insert(colour)
    }

    pub fn contains(&self, colour: &CanonicalColour) -> bool {
        self.0.contains(colour)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalColour> {
        self.0.iter()
    }

    /// Colours in this set that are not in `other`.
    pub fn difference<'a>(&'a self, other: &'a ColourSet) -> impl Iterator<Item = &'a CanonicalColour> {
        self.0.difference(&other.0)
    }
}

impl FromIterator<CanonicalColour> for ColourSet {
    fn from_iter<I: IntoIterator<Item = CanonicalColour>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<CanonicalColour> for ColourSet {
    fn extend<I: IntoIterator<Item = CanonicalColour>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ColourSet {
    type Item = CanonicalColour;
    type IntoIter = std::collections::btree_set::IntoIter<CanonicalColour>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ColourSet {
    type Item = &'a CanonicalColour;
    type IntoIter = std::collections::btree_set::Iter<'a, CanonicalColour>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The colours found in one asset.
///
/// The count is always the size of the colour set; it is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    colours: ColourSet,
}

impl ExtractionResult {
    pub fn new(colours: ColourSet) -> Self {
        Self { colours }
    }

    /// A result with no colours (used for unsupported assets).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.colours.len()
    }

    pub fn colours(&self) -> &ColourSet {
        &self.colours
    }

    /// Colours as display strings, in set order.
    pub fn labels(&self) -> Vec<String> {
        self.colours.iter().map(|c| c.to_string()).collect()
    }
}

impl From<ColourSet> for ExtractionResult {
    fn from(colours: ColourSet) -> Self {
        Self::new(colours)
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ExtractionResult", 2)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("colors", &self.colours)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_deduplicates() {
        let mut set = ColourSet::new();
        assert!(set.insert(CanonicalColour::from_rgb(255, 0, 0)));
        assert!(!set.insert(CanonicalColour::from_rgb(255, 0, 0)));
        assert!(set.insert(CanonicalColour::White));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_count_tracks_set() {
        let set: ColourSet = vec![
            CanonicalColour::White,
            CanonicalColour::White,
            CanonicalColour::from_rgb(0, 0, 0),
        ]
        .into_iter()
        .collect();
        let result = ExtractionResult::from(set);

        assert_eq!(result.count(), 2);
        assert_eq!(result.count(), result.colours().len());
    }

    #[test]
    fn test_empty_result() {
        let result = ExtractionResult::empty();
        assert_eq!(result.count(), 0);
        assert!(result.colours().is_empty());
    }

    #[test]
    fn test_difference() {
        let found: ColourSet = vec![CanonicalColour::White, CanonicalColour::from_rgb(1, 2, 3)]
            .into_iter()
            .collect();
        let allowed: ColourSet = vec![CanonicalColour::White].into_iter().collect();

        let extra: Vec<String> = found.difference(&allowed).map(|c| c.to_string()).collect();
        assert_eq!(extra, vec!["#010203"]);
    }

    #[test]
    fn test_serialize() {
        let result = ExtractionResult::new(
            vec![CanonicalColour::from_rgb(255, 0, 0), CanonicalColour::White]
                .into_iter()
                .collect(),
        );
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r##"{"count":2,"colors":["white","#FF0000"]}"##);
    }
}
