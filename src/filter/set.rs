//! Declaration-ordered filter sets.

use indexmap::IndexMap;

use super::traits::Filter;

/// A declaration-ordered set of filters, keyed by field name.
///
/// Iteration order is the order filters were added, which is also the order
/// of any errors a validation pass produces.
///
/// # Example
///
/// ```rust
/// use vestibule::{FilterSet, IntegerFilter, StringFilter};
///
/// let filters = FilterSet::new()
///     .filter(StringFilter::new("name"))
///     .filter(IntegerFilter::new("age"));
///
/// assert_eq!(filters.len(), 2);
/// assert!(filters.get("age").is_some());
/// ```
#[derive(Default)]
pub struct FilterSet {
    filters: IndexMap<String, Box<dyn Filter>>,
}

impl FilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, keyed by its name.
    ///
    /// Re-adding a name replaces the earlier filter but keeps its original
    /// position.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.filters.insert(filter.name().to_string(), Box::new(filter));
        self
    }

    /// Looks up a filter by field name.
    pub fn get(&self, name: &str) -> Option<&dyn Filter> {
        self.filters.get(name).map(|f| f.as_ref())
    }

    /// Returns the number of filters in the set.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if the set holds no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterates filters in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Filter)> {
        self.filters.iter().map(|(name, f)| (name.as_str(), f.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{IntegerFilter, StringFilter};

    #[test]
    fn test_iteration_preserves_declaration_order() {
        let filters = FilterSet::new()
            .filter(StringFilter::new("b"))
            .filter(IntegerFilter::new("a"))
            .filter(IntegerFilter::new("c"));

        let names: Vec<_> = filters.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_replacing_a_name_keeps_its_position() {
        let filters = FilterSet::new()
            .filter(StringFilter::new("a"))
            .filter(IntegerFilter::new("b"))
            .filter(IntegerFilter::new("a"));

        let names: Vec<_> = filters.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(filters.get("a").unwrap().slug(), "integer");
    }
}
