//! Predicate composition for derived lookups.
//!
//! Each named `find_by_*` operation in the service layer is one fixed
//! combination of the pieces here: field predicates joined by AND, plus an
//! optional order-by. Keeping the combinators in one place avoids one ad-hoc
//! filter implementation per lookup.

use std::cmp::Ordering;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A composable filter over an entity collection.
pub struct Query<T> {
    predicates: Vec<Predicate<T>>,
    order: Option<Comparator<T>>,
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self { predicates: Vec::new(), order: None }
    }

    /// Add a predicate; all predicates must hold (AND).
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Order results ascending by the extracted key.
    pub fn order_by<K, F>(mut self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.order = Some(Box::new(move |a, b| key(a).cmp(&key(b))));
        self
    }

    /// Order results descending by the extracted key.
    pub fn order_by_desc<K, F>(mut self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.order = Some(Box::new(move |a, b| key(b).cmp(&key(a))));
        self
    }

    /// Whether a record satisfies every predicate.
    pub fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|p| p(record))
    }

    /// Apply the query's ordering, if any. The sort is stable, so callers may
    /// pre-sort by id to fix the order of ties.
    pub fn sort(&self, records: &mut [T]) {
        if let Some(cmp) = &self.order {
            records.sort_by(|a, b| cmp(a, b));
        }
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive equality.
pub fn eq_ignore_case(value: &str, expected: &str) -> bool {
    value.to_lowercase() == expected.to_lowercase()
}

/// Case-insensitive substring match.
pub fn contains_ignore_case(value: &str, part: &str) -> bool {
    value.to_lowercase().contains(&part.to_lowercase())
}

/// Case-insensitive prefix match.
pub fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Inclusive range match.
pub fn between<K: PartialOrd>(value: K, start: K, end: K) -> bool {
    value >= start && value <= end
}
