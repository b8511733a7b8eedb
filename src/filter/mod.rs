//! Predicate composition over static record slices.
//!
//! A view pairs a `'static` slice with a criteria value. The filtered result
//! is recomputed from scratch on every call, so it can never drift from the
//! criteria. Each criteria type is a conjunction of independent predicates;
//! its `Default` is the identity filter.

use std::collections::BTreeSet;

/// A set of predicates over `T` that must all hold.
pub trait Criteria<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when any of `fields` contains `needle`, ignoring case.
pub fn any_field_contains<'a>(fields: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub struct FilterView<T: 'static, C> {
    records: &'static [T],
    pub criteria: C,
    selected: usize,
}

impl<T: 'static, C: Criteria<T> + Default> FilterView<T, C> {
    pub fn new(records: &'static [T]) -> Self {
        Self {
            records,
            criteria: C::default(),
            selected: 0,
        }
    }

    pub fn records(&self) -> &'static [T] {
        self.records
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Records satisfying the criteria, in slice order.
    pub fn results(&self) -> Vec<&'static T> {
        self.records
            .iter()
            .filter(|record| self.criteria.matches(record))
            .collect()
    }

    pub fn count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| self.criteria.matches(record))
            .count()
    }

    /// Reset every criterion at once.
    pub fn clear_filters(&mut self) {
        self.criteria = C::default();
        self.selected = 0;
    }

    /// Selection index clamped to the current result count.
    pub fn selected_index(&self) -> Option<usize> {
        let count = self.count();
        if count == 0 {
            None
        } else {
            Some(self.selected.min(count - 1))
        }
    }

    pub fn selected(&self) -> Option<&'static T> {
        let idx = self.selected_index()?;
        self.results().get(idx).copied()
    }

    pub fn select_next(&mut self) {
        if let Some(idx) = self.selected_index() {
            self.selected = (idx + 1).min(self.count() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(idx) = self.selected_index() {
            self.selected = idx.saturating_sub(1);
        }
    }
}

/// Inclusive numeric range inside fixed bounds, moved in whole steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    pub min: u32,
    pub max: u32,
    bounds: (u32, u32),
    step: u32,
}

impl RangeFilter {
    pub fn new(lower: u32, upper: u32, step: u32) -> Self {
        Self {
            min: lower,
            max: upper,
            bounds: (lower, upper),
            step: step.max(1),
        }
    }

    pub fn bounds(&self) -> (u32, u32) {
        self.bounds
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// True when `[low, high]` shares at least one point with the range. A
    /// range whose max sits at the upper bound is open-ended.
    pub fn overlaps(&self, low: u32, high: u32) -> bool {
        let upper_open = self.max >= self.bounds.1;
        high >= self.min && (upper_open || low <= self.max)
    }

    pub fn raise_min(&mut self) {
        self.min = (self.min + self.step).min(self.max);
    }

    pub fn lower_min(&mut self) {
        self.min = self.min.saturating_sub(self.step).max(self.bounds.0);
    }

    pub fn raise_max(&mut self) {
        self.max = (self.max + self.step).min(self.bounds.1);
    }

    pub fn lower_max(&mut self) {
        self.max = self.max.saturating_sub(self.step).max(self.min);
    }
}

/// Membership against a set of selected tags. Nothing selected admits all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet<T: Ord> {
    selected: BTreeSet<T>,
}

impl<T: Ord> Default for TagSet<T> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Copy> TagSet<T> {
    pub fn toggle(&mut self, tag: T) {
        if !self.selected.remove(&tag) {
            self.selected.insert(tag);
        }
    }

    pub fn is_selected(&self, tag: T) -> bool {
        self.selected.contains(&tag)
    }

    pub fn admits(&self, tag: T) -> bool {
        self.selected.is_empty() || self.selected.contains(&tag)
    }
}

/// One-of selector with an implicit leading "All" option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice<T: 'static> {
    options: &'static [(&'static str, T)],
    selected: Option<usize>,
}

impl<T: Copy + 'static> Choice<T> {
    pub const fn new(options: &'static [(&'static str, T)]) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn value(&self) -> Option<T> {
        self.selected.map(|idx| self.options[idx].1)
    }

    pub fn label(&self) -> &'static str {
        self.label_or("All")
    }

    /// Label of the chosen option, or `placeholder` when nothing is chosen.
    pub fn label_or(&self, placeholder: &'static str) -> &'static str {
        match self.selected {
            Some(idx) => self.options[idx].0,
            None => placeholder,
        }
    }

    pub fn next(&mut self) {
        self.selected = match self.selected {
            None if !self.options.is_empty() => Some(0),
            Some(idx) if idx + 1 < self.options.len() => Some(idx + 1),
            _ => None,
        };
    }

    pub fn prev(&mut self) {
        self.selected = match self.selected {
            None => self.options.len().checked_sub(1),
            Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
    }

    /// Run `pred` against the chosen value; "All" admits everything.
    pub fn admits(&self, pred: impl FnOnce(T) -> bool) -> bool {
        self.value().map_or(true, pred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TextInput;

    struct Fruit {
        name: &'static str,
        weight: u32,
    }

    const FRUITS: &[Fruit] = &[
        Fruit {
            name: "Apple",
            weight: 150,
        },
        Fruit {
            name: "Banana",
            weight: 120,
        },
        Fruit {
            name: "apricot",
            weight: 40,
        },
    ];

    struct FruitCriteria {
        search: TextInput,
        weight: RangeFilter,
    }

    impl Default for FruitCriteria {
        fn default() -> Self {
            Self {
                search: TextInput::new(),
                weight: RangeFilter::new(0, 200, 10),
            }
        }
    }

    impl Criteria<Fruit> for FruitCriteria {
        fn matches(&self, item: &Fruit) -> bool {
            contains_ignore_case(item.name, self.search.value()) && self.weight.contains(item.weight)
        }
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let view: FilterView<Fruit, FruitCriteria> = FilterView::new(FRUITS);
        let names: Vec<_> = view.results().iter().map(|f| f.name).collect();
        assert_eq!(names, ["Apple", "Banana", "apricot"]);
    }

    #[test]
    fn test_narrowing_keeps_order_and_clear_restores() {
        let mut view: FilterView<Fruit, FruitCriteria> = FilterView::new(FRUITS);
        view.criteria.search.set("AP");
        let names: Vec<_> = view.results().iter().map(|f| f.name).collect();
        assert_eq!(names, ["Apple", "apricot"]);

        view.criteria.weight.raise_min();
        for _ in 0..5 {
            view.criteria.weight.raise_min();
        }
        assert_eq!(view.count(), 1);

        view.clear_filters();
        assert_eq!(view.count(), FRUITS.len());
        let weight = &view.criteria.weight;
        assert_eq!((weight.min, weight.max), weight.bounds());
    }

    #[test]
    fn test_selection_clamps_to_results() {
        let mut view: FilterView<Fruit, FruitCriteria> = FilterView::new(FRUITS);
        view.select_next();
        view.select_next();
        view.select_next();
        assert_eq!(view.selected_index(), Some(2));
        view.criteria.search.set("banana");
        assert_eq!(view.selected().map(|f| f.name), Some("Banana"));
        view.criteria.search.set("kiwi");
        assert_eq!(view.selected_index(), None);
    }

    #[test]
    fn test_range_overlap_upper_bound_is_open() {
        let mut range = RangeFilter::new(0, 200, 10);
        assert!(range.overlaps(250, 300));
        range.lower_max();
        assert!(!range.overlaps(250, 300));
        assert!(range.overlaps(150, 250));
        range.min = 100;
        assert!(!range.overlaps(50, 90));
    }

    #[test]
    fn test_range_steps_stay_ordered() {
        let mut range = RangeFilter::new(0, 20, 10);
        range.raise_min();
        range.raise_min();
        range.raise_min();
        assert_eq!((range.min, range.max), (20, 20));
        range.lower_max();
        assert_eq!(range.max, 20);
        range.lower_min();
        range.lower_min();
        range.lower_min();
        assert_eq!(range.min, 0);
    }

    #[test]
    fn test_tag_set_and_choice() {
        let mut tags = TagSet::default();
        assert!(tags.admits(3));
        tags.toggle(3);
        assert!(tags.admits(3));
        assert!(!tags.admits(4));
        tags.toggle(3);
        assert!(tags.admits(4));

        const OPTS: &[(&str, u8)] = &[("one", 1), ("two", 2)];
        let mut choice = Choice::new(OPTS);
        assert_eq!(choice.label(), "All");
        assert!(choice.admits(|v| v == 9));
        choice.next();
        choice.next();
        assert_eq!(choice.value(), Some(2));
        choice.next();
        assert_eq!(choice.value(), None);
        choice.prev();
        assert_eq!(choice.label(), "two");
        assert!(!choice.admits(|v| v == 1));
    }

    #[test]
    fn test_any_field_contains() {
        assert!(any_field_contains(["TechCorp", "React"], "react"));
        assert!(!any_field_contains(["TechCorp"], "rust"));
        assert!(any_field_contains(std::iter::empty(), ""));
    }
}
