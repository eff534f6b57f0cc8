//! Filter selection for the todo list
//!
//! A list request carries up to three optional enum filters. Exactly one
//! [`FilterCombination`] is chosen for it by walking [`FILTER_RULES`] in order;
//! the first rule whose predicate holds wins, and [`FilterCombination::SearchOnly`]
//! applies when none does.
//!
//! The single-field priority and status rules come before the category
//! pairs, so `CategoryAndStatus` and `CategoryAndPriority` are never
//! selected. A request with category and priority filters by priority alone.

use crate::models::{Category, Priority, Status, TodoFilter};

/// One AND-combination of optional predicates applied on top of the text search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCombination {
    PriorityAndStatus,
    Priority,
    Status,
    CategoryAndStatus,
    Category,
    CategoryAndPriority,
    SearchOnly,
}

/// Column constrained by an equality predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterColumn {
    Status,
    Priority,
    Category,
}

impl FilterColumn {
    /// Column name in the `todo` table
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Category => "category",
        }
    }
}

impl FilterCombination {
    /// Equality predicates in the order they appear in the WHERE clause
    #[must_use]
    pub const fn columns(self) -> &'static [FilterColumn] {
        match self {
            Self::PriorityAndStatus => &[FilterColumn::Status, FilterColumn::Priority],
            Self::Priority => &[FilterColumn::Priority],
            Self::Status => &[FilterColumn::Status],
            Self::CategoryAndStatus => &[FilterColumn::Status, FilterColumn::Category],
            Self::Category => &[FilterColumn::Category],
            Self::CategoryAndPriority => &[FilterColumn::Priority, FilterColumn::Category],
            Self::SearchOnly => &[],
        }
    }
}

/// An ordered (predicate, combination) pair
#[derive(Debug, Clone, Copy)]
pub struct FilterRule {
    pub applies: fn(&TodoFilter) -> bool,
    pub combination: FilterCombination,
}

fn has_priority_and_status(f: &TodoFilter) -> bool {
    f.priority.is_some() && f.status.is_some()
}

fn has_priority(f: &TodoFilter) -> bool {
    f.priority.is_some()
}

fn has_status(f: &TodoFilter) -> bool {
    f.status.is_some()
}

fn has_category_and_status(f: &TodoFilter) -> bool {
    f.category.is_some() && f.status.is_some()
}

fn has_category(f: &TodoFilter) -> bool {
    f.category.is_some()
}

fn has_category_and_priority(f: &TodoFilter) -> bool {
    f.category.is_some() && f.priority.is_some()
}

/// The rule table, evaluated top to bottom
pub const FILTER_RULES: [FilterRule; 6] = [
    FilterRule {
        applies: has_priority_and_status,
        combination: FilterCombination::PriorityAndStatus,
    },
    FilterRule {
        applies: has_priority,
        combination: FilterCombination::Priority,
    },
    FilterRule {
        applies: has_status,
        combination: FilterCombination::Status,
    },
    FilterRule {
        applies: has_category_and_status,
        combination: FilterCombination::CategoryAndStatus,
    },
    FilterRule {
        applies: has_category,
        combination: FilterCombination::Category,
    },
    FilterRule {
        applies: has_category_and_priority,
        combination: FilterCombination::CategoryAndPriority,
    },
];

impl TodoFilter {
    /// Pick the filter combination for this request
    #[must_use]
    pub fn combination(&self) -> FilterCombination {
        FILTER_RULES
            .iter()
            .find(|rule| (rule.applies)(self))
            .map_or(FilterCombination::SearchOnly, |rule| rule.combination)
    }

    /// Bound value for an equality predicate, if the filter carries one
    #[must_use]
    pub fn value_for(&self, column: FilterColumn) -> Option<&'static str> {
        match column {
            FilterColumn::Status => self.status.map(Status::as_str),
            FilterColumn::Priority => self.priority.map(Priority::as_str),
            FilterColumn::Category => self.category.map(Category::as_str),
        }
    }
}

/// Builder for list filters
#[derive(Debug, Clone, Default)]
pub struct TodoQueryBuilder {
    filter: TodoFilter,
}

impl TodoQueryBuilder {
    /// Create a new query builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Substring to look for in the todo text
    #[must_use]
    pub fn search(mut self, query: &str) -> Self {
        self.filter.search = query.to_string();
        self
    }

    /// Filter by priority
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.filter.priority = Some(priority);
        self
    }

    /// Filter by status
    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.filter.status = Some(status);
        self
    }

    /// Filter by category
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.filter.category = Some(category);
        self
    }

    /// Build the final filter
    #[must_use]
    pub fn build(self) -> TodoFilter {
        self.filter
    }
}
