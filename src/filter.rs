//! Todo Filtering
//!
//! Status filter for the todo list and the counters shown in the footer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::Todo;

/// Which todos the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterStatus {
    #[default]
    All,
    Active,
    Completed,
}

/// Returned when a tag does not name a filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter status: {0:?}")]
pub struct UnknownFilter(pub String);

impl FilterStatus {
    /// All statuses in display order
    pub const ALL: [FilterStatus; 3] = [FilterStatus::All, FilterStatus::Active, FilterStatus::Completed];

    pub fn tag(self) -> &'static str {
        match self {
            FilterStatus::All => "all",
            FilterStatus::Active => "active",
            FilterStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterStatus::All => "All",
            FilterStatus::Active => "Active",
            FilterStatus::Completed => "Completed",
        }
    }

    /// Location hash the filter link points at
    pub fn href(self) -> &'static str {
        match self {
            FilterStatus::All => "#/",
            FilterStatus::Active => "#/active",
            FilterStatus::Completed => "#/completed",
        }
    }

    /// `data-cy` hook of the filter link
    pub fn link_id(self) -> &'static str {
        match self {
            FilterStatus::All => "FilterLinkAll",
            FilterStatus::Active => "FilterLinkActive",
            FilterStatus::Completed => "FilterLinkCompleted",
        }
    }

    /// Map `window.location.hash` to a status
    pub fn from_hash(hash: &str) -> Option<Self> {
        match hash {
            "" | "#" | "#/" => Some(FilterStatus::All),
            "#/active" => Some(FilterStatus::Active),
            "#/completed" => Some(FilterStatus::Completed),
            _ => None,
        }
    }

    /// Whether a todo passes this filter
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterStatus::All => true,
            FilterStatus::Active => !todo.completed,
            FilterStatus::Completed => todo.completed,
        }
    }
}

impl FromStr for FilterStatus {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterStatus::All),
            "active" => Ok(FilterStatus::Active),
            "completed" => Ok(FilterStatus::Completed),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Order-preserving subsequence of `todos` selected by `status`
pub fn filter_todos(todos: &[Todo], status: FilterStatus) -> Vec<Todo> {
    match status {
        FilterStatus::All => todos.to_vec(),
        _ => todos.iter().filter(|todo| status.matches(todo)).cloned().collect(),
    }
}

pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| todo.completed).count()
}

/// Footer counter text
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    #[test]
    fn test_filter_active_example() {
        let todos = vec![make_todo(1, true), make_todo(2, false)];

        let active = filter_todos(&todos, FilterStatus::Active);

        assert_eq!(active, vec![make_todo(2, false)]);
    }

    #[test]
    fn test_filter_keeps_order() {
        let todos = vec![
            make_todo(5, true),
            make_todo(3, false),
            make_todo(9, true),
            make_todo(1, false),
        ];

        let ids: Vec<u32> = filter_todos(&todos, FilterStatus::Completed).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 9]);

        let ids: Vec<u32> = filter_todos(&todos, FilterStatus::Active).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_filter_empty_list() {
        for status in FilterStatus::ALL {
            assert!(filter_todos(&[], status).is_empty());
        }
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("all".parse::<FilterStatus>(), Ok(FilterStatus::All));
        assert_eq!("active".parse::<FilterStatus>(), Ok(FilterStatus::Active));
        assert_eq!("completed".parse::<FilterStatus>(), Ok(FilterStatus::Completed));
    }

    #[test]
    fn test_parse_unknown_tag_fails() {
        assert_eq!("done".parse::<FilterStatus>(), Err(UnknownFilter("done".to_string())));
        // Tags are case-sensitive
        assert!("Active".parse::<FilterStatus>().is_err());
        assert!("".parse::<FilterStatus>().is_err());
    }

    #[test]
    fn test_tag_roundtrip_and_display() {
        for status in FilterStatus::ALL {
            assert_eq!(status.tag().parse::<FilterStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.tag());
        }
    }

    #[test]
    fn test_from_hash() {
        assert_eq!(FilterStatus::from_hash(""), Some(FilterStatus::All));
        assert_eq!(FilterStatus::from_hash("#"), Some(FilterStatus::All));
        assert_eq!(FilterStatus::from_hash("#/"), Some(FilterStatus::All));
        assert_eq!(FilterStatus::from_hash("#/active"), Some(FilterStatus::Active));
        assert_eq!(FilterStatus::from_hash("#/completed"), Some(FilterStatus::Completed));
        assert_eq!(FilterStatus::from_hash("#/archived"), None);

        for status in FilterStatus::ALL {
            assert_eq!(FilterStatus::from_hash(status.href()), Some(status));
        }
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(FilterStatus::default(), FilterStatus::All);
    }

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(4), "4 items left");
    }

    #[test]
    fn test_counts() {
        let todos = vec![make_todo(1, true), make_todo(2, false), make_todo(3, false)];
        assert_eq!(active_count(&todos), 2);
        assert_eq!(completed_count(&todos), 1);
    }

    fn arb_todos() -> impl Strategy<Value = Vec<Todo>> {
        prop::collection::vec(any::<bool>(), 0..40).prop_map(|flags| {
            flags
                .into_iter()
                .enumerate()
                .map(|(i, completed)| make_todo(i as u32, completed))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_all_is_identity(todos in arb_todos()) {
            prop_assert_eq!(filter_todos(&todos, FilterStatus::All), todos);
        }

        #[test]
        fn prop_filter_is_idempotent(todos in arb_todos()) {
            for status in FilterStatus::ALL {
                let once = filter_todos(&todos, status);
                let twice = filter_todos(&once, status);
                prop_assert_eq!(once, twice);
            }
        }

        #[test]
        fn prop_active_and_completed_partition(todos in arb_todos()) {
            let active = filter_todos(&todos, FilterStatus::Active);
            let completed = filter_todos(&todos, FilterStatus::Completed);

            prop_assert!(active.iter().all(|t| !t.completed));
            prop_assert!(completed.iter().all(|t| t.completed));
            prop_assert!(active.iter().all(|a| completed.iter().all(|c| c.id != a.id)));

            let mut union: Vec<u32> = active.iter().chain(completed.iter()).map(|t| t.id).collect();
            union.sort_unstable();
            let mut original: Vec<u32> = todos.iter().map(|t| t.id).collect();
            original.sort_unstable();
            prop_assert_eq!(union, original);
        }

        #[test]
        fn prop_counts_add_up(todos in arb_todos()) {
            prop_assert_eq!(active_count(&todos) + completed_count(&todos), todos.len());
            prop_assert_eq!(active_count(&todos), filter_todos(&todos, FilterStatus::Active).len());
        }
    }
}
