//! Title search over the retained snapshot.

use plank_core::Task;

/// Case-insensitive substring match on titles only.
///
/// Stateless projection: the caller supplies the snapshot captured at the
/// last successful refetch and gets back the matching subsequence, in
/// snapshot order. Descriptions and other fields never match.
pub fn filter_by_title(snapshot: &[Task], term: &str) -> Vec<Task> {
    let needle = term.to_lowercase();
    snapshot
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plank_core::{ColumnId, TaskId};

    fn task(id: &str, title: &str, description: Option<&str>) -> Task {
        Task {
            id: TaskId::from(id),
            project_id: None,
            title: title.to_string(),
            description: description.map(str::to_string),
            status: ColumnId::from("TODO"),
            assignee_id: None,
            reporter_id: None,
            issue_type: None,
            start_date: None,
            due_date: None,
            tag: None,
            labels: Vec::new(),
        }
    }

    #[test]
    fn match_is_case_insensitive() {
        let snapshot = vec![task("1", "Bugfix", None), task("2", "Feature", None)];
        let hits = filter_by_title(&snapshot, "bug");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, TaskId::from("1"));
    }

    #[test]
    fn description_does_not_match() {
        let snapshot = vec![task("1", "Feature", Some("bug"))];
        assert!(filter_by_title(&snapshot, "bug").is_empty());
    }

    #[test]
    fn empty_term_matches_everything_in_order() {
        let snapshot = vec![task("1", "A", None), task("2", "B", None)];
        let hits = filter_by_title(&snapshot, "");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, TaskId::from("1"));
    }

    #[test]
    fn substring_matches_anywhere_in_title() {
        let snapshot = vec![task("1", "Login BUG on mobile", None)];
        assert_eq!(filter_by_title(&snapshot, "bug").len(), 1);
        assert_eq!(filter_by_title(&snapshot, "mobile").len(), 1);
        assert!(filter_by_title(&snapshot, "desktop").is_empty());
    }
}
