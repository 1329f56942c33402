//! Grouping of commits by author.

use std::collections::HashMap;

use gitdaily_commit::CommitItem;

/// The commits of one author, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorGroup<'a> {
    /// The committer display name.
    pub author: &'a str,

    /// The author's commits.
    pub commits: Vec<&'a CommitItem>,
}

/// Groups commits by author.
///
/// Groups appear in the order their first commit appears in `commits`.
pub fn group_by_author(commits: &[CommitItem]) -> Vec<AuthorGroup<'_>> {
    let mut groups: Vec<AuthorGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for commit in commits {
        let slot = *index.entry(commit.author.as_str()).or_insert_with(|| {
            groups.push(AuthorGroup {
                author: commit.author.as_str(),
                commits: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].commits.push(commit);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn make_commit(author: &str, message: &str) -> CommitItem {
        let date = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 14, 12, 0, 0)
            .unwrap();
        CommitItem::new(message, author, date)
    }

    #[test]
    fn test_empty() {
        assert!(group_by_author(&[]).is_empty());
    }

    #[test]
    fn test_first_occurrence_order() {
        let commits = vec![
            make_commit("A", "one"),
            make_commit("B", "two"),
            make_commit("A", "three"),
        ];

        let groups = group_by_author(&commits);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].author, "A");
        assert_eq!(groups[1].author, "B");
        assert_eq!(groups[0].commits.len(), 2);
        assert_eq!(groups[0].commits[0].message, "one");
        assert_eq!(groups[0].commits[1].message, "three");
        assert_eq!(groups[1].commits[0].message, "two");
    }

    #[test]
    fn test_later_author_first_seen_late() {
        let commits = vec![
            make_commit("Zed", "z1"),
            make_commit("Zed", "z2"),
            make_commit("Amy", "a1"),
        ];

        let authors: Vec<_> = group_by_author(&commits)
            .iter()
            .map(|g| g.author)
            .collect();
        assert_eq!(authors, ["Zed", "Amy"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let commits = vec![make_commit("alice", "x"), make_commit("Alice", "y")];
        assert_eq!(group_by_author(&commits).len(), 2);
    }
}
