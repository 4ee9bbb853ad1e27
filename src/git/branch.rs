//! Local branch snapshots

/// A local branch as reported by a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// Short branch name (e.g. `feature/x`)
    pub name: String,
    /// Whether this branch is checked out in the working tree
    pub is_current: bool,
}

impl Branch {
    /// Create a branch snapshot
    #[must_use]
    pub fn new(name: impl Into<String>, is_current: bool) -> Self {
        Self {
            name: name.into(),
            is_current,
        }
    }
}

/// Result of listing the local branches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Branches in the order git reported them
    pub branches: Vec<Branch>,
    /// Checked-out branch, `None` on a detached HEAD
    pub current: Option<String>,
}

impl Listing {
    /// Parse `for-each-ref --format=%(HEAD)%09%(refname:short)` output.
    ///
    /// Each line is the HEAD marker (`*` or a space), a tab, and the branch name.
    #[must_use]
    pub fn parse(output: &str) -> Self {
        let mut branches = Vec::new();
        let mut current = None;

        for line in output.lines() {
            let line = line.trim_end_matches('\r');
            let Some((marker, name)) = line.split_once('\t') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            let is_current = marker.trim() == "*";
            if is_current {
                current = Some(name.to_string());
            }
            branches.push(Branch::new(name, is_current));
        }

        Self { branches, current }
    }
}
