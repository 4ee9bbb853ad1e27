//! Test fixture for setting up temporary git repositories

use std::fs;
use std::path::{Path, PathBuf};

use git2::build::CheckoutBuilder;
use git2::{BranchType, Oid, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// Test fixture that sets up a temporary git repository with one commit on
/// `master` and a fake `origin` remote
pub struct TestFixture {
    /// Temporary directory containing the git repo
    _temp_dir: TempDir,
    /// Path to the git repository
    pub repo_path: PathBuf,
    repo: Repository,
}

impl TestFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        // Canonicalize to handle symlinked temp dirs.
        let repo_path = temp_dir
            .path()
            .canonicalize()
            .unwrap_or_else(|_| temp_dir.path().to_path_buf());

        // Pin the default branch; it is user-configurable.
        let mut init_opts = RepositoryInitOptions::new();
        init_opts.initial_head("master");
        let repo = Repository::init_opts(&repo_path, &init_opts)?;
        repo.set_head("refs/heads/master")?;

        {
            let mut config = repo.config()?;
            config.set_str("user.name", "Test")?;
            config.set_str("user.email", "test@test.com")?;
        }

        // Never contacted; only gives upstream refs a remote to belong to
        repo.remote("origin", "https://example.invalid/repo.git")?;

        let fixture = Self {
            _temp_dir: temp_dir,
            repo_path,
            repo,
        };
        fixture.commit_file("README.md", "# Test Repository\n", "Initial commit")?;
        Ok(fixture)
    }

    /// Commit `contents` to `name` on the checked-out branch
    pub fn commit_file(
        &self,
        name: &str,
        contents: &str,
        message: &str,
    ) -> Result<Oid, Box<dyn std::error::Error>> {
        fs::write(self.repo_path.join(name), contents)?;

        let mut index = self.repo.index()?;
        index.add_path(Path::new(name))?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let sig = Signature::now("Test", "test@test.com")?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(_) => None,
        };
        let parents: Vec<_> = parent.iter().collect();
        Ok(self
            .repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)?)
    }

    /// Create `name` at the current HEAD without checking it out
    pub fn create_branch(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo.branch(name, &head, false)?;
        Ok(())
    }

    /// Create `name` with one extra commit that `master` doesn't have
    pub fn create_unmerged_branch(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.create_branch(name)?;
        self.checkout(name)?;
        let file = format!("{}.txt", name.replace('/', "-"));
        self.commit_file(&file, "work in progress\n", &format!("Work on {name}"))?;
        self.checkout("master")
    }

    /// Point `HEAD` at `name` and update the work tree
    pub fn checkout(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let refname = format!("refs/heads/{name}");
        let object = self.repo.revparse_single(&refname)?;
        let mut opts = CheckoutBuilder::new();
        opts.force();
        self.repo.checkout_tree(&object, Some(&mut opts))?;
        self.repo.set_head(&refname)?;
        Ok(())
    }

    /// Give `name` an upstream `origin/<name>` at the branch's own tip
    pub fn set_upstream(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        let tip = self.repo.revparse_single(&format!("refs/heads/{name}"))?.id();
        self.repo.reference(
            &format!("refs/remotes/origin/{name}"),
            tip,
            true,
            "fake fetch",
        )?;
        let mut branch = self.repo.find_branch(name, BranchType::Local)?;
        branch.set_upstream(Some(&format!("origin/{name}")))?;
        Ok(())
    }

    /// Local branch names, sorted
    pub fn branch_names(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let mut names = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Name of the checked-out branch
    pub fn current_branch(&self) -> Result<String, Box<dyn std::error::Error>> {
        let head = self.repo.head()?;
        Ok(head.shorthand().unwrap_or_default().to_string())
    }
}
