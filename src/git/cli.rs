//! Gateway backed by the `git` binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use super::{Error, Gateway, Listing, Result};

/// Build a `git` command with output that is stable to parse
fn git_command() -> Command {
    let mut cmd = Command::new("git");
    cmd.env("GIT_TERMINAL_PROMPT", "0")
        .env("LC_ALL", "C")
        .arg("-c")
        .arg("color.ui=false");
    cmd
}

fn describe(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}

fn failure(args: &[&str], output: &Output) -> Error {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let message = if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr.to_string()
    };

    if message.contains("not a git repository") {
        return Error::RepositoryUnavailable(message);
    }

    Error::Command {
        command: describe(args),
        message,
    }
}

/// Run git in `dir` and return stdout with trailing newlines removed
fn git_output(dir: &Path, args: &[&str]) -> Result<String> {
    debug!(dir = %dir.display(), command = %describe(args), "running git");
    let output = git_command()
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::Spawn(e.to_string()))?;

    if !output.status.success() {
        return Err(failure(args, &output));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .trim_end_matches('\n')
        .to_string())
}

/// Run git in `dir`, discarding stdout
fn git_run(dir: &Path, args: &[&str]) -> Result<()> {
    git_output(dir, args).map(|_| ())
}

/// [`Gateway`] that shells out to `git` inside a repository work tree
#[derive(Debug, Clone)]
pub struct CliGateway {
    root: PathBuf,
}

impl CliGateway {
    /// Create a gateway that runs git in `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Gateway for CliGateway {
    fn list_branches(&self) -> Result<Listing> {
        let output = git_output(
            &self.root,
            &[
                "for-each-ref",
                "--format=%(HEAD)%09%(refname:short)",
                "refs/heads",
            ],
        )?;
        Ok(Listing::parse(&output))
    }

    fn resolve_upstream(&self, branch: &str) -> Result<Option<String>> {
        let refname = format!("refs/heads/{branch}");
        let output = git_output(
            &self.root,
            &["for-each-ref", "--format=%(upstream:short)", &refname],
        )?;
        let upstream = output.trim();
        Ok((!upstream.is_empty()).then(|| upstream.to_string()))
    }

    fn recent_commits(&self, reference: &str, limit: usize) -> Result<Vec<String>> {
        let count = limit.to_string();
        let output = git_output(
            &self.root,
            &[
                "log",
                "-n",
                &count,
                "--no-color",
                "--format=%h %s",
                reference,
                "--",
            ],
        )?;
        Ok(output
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        git_run(&self.root, &["checkout", branch])
    }

    fn delete_branch(&self, branch: &str) -> Result<()> {
        git_run(&self.root, &["branch", "-d", branch])
    }
}
