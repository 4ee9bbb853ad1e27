//! Tests for the git CLI gateway

use gbt::git::{CliGateway, Error, Gateway};

use crate::common::TestFixture;

#[test]
fn test_list_branches_marks_current() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("feature/x")?;
    fixture.create_branch("topic")?;
    let gateway = CliGateway::new(&fixture.repo_path);

    let listing = gateway.list_branches()?;

    let names: Vec<&str> = listing.branches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["feature/x", "master", "topic"]);
    assert_eq!(listing.current.as_deref(), Some("master"));
    assert!(
        listing
            .branches
            .iter()
            .all(|b| b.is_current == (b.name == "master"))
    );
    Ok(())
}

#[test]
fn test_resolve_upstream() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("tracked")?;
    fixture.set_upstream("tracked")?;
    let gateway = CliGateway::new(&fixture.repo_path);

    assert_eq!(gateway.resolve_upstream("master")?, None);
    assert_eq!(
        gateway.resolve_upstream("tracked")?.as_deref(),
        Some("origin/tracked")
    );
    Ok(())
}

#[test]
fn test_recent_commits_of_upstream() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    for i in 1..=3 {
        fixture.commit_file("notes.txt", &format!("{i}\n"), &format!("Change {i}"))?;
    }
    fixture.set_upstream("master")?;
    let gateway = CliGateway::new(&fixture.repo_path);

    let lines = gateway.recent_commits("origin/master", 2)?;

    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" Change 3"), "got {lines:?}");
    assert!(lines[1].ends_with(" Change 2"), "got {lines:?}");
    let (hash, _) = lines[0].split_once(' ').unwrap_or_default();
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    Ok(())
}

#[test]
fn test_recent_commits_of_unknown_ref_fails() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let gateway = CliGateway::new(&fixture.repo_path);

    let err = gateway
        .recent_commits("origin/nowhere", 5)
        .err()
        .ok_or("expected an error")?;
    assert!(matches!(err, Error::Command { .. }), "got {err:?}");
    assert!(!err.to_string().is_empty());
    Ok(())
}

#[test]
fn test_checkout_switches_branch() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("topic")?;
    let gateway = CliGateway::new(&fixture.repo_path);

    gateway.checkout("topic")?;

    assert_eq!(fixture.current_branch()?, "topic");
    assert_eq!(gateway.list_branches()?.current.as_deref(), Some("topic"));
    Ok(())
}

#[test]
fn test_checkout_unknown_branch_fails() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let gateway = CliGateway::new(&fixture.repo_path);

    let err = gateway.checkout("nope").err().ok_or("expected an error")?;
    assert!(matches!(err, Error::Command { .. }), "got {err:?}");
    assert_eq!(fixture.current_branch()?, "master");
    Ok(())
}

#[test]
fn test_delete_merged_branch() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("done")?;
    let gateway = CliGateway::new(&fixture.repo_path);

    gateway.delete_branch("done")?;

    assert_eq!(fixture.branch_names()?, vec!["master"]);
    Ok(())
}

#[test]
fn test_delete_unmerged_branch_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_unmerged_branch("wip")?;
    let gateway = CliGateway::new(&fixture.repo_path);

    let err = gateway.delete_branch("wip").err().ok_or("expected an error")?;

    assert!(err.to_string().contains("not fully merged"), "got {err}");
    assert_eq!(fixture.branch_names()?, vec!["master", "wip"]);
    Ok(())
}

#[test]
fn test_display_name_is_work_tree_folder() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let nested = fixture.repo_path.join("src");
    std::fs::create_dir_all(&nested)?;

    let expected = fixture
        .repo_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    assert_eq!(gbt::git::repo_display_name(&nested), expected);
    assert_eq!(gbt::git::repository_root(&nested)?, fixture.repo_path);
    Ok(())
}
