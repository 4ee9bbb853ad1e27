//! End-to-end tests: controller + dispatcher + CLI gateway on a real repository

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use gbt::app::{Command, Dispatcher, Message, Mode, NOT_A_REPOSITORY};
use gbt::config::Config;
use gbt::git::CliGateway;
use gbt::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::common::{TestFixture, drive};

fn setup(fixture: &TestFixture) -> (App, Dispatcher, Receiver<Message>) {
    let (sender, receiver) = mpsc::channel();
    let gateway = Arc::new(CliGateway::new(&fixture.repo_path));
    let config = Config::default();
    let dispatcher = Dispatcher::new(gateway, sender, config.log_limit);
    let mut app = App::new(config, "repo");
    app.update(Message::Resize {
        width: 100,
        height: 30,
    });
    (app, dispatcher, receiver)
}

fn key(code: KeyCode) -> Message {
    Message::KeyInput(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_startup_loads_branches_and_side_panel() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("topic")?;
    fixture.set_upstream("master")?;
    let (mut app, dispatcher, receiver) = setup(&fixture);

    let init = app.init();
    drive(&mut app, &dispatcher, &receiver, init)?;

    assert_eq!(app.status, "On master");
    assert_eq!(app.list.selected_name(), Some("master"));
    assert_eq!(app.panel.upstream.as_deref(), Some("origin/master"));
    assert!(app.panel.log_text.ends_with("Initial commit"));
    assert!(app.error.is_none());
    Ok(())
}

#[test]
fn test_selecting_branch_without_upstream() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("topic")?;
    fixture.set_upstream("master")?;
    let (mut app, dispatcher, receiver) = setup(&fixture);
    let init = app.init();
    drive(&mut app, &dispatcher, &receiver, init)?;

    let commands = app.update(key(KeyCode::Down));
    drive(&mut app, &dispatcher, &receiver, commands)?;

    assert_eq!(app.panel.branch.as_deref(), Some("topic"));
    assert!(app.panel.upstream.is_none());
    assert!(app.panel.log_text.is_empty());
    assert!(app.panel.log_error.is_none());
    Ok(())
}

#[test]
fn test_checkout_reloads_listing() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("topic")?;
    let (mut app, dispatcher, receiver) = setup(&fixture);
    let init = app.init();
    drive(&mut app, &dispatcher, &receiver, init)?;

    drive(
        &mut app,
        &dispatcher,
        &receiver,
        vec![Command::Checkout("topic".to_string())],
    )?;

    assert_eq!(fixture.current_branch()?, "topic");
    assert_eq!(app.current.as_deref(), Some("topic"));
    assert_eq!(app.status, "On topic");
    assert_eq!(app.list.selected_name(), Some("topic"));
    Ok(())
}

#[test]
fn test_confirmed_delete_removes_branch() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_branch("done")?;
    let (mut app, dispatcher, receiver) = setup(&fixture);
    let init = app.init();
    drive(&mut app, &dispatcher, &receiver, init)?;

    // "done" sorts before "master"
    let commands = app.update(key(KeyCode::Up));
    drive(&mut app, &dispatcher, &receiver, commands)?;
    assert_eq!(app.list.selected_name(), Some("done"));

    assert!(app.update(key(KeyCode::Backspace)).is_empty());
    assert_eq!(app.mode, Mode::ConfirmingDelete("done".to_string()));

    let commands = app.update(key(KeyCode::Backspace));
    drive(&mut app, &dispatcher, &receiver, commands)?;

    assert_eq!(fixture.branch_names()?, vec!["master"]);
    assert!(app.branches().iter().all(|b| b.name != "done"));
    assert_eq!(app.status, "Deleted “done”");
    assert!(app.error.is_none());
    Ok(())
}

#[test]
fn test_refused_delete_shows_git_error() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.create_unmerged_branch("wip")?;
    let (mut app, dispatcher, receiver) = setup(&fixture);
    let init = app.init();
    drive(&mut app, &dispatcher, &receiver, init)?;

    drive(
        &mut app,
        &dispatcher,
        &receiver,
        vec![Command::Delete("wip".to_string())],
    )?;

    let error = app.error.clone().unwrap_or_default();
    assert!(error.contains("not fully merged"), "got {error:?}");
    assert_eq!(fixture.branch_names()?, vec!["master", "wip"]);
    Ok(())
}

#[test]
fn test_outside_repository_reports_status() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::TempDir::new()?;
    let (sender, receiver) = mpsc::channel();
    let dispatcher = Dispatcher::new(Arc::new(CliGateway::new(dir.path())), sender, 5);
    let mut app = App::new(Config::default(), "nowhere");

    let init = app.init();
    drive(&mut app, &dispatcher, &receiver, init)?;

    // The temp dir may itself sit inside a repository on some machines
    if app.error.is_some() {
        assert_eq!(app.status, NOT_A_REPOSITORY);
        assert!(app.branches().is_empty());
    }
    Ok(())
}
