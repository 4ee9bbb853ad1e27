//! Terminal User Interface for gbt

mod render;

pub use render::render;

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};

use anyhow::Result;
use ratatui::crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, info, warn};

use crate::app::{App, Dispatcher, Handler, Message};
use crate::git::Gateway;

/// Run the TUI application until the operator quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: App, gateway: Arc<dyn Gateway>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        restore_terminal();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            return Err(e.into());
        }
    };

    let (sender, receiver) = mpsc::channel();
    let dispatcher = Dispatcher::new(gateway, sender.clone(), app.config.log_limit);
    let stop = Arc::new(AtomicBool::new(false));
    let input = Handler::default().spawn(sender, Arc::clone(&stop));

    let result = match input {
        Ok(_) => run_loop(&mut terminal, &mut app, &dispatcher, &receiver),
        Err(e) => Err(e.into()),
    };

    // The input thread notices within one poll interval; don't wait for it
    stop.store(true, Ordering::Relaxed);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Exiting");
    result
}

/// Best-effort restore when setup fails half way
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!("Failed to leave alternate screen: {e}");
    }
}

/// Draw, wait for a message, apply it and everything queued behind it,
/// dispatch what the controller asked for, repeat
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher,
    receiver: &Receiver<Message>,
) -> Result<()> {
    let size = terminal.size()?;
    app.update(Message::Resize {
        width: size.width,
        height: size.height,
    });
    dispatcher.dispatch_all(app.init());

    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let Ok(first) = receiver.recv() else {
            debug!("All senders gone, stopping");
            break;
        };

        for message in std::iter::once(first).chain(receiver.try_iter()) {
            dispatcher.dispatch_all(app.update(message));
            if app.should_quit {
                return Ok(());
            }
        }
    }

    Ok(())
}
