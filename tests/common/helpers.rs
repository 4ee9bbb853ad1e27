//! Helpers for driving the controller against a real gateway

use std::sync::mpsc::Receiver;
use std::time::Duration;

use gbt::App;
use gbt::app::{Command, Dispatcher, Message};

/// Generous bound for a single git invocation on a loaded CI machine
const RESULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Dispatch `commands`, then feed every result back into `app` (dispatching
/// whatever it asks for next) until nothing is in flight.
///
/// Every command answers with exactly one message, so counting is enough to
/// know when the system is quiescent.
pub fn drive(
    app: &mut App,
    dispatcher: &Dispatcher,
    receiver: &Receiver<Message>,
    commands: Vec<Command>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut in_flight = commands.len();
    dispatcher.dispatch_all(commands);

    while in_flight > 0 {
        let message = receiver.recv_timeout(RESULT_TIMEOUT)?;
        in_flight -= 1;

        let next = app.update(message);
        in_flight += next.len();
        dispatcher.dispatch_all(next);
    }
    Ok(())
}
