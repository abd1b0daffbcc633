//! Command channel between gesture handlers and the navigator that owns the
//! shared time-window state.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::TimeWindowCommand;
use crate::error::{TimelineError, TimelineResult};

/// Destination for navigation commands produced by input handling.
pub trait CommandSink {
    fn send_command(&mut self, command: TimeWindowCommand) -> TimelineResult<()>;
}

/// Collects commands in memory; handy for headless hosts and tests.
impl CommandSink for Vec<TimeWindowCommand> {
    fn send_command(&mut self, command: TimeWindowCommand) -> TimelineResult<()> {
        self.push(command);
        Ok(())
    }
}

/// Cloneable, `Send` handle feeding commands into a `TimeNavigator`.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<TimeWindowCommand>,
}

impl CommandSender {
    /// Enqueues `command`; fails once the receiving navigator is dropped.
    pub fn send(&self, command: TimeWindowCommand) -> TimelineResult<()> {
        self.tx
            .send(command)
            .map_err(|_| TimelineError::ChannelClosed)
    }
}

impl CommandSink for CommandSender {
    fn send_command(&mut self, command: TimeWindowCommand) -> TimelineResult<()> {
        self.send(command)
    }
}

/// Creates a connected sender/receiver pair.
#[must_use]
pub fn command_channel() -> (CommandSender, Receiver<TimeWindowCommand>) {
    let (tx, rx) = mpsc::channel();
    (CommandSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::{CommandSink, command_channel};
    use crate::core::TimeWindowCommand;
    use crate::error::TimelineError;

    #[test]
    fn sender_reports_closed_channel() {
        let (sender, receiver) = command_channel();
        sender.send(TimeWindowCommand::ClearFocus).expect("open channel");
        assert_eq!(receiver.try_recv().ok(), Some(TimeWindowCommand::ClearFocus));

        drop(receiver);
        assert!(matches!(
            sender.send(TimeWindowCommand::ResetVisibleWindow),
            Err(TimelineError::ChannelClosed)
        ));
    }

    #[test]
    fn vec_sink_records_commands_in_order() {
        let mut sink = Vec::new();
        sink.send_command(TimeWindowCommand::ClearFocus).expect("push");
        sink.send_command(TimeWindowCommand::ResetVisibleWindow).expect("push");
        assert_eq!(
            sink,
            vec![
                TimeWindowCommand::ClearFocus,
                TimeWindowCommand::ResetVisibleWindow
            ]
        );
    }
}
