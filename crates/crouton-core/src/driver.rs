//! The background task that owns the toast sequence.
//!
//! The driver is the single mutator of a [`Toasts`] instance: it drains the
//! message channel, runs `update`, executes the returned commands (spawning
//! timer futures that feed back into the same channel), and publishes a
//! snapshot of the sequence over a watch channel for renderers.

use crate::command::{Command, CommandInner};
use crate::manager::{ManagerOptions, Message, Toasts};
use crate::toast::Toast;
use tokio::sync::{mpsc, watch};

pub(crate) struct Driver {
    toasts: Toasts,
    msg_tx: mpsc::UnboundedSender<Message>,
    msg_rx: mpsc::UnboundedReceiver<Message>,
    state_tx: watch::Sender<Vec<Toast>>,
}

/// Spawn a driver task onto the current tokio runtime and return its channel
/// endpoints. Panics outside a runtime context (callers check first).
pub(crate) fn spawn(
    options: ManagerOptions,
) -> (
    mpsc::UnboundedSender<Message>,
    watch::Receiver<Vec<Toast>>,
) {
    let (msg_tx, msg_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(Vec::new());
    let driver = Driver {
        toasts: Toasts::with_options(options),
        msg_tx: msg_tx.clone(),
        msg_rx,
        state_tx,
    };
    tokio::spawn(driver.run());
    (msg_tx, state_rx)
}

impl Driver {
    async fn run(mut self) {
        while let Some(msg) = self.msg_rx.recv().await {
            self.process_message(msg);

            // Micro-batch: drain already-queued messages before publishing,
            // so a burst of shows produces one snapshot, not five.
            let mut batch_count = 0u32;
            while batch_count < 100 {
                match self.msg_rx.try_recv() {
                    Ok(msg) => {
                        self.process_message(msg);
                        batch_count += 1;
                    }
                    Err(_) => break,
                }
            }

            self.publish();
        }
    }

    fn process_message(&mut self, msg: Message) {
        tracing::trace!(?msg, "processing toast message");
        let cmd = self.toasts.update(msg);
        self.execute_command(cmd);
    }

    fn execute_command(&mut self, cmd: Command<Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Future(fut) => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let msg = fut.await;
                    let _ = tx.send(msg);
                });
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.toasts.toasts().to_vec());
    }
}
