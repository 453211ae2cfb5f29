use futures::future::BoxFuture;
use std::future::Future;

/// A side effect returned from [`Toasts::update`](crate::manager::Toasts::update).
///
/// Commands describe work the [driver](crate::notifier) performs on the
/// manager's behalf: immediate follow-up messages, async futures (one-shot
/// timers), or batches of either. The manager itself stays a pure state
/// machine; every timer and deferred removal flows through a `Command`.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Deliver a message after a delay:
/// let cmd = Command::tick(Duration::from_millis(300), move |_| Message::Remove(id));
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Future(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately (no async).
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Run an async future, map the result to a message.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command {
            inner: CommandInner::Future(Box::pin(async move { map(future.await) })),
        }
    }

    /// One-shot timer: fires once after `duration`, mapping the instant to a
    /// message. This is the auto-dismiss and exit-window primitive.
    pub fn tick(
        duration: std::time::Duration,
        map: impl FnOnce(std::time::Instant) -> Msg + Send + 'static,
    ) -> Self {
        Command::perform(
            async move {
                tokio::time::sleep(duration).await;
                std::time::Instant::now()
            },
            map,
        )
    }

    /// Run multiple commands concurrently.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().filter(|cmd| !cmd.is_none()).collect();
        if cmds.is_empty() {
            return Command::none();
        }
        if cmds.len() == 1 {
            let mut cmds = cmds;
            return cmds.pop().unwrap();
        }
        Command {
            inner: CommandInner::Batch(cmds),
        }
    }

    /// Transform the message type (for embedding the manager's messages in a
    /// host application's message enum).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(std::sync::Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: std::sync::Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Future(fut) => Command {
                inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
            },
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}
