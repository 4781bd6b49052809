//! Bridges UI input to the runtime without blocking the event loop.
use game_core::Point;
use runtime::RuntimeHandle;
use tokio::{sync::mpsc, task::JoinHandle};

/// Command decoded from user input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UserCommand {
    Start,
    Fire(Point),
    Reload,
}

/// Spawns a task that submits queued commands to the runtime in order.
///
/// Outcomes are not returned here; they arrive on the `Session` topic like
/// every other command. The task ends when the sender is dropped or the
/// runtime goes away.
pub fn spawn_forwarder(
    handle: RuntimeHandle,
    mut rx: mpsc::Receiver<UserCommand>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            let result = match command {
                UserCommand::Start => handle.start_session().await,
                UserCommand::Fire(at) => handle.fire(at).await,
                UserCommand::Reload => handle.request_reload().await,
            };

            if let Err(e) = result {
                tracing::error!("Failed to submit {:?}: {}", command, e);
                break;
            }
        }
        tracing::debug!("Input forwarder stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::{Runtime, RuntimeConfig};

    #[tokio::test]
    async fn forwards_commands_in_order() {
        let runtime = Runtime::start(RuntimeConfig::default()).await.unwrap();
        let handle = runtime.handle();

        let (tx, rx) = mpsc::channel(4);
        let task = spawn_forwarder(handle.clone(), rx);

        tx.send(UserCommand::Start).await.unwrap();
        tx.send(UserCommand::Fire(Point::new(-900.0, -900.0)))
            .await
            .unwrap();
        drop(tx);
        task.await.unwrap();

        let state = handle.query_state().await.unwrap();
        assert!(state.is_playing());
        assert_eq!(state.ammo, 9);
    }
}
