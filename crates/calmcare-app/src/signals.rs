//! OS signal forwarding
//!
//! SIGINT, SIGTERM and SIGHUP (terminal closed) all end the session the
//! same way a Ctrl+C key press does: a [`Message::Quit`] on the channel.

use calmcare_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Spawn the listener; abort the returned handle on normal shutdown
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                if let Err(e) = forward_quit(&tx).await {
                    debug!("Dropping quit for {}: {}", name, e);
                }
            }
            Err(e) => error!("{}", e),
        }
    })
}

/// Hand a quit to the event loop; fails once the loop has dropped its receiver
async fn forward_quit(tx: &mpsc::Sender<Message>) -> Result<()> {
    tx.send(Message::Quit).await.map_err(|_| Error::ChannelClosed)
}

/// Wait for a termination signal and report which one arrived
async fn wait_for_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind)
                .map_err(|e| Error::signal(format!("Failed to listen for {}: {}", name, e)))
        };
        let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;
        let mut sighup = listen(SignalKind::hangup(), "SIGHUP")?;

        let name = tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
            _ = sighup.recv() => "SIGHUP",
        };
        Ok(name)
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::signal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_handler_stays_quiet_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        assert!(!handle.is_finished());
        handle.abort();
    }

    #[tokio::test]
    async fn test_forward_quit_delivers_message() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        forward_quit(&tx).await.unwrap();
        assert_eq!(rx.recv().await, Some(Message::Quit));
    }

    #[tokio::test]
    async fn test_forward_quit_after_loop_exit_is_channel_closed() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);
        let err = forward_quit(&tx).await.unwrap_err();
        assert!(matches!(err, Error::ChannelClosed));
    }

    #[tokio::test]
    async fn test_aborted_handler_closes_channel() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let handle = spawn_signal_handler(tx);
        handle.abort();
        let _ = handle.await;

        assert_eq!(rx.recv().await, None);
    }
}
