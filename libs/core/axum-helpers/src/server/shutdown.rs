//! Coordinated graceful shutdown.
//!
//! A [`ShutdownCoordinator`] lets background tasks subscribe to a broadcast
//! channel and lets the server wait for OS signals before draining.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;
use tracing::info;

/// Broadcasts a shutdown notification to all subscribers.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    sender: broadcast::Sender<()>,
    is_shutting_down: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1);
        Self {
            sender,
            is_shutting_down: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe to the shutdown notification.
    ///
    /// Each background task should hold its own receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.sender.subscribe()
    }

    /// Whether shutdown has been initiated.
    pub fn is_shutting_down(&self) -> bool {
        self.is_shutting_down.load(Ordering::SeqCst)
    }

    /// Initiate shutdown and notify all subscribers.
    pub fn initiate_shutdown(&self) {
        if !self.is_shutting_down.swap(true, Ordering::SeqCst) {
            info!("Initiating graceful shutdown");
            // Send fails only if there are no subscribers, which is fine.
            let _ = self.sender.send(());
        }
    }

    /// Wait for SIGINT or SIGTERM, then initiate shutdown.
    pub async fn wait_for_signal(&self) {
        shutdown_signal().await;
        self.initiate_shutdown();
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes when the process receives SIGINT (Ctrl+C) or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_coordinator_notifies_subscribers() {
        let coordinator = ShutdownCoordinator::new();
        let mut receiver = coordinator.subscribe();

        assert!(!coordinator.is_shutting_down());
        coordinator.initiate_shutdown();
        assert!(coordinator.is_shutting_down());

        receiver.recv().await.unwrap();
    }

    #[tokio::test]
    async fn test_initiate_shutdown_is_idempotent() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.initiate_shutdown();
        coordinator.initiate_shutdown();
        assert!(coordinator.is_shutting_down());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let coordinator = ShutdownCoordinator::new();
        let clone = coordinator.clone();
        coordinator.initiate_shutdown();
        assert!(clone.is_shutting_down());
    }
}
