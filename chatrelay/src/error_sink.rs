//! Central error reporting for per-message tasks.
//!
//! Tasks push errors onto one unbounded channel; a single logger task drains it for the life of
//! the process. Reporting never blocks and never fails the reporting task.

use chatrelay_core::RelayError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::error;

/// Cloneable producer half of the error channel.
#[derive(Clone, Debug)]
pub struct ErrorSink {
    tx: mpsc::UnboundedSender<RelayError>,
}

/// Creates the sink and the receiver to hand to [`spawn_error_logger`].
pub fn error_channel() -> (ErrorSink, mpsc::UnboundedReceiver<RelayError>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ErrorSink { tx }, rx)
}

impl ErrorSink {
    pub fn report(&self, err: RelayError) {
        if let Err(mpsc::error::SendError(err)) = self.tx.send(err) {
            // Logger is gone (shutdown); keep the error visible anyway.
            error!(error = %err, "Error sink closed");
        }
    }
}

/// Logs every reported error until all senders are dropped. Resolves to the number logged.
pub fn spawn_error_logger(mut rx: mpsc::UnboundedReceiver<RelayError>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut logged = 0usize;
        while let Some(err) = rx.recv().await {
            logged += 1;
            error!(error = %err, "Message task error");
        }
        logged
    })
}
