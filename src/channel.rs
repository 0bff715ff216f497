//! Outbound channel — one-shot, fire-and-forget delivery to the receiver.
//!
//! Every message opens a fresh connection to the receiver's well-known
//! socket, writes the payload, and closes. Nothing is ever read back;
//! the receiver frames by connection boundary. The receiver is designed
//! around frequent lightweight reconnects, so there is no pooling.
//!
//! Delivery is best-effort: a missing or unresponsive receiver surfaces
//! as a [`SendError`] that the tracker logs and drops. The next focus
//! transition naturally resends current state, so no retry is attempted.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::UnixStream;

/// Name of the receiver's endpoint under the runtime directory.
pub const ENDPOINT_NAME: &str = "DOFLinx";

/// Bound on each connect attempt.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Why a message failed to reach the receiver.
///
/// All three are non-fatal by contract: callers may log but must keep
/// processing events. State is never rolled back on failure.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// The connect attempt did not complete within the bound.
    #[error("connect to receiver timed out after {0:?}")]
    Timeout(Duration),
    /// No receiver is listening on the endpoint.
    #[error("no receiver listening: {0}")]
    ConnectionRefused(#[source] io::Error),
    /// The connection dropped mid-write, or some other I/O failure.
    #[error("channel i/o failed: {0}")]
    Io(#[source] io::Error),
}

/// Anything that can carry an outbound message to the receiver.
///
/// The tracker emits through this seam so tests can substitute a
/// recording sink. The production implementation is [`PipeSender`].
pub trait MessageSink {
    fn send(&self, message: &str) -> impl Future<Output = Result<(), SendError>>;
}

/// Shared-reference passthrough so tests can keep ownership of a sink
/// while the tracker borrows it.
impl<S: MessageSink> MessageSink for &S {
    async fn send(&self, message: &str) -> Result<(), SendError> {
        (**self).send(message).await
    }
}

/// Connect-per-message sender over a Unix-domain socket.
#[derive(Debug, Clone)]
pub struct PipeSender {
    path: PathBuf,
    connect_timeout: Duration,
}

impl PipeSender {
    pub fn new(path: impl Into<PathBuf>, connect_timeout: Duration) -> Self {
        Self {
            path: path.into(),
            connect_timeout,
        }
    }

    /// The conventional endpoint path: `DOFLinx` under `$XDG_RUNTIME_DIR`,
    /// falling back to `/tmp`.
    pub fn default_endpoint() -> PathBuf {
        std::env::var_os("XDG_RUNTIME_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(ENDPOINT_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MessageSink for PipeSender {
    /// One connect attempt, one write, close. The write half is shut
    /// down explicitly so the receiver sees EOF as soon as the payload
    /// is flushed.
    async fn send(&self, message: &str) -> Result<(), SendError> {
        let connect = UnixStream::connect(&self.path);
        let mut stream = match tokio::time::timeout(self.connect_timeout, connect).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::ConnectionRefused | io::ErrorKind::NotFound
                ) =>
            {
                return Err(SendError::ConnectionRefused(e));
            }
            Ok(Err(e)) => return Err(SendError::Io(e)),
            Err(_) => return Err(SendError::Timeout(self.connect_timeout)),
        };

        stream
            .write_all(message.as_bytes())
            .await
            .map_err(SendError::Io)?;
        stream.shutdown().await.map_err(SendError::Io)?;
        Ok(())
    }
}

/// Test double shared by the tracker and dispatcher tests.
#[cfg(test)]
pub mod testing {
    use super::{MessageSink, SendError};
    use std::io;
    use std::sync::Mutex;

    /// Records every payload it is handed, or fails every send.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        messages: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// A sink that rejects every send, as if no receiver exists.
        pub fn failing() -> Self {
            Self {
                messages: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        /// Drain recorded payloads in emission order.
        pub fn take(&self) -> Vec<String> {
            std::mem::take(&mut self.messages.lock().unwrap())
        }
    }

    impl MessageSink for RecordingSink {
        async fn send(&self, message: &str) -> Result<(), SendError> {
            if self.fail {
                return Err(SendError::ConnectionRefused(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "no receiver",
                )));
            }
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }
}
