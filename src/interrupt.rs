//! Racing a command against an interrupt signal

use log::warn;
use std::future::Future;

use crate::error::BrError;

/// Drive `command` to completion unless `signal` fires first
///
/// A delivered signal gives [`BrError::Interrupted`]. If the signal handler
/// cannot be installed the failure is logged and the command is awaited
/// without interruption.
pub async fn run_interruptible<F, S, T, E>(command: F, signal: S) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    S: Future<Output = std::io::Result<()>>,
    E: From<BrError>,
{
    tokio::pin!(command);

    let signal = tokio::select! {
        result = &mut command => return result,
        signal = signal => signal,
    };

    match signal {
        Ok(()) => {
            warn!("Interrupted, no state was published");
            Err(BrError::Interrupted.into())
        }
        Err(e) => {
            warn!("Cannot listen for Ctrl-C, continuing without it: {}", e);
            command.await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::pending;
    use std::io;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_interrupts_pending_command() {
        let result: Result<(), BrError> =
            run_interruptible(pending(), async { Ok(()) }).await;
        assert!(matches!(result, Err(BrError::Interrupted)));
    }

    #[tokio::test]
    async fn test_signal_listener_failure_keeps_waiting() {
        let command = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok::<_, BrError>(7)
        };
        let signal = async { Err(io::Error::other("no signal handler")) };

        assert_eq!(run_interruptible(command, signal).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_command_finishes_first() {
        let result = run_interruptible(async { Ok::<_, BrError>("done") }, pending()).await;
        assert_eq!(result.unwrap(), "done");
    }

    #[tokio::test]
    async fn test_command_error_passes_through() {
        let command = async { Err::<(), _>(BrError::Config("bad argument".to_string())) };
        let err = run_interruptible(command, pending()).await.unwrap_err();
        assert!(matches!(err, BrError::Config(_)));
    }
}
