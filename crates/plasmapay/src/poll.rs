use crate::authorization::AuthorizationId;
use crate::error::TransferError;
use async_trait::async_trait;
use backend::{BackendError, Client};
use common::consts::{MAX_POLL_ATTEMPTS, POLL_INTERVAL_MS};
use common::status::{StatusResponse, TransferStatus};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;

pub const TIMEOUT_MESSAGE: &str = "Timed out waiting for confirmation";

/// Where status answers come from. The backend client is the real source;
/// tests script their own.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_status(&self, authorization_id: &str) -> Result<StatusResponse, BackendError>;
}

#[async_trait]
impl StatusSource for Client {
    async fn fetch_status(&self, authorization_id: &str) -> Result<StatusResponse, BackendError> {
        self.transfer_status(authorization_id).await
    }
}

/// Snapshot handed to the per-attempt callback, terminal attempts included.
#[derive(Debug, Clone)]
pub struct PollAttempt {
    pub attempt: u32,
    pub max_attempts: u32,
    pub status: Option<String>,
}

/// Callback type for observing poll progress.
/// Called after each status fetch with what it reported.
pub type PollAttemptCallback =
    dyn Fn(PollAttempt) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync;

pub struct PollParams {
    pub authorization_id: AuthorizationId,
    pub interval: Duration,
    pub max_attempts: u32,
    pub cancel: Option<CancelToken>,
    pub on_attempt: Option<Box<PollAttemptCallback>>,
}

impl PollParams {
    /// Defaults: 2000 ms between attempts, 30 attempts (~60 s), no
    /// cancellation, no callback.
    pub fn new(authorization_id: AuthorizationId) -> Self {
        PollParams {
            authorization_id,
            interval: Duration::from_millis(POLL_INTERVAL_MS),
            max_attempts: MAX_POLL_ATTEMPTS,
            cancel: None,
            on_attempt: None,
        }
    }
}

pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Resolve any poll holding the paired token with `Cancelled`. A status
    /// request already in flight is not aborted.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Cancellation side of `cancel_pair`. Cloneable: every clone observes the
/// handle's cancel.
#[derive(Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                // Handle dropped without cancelling; nothing left to wait for.
                std::future::pending::<()>().await;
            }
        }
    }
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Poll a transfer's status until it confirms, fails, the attempt budget
/// runs out, or the cancellation handle fires.
///
/// Fixed interval, no backoff, no jitter. A failing status query is
/// inconclusive and burns an attempt like any other answer. Concurrent polls
/// for the same authorization id are independent; nothing coalesces them.
pub async fn wait_for_final<S>(
    source: &S,
    params: PollParams,
) -> Result<TransferStatus, TransferError>
where
    S: StatusSource + ?Sized,
{
    let PollParams {
        authorization_id,
        interval,
        max_attempts,
        mut cancel,
        on_attempt,
    } = params;

    log::debug!(
        "Polling status for {} (every {:?}, up to {} attempts)",
        authorization_id,
        interval,
        max_attempts
    );

    for attempt in 1..=max_attempts {
        if let Some(token) = &cancel {
            if token.is_cancelled() {
                return Err(TransferError::Cancelled);
            }
        }

        let response = match source.fetch_status(authorization_id.as_str()).await {
            Ok(response) => response,
            Err(err) => {
                // Inconclusive, not fatal: a broken status endpoint reads the
                // same as "still pending" until the budget runs out.
                log::warn!(
                    "Status query {}/{} for {} failed: {}",
                    attempt,
                    max_attempts,
                    authorization_id,
                    err
                );
                StatusResponse::default()
            }
        };

        if let Some(callback) = &on_attempt {
            callback(PollAttempt {
                attempt,
                max_attempts,
                status: response.status.clone(),
            })
            .await;
        }

        match response.status.as_deref() {
            Some("confirmed") => {
                return Ok(TransferStatus::Confirmed {
                    tx_hash: response.tx_hash,
                });
            }
            Some("failed") => {
                return Ok(TransferStatus::Failed {
                    error: response.error,
                });
            }
            _ => {}
        }

        match cancel.as_mut() {
            Some(token) => {
                tokio::select! {
                    _ = sleep(interval) => {}
                    _ = token.cancelled() => return Err(TransferError::Cancelled),
                }
            }
            None => sleep(interval).await,
        }
    }

    Ok(TransferStatus::Timeout {
        error: Some(TIMEOUT_MESSAGE.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    fn id() -> AuthorizationId {
        AuthorizationId::new("auth-test")
    }

    fn pending() -> StatusResponse {
        StatusResponse {
            status: Some("pending".to_string()),
            ..Default::default()
        }
    }

    fn confirmed(tx_hash: &str) -> StatusResponse {
        StatusResponse {
            status: Some("confirmed".to_string()),
            tx_hash: Some(tx_hash.to_string()),
            ..Default::default()
        }
    }

    fn failed(error: &str) -> StatusResponse {
        StatusResponse {
            status: Some("failed".to_string()),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    fn query_error() -> BackendError {
        BackendError::Api {
            status: 500,
            message: "status endpoint down".to_string(),
        }
    }

    /// Plays back a fixed sequence of answers, then reports pending forever.
    struct ScriptedSource {
        answers: Mutex<VecDeque<Result<StatusResponse, BackendError>>>,
        calls: AtomicU32,
    }

    impl ScriptedSource {
        fn new(answers: Vec<Result<StatusResponse, BackendError>>) -> Self {
            ScriptedSource {
                answers: Mutex::new(answers.into()),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn fetch_status(
            &self,
            _authorization_id: &str,
        ) -> Result<StatusResponse, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(pending()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn confirms_on_fifth_attempt_after_four_waits() {
        let source = ScriptedSource::new(vec![
            Ok(pending()),
            Ok(pending()),
            Ok(pending()),
            Ok(pending()),
            Ok(confirmed("0xabc")),
        ]);

        let start = tokio::time::Instant::now();
        let status = wait_for_final(&source, PollParams::new(id())).await.unwrap();

        assert_eq!(
            status,
            TransferStatus::Confirmed {
                tx_hash: Some("0xabc".to_string())
            }
        );
        assert_eq!(source.calls(), 5);
        assert_eq!(
            start.elapsed(),
            Duration::from_millis(4 * POLL_INTERVAL_MS)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn times_out_after_exactly_thirty_attempts() {
        let source = ScriptedSource::new(vec![]);

        let status = wait_for_final(&source, PollParams::new(id())).await.unwrap();

        assert_eq!(
            status,
            TransferStatus::Timeout {
                error: Some(TIMEOUT_MESSAGE.to_string())
            }
        );
        assert_eq!(source.calls(), MAX_POLL_ATTEMPTS);
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_failure_keeps_the_message() {
        let source = ScriptedSource::new(vec![Ok(failed("Unknown revert"))]);

        let start = tokio::time::Instant::now();
        let status = wait_for_final(&source, PollParams::new(id())).await.unwrap();

        assert_eq!(
            status,
            TransferStatus::Failed {
                error: Some("Unknown revert".to_string())
            }
        );
        assert_eq!(source.calls(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn query_errors_are_inconclusive() {
        let source = ScriptedSource::new(vec![
            Err(query_error()),
            Err(query_error()),
            Ok(confirmed("0x1")),
        ]);

        let status = wait_for_final(&source, PollParams::new(id())).await.unwrap();

        assert_eq!(
            status,
            TransferStatus::Confirmed {
                tx_hash: Some("0x1".to_string())
            }
        );
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_before_start_fetches_nothing() {
        let source = ScriptedSource::new(vec![]);
        let (handle, token) = cancel_pair();
        handle.cancel();

        let mut params = PollParams::new(id());
        params.cancel = Some(token);
        let result = wait_for_final(&source, params).await;

        assert!(matches!(result, Err(TransferError::Cancelled)));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_mid_wait_stops_polling() {
        let source = Arc::new(ScriptedSource::new(vec![]));
        let (handle, token) = cancel_pair();

        let mut params = PollParams::new(id());
        params.cancel = Some(token);

        let task = {
            let source = source.clone();
            tokio::spawn(async move { wait_for_final(source.as_ref(), params).await })
        };

        // Fetches land at t=0 and t=2000; cancel lands mid-way through the
        // second wait.
        sleep(Duration::from_millis(3000)).await;
        handle.cancel();

        let result = task.await.unwrap();
        assert!(matches!(result, Err(TransferError::Cancelled)));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn callback_sees_every_attempt() {
        let source = ScriptedSource::new(vec![Ok(pending()), Ok(confirmed("0x1"))]);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut params = PollParams::new(id());
        let seen_in_callback = seen.clone();
        params.on_attempt = Some(Box::new(move |attempt: PollAttempt| {
            let seen = seen_in_callback.clone();
            Box::pin(async move {
                seen.lock().unwrap().push((attempt.attempt, attempt.status));
            })
        }));

        wait_for_final(&source, params).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (1, Some("pending".to_string())),
                (2, Some("confirmed".to_string())),
            ]
        );
    }
}
