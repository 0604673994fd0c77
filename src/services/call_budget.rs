//! Deadline and cancellation for network boundary calls.
//!
//! A [`CallBudget`] is created once per resolution and threaded through
//! every boundary (agent, search, completion). When the deadline passes or
//! the token is cancelled the pending call is dropped and reported as
//! [`ResolutionError::Interrupted`], which the orchestrator treats like any
//! other provider failure.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::domain::errors::{Interruption, ResolutionError, ResolutionOutcome};

/// Caller-supplied deadline and cancellation signal.
#[derive(Debug, Clone, Default)]
pub struct CallBudget {
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl CallBudget {
    /// No deadline, never cancelled unless the token is triggered.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Deadline `timeout` from now.
    ///
    /// A timeout too large to represent as an instant leaves the budget
    /// without a deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(timeout),
            cancel: CancellationToken::new(),
        }
    }

    /// Replace the deadline.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Use an externally owned cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Token that cancels every call made under this budget.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Why no further calls may be made, if the budget is already spent.
    pub fn exhausted(&self) -> Option<Interruption> {
        if self.cancel.is_cancelled() {
            Some(Interruption::Cancelled)
        } else if self.deadline.is_some_and(|d| Instant::now() >= d) {
            Some(Interruption::DeadlineExceeded)
        } else {
            None
        }
    }

    /// Run one boundary call under this budget.
    ///
    /// The future is not polled at all when the budget is already spent.
    pub async fn run<T, E, F>(&self, boundary: &'static str, call: F) -> ResolutionOutcome<T>
    where
        F: Future<Output = Result<T, E>>,
        ResolutionError: From<E>,
    {
        if let Some(reason) = self.exhausted() {
            return Err(ResolutionError::Interrupted { boundary, reason });
        }

        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, call)
                    .await
                    .map_err(|_| Interruption::DeadlineExceeded),
                None => Ok(call.await),
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(ResolutionError::Interrupted {
                boundary,
                reason: Interruption::Cancelled,
            }),
            outcome = bounded => match outcome {
                Ok(result) => result.map_err(ResolutionError::from),
                Err(reason) => Err(ResolutionError::Interrupted { boundary, reason }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SearchError;

    #[tokio::test]
    async fn test_unbounded_passes_result_through() {
        let budget = CallBudget::unbounded();
        let value = budget
            .run("search", async { Ok::<_, SearchError>(5) })
            .await
            .unwrap();
        assert_eq!(value, 5);
    }

    #[tokio::test]
    async fn test_inner_error_is_converted() {
        let budget = CallBudget::unbounded();
        let result: ResolutionOutcome<()> = budget
            .run("search", async { Err(SearchError::Transport("down".into())) })
            .await;
        assert!(matches!(result, Err(ResolutionError::SearchFailure(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_interrupts_slow_call() {
        let budget = CallBudget::with_timeout(Duration::from_millis(50));
        let result = budget
            .run("completion", async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok::<_, SearchError>(())
            })
            .await;
        assert!(matches!(
            result,
            Err(ResolutionError::Interrupted {
                boundary: "completion",
                reason: Interruption::DeadlineExceeded
            })
        ));
    }

    #[tokio::test]
    async fn test_cancelled_budget_never_polls() {
        let budget = CallBudget::unbounded();
        budget.cancellation_token().cancel();
        let mut polled = false;
        let result = budget
            .run("agent", async {
                polled = true;
                Ok::<_, SearchError>(())
            })
            .await;
        assert!(matches!(
            result,
            Err(ResolutionError::Interrupted {
                reason: Interruption::Cancelled,
                ..
            })
        ));
        assert!(!polled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_call() {
        let token = CancellationToken::new();
        let budget = CallBudget::unbounded().with_cancellation(token.clone());
        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });
        let result = budget
            .run("search", async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<_, SearchError>(())
            })
            .await;
        canceller.await.unwrap();
        assert!(matches!(
            result,
            Err(ResolutionError::Interrupted {
                reason: Interruption::Cancelled,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_unrepresentable_timeout_means_no_deadline() {
        let budget = CallBudget::with_timeout(Duration::from_secs(u64::MAX));
        assert!(budget.deadline().is_none());
        assert_eq!(budget.exhausted(), None);
        let value = budget
            .run("search", async { Ok::<_, SearchError>(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_exhausted_reports_passed_deadline() {
        let budget = CallBudget::unbounded().with_deadline(Instant::now());
        assert_eq!(budget.exhausted(), Some(Interruption::DeadlineExceeded));
    }
}
