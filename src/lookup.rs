//! Order lookup behind `/:id`
//!
//! There is no order service; the lookup waits a fixed delay on the tokio
//! runtime and returns the stub order. Dropping the handle or cancelling
//! its token stops the task before it delivers.

use crate::types::OrderDetails;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Debug, PartialEq, Eq)]
pub enum LookupPoll {
    Pending,
    Ready(OrderDetails),
    /// The task stopped without a result
    Cancelled,
}

pub struct OrderLookup {
    order_id: String,
    rx: oneshot::Receiver<OrderDetails>,
    token: CancellationToken,
}

impl OrderLookup {
    /// Starts the lookup on `runtime`, stopping early once `token` is
    /// cancelled. `on_ready` runs on the worker after the result is sent,
    /// typically to request a repaint.
    pub fn spawn<F>(
        runtime: &tokio::runtime::Handle,
        order_id: String,
        delay: Duration,
        token: CancellationToken,
        on_ready: F,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let task_token = token.clone();
        let task_order_id = order_id.clone();

        debug!(order_id = %order_id, "Order lookup started");
        runtime.spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    debug!(order_id = %task_order_id, "Order lookup cancelled");
                }
                details = fetch_order(&task_order_id, delay) => {
                    if tx.send(details).is_ok() {
                        on_ready();
                    }
                }
            }
        });

        Self { order_id, rx, token }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn poll(&mut self) -> LookupPoll {
        match self.rx.try_recv() {
            Ok(details) => {
                info!(order_id = %self.order_id, "Order details loaded");
                LookupPoll::Ready(details)
            }
            Err(oneshot::error::TryRecvError::Empty) => LookupPoll::Pending,
            Err(oneshot::error::TryRecvError::Closed) => LookupPoll::Cancelled,
        }
    }
}

impl Drop for OrderLookup {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn fetch_order(order_id: &str, delay: Duration) -> OrderDetails {
    tokio::time::sleep(delay).await;
    debug!(order_id = %order_id, "Returning stub order");
    OrderDetails::stub()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ORDER_LOOKUP_DELAY;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn delivers_stub_after_the_delay() {
        let notified = Arc::new(AtomicBool::new(false));
        let flag = notified.clone();
        let mut lookup = OrderLookup::spawn(
            &tokio::runtime::Handle::current(),
            "ORD1".into(),
            ORDER_LOOKUP_DELAY,
            CancellationToken::new(),
            move || flag.store(true, Ordering::SeqCst),
        );
        assert_eq!(lookup.order_id(), "ORD1");

        tokio::time::sleep(ORDER_LOOKUP_DELAY - Duration::from_millis(1)).await;
        assert_eq!(lookup.poll(), LookupPoll::Pending);
        assert!(!notified.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(lookup.poll(), LookupPoll::Ready(OrderDetails::stub()));
        assert!(notified.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_lookup_never_delivers() {
        let notified = Arc::new(AtomicBool::new(false));
        let flag = notified.clone();
        let token = CancellationToken::new();
        let mut lookup = OrderLookup::spawn(
            &tokio::runtime::Handle::current(),
            "ORD2".into(),
            ORDER_LOOKUP_DELAY,
            token.clone(),
            move || flag.store(true, Ordering::SeqCst),
        );
        token.cancel();
        tokio::time::sleep(ORDER_LOOKUP_DELAY * 2).await;
        tokio::task::yield_now().await;
        assert_eq!(lookup.poll(), LookupPoll::Cancelled);
        assert!(!notified.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelling_the_parent_token_stops_the_lookup() {
        let parent = CancellationToken::new();
        let mut lookup = OrderLookup::spawn(
            &tokio::runtime::Handle::current(),
            "ORD3".into(),
            ORDER_LOOKUP_DELAY,
            parent.child_token(),
            || {},
        );
        parent.cancel();
        tokio::time::sleep(ORDER_LOOKUP_DELAY * 2).await;
        tokio::task::yield_now().await;
        assert_eq!(lookup.poll(), LookupPoll::Cancelled);
    }
}
