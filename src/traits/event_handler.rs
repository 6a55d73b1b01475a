use async_trait::async_trait;

use crate::models::funds::FundsRaisedSnapshot;

/// Receives every snapshot produced by the poller
#[async_trait]
pub trait FundsEventHandler: Send + Sync {
    async fn handle_snapshot(&self, snapshot: FundsRaisedSnapshot);
}
