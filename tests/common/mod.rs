#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use fee_share_tracker::{
    BalanceProvider, FeeShareProvider, FundsRaisedSnapshot, FundsTracker, PriceProvider,
    TrackerError,
};
use serde_json::{json, Value};

pub const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";
pub const HANDLE: &str = "knowyourmeme";

pub struct MockFeeShare {
    pub wallet: Option<String>,
    pub lifetime_lamports: u64,
    pub wallet_calls: AtomicUsize,
    pub claim_calls: AtomicUsize,
}

impl MockFeeShare {
    pub fn with_wallet(wallet: &str) -> Self {
        Self {
            wallet: Some(wallet.to_string()),
            lifetime_lamports: 0,
            wallet_calls: AtomicUsize::new(0),
            claim_calls: AtomicUsize::new(0),
        }
    }

    pub fn without_wallet() -> Self {
        Self {
            wallet: None,
            ..Self::with_wallet("")
        }
    }

    pub fn wallet_calls(&self) -> usize {
        self.wallet_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeeShareProvider for MockFeeShare {
    async fn wallet_for_twitter(&self, _username: &str) -> Result<String, TrackerError> {
        self.wallet_calls.fetch_add(1, Ordering::SeqCst);
        self.wallet.clone().ok_or_else(|| {
            TrackerError::InvalidResponse("failed to get wallet address from API response".into())
        })
    }

    async fn lifetime_fees(&self, _token_mint: &str) -> Result<u64, TrackerError> {
        Ok(self.lifetime_lamports)
    }

    async fn claim_transactions(&self, fee_claimer: &str) -> Result<Value, TrackerError> {
        self.claim_calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "success": true, "response": [], "feeClaimer": fee_claimer }))
    }
}

#[derive(Clone, Copy)]
pub enum BalanceBehavior {
    Lamports(u64),
    Fail,
    Panic,
}

pub struct MockBalance {
    pub behavior: BalanceBehavior,
    pub delay: Duration,
    pub calls: AtomicUsize,
    pub wallets: Mutex<Vec<String>>,
}

impl MockBalance {
    pub fn new(behavior: BalanceBehavior) -> Self {
        Self {
            behavior,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            wallets: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceProvider for MockBalance {
    async fn fetch_lamports(&self, wallet: &str) -> Result<u64, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.wallets.lock().unwrap().push(wallet.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.behavior {
            BalanceBehavior::Lamports(lamports) => Ok(lamports),
            BalanceBehavior::Fail => Err(TrackerError::Rpc("connection reset".into())),
            BalanceBehavior::Panic => panic!("rpc client exploded"),
        }
    }
}

pub struct MockPrice {
    pub price: Option<f64>,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl MockPrice {
    pub fn fixed(price: f64) -> Self {
        Self {
            price: Some(price),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            price: None,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl PriceProvider for MockPrice {
    async fn get_sol_price(&self) -> Result<f64, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.price
            .ok_or_else(|| TrackerError::InvalidResponse("price feed down".into()))
    }
}

pub fn tracker(
    fee_share: Arc<MockFeeShare>,
    balance: Arc<MockBalance>,
    price: Arc<MockPrice>,
) -> Arc<FundsTracker> {
    Arc::new(FundsTracker::new(
        HANDLE,
        Duration::from_millis(300_000),
        fee_share,
        balance,
        price,
    ))
}

/// Collects every snapshot a poller delivers
#[derive(Clone, Default)]
pub struct SnapshotLog(pub Arc<Mutex<Vec<FundsRaisedSnapshot>>>);

impl SnapshotLog {
    pub fn callback(&self) -> impl Fn(FundsRaisedSnapshot) + Send + Sync + 'static {
        let log = self.0.clone();
        move |snapshot| log.lock().unwrap().push(snapshot)
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<FundsRaisedSnapshot> {
        self.0.lock().unwrap().clone()
    }
}
