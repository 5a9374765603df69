//! Recording test doubles for the gateway and status seams.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use shared::dto::{NewListing, Product};

use super::error::GatewayError;
use super::gateway::{MarketplaceGateway, StatusSink};

#[derive(Clone, Debug, PartialEq)]
pub enum GatewayCall {
    Approve(u128),
    Buy(u64),
    Write(NewListing),
    Length,
    Read(u64),
    Balance(String),
}

/// Scripted gateway that records every call in order.
pub struct MockGateway {
    ready: bool,
    length: Option<u64>,
    approve_result: Result<(), GatewayError>,
    buy_result: Result<(), GatewayError>,
    write_result: Result<(), GatewayError>,
    calls: RefCell<Vec<GatewayCall>>,
}

impl MockGateway {
    /// A connected gateway whose chain reports `length` products and
    /// accepts every transaction.
    pub fn ready(length: u64) -> Self {
        Self {
            ready: true,
            length: Some(length),
            approve_result: Ok(()),
            buy_result: Ok(()),
            write_result: Ok(()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn offline(mut self) -> Self {
        self.ready = false;
        self
    }

    pub fn with_unknown_length(mut self) -> Self {
        self.length = None;
        self
    }

    pub fn with_approve_error(mut self, error: GatewayError) -> Self {
        self.approve_result = Err(error);
        self
    }

    pub fn with_buy_error(mut self, error: GatewayError) -> Self {
        self.buy_result = Err(error);
        self
    }

    pub fn with_write_error(mut self, error: GatewayError) -> Self {
        self.write_result = Err(error);
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl MarketplaceGateway for MockGateway {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn products_length(&self) -> Option<u64> {
        self.record(GatewayCall::Length);
        self.length
    }

    async fn read_product(&self, id: u64) -> Option<Product> {
        self.record(GatewayCall::Read(id));
        None
    }

    async fn approve_payment(&self, amount: u128) -> Result<(), GatewayError> {
        self.record(GatewayCall::Approve(amount));
        self.approve_result.clone()
    }

    async fn buy_product(&self, id: u64) -> Result<(), GatewayError> {
        self.record(GatewayCall::Buy(id));
        self.buy_result.clone()
    }

    async fn write_product(&self, listing: &NewListing) -> Result<(), GatewayError> {
        self.record(GatewayCall::Write(listing.clone()));
        self.write_result.clone()
    }

    async fn token_balance(&self, owner: &str) -> Option<u128> {
        self.record(GatewayCall::Balance(owner.to_string()));
        None
    }
}

/// Status sink that remembers everything reported into it.
#[derive(Default)]
pub struct RecordingSink {
    loading: RefCell<Vec<String>>,
    error: RefCell<Option<String>>,
    success: RefCell<Option<String>>,
    cleared: Cell<bool>,
}

impl RecordingSink {
    pub fn loading_history(&self) -> Vec<String> {
        self.loading.borrow().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn success(&self) -> Option<String> {
        self.success.borrow().clone()
    }

    pub fn loading_cleared(&self) -> bool {
        self.cleared.get()
    }
}

impl StatusSink for RecordingSink {
    fn set_loading(&self, message: &str) {
        self.cleared.set(false);
        self.loading.borrow_mut().push(message.to_string());
    }

    fn set_error(&self, message: &str) {
        *self.error.borrow_mut() = Some(message.to_string());
    }

    fn set_success(&self, message: &str) {
        *self.success.borrow_mut() = Some(message.to_string());
    }

    fn clear_loading(&self) {
        self.cleared.set(true);
    }
}
