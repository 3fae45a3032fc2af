//! # Flow Client
//!
//! Typed client for the Flow payment gateway.
//!
//! One [`FlowClient`] holds the signed-request engine; each resource family
//! (coupons, customers, invoices, merchants, plans, settlements,
//! subscriptions) is reached through a borrowing accessor. Every operation
//! builds a parameter set, signs it with HMAC-SHA256, encodes it as a query
//! string (reads) or form body (writes), issues exactly one HTTP call, and
//! decodes the JSON outcome into a typed value or a [`FlowError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use flow_client::FlowClient;
//! use flow_core::FlowConfig;
//!
//! # async fn run() -> Result<(), flow_client::FlowError> {
//! let client = FlowClient::new(FlowConfig::new(
//!     "https://sandbox.flow.cl/api",
//!     "my-api-key",
//!     "my-secret",
//! ))?;
//!
//! let coupon = client.coupons().get("C1").await?;
//! println!("{:?}", coupon.name);
//! # Ok(())
//! # }
//! ```

pub mod coupon;
pub mod customer;
pub mod engine;
pub mod error;
pub mod invoice;
pub mod merchant;
pub mod plans;
pub mod settlement;
pub mod subscription;

pub use engine::Engine;
pub use error::{FlowError, FlowResult};

pub use coupon::CouponClient;
pub use customer::CustomerClient;
pub use invoice::InvoiceClient;
pub use merchant::MerchantClient;
pub use plans::PlansClient;
pub use settlement::SettlementClient;
pub use subscription::SubscriptionClient;

use flow_core::FlowConfig;

/// Entry point to the SDK.
///
/// Owns the engine; safe to share across tasks (all operations take
/// `&self` and the engine carries no mutable state).
pub struct FlowClient {
    engine: Engine,
}

// Manual impl: the engine holds the signing secret, which must not leak
// through debug logging.
impl std::fmt::Debug for FlowClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowClient").finish_non_exhaustive()
    }
}

impl FlowClient {
    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Config` if the configuration is invalid. The
    /// check happens here, synchronously, before any request is possible.
    pub fn new(config: FlowConfig) -> FlowResult<Self> {
        Ok(Self {
            engine: Engine::new(config)?,
        })
    }

    /// Discount coupon operations.
    pub fn coupons(&self) -> CouponClient<'_> {
        CouponClient::new(&self.engine)
    }

    /// Customer operations.
    pub fn customers(&self) -> CustomerClient<'_> {
        CustomerClient::new(&self.engine)
    }

    /// Invoice operations.
    pub fn invoices(&self) -> InvoiceClient<'_> {
        InvoiceClient::new(&self.engine)
    }

    /// Associated commerce operations.
    pub fn merchants(&self) -> MerchantClient<'_> {
        MerchantClient::new(&self.engine)
    }

    /// Subscription plan operations.
    pub fn plans(&self) -> PlansClient<'_> {
        PlansClient::new(&self.engine)
    }

    /// Settlement operations.
    pub fn settlements(&self) -> SettlementClient<'_> {
        SettlementClient::new(&self.engine)
    }

    /// Subscription operations.
    pub fn subscriptions(&self) -> SubscriptionClient<'_> {
        SubscriptionClient::new(&self.engine)
    }
}
