//! Invoice operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use flow_core::{validation::require_non_empty, ListEnvelope, ListFilter, Params};

use crate::engine::Engine;
use crate::error::FlowResult;

/// An invoice as returned by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: i64,

    #[serde(default, rename = "subscriptionId")]
    pub subscription_id: Option<String>,

    #[serde(default, rename = "customerId")]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub period_start: Option<String>,

    #[serde(default)]
    pub period_end: Option<String>,

    #[serde(default)]
    pub attemp_count: Option<i64>,

    #[serde(default)]
    pub attemped: Option<i64>,

    #[serde(default)]
    pub next_attemp_date: Option<String>,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub status: Option<i64>,

    #[serde(default)]
    pub error: Option<i64>,

    #[serde(default)]
    pub error_date: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,

    #[serde(default)]
    pub items: Option<Value>,

    #[serde(default)]
    pub payment: Option<Value>,

    #[serde(default, rename = "outsidePayment")]
    pub outside_payment: Option<Value>,

    #[serde(default, rename = "paymentLink")]
    pub payment_link: Option<String>,
}

/// Parameters for registering a payment made outside the gateway.
#[derive(Debug, Clone)]
pub struct OutsidePaymentParams {
    pub invoice_id: String,
    /// Payment date, `yyyy-mm-dd`.
    pub date: String,
    /// Description of the payment medium (bank transfer, cash, ...).
    pub comment: String,
}

/// Client for the `/invoice` endpoints.
pub struct InvoiceClient<'a> {
    engine: &'a Engine,
}

impl<'a> InvoiceClient<'a> {
    pub(crate) fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    /// Fetch an invoice by its id.
    pub async fn get(&self, invoice_id: &str) -> FlowResult<Invoice> {
        require_non_empty("invoiceId", invoice_id)?;

        let mut params = Params::new();
        params.insert("invoiceId", invoice_id);
        self.engine.get_signed("/invoice/get", params).await
    }

    /// List overdue invoices, optionally restricted to one plan.
    pub async fn over_due(
        &self,
        plan_id: Option<&str>,
        filter: ListFilter,
    ) -> FlowResult<ListEnvelope<Invoice>> {
        let mut params = Params::new();
        params.insert_opt("planId", plan_id);
        filter.apply(&mut params);
        self.engine.get_signed("/invoice/overDue", params).await
    }

    /// Cancel a pending invoice.
    pub async fn cancel(&self, invoice_id: &str) -> FlowResult<Invoice> {
        require_non_empty("invoiceId", invoice_id)?;

        let mut body = Params::new();
        body.insert("invoiceId", invoice_id);
        self.engine.post_signed("/invoice/cancel", body).await
    }

    /// Record a payment made outside the gateway.
    pub async fn outside_payment(&self, params: OutsidePaymentParams) -> FlowResult<Invoice> {
        require_non_empty("invoiceId", &params.invoice_id)?;
        require_non_empty("date", &params.date)?;
        require_non_empty("comment", &params.comment)?;

        let mut body = Params::new();
        body.insert("invoiceId", params.invoice_id);
        body.insert("date", params.date);
        body.insert("comment", params.comment);
        self.engine.post_signed("/invoice/outsidePayment", body).await
    }

    /// Retry collection of a failed invoice.
    pub async fn retry(&self, invoice_id: &str) -> FlowResult<Invoice> {
        require_non_empty("invoiceId", invoice_id)?;

        let mut body = Params::new();
        body.insert("invoiceId", invoice_id);
        self.engine.post_signed("/invoice/retry", body).await
    }
}
