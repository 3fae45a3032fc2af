//! Customer operations: registration, charges, batch collection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use flow_core::{
    validation::{require_non_empty, require_positive},
    ListEnvelope, ListFilter, Params, ValidationError,
};

use crate::engine::Engine;
use crate::error::FlowResult;

/// A customer as returned by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    #[serde(rename = "customerId")]
    pub customer_id: String,

    pub name: String,
    pub email: String,

    #[serde(default, rename = "externalId")]
    pub external_id: Option<String>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, rename = "creditCardType")]
    pub credit_card_type: Option<String>,

    #[serde(default, rename = "last4CardDigits")]
    pub last4_card_digits: Option<String>,

    #[serde(default, rename = "hasRegisteredCard")]
    pub has_registered_card: Option<i64>,

    #[serde(default, rename = "registerDate")]
    pub register_date: Option<String>,
}

/// A payment produced by charging a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    #[serde(rename = "flowOrder")]
    pub flow_order: i64,

    #[serde(rename = "commerceOrder")]
    pub commerce_order: String,

    #[serde(default)]
    pub subject: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub status: Option<i64>,

    #[serde(default, rename = "requestDate")]
    pub request_date: Option<String>,

    #[serde(default, rename = "paymentData")]
    pub payment_data: Option<Value>,
}

/// Parameters for creating a customer.
#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub name: String,
    pub email: String,
    /// The merchant's own identifier for this customer.
    pub external_id: String,
}

/// Parameters for editing a customer; absent fields stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct EditCustomerParams {
    pub customer_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub external_id: Option<String>,
}

/// Response to a card-registration link request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterResponse {
    pub url: String,
    pub token: String,
}

/// Status of a card registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterStatus {
    pub status: String,

    #[serde(default, rename = "customerId")]
    pub customer_id: Option<String>,

    #[serde(default, rename = "creditCardType")]
    pub credit_card_type: Option<String>,

    #[serde(default, rename = "last4CardDigits")]
    pub last4_card_digits: Option<String>,
}

/// Parameters for charging a customer's registered card.
#[derive(Debug, Clone, Default)]
pub struct ChargeCustomerParams {
    pub customer_id: String,
    pub amount: i64,
    pub subject: String,
    pub commerce_order: String,
    pub currency: Option<String>,
    /// Arbitrary merchant data echoed back with the payment.
    pub optionals: Option<String>,
}

impl ChargeCustomerParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("customerId", &self.customer_id)?;
        require_positive("amount", self.amount)?;
        require_non_empty("subject", &self.subject)?;
        require_non_empty("commerceOrder", &self.commerce_order)
    }

    fn into_params(self) -> Result<Params, ValidationError> {
        self.validate()?;
        let mut params = Params::new();
        params.insert("customerId", self.customer_id);
        params.insert("amount", self.amount);
        params.insert("subject", self.subject);
        params.insert("commerceOrder", self.commerce_order);
        params.insert_opt("currency", self.currency);
        params.insert_opt("optionals", self.optionals);
        Ok(params)
    }
}

/// Parameters for a collect request (email or automatic charge).
#[derive(Debug, Clone, Default)]
pub struct CollectCustomerParams {
    pub customer_id: String,
    pub amount: i64,
    pub subject: String,
    pub commerce_order: String,
    pub url_confirmation: String,
    pub url_return: String,
    pub currency: Option<String>,
    /// 1 = collect by email, 2 = automatic charge.
    pub by_email: Option<u32>,
}

/// Response to a collect request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectResponse {
    pub token: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, rename = "flowOrder")]
    pub flow_order: Option<i64>,
}

/// One row of a batch collect request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchChargeRow {
    pub customer_id: String,
    pub commerce_order: String,
    pub subject: String,
    pub amount: i64,
}

/// Acknowledgement of a batch collect request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchResponse {
    pub token: String,

    #[serde(rename = "receivedRows")]
    pub received_rows: i64,

    #[serde(default, rename = "acceptedRows")]
    pub accepted_rows: Option<i64>,

    #[serde(default, rename = "rejectedRows")]
    pub rejected_rows: Option<Value>,
}

/// Processing status of a batch collect request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchStatus {
    pub token: String,

    #[serde(rename = "createdDate")]
    pub created_date: String,

    pub status: i64,

    #[serde(default, rename = "collectRows")]
    pub collect_rows: Option<Value>,
}

/// Outcome of a charge reversal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReverseChargeResponse {
    pub status: String,
    pub message: String,
}

/// Client for the `/customer` endpoints.
pub struct CustomerClient<'a> {
    engine: &'a Engine,
}

impl<'a> CustomerClient<'a> {
    pub(crate) fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    /// Create a customer.
    pub async fn create(&self, params: CreateCustomerParams) -> FlowResult<Customer> {
        require_non_empty("name", &params.name)?;
        require_non_empty("email", &params.email)?;
        require_non_empty("externalId", &params.external_id)?;

        let mut body = Params::new();
        body.insert("name", params.name);
        body.insert("email", params.email);
        body.insert("externalId", params.external_id);
        self.engine.post_signed("/customer/create", body).await
    }

    /// Edit a customer.
    pub async fn edit(&self, params: EditCustomerParams) -> FlowResult<Customer> {
        require_non_empty("customerId", &params.customer_id)?;

        let mut body = Params::new();
        body.insert("customerId", params.customer_id);
        body.insert_opt("name", params.name);
        body.insert_opt("email", params.email);
        body.insert_opt("externalId", params.external_id);
        self.engine.post_signed("/customer/edit", body).await
    }

    /// Delete a customer.
    pub async fn delete(&self, customer_id: &str) -> FlowResult<Customer> {
        require_non_empty("customerId", customer_id)?;

        let mut body = Params::new();
        body.insert("customerId", customer_id);
        self.engine.post_signed("/customer/delete", body).await
    }

    /// Fetch a customer.
    pub async fn get(&self, customer_id: &str) -> FlowResult<Customer> {
        require_non_empty("customerId", customer_id)?;

        let mut params = Params::new();
        params.insert("customerId", customer_id);
        self.engine.get_signed("/customer/get", params).await
    }

    /// List customers.
    pub async fn list(&self, filter: ListFilter) -> FlowResult<ListEnvelope<Customer>> {
        let mut params = Params::new();
        filter.apply(&mut params);
        self.engine.get_signed("/customer/list", params).await
    }

    /// Generate a card-registration link for a customer.
    pub async fn register(
        &self,
        customer_id: &str,
        url_return: &str,
    ) -> FlowResult<RegisterResponse> {
        require_non_empty("customerId", customer_id)?;
        require_non_empty("url_return", url_return)?;

        let mut body = Params::new();
        body.insert("customerId", customer_id);
        body.insert("url_return", url_return);
        self.engine.post_signed("/customer/register", body).await
    }

    /// Fetch the status of a card registration by its token.
    pub async fn get_register_status(&self, token: &str) -> FlowResult<RegisterStatus> {
        require_non_empty("token", token)?;

        let mut params = Params::new();
        params.insert("token", token);
        self.engine
            .get_signed("/customer/getRegisterStatus", params)
            .await
    }

    /// Remove a customer's registered card.
    pub async fn un_register(&self, customer_id: &str) -> FlowResult<Customer> {
        require_non_empty("customerId", customer_id)?;

        let mut params = Params::new();
        params.insert("customerId", customer_id);
        self.engine.get_signed("/customer/unRegister", params).await
    }

    /// Charge a customer's registered card.
    pub async fn charge(&self, params: ChargeCustomerParams) -> FlowResult<Payment> {
        self.engine
            .post_signed("/customer/charge", params.into_params()?)
            .await
    }

    /// Send a collect request (email payment link or automatic charge).
    pub async fn collect(&self, params: CollectCustomerParams) -> FlowResult<CollectResponse> {
        require_non_empty("customerId", &params.customer_id)?;
        require_positive("amount", params.amount)?;
        require_non_empty("subject", &params.subject)?;
        require_non_empty("commerceOrder", &params.commerce_order)?;
        require_non_empty("urlConfirmation", &params.url_confirmation)?;
        require_non_empty("urlReturn", &params.url_return)?;

        let mut body = Params::new();
        body.insert("customerId", params.customer_id);
        body.insert("amount", params.amount);
        body.insert("subject", params.subject);
        body.insert("commerceOrder", params.commerce_order);
        body.insert("urlConfirmation", params.url_confirmation);
        body.insert("urlReturn", params.url_return);
        body.insert_opt("currency", params.currency);
        body.insert_opt("byEmail", params.by_email);
        self.engine.post_signed("/customer/collect", body).await
    }

    /// Charge many customers in one request.
    ///
    /// The rows are serialized to a single JSON string before signing; the
    /// signature covers that string, so row order matters.
    pub async fn batch_collect(&self, rows: &[BatchChargeRow]) -> FlowResult<BatchResponse> {
        if rows.is_empty() {
            return Err(ValidationError::EmptyField("batchRows".to_string()).into());
        }

        let mut body = Params::new();
        body.insert_json("batchRows", &rows)?;
        self.engine.post_signed("/customer/batchCollect", body).await
    }

    /// Fetch the processing status of a batch collect request.
    pub async fn get_batch_collect_status(&self, token: &str) -> FlowResult<BatchStatus> {
        require_non_empty("token", token)?;

        let mut params = Params::new();
        params.insert("token", token);
        self.engine
            .get_signed("/customer/getBatchCollectStatus", params)
            .await
    }

    /// Reverse a charge within the gateway's reversal window.
    pub async fn reverse_charge(
        &self,
        commerce_order: &str,
        flow_order: &str,
    ) -> FlowResult<ReverseChargeResponse> {
        require_non_empty("commerceOrder", commerce_order)?;
        require_non_empty("flowOrder", flow_order)?;

        let mut body = Params::new();
        body.insert("commerceOrder", commerce_order);
        body.insert("flowOrder", flow_order);
        self.engine
            .post_signed("/customer/reverseCharge", body)
            .await
    }

    /// List charges made to a customer from a given date.
    pub async fn get_charges(
        &self,
        customer_id: &str,
        from_date: &str,
        filter: ListFilter,
    ) -> FlowResult<ListEnvelope<Payment>> {
        require_non_empty("customerId", customer_id)?;
        require_non_empty("fromDate", from_date)?;

        let mut params = Params::new();
        params.insert("customerId", customer_id);
        params.insert("fromDate", from_date);
        filter.apply(&mut params);
        self.engine.get_signed("/customer/getCharges", params).await
    }

    /// List charge attempts for one of the customer's orders.
    pub async fn get_charge_attempts(
        &self,
        customer_id: &str,
        commerce_order: &str,
        filter: ListFilter,
    ) -> FlowResult<ListEnvelope<Value>> {
        require_non_empty("customerId", customer_id)?;
        require_non_empty("commerceOrder", commerce_order)?;

        let mut params = Params::new();
        params.insert("customerId", customer_id);
        params.insert("commerceOrder", commerce_order);
        filter.apply(&mut params);
        self.engine
            .get_signed("/customer/getChargeAttempts", params)
            .await
    }

    /// List a customer's subscriptions.
    pub async fn get_subscriptions(
        &self,
        customer_id: &str,
        filter: ListFilter,
    ) -> FlowResult<ListEnvelope<Value>> {
        require_non_empty("customerId", customer_id)?;

        let mut params = Params::new();
        params.insert("customerId", customer_id);
        filter.apply(&mut params);
        self.engine
            .get_signed("/customer/getSubscriptions", params)
            .await
    }
}
