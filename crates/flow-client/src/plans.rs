//! Subscription plan operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use flow_core::{
    validation::{require_in_range, require_non_empty, require_positive, require_url},
    ListEnvelope, ListFilter, Params, ValidationError,
};

use crate::engine::{Engine, API_KEY_KEY, SIGNATURE_KEY};
use crate::error::FlowResult;

/// A subscription plan as returned by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    #[serde(rename = "planId")]
    pub plan_id: String,

    pub name: String,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub interval: Option<i64>,

    #[serde(default)]
    pub interval_count: Option<i64>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub trial_period_days: Option<i64>,

    #[serde(default)]
    pub days_until_due: Option<i64>,

    #[serde(default)]
    pub periods_number: Option<i64>,

    #[serde(default, rename = "urlCallback")]
    pub url_callback: Option<String>,

    #[serde(default)]
    pub charges_retries_number: Option<i64>,

    #[serde(default)]
    pub currency_convert_option: Option<i64>,

    #[serde(default)]
    pub status: Option<i64>,

    #[serde(default)]
    pub public: Option<i64>,
}

/// Parameters for creating or editing a plan.
///
/// `interval`: 1 = daily, 2 = weekly, 3 = monthly, 4 = yearly.
#[derive(Debug, Clone, Default)]
pub struct PlanParams {
    pub plan_id: String,
    pub name: String,
    pub currency: Option<String>,
    pub amount: i64,
    pub interval: u32,
    pub interval_count: Option<u32>,
    pub trial_period_days: Option<u32>,
    pub days_until_due: Option<u32>,
    pub periods_number: Option<u32>,
    pub url_callback: String,
    pub charges_retries_number: Option<u32>,
    /// 1 = at invoice date, 2 = at payment date.
    pub currency_convert_option: Option<u32>,
}

impl PlanParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("planId", &self.plan_id)?;
        require_non_empty("name", &self.name)?;
        require_positive("amount", self.amount)?;
        require_in_range("interval", self.interval, 1, 4)?;
        require_url("urlCallback", &self.url_callback)?;
        if let Some(option) = self.currency_convert_option {
            require_in_range("currency_convert_option", option, 1, 2)?;
        }
        Ok(())
    }

    fn into_params(self) -> Result<Params, ValidationError> {
        self.validate()?;
        let mut params = Params::new();
        params.insert("planId", self.plan_id);
        params.insert("name", self.name);
        params.insert_opt("currency", self.currency);
        params.insert("amount", self.amount);
        params.insert("interval", self.interval);
        params.insert_opt("interval_count", self.interval_count);
        params.insert_opt("trial_period_days", self.trial_period_days);
        params.insert_opt("days_until_due", self.days_until_due);
        params.insert_opt("periods_number", self.periods_number);
        params.insert("urlCallback", self.url_callback);
        params.insert_opt("charges_retries_number", self.charges_retries_number);
        params.insert_opt("currency_convert_option", self.currency_convert_option);
        Ok(params)
    }
}

/// Client for the `/plans` endpoints.
pub struct PlansClient<'a> {
    engine: &'a Engine,
}

impl<'a> PlansClient<'a> {
    pub(crate) fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    /// Create a subscription plan.
    pub async fn create(&self, params: PlanParams) -> FlowResult<Plan> {
        self.engine
            .post_signed("/plans/create", params.into_params()?)
            .await
    }

    /// Fetch a plan by its id.
    pub async fn get(&self, plan_id: &str) -> FlowResult<Plan> {
        require_non_empty("planId", plan_id)?;

        let mut params = Params::new();
        params.insert("planId", plan_id);
        self.engine.get_signed("/plans/get", params).await
    }

    /// Edit a plan.
    pub async fn edit(&self, params: PlanParams) -> FlowResult<Plan> {
        self.engine
            .post_signed("/plans/edit", params.into_params()?)
            .await
    }

    /// Delete a plan by its id.
    pub async fn delete(&self, plan_id: &str) -> FlowResult<Plan> {
        require_non_empty("planId", plan_id)?;

        let mut body = Params::new();
        body.insert("planId", plan_id);
        self.engine.post_signed("/plans/delete", body).await
    }

    /// List plans.
    ///
    /// Like coupon listing, the gateway verifies this signature over the
    /// filter alone; the API key is sent but not signed.
    pub async fn list(&self, filter: ListFilter) -> FlowResult<ListEnvelope<Value>> {
        let mut params = Params::new();
        filter.apply(&mut params);

        let signature = self.engine.sign(&params)?;
        params.insert(API_KEY_KEY, self.engine.api_key());
        params.insert(SIGNATURE_KEY, signature);
        self.engine.get("/plans/list", &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> PlanParams {
        PlanParams {
            plan_id: "plan-gold".to_string(),
            name: "Gold".to_string(),
            amount: 5000,
            interval: 3,
            url_callback: "https://example.com/hook".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_plan() {
        assert!(valid_params().validate().is_ok());
    }

    #[test]
    fn test_interval_out_of_range() {
        let mut params = valid_params();
        params.interval = 5;
        assert!(matches!(
            params.validate(),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_non_positive_amount() {
        let mut params = valid_params();
        params.amount = 0;
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_bad_callback_url() {
        let mut params = valid_params();
        params.url_callback = "example.com/hook".to_string();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_into_params_shape() {
        let params = valid_params().into_params().unwrap();
        assert_eq!(params.get("amount"), Some("5000"));
        assert_eq!(params.get("interval"), Some("3"));
        assert!(!params.contains_key("trial_period_days"));
    }
}
