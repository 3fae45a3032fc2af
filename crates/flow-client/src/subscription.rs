//! Subscription operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use flow_core::{
    validation::{require_non_empty, require_positive},
    ListEnvelope, ListFilter, Params, ValidationError,
};

use crate::engine::Engine;
use crate::error::FlowResult;

/// A subscription as returned by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    #[serde(rename = "subscriptionId")]
    pub subscription_id: String,

    #[serde(rename = "planId")]
    pub plan_id: String,

    #[serde(default, rename = "planName")]
    pub plan_name: Option<String>,

    #[serde(default, rename = "customerId")]
    pub customer_id: Option<String>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub subscription_start: Option<String>,

    #[serde(default)]
    pub subscription_end: Option<String>,

    #[serde(default)]
    pub period_start: Option<String>,

    #[serde(default)]
    pub period_end: Option<String>,

    #[serde(default)]
    pub next_invoice_date: Option<String>,

    #[serde(default)]
    pub trial_period_days: Option<i64>,

    #[serde(default)]
    pub trial_start: Option<String>,

    #[serde(default)]
    pub trial_end: Option<String>,

    #[serde(default)]
    pub cancel_at_period_end: Option<i64>,

    #[serde(default)]
    pub cancel_at: Option<String>,

    #[serde(default)]
    pub periods_number: Option<i64>,

    #[serde(default)]
    pub days_until_due: Option<i64>,

    #[serde(default)]
    pub status: Option<i64>,

    #[serde(default)]
    pub morose: Option<i64>,

    #[serde(default)]
    pub discount: Option<Value>,

    #[serde(default)]
    pub invoices: Option<Value>,
}

/// Parameters for creating a subscription.
#[derive(Debug, Clone, Default)]
pub struct CreateSubscriptionParams {
    pub plan_id: String,
    pub customer_id: String,
    /// First billing date, `yyyy-mm-dd`; absent means immediately.
    pub subscription_start: Option<String>,
    pub coupon_id: Option<i64>,
    pub trial_period_days: Option<u32>,
    pub periods_number: Option<u32>,
}

impl CreateSubscriptionParams {
    fn into_params(self) -> Result<Params, ValidationError> {
        require_non_empty("planId", &self.plan_id)?;
        require_non_empty("customerId", &self.customer_id)?;

        let mut params = Params::new();
        params.insert("planId", self.plan_id);
        params.insert("customerId", self.customer_id);
        params.insert_opt("subscription_start", self.subscription_start);
        params.insert_opt("couponId", self.coupon_id);
        params.insert_opt("trial_period_days", self.trial_period_days);
        params.insert_opt("periods_number", self.periods_number);
        Ok(params)
    }
}

/// Client for the `/subscription` endpoints.
pub struct SubscriptionClient<'a> {
    engine: &'a Engine,
}

impl<'a> SubscriptionClient<'a> {
    pub(crate) fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    /// Subscribe a customer to a plan.
    pub async fn create(&self, params: CreateSubscriptionParams) -> FlowResult<Subscription> {
        self.engine
            .post_signed("/subscription/create", params.into_params()?)
            .await
    }

    /// Fetch a subscription by its id.
    pub async fn get(&self, subscription_id: &str) -> FlowResult<Subscription> {
        require_non_empty("subscriptionId", subscription_id)?;

        let mut params = Params::new();
        params.insert("subscriptionId", subscription_id);
        self.engine.get_signed("/subscription/get", params).await
    }

    /// List the subscriptions of a plan.
    pub async fn list(
        &self,
        plan_id: &str,
        filter: ListFilter,
    ) -> FlowResult<ListEnvelope<Subscription>> {
        require_non_empty("planId", plan_id)?;

        let mut params = Params::new();
        params.insert("planId", plan_id);
        filter.apply(&mut params);
        self.engine.get_signed("/subscription/list", params).await
    }

    /// Change the trial period of a subscription that has not started its
    /// trial yet.
    pub async fn change_trial(
        &self,
        subscription_id: &str,
        trial_period_days: u32,
    ) -> FlowResult<Subscription> {
        require_non_empty("subscriptionId", subscription_id)?;
        require_positive("trial_period_days", i64::from(trial_period_days))?;

        let mut body = Params::new();
        body.insert("subscriptionId", subscription_id);
        body.insert("trial_period_days", trial_period_days);
        self.engine
            .post_signed("/subscription/changeTrial", body)
            .await
    }

    /// Cancel a subscription, immediately or at the period end.
    pub async fn cancel(
        &self,
        subscription_id: &str,
        at_period_end: bool,
    ) -> FlowResult<Subscription> {
        require_non_empty("subscriptionId", subscription_id)?;

        let mut body = Params::new();
        body.insert("subscriptionId", subscription_id);
        // The gateway expects 0/1, not true/false.
        body.insert("at_period_end", u32::from(at_period_end));
        self.engine.post_signed("/subscription/cancel", body).await
    }

    /// Attach a discount coupon to a subscription.
    pub async fn add_coupon(
        &self,
        subscription_id: &str,
        coupon_id: i64,
    ) -> FlowResult<Subscription> {
        require_non_empty("subscriptionId", subscription_id)?;

        let mut body = Params::new();
        body.insert("subscriptionId", subscription_id);
        body.insert("couponId", coupon_id);
        self.engine
            .post_signed("/subscription/addCoupon", body)
            .await
    }

    /// Remove the discount coupon from a subscription.
    pub async fn delete_coupon(&self, subscription_id: &str) -> FlowResult<Subscription> {
        require_non_empty("subscriptionId", subscription_id)?;

        let mut body = Params::new();
        body.insert("subscriptionId", subscription_id);
        self.engine
            .post_signed("/subscription/deleteCoupon", body)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_required_fields() {
        let missing_plan = CreateSubscriptionParams {
            customer_id: "cus_001".to_string(),
            ..Default::default()
        };
        assert!(missing_plan.into_params().is_err());

        let valid = CreateSubscriptionParams {
            plan_id: "plan-gold".to_string(),
            customer_id: "cus_001".to_string(),
            ..Default::default()
        };
        let params = valid.into_params().unwrap();
        assert_eq!(params.get("planId"), Some("plan-gold"));
        assert!(!params.contains_key("couponId"));
    }
}
