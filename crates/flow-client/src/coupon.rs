//! Discount coupon operations.

use serde::{Deserialize, Serialize};

use flow_core::{
    validation::{require_non_empty, require_positive},
    ListEnvelope, ListFilter, Params, ValidationError,
};

use crate::engine::{Engine, API_KEY_KEY, SIGNATURE_KEY};
use crate::error::FlowResult;

/// A discount coupon as returned by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discount {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub percent_off: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub created: Option<String>,

    #[serde(default)]
    pub duration: Option<i64>,

    #[serde(default)]
    pub times: Option<i64>,

    #[serde(default)]
    pub max_redemptions: Option<i64>,

    #[serde(default)]
    pub expires: Option<String>,

    #[serde(default)]
    pub status: Option<i64>,

    #[serde(default)]
    pub redemtions: Option<i64>,
}

/// Parameters for creating a coupon.
///
/// A coupon discounts either a percentage (`percent_off`) or a fixed
/// amount in a currency (`amount` + `currency`); exactly one of the two
/// forms must be present. Percentages are passed pre-formatted as strings
/// because their decimal form is part of the signed payload.
#[derive(Debug, Clone, Default)]
pub struct CreateCouponParams {
    pub name: String,
    pub percent_off: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<i64>,
    /// 1 = permanent, 0 = limited to `times` redemptions.
    pub duration: Option<u32>,
    pub times: Option<u32>,
    pub max_redemptions: Option<u32>,
    /// Expiration date, `yyyy-mm-dd`.
    pub expires: Option<String>,
}

impl CreateCouponParams {
    fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        match (&self.percent_off, self.amount) {
            (Some(_), Some(_)) | (None, None) => Err(ValidationError::InvalidValue {
                field: "percent_off/amount".to_string(),
                reason: "exactly one of percent_off or amount is required".to_string(),
            }),
            (None, Some(amount)) => {
                require_positive("amount", amount)?;
                match &self.currency {
                    Some(currency) => require_non_empty("currency", currency),
                    None => Err(ValidationError::MissingField("currency".to_string())),
                }
            }
            (Some(percent), None) => require_non_empty("percent_off", percent),
        }
    }

    fn into_params(self) -> Result<Params, ValidationError> {
        self.validate()?;
        let mut params = Params::new();
        params.insert("name", self.name);
        params.insert_opt("percent_off", self.percent_off);
        params.insert_opt("currency", self.currency);
        params.insert_opt("amount", self.amount);
        params.insert_opt("duration", self.duration);
        params.insert_opt("times", self.times);
        params.insert_opt("max_redemptions", self.max_redemptions);
        params.insert_opt("expires", self.expires);
        Ok(params)
    }
}

/// Parameters for editing a coupon. Only the name can change once created.
#[derive(Debug, Clone)]
pub struct EditCouponParams {
    pub coupon_id: String,
    pub name: String,
}

/// Client for the `/coupon` endpoints.
pub struct CouponClient<'a> {
    engine: &'a Engine,
}

impl<'a> CouponClient<'a> {
    pub(crate) fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    /// Create a discount coupon.
    pub async fn create(&self, params: CreateCouponParams) -> FlowResult<Discount> {
        self.engine
            .post_signed("/coupon/create", params.into_params()?)
            .await
    }

    /// Edit an existing coupon.
    pub async fn edit(&self, params: EditCouponParams) -> FlowResult<Discount> {
        require_non_empty("couponId", &params.coupon_id)?;
        require_non_empty("name", &params.name)?;

        let mut body = Params::new();
        body.insert("couponId", params.coupon_id);
        body.insert("name", params.name);
        self.engine.post_signed("/coupon/edit", body).await
    }

    /// Delete a coupon by its id.
    pub async fn delete(&self, coupon_id: &str) -> FlowResult<Discount> {
        require_non_empty("couponId", coupon_id)?;

        let mut body = Params::new();
        body.insert("couponId", coupon_id);
        self.engine.post_signed("/coupon/delete", body).await
    }

    /// Fetch a coupon by its id.
    pub async fn get(&self, coupon_id: &str) -> FlowResult<Discount> {
        require_non_empty("couponId", coupon_id)?;

        let mut params = Params::new();
        params.insert("couponId", coupon_id);
        self.engine.get_signed("/coupon/get", params).await
    }

    /// List coupons.
    ///
    /// The gateway verifies this endpoint's signature over the filter
    /// alone; the API key travels in the query but stays out of the signed
    /// set.
    pub async fn list(&self, filter: ListFilter) -> FlowResult<ListEnvelope<Discount>> {
        let mut params = Params::new();
        filter.apply(&mut params);

        let signature = self.engine.sign(&params)?;
        params.insert(API_KEY_KEY, self.engine.api_key());
        params.insert(SIGNATURE_KEY, signature);
        self.engine.get("/coupon/list", &params).await
    }
}
