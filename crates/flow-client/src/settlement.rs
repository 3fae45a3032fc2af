//! Settlement operations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use flow_core::Params;

use crate::engine::Engine;
use crate::error::FlowResult;

/// One settlement payment returned by a search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementPayment {
    pub id: i64,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default, rename = "taxId")]
    pub tax_id: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub status: Option<i64>,
}

/// Full detail of one settlement, including its movements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettlementDetail {
    pub id: i64,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub initial_balance: Option<i64>,

    #[serde(default)]
    pub final_balance: Option<i64>,

    #[serde(default)]
    pub billed: Option<Value>,

    #[serde(default)]
    pub summary: Option<Value>,
}

/// Search filter for settlements. Dates are `yyyy-mm-dd`.
#[derive(Debug, Clone, Default)]
pub struct SettlementSearchParams {
    pub from_date: Option<String>,
    pub until_date: Option<String>,
    pub currency: Option<String>,
}

/// Client for the `/settlement` endpoints.
pub struct SettlementClient<'a> {
    engine: &'a Engine,
}

impl<'a> SettlementClient<'a> {
    pub(crate) fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    /// Search settlements.
    ///
    /// This endpoint returns a bare array rather than the usual list
    /// envelope.
    pub async fn search(
        &self,
        search: SettlementSearchParams,
    ) -> FlowResult<Vec<SettlementPayment>> {
        let mut params = Params::new();
        params.insert_opt("fromDate", search.from_date);
        params.insert_opt("untilDate", search.until_date);
        params.insert_opt("currency", search.currency);
        self.engine.get_signed("/settlement/search", params).await
    }

    /// Fetch one settlement by its numeric id.
    ///
    /// The id is a path segment here, not a query parameter, but it is
    /// still part of the signed set.
    pub async fn get(&self, id: i64) -> FlowResult<SettlementDetail> {
        let mut params = Params::new();
        params.insert("id", id);
        let path = format!("/settlement/{}", id);
        self.engine.get_signed(&path, params).await
    }
}
