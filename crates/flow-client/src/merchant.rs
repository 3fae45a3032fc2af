//! Associated commerce operations.
//!
//! These endpoints have the most irregular request shapes in the API:
//! mutations sign with the API key but send a body without it. Both sides
//! are reproduced exactly; normalizing them would break signature
//! verification at the gateway.

use serde::{Deserialize, Serialize};

use flow_core::{
    validation::{require_non_empty, require_url},
    ListEnvelope, ListFilter, Params, ValidationError,
};

use crate::engine::{Engine, API_KEY_KEY, SIGNATURE_KEY};
use crate::error::FlowResult;

/// An associated commerce as returned by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssociatedCommerce {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default, rename = "createdate")]
    pub created_date: Option<String>,

    #[serde(default)]
    pub status: Option<i64>,

    #[serde(default, rename = "verifydate")]
    pub verify_date: Option<String>,
}

/// Acknowledgement of an associated commerce deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteCommerceResponse {
    pub status: String,
    pub message: String,
}

/// Parameters for creating or editing an associated commerce.
#[derive(Debug, Clone, Default)]
pub struct AssociatedCommerceParams {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
}

impl AssociatedCommerceParams {
    fn into_params(self) -> Result<Params, ValidationError> {
        require_non_empty("id", &self.id)?;
        require_non_empty("name", &self.name)?;
        if let Some(url) = &self.url {
            require_url("url", url)?;
        }

        let mut params = Params::new();
        params.insert("id", self.id);
        params.insert("name", self.name);
        params.insert_opt("url", self.url);
        Ok(params)
    }
}

/// Client for the `/merchant` endpoints.
pub struct MerchantClient<'a> {
    engine: &'a Engine,
}

impl<'a> MerchantClient<'a> {
    pub(crate) fn new(engine: &'a Engine) -> Self {
        Self { engine }
    }

    /// Sign `params` with the API key included, then strip the key from
    /// the outgoing body. The gateway expects exactly this shape for
    /// merchant mutations.
    async fn post_key_outside_body<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        mut params: Params,
    ) -> FlowResult<T> {
        params.insert(API_KEY_KEY, self.engine.api_key());
        let signature = self.engine.sign(&params)?;

        let mut body = Params::new();
        for (key, value) in params.iter() {
            if key != API_KEY_KEY {
                body.insert(key, value);
            }
        }
        body.insert(SIGNATURE_KEY, signature);
        self.engine.post(path, &body).await
    }

    /// Create an associated commerce.
    pub async fn create(&self, params: AssociatedCommerceParams) -> FlowResult<AssociatedCommerce> {
        self.post_key_outside_body("/merchant/create", params.into_params()?)
            .await
    }

    /// Edit an associated commerce.
    pub async fn edit(&self, params: AssociatedCommerceParams) -> FlowResult<AssociatedCommerce> {
        self.post_key_outside_body("/merchant/edit", params.into_params()?)
            .await
    }

    /// Delete an associated commerce by its id.
    pub async fn delete(&self, commerce_id: &str) -> FlowResult<DeleteCommerceResponse> {
        require_non_empty("id", commerce_id)?;

        let mut params = Params::new();
        params.insert("id", commerce_id);
        self.post_key_outside_body("/merchant/delete", params).await
    }

    /// Fetch an associated commerce by its id.
    pub async fn get(&self, commerce_id: &str) -> FlowResult<AssociatedCommerce> {
        require_non_empty("id", commerce_id)?;

        let mut params = Params::new();
        params.insert("id", commerce_id);
        self.engine.get_signed("/merchant/get", params).await
    }

    /// List associated commerces.
    pub async fn list(&self, filter: ListFilter) -> FlowResult<ListEnvelope<AssociatedCommerce>> {
        let mut params = Params::new();
        filter.apply(&mut params);
        self.engine.get_signed("/merchant/list", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_validation() {
        let valid = AssociatedCommerceParams {
            id: "C-100".to_string(),
            name: "Shop".to_string(),
            url: Some("https://shop.example.com".to_string()),
        };
        assert!(valid.into_params().is_ok());

        let bad_url = AssociatedCommerceParams {
            id: "C-100".to_string(),
            name: "Shop".to_string(),
            url: Some("shop.example.com".to_string()),
        };
        assert!(bad_url.into_params().is_err());

        let empty_id = AssociatedCommerceParams {
            id: String::new(),
            name: "Shop".to_string(),
            url: None,
        };
        assert!(empty_id.into_params().is_err());
    }
}
