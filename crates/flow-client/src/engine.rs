//! Signed-request engine.
//!
//! Shared by every resource client. A call flows strictly downward:
//! canonicalize + sign, encode as a query string or form body, dispatch a
//! single HTTP request, decode the JSON outcome. Nothing is retried and
//! nothing is cached; the engine holds no mutable state, so one instance
//! safely backs any number of concurrent calls.

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use flow_core::{FlowConfig, Params};
use flow_signing::Signer;

use crate::error::{FlowError, FlowResult};

/// Reserved parameter carrying the request signature.
pub const SIGNATURE_KEY: &str = "s";

/// Reserved parameter carrying the public API key.
pub const API_KEY_KEY: &str = "apiKey";

/// The signed-request engine.
///
/// Resource clients need exactly three things from it: [`Engine::sign`],
/// [`Engine::build_query_string`], and dispatch ([`Engine::get`] /
/// [`Engine::post`]). The `get_signed` / `post_signed` helpers cover the
/// common call shape where the API key is part of the signed set.
pub struct Engine {
    config: FlowConfig,
    signer: Signer,
    http: Client,
}

impl Engine {
    /// Build an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::Config` if the configuration is unusable and
    /// `FlowError::Transport` if the HTTP client cannot be constructed.
    pub fn new(config: FlowConfig) -> FlowResult<Self> {
        config.validate()?;
        let signer = Signer::new(config.secret());
        let http = Client::builder().build()?;
        Ok(Self {
            config,
            signer,
            http,
        })
    }

    /// Public API key from the configuration.
    pub fn api_key(&self) -> &str {
        self.config.api_key()
    }

    /// Sign a parameter set exactly as given.
    ///
    /// The signer neither adds nor strips `apiKey`; call sites that sign
    /// without it must pass it only to the encoder.
    pub fn sign(&self, params: &Params) -> FlowResult<String> {
        Ok(self.signer.sign(params)?)
    }

    /// Encode a parameter set as an `application/x-www-form-urlencoded`
    /// string, usable as a query string or a POST body.
    ///
    /// Keys are unique by construction; percent-encoding happens here and
    /// only here, never in the canonical form that was signed.
    pub fn build_query_string(&self, params: &Params) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Issue a GET with the parameters as the query string.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> FlowResult<T> {
        let url = format!(
            "{}{}?{}",
            self.config.base_url(),
            path,
            self.build_query_string(params)
        );

        debug!("GET {}", path);

        let response = self.http.get(&url).send().await?;
        handle_response(response).await
    }

    /// Issue a POST with the parameters as a form-urlencoded body.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, params: &Params) -> FlowResult<T> {
        let url = format!("{}{}", self.config.base_url(), path);
        let body = self.build_query_string(params);

        debug!("POST {}", path);

        let response = self
            .http
            .post(&url)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await?;
        handle_response(response).await
    }

    /// GET with the uniform signing shape: `apiKey` joins the set, the
    /// signature is computed over everything, and both travel in the query.
    pub async fn get_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Params,
    ) -> FlowResult<T> {
        params.insert(API_KEY_KEY, self.api_key());
        let signature = self.sign(&params)?;
        params.insert(SIGNATURE_KEY, signature);
        self.get(path, &params).await
    }

    /// POST counterpart of [`Engine::get_signed`].
    pub async fn post_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Params,
    ) -> FlowResult<T> {
        params.insert(API_KEY_KEY, self.api_key());
        let signature = self.sign(&params)?;
        params.insert(SIGNATURE_KEY, signature);
        self.post(path, &params).await
    }
}

/// Gateway error body: `{ "code": ..., "message": ... }`.
#[derive(Debug, serde::Deserialize)]
struct GatewayError {
    code: i64,
    message: String,
}

/// Decode a response into the caller's expected shape.
///
/// Non-2xx statuses raise `FlowError::Api`, preserving the gateway's own
/// code and message when the body carries them. The gateway can also report
/// errors inside a 200 body, so a 2xx object shaped like `{code, message}`
/// with a non-zero code is an error too.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> FlowResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        if let Ok(gateway) = serde_json::from_str::<GatewayError>(&body) {
            return Err(FlowError::Api {
                status: status.as_u16(),
                code: Some(gateway.code),
                message: gateway.message,
            });
        }
        return Err(FlowError::Api {
            status: status.as_u16(),
            code: None,
            message: body,
        });
    }

    if let Some(gateway) = in_body_error(&body) {
        return Err(FlowError::Api {
            status: status.as_u16(),
            code: Some(gateway.code),
            message: gateway.message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Detect an error payload delivered with a 2xx status.
///
/// Only a top-level object holding exactly a non-zero `code` and a
/// `message` counts; success payloads never have that exact shape.
fn in_body_error(body: &str) -> Option<GatewayError> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    if object.len() != 2 || !object.contains_key("code") || !object.contains_key("message") {
        return None;
    }
    let gateway: GatewayError = serde_json::from_value(value).ok()?;
    if gateway.code == 0 {
        return None;
    }
    Some(gateway)
}
