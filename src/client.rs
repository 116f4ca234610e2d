//! Blocking HTTP client for the headless commerce backend.
//!
//! The backend wraps every response body in a `{ "data": ..., "meta": ... }`
//! envelope; the helpers here unwrap it. Non-2xx responses are mapped to
//! [`SnapcartError::Api`] with whatever message body the backend returned.

use std::time::Duration;

use rand::Rng;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::checkout::CommerceBackend;
use crate::config;
use crate::error::{Result, SnapcartError};
use crate::models::{OrderPayload, OrderReceipt};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    reference: String,
    amount: u64,
    #[serde(flatten)]
    payload: &'a OrderPayload,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// HTTP client bound to one backend base URL.
///
/// When offline, every backend call fails early with
/// [`SnapcartError::Offline`] instead of touching the network.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    offline: bool,
    client: Client,
}

impl ApiClient {
    /// Create a client for `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration, offline: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            offline,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn ensure_online(&self, path: &str) -> Result<()> {
        if self.offline {
            return Err(SnapcartError::Offline(format!(
                "offline mode is enabled; cannot reach {}",
                path
            )));
        }
        Ok(())
    }

    /// Map a non-2xx response to an API error carrying the body text.
    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().unwrap_or_default();
        Err(SnapcartError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // -- Read side ---------------------------------------------------------

    /// GET a collection endpoint, unwrapping the response envelope.
    pub fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Vec<T>> {
        self.ensure_online(path)?;
        let resp = self.client.get(self.url(path)).query(query).send()?;
        let envelope: Envelope<Vec<T>> = Self::check(resp)?.json()?;
        Ok(envelope.data)
    }

    /// GET a single-record endpoint. A 404 becomes `Ok(None)` rather than
    /// an error: absent records are an ordinary answer on the read side.
    pub fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.ensure_online(path)?;
        let resp = self.client.get(self.url(path)).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: Envelope<T> = Self::check(resp)?.json()?;
        Ok(Some(envelope.data))
    }

    // -- Write side --------------------------------------------------------

    /// POST a JSON body wrapped in the backend's `{ "data": ... }` envelope,
    /// unwrapping the enveloped response.
    pub fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.ensure_online(path)?;
        let resp = self
            .client
            .post(self.url(path))
            .json(&serde_json::json!({ "data": body }))
            .send()?;
        let envelope: Envelope<T> = Self::check(resp)?.json()?;
        Ok(envelope.data)
    }
}

/// Generate a human-facing order reference code, e.g. `ORD-483920`.
fn order_reference() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("ORD-{:06}", n)
}

impl CommerceBackend for ApiClient {
    fn create_order(&self, payload: &OrderPayload) -> Result<OrderReceipt> {
        let request = CreateOrderRequest {
            reference: order_reference(),
            amount: payload.total(),
            payload,
        };
        self.post(config::ORDERS_PATH, &request)
    }

    fn payment_token(&self, receipt: &OrderReceipt) -> Result<String> {
        let body = serde_json::json!({
            "order_id": receipt.order_id,
            "reference": receipt.reference,
            "gross_amount": receipt.amount,
        });
        let resp: TokenResponse = self.post(config::PAYMENT_TOKEN_PATH, &body)?;
        Ok(resp.token)
    }
}
