// thawani_client.rs
use super::thawani_config::{Mode, ThawaniConfig};
use super::thawani_error::ThawaniError;
use super::thawani_models::{CheckoutSession, ConfirmedPayment, ListParams};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Header carrying the secret key on every request.
pub const API_KEY_HEADER: &str = "thawani-api-key";

/// Business codes that mark a successful call on the narrowed operations.
pub const CODE_OK: i64 = 2000;
pub const CODE_CREATED: i64 = 2001;
pub const CODE_SESSION_CREATED: i64 = 2004;

const NO_BODY: Option<&Value> = None;

/// HTTP verbs the Thawani API is called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Async client for the Thawani checkout API.
///
/// The client owns its configuration. The profile is resolved on every call
/// from the client's current mode, so [`ThawaniClient::set_mode`] or
/// [`ThawaniClient::with_mode`] take effect on the next request. Clones share
/// the underlying connection pool and are safe to use from several tasks.
#[derive(Debug, Clone)]
pub struct ThawaniClient {
    http: Client,
    config: ThawaniConfig,
}

impl ThawaniClient {
    pub fn new(config: ThawaniConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Uses an existing `reqwest::Client`, e.g. one shared by the host app.
    pub fn with_http_client(http: Client, config: ThawaniConfig) -> Self {
        Self { http, config }
    }

    /// Builds a client from the environment, see [`ThawaniConfig::load`].
    pub fn from_env() -> Result<Self, ThawaniError> {
        Ok(Self::new(ThawaniConfig::load()?))
    }

    pub fn config(&self) -> &ThawaniConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
    }

    /// A copy of this client talking to the other profile.
    pub fn with_mode(&self, mode: Mode) -> Self {
        let mut client = self.clone();
        client.set_mode(mode);
        client
    }

    /// Hosted payment page URL for `session_id`. No network call.
    pub fn checkout_url(&self, session_id: &str) -> Result<String, ThawaniError> {
        self.config.checkout_url(session_id)
    }

    /// Creates a checkout session and builds the payment page URL for it.
    ///
    /// Succeeds only on `success: true` with code `2004`.
    pub async fn create_checkout_session<T>(&self, data: &T) -> Result<CheckoutSession, ThawaniError>
    where
        T: Serialize + ?Sized,
    {
        let envelope = self
            .execute(Method::Post, "/checkout/session", Some(data))
            .await?;

        if is_success(&envelope, CODE_SESSION_CREATED) {
            if let Some(session_id) = envelope.pointer("/data/session_id").and_then(Value::as_str) {
                let redirect_url = self.checkout_url(session_id)?;
                return Ok(CheckoutSession {
                    session_id: session_id.to_string(),
                    redirect_url,
                });
            }
        }

        Err(ThawaniError::from_envelope(Some(&envelope)))
    }

    pub async fn retrieve_checkout_session(&self, session_id: &str) -> Result<Value, ThawaniError> {
        self.execute(Method::Get, &format!("/checkout/session/{}", id_segment(session_id)?), NO_BODY)
            .await
    }

    pub async fn list_checkout_sessions(&self, params: ListParams) -> Result<Value, ThawaniError> {
        self.execute_with_query(Method::Get, "/checkout/session/", &params.to_query(), NO_BODY)
            .await
    }

    pub async fn cancel_checkout_session(&self, session_id: &str) -> Result<Value, ThawaniError> {
        self.execute(Method::Post, &format!("/checkout/{}/cancel", id_segment(session_id)?), NO_BODY)
            .await
    }

    /// Creates a customer so cards can be saved against it.
    pub async fn create_customer<T>(&self, data: &T) -> Result<Value, ThawaniError>
    where
        T: Serialize + ?Sized,
    {
        self.execute(Method::Post, "/customers", Some(data)).await
    }

    pub async fn retrieve_customer(&self, customer_id: &str) -> Result<Value, ThawaniError> {
        self.execute(Method::Get, &format!("/customers/{}/", id_segment(customer_id)?), NO_BODY)
            .await
    }

    pub async fn delete_customer(&self, customer_id: &str) -> Result<Value, ThawaniError> {
        self.execute(Method::Delete, &format!("/customers/{}/", id_segment(customer_id)?), NO_BODY)
            .await
    }

    /// Saved payment methods (cards) of a customer.
    pub async fn customer_payment_methods(&self, customer_id: &str) -> Result<Value, ThawaniError> {
        let query = [("customer_id", customer_id.to_string())];
        self.execute_with_query(Method::Get, "/payment_methods", &query, NO_BODY)
            .await
    }

    pub async fn delete_payment_method(&self, card_id: &str) -> Result<Value, ThawaniError> {
        self.execute(Method::Delete, &format!("/payment_methods/{}", id_segment(card_id)?), NO_BODY)
            .await
    }

    /// Creates an off-session payment intent against a saved card and returns
    /// its id. Succeeds only on `success: true` with code `2001`.
    pub async fn create_payment_intent<T>(&self, data: &T) -> Result<String, ThawaniError>
    where
        T: Serialize + ?Sized,
    {
        let envelope = self
            .execute(Method::Post, "/payment_intents", Some(data))
            .await?;

        if is_success(&envelope, CODE_CREATED) {
            if let Some(id) = envelope.pointer("/data/id").and_then(Value::as_str) {
                return Ok(id.to_string());
            }
        }

        Err(ThawaniError::from_envelope(Some(&envelope)))
    }

    /// Confirms a payment intent. Succeeds only on `success: true` with code `2000`.
    pub async fn confirm_payment_intent(
        &self,
        payment_intent_id: &str,
    ) -> Result<ConfirmedPayment, ThawaniError> {
        let envelope = self
            .execute(
                Method::Post,
                &format!("/payment_intents/{}/confirm", id_segment(payment_intent_id)?),
                NO_BODY,
            )
            .await?;

        if is_success(&envelope, CODE_OK) {
            let payment_id = envelope.pointer("/data/id").and_then(Value::as_str);
            let redirect_url = envelope
                .pointer("/data/next_action/url")
                .and_then(Value::as_str);
            if let (Some(payment_id), Some(redirect_url)) = (payment_id, redirect_url) {
                return Ok(ConfirmedPayment {
                    payment_id: payment_id.to_string(),
                    redirect_url: redirect_url.to_string(),
                });
            }
        }

        Err(ThawaniError::from_envelope(Some(&envelope)))
    }

    pub async fn retrieve_payment_intent(
        &self,
        payment_intent_id: &str,
    ) -> Result<Value, ThawaniError> {
        self.execute(
            Method::Get,
            &format!("/payment_intents/{}", id_segment(payment_intent_id)?),
            NO_BODY,
        )
        .await
    }

    pub async fn cancel_payment_intent(
        &self,
        payment_intent_id: &str,
    ) -> Result<Value, ThawaniError> {
        self.execute(
            Method::Post,
            &format!("/payment_intents/{}/cancel", id_segment(payment_intent_id)?),
            NO_BODY,
        )
        .await
    }

    /// Sends one request to `base_url + path` of the active profile and returns
    /// the parsed JSON body of a 2xx response.
    ///
    /// Everything else (non-2xx, unreadable body, transport failure) ends in
    /// [`ThawaniError::from_envelope`].
    pub async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
    ) -> Result<Value, ThawaniError>
    where
        T: Serialize + ?Sized,
    {
        self.execute_with_query(method, path, &[], body).await
    }

    /// [`ThawaniClient::execute`] with URL query parameters.
    pub async fn execute_with_query<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&T>,
    ) -> Result<Value, ThawaniError>
    where
        T: Serialize + ?Sized,
    {
        let profile = self.config.active_profile()?;
        let url = format!("{}{}", profile.base_url.trim_end_matches('/'), path);
        debug!(mode = %profile.mode, ?method, %url, "Calling Thawani API");

        let mut request = self
            .http
            .request(method.into(), &url)
            .header(API_KEY_HEADER, profile.secret_key)
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        request = match (method, body) {
            (_, Some(body)) => request.json(body),
            // POSTs always carry a JSON body, even an empty one.
            (Method::Post, None) => request.json(&Map::new()),
            _ => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, %url, "Thawani request failed");
                return Err(ThawaniError::from_envelope(None));
            }
        };

        let status = response.status();
        let parsed = match response.bytes().await {
            // An empty 2xx body (e.g. 204 on a delete) is a success without content.
            Ok(bytes) if status.is_success() && bytes.iter().all(u8::is_ascii_whitespace) => {
                Some(Value::Null)
            }
            Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(error = %e, %status, %url, "Thawani response body is not JSON");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, %status, %url, "Failed to read Thawani response body");
                None
            }
        };

        match parsed {
            Some(value) if status.is_success() => Ok(value),
            parsed => {
                let err = ThawaniError::from_envelope(parsed.as_ref());
                warn!(%status, %url, error = %err, "Thawani API call unsuccessful");
                Err(err)
            }
        }
    }
}

/// Escapes a caller-supplied id so it stays a single path segment.
///
/// Empty, `.` and `..` ids are rejected since URL normalisation would drop or
/// climb over them.
fn id_segment(id: &str) -> Result<Cow<'_, str>, ThawaniError> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(ThawaniError::InvalidId(id.to_string()));
    }
    Ok(urlencoding::encode(id))
}

fn is_success(envelope: &Value, expected_code: i64) -> bool {
    envelope.get("success").and_then(Value::as_bool) == Some(true)
        && envelope.get("code").and_then(Value::as_i64) == Some(expected_code)
}
