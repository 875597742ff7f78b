// thawani_models.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A created checkout session and where to send the payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub redirect_url: String,
}

/// A confirmed payment intent. `redirect_url` is the 3-D Secure step
/// (`data.next_action.url`) the payer has to complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedPayment {
    pub payment_id: String,
    pub redirect_url: String,
}

/// Pagination for list endpoints. Unset fields are left out of the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

impl ListParams {
    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(skip) = self.skip {
            query.push(("skip", skip.to_string()));
        }
        query
    }
}

/// A line item of a checkout session. `unit_amount` is in baisa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub quantity: u32,
    pub unit_amount: u64,
}

/// Body of `POST /checkout/session`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckoutSession {
    pub client_reference_id: String,
    /// Always `"payment"` for one-off checkouts.
    pub mode: String,
    pub products: Vec<Product>,
    pub success_url: String,
    pub cancel_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_card_on_success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl CreateCheckoutSession {
    pub fn new(
        client_reference_id: impl Into<String>,
        products: Vec<Product>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            client_reference_id: client_reference_id.into(),
            mode: "payment".to_string(),
            products,
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
            customer_id: None,
            save_card_on_success: None,
            metadata: None,
        }
    }
}

/// Body of `POST /customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomer {
    pub client_customer_id: String,
}

/// Body of `POST /payment_intents`. `amount` is in baisa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentIntent {
    pub payment_method_id: String,
    pub amount: u64,
    pub client_reference_id: String,
    pub return_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}
