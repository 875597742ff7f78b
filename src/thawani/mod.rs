//! # Thawani Module
//!
//! Async client and Actix-Web routes for the [Thawani](https://thawani.om) checkout API.
pub mod thawani_client;
pub mod thawani_config;
pub mod thawani_error;
pub mod thawani_handlers;
pub mod thawani_models;

pub use thawani_client::{Method, ThawaniClient, API_KEY_HEADER};
pub use thawani_config::{ActiveProfile, Mode, Profile, ThawaniConfig};
pub use thawani_error::ThawaniError;
pub use thawani_handlers::configure;
pub use thawani_models::{
    CheckoutSession, ConfirmedPayment, CreateCheckoutSession, CreateCustomer, CreatePaymentIntent,
    ListParams, Product,
};
