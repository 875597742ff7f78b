//! # tiny_thawani
//!
//! `tiny_thawani` is a small Actix-Web plugin and async client for the
//! [Thawani](https://thawani.om) checkout API: checkout sessions, customers,
//! saved payment methods and payment intents.
//!
//! ## ✅ Features
//!
//! - 💰 Checkout sessions with a ready-made hosted payment page URL
//! - 👤 Customers and their saved cards
//! - 💳 Off-session payment intents (create, confirm, retrieve, cancel)
//! - 🔀 `test` / `live` credential profiles, switchable per client
//! - 🔌 Mountable Actix-Web routes under `/api/thawani`
//! - 🔐 Rate limiting with `actix-governor` in the bundled server
//!
//! ## 🔧 Configuration
//!
//! Start the bundled server like this:
//!
//! ```bash
//! cargo run -- .env.production
//! ```
//!
//! ### Thawani settings
//!
//! - `THAWANI_MODE=test` (`test` or `live`, default: `test`)
//! - `THAWANI_TEST_SECRET_KEY`, `THAWANI_TEST_PUBLISHABLE_KEY`
//! - `THAWANI_LIVE_SECRET_KEY`, `THAWANI_LIVE_PUBLISHABLE_KEY`
//! - `THAWANI_TEST_BASE_URL`, `THAWANI_TEST_CHECKOUT_BASE_URL` (optional, default: UAT hosts)
//! - `THAWANI_LIVE_BASE_URL`, `THAWANI_LIVE_CHECKOUT_BASE_URL` (optional, default: production hosts)
//!
//! ### Server
//!
//! - `SERVER_HOST=127.0.0.1`, `SERVER_PORT=6666`
//! - `GOVERNOR_BURST=5`, `GOVERNOR_PER_SECOND=2`
//! - `RUST_LOG=info`
//!
//! The dotenv file is `.env` unless `DOTENV_PATH` (or, for the bundled
//! server only, the first command-line argument) names another one.
//!
//! ## 🔒 Access control
//!
//! The routes mounted by [`thawani::configure`] act with the server's secret
//! key, including deletes and cancellations, and do no authentication of
//! their own. The host app **must** put them behind its own auth, for example
//! a guarded scope or an auth middleware:
//!
//! ```no_run
//! use actix_web::{guard, web, App};
//! use tiny_thawani::thawani::{self, ThawaniClient};
//!
//! # fn build(client: ThawaniClient) {
//! let app = App::new().app_data(web::Data::new(client)).service(
//!     web::scope("/internal")
//!         .guard(guard::Header("x-internal-token", "change-me"))
//!         .configure(thawani::configure),
//! );
//! # }
//! ```
//!
//! ## 🚀 Using the client directly
//!
//! ```no_run
//! use tiny_thawani::thawani::{CreateCheckoutSession, Product, ThawaniClient};
//!
//! # async fn run() -> Result<(), tiny_thawani::thawani::ThawaniError> {
//! let client = ThawaniClient::from_env()?;
//! let session = client
//!     .create_checkout_session(&CreateCheckoutSession::new(
//!         "order-42",
//!         vec![Product { name: "Consultation".into(), quantity: 1, unit_amount: 1500 }],
//!         "https://shop.example/success",
//!         "https://shop.example/cancel",
//!     ))
//!     .await?;
//! println!("redirect the payer to {}", session.redirect_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## 📚 Modules
//!
//! - [`thawani`](crate::thawani) — Thawani client, configuration and routes
//! - [`config`](crate::config) — Server configuration
//! - [`utils`](crate::utils) — Environment loader
//!
//! ## 📄 License
//!
//! MIT License © [Holger Trahe](https://github.com/holg)

pub mod config;
pub mod thawani;
pub mod utils;
