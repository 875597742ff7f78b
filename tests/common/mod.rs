// tests/common/mod.rs
#![allow(dead_code)]

use tiny_thawani::thawani::{Mode, Profile, ThawaniClient, ThawaniConfig};
use wiremock::MockServer;

pub const TEST_SECRET: &str = "sk_test_secret";
pub const TEST_PUBLISHABLE: &str = "PUB";
pub const LIVE_SECRET: &str = "sk_live_secret";
pub const CHECKOUT_BASE: &str = "https://pay.example/pay";

/// Config whose `test` profile points at `test_server` and whose `live`
/// profile points at `live_base_url`.
pub fn config_for(test_server: &MockServer, live_base_url: &str) -> ThawaniConfig {
    ThawaniConfig::new(
        Mode::Test,
        Profile::new(
            format!("{}/api/v1", test_server.uri()),
            CHECKOUT_BASE,
            Some(TEST_SECRET.into()),
            Some(TEST_PUBLISHABLE.into()),
        ),
        Profile::new(
            format!("{live_base_url}/api/v1"),
            "https://live.example/pay",
            Some(LIVE_SECRET.into()),
            None,
        ),
    )
}

pub fn client_for(server: &MockServer) -> ThawaniClient {
    ThawaniClient::new(config_for(server, "http://127.0.0.1:9"))
}
