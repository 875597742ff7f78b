// thawani_config.rs
use super::thawani_error::ThawaniError;
use crate::utils::ensure_dotenv_loaded;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TEST_BASE_URL: &str = "https://uatcheckout.thawani.om/api/v1";
pub const DEFAULT_TEST_CHECKOUT_BASE_URL: &str = "https://uatcheckout.thawani.om/pay";
pub const DEFAULT_LIVE_BASE_URL: &str = "https://checkout.thawani.om/api/v1";
pub const DEFAULT_LIVE_CHECKOUT_BASE_URL: &str = "https://checkout.thawani.om/pay";

/// Selects which credential profile is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Test,
    Live,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Test => "test",
            Mode::Live => "live",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ThawaniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Mode::Test),
            "live" => Ok(Mode::Live),
            other => Err(ThawaniError::Configuration(format!(
                "Unknown Thawani mode '{other}' (expected 'test' or 'live')"
            ))),
        }
    }
}

/// One credential set for the Thawani API.
///
/// Keys are optional at load time; they are checked when an operation actually
/// needs them, so a `live` profile may stay empty while developing in `test`.
#[derive(Clone, Default)]
pub struct Profile {
    pub base_url: String,
    pub checkout_base_url: String,
    pub secret_key: Option<String>,
    pub publishable_key: Option<String>,
}

impl Profile {
    pub fn new(
        base_url: impl Into<String>,
        checkout_base_url: impl Into<String>,
        secret_key: Option<String>,
        publishable_key: Option<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            checkout_base_url: checkout_base_url.into(),
            secret_key: non_empty(secret_key),
            publishable_key: non_empty(publishable_key),
        }
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("base_url", &self.base_url)
            .field("checkout_base_url", &self.checkout_base_url)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("publishable_key", &self.publishable_key)
            .finish()
    }
}

/// Both Thawani profiles plus the mode that picks between them.
#[derive(Debug, Clone)]
pub struct ThawaniConfig {
    pub mode: Mode,
    pub test: Profile,
    pub live: Profile,
}

/// A profile that passed the credential check for the current call.
#[derive(Debug, Clone, Copy)]
pub struct ActiveProfile<'a> {
    pub mode: Mode,
    pub base_url: &'a str,
    pub checkout_base_url: &'a str,
    pub secret_key: &'a str,
    pub publishable_key: Option<&'a str>,
}

impl ThawaniConfig {
    pub fn new(mode: Mode, test: Profile, live: Profile) -> Self {
        Self { mode, test, live }
    }

    /// Loads the configuration from environment variables.
    ///
    /// Reads `THAWANI_MODE` (default `test`) and, for each of `TEST` and `LIVE`,
    /// `THAWANI_<MODE>_BASE_URL`, `THAWANI_<MODE>_CHECKOUT_BASE_URL`,
    /// `THAWANI_<MODE>_SECRET_KEY` and `THAWANI_<MODE>_PUBLISHABLE_KEY`.
    /// The URLs default to the public Thawani UAT and production hosts.
    pub fn load() -> Result<Self, ThawaniError> {
        ensure_dotenv_loaded();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ThawaniConfig::load`] but reading keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ThawaniError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = match non_empty(lookup("THAWANI_MODE")) {
            Some(raw) => raw.parse()?,
            None => Mode::default(),
        };

        let profile = |prefix: &str, base_url: &str, checkout_base_url: &str| {
            Profile::new(
                non_empty(lookup(&format!("THAWANI_{prefix}_BASE_URL")))
                    .unwrap_or_else(|| base_url.to_string()),
                non_empty(lookup(&format!("THAWANI_{prefix}_CHECKOUT_BASE_URL")))
                    .unwrap_or_else(|| checkout_base_url.to_string()),
                lookup(&format!("THAWANI_{prefix}_SECRET_KEY")),
                lookup(&format!("THAWANI_{prefix}_PUBLISHABLE_KEY")),
            )
        };

        Ok(Self {
            mode,
            test: profile("TEST", DEFAULT_TEST_BASE_URL, DEFAULT_TEST_CHECKOUT_BASE_URL),
            live: profile("LIVE", DEFAULT_LIVE_BASE_URL, DEFAULT_LIVE_CHECKOUT_BASE_URL),
        })
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn profile(&self, mode: Mode) -> &Profile {
        match mode {
            Mode::Test => &self.test,
            Mode::Live => &self.live,
        }
    }

    /// Resolves the profile selected by the current mode.
    ///
    /// Fails when that profile has no secret key.
    pub fn active_profile(&self) -> Result<ActiveProfile<'_>, ThawaniError> {
        let profile = self.profile(self.mode);
        let secret_key = profile.secret_key.as_deref().ok_or_else(|| {
            ThawaniError::Configuration(format!(
                "Secret key not configured for Thawani '{}' mode.",
                self.mode
            ))
        })?;

        Ok(ActiveProfile {
            mode: self.mode,
            base_url: &profile.base_url,
            checkout_base_url: &profile.checkout_base_url,
            secret_key,
            publishable_key: profile.publishable_key.as_deref(),
        })
    }

    /// Publishable key of the active profile, needed for the hosted payment page.
    pub fn publishable_key(&self) -> Result<&str, ThawaniError> {
        self.profile(self.mode)
            .publishable_key
            .as_deref()
            .ok_or_else(|| {
                ThawaniError::Configuration(format!(
                    "Publishable key not configured for Thawani '{}' mode.",
                    self.mode
                ))
            })
    }

    /// URL of the hosted payment page for `session_id`:
    /// `{checkout_base_url}/{session_id}?key={publishable_key}`.
    pub fn checkout_url(&self, session_id: &str) -> Result<String, ThawaniError> {
        let publishable_key = self.publishable_key()?;
        let checkout_base_url = &self.profile(self.mode).checkout_base_url;
        let session_id = urlencoding::encode(session_id);
        Ok(format!("{checkout_base_url}/{session_id}?key={publishable_key}"))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample() -> ThawaniConfig {
        ThawaniConfig::new(
            Mode::Test,
            Profile::new(
                "https://test.example/api/v1",
                "https://pay.example/pay",
                Some("SK_TEST".into()),
                Some("PUB".into()),
            ),
            Profile::new(
                "https://live.example/api/v1",
                "https://live.example/pay",
                Some("SK_LIVE".into()),
                None,
            ),
        )
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("test".parse::<Mode>().unwrap(), Mode::Test);
        assert_eq!(" LIVE ".parse::<Mode>().unwrap(), Mode::Live);
        assert!(matches!(
            "staging".parse::<Mode>(),
            Err(ThawaniError::Configuration(_))
        ));
    }

    #[test]
    fn checkout_url_uses_active_profile() {
        let config = sample();
        assert_eq!(
            config.checkout_url("sess_1").unwrap(),
            "https://pay.example/pay/sess_1?key=PUB"
        );
    }

    #[test]
    fn checkout_url_escapes_session_id() {
        assert_eq!(
            sample().checkout_url("sess/1?x").unwrap(),
            "https://pay.example/pay/sess%2F1%3Fx?key=PUB"
        );
    }

    #[test]
    fn checkout_url_requires_publishable_key() {
        let config = sample().with_mode(Mode::Live);
        let err = config.checkout_url("sess_1").unwrap_err();
        assert!(matches!(err, ThawaniError::Configuration(ref m) if m.contains("'live'")));
    }

    #[test]
    fn active_profile_follows_mode() {
        let config = sample();
        assert_eq!(config.active_profile().unwrap().secret_key, "SK_TEST");

        let config = config.with_mode(Mode::Live);
        let active = config.active_profile().unwrap();
        assert_eq!(active.base_url, "https://live.example/api/v1");
        assert_eq!(active.secret_key, "SK_LIVE");
        assert_eq!(active.publishable_key, None);
    }

    #[test]
    fn active_profile_requires_secret_key() {
        let mut config = sample();
        config.test.secret_key = None;
        assert!(matches!(
            config.active_profile(),
            Err(ThawaniError::Configuration(_))
        ));
    }

    #[test]
    fn empty_keys_count_as_missing() {
        let profile = Profile::new("a", "b", Some("".into()), Some("  ".into()));
        assert!(profile.secret_key.is_none());
        assert!(profile.publishable_key.is_none());
    }

    #[test]
    fn lookup_fills_defaults_and_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("THAWANI_MODE", "live"),
            ("THAWANI_TEST_SECRET_KEY", "sk_test"),
            ("THAWANI_LIVE_SECRET_KEY", "sk_live"),
            ("THAWANI_LIVE_PUBLISHABLE_KEY", "pk_live"),
            ("THAWANI_LIVE_BASE_URL", "https://proxy.example/api/v1"),
        ]);
        let config =
            ThawaniConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.mode, Mode::Live);
        assert_eq!(config.test.base_url, DEFAULT_TEST_BASE_URL);
        assert_eq!(config.test.checkout_base_url, DEFAULT_TEST_CHECKOUT_BASE_URL);
        assert_eq!(config.live.base_url, "https://proxy.example/api/v1");
        assert_eq!(config.live.checkout_base_url, DEFAULT_LIVE_CHECKOUT_BASE_URL);
        assert_eq!(
            config.checkout_url("s").unwrap(),
            format!("{DEFAULT_LIVE_CHECKOUT_BASE_URL}/s?key=pk_live")
        );
    }

    #[test]
    fn lookup_defaults_to_test_mode() {
        let config = ThawaniConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.mode, Mode::Test);
        assert!(config.active_profile().is_err());
    }

    #[test]
    fn lookup_rejects_unknown_mode() {
        let result = ThawaniConfig::from_lookup(|key| {
            (key == "THAWANI_MODE").then(|| "sandbox".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_hides_secret_key() {
        let rendered = format!("{:?}", sample());
        assert!(!rendered.contains("SK_TEST"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
