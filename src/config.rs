use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Paystack,
    KoraPay,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Paystack => "paystack",
            Provider::KoraPay => "korapay",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::Paystack => "https://api.paystack.co",
            Provider::KoraPay => "https://api.korapay.com/merchant/api/v1",
        }
    }

    pub fn base_url_var(&self) -> &'static str {
        match self {
            Provider::Paystack => "PAYSTACK_BASE_URL",
            Provider::KoraPay => "KORAPAY_BASE_URL",
        }
    }

    pub fn public_key_var(&self) -> &'static str {
        match self {
            Provider::Paystack => "PAYSTACK_PUBLIC_KEY",
            Provider::KoraPay => "KORAPAY_PUBLIC_KEY",
        }
    }

    pub fn secret_key_var(&self) -> &'static str {
        match self {
            Provider::Paystack => "PAYSTACK_SECRET_KEY",
            Provider::KoraPay => "KORAPAY_SECRET_KEY",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Payment provider
    pub provider: Provider,
    pub base_url: String,
    pub public_key: Option<String>,
    pub secret_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = Self::parse_provider(lookup("PAYMENT_PROVIDER"))?;

        let config = Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("Invalid PORT")?,

            provider,
            base_url: lookup(provider.base_url_var())
                .unwrap_or_else(|| provider.default_base_url().to_string()),
            public_key: lookup(provider.public_key_var()).filter(|v| !v.is_empty()),
            secret_key: lookup(provider.secret_key_var()).filter(|v| !v.is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_provider(value: Option<String>) -> Result<Provider> {
        let provider = value.unwrap_or_else(|| "paystack".to_string());

        match provider.to_lowercase().as_str() {
            "paystack" => Ok(Provider::Paystack),
            "korapay" | "kora" => Ok(Provider::KoraPay),
            _ => bail!("Unknown payment provider: {}", provider),
        }
    }

    /// True when the secret key is a test-mode key.
    pub fn is_test_mode(&self) -> bool {
        self.secret_key
            .as_deref()
            .is_some_and(|key| key.starts_with("sk_test_"))
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http") {
            bail!("{} must be HTTP(S) URL", self.provider.base_url_var());
        }

        // Keys are optional here; callers that need the secret fail on use.
        if self.secret_key.is_none() {
            tracing::warn!("{} is not set", self.provider.secret_key_var());
        }
        if self.public_key.is_none() {
            tracing::warn!("{} is not set", self.provider.public_key_var());
        }

        Ok(())
    }
}
