use thiserror::Error;

const CONTACT_FUNCTION_PATH: &str = "/functions/v1/send-contact-email";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("SUPABASE_URL is not set")]
    MissingUrl,
    #[error("SUPABASE_ANON_KEY is not set")]
    MissingKey,
    #[error("backend URL must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
}

#[cfg(debug_assertions)]
pub fn get_backend_url() -> Option<&'static str> {
    // Local functions runtime when nothing is baked in at build time
    Some(option_env!("SUPABASE_URL").unwrap_or("http://localhost:54321"))
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> Option<&'static str> {
    option_env!("SUPABASE_URL")
}

pub fn get_public_key() -> Option<&'static str> {
    option_env!("SUPABASE_ANON_KEY")
}

/// Connection parameters for the backend function that sends contact emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
    public_key: String,
}

impl BackendConfig {
    /// Reads the values baked into the bundle at compile time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(get_backend_url(), get_public_key())
    }

    pub fn from_values(url: Option<&str>, key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let key = key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKey)?;

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }

        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
            public_key: key.to_string(),
        })
    }

    pub fn contact_endpoint(&self) -> String {
        format!("{}{}", self.base_url, CONTACT_FUNCTION_PATH)
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}
