use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub storage: StorageBackend,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub test_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthSettings {
    pub domain: String,
    pub audience: String,
    pub jwks_url: Option<String>,
    /// Local JWKS document. Takes precedence over `jwks_url` when set.
    pub jwks_path: Option<String>,
    #[serde(default = "default_jwks_cache_ttl_secs")]
    pub jwks_cache_ttl_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

fn default_jwks_cache_ttl_secs() -> u64 {
    300
}

impl DatabaseSettings {
    // The test environment always talks to the test database.
    pub fn connection_string(&self, environment: Environment) -> &str {
        match environment {
            Environment::Test => self.test_url.as_str(),
            _ => self.url.as_str(),
        }
    }
}

impl AuthSettings {
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }

    pub fn jwks_url(&self) -> String {
        self.jwks_url
            .clone()
            .unwrap_or_else(|| format!("https://{}/.well-known/jwks.json", self.domain))
    }
}

// Variable names used by earlier deployments of the service.
const LEGACY_ENV_OVERRIDES: [(&str, &str); 6] = [
    ("DATABASE_URL", "database.url"),
    ("TEST_DATABASE_URL", "database.test_url"),
    ("APP_ENVIRONMENT", "environment"),
    ("AUTH0_DOMAIN", "auth.domain"),
    ("API_AUDIENCE", "auth.audience"),
    ("JWKS_URL", "auth.jwks_url"),
];

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut builder = config::Config::builder()
        .set_default("app_host", "0.0.0.0")?
        .set_default("app_port", 8080)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        );

    for (variable, key) in LEGACY_ENV_OVERRIDES {
        builder = builder.set_override_option(key, std::env::var(variable).ok())?;
    }

    builder.build()?.try_deserialize()
}
