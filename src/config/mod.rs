use std::env;

#[derive(Clone, Debug)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub database_url: String,
	pub max_pool_size: u32,
	pub fixture_dir: String,
	pub seed_on_startup: bool,
	pub hash_passwords: bool,
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		// Load .env file if it exists
		let _ = dotenvy::dotenv();

		Ok(Self {
			host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
			port: env::var("PORT")
				.unwrap_or_else(|_| "3002".to_string())
				.parse()
				.map_err(|_| ConfigError::InvalidPort)?,
			database_url: env::var("DATABASE_URL")
				.unwrap_or_else(|_| "sqlite://crm_database.db".to_string()),
			max_pool_size: env::var("MAX_POOL_SIZE")
				.unwrap_or_else(|_| "1".to_string())
				.parse()
				.map_err(|_| ConfigError::InvalidNumber("MAX_POOL_SIZE"))?,
			fixture_dir: env::var("FIXTURE_DIR").unwrap_or_else(|_| "dummy_data".to_string()),
			seed_on_startup: parse_flag("SEED_ON_STARTUP", true)?,
			hash_passwords: parse_flag("HASH_PASSWORDS", false)?,
		})
	}

	pub fn server_addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3002,
			database_url: "sqlite://crm_database.db".to_string(),
			max_pool_size: 1,
			fixture_dir: "dummy_data".to_string(),
			seed_on_startup: true,
			hash_passwords: false,
		}
	}
}

fn parse_flag(name: &'static str, default: bool) -> Result<bool, ConfigError> {
	match env::var(name) {
		Err(_) => Ok(default),
		Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
			"1" | "true" | "yes" | "on" => Ok(true),
			"0" | "false" | "no" | "off" => Ok(false),
			_ => Err(ConfigError::InvalidFlag(name)),
		},
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid port number")]
	InvalidPort,

	#[error("{0} must be a number")]
	InvalidNumber(&'static str),

	#[error("{0} must be a boolean flag")]
	InvalidFlag(&'static str),
}
