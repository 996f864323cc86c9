use crate::infrastructure::security::AdminCredentials;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub admin_username: String,
    pub admin_password: Option<String>,
    pub admin_password_hash: Option<String>,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
        let admin_username = std::env::var("ADMIN_USERNAME")
            .map_err(|_| anyhow::anyhow!("ADMIN_USERNAME must be set"))?;
        let admin_password = std::env::var("ADMIN_PASSWORD").ok();
        let admin_password_hash = std::env::var("ADMIN_PASSWORD_HASH").ok();
        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            database_url,
            admin_username,
            admin_password,
            admin_password_hash,
            cors_origins,
        })
    }

    /// Materializes the moderation credential. The hash form wins when
    /// both variables are set so a stray plaintext value cannot widen
    /// access.
    pub fn admin_credentials(&self) -> anyhow::Result<AdminCredentials> {
        if let Some(hash) = &self.admin_password_hash {
            return Ok(AdminCredentials::hashed(
                self.admin_username.clone(),
                hash.clone(),
            ));
        }
        if let Some(password) = &self.admin_password {
            return Ok(AdminCredentials::plain(
                self.admin_username.clone(),
                password.clone(),
            ));
        }
        Err(anyhow::anyhow!(
            "either ADMIN_PASSWORD or ADMIN_PASSWORD_HASH must be set"
        ))
    }
}
