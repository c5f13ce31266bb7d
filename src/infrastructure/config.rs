use std::env;

const DEV_JWT_SECRET: &str = "secret";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_hours: i64,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    /// Superuser created or refreshed at startup when both are set
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub seed_demo: bool,
}

impl Config {
    /// Read settings from the environment. A `--profile` argument takes
    /// precedence over `PROFILE` and picks a per-profile database file.
    pub fn load(profile_arg: Option<String>) -> Result<Self, String> {
        let profile = profile_arg
            .or_else(|| env::var("PROFILE").ok())
            .unwrap_or_else(|| "default".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            if profile == "default" {
                "sqlite://book_catalog.db?mode=rwc".to_string()
            } else {
                format!("sqlite://book_catalog_{}.db?mode=rwc", profile)
            }
        });

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ if cfg!(debug_assertions) => DEV_JWT_SECRET.to_string(),
            _ => return Err("JWT_SECRET environment variable must be set in production".into()),
        };

        Ok(Self {
            database_url,
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            jwt_secret,
            session_hours: env::var("SESSION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .filter(|h: &i64| *h > 0)
                .unwrap_or(24),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            profile,
            admin_username: env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty()),
            admin_password: env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty()),
            seed_demo: env::var("SEED_DEMO").is_ok(),
        })
    }
}
