use std::env;
use chrono_tz::Tz;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub site_timezone: Tz, // "today" is evaluated here
    pub default_admin_password: String,
    pub session_ttl_hours: i64,
    pub cookie_secure: bool,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://race_calendar.db".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            site_timezone: env::var("SITE_TIMEZONE")
                .unwrap_or_else(|_| "UTC".to_string())
                .parse()
                .expect("SITE_TIMEZONE must be an IANA timezone name"),
            default_admin_password: env::var("DEFAULT_ADMIN_PASSWORD").unwrap_or_else(|_| "0000".to_string()),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .expect("SESSION_TTL_HOURS must be a number"),
            cookie_secure: env::var("COOKIE_SECURE").map(|v| v != "false").unwrap_or(true),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
        }
    }

    /// Canonical `YYYY-MM-DD` for the current day in the site timezone.
    pub fn today(&self) -> String {
        chrono::Utc::now()
            .with_timezone(&self.site_timezone)
            .format("%Y-%m-%d")
            .to_string()
    }
}
