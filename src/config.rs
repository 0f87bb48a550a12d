use std::env;
use std::time::Duration;

pub const DEFAULT_EXPERIENCE_IDS: [i64; 10] = [
    1084194, 1087988, 1088027, 1113923, 1113953,
    1113957, 1113944, 1113948, 1124650, 1111734,
];

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub bokun_base_url: String,
    pub bokun_access_key: String,
    pub bokun_secret_key: String,
    pub experience_ids: Vec<i64>,
    pub request_timeout_secs: u64,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "5000".to_string()).parse().expect("PORT must be a number"),
            bokun_base_url: env::var("BOKUN_BASE_URL").unwrap_or_else(|_| "https://api.bokun.io".to_string()),
            bokun_access_key: env::var("BOKUN_ACCESS_KEY").expect("BOKUN_ACCESS_KEY must be set"),
            bokun_secret_key: env::var("BOKUN_SECRET_KEY").expect("BOKUN_SECRET_KEY must be set"),
            experience_ids: env::var("BOKUN_EXPERIENCE_IDS")
                .map(|raw| parse_experience_ids(&raw).expect("BOKUN_EXPERIENCE_IDS must be a comma-separated list of numbers"))
                .unwrap_or_else(|_| DEFAULT_EXPERIENCE_IDS.to_vec()),
            request_timeout_secs: env::var("BOKUN_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string()).parse().expect("BOKUN_TIMEOUT_SECS must be a number"),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub fn parse_experience_ids(raw: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
