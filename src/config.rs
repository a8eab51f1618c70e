use std::env;
use std::str::FromStr;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const REQUEST_TIMEOUT_SECS: u64 = 10;

const ROOM_SERVICE_URL: &str = "http://localhost:8081";
const BOOKING_SERVICE_URL: &str = "http://localhost:8081";
const PAYMENT_SERVICE_URL: &str = "http://localhost:8082";
const USER_SERVICE_URL: &str = "http://localhost:8083";
const REVIEW_SERVICE_URL: &str = "http://localhost:8085";

/// Base URLs of the REST collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceUrls {
    pub rooms: String,
    pub bookings: String,
    pub payments: String,
    pub users: String,
    pub reviews: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub services: ServiceUrls,
    pub request_timeout: Duration,
    /// Serve read views from the bundled sample data when a collaborator fails.
    pub offline_fallback: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: HOST.to_string(),
            port: PORT,
            services: ServiceUrls {
                rooms: ROOM_SERVICE_URL.to_string(),
                bookings: BOOKING_SERVICE_URL.to_string(),
                payments: PAYMENT_SERVICE_URL.to_string(),
                users: USER_SERVICE_URL.to_string(),
                reviews: REVIEW_SERVICE_URL.to_string(),
            },
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            offline_fallback: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();

        AppConfig {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parsed_var("PORT", defaults.port),
            services: ServiceUrls {
                rooms: url_var("ROOM_SERVICE_URL", defaults.services.rooms),
                bookings: url_var("BOOKING_SERVICE_URL", defaults.services.bookings),
                payments: url_var("PAYMENT_SERVICE_URL", defaults.services.payments),
                users: url_var("USER_SERVICE_URL", defaults.services.users),
                reviews: url_var("REVIEW_SERVICE_URL", defaults.services.reviews),
            },
            request_timeout: Duration::from_secs(parsed_var(
                "REQUEST_TIMEOUT_SECS",
                REQUEST_TIMEOUT_SECS,
            )),
            offline_fallback: parsed_var("OFFLINE_FALLBACK", defaults.offline_fallback),
        }
    }
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring invalid {}={:?}, using default", name, raw);
                default
            }
        },
        Err(_) => default,
    }
}

fn url_var(name: &str, default: String) -> String {
    match env::var(name) {
        Ok(raw) if url::Url::parse(raw.trim()).is_ok() => raw.trim().trim_end_matches('/').to_string(),
        Ok(raw) => {
            log::warn!("Ignoring invalid {}={:?}, using default", name, raw);
            default
        }
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        for name in [
            "HOST",
            "PORT",
            "ROOM_SERVICE_URL",
            "PAYMENT_SERVICE_URL",
            "REQUEST_TIMEOUT_SECS",
            "OFFLINE_FALLBACK",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();
        assert_eq!(AppConfig::from_env(), AppConfig::default());
    }

    #[test]
    #[serial]
    fn test_overrides_and_invalid_values() {
        clear();
        env::set_var("PORT", "9090");
        env::set_var("ROOM_SERVICE_URL", "http://rooms.internal:7000/");
        env::set_var("PAYMENT_SERVICE_URL", "not a url");
        env::set_var("REQUEST_TIMEOUT_SECS", "soon");
        env::set_var("OFFLINE_FALLBACK", "false");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 9090);
        assert_eq!(config.services.rooms, "http://rooms.internal:7000");
        assert_eq!(config.services.payments, PAYMENT_SERVICE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(!config.offline_fallback);

        clear();
    }
}
