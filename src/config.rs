use std::env;

// Process configuration read from the environment.

pub const DEFAULT_LOG_FILTER: &str = "desk_booker=debug,tower_http=debug";

pub fn database_url() -> String {
    env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/desk_booker".to_string())
}

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn database_max_connections() -> u32 {
    env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
}
