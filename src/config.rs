use std::env;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::view::state::Theme;

#[derive(Clone)]
pub struct Config {
    pub items_per_page: u32,
    pub trend_window: usize,
    pub splash_delay_ms: u64,
    pub theme: Theme,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            items_per_page: env::var("ITEMS_PER_PAGE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap(),
            trend_window: env::var("TREND_WINDOW")
                .unwrap_or_else(|_| "14".to_string()) // last 14 qualifying days
                .parse()
                .unwrap(),
            splash_delay_ms: env::var("SPLASH_DELAY_MS")
                .unwrap_or_else(|_| "800".to_string())
                .parse()
                .unwrap(),
            theme: env::var("THEME")
                .ok()
                .and_then(|raw| Theme::from_str(&raw).ok())
                .unwrap_or(Theme::Light),
        }
    }
}
