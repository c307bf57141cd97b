use std::env;

use dotenv::dotenv;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_API_URL: &str = "https://api.api-ninjas.com";

pub struct Config {
    pub port: u16,
    pub exercise_api_url: String,
    pub exercise_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let port = env::var("FITTRACK_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let exercise_api_url =
            env::var("EXERCISE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let exercise_api_key = env::var("EXERCISE_API_KEY").expect("EXERCISE_API_KEY must be set");

        Self {
            port,
            exercise_api_url,
            exercise_api_key,
        }
    }
}
