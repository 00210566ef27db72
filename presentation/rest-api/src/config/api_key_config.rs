/// Secret that every request must present in the `X-Api-Key` header.
pub struct ApiKeyConfig {
    pub api_key: String,
}

impl ApiKeyConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("API_KEY").expect("API_KEY must be set"),
        }
    }
}
