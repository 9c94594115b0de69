use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,
    pub max_connections: Option<u32>,

    pub jwt_secret: String,

    pub rate_limit_per_sec: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}
