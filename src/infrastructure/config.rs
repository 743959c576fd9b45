use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Corporate colour palette shared by cards and charts.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub grey: String,
    pub danger: String,
    pub success: String,
    pub slate: String,
    pub ink: String,
    pub track: String,
    pub background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#0F766E".to_string(),
            secondary: "#0EA5E9".to_string(),
            accent: "#F59E0B".to_string(),
            grey: "#9CA3AF".to_string(),
            danger: "#EF4444".to_string(),
            success: "#10B981".to_string(),
            slate: "#64748B".to_string(),
            ink: "#111827".to_string(),
            track: "#E5E7EB".to_string(),
            background: "#F9FAFB".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardSettings {
    pub title: String,
    pub data_source: String,
    pub footer: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "ESG Performance Dashboard".to_string(),
            data_source: "Enterprise ESG Hub".to_string(),
            footer: "CONFIDENTIAL - INTERNAL USE ONLY".to_string(),
        }
    }
}

/// Load `config/dashboard.{toml,...}` if present, then `ESG__SECTION__KEY` overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("ESG")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
