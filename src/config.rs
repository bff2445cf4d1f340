use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    5000
}

impl Config {
    pub fn from_env() -> color_eyre::Result<Self> {
        let config: Config = envy::from_env()?;
        Ok(config)
    }
}
