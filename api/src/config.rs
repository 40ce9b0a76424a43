use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub address: Ipv4Addr,
    pub port: u16,
    pub log_level: String,
    /// Root of the `{YYYY-MM}/{YYYY-MM-DD}.log` tree.
    pub log_dir: PathBuf,
    /// Served under `/static`.
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .set_default("address", "0.0.0.0")?
            .set_default("port", 8080u16)?
            .set_default("log_level", "info")?
            .set_default("log_dir", "./logs")?
            .set_default("static_dir", "./static")?
            .add_source(config::File::with_name("daylog").required(false))
            .add_source(
                config::Environment::with_prefix("DAYLOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.address, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: Ipv4Addr::UNSPECIFIED,
            port: 8080,
            log_level: String::from("info"),
            log_dir: PathBuf::from("./logs"),
            static_dir: PathBuf::from("./static"),
        }
    }
}
