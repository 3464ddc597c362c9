use dotenv::dotenv;
use envconfig::Envconfig;
use eyre::Result;
use near_rpc_rs::RpcMethod;
use std::path::PathBuf;
use tracing::*;

pub struct Config {
    pub fixture_path: PathBuf,
    pub method: RpcMethod,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        // Variables may come from the shell alone.
        dotenv().ok();
        let config = ConfigRaw::init_from_env()?;
        let method = config.rpc_method.parse::<RpcMethod>()?;

        info!(
            fixture = %config.fixture_path.display(),
            %method,
            "config"
        );

        Ok(Config {
            fixture_path: config.fixture_path,
            method,
        })
    }
}

#[derive(Envconfig)]
pub struct ConfigRaw {
    #[envconfig(from = "FIXTURE_PATH")]
    pub fixture_path: PathBuf,
    #[envconfig(from = "RPC_METHOD", default = "query")]
    pub rpc_method: String,
}
