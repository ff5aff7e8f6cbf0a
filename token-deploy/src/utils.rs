use anyhow::anyhow;

use crate::config::{Config, WorkspaceSettings};
use colored::Colorize;
use futures::executor::block_on;
use lazy_static::lazy_static;
use tendermint_rpc::endpoint::broadcast::tx_commit;

lazy_static! {
    pub static ref BIN_NAME: String = std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|stem| stem.to_os_string()))
        .and_then(|stem| stem.into_string().ok())
        .unwrap_or_else(|| "deploy".to_string());
}

pub fn print_res(tx_commit: tx_commit::Response) {
    println!(
        "gas wanted: {}, gas used: {}",
        tx_commit.deliver_tx.gas_wanted.to_string().green(),
        tx_commit.deliver_tx.gas_used.to_string().green()
    );
    println!("tx hash: {}", tx_commit.hash.to_string().purple());
}

/// Account address of the active key, derived with the active chain's prefix.
pub fn get_wallet_addr(settings: &WorkspaceSettings) -> anyhow::Result<String> {
    block_on(async {
        let config = Config::load(settings)?;
        let key = config.get_active_key()?;
        let chain_info = config.get_active_chain_info()?;
        let pub_key = key.public_key(&chain_info.cfg.derivation_path).await?;
        Ok(pub_key
            .account_id(chain_info.cfg.prefix.as_str())
            .map_err(|e| anyhow!("{}", e.to_string()))?
            .to_string())
    })
}
