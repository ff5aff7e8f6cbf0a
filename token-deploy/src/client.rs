use std::str::FromStr;

use lazy_static::lazy_static;
use log::info;
use tendermint_rpc::{client::CompatMode, Client, HttpClient, HttpClientUrl};
use tokio::sync::RwLock;

lazy_static! {
    static ref COMPAT_MODE: RwLock<Option<CompatMode>> = RwLock::new(None);
}

/// The compat mode depends on the node's tendermint version; probe it once
/// per process and reuse the answer.
async fn get_compat_mode(rpc_endpoint: &str) -> anyhow::Result<CompatMode> {
    if let Some(compat_mode) = *COMPAT_MODE.read().await {
        return Ok(compat_mode);
    }
    let probe = HttpClient::new(rpc_endpoint)?;
    let version = probe.status().await?.node_info.version;
    info!("using tendermint version: {}", version);
    let compat_mode = CompatMode::from_version(version)?;
    *COMPAT_MODE.write().await = Some(compat_mode);
    Ok(compat_mode)
}

pub async fn get_client(rpc_endpoint: &str) -> anyhow::Result<HttpClient> {
    let compat_mode = get_compat_mode(rpc_endpoint).await?;
    let client = HttpClient::builder(HttpClientUrl::from_str(rpc_endpoint)?)
        .compat_mode(compat_mode)
        .build()?;

    Ok(client)
}
