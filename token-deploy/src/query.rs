use std::str::FromStr;

use colored_json::to_colored_json_auto;
use cosm_utils::prelude::*;
use cosm_utils::modules::auth::model::Address;
use serde::Serialize;
use serde_json::Value;

use crate::{
    client::get_client,
    config::{Config, WorkspaceSettings},
    contract::Contract,
    error::DeployError,
};

pub async fn query_contract(
    settings: &WorkspaceSettings,
    contract: &impl Contract,
) -> anyhow::Result<Value> {
    println!("Querying {}", contract.name());
    let config = Config::load(settings)?;
    let msg = contract.query()?;
    let addr = config.get_contract_addr(&contract.name())?.clone();
    let value = query(&config, addr, msg).await?;
    println!("{}", to_colored_json_auto(&value)?);
    Ok(value)
}

pub async fn query(
    config: &Config,
    addr: impl AsRef<str>,
    msg: impl Serialize + Sync,
) -> anyhow::Result<Value> {
    let chain_info = config.get_active_chain_info()?;
    let client = get_client(chain_info.rpc_endpoint.as_str()).await?;
    let response = client
        .wasm_query(Address::from_str(addr.as_ref())?, &msg)
        .await?;
    let data = response.data;
    if data.is_empty() {
        return Err(DeployError::EmptyResponse.into());
    }
    let string = String::from_utf8(data)?;
    Ok(serde_json::from_str::<Value>(string.as_str())?)
}
