use std::str::FromStr;

use cosm_utils::prelude::*;
use cosm_utils::{
    chain::{coin::Coin, request::TxOptions},
    modules::{auth::model::Address, cosmwasm::model::ExecRequest},
};
use interactive_parse::InteractiveParseObj;
use serde::Serialize;

use crate::{
    client::get_client,
    config::{Config, WorkspaceSettings},
    contract::Contract,
    utils::print_res,
};

pub async fn execute_contract(
    settings: &WorkspaceSettings,
    contract: &impl Contract,
) -> anyhow::Result<()> {
    println!("Executing {}", contract.name());
    let config = Config::load(settings)?;
    let msg = contract.execute()?;
    let addr = config.get_contract_addr(&contract.name())?.clone();
    let funds = Vec::<Coin>::parse_to_obj()?;
    execute(&config, addr, msg, funds).await
}

/// Signs and broadcasts an execute msg with the active key, printing the
/// receipt.
pub async fn execute(
    config: &Config,
    addr: impl AsRef<str>,
    msg: impl Serialize + Send,
    funds: Vec<Coin>,
) -> anyhow::Result<()> {
    let key = config.get_active_key()?;
    let chain_info = config.get_active_chain_info()?;
    let client = get_client(chain_info.rpc_endpoint.as_str()).await?;
    let req = ExecRequest {
        msg,
        funds,
        address: Address::from_str(addr.as_ref())?,
    };
    let response = client
        .wasm_execute_commit(&chain_info.cfg, req, &key, &TxOptions::default())
        .await?;
    print_res(response);
    Ok(())
}
