use colored_json::to_colored_json_auto;
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg};
use inquire::Text;
use interactive_parse::InteractiveParseObj;
use serde_json::Value;

use crate::{
    config::{Config, WorkspaceSettings},
    contract::Contract,
    execute::execute,
    query::query,
};

/// Token balance of `address`, read from one of our deployed contracts.
pub async fn balance(
    settings: &WorkspaceSettings,
    contract: &impl Contract,
    address: &str,
) -> anyhow::Result<Value> {
    let config = Config::load(settings)?;
    let addr = config.get_contract_addr(&contract.name())?.clone();
    let msg = Cw20QueryMsg::Balance {
        address: address.to_string(),
    };
    let value = query(&config, addr, msg).await?;
    println!("{}", to_colored_json_auto(&value)?);
    Ok(value)
}

/// Name, symbol, decimals, and total supply in one query.
pub async fn token_info(
    settings: &WorkspaceSettings,
    contract: &impl Contract,
) -> anyhow::Result<Value> {
    let config = Config::load(settings)?;
    let addr = config.get_contract_addr(&contract.name())?.clone();
    let value = query(&config, addr, Cw20QueryMsg::TokenInfo {}).await?;
    println!("{}", to_colored_json_auto(&value)?);
    Ok(value)
}

/// Transfers tokens from the active key to `recipient`.
pub async fn transfer(
    settings: &WorkspaceSettings,
    contract: &impl Contract,
    recipient: &str,
    amount: u128,
) -> anyhow::Result<()> {
    println!(
        "Transferring {} {} to {}",
        amount,
        contract.name(),
        recipient
    );
    let config = Config::load(settings)?;
    let addr = config.get_contract_addr(&contract.name())?.clone();
    let msg = Cw20ExecuteMsg::Transfer {
        recipient: recipient.to_string(),
        amount: amount.into(),
    };
    execute(&config, addr, msg, vec![]).await
}

/// Interactive execute against any token address. Covers the long tail of
/// token operations: approvals, transfer-from, mint, burn.
pub async fn cw20_execute(settings: &WorkspaceSettings) -> anyhow::Result<()> {
    println!("Executing cw20 message");
    let config = Config::load(settings)?;
    let addr = Text::new("Token Contract Address?")
        .with_help_message("string")
        .prompt()?;
    let msg = Cw20ExecuteMsg::parse_to_obj()?;
    execute(&config, addr, msg, vec![]).await
}

/// Interactive query against any token address.
pub async fn cw20_query(settings: &WorkspaceSettings) -> anyhow::Result<Value> {
    println!("Querying cw20");
    let config = Config::load(settings)?;
    let addr = Text::new("Token Contract Address?")
        .with_help_message("string")
        .prompt()?;
    let msg = Cw20QueryMsg::parse_to_obj()?;
    let value = query(&config, addr, msg).await?;
    println!("{}", to_colored_json_auto(&value)?);
    Ok(value)
}
