use std::str::FromStr;

use colored::Colorize;
use cosm_utils::prelude::*;
use cosm_utils::{
    chain::request::TxOptions,
    modules::{
        auth::model::Address,
        cosmwasm::model::{InstantiateRequest, StoreCodeRequest},
    },
};

use crate::{
    client::get_client,
    config::{Config, ContractInfo, WorkspaceSettings},
    contract::Contract,
    error::DeployError,
    utils::print_res,
};

/// Deploying a contract is two transactions: upload the code, then
/// instantiate it.
pub enum DeploymentStage {
    StoreCode,
    Instantiate,
}

/// Runs one deployment stage for each of `contracts`, sequentially, one
/// transaction awaited at a time. Errors propagate unmodified; nothing is
/// retried or rolled back.
pub async fn execute_deployment(
    settings: &WorkspaceSettings,
    contracts: &[impl Contract],
    deployment_stage: DeploymentStage,
) -> anyhow::Result<()> {
    let mut config = Config::load(settings)?;
    let chain_info = config.get_active_chain_info()?.clone();
    // The deployer key resolves before any request is built; a missing key
    // entry aborts the run with zero submissions.
    let key = config.get_active_key()?;
    let client = get_client(chain_info.rpc_endpoint.as_str()).await?;

    match deployment_stage {
        DeploymentStage::StoreCode => {
            for contract in contracts {
                let opts = contract.deploy_opts();
                if opts.log {
                    println!("Storing code for {}", contract.name());
                }
                let path = settings
                    .artifacts_dir
                    .join(format!("{}.wasm", contract.name()));
                let wasm_data =
                    std::fs::read(&path).map_err(|_| DeployError::ArtifactNotFound {
                        path: path.to_string_lossy().into_owned(),
                    })?;
                let response = client
                    .wasm_store_commit(
                        &chain_info.cfg,
                        StoreCodeRequest {
                            wasm_data,
                            instantiate_perms: None,
                        },
                        &key,
                        &TxOptions::default(),
                    )
                    .await?;
                match config.get_contract_mut(&contract.name()) {
                    Ok(contract_info) => contract_info.code_id = Some(response.code_id),
                    Err(_) => {
                        config.add_contract_from(ContractInfo {
                            name: contract.name(),
                            addr: None,
                            code_id: Some(response.code_id),
                        })?;
                    }
                }
                config.save(settings)?;
                if opts.log {
                    print_res(response.res);
                }
            }
        }
        DeploymentStage::Instantiate => {
            for contract in contracts {
                let Some(msg) = contract.instantiate_msg() else {
                    continue;
                };
                let opts = contract.deploy_opts();
                if opts.log {
                    println!("Instantiating {}", contract.name());
                }
                let code_id = config
                    .get_contract(&contract.name())?
                    .code_id
                    .ok_or(DeployError::CodeIdNotFound)?;
                let req = InstantiateRequest {
                    code_id,
                    msg: serde_json::to_value(&msg)?,
                    label: contract.name(),
                    admin: Some(Address::from_str(&contract.admin())?),
                    funds: vec![],
                };
                // The commit broadcast returns once the tx is finalized into
                // a block, which is everything `auto_commit` asks of the
                // network.
                let response = client
                    .wasm_instantiate_commit(&chain_info.cfg, req, &key, &TxOptions::default())
                    .await?;
                config.get_contract_mut(&contract.name())?.addr =
                    Some(response.address.to_string());
                config.save(settings)?;
                if opts.log {
                    print_res(response.res);
                }
                // Read the address back through the address book rather than
                // trusting the in-flight response.
                let addr = config.get_contract_addr(&contract.name())?;
                println!("{} deployed to: {}", contract.name(), addr.purple());
            }
        }
    }

    Ok(())
}
