use std::{env, fmt::Debug, fs, path::PathBuf, process::Command};

use anyhow::anyhow;
use clap::{CommandFactory, Subcommand};
use clap_complete::{
    generate_to,
    shells::{Bash, Zsh},
};
use colored::Colorize;
use colored_json::to_colored_json_auto;
use inquire::{MultiSelect, Select};
use log::info;

use crate::{
    cli::{Cli, Commands},
    config::{Config, WorkspaceSettings},
    contract::{select_by_tags, Contract},
    deployment::{execute_deployment, DeploymentStage},
    error::DeployError,
    execute::execute_contract,
    query::query_contract,
    token,
    utils::BIN_NAME,
};

pub async fn execute_args<C, S>(settings: &WorkspaceSettings, cli: &Cli<C, S>) -> anyhow::Result<()>
where
    C: Contract + Clone,
    S: Subcommand + Clone + Debug,
{
    info!("Executing args: {:#?}", cli);
    env::set_current_dir(settings.workspace_root.clone())?;
    match &cli.command {
        Commands::Init => init(settings).await?,
        Commands::Chain { add, delete } => chain(settings, add, delete)?,
        Commands::Key { add, delete, show } => key(settings, add, delete, show).await?,
        Commands::Env {
            add,
            delete,
            select,
            id,
        } => execute_env(settings, add, delete, select, id)?,
        Commands::Contract { add, delete } => contract(settings, add, delete)?,
        Commands::Deploy { contracts, tags } => deploy(settings, contracts, tags).await?,
        Commands::StoreCode { contracts } => store_code(settings, contracts).await?,
        Commands::Instantiate { contracts } => instantiate(settings, contracts).await?,
        Commands::Address { contract } => address(settings, contract)?,
        Commands::Execute { contract } => execute_contract(settings, contract).await?,
        Commands::Query { contract } => {
            query_contract(settings, contract).await?;
        }
        Commands::Balance { address, contract } => {
            token::balance(settings, contract, address).await?;
        }
        Commands::Transfer {
            recipient,
            amount,
            contract,
        } => token::transfer(settings, contract, recipient, *amount).await?,
        Commands::TokenInfo { contract } => {
            token::token_info(settings, contract).await?;
        }
        Commands::Cw20Execute => token::cw20_execute(settings).await?,
        Commands::Cw20Query => {
            token::cw20_query(settings).await?;
        }
        Commands::Update => update::<C, S>(settings)?,
        Commands::Custom(..) => {}
    };
    Ok(())
}

pub async fn init(settings: &WorkspaceSettings) -> anyhow::Result<()> {
    info!("Initializing deploy config");
    let mut config = Config::init(settings)?;
    config.add_key()?;
    config.add_chain()?;
    config.add_env()?;
    config.save(settings)?;
    Ok(())
}

pub fn chain(settings: &WorkspaceSettings, add: &bool, delete: &bool) -> anyhow::Result<()> {
    let mut config = Config::load(settings)?;
    if *add {
        config.add_chain()?;
    } else if *delete {
        let all_chains = &mut config.chains;
        let chains_to_remove = MultiSelect::new(
            "Select which chains to delete",
            all_chains.keys().cloned().collect(),
        )
        .prompt()?;
        for chain in chains_to_remove {
            all_chains.remove(&chain);
        }
    }
    config.save(settings)?;
    Ok(())
}

pub async fn key(
    settings: &WorkspaceSettings,
    add: &bool,
    delete: &bool,
    show: &bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(settings)?;
    if *add {
        config.add_key()?;
        config.save(settings)?;
    } else if *delete {
        let all_keys = &mut config.keys;
        let keys_to_remove = MultiSelect::new(
            "Select which keys to delete",
            all_keys.iter().map(|x| x.name.clone()).collect::<Vec<_>>(),
        )
        .prompt()?;
        for key in keys_to_remove {
            all_keys.retain(|x| x.name != key);
        }
        config.save(settings)?;
    } else if *show {
        let key_name = Select::new(
            "Select key",
            config.keys.iter().map(|x| x.name.clone()).collect::<Vec<_>>(),
        )
        .prompt()?;
        let key = config
            .keys
            .iter()
            .find(|x| x.name == key_name)
            .ok_or(DeployError::KeyNotFound { key_name })?;
        let chain_info = config.get_active_chain_info()?;
        let pub_key = key.public_key(&chain_info.cfg.derivation_path).await?;
        let account = pub_key
            .account_id(chain_info.cfg.prefix.as_str())
            .map_err(|e| anyhow!("{}", e.to_string()))?;
        println!("{}", account.to_string().green());
    }
    Ok(())
}

pub fn execute_env(
    settings: &WorkspaceSettings,
    add: &bool,
    delete: &bool,
    select: &bool,
    id: &bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(settings)?;
    if *add {
        config.add_env()?;
        config.save(settings)?;
    } else if *delete {
        let envs = MultiSelect::new("Select which envs to delete", config.envs.clone()).prompt()?;
        for env in envs {
            config.envs.retain(|x| x != &env);
        }
        config.change_env()?;
        config.save(settings)?;
    } else if *select {
        config.change_env()?;
        config.save(settings)?;
    } else if *id {
        println!("{}", config.get_active_env()?.env_id);
    } else {
        println!(
            "{}",
            to_colored_json_auto(&serde_json::to_value(config.get_active_env()?)?)?
        );
    }
    Ok(())
}

pub fn contract(settings: &WorkspaceSettings, add: &bool, delete: &bool) -> anyhow::Result<()> {
    let mut config = Config::load(settings)?;
    if *add {
        config.add_contract()?;
    } else if *delete {
        let env = config.get_active_env_mut()?;
        let all_contracts = &mut env.contracts;
        let contracts =
            MultiSelect::new("Select which contracts to delete", all_contracts.clone()).prompt()?;
        for contract in contracts {
            all_contracts.retain(|x| x != &contract);
        }
    }
    config.save(settings)?;
    Ok(())
}

/// Runs the deploy tasks selected by the contract list and the optional tag
/// filter: store code, then instantiate, in declaration order.
pub async fn deploy(
    settings: &WorkspaceSettings,
    contracts: &[impl Contract + Clone],
    tags: &[String],
) -> anyhow::Result<()> {
    let selected = select_by_tags(contracts, tags);
    if selected.is_empty() {
        println!("No deploy tasks registered under the requested tags");
        return Ok(());
    }
    store_code(settings, &selected).await?;
    instantiate(settings, &selected).await?;
    Ok(())
}

pub async fn store_code(
    settings: &WorkspaceSettings,
    contracts: &[impl Contract],
) -> anyhow::Result<()> {
    execute_deployment(settings, contracts, DeploymentStage::StoreCode).await
}

pub async fn instantiate(
    settings: &WorkspaceSettings,
    contracts: &[impl Contract],
) -> anyhow::Result<()> {
    execute_deployment(settings, contracts, DeploymentStage::Instantiate).await
}

/// Prints the stored deployed address of a contract.
pub fn address(settings: &WorkspaceSettings, contract: &impl Contract) -> anyhow::Result<()> {
    let config = Config::load(settings)?;
    let addr = config.get_contract_addr(&contract.name())?;
    println!("{} deployed to: {}", contract.name(), addr.purple());
    Ok(())
}

pub fn update<C, S>(settings: &WorkspaceSettings) -> anyhow::Result<()>
where
    C: Contract + Clone,
    S: Subcommand + Clone + Debug,
{
    Command::new("cargo")
        .arg("install")
        .arg("--path")
        .arg(settings.deployment_dir.clone())
        .spawn()?
        .wait()?;

    generate_completions::<C, S>(settings)?;

    Ok(())
}

pub fn generate_completions<C, S>(settings: &WorkspaceSettings) -> anyhow::Result<()>
where
    C: Contract + Clone,
    S: Subcommand + Clone + Debug,
{
    let Some(completion_dir) = get_shell_completion_dir(settings)? else {
        return Ok(());
    };
    let shell = env::var("SHELL").unwrap_or_default();
    let mut cmd = Cli::<C, S>::command();

    let generated_file = match shell.rsplit_once('/').map(|(_, last)| last) {
        Some("zsh") => {
            println!("Generating shell completion scripts for zsh");
            println!("Run source ~/.zshrc to update your completion scripts");
            generate_to(Zsh, &mut cmd, BIN_NAME.to_string(), settings.target_dir.clone())?
        }
        Some("bash") => {
            println!("Generating shell completion scripts for bash");
            generate_to(Bash, &mut cmd, BIN_NAME.to_string(), settings.target_dir.clone())?
        }
        _ => return Err(DeployError::UnsupportedShell.into()),
    };

    let file_name = generated_file.file_name().ok_or(DeployError::InvalidDir)?;
    fs::copy(&generated_file, completion_dir.join(file_name))?;

    Ok(())
}

fn get_shell_completion_dir(settings: &WorkspaceSettings) -> anyhow::Result<Option<PathBuf>> {
    let mut config = Config::load(settings)?;
    match config.get_shell_completion_dir() {
        Some(dir) => Ok(Some(dir.clone())),
        None => Ok(config.set_shell_completion_dir(settings)?.cloned()),
    }
}
