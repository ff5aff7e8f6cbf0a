// Project specific commands on top of the stock runner.
use clap::Parser;
use strum_macros::Display;
use token_deploy::{
    cli::{Cli, Commands},
    config::WorkspaceSettings,
    contract::Contract,
    utils::get_wallet_addr,
};

pub fn execute_custom_args<C>(
    settings: &WorkspaceSettings,
    cli: &Cli<C, CustomSubcommand>,
) -> anyhow::Result<()>
where
    C: Contract + Clone,
{
    match &cli.command {
        Commands::Custom(command) => match command {
            CustomSubcommand::DeployerAddress => {
                println!("{}", get_wallet_addr(settings)?);
            }
        },
        _ => {}
    }

    Ok(())
}

/// A custom subcommand for user defined functionality.
#[derive(Clone, Parser, Debug, Display)]
#[strum(serialize_all = "snake_case")]
#[clap(rename_all = "snake_case")]
pub enum CustomSubcommand {
    /// Prints the account address of the active deployer key
    DeployerAddress,
}
