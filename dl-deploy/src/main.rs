pub mod contract;
pub mod defaults;
pub mod subcommand;

use clap::{CommandFactory, FromArgMatches};
use contract::Contracts;
use subcommand::{execute_custom_args, CustomSubcommand};
use token_deploy::{cli::Cli, commands::execute_args, config::WorkspaceSettings};

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        println!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings =
        WorkspaceSettings::new(&std::env::current_dir()?)?.set_deployment_dir("dl-deploy")?;
    let cli = Cli::<Contracts, CustomSubcommand>::command();
    let matches = cli.get_matches();
    let args = Cli::<Contracts, CustomSubcommand>::from_arg_matches(&matches)?;
    execute_args(&settings, &args).await?;
    execute_custom_args(&settings, &args)?;
    Ok(())
}
