use clap::{Parser, Subcommand};
use std::fmt::Debug;
use strum::IntoEnumIterator;

use crate::contract::Contract;

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
#[clap(rename_all = "kebab_case", infer_subcommands = true)]
pub struct Cli<C, S = EmptySubcommand>
where
    C: Contract + Clone,
    S: Subcommand + Clone + Debug,
{
    #[command(subcommand)]
    pub command: Commands<C, S>,
}

#[derive(Parser, Clone, Debug)]
#[clap(rename_all = "kebab_case", infer_subcommands = true)]
pub enum Commands<C, S>
where
    C: Contract + Clone,
    S: Subcommand + Clone + Debug,
{
    /// Initializes the config, adding keys, chains, and envs
    Init,

    /// Modify chains
    #[command(arg_required_else_help = true)]
    Chain {
        /// Triggers dialogue to add a chain
        #[arg(short, long, exclusive = true)]
        add: bool,

        /// Triggers dialogue to delete a chain
        #[arg(short, long, exclusive = true)]
        delete: bool,
    },

    /// Modify keys
    #[command(arg_required_else_help = true)]
    Key {
        /// Triggers dialogue to add a key
        #[arg(short, long, exclusive = true)]
        add: bool,

        /// Triggers dialogue to delete a key
        #[arg(short, long, exclusive = true)]
        delete: bool,

        /// Triggers dialogue to display a key as an account address
        #[arg(short, long, exclusive = true)]
        show: bool,
    },

    /// Modify deployment environments
    #[command(arg_required_else_help = true)]
    Env {
        /// Triggers dialogue to add a deployment environment
        #[arg(short, long, exclusive = true)]
        add: bool,

        /// Triggers dialogue to delete a deployment environment
        #[arg(short, long, exclusive = true)]
        delete: bool,

        /// Triggers dialogue to select an env to activate
        #[arg(short, long, exclusive = true)]
        select: bool,

        /// Prints the current active env id
        #[arg(short, long, exclusive = true)]
        id: bool,
    },

    /// Modify the contract address book
    #[command(arg_required_else_help = true)]
    Contract {
        /// Triggers dialogue to add a contract
        #[arg(short, long, exclusive = true)]
        add: bool,

        /// Triggers dialogue to delete a contract
        #[arg(short, long, exclusive = true)]
        delete: bool,
    },

    /// Stores code and instantiates the selected contracts
    #[command(visible_alias = "d")]
    Deploy {
        /// Name of the contract
        #[arg(short, long, use_value_delimiter=true, value_delimiter=',', default_values=get_all::<C>())]
        contracts: Vec<C>,

        /// Only run the deploy tasks registered under these tags
        #[arg(short, long, use_value_delimiter = true, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Stores code for the contracts
    StoreCode {
        /// Name of the contract
        #[arg(short, long, use_value_delimiter=true, value_delimiter=',', default_values=get_all::<C>())]
        contracts: Vec<C>,
    },

    /// Instantiates a contract using the preprogrammed messages
    #[command(visible_alias = "i")]
    Instantiate {
        /// Name of the contract
        #[arg(short, long, use_value_delimiter=true, value_delimiter=',', default_values=get_all::<C>())]
        contracts: Vec<C>,
    },

    /// Prints the deployed address of a contract
    Address {
        #[command(subcommand)]
        contract: C,
    },

    /// Executes a contract
    #[command(visible_alias = "x")]
    Execute {
        #[command(subcommand)]
        contract: C,
    },

    /// Sends a query to a contract
    #[command(visible_alias = "q")]
    Query {
        #[command(subcommand)]
        contract: C,
    },

    /// Queries a token balance
    Balance {
        /// Account address to query
        #[arg(short, long)]
        address: String,

        #[command(subcommand)]
        contract: C,
    },

    /// Transfers tokens from the active key to a recipient
    Transfer {
        /// Address to receive the tokens
        #[arg(short, long)]
        recipient: String,

        /// The amount of tokens to send, in base units
        #[arg(short, long)]
        amount: u128,

        #[command(subcommand)]
        contract: C,
    },

    /// Queries token metadata and total supply
    TokenInfo {
        #[command(subcommand)]
        contract: C,
    },

    /// Executes a token message against any token address
    Cw20Execute,

    /// Queries any token address
    Cw20Query,

    /// Reinstalls the deploy binary and regenerates shell completions
    #[command(visible_alias = "u")]
    Update,

    /// Executes a user defined command
    #[command(flatten)]
    Custom(S),
}

fn get_all<C: Contract + IntoEnumIterator>() -> Vec<String> {
    C::iter().map(|x| x.to_string()).collect()
}

#[derive(Subcommand, Clone, Debug)]
pub enum EmptySubcommand {}
