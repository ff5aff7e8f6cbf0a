use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use clap::Subcommand;
use serde::Serialize;
use strum::{IntoEnumIterator, ParseError};

use crate::error::DeployError;

pub trait Msg: Debug + Send + Sync + erased_serde::Serialize {}

impl<T> Msg for T where T: Debug + Serialize + Send + Sync {}

impl Serialize for dyn Msg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        erased_serde::serialize(self, serializer)
    }
}

/// Per-task deployment flags, handed to the engine exactly as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployOpts {
    /// Print progress and transaction receipts while deploying.
    pub log: bool,
    /// Wait for the deployment transactions to land in a block before
    /// returning. Networks finalize at their own pace; asking never fails.
    pub auto_commit: bool,
}

impl Default for DeployOpts {
    fn default() -> Self {
        DeployOpts {
            log: true,
            auto_commit: true,
        }
    }
}

/// This trait represents a contract that can be deployed.
/// Implement it on a fieldless enum with one variant per contract.
pub trait Contract:
    Send + Sync + Debug + Display + FromStr<Err = ParseError> + IntoEnumIterator + Subcommand + 'static
{
    /// This is the name of the contract and represents
    /// how it will appear in the cli and in the artifacts dir.
    fn name(&self) -> String {
        self.to_string()
    }

    /// This is the address of the contract admin.
    /// It is required when instantiating.
    fn admin(&self) -> String;

    /// Tags this deploy task is registered under, so that a subset of tasks
    /// can be selected on the command line. Defaults to the contract name.
    fn tags(&self) -> Vec<String> {
        vec![self.name()]
    }

    fn deploy_opts(&self) -> DeployOpts {
        DeployOpts::default()
    }

    /// This method gets the preprogrammed instantiate msg for the contract.
    fn instantiate_msg(&self) -> Option<Box<dyn Msg>> {
        println!("No instantiate msg for {}", self.name());
        println!("Defaulting to interactive instantiate");
        self.instantiate().ok()
    }

    /// This method allows instantiating a contract interactively.
    /// interactive-parse should be used to generate the msg.
    fn instantiate(&self) -> anyhow::Result<Box<dyn Msg>> {
        Err(DeployError::TraitNotImplemented.into())
    }

    /// This method allows executing a contract interactively.
    /// interactive-parse should be used to generate the msg.
    fn execute(&self) -> anyhow::Result<Box<dyn Msg>> {
        Err(DeployError::TraitNotImplemented.into())
    }

    /// This method allows querying a contract interactively.
    /// interactive-parse should be used to generate the msg.
    fn query(&self) -> anyhow::Result<Box<dyn Msg>> {
        Err(DeployError::TraitNotImplemented.into())
    }
}

/// Returns the tasks registered under at least one of `tags`, in declaration
/// order. An empty tag list selects every task. Selection is pure; nothing is
/// submitted from here.
pub fn select_by_tags<C: Contract + Clone>(contracts: &[C], tags: &[String]) -> Vec<C> {
    if tags.is_empty() {
        return contracts.to_vec();
    }
    contracts
        .iter()
        .filter(|contract| contract.tags().iter().any(|tag| tags.contains(tag)))
        .cloned()
        .collect()
}
