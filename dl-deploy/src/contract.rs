// This file defines the contract deploy tasks. It's mostly boiler plate.
use clap::Subcommand;
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg};
use interactive_parse::InteractiveParseObj;
use strum_macros::{Display, EnumIter, EnumString};
use token_deploy::contract::{Contract, Msg};

use crate::defaults::{TokenInit, ADMIN};

/// The contracts this runner knows how to deploy, one variant per task.
/// The numbered tokens keep the identifiers of their on-chain counterparts.
#[derive(Subcommand, Display, EnumIter, EnumString, Clone, Debug)]
#[clap(rename_all = "snake_case", infer_subcommands = true)]
#[strum(serialize_all = "snake_case")]
pub enum Contracts {
    DlToken,

    #[command(name = "dl_202330550291")]
    #[strum(serialize = "dl_202330550291")]
    Dl202330550291,

    #[command(name = "yfp_202330552031")]
    #[strum(serialize = "yfp_202330552031")]
    Yfp202330552031,
}

impl Contract for Contracts {
    fn admin(&self) -> String {
        match self {
            Contracts::DlToken | Contracts::Dl202330550291 | Contracts::Yfp202330552031 => {
                ADMIN.to_string()
            }
        }
    }

    /// One tag per task, the token identifier, so a single token can be
    /// deployed with `deploy --tags dl_token`.
    fn tags(&self) -> Vec<String> {
        match self {
            Contracts::DlToken => vec!["dl_token".to_string()],
            Contracts::Dl202330550291 => vec!["dl_202330550291".to_string()],
            Contracts::Yfp202330552031 => vec!["yfp_202330552031".to_string()],
        }
    }

    fn instantiate_msg(&self) -> Option<Box<dyn Msg>> {
        match self {
            Contracts::DlToken | Contracts::Dl202330550291 | Contracts::Yfp202330552031 => {
                Some(Box::new(TokenInit {}))
            }
        }
    }

    fn execute(&self) -> anyhow::Result<Box<dyn Msg>> {
        match self {
            Contracts::DlToken | Contracts::Dl202330550291 | Contracts::Yfp202330552031 => {
                Ok(Box::new(Cw20ExecuteMsg::parse_to_obj()?))
            }
        }
    }

    fn query(&self) -> anyhow::Result<Box<dyn Msg>> {
        match self {
            Contracts::DlToken | Contracts::Dl202330550291 | Contracts::Yfp202330552031 => {
                Ok(Box::new(Cw20QueryMsg::parse_to_obj()?))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;
    use token_deploy::contract::select_by_tags;

    use super::*;

    #[test]
    fn task_names_match_contract_identifiers() {
        let names: Vec<String> = Contracts::iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["dl_token", "dl_202330550291", "yfp_202330552031"]);
    }

    #[test]
    fn every_task_instantiates_with_no_arguments() {
        for contract in Contracts::iter() {
            let msg = contract.instantiate_msg().unwrap();
            assert_eq!(
                serde_json::to_value(&msg).unwrap(),
                serde_json::json!({}),
                "{} should take no constructor arguments",
                contract.name()
            );
        }
    }

    #[test]
    fn each_task_registers_under_its_own_tag() {
        for contract in Contracts::iter() {
            assert_eq!(contract.tags(), vec![contract.name()]);
        }
    }

    #[test]
    fn deploying_by_tag_selects_exactly_one_task() {
        let all: Vec<Contracts> = Contracts::iter().collect();
        for contract in Contracts::iter() {
            let selected = select_by_tags(&all, &[contract.name()]);
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].name(), contract.name());
        }
    }

    #[test]
    fn default_deploy_opts_request_logs_and_block_commit() {
        for contract in Contracts::iter() {
            let opts = contract.deploy_opts();
            assert!(opts.log);
            assert!(opts.auto_commit);
        }
    }
}
