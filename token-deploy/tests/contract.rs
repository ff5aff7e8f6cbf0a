use clap::Subcommand;
use strum_macros::{Display, EnumIter, EnumString};
use token_deploy::contract::{select_by_tags, Contract, DeployOpts};

#[derive(Subcommand, Display, EnumIter, EnumString, Clone, Debug, PartialEq)]
#[clap(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
enum TestContracts {
    Alpha,
    Beta,
}

impl Contract for TestContracts {
    fn admin(&self) -> String {
        "wasm1s33zct2zhhaf60x4a90cpe9yquw99jj0zen8pt".to_string()
    }

    fn tags(&self) -> Vec<String> {
        match self {
            TestContracts::Alpha => vec!["alpha".to_string(), "tokens".to_string()],
            TestContracts::Beta => vec!["beta".to_string()],
        }
    }
}

#[test]
fn names_round_trip() {
    assert_eq!(TestContracts::Alpha.to_string(), "alpha");
    assert_eq!("beta".parse::<TestContracts>().unwrap(), TestContracts::Beta);
    assert_eq!(TestContracts::Beta.name(), "beta");
}

#[test]
fn deploy_opts_default_to_logged_committed_deploys() {
    let opts = TestContracts::Alpha.deploy_opts();
    assert!(opts.log);
    assert!(opts.auto_commit);
    assert_eq!(opts, DeployOpts::default());
}

#[test]
fn empty_tag_list_selects_every_task() {
    let all = vec![TestContracts::Alpha, TestContracts::Beta];
    assert_eq!(select_by_tags(&all, &[]), all);
}

#[test]
fn tag_selection_is_exact() {
    let all = vec![TestContracts::Alpha, TestContracts::Beta];

    let selected = select_by_tags(&all, &["beta".to_string()]);
    assert_eq!(selected, vec![TestContracts::Beta]);

    let selected = select_by_tags(&all, &["tokens".to_string()]);
    assert_eq!(selected, vec![TestContracts::Alpha]);

    let selected = select_by_tags(&all, &["alpha".to_string(), "beta".to_string()]);
    assert_eq!(selected, all);
}

#[test]
fn unknown_tag_selects_nothing() {
    let all = vec![TestContracts::Alpha, TestContracts::Beta];
    assert!(select_by_tags(&all, &["unknown".to_string()]).is_empty());
}
