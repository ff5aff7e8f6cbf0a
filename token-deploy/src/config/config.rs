use std::{
    collections::HashMap,
    fs::{create_dir_all, OpenOptions},
    io::prelude::*,
    path::PathBuf,
};

use cosm_utils::signing_key::key::{Key, KeyringParams, SigningKey};
use inquire::{Confirm, CustomType, Select, Text};
use interactive_parse::InteractiveParseObj;
use serde::{Deserialize, Serialize};

use crate::{
    config::{ChainInfo, ContractInfo, Env, WorkspaceSettings},
    error::{DeployError, DeployResult},
};

/// The persisted state of the runner: chains, environments, and signing keys.
/// Serialized as pretty JSON under the workspace config path.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub shell_completion_dir: Option<PathBuf>,
    pub chains: HashMap<String, ChainInfo>,
    pub envs: Vec<Env>,
    pub keys: Vec<SigningKey>,
}

impl Config {
    pub fn init(settings: &WorkspaceSettings) -> anyhow::Result<Config> {
        let parent = settings
            .config_path
            .parent()
            .ok_or(DeployError::InvalidDir)?;
        create_dir_all(parent)?;
        Ok(Config::default())
    }

    pub fn load(settings: &WorkspaceSettings) -> anyhow::Result<Config> {
        let config = match std::fs::read(settings.config_path.clone()) {
            Ok(serialized) => serde_json::from_slice(&serialized)?,
            Err(_) => return Err(DeployError::ConfigNotFound.into()),
        };

        Ok(config)
    }

    pub fn save(&self, settings: &WorkspaceSettings) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .truncate(true)
            .write(true)
            .create(true)
            .open(settings.config_path.clone())?;
        let serialized = serde_json::to_vec_pretty(self)?;
        file.write_all(&serialized)?;
        Ok(())
    }

    pub fn get_active_env(&self) -> DeployResult<&Env> {
        self.envs
            .iter()
            .find(|x| x.is_active)
            .ok_or(DeployError::EnvNotFound)
    }

    pub fn get_active_env_mut(&mut self) -> DeployResult<&mut Env> {
        self.envs
            .iter_mut()
            .find(|x| x.is_active)
            .ok_or(DeployError::EnvNotFound)
    }

    pub fn get_active_chain_info(&self) -> anyhow::Result<&ChainInfo> {
        let env = self.get_active_env()?;
        match self.chains.get(&env.chain_label) {
            Some(chain_info) => Ok(chain_info),
            None => Err(DeployError::ChainConfigNotFound {
                chain_label: env.chain_label.clone(),
            }
            .into()),
        }
    }

    /// Resolves the deployer key named by the active env. Callers depend on
    /// this failing before any transaction is built.
    pub fn get_active_key(&self) -> anyhow::Result<SigningKey> {
        let key_name = self.get_active_env()?.key_name.clone();
        let key = self
            .keys
            .iter()
            .find(|x| x.name == key_name)
            .ok_or(DeployError::KeyNotFound { key_name })?;
        Ok(key.clone())
    }

    pub fn add_chain_from(
        &mut self,
        label: String,
        chain_info: ChainInfo,
    ) -> DeployResult<ChainInfo> {
        match self.chains.contains_key(&label) {
            true => Err(DeployError::ChainAlreadyExists),
            false => {
                self.chains.insert(label, chain_info.clone());
                Ok(chain_info)
            }
        }
    }

    pub fn add_chain(&mut self) -> anyhow::Result<(String, ChainInfo)> {
        let chain_info = ChainInfo::parse_to_obj()?;
        let label = Text::new("Enter a label for this chain")
            .with_default(&chain_info.cfg.chain_id)
            .prompt()?;
        self.add_chain_from(label.clone(), chain_info.clone())?;
        Ok((label, chain_info))
    }

    /// Adds or replaces a contract
    pub fn add_contract_from(
        &mut self,
        new_contract: ContractInfo,
    ) -> anyhow::Result<ContractInfo> {
        let env = self.get_active_env_mut()?;
        match env
            .contracts
            .iter_mut()
            .find(|x| x.name == new_contract.name)
        {
            Some(contract) => *contract = new_contract.clone(),
            None => env.contracts.push(new_contract.clone()),
        }
        Ok(new_contract)
    }

    pub fn add_contract(&mut self) -> anyhow::Result<ContractInfo> {
        let contract = ContractInfo::parse_to_obj()?;
        self.add_contract_from(contract.clone())?;
        Ok(contract)
    }

    /// The deployed-contract handle lookup: the recorded address is the
    /// source of truth once a contract has been instantiated.
    pub fn get_contract_addr(&self, name: &str) -> anyhow::Result<&String> {
        let contract = self.get_contract(name)?;
        match &contract.addr {
            Some(addr) => Ok(addr),
            None => Err(DeployError::AddrNotFound {
                name: name.to_string(),
            }
            .into()),
        }
    }

    pub fn get_contract(&self, name: &str) -> anyhow::Result<&ContractInfo> {
        let env = self.get_active_env()?;
        env.contracts.iter().find(|x| x.name == name).ok_or(
            DeployError::ContractNotFound {
                contract_name: name.to_string(),
            }
            .into(),
        )
    }

    pub fn get_contract_mut(&mut self, name: &str) -> anyhow::Result<&mut ContractInfo> {
        let env = self.get_active_env_mut()?;
        env.contracts.iter_mut().find(|x| x.name == name).ok_or(
            DeployError::ContractNotFound {
                contract_name: name.to_string(),
            }
            .into(),
        )
    }

    pub fn add_key_from(&mut self, key: SigningKey) -> DeployResult<SigningKey> {
        if self.keys.iter().any(|x| x.name == key.name) {
            return Err(DeployError::KeyAlreadyExists);
        }
        self.keys.push(key.clone());
        Ok(key)
    }

    pub fn add_key(&mut self) -> anyhow::Result<SigningKey> {
        let key_type = Select::new("Select Key Type", vec!["Keyring", "Mnemonic"]).prompt()?;
        let key = match key_type {
            "Keyring" => {
                let params = KeyringParams::parse_to_obj()?;
                let service = Text::new("service?")
                    .with_help_message("Describe this key")
                    .prompt()?;
                let entry = keyring::Entry::new(&service, &params.key_name)?;
                let mnemonic = Text::new("Mnemonic?").prompt()?;
                entry.set_password(mnemonic.as_str())?;
                Key::Keyring(params)
            }
            "Mnemonic" => Key::Mnemonic(Text::new("Enter Mnemonic").prompt()?),
            _ => unreachable!(),
        };
        let name = Text::new("Key Name?")
            .with_help_message("\"deployer\"")
            .prompt()?;
        Ok(self.add_key_from(SigningKey { name, key })?)
    }

    pub fn add_env(&mut self) -> anyhow::Result<&mut Env> {
        println!("Creating new deployment environment");
        let env_id = Text::new("Environment label?")
            .with_help_message("\"dev\", \"prod\", \"other\"")
            .prompt()?;
        if self.envs.iter().any(|x| x.env_id == env_id) {
            return Err(DeployError::EnvAlreadyExists.into());
        }
        let chain_label = Select::new(
            "Select which chain to activate",
            self.chains.keys().cloned().collect(),
        )
        .prompt()?;
        let key_name = Select::new(
            "Select key",
            self.keys.iter().map(|x| x.name.clone()).collect::<Vec<_>>(),
        )
        .with_help_message("\"deployer\"")
        .prompt()?;
        let env = Env {
            is_active: true,
            key_name,
            env_id,
            chain_label,
            contracts: vec![],
        };
        self.envs.push(env);
        if self.envs.len() > 1 {
            self.change_env()?
        }
        Ok(self.envs.last_mut().ok_or(DeployError::EnvNotFound)?)
    }

    pub fn change_env(&mut self) -> anyhow::Result<()> {
        let env = Select::new("Select env to activate", self.envs.clone()).prompt()?;
        self.envs.iter_mut().for_each(|x| x.is_active = *x == env);
        Ok(())
    }

    pub fn get_shell_completion_dir(&self) -> Option<&PathBuf> {
        self.shell_completion_dir.as_ref()
    }

    pub fn set_shell_completion_dir(
        &mut self,
        settings: &WorkspaceSettings,
    ) -> anyhow::Result<Option<&PathBuf>> {
        let ans = Confirm::new("Shell completion directory not found.\nWould you like to add one?")
            .with_default(true)
            .prompt()?;
        match ans {
            true => {
                let string =
                    CustomType::<String>::new("Enter your shell completion script directory.")
                        .prompt()?;
                let path = PathBuf::from(string);
                match path.is_dir() {
                    true => {
                        self.shell_completion_dir = Some(path.clone());
                        self.save(settings)?;
                        Ok(self.shell_completion_dir.as_ref())
                    }
                    false => Err(DeployError::InvalidDir.into()),
                }
            }
            false => Ok(None),
        }
    }
}

#[cfg(test)]
mod test {
    use cosm_utils::config::cfg::ChainConfig;

    use super::*;

    fn test_settings(name: &str) -> WorkspaceSettings {
        let root = std::env::temp_dir().join("token-deploy-tests").join(name);
        create_dir_all(&root).unwrap();
        WorkspaceSettings::new(&root).unwrap()
    }

    fn sample_config() -> Config {
        let mut config = Config::default();
        config.chains.insert(
            "local".to_string(),
            ChainInfo {
                cfg: ChainConfig {
                    denom: "ustake".to_string(),
                    prefix: "wasm".to_string(),
                    chain_id: "testing".to_string(),
                    derivation_path: "m/44'/118'/0'/0/0".to_string(),
                    gas_price: 0.025,
                    gas_adjustment: 1.3,
                },
                rpc_endpoint: "http://localhost:26657".to_string(),
            },
        );
        config.keys.push(SigningKey {
            name: "deployer".to_string(),
            key: Key::Mnemonic("notice oak worry limb wrap enrich pudding cruise keen".to_string()),
        });
        config.envs.push(Env {
            is_active: true,
            env_id: "dev".to_string(),
            chain_label: "local".to_string(),
            key_name: "deployer".to_string(),
            contracts: vec![ContractInfo {
                name: "dl_token".to_string(),
                addr: Some("wasm14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9s0phg4d".to_string()),
                code_id: Some(1),
            }],
        });
        config
    }

    #[test]
    fn save_load_round_trip() {
        let settings = test_settings("round_trip");
        Config::init(&settings).unwrap();
        let config = sample_config();
        config.save(&settings).unwrap();

        let loaded = Config::load(&settings).unwrap();
        assert_eq!(loaded.get_active_env().unwrap().env_id, "dev");
        assert_eq!(
            loaded.get_active_chain_info().unwrap().rpc_endpoint,
            "http://localhost:26657"
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let settings = test_settings("missing_config");
        let err = Config::load(&settings)
            .err()
            .and_then(|e| e.downcast::<DeployError>().ok());
        assert!(matches!(err, Some(DeployError::ConfigNotFound)));
    }

    #[test]
    fn deployer_key_resolves_by_env_key_name() {
        let config = sample_config();
        assert_eq!(config.get_active_key().unwrap().name, "deployer");
    }

    #[test]
    fn missing_deployer_key_fails_resolution() {
        let mut config = sample_config();
        config.keys.clear();
        let err = config
            .get_active_key()
            .err()
            .and_then(|e| e.downcast::<DeployError>().ok());
        assert!(
            matches!(err, Some(DeployError::KeyNotFound { key_name }) if key_name == "deployer")
        );
    }

    #[test]
    fn contract_addr_lookup() {
        let mut config = sample_config();
        assert!(config.get_contract_addr("dl_token").is_ok());

        config.get_contract_mut("dl_token").unwrap().addr = None;
        let err = config
            .get_contract_addr("dl_token")
            .err()
            .and_then(|e| e.downcast::<DeployError>().ok());
        assert!(matches!(err, Some(DeployError::AddrNotFound { name }) if name == "dl_token"));

        let err = config
            .get_contract_addr("unknown")
            .err()
            .and_then(|e| e.downcast::<DeployError>().ok());
        assert!(matches!(err, Some(DeployError::ContractNotFound { .. })));
    }

    #[test]
    fn add_contract_replaces_by_name() {
        let mut config = sample_config();
        config
            .add_contract_from(ContractInfo {
                name: "dl_token".to_string(),
                addr: None,
                code_id: Some(7),
            })
            .unwrap();
        let env = config.get_active_env().unwrap();
        assert_eq!(env.contracts.len(), 1);
        assert_eq!(env.contracts[0].code_id, Some(7));
    }
}
