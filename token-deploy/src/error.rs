use thiserror::Error;

pub type DeployResult<T> = core::result::Result<T, DeployError>;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Unsupported shell, must use bash or zsh")]
    UnsupportedShell,

    #[error("Chain already exists")]
    ChainAlreadyExists,

    #[error("No chain configured under the label {chain_label}")]
    ChainConfigNotFound { chain_label: String },

    #[error("Contract not found: {contract_name}")]
    ContractNotFound { contract_name: String },

    #[error("Env already exists")]
    EnvAlreadyExists,

    #[error("Env not found")]
    EnvNotFound,

    #[error("Invalid directory")]
    InvalidDir,

    #[error("Key already exists")]
    KeyAlreadyExists,

    #[error("Key not found: {key_name}")]
    KeyNotFound { key_name: String },

    #[error("Code id not found, perhaps you need to store the code first?")]
    CodeIdNotFound,

    #[error("Contract address not found for {name}, perhaps you need to instantiate first?")]
    AddrNotFound { name: String },

    #[error("Config file not found, perhaps you need to run \"init\"?")]
    ConfigNotFound,

    #[error("Contract artifact not found at {path}")]
    ArtifactNotFound { path: String },

    #[error("Empty response from contract query")]
    EmptyResponse,

    #[error(
        "This feature has not been implemented for this contract.\
     Implement the relevant trait and try again."
    )]
    TraitNotImplemented,
}

#[cfg(test)]
mod test {
    use super::DeployError;

    fn test_send_sync<T: Send + Sync>(_: T) {}

    #[test]
    fn test_deploy_error() {
        test_send_sync(DeployError::EnvNotFound);
    }
}
