use cosm_utils::config::cfg::ChainConfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Signing parameters plus the RPC endpoint of one chain, stored in the
/// config under a user-chosen label.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChainInfo {
    pub cfg: ChainConfig,
    pub rpc_endpoint: String,
}
