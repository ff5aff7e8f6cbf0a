// Default deployment inputs shared by every token task.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Admin of the deployed token contracts. On the local chain this is the
/// prefunded dev account; point it at a real account before deploying to a
/// live network.
pub const ADMIN: &str = "wasm1cyyzpxplxdzkeea7kwsydadg87357qnahakaks";

/// Instantiate message for the token contracts. The tokens hardcode their
/// name, symbol, and decimals on-chain and take no constructor arguments.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct TokenInit {}
