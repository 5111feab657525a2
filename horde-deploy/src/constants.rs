/// Default to localhost to favour the common case of testing.
pub const NODE_URL: &str = "http://127.0.0.1:4000";

/// Name of the contract artifact deployed when none is given on the command line.
pub const CONTRACT_NAME: &str = "DragonHorde";

/// Directory searched for built contract artifacts, relative to the working directory.
pub const ARTIFACTS_DIR: &str = "out/debug";

/// Default PrivateKey to sign transactions submitted to local node.
pub const DEFAULT_PRIVATE_KEY: &str =
    "0xde97d8624a438121b86a1956544bd72ed68cd69f2c99555b08b1e8c51ffd511c";

/// The maximum time to wait for a transaction to be included in a block by the node
pub const TX_SUBMIT_TIMEOUT_MS: u64 = 30_000u64;
