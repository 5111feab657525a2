use thiserror::Error;

/// Failures a deployment run can end with. Nothing here is recovered from:
/// every variant surfaces to `main`, is printed to stderr, and the process
/// exits non-zero.
#[derive(Debug, Error)]
pub enum DeployError {
    /// No account was available to sign the deployment transaction.
    #[error("failed to select a deployer account: {0:#}")]
    Environment(anyhow::Error),
    /// The named contract artifact could not be located or loaded.
    #[error("failed to resolve contract '{name}': {source:#}")]
    Resolution { name: String, source: anyhow::Error },
    /// The deployment transaction was rejected, timed out, or never confirmed.
    #[error("failed to deploy contract '{name}': {source:#}")]
    Deployment { name: String, source: anyhow::Error },
}

pub type Result<T, E = DeployError> = std::result::Result<T, E>;
