use crate::{
    cmd,
    constants::TX_SUBMIT_TIMEOUT_MS,
    error::{DeployError, Result},
    util::{account, artifact::ContractArtifact},
};
use anyhow::{bail, Context};
use fuel_core_client::client::{types::TransactionStatus, FuelClient};
use fuel_crypto::{fuel_types::ChainId, SecretKey};
use fuel_tx::{Contract, ContractId, Salt, Transaction, UniqueIdentifier};
use fuels_accounts::{provider::Provider, wallet::WalletUnlocked, Account};
use fuels_core::types::{
    bech32::Bech32Address, transaction::TxPolicies,
    transaction_builders::CreateTransactionBuilder,
};
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use tracing::{debug, info};

/// A confirmed deployment: the on-chain contract id and the address of the
/// account that signed the creating transaction.
#[derive(Debug, PartialEq, Eq)]
pub struct DeployedContract {
    pub id: ContractId,
    pub owner: Bech32Address,
}

/// Record of a successful deployment, written under the deployments output
/// directory so later tooling can find what went where.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeploymentArtifact {
    transaction_id: String,
    salt: String,
    network_endpoint: String,
    chain_id: ChainId,
    contract_id: String,
    deployment_size: usize,
    deployed_block_height: Option<u32>,
}

impl DeploymentArtifact {
    fn to_file(&self, output_dir: &Path, contract_name: &str) -> anyhow::Result<()> {
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir)?;
        }

        let file_stem = format!("{contract_name}-deployment-{}", self.contract_id);
        let path = output_dir.join(file_stem).with_extension("json");
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(&file, self)?;
        Ok(())
    }
}

/// Deploys the configured contract and reports the contract id and owner
/// address on stdout.
///
/// The sequence is strict: account selection, artifact resolution, then
/// submission. Nothing touches the network before the artifact has resolved.
pub async fn deploy(command: cmd::Deploy) -> Result<DeployedContract> {
    let signing_key = account::select_deployer(&command)?;
    let owner = account::bech32_from_secret(&signing_key);

    let artifact = ContractArtifact::load(&command.artifacts_dir, &command.contract).map_err(
        |source| DeployError::Resolution {
            name: command.contract.clone(),
            source,
        },
    )?;

    let salt = command.salt.unwrap_or_else(rand::random);
    debug!(
        "deploying {} ({} bytes) to {}",
        artifact.name,
        artifact.bytecode.len(),
        command.node_url
    );

    let id = submit_deployment(&command, &artifact, salt, &signing_key)
        .await
        .map_err(|source| DeployError::Deployment {
            name: command.contract.clone(),
            source,
        })?;

    for line in deployment_report(&artifact.name, &id, &owner) {
        info!("{line}");
    }

    Ok(DeployedContract { id, owner })
}

/// The two report lines emitted after a confirmed deployment.
fn deployment_report(name: &str, id: &ContractId, owner: &Bech32Address) -> [String; 2] {
    [
        format!("{name} deployed to: 0x{id}"),
        format!("{name} owner address: {owner}"),
    ]
}

/// Builds, signs, and submits the create transaction for `artifact`, then
/// waits for the node to commit it.
async fn submit_deployment(
    command: &cmd::Deploy,
    artifact: &ContractArtifact,
    salt: Salt,
    signing_key: &SecretKey,
) -> anyhow::Result<ContractId> {
    let node_url = command.node_url.clone();
    let provider = Provider::connect(node_url.clone()).await?;
    let client = FuelClient::new(node_url.clone())?;

    let mut storage_slots = artifact.storage_slots.clone();
    storage_slots.sort();

    let contract = Contract::from(artifact.bytecode.clone());
    let root = contract.root();
    let state_root = Contract::initial_state_root(storage_slots.iter());
    let contract_id = contract.id(&salt, &root, &state_root);
    let tx_policies = TxPolicies::default();

    let mut tb = CreateTransactionBuilder::prepare_contract_deployment(
        artifact.bytecode.clone(),
        contract_id,
        state_root,
        salt,
        storage_slots,
        tx_policies,
    );
    let wallet = WalletUnlocked::new_from_private_key(*signing_key, Some(provider.clone()));

    wallet.add_witnesses(&mut tb)?;
    wallet.adjust_for_fee(&mut tb, 0).await?;
    let tx = tb.build(&provider).await?;
    let tx = Transaction::from(tx);

    let chain_info = client.chain_info().await?;
    let chain_id = chain_info.consensus_parameters.chain_id();

    let deployment_request = client.submit_and_await_commit(&tx).map(|res| match res {
        Ok(status) => match status {
            TransactionStatus::Submitted { .. } => {
                bail!("contract {contract_id} deployment timed out")
            }
            TransactionStatus::Success { block_height, .. } => {
                let deployment_artifact = DeploymentArtifact {
                    transaction_id: format!("0x{}", tx.id(&chain_id)),
                    salt: format!("0x{salt}"),
                    network_endpoint: node_url.to_string(),
                    chain_id,
                    contract_id: format!("0x{contract_id}"),
                    deployment_size: artifact.bytecode.len(),
                    deployed_block_height: Some(*block_height),
                };
                write_deployment_artifact(deployment_artifact, command)?;
                Ok(contract_id)
            }
            e => {
                bail!("contract {contract_id} failed to deploy due to an error: {e:?}")
            }
        },
        Err(e) => bail!("{e}"),
    });
    let contract_id = tokio::time::timeout(
        Duration::from_millis(TX_SUBMIT_TIMEOUT_MS),
        deployment_request,
    )
    .await
    .with_context(|| {
        format!(
            "Timed out waiting for contract {contract_id} to deploy. \
             The transaction may have been dropped."
        )
    })??;

    Ok(contract_id)
}

fn write_deployment_artifact(
    deployment_artifact: DeploymentArtifact,
    command: &cmd::Deploy,
) -> anyhow::Result<()> {
    let output_dir = command
        .output_directory
        .clone()
        .unwrap_or_else(|| command.artifacts_dir.join("deployments"));
    deployment_artifact.to_file(&output_dir, &command.contract)
}
