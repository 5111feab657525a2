use crate::{cmd, constants::DEFAULT_PRIVATE_KEY, error::DeployError};
use anyhow::anyhow;
use fuel_crypto::{PublicKey, SecretKey};
use fuels::types::bech32::{Bech32Address, FUEL_BECH32_HRP};
use horde_tracing::println_yellow_err;

/// Signing keys available to this run, in preference order.
///
/// Keys passed explicitly (flag or environment variable) win over the
/// default local-node signer.
pub(crate) fn available_signers(command: &cmd::Deploy) -> anyhow::Result<Vec<SecretKey>> {
    if !command.signing_keys.is_empty() {
        if command.default_signer {
            println_yellow_err(
                "--default-signer is ignored because explicit signing keys were provided",
            );
        }
        return Ok(command.signing_keys.clone());
    }
    if command.default_signer {
        // The account funded by fuel-core by default on local test networks.
        let key = DEFAULT_PRIVATE_KEY
            .parse::<SecretKey>()
            .map_err(anyhow::Error::msg)?;
        return Ok(vec![key]);
    }
    Ok(Vec::new())
}

/// Selects the deploying account: the first signer the environment offers.
pub(crate) fn select_deployer(command: &cmd::Deploy) -> Result<SecretKey, DeployError> {
    let signers = available_signers(command).map_err(DeployError::Environment)?;
    signers.first().copied().ok_or_else(|| {
        DeployError::Environment(anyhow!(
            "no signing account available: pass --signing-key, set DEPLOYER_SIGNING_KEYS, \
             or use --default-signer against a local node"
        ))
    })
}

pub(crate) fn bech32_from_secret(secret_key: &SecretKey) -> Bech32Address {
    let public_key = PublicKey::from(secret_key);
    let hashed = public_key.hash();
    Bech32Address::new(FUEL_BECH32_HRP, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cmd_with_keys(signing_keys: Vec<SecretKey>, default_signer: bool) -> cmd::Deploy {
        cmd::Deploy {
            contract: "DragonHorde".to_string(),
            artifacts_dir: PathBuf::from("out/debug"),
            node_url: crate::constants::NODE_URL.to_string(),
            signing_keys,
            default_signer,
            salt: None,
            output_directory: None,
        }
    }

    #[test]
    fn first_key_is_selected() {
        let first: SecretKey =
            "0x0101010101010101010101010101010101010101010101010101010101010101"
                .parse()
                .unwrap();
        let second: SecretKey =
            "0x0202020202020202020202020202020202020202020202020202020202020202"
                .parse()
                .unwrap();
        let selected = select_deployer(&cmd_with_keys(vec![first, second], false)).unwrap();
        assert_eq!(selected, first);
    }

    #[test]
    fn default_signer_is_the_local_node_key() {
        let selected = select_deployer(&cmd_with_keys(Vec::new(), true)).unwrap();
        assert_eq!(selected, DEFAULT_PRIVATE_KEY.parse().unwrap());
    }

    #[test]
    fn explicit_keys_win_over_default_signer() {
        let key: SecretKey =
            "0x0303030303030303030303030303030303030303030303030303030303030303"
                .parse()
                .unwrap();
        let selected = select_deployer(&cmd_with_keys(vec![key], true)).unwrap();
        assert_eq!(selected, key);
    }

    #[test]
    fn no_signer_is_an_environment_error() {
        let err = select_deployer(&cmd_with_keys(Vec::new(), false)).unwrap_err();
        assert!(matches!(err, DeployError::Environment(_)));
        assert!(err.to_string().contains("no signing account available"));
    }

    #[test]
    fn owner_address_derivation_is_deterministic() {
        let key: SecretKey = DEFAULT_PRIVATE_KEY.parse().unwrap();
        let addr = bech32_from_secret(&key);
        assert_eq!(addr, bech32_from_secret(&key));
        assert!(addr.to_string().starts_with("fuel1"));
    }
}
