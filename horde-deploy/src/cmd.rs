use crate::constants;
use clap::Parser;
use fuel_crypto::SecretKey;
use fuel_tx::Salt;
use std::path::PathBuf;

/// Deploy a built contract artifact to a Fuel node.
///
/// All ambient configuration (node endpoint, signing accounts, artifact
/// location) is carried by this struct; the deploy operation takes it as its
/// single input.
#[derive(Debug, Parser)]
#[clap(name = "horde-deploy", version, about)]
pub struct Deploy {
    /// Name of the contract artifact to deploy.
    ///
    /// The artifact is expected at `<ARTIFACTS_DIR>/<NAME>.bin`, with initial
    /// storage slots in `<ARTIFACTS_DIR>/<NAME>-storage_slots.json` when the
    /// contract declares storage.
    #[clap(long, default_value = constants::CONTRACT_NAME)]
    pub contract: String,

    /// The directory holding the built contract artifacts.
    #[clap(long, default_value = constants::ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// The URL of the Fuel node to which we're submitting the deployment
    /// transaction.
    #[clap(long, env = "FUEL_NODE_URL", default_value = constants::NODE_URL)]
    pub node_url: String,

    /// Secret keys of the accounts available for signing, in preference
    /// order. The first key signs the deployment.
    ///
    /// May be given multiple times, or as a comma-separated list via the
    /// `DEPLOYER_SIGNING_KEYS` environment variable.
    #[clap(long = "signing-key", env = "DEPLOYER_SIGNING_KEYS", value_delimiter = ',')]
    pub signing_keys: Vec<SecretKey>,

    /// Sign the transaction with the account that is funded by fuel-core by
    /// default for testing purposes. Only useful against local test nodes.
    #[clap(long)]
    pub default_signer: bool,

    /// Salt used when deriving the contract id. A random salt is used when
    /// unspecified, so repeated runs deploy distinct instances.
    #[clap(long)]
    pub salt: Option<Salt>,

    /// The directory in which the deployment artifact JSON is placed after a
    /// successful deployment.
    ///
    /// By default, this is `<ARTIFACTS_DIR>/deployments`.
    #[clap(long)]
    pub output_directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_local_workflow() {
        let cmd = Deploy::try_parse_from(["horde-deploy"]).unwrap();
        assert_eq!(cmd.contract, "DragonHorde");
        assert_eq!(cmd.artifacts_dir, PathBuf::from("out/debug"));
        assert_eq!(cmd.node_url, "http://127.0.0.1:4000");
        assert!(cmd.signing_keys.is_empty());
        assert!(!cmd.default_signer);
        assert!(cmd.salt.is_none());
        assert!(cmd.output_directory.is_none());
    }

    #[test]
    fn salt_is_parsed_from_hex() {
        let cmd = Deploy::try_parse_from([
            "horde-deploy",
            "--salt",
            "0x0000000000000000000000000000000000000000000000000000000000000001",
        ])
        .unwrap();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(cmd.salt, Some(Salt::from(expected)));
    }

    #[test]
    fn signing_keys_keep_their_order() {
        let cmd = Deploy::try_parse_from([
            "horde-deploy",
            "--signing-key",
            crate::constants::DEFAULT_PRIVATE_KEY,
            "--signing-key",
            "0x0101010101010101010101010101010101010101010101010101010101010101",
        ])
        .unwrap();
        assert_eq!(cmd.signing_keys.len(), 2);
        assert_eq!(
            cmd.signing_keys[0],
            crate::constants::DEFAULT_PRIVATE_KEY.parse().unwrap()
        );
    }

    #[test]
    fn malformed_salt_is_rejected() {
        assert!(Deploy::try_parse_from(["horde-deploy", "--salt", "not-a-salt"]).is_err());
    }
}
