use anyhow::{Context, Result};
use fuel_tx::StorageSlot;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A named contract artifact on disk: the bytecode produced by `forc build`
/// plus the contract's initial storage slots.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub name: String,
    pub bytecode: Vec<u8>,
    pub storage_slots: Vec<StorageSlot>,
}

impl ContractArtifact {
    /// Resolves the artifact named `name` under `dir`.
    ///
    /// Expects `<dir>/<name>.bin`. Initial storage slots are read from
    /// `<dir>/<name>-storage_slots.json` when that file exists; a contract
    /// without declared storage has no such file and gets no slots.
    pub fn load(dir: &Path, name: &str) -> Result<Self> {
        let bin_path = dir.join(name).with_extension("bin");
        let bytecode = fs::read(&bin_path)
            .with_context(|| format!("no contract artifact at {}", bin_path.display()))?;

        let slots_path = storage_slots_path(dir, name);
        let storage_slots = if slots_path.exists() {
            let slots = fs::read_to_string(&slots_path)
                .with_context(|| format!("failed to read {}", slots_path.display()))?;
            serde_json::from_str(&slots)
                .with_context(|| format!("malformed storage slots in {}", slots_path.display()))?
        } else {
            Vec::new()
        };

        Ok(Self {
            name: name.to_string(),
            bytecode,
            storage_slots,
        })
    }
}

fn storage_slots_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}-storage_slots.json"))
}
