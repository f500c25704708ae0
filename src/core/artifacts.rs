//! Contract ABI and bytecode text, embedded at build time from `contracts/`.

use crate::core::error::T0kenError;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "contracts/"]
#[include = "*.abi"]
#[include = "*.bin"]
struct Artifacts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Abi,
    Bin,
}

impl ArtifactKind {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Abi => "abi",
            ArtifactKind::Bin => "bin",
        }
    }
}

pub fn list() -> Vec<String> {
    let mut names: Vec<String> = Artifacts::iter().map(|f| f.to_string()).collect();
    names.sort();
    names
}

/// Artifact text for `contract`, trailing whitespace removed.
pub fn get(contract: &str, kind: ArtifactKind) -> Result<String, T0kenError> {
    let name = format!("{}.{}", contract, kind.extension());
    let file = Artifacts::get(&name).ok_or_else(|| T0kenError::ArtifactError(name.clone()))?;
    let text = std::str::from_utf8(file.data.as_ref())
        .map_err(|e| T0kenError::ArtifactError(format!("{}: {}", name, e)))?;
    Ok(text.trim_end().to_string())
}
