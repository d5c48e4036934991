//! Compiled contract artifacts, as produced by hardhat or foundry

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, Specifier},
    json_abi::{JsonAbi, Param},
    primitives::Bytes,
};
use serde::Deserialize;
use tracing::debug;

use crate::errors::ScriptError;

/// Bytecode as found in an artifact file
#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactBytecode {
    /// Hardhat: `"bytecode": "0x..."`
    Hex(Bytes),
    /// Foundry: `"bytecode": { "object": "0x...", ... }`
    Object { object: Bytes },
}

/// The part of an artifact file we care about
#[derive(Deserialize)]
struct RawArtifact {
    /// Contract ABI
    abi: JsonAbi,
    /// Creation bytecode
    bytecode: ArtifactBytecode,
}

/// A compiled contract, ready to be deployed
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// Contract name
    pub name: String,
    /// Contract ABI
    pub abi: JsonAbi,
    /// Creation bytecode, without constructor arguments
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Decode an artifact from its JSON content
    pub fn from_json(name: &str, content: &str) -> Result<ContractArtifact, ScriptError> {
        let raw: RawArtifact = serde_json::from_str(content)
            .map_err(|e| ScriptError::ArtifactLoading(format!("{name}: {e}")))?;

        let bytecode = match raw.bytecode {
            ArtifactBytecode::Hex(bytes) | ArtifactBytecode::Object { object: bytes } => bytes,
        };
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactLoading(format!(
                "{name} has no bytecode, is it an interface or an abstract contract?"
            )));
        }

        Ok(ContractArtifact {
            name: name.to_string(),
            abi: raw.abi,
            bytecode,
        })
    }

    /// ABI encode the constructor arguments, each one parsed from its string form
    pub fn encode_constructor_args(&self, args: &[String]) -> Result<Vec<u8>, ScriptError> {
        let inputs: &[Param] = self
            .abi
            .constructor()
            .map(|constructor| constructor.inputs.as_slice())
            .unwrap_or_default();

        if inputs.len() != args.len() {
            return Err(ScriptError::ConstructorEncoding(format!(
                "{} constructor expects {} argument(s), got {}",
                self.name,
                inputs.len(),
                args.len()
            )));
        }
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let values = inputs
            .iter()
            .zip(args)
            .map(|(param, arg)| {
                let sol_type = param.resolve().map_err(|e| {
                    ScriptError::ConstructorEncoding(format!("{} ({}): {e}", param.name, param.ty))
                })?;
                sol_type.coerce_str(arg).map_err(|e| {
                    ScriptError::ConstructorEncoding(format!(
                        "{} ({}) from {arg:?}: {e}",
                        param.name, param.ty
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DynSolValue::Tuple(values).abi_encode_params())
    }

    /// The creation code: bytecode followed by the encoded constructor arguments
    pub fn init_code(&self, args: &[String]) -> Result<Bytes, ScriptError> {
        let encoded_args = self.encode_constructor_args(args)?;

        let mut code = self.bytecode.to_vec();
        code.extend_from_slice(&encoded_args);
        Ok(code.into())
    }
}

/// Lookup of compiled artifacts under a build output directory
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Build a store over the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ArtifactStore { root: root.into() }
    }

    /// Find the artifact file of the contract `name`
    pub fn find(&self, name: &str) -> Result<PathBuf, ScriptError> {
        let file_name = format!("{name}.json");
        find_file(&self.root, &file_name)
            .map_err(|e| {
                ScriptError::ArtifactLoading(format!("reading {}: {e}", self.root.display()))
            })?
            .ok_or_else(|| {
                ScriptError::ArtifactLoading(format!(
                    "no {file_name} found under {}, was the contract compiled?",
                    self.root.display()
                ))
            })
    }

    /// Load the artifact of the contract `name`
    pub fn load(&self, name: &str) -> Result<ContractArtifact, ScriptError> {
        let path = self.find(name)?;
        debug!("Loading {} artifact from {}", name, path.display());

        let content = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ArtifactLoading(format!("{}: {e}", path.display())))?;
        ContractArtifact::from_json(name, &content)
    }
}

/// Depth first search of `file_name`, files of a directory before its sub directories
fn find_file(dir: &Path, file_name: &str) -> Result<Option<PathBuf>, io::Error> {
    let mut sub_dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            sub_dirs.push(path);
        } else if path.file_name().is_some_and(|name| name == file_name) {
            return Ok(Some(path));
        }
    }

    // Deterministic pick when several directories hold the same name
    sub_dirs.sort();
    for sub_dir in sub_dirs {
        if let Some(found) = find_file(&sub_dir, file_name)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use alloy::hex;

    use super::*;

    const ROOT: &str = "0xeb45664ddffb072f8231448e32d46516bff19173f711ae11383142abab4d415f";

    /// Minimal hardhat artifact of a `constructor(bytes32 _root)` contract
    const HARDHAT_ARTIFACT: &str = r#"{
        "_format": "hh-sol-artifact-1",
        "contractName": "MerkleTreeNFT",
        "sourceName": "contracts/MerkleTreeNFT.sol",
        "abi": [
            {
                "inputs": [{ "internalType": "bytes32", "name": "_root", "type": "bytes32" }],
                "stateMutability": "nonpayable",
                "type": "constructor"
            }
        ],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x6080",
        "linkReferences": {},
        "deployedLinkReferences": {}
    }"#;

    /// Minimal foundry artifact of a `constructor(address, uint256)` contract
    const FOUNDRY_ARTIFACT: &str = r#"{
        "abi": [
            {
                "type": "constructor",
                "inputs": [
                    { "name": "owner", "type": "address", "internalType": "address" },
                    { "name": "supply", "type": "uint256", "internalType": "uint256" }
                ],
                "stateMutability": "nonpayable"
            }
        ],
        "bytecode": { "object": "0x60806040", "sourceMap": "", "linkReferences": {} }
    }"#;

    #[test]
    fn init_code_appends_root() {
        let artifact = ContractArtifact::from_json("MerkleTreeNFT", HARDHAT_ARTIFACT).unwrap();

        let init_code = artifact.init_code(&[ROOT.to_string()]).unwrap();

        let mut expected = hex::decode("6080604052").unwrap();
        expected.extend(hex::decode(ROOT).unwrap());
        assert_eq!(init_code.to_vec(), expected);
        assert_eq!(init_code.len(), 5 + 32);
    }

    #[test]
    fn encodes_foundry_artifact() {
        let artifact = ContractArtifact::from_json("Token", FOUNDRY_ARTIFACT).unwrap();
        assert_eq!(artifact.bytecode.to_vec(), hex::decode("60806040").unwrap());

        let encoded = artifact
            .encode_constructor_args(&[
                "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".to_string(),
                "1000".to_string(),
            ])
            .unwrap();

        assert_eq!(encoded.len(), 64);
        assert_eq!(
            &encoded[12..32],
            hex::decode("f39fd6e51aad88f6f4ce6ab8827279cfffb92266").unwrap().as_slice()
        );
        assert_eq!(&encoded[62..], &[0x03, 0xe8]);
    }

    #[test]
    fn rejects_wrong_arguments() {
        let artifact = ContractArtifact::from_json("MerkleTreeNFT", HARDHAT_ARTIFACT).unwrap();

        assert!(matches!(
            artifact.init_code(&[]),
            Err(ScriptError::ConstructorEncoding(_))
        ));
        assert!(matches!(
            artifact.init_code(&["not hex".to_string()]),
            Err(ScriptError::ConstructorEncoding(_))
        ));
    }

    #[test]
    fn no_constructor_takes_no_arguments() {
        let artifact =
            ContractArtifact::from_json("Empty", r#"{ "abi": [], "bytecode": "0x00" }"#).unwrap();

        assert_eq!(artifact.init_code(&[]).unwrap().to_vec(), vec![0x00]);
        assert!(artifact.init_code(&[ROOT.to_string()]).is_err());
    }

    #[test]
    fn rejects_empty_bytecode() {
        let err = ContractArtifact::from_json("IFace", r#"{ "abi": [], "bytecode": "0x" }"#)
            .unwrap_err();
        assert!(matches!(err, ScriptError::ArtifactLoading(_)));
    }

    #[test]
    fn store_finds_nested_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let contract_dir = dir.path().join("contracts").join("MerkleTreeNFT.sol");
        fs::create_dir_all(&contract_dir).unwrap();
        fs::write(contract_dir.join("MerkleTreeNFT.dbg.json"), "{}").unwrap();
        fs::write(contract_dir.join("MerkleTreeNFT.json"), HARDHAT_ARTIFACT).unwrap();

        let store = ArtifactStore::new(dir.path());

        assert_eq!(
            store.find("MerkleTreeNFT").unwrap(),
            contract_dir.join("MerkleTreeNFT.json")
        );
        let artifact = store.load("MerkleTreeNFT").unwrap();
        assert_eq!(artifact.name, "MerkleTreeNFT");
        assert!(artifact.abi.constructor().is_some());
    }

    #[test]
    fn store_reports_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        assert!(matches!(
            store.load("MerkleTreeNFT"),
            Err(ScriptError::ArtifactLoading(_))
        ));
        assert!(ArtifactStore::new(dir.path().join("missing"))
            .find("MerkleTreeNFT")
            .is_err());
    }
}
