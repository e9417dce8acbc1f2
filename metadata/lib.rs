// Copyright 2018-2021 Parity Technologies (UK) Ltd.
// This file is part of pinapple-deploy.
//
// pinapple-deploy is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// pinapple-deploy is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with pinapple-deploy.  If not, see <http://www.gnu.org/licenses/>.

mod byte_str;

use core::fmt::{Display, Formatter, Result as DisplayResult};
use semver::Version;
use serde::{Deserialize, Serialize};

const BUNDLE_VERSION: &str = "0.1.0";

/// Bundle of a compiled smart contract: the contract code together with
/// everything needed to deploy it.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContractBundle {
    bundle_version: Version,
    source: Source,
    contract: Contract,
    spec: CallSpec,
}

impl ContractBundle {
    /// Construct a new contract bundle.
    pub fn new(source: Source, contract: Contract, spec: CallSpec) -> Self {
        let bundle_version = Version::parse(BUNDLE_VERSION)
            .expect("BUNDLE_VERSION is a valid semver string");

        Self {
            bundle_version,
            source,
            contract,
            spec,
        }
    }

    /// The name of the bundled contract.
    pub fn name(&self) -> &str {
        &self.contract.name
    }

    /// The compiled contract code.
    pub fn code(&self) -> &[u8] {
        &self.source.wasm
    }

    /// The code hash recorded at compilation time.
    pub fn source_hash(&self) -> &[u8; 32] {
        &self.source.hash
    }

    /// The constructors callable on instantiation.
    pub fn constructors(&self) -> &[ConstructorSpec] {
        &self.spec.constructors
    }
}

/// The compiled code of a smart contract and the hash it was recorded under.
#[derive(Debug, Serialize, Deserialize)]
pub struct Source {
    #[serde(
        serialize_with = "byte_str::serialize_as_byte_str",
        deserialize_with = "byte_str::deserialize_from_byte_str_array"
    )]
    hash: [u8; 32],
    #[serde(
        serialize_with = "byte_str::serialize_as_byte_str",
        deserialize_with = "byte_str::deserialize_from_byte_str"
    )]
    wasm: Vec<u8>,
}

impl Source {
    /// Constructs a new Source.
    pub fn new(hash: [u8; 32], wasm: Vec<u8>) -> Self {
        Source { hash, wasm }
    }

    /// Constructs a new Source for the given code, hashing it.
    pub fn from_code(wasm: Vec<u8>) -> Self {
        Source {
            hash: code_hash(&wasm),
            wasm,
        }
    }
}

/// Metadata about the bundled smart contract.
#[derive(Debug, Serialize, Deserialize)]
pub struct Contract {
    name: String,
    version: Version,
    authors: Vec<String>,
}

impl Contract {
    /// Constructs a new Contract.
    pub fn new(name: String, version: Version, authors: Vec<String>) -> Self {
        Contract {
            name,
            version,
            authors,
        }
    }
}

/// The calls exposed by the bundled contract for instantiation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CallSpec {
    constructors: Vec<ConstructorSpec>,
}

impl CallSpec {
    /// Constructs a new CallSpec.
    pub fn new(constructors: Vec<ConstructorSpec>) -> Self {
        CallSpec { constructors }
    }
}

/// A single contract constructor: its exported name, dispatch selector and
/// typed arguments.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConstructorSpec {
    name: String,
    #[serde(
        serialize_with = "byte_str::serialize_as_byte_str",
        deserialize_with = "byte_str::deserialize_from_byte_str_selector"
    )]
    selector: [u8; 4],
    args: Vec<ArgSpec>,
}

impl ConstructorSpec {
    /// Constructs a new ConstructorSpec.
    pub fn new(name: String, selector: [u8; 4], args: Vec<ArgSpec>) -> Self {
        ConstructorSpec {
            name,
            selector,
            args,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selector(&self) -> &[u8; 4] {
        &self.selector
    }

    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }
}

/// A named, typed constructor argument.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArgSpec {
    name: String,
    #[serde(rename = "type")]
    ty: TypeSpec,
}

impl ArgSpec {
    /// Constructs a new ArgSpec.
    pub fn new(name: String, ty: TypeSpec) -> Self {
        ArgSpec { name, ty }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> TypeSpec {
        self.ty
    }
}

/// The scalar types a constructor argument can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeSpec {
    Bool,
    U32,
    U64,
    U128,
    Str,
}

impl Display for TypeSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> DisplayResult {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::U128 => write!(f, "u128"),
            Self::Str => write!(f, "str"),
        }
    }
}

/// Returns the blake2 hash of the given code.
pub fn code_hash(code: &[u8]) -> [u8; 32] {
    use blake2::digest::{Update as _, VariableOutput as _};
    let mut output = [0u8; 32];
    let mut blake2 = blake2::VarBlake2b::new(32).expect("32 is a valid Blake2b output size");
    blake2.update(code);
    blake2.finalize_variable(|result| output.copy_from_slice(result));
    output
}
