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

use std::str::FromStr;

use anyhow::Result;
use codec::Encode as _;
use pinapple_metadata::{ContractBundle, TypeSpec};

/// Encodes calls to the bundled contract's constructors.
pub(crate) struct ConstructorEncoder<'a> {
    bundle: &'a ContractBundle,
}

impl<'a> ConstructorEncoder<'a> {
    pub fn new(bundle: &'a ContractBundle) -> Self {
        Self { bundle }
    }

    /// Encode the input data for a call to the named constructor: the dispatch
    /// selector followed by the SCALE encoded arguments.
    pub fn encode<I, S>(&self, name: &str, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let constructors = self
            .bundle
            .constructors()
            .iter()
            .map(|c| c.name().to_string())
            .collect::<Vec<_>>();

        let spec = self
            .bundle
            .constructors()
            .iter()
            .find(|c| c.name() == name)
            .ok_or(anyhow::anyhow!(
                "A constructor named '{}' was not found. Expected one of {:?}",
                name,
                constructors
            ))?;

        let args = args.into_iter().collect::<Vec<_>>();
        if args.len() != spec.args().len() {
            anyhow::bail!(
                "Constructor '{}' expects {} argument(s), {} given",
                name,
                spec.args().len(),
                args.len()
            );
        }

        let mut encoded = spec.selector().to_vec();
        for (arg_spec, arg) in spec.args().iter().zip(&args) {
            let mut arg = arg_spec.ty().encode_arg(arg.as_ref())?;
            encoded.append(&mut arg);
        }
        Ok(encoded)
    }
}

pub(crate) trait EncodeContractArg {
    fn encode_arg(&self, arg: &str) -> Result<Vec<u8>>;
}

impl EncodeContractArg for TypeSpec {
    fn encode_arg(&self, arg: &str) -> Result<Vec<u8>> {
        match self {
            TypeSpec::Bool => Ok(bool::encode(&bool::from_str(arg)?)),
            TypeSpec::U32 => Ok(u32::encode(&u32::from_str(arg)?)),
            TypeSpec::U64 => Ok(u64::encode(&u64::from_str(arg)?)),
            TypeSpec::U128 => Ok(u128::encode(&u128::from_str(arg)?)),
            TypeSpec::Str => Ok(arg.to_string().encode()),
        }
    }
}
