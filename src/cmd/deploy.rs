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

use std::path::PathBuf;

use anyhow::Result;
use sp_core::H256;
use structopt::StructOpt;
use subxt::{balances::Balances, contracts::*, ContractsTemplateRuntime};

use crate::{bundle, transcode::ConstructorEncoder};

/// Where the collection's off-chain metadata is hosted.
pub(crate) const DEFAULT_BASE_URI: &str = "ipfs://someipfsCIDherewouldbenice/";

#[derive(Debug, StructOpt)]
#[structopt(name = "deploy", about = "Deploy the bundled contract")]
pub(crate) struct DeployCommand {
    /// Path to the contract bundle, defaults to ./artifacts/cool_pinapple.json
    #[structopt(parse(from_os_str))]
    bundle: Option<PathBuf>,
    #[structopt(flatten)]
    extrinsic_opts: crate::ExtrinsicOpts,
    /// Base URI under which the token metadata is hosted
    #[structopt(name = "base-uri", long, default_value(DEFAULT_BASE_URI))]
    base_uri: String,
    /// The name of the contract constructor to call
    #[structopt(name = "constructor", long, default_value = "new")]
    constructor: String,
    /// Transfers an initial balance to the instantiated contract
    #[structopt(name = "endowment", long, default_value = "0")]
    endowment: <ContractsTemplateRuntime as Balances>::Balance,
    /// Maximum amount of gas to be used for this deployment
    #[structopt(name = "gas", long, default_value = "5000000000")]
    gas_limit: u64,
    /// Instantiate code already uploaded under this hash, skipping the upload
    #[structopt(long, parse(try_from_str = crate::parse_code_hash))]
    code_hash: Option<H256>,
}

impl DeployCommand {
    /// Deploy the bundled contract and return the address it was instantiated at.
    ///
    /// Uploads the bundled code with `Contracts::put_code` (unless an already
    /// uploaded code hash was supplied), then submits the `Contracts::instantiate`
    /// call via RPC and waits for the `ContractsEvent::Instantiated` event.
    pub(crate) fn run(&self) -> Result<String> {
        let bundle = bundle::load_bundle(self.bundle.as_ref())?;
        let encoder = ConstructorEncoder::new(&bundle);
        let data = encoder.encode(&self.constructor, &[self.base_uri.as_str()])?;
        let verbosity = self.extrinsic_opts.verbosity()?;
        let url = self.extrinsic_opts.url();
        log::info!("Deploying {} to {}", bundle.name(), url);

        async_std::task::block_on(async move {
            let cli = super::extrinsics::build_client(&url).await?;
            let signer = super::extrinsics::pair_signer(self.extrinsic_opts.signer()?);

            let code_hash = match self.code_hash {
                Some(code_hash) => {
                    log::info!("Reusing code uploaded at hash {:?}", code_hash);
                    code_hash
                }
                None => {
                    let result = cli.put_code_and_watch(&signer, bundle.code()).await?;
                    let code_stored = result
                        .code_stored()?
                        .ok_or(anyhow::anyhow!("Failed to find CodeStored event"))?;
                    log::debug!("Code stored at hash {:?}", code_stored.code_hash);
                    code_stored.code_hash
                }
            };

            let result = cli
                .instantiate_and_watch(
                    &signer,
                    self.endowment,
                    self.gas_limit,
                    &code_hash,
                    &data,
                )
                .await?;

            super::events::display_events(&result, verbosity);

            let instantiated = result
                .instantiated()?
                .ok_or(anyhow::anyhow!("Failed to find Instantiated event"))?;

            if let Some(explorer) = self
                .extrinsic_opts
                .network()
                .explorer_url(&instantiated.contract)
            {
                log::info!("See the collection at {}", explorer);
            }

            Ok(format!(
                "{} deployed to: {}",
                bundle.name(),
                instantiated.contract
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::tests::{bundle_json, with_tmp_dir, write_bundle};
    use assert_matches::assert_matches;

    #[test]
    fn defaults_to_the_bundled_base_uri() {
        let cmd = DeployCommand::from_iter(&["deploy", "--suri", "//Alice"]);

        assert_eq!(cmd.base_uri, DEFAULT_BASE_URI);
        assert_eq!(cmd.constructor, "new");
        assert_eq!(cmd.endowment, 0);
        assert_eq!(cmd.bundle, None);
        assert_eq!(cmd.code_hash, None);
    }

    #[test]
    fn accepts_a_named_network() {
        let cmd = DeployCommand::from_iter(&[
            "deploy",
            "--suri",
            "//Alice",
            "--network",
            "shibuya",
            "--base-uri",
            "ipfs://QmOther/",
        ]);

        assert_eq!(cmd.extrinsic_opts.network(), crate::Network::Shibuya);
        assert_eq!(cmd.base_uri, "ipfs://QmOther/");
    }

    #[test]
    fn missing_bundle_fails_before_any_submission() {
        with_tmp_dir(|path| {
            let cmd = DeployCommand::from_iter(&["deploy", "--suri", "//Alice"]);
            let cmd = DeployCommand {
                bundle: Some(path.join("no_such_bundle.json")),
                ..cmd
            };

            assert_matches!(cmd.run(), Err(_));
            Ok(())
        })
    }

    const CONTRACT: &str = r#"
(module
    (func (export "call"))
    (func (export "deploy"))
)
"#;

    #[test]
    #[ignore] // depends on a local contracts enabled chain running
    fn deploys_contract() {
        with_tmp_dir(|path| {
            let wasm = wabt::wat2wasm(CONTRACT).expect("invalid wabt");
            let bundle_path = write_bundle(path, &bundle_json(&wasm));

            let cmd = DeployCommand::from_iter(&[
                "deploy",
                "--suri",
                "//Alice",
                "--endowment",
                "100000000000000",
            ]);
            let cmd = DeployCommand {
                bundle: Some(bundle_path),
                ..cmd
            };
            let result = cmd.run();

            let msg = result.expect("deploy should succeed");
            assert!(msg.starts_with("CoolPinapple deployed to: "));
            Ok(())
        })
    }
}
