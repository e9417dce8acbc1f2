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

use anyhow::Result;
use sp_core::sr25519;
use subxt::{Client, ClientBuilder, ContractsTemplateRuntime, PairSigner};

/// The runtime of the contracts enabled chains the tool deploys to.
pub(crate) type Runtime = ContractsTemplateRuntime;

pub(crate) type Signer = PairSigner<Runtime, sr25519::Pair>;

/// Build a client connected to the target node.
pub(crate) async fn build_client(url: &url::Url) -> Result<Client<Runtime>> {
    let cli = ClientBuilder::<Runtime>::new()
        .set_url(url.to_string())
        .build()
        .await?;
    Ok(cli)
}

/// Wrap the signing pair for submitting extrinsics.
pub(crate) fn pair_signer(pair: sr25519::Pair) -> Signer {
    PairSigner::new(pair)
}
