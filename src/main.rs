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

mod bundle;
mod cmd;
mod transcode;

use std::{
    convert::TryFrom,
    fmt,
    result::Result as StdResult,
    str::FromStr,
};

use anyhow::Result;
use sp_core::{crypto::Pair, sr25519, H256};
use structopt::{clap, StructOpt};

#[derive(Debug, StructOpt)]
#[structopt(bin_name = "pinapple-deploy")]
#[structopt(setting = clap::AppSettings::UnifiedHelpMessage)]
#[structopt(setting = clap::AppSettings::DeriveDisplayOrder)]
#[structopt(setting = clap::AppSettings::DontCollapseArgsInUsage)]
pub(crate) struct Opts {
    #[structopt(subcommand)]
    cmd: Command,
}

/// The networks the contract can be deployed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Network {
    /// A development node running locally.
    Local,
    /// The Shibuya test network.
    Shibuya,
    /// The Shiden canary network.
    Shiden,
    /// The Astar main network.
    Astar,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct InvalidNetwork;

impl fmt::Display for InvalidNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "expected `local`, `shibuya`, `shiden` or `astar`")
    }
}

impl FromStr for Network {
    type Err = InvalidNetwork;

    fn from_str(input: &str) -> StdResult<Self, Self::Err> {
        match input {
            "local" => Ok(Network::Local),
            "shibuya" => Ok(Network::Shibuya),
            "shiden" => Ok(Network::Shiden),
            "astar" => Ok(Network::Astar),
            _ => Err(InvalidNetwork),
        }
    }
}

impl Network {
    /// Websocket endpoint of the network's public RPC node.
    pub fn url(&self) -> url::Url {
        let url = match self {
            Network::Local => "ws://127.0.0.1:9944",
            Network::Shibuya => "wss://rpc.shibuya.astar.network",
            Network::Shiden => "wss://rpc.shiden.astar.network",
            Network::Astar => "wss://rpc.astar.network",
        };
        url::Url::parse(url).expect("network endpoints are valid urls")
    }

    /// Explorer page of the given account, `None` for local nodes.
    pub fn explorer_url(&self, account: &impl fmt::Display) -> Option<String> {
        let subdomain = match self {
            Network::Local => return None,
            Network::Shibuya => "shibuya",
            Network::Shiden => "shiden",
            Network::Astar => "astar",
        };
        Some(format!(
            "https://{}.subscan.io/account/{}",
            subdomain, account
        ))
    }
}

/// Denotes if output should be printed to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Verbosity {
    Default,
    Quiet,
    Verbose,
}

impl Verbosity {
    /// Returns `true` if verbose output is set.
    pub fn is_verbose(&self) -> bool {
        match self {
            Verbosity::Quiet | Verbosity::Default => false,
            Verbosity::Verbose => true,
        }
    }
}

#[derive(Debug, StructOpt)]
pub(crate) struct VerbosityFlags {
    /// No output printed to stdout
    #[structopt(long)]
    quiet: bool,
    /// Use verbose output
    #[structopt(long)]
    verbose: bool,
}

impl TryFrom<&VerbosityFlags> for Verbosity {
    type Error = anyhow::Error;

    fn try_from(value: &VerbosityFlags) -> StdResult<Self, Self::Error> {
        match (value.quiet, value.verbose) {
            (false, false) => Ok(Verbosity::Default),
            (true, false) => Ok(Verbosity::Quiet),
            (false, true) => Ok(Verbosity::Verbose),
            (true, true) => anyhow::bail!("Cannot pass both --quiet and --verbose flags"),
        }
    }
}

/// Arguments required for creating and sending an extrinsic to the target node
#[derive(Debug, StructOpt)]
pub(crate) struct ExtrinsicOpts {
    /// The named network to deploy to
    #[structopt(name = "network", long, default_value = "local")]
    network: Network,
    /// Websockets url of the target node, overrides `--network`
    #[structopt(name = "url", long, parse(try_from_str))]
    url: Option<url::Url>,
    /// Secret key URI for the account deploying the contract.
    #[structopt(name = "suri", long, short)]
    suri: String,
    /// Password for the secret key
    #[structopt(name = "password", long, short)]
    password: Option<String>,
    #[structopt(flatten)]
    verbosity: VerbosityFlags,
}

impl ExtrinsicOpts {
    /// Derive the signing pair from the secret URI.
    pub fn signer(&self) -> Result<sr25519::Pair> {
        sr25519::Pair::from_string(&self.suri, self.password.as_ref().map(String::as_ref))
            .map_err(|_| anyhow::anyhow!("Secret string error"))
    }

    /// Endpoint of the target node.
    pub fn url(&self) -> url::Url {
        match &self.url {
            Some(url) => url.clone(),
            None => self.network.url(),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn verbosity(&self) -> Result<Verbosity> {
        Ok(Verbosity::try_from(&self.verbosity)?)
    }
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Deploy the bundled contract and print the address it lives at
    #[structopt(name = "deploy")]
    Deploy(cmd::DeployCommand),
}

pub(crate) fn parse_code_hash(input: &str) -> Result<H256> {
    let bytes = hex::decode(input)?;
    if bytes.len() != 32 {
        anyhow::bail!("Code hash should be 32 bytes in length")
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    Ok(H256(arr))
}

fn main() {
    env_logger::init();

    let Opts { cmd } = Opts::from_args();
    match exec(cmd) {
        Ok(msg) => println!("{}", msg),
        Err(err) => {
            eprintln!("error: {:?}", err);
            std::process::exit(1);
        }
    }
}

fn exec(cmd: Command) -> Result<String> {
    match &cmd {
        Command::Deploy(deploy) => deploy.run(),
    }
}
