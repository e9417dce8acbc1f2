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

use assert_cmd::Command;
use predicates::prelude::*;
use pinapple_metadata::{
    ArgSpec, CallSpec, ConstructorSpec, Contract, ContractBundle, Source, TypeSpec,
};
use semver::Version;
use std::{fs, path::Path};

fn pinapple_deploy() -> Command {
    Command::cargo_bin("pinapple-deploy").expect("binary exists")
}

fn write_bundle(dir: &Path) -> std::path::PathBuf {
    let source = Source::from_code(vec![0x00, 0x61, 0x73, 0x6d]);
    let contract = Contract::new(
        "CoolPinapple".to_string(),
        Version::new(0, 1, 0),
        vec!["Parity Technologies <admin@parity.io>".to_string()],
    );
    let constructor = ConstructorSpec::new(
        "new".to_string(),
        [0x9b, 0xae, 0x9d, 0x5e],
        vec![ArgSpec::new("base_uri".to_string(), TypeSpec::Str)],
    );
    let bundle = ContractBundle::new(source, contract, CallSpec::new(vec![constructor]));

    let path = dir.join("cool_pinapple.json");
    let json = serde_json::to_string(&bundle).expect("bundle serializes");
    fs::write(&path, json).expect("bundle file is written");
    path
}

#[test]
fn missing_bundle_exits_with_code_one() {
    pinapple_deploy()
        .args(&["deploy", "--suri", "//Alice", "no_such_bundle.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn unknown_network_is_rejected() {
    pinapple_deploy()
        .args(&["deploy", "--suri", "//Alice", "--network", "rinkeby"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "expected `local`, `shibuya`, `shiden` or `astar`",
        ));
}

#[test]
fn conflicting_verbosity_flags_exit_with_code_one() {
    let tmp_dir = tempfile::Builder::new()
        .prefix("pinapple-deploy.test.")
        .tempdir()
        .expect("temporary directory creation failed");
    let bundle_path = write_bundle(tmp_dir.path());

    pinapple_deploy()
        .arg("deploy")
        .arg(&bundle_path)
        .args(&["--suri", "//Alice", "--quiet", "--verbose"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Cannot pass both --quiet and --verbose flags",
        ));
}

#[test]
fn unknown_constructor_exits_with_code_one() {
    let tmp_dir = tempfile::Builder::new()
        .prefix("pinapple-deploy.test.")
        .tempdir()
        .expect("temporary directory creation failed");
    let bundle_path = write_bundle(tmp_dir.path());

    pinapple_deploy()
        .arg("deploy")
        .arg(&bundle_path)
        .args(&["--suri", "//Alice", "--constructor", "default"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Expected one of"));
}
