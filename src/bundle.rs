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

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use pinapple_metadata::{code_hash, ContractBundle};

/// Default location of the compiled contract bundle.
pub(crate) const DEFAULT_BUNDLE_PATH: &str = "artifacts/cool_pinapple.json";

/// Load the contract bundle from the specified path.
///
/// Defaults to the CoolPinapple artifact produced by the contract build.
/// The embedded code must hash to the hash recorded in the bundle.
pub(crate) fn load_bundle(path: Option<&PathBuf>) -> Result<ContractBundle> {
    let bundle_path = match path {
        Some(path) => path.clone(),
        None => PathBuf::from(DEFAULT_BUNDLE_PATH),
    };
    log::info!("Contract bundle path: {}", bundle_path.display());
    let file = File::open(&bundle_path)
        .context(format!("Failed to open {}", bundle_path.display()))?;
    let bundle: ContractBundle = serde_json::from_reader(file)
        .context(format!("Failed to parse {}", bundle_path.display()))?;

    let hash = code_hash(bundle.code());
    if &hash != bundle.source_hash() {
        anyhow::bail!(
            "Code hash mismatch in {}: the bundled code hashes to 0x{}, expected 0x{}",
            bundle_path.display(),
            hex::encode(hash),
            hex::encode(bundle.source_hash()),
        );
    }

    Ok(bundle)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{fs, io::Write, path::Path};

    pub(crate) fn with_tmp_dir<F>(f: F)
    where
        F: FnOnce(&Path) -> anyhow::Result<()>,
    {
        let tmp_dir = tempfile::Builder::new()
            .prefix("pinapple-deploy.test.")
            .tempdir()
            .expect("temporary directory creation failed");

        f(tmp_dir.path()).expect("Error executing test with tmp dir")
    }

    /// A valid bundle for the given code, as the contract build emits it.
    pub(crate) fn bundle_json(code: &[u8]) -> String {
        let hash = code_hash(code);
        format!(
            r#"{{
                "bundle_version": "0.1.0",
                "source": {{
                    "hash": "0x{}",
                    "wasm": "0x{}"
                }},
                "contract": {{
                    "name": "CoolPinapple",
                    "version": "0.1.0",
                    "authors": ["Parity Technologies <admin@parity.io>"]
                }},
                "spec": {{
                    "constructors": [
                        {{
                            "name": "new",
                            "selector": "0x9bae9d5e",
                            "args": [{{ "name": "base_uri", "type": "str" }}]
                        }}
                    ]
                }}
            }}"#,
            hex::encode(hash),
            hex::encode(code),
        )
    }

    pub(crate) fn write_bundle(dir: &Path, json: &str) -> PathBuf {
        let bundle_path = dir.join("cool_pinapple.json");
        let mut file = fs::File::create(&bundle_path).expect("bundle file creation failed");
        file.write_all(json.as_bytes())
            .expect("writing bundle failed");
        bundle_path
    }

    #[test]
    fn loads_valid_bundle() {
        with_tmp_dir(|path| {
            let bundle_path = write_bundle(path, &bundle_json(&[0x00, 0x61, 0x73, 0x6d]));

            let bundle = load_bundle(Some(&bundle_path))?;

            assert_eq!(bundle.name(), "CoolPinapple");
            assert_eq!(bundle.code(), &[0x00, 0x61, 0x73, 0x6d]);
            Ok(())
        })
    }

    #[test]
    fn missing_bundle_is_an_error() {
        with_tmp_dir(|path| {
            let result = load_bundle(Some(&path.join("no_such_bundle.json")));

            let err = result.expect_err("loading should fail");
            assert!(err.to_string().contains("Failed to open"));
            Ok(())
        })
    }

    #[test]
    fn malformed_bundle_is_an_error() {
        with_tmp_dir(|path| {
            let bundle_path = write_bundle(path, "{ not json");

            let result = load_bundle(Some(&bundle_path));

            let err = result.expect_err("loading should fail");
            assert!(err.to_string().contains("Failed to parse"));
            Ok(())
        })
    }

    #[test]
    fn tampered_code_is_an_error() {
        with_tmp_dir(|path| {
            let json = bundle_json(&[0x00, 0x61, 0x73, 0x6d])
                .replace("0x0061736d", "0x0061736e");
            let bundle_path = write_bundle(path, &json);

            let result = load_bundle(Some(&bundle_path));

            let err = result.expect_err("loading should fail");
            assert!(err.to_string().contains("Code hash mismatch"));
            Ok(())
        })
    }
}
