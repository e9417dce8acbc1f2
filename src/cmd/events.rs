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

use colored::Colorize;
use subxt::ExtrinsicSuccess;

use super::extrinsics::Runtime;
use crate::Verbosity;

/// Prints the events raised by the watched extrinsic.
pub(crate) fn display_events(result: &ExtrinsicSuccess<Runtime>, verbosity: Verbosity) {
    if !verbosity.is_verbose() {
        return
    }
    for event in &result.events {
        println!(
            "{}::{}",
            event.module.bold(),
            event.variant.bright_cyan().bold(),
        );
    }
}
