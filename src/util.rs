// Chameleon: Taming the transient while reconfiguring BGP
// Copyright (C) 2023 Tibor Schneider <sctibor@ethz.ch>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Logging setup shared by the binaries.

use std::path::Path;

/// Configuration file for `log4rs`, relative to the working directory.
pub const LOG_CONFIG: &str = "log4rs.yml";

/// Initialize logging from `log4rs.yml` if it exists in the working directory, and fall back to
/// `pretty_env_logger` (configured by `RUST_LOG`) otherwise.
pub fn init_logging() {
    if Path::new(LOG_CONFIG).exists() {
        match log4rs::init_file(LOG_CONFIG, Default::default()) {
            Ok(()) => return,
            Err(e) => eprintln!("Cannot initialize logging from {LOG_CONFIG}: {e}"),
        }
    }
    // ignore the error if a logger is already set
    let _ = pretty_env_logger::try_init();
}
