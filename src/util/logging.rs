// Copyright (C) 2026  Caprica Software Limited
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
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Log file setup.
//!
//! The TUI owns stdout and stderr, so log records go to `timecalc.log` in the
//! configuration directory instead. The filter comes from `RUST_LOG` and
//! defaults to `info`.

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

const LOG_FILE: &str = "timecalc.log";

/// Installs the global logger, writing to a file in `dir`.
///
/// # Errors
///
/// Returns an error if the directory or the log file cannot be created.
pub(crate) fn init_logging(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to install logger")?;

    Ok(path)
}
