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
//! Module to plot the throughput per egress measured on the testbed.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use itertools::Itertools;

use chameleon_utils::{measurement::MeasurementError, path::PathBufExt};

use crate::{
    column_order::ColumnOrder,
    render::{ChartRenderer, PlotlyRenderer, Series, XSeries},
    table::{Table, TableError, TIME_COLUMN},
};

/// File written by the testbed, containing the throughput per egress over time.
pub const THROUGHPUT_FILENAME: &str = "throughput_per_egress.csv";
/// File generated next to the `THROUGHPUT_FILENAME`.
pub const PLOT_FILENAME: &str = "plot_testbed.html";

/// Error type thrown while generating the plot.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// No measurement could be found.
    #[error("Cannot resolve the measurement: {0}")]
    Resolution(#[from] MeasurementError),
    /// The input table is missing or malformed.
    #[error("Cannot read {path:?}: {source}")]
    Parse { path: PathBuf, source: TableError },
    /// The plot could not be written.
    #[error("Cannot write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Generates `plot_testbed.html` from `throughput_per_egress.csv` within a measurement directory.
#[derive(Debug, Clone, Default)]
pub struct SeriesPlotter<R = PlotlyRenderer> {
    renderer: R,
}

impl<R: ChartRenderer> SeriesPlotter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Read the throughput of `measurement_dir`, plot it and write the plot to
    /// `measurement_dir/plot_testbed.html`. Returns the path of the generated plot.
    ///
    /// The plot is either written completely, or the existing file (if any) is left untouched.
    pub fn render_throughput_plot(
        &self,
        measurement_dir: impl AsRef<Path>,
    ) -> Result<PathBuf, PlotError> {
        let measurement_dir = measurement_dir.as_ref();
        let data_path = measurement_dir.then(THROUGHPUT_FILENAME);
        let plot_path = measurement_dir.then(PLOT_FILENAME);

        log::info!("Loading: {data_path:?}");
        let table = Table::from_path(&data_path).map_err(|source| PlotError::Parse {
            path: data_path.clone(),
            source,
        })?;

        let html = self.render_table(&table);
        write_atomic(&plot_path, html.as_bytes()).map_err(|source| PlotError::Write {
            path: plot_path.clone(),
            source,
        })?;

        log::info!("Written plot to: {}", plot_path.to_string_lossy());
        Ok(plot_path)
    }

    /// Render all columns of the table (except `t`) in the `ColumnOrder`.
    pub fn render_table(&self, table: &Table) -> String {
        let order = ColumnOrder::new(table);
        log::debug!("Plotting columns {}", order.iter().join(", "));

        let series = order
            .iter()
            .filter_map(|name| table.column(name))
            .map(Series::from)
            .collect_vec();

        let x = XSeries {
            name: TIME_COLUMN,
            values: table.time(),
        };
        self.renderer.render(x, &series)
    }
}

/// Plot the throughput of `measurement_dir` with the default `PlotlyRenderer`, titled by the
/// name of the measurement.
pub fn render_throughput_plot(measurement_dir: impl AsRef<Path>) -> Result<PathBuf, PlotError> {
    let measurement_dir = measurement_dir.as_ref();
    let renderer = PlotlyRenderer::new().title(measurement_dir.display_name());
    SeriesPlotter::new(renderer).render_throughput_plot(measurement_dir)
}

/// Write `contents` into a temporary file next to `path` and rename it to `path` afterwards.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let result = fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(contents)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&tmp_path, path));

    if result.is_err() {
        // the temporary file may or may not exist at this point
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
