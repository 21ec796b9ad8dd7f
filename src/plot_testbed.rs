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
use std::path::PathBuf;

use clap::Parser;

use chameleon_analysis::{
    plotter::{PlotError, SeriesPlotter, THROUGHPUT_FILENAME},
    render::PlotlyRenderer,
    util,
};
use chameleon_utils::{
    measurement::{select_measurement, Selection},
    path::PathBufExt,
};

/// Plot the throughput per egress of a testbed measurement into `plot_testbed.html`.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Measurement directory to plot. If omitted, a measurement below `data_root` is selected.
    #[arg(short, long)]
    path: Option<PathBuf>,
    /// Directory in which to search for measurements.
    #[arg(short, long, default_value = "./results/")]
    data_root: PathBuf,
    /// Pick the most recent measurement instead of asking.
    #[arg(short, long)]
    latest: bool,
    /// Title of the plot. Defaults to the name of the measurement directory.
    #[arg(short, long)]
    title: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    util::init_logging();

    let args = Args::parse();
    let plot_file = run(args).map_err(|e| {
        log::error!("{e}");
        e
    })?;

    println!("Written plot to {}", plot_file.display());

    Ok(())
}

fn run(args: Args) -> Result<PathBuf, PlotError> {
    let path = match args.path {
        Some(path) => path,
        None => {
            let mode = if args.latest {
                Selection::Latest
            } else {
                Selection::Interactive
            };
            select_measurement(&args.data_root, THROUGHPUT_FILENAME, mode)?
        }
    };

    let title = args.title.unwrap_or_else(|| path.display_name());
    SeriesPlotter::new(PlotlyRenderer::new().title(title)).render_throughput_plot(&path)
}
