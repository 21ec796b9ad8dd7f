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
//! Library for plotting measurements of the Chameleon testbed.

pub mod column_order;
pub mod plotter;
pub mod render;
pub mod table;
pub mod util;

#[cfg(test)]
mod test;

pub mod prelude {
    pub use super::{
        column_order::ColumnOrder,
        plotter::{
            render_throughput_plot, PlotError, SeriesPlotter, PLOT_FILENAME, THROUGHPUT_FILENAME,
        },
        render::{ChartRenderer, PlotlyRenderer, Series, XSeries},
        table::{Column, Table, TableError, TimeAxis, TIME_COLUMN},
    };
}
