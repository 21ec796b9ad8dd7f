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
//! Module to render time series as an interactive line chart.

use lazy_static::lazy_static;
use plotly::{
    common::{Mode, Title},
    layout::{Axis, HoverMode},
    Layout, Plot, Scatter,
};
use regex::Regex;
use serde::Serialize;

use crate::table::{Column, TimeAxis};

/// A named sequence of values, borrowed from a `Table` column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series<'a> {
    pub name: &'a str,
    pub values: &'a [f64],
}

impl<'a> From<&'a Column> for Series<'a> {
    fn from(column: &'a Column) -> Self {
        Self {
            name: &column.name,
            values: &column.values,
        }
    }
}

/// The shared x-axis of all series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XSeries<'a> {
    pub name: &'a str,
    pub values: &'a TimeAxis,
}

/// Capability to render a line chart into a self-contained HTML document.
pub trait ChartRenderer {
    /// Render one line per entry in `series` (in that order) over the shared x-axis `x`.
    fn render(&self, x: XSeries<'_>, series: &[Series<'_>]) -> String;
}

lazy_static! {
    static ref EXTERNAL_SCRIPT: Regex =
        Regex::new(r#"(?i)<script[^>]*\ssrc\s*=\s*["']https?://[^"']*["'][^>]*>\s*</script>\s*"#)
            .unwrap();
}

/// Renders the chart using `plotly`. The generated HTML embeds plotly.js.
#[derive(Debug, Clone, Default)]
pub struct PlotlyRenderer {
    pub title: Option<String>,
}

impl PlotlyRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Build the plotly figure without rendering it.
    pub fn plot(&self, x: XSeries<'_>, series: &[Series<'_>]) -> Plot {
        let mut plot = Plot::new();

        let mut layout = Layout::new()
            .x_axis(Axis::new().title(Title::with_text(x.name)))
            .hover_mode(HoverMode::X);
        if let Some(title) = self.title.as_ref() {
            layout = layout.title(format!("<b>{title}</b>"));
        }
        plot.set_layout(layout);

        for s in series {
            match x.values {
                TimeAxis::Numeric(t) => plot.add_trace(line(t.clone(), s)),
                TimeAxis::Text(t) => plot.add_trace(line(t.clone(), s)),
            }
        }

        plot
    }
}

fn line<X: Serialize + Clone + 'static>(x: Vec<X>, s: &Series<'_>) -> Box<Scatter<X, f64>> {
    Scatter::new(x, s.values.to_vec())
        .name(s.name)
        .mode(Mode::Lines)
}

impl ChartRenderer for PlotlyRenderer {
    /// plotly.js is embedded, but plotly still links MathJax from a CDN. It is only needed for
    /// LaTeX labels, so the link is removed to keep the file usable offline.
    fn render(&self, x: XSeries<'_>, series: &[Series<'_>]) -> String {
        let html = self.plot(x, series).to_html();
        EXTERNAL_SCRIPT.replace_all(&html, "").into_owned()
    }
}
