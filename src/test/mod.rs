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
//! Test cases running the whole pipeline on a temporary measurement directory.
//!
//! Use the following command to run them:
//!
//! ```shell
//! cargo test --lib test:: -- --nocapture
//! ```

use std::{cell::RefCell, fs, path::Path};

use regex::Regex;
use tempfile::TempDir;

use crate::{
    plotter::THROUGHPUT_FILENAME,
    render::{ChartRenderer, Series, XSeries},
};

/// Renderer that remembers the series it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl RecordingRenderer {
    /// Names of the series of the last call.
    pub fn last_traces(&self) -> Vec<String> {
        self.calls
            .borrow()
            .last()
            .map(|(_, names)| names.clone())
            .unwrap_or_default()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, x: XSeries<'_>, series: &[Series<'_>]) -> String {
        let names: Vec<String> = series.iter().map(|s| s.name.to_string()).collect();
        let html = format!("<html><body>{}</body></html>", names.join(","));
        self.calls.borrow_mut().push((x.name.to_string(), names));
        html
    }
}

/// Create a measurement directory holding a `throughput_per_egress.csv` with the given content.
pub fn measurement(content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(THROUGHPUT_FILENAME), content).unwrap();
    dir
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

/// Extract the plotly figure (`{"data": [..], "layout": {..}, ..}`) from a generated HTML page.
/// The figure is the last JSON object starting with a `data` key, after the embedded plotly.js.
pub fn figure(html: &str) -> serde_json::Value {
    let start = Regex::new(r#"\{\s*"data"\s*:\s*\["#)
        .unwrap()
        .find_iter(html)
        .last()
        .expect("the page contains no plotly figure")
        .start();
    serde_json::Deserializer::from_str(&html[start..])
        .into_iter::<serde_json::Value>()
        .next()
        .unwrap()
        .unwrap()
}
