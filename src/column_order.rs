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
//! Order in which the columns of a `Table` are drawn.

use itertools::Itertools;

use crate::table::{Table, TIME_COLUMN};

/// Columns that are always drawn first (in this order), if they exist.
pub const PRIORITY_COLUMNS: [&str; 2] = ["Sum", "violations"];

/// Ordered list of column names to plot. The time column is never part of it, the
/// `PRIORITY_COLUMNS` come first, and all other columns follow in the order of the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOrder(Vec<String>);

impl ColumnOrder {
    pub fn new(table: &Table) -> Self {
        Self::from_names(table.column_names())
    }

    /// Compute the order from the header of a table.
    pub fn from_names<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        let names = names
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .filter(|s| s != TIME_COLUMN)
            .unique()
            .collect_vec();

        let priority = PRIORITY_COLUMNS
            .iter()
            .filter(|p| names.iter().any(|n| n.as_str() == **p))
            .map(|p| p.to_string());
        let rest = names
            .iter()
            .filter(|n| !PRIORITY_COLUMNS.contains(&n.as_str()))
            .cloned();

        Self(priority.chain(rest).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn order(header: &str) -> Vec<String> {
        ColumnOrder::from_names(header.split(','))
            .iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_priority_first() {
        assert_eq!(
            order("t,A,Sum,B,violations,C"),
            vec!["Sum", "violations", "A", "B", "C"]
        );
        assert_eq!(order("violations,t,Sum,A"), vec!["Sum", "violations", "A"]);
    }

    #[test]
    fn test_no_priority() {
        assert_eq!(order("t,A,B"), vec!["A", "B"]);
        assert_eq!(order("B,t,A"), vec!["B", "A"]);
    }

    #[test]
    fn test_partial_priority() {
        assert_eq!(order("t,A,violations,B"), vec!["violations", "A", "B"]);
        assert_eq!(order("t,A,B,Sum"), vec!["Sum", "A", "B"]);
    }

    #[test]
    fn test_only_time() {
        let order = ColumnOrder::from_names(["t"]);
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(order("t,sum,T,Violations"), vec!["sum", "T", "Violations"]);
    }

    #[test]
    fn test_from_table() {
        let table = Table::from_reader("t,e1,violations,e2,Sum\n0,1,0,2,3\n".as_bytes()).unwrap();
        let order = ColumnOrder::new(&table);
        assert_eq!(
            order.iter().collect::<Vec<_>>(),
            vec!["Sum", "violations", "e1", "e2"]
        );
        assert_eq!(order.len(), table.num_columns() - 1);
    }
}
