// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg, value_parser};
use serde::Serialize;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn print_json(value: &impl Serialize) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Pads every column but the last to its widest cell.
pub fn format_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let last = row.len().saturating_sub(1);
        for (i, cell) in row.iter().enumerate() {
            if i == last {
                out.push_str(cell);
            } else {
                let pad = widths[i] - cell.chars().count();
                out.push_str(cell);
                out.push_str(&" ".repeat(pad + 2));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn test_parse_output_format() {
        let cmd = Command::new("test").arg(ArgOutputFormat::arg());

        let matches = cmd
            .clone()
            .try_get_matches_from(["test", "--output-format", "json"])
            .unwrap();
        assert_eq!(ArgOutputFormat::from(&matches), ArgOutputFormat::Json);

        let matches = cmd.try_get_matches_from(["test"]).unwrap();
        assert_eq!(ArgOutputFormat::from(&matches), ArgOutputFormat::Table);
    }

    #[test]
    fn test_format_table_aligns_columns() {
        let rows = vec![
            vec!["a".to_string(), "Jane Doe".to_string(), "x".to_string()],
            vec!["abcd".to_string(), "Jo".to_string(), "y".to_string()],
        ];
        assert_eq!(format_table(&rows), "a     Jane Doe  x\nabcd  Jo        y\n");
    }

    #[test]
    fn test_format_table_empty() {
        assert_eq!(format_table(&[]), "");
    }
}
