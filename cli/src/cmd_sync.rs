// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use contactsync_core::{ContactSync, Direction, SyncOutcome, SyncReport};

use crate::util::{ArgOutputFormat, format_table, print_json};

#[derive(Debug, Clone, Copy)]
pub struct CmdSync {
    pub direction: Direction,
    pub refresh_after_create: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdSync {
    pub const NAME: &str = "sync";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Synchronize contacts with Google")
            .arg(
                arg!(-d --direction <DIRECTION> "Which way contacts flow")
                    .value_parser(value_parser!(Direction))
                    .default_value("both"),
            )
            .arg(arg!(--"refresh-after-create" "Match later contacts against those created in the same run"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            direction: matches
                .get_one::<Direction>("direction")
                .copied()
                .unwrap_or_default(),
            refresh_after_create: matches.get_flag("refresh-after-create"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, sync: &mut ContactSync) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "synchronizing contacts...");
        if self.refresh_after_create {
            sync.options_mut().refresh_after_create = true;
        }

        let report = sync.run(self.direction).await?;
        match self.output_format {
            ArgOutputFormat::Json => print_json(&report)?,
            ArgOutputFormat::Table => print_report(&report),
        }
        Ok(())
    }
}

fn print_report(report: &SyncReport) {
    let mut rows = Vec::new();
    let directions = [
        ("Google -> Cozy", &report.from_google),
        ("Cozy -> Google", &report.to_google),
    ];
    for (label, outcomes) in directions {
        if let Some(outcomes) = outcomes {
            let created = outcomes.iter().filter(|a| a.is_created()).count();
            rows.push(vec![
                label.to_string(),
                format!("{created} created"),
                format!("{} skipped", outcomes.len() - created),
            ]);
        }
    }
    print!("{}", format_table(&rows));

    let ids: Vec<&str> = [&report.from_google, &report.to_google]
        .into_iter()
        .flatten()
        .flatten()
        .filter_map(SyncOutcome::id)
        .collect();
    for id in ids {
        println!("{} {id}", "+".green());
    }
}
