// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use contactsync_core::{Contact, ContactSync, SourceAccountId};

use crate::util::{ArgOutputFormat, format_table, print_json};

#[derive(Debug, Clone, Copy)]
pub struct CmdList {
    pub output_format: ArgOutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the local contacts")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, sync: &mut ContactSync) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing contacts...");
        let contacts = sync.list_contacts().await?;
        match self.output_format {
            ArgOutputFormat::Json => print_json(&contacts)?,
            ArgOutputFormat::Table if contacts.is_empty() => println!("{}", "No contacts".italic()),
            ArgOutputFormat::Table => {
                let rows = table_rows(&contacts, &sync.config().account_id);
                print!("{}", format_table(&rows));
            }
        }
        Ok(())
    }
}

fn table_rows(contacts: &[Contact], account: &SourceAccountId) -> Vec<Vec<String>> {
    contacts
        .iter()
        .map(|contact| {
            vec![
                contact.id.clone().unwrap_or_default(),
                contact.display_name(),
                contact
                    .sync_entry(account)
                    .map_or_else(|| "-".to_string(), |a| a.id.clone()),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactsync_core::{Name, SyncEntry};

    #[test]
    fn test_parse_list() {
        let cmd = Command::new("test").subcommand(CmdList::command());

        let matches = cmd
            .try_get_matches_from(["test", "ls", "--output-format", "json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("list").unwrap();
        let parsed = CmdList::from(sub_matches);
        assert_eq!(parsed.output_format, ArgOutputFormat::Json);
    }

    #[test]
    fn test_table_rows_show_link_for_account() {
        let account = SourceAccountId::from("account");
        let mut linked = Contact {
            id: Some("jane".to_string()),
            name: Some(Name {
                given_name: Some("Jane".to_string()),
                family_name: Some("Doe".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        linked.set_sync_entry(&account, SyncEntry::new("people/1"));
        let mut elsewhere = Contact {
            id: Some("john".to_string()),
            fullname: Some("John Doe".to_string()),
            ..Default::default()
        };
        elsewhere.set_sync_entry(&"other".into(), SyncEntry::new("people/2"));

        let rows = table_rows(&[linked, elsewhere], &account);
        assert_eq!(rows[0], vec!["jane", "Jane Doe", "people/1"]);
        assert_eq!(rows[1], vec!["john", "John Doe", "-"]);
    }
}
