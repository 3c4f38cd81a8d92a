// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Local contact store keeping one JSON document per contact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use tokio::fs;
use uuid::Uuid;

use crate::contact::Contact;
use crate::error::StoreError;
use crate::store::CozyContacts;

const EXTENSION: &str = "json";

/// A directory of `<id>.json` contact documents.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens the store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory holding the documents.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Lists every contact, sorted by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a document cannot be read or decoded.
    pub async fn list(&self) -> Result<Vec<Contact>, StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut contacts = Vec::new();
        let mut entries = fs::read_dir(&self.dir).await.map_err(io_err)?;
        while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != EXTENSION) {
                continue;
            }

            let mut contact = read_document(&path).await?;
            if contact.id.is_none() {
                contact.id = path
                    .file_stem()
                    .and_then(|a| a.to_str())
                    .map(ToString::to_string);
            }
            contacts.push(contact);
        }

        contacts.sort_by(|a, b| a.id.cmp(&b.id));
        tracing::debug!(count = contacts.len(), dir = %self.dir.display(), "listed contacts");
        Ok(contacts)
    }

    /// Reads one contact by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is invalid or the document cannot be read.
    pub async fn get(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let path = self.document_path(id)?;
        match read_document(&path).await {
            Ok(contact) => Ok(Some(contact)),
            Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn document_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(StoreError::Rejected(format!("invalid contact id: {id:?}")));
        }
        Ok(self.dir.join(format!("{id}.{EXTENSION}")))
    }
}

#[async_trait]
impl CozyContacts for FileStore {
    async fn save(&self, mut contact: Contact) -> Result<Contact, StoreError> {
        let id = contact
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();
        let path = self.document_path(&id)?;

        let now = Timestamp::now();
        let metadata = &mut contact.cozy_metadata;
        metadata.created_at.get_or_insert(now);
        metadata.updated_at = Some(now);

        let data = serde_json::to_vec_pretty(&contact).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, data)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(%id, "saved contact");
        Ok(contact)
    }
}

async fn read_document(path: &Path) -> Result<Contact, StoreError> {
    let data = fs::read(path).await.map_err(|source| StoreError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| StoreError::Json {
        path: path.to_owned(),
        source,
    })
}
