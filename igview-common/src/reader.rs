//! Read-only access to the files of an unpacked export
//!
//! Nothing here ever writes to the export. Files are read fresh on every
//! call; there is no cache.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::dataset::{Dataset, Section};
use crate::{Error, Result};

/// Login data ships under one of two folder names depending on export age
const LOGIN_DIR_NAMES: [&str; 2] = ["login_and_account_creation", "login_and_profile_creation"];

/// File holding the messages of one conversation thread
const THREAD_FILE: &str = "message_1.json";

/// Directory of every export section, resolved once at startup
#[derive(Debug, Clone)]
pub struct ExportLayout {
    root: PathBuf,
    login_dir: Option<PathBuf>,
}

impl ExportLayout {
    /// Resolve the layout under `root`.
    ///
    /// The login folder is the only section whose name varies; the first
    /// existing candidate wins. When neither exists the login dataset is
    /// reported missing on every read.
    pub fn resolve(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let security = root.join("security_and_login_information");
        let login_dir = LOGIN_DIR_NAMES
            .iter()
            .map(|name| security.join(name))
            .find(|dir| dir.is_dir());

        match &login_dir {
            Some(dir) => debug!(dir = %dir.display(), "Using login information folder"),
            None => warn!(
                "Neither {} nor {} folder exists; login activity will be unavailable",
                LOGIN_DIR_NAMES[0], LOGIN_DIR_NAMES[1]
            ),
        }

        Self { root, login_dir }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a section, or `None` if the section is absent from the export
    pub fn section_dir(&self, section: Section) -> Option<PathBuf> {
        let activity = self.root.join("your_instagram_activity");
        let dir = match section {
            Section::AdsAndTopics => self.root.join("ads_information").join("ads_and_topics"),
            Section::Advertisers => self
                .root
                .join("ads_information")
                .join("instagram_ads_and_businesses"),
            Section::Connections => self
                .root
                .join("connections")
                .join("followers_and_following"),
            Section::LinkHistory => self.root.join("logged_information").join("link_history"),
            Section::Comments => activity.join("comments"),
            Section::Likes => activity.join("likes"),
            Section::Inbox => activity.join("messages").join("inbox"),
            Section::Login => return self.login_dir.clone(),
        };
        Some(dir)
    }
}

/// Pick the first candidate file that exists in `dir`.
///
/// Fails with `MissingDataset` when none of them exist.
pub async fn resolve_dual_name(dir: &Path, candidates: &[&str], label: &str) -> Result<PathBuf> {
    for name in candidates {
        let path = dir.join(name);
        if tokio::fs::metadata(&path).await.is_ok() {
            return Ok(path);
        }
    }
    Err(Error::MissingDataset(format!(
        "{} (looked for {} in {})",
        label,
        candidates.join(" or "),
        dir.display()
    )))
}

/// Dataset reader collaborator: logical dataset name in, parsed JSON out
#[derive(Debug, Clone)]
pub struct DatasetReader {
    layout: ExportLayout,
}

impl DatasetReader {
    pub fn new(layout: ExportLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ExportLayout {
        &self.layout
    }

    /// Locate the file backing `dataset`
    pub async fn locate(&self, dataset: Dataset) -> Result<PathBuf> {
        let dir = self
            .layout
            .section_dir(dataset.section())
            .ok_or_else(|| Error::MissingDataset(dataset.label().to_string()))?;
        resolve_dual_name(&dir, dataset.file_names(), dataset.label()).await
    }

    /// Read and parse `dataset`
    pub async fn read(&self, dataset: Dataset) -> Result<Value> {
        let path = self.locate(dataset).await?;
        debug!(dataset = %dataset, path = %path.display(), "Reading dataset");
        read_json(&path, dataset.label()).await
    }

    /// Names of the conversation folders in the message inbox, sorted.
    ///
    /// Regular files in the inbox are skipped.
    pub async fn list_conversations(&self) -> Result<Vec<String>> {
        let inbox = self.inbox_dir();
        let mut entries = match tokio::fs::read_dir(&inbox).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::MissingDataset(format!(
                    "Messages (no inbox at {})",
                    inbox.display()
                )));
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Read the messages file of one conversation thread
    pub async fn read_thread(&self, name: &str) -> Result<Value> {
        if !is_valid_thread_name(name) {
            return Err(Error::NotFound(name.to_string()));
        }

        let path = self.inbox_dir().join(name).join(THREAD_FILE);
        match read_json(&path, name).await {
            Err(Error::MissingDataset(_)) => Err(Error::NotFound(name.to_string())),
            other => other,
        }
    }

    fn inbox_dir(&self) -> PathBuf {
        self.layout
            .section_dir(Section::Inbox)
            .unwrap_or_else(|| self.layout.root().to_path_buf())
    }
}

async fn read_json(path: &Path, label: &str) -> Result<Value> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::MissingDataset(format!("{} ({})", label, path.display())));
        }
        Err(e) => return Err(Error::Io(e)),
    };

    serde_json::from_str(&content).map_err(|e| Error::malformed(label, e.to_string()))
}

/// A thread name is a single path component: no separators, not `.` or `..`
fn is_valid_thread_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
        && name.len() < 256
}
