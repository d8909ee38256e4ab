//! Chat log sinks.

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::warn;

use super::error::ChatLogError;
use super::model::ChatExchange;

/// Append-only sink for [`ChatExchange`] records.
pub trait ChatLog: Send + Sync {
    /// Records one exchange.
    fn record(&self, exchange: ChatExchange) -> Result<(), ChatLogError>;

    /// Returns the number of exchanges recorded for `owner_id`.
    fn count_for_owner(&self, owner_id: u64) -> Result<u64, ChatLogError>;
}

/// In-memory chat log (tests and demos).
#[derive(Debug, Clone, Default)]
pub struct MemoryChatLog {
    exchanges: Arc<RwLock<Vec<ChatExchange>>>,
}

impl MemoryChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every recorded exchange.
    pub fn exchanges(&self) -> Vec<ChatExchange> {
        self.exchanges.read().clone()
    }
}

impl ChatLog for MemoryChatLog {
    fn record(&self, exchange: ChatExchange) -> Result<(), ChatLogError> {
        self.exchanges.write().push(exchange);
        Ok(())
    }

    fn count_for_owner(&self, owner_id: u64) -> Result<u64, ChatLogError> {
        Ok(self
            .exchanges
            .read()
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .count() as u64)
    }
}

/// JSON-lines chat log on disk.
///
/// One serialized [`ChatExchange`] per line. Per-owner counts are rebuilt by
/// scanning the file on open and kept current in memory afterwards;
/// unparsable lines are skipped with a warning.
pub struct JsonlChatLog {
    path: PathBuf,
    file: Mutex<File>,
    counts: RwLock<HashMap<u64, u64>>,
}

impl std::fmt::Debug for JsonlChatLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonlChatLog")
            .field("path", &self.path)
            .finish()
    }
}

impl JsonlChatLog {
    /// Opens (or creates) the log file at `path` and rebuilds owner counts.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ChatLogError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let counts = Self::scan_counts(&path)?;

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
            counts: RwLock::new(counts),
        })
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn scan_counts(path: &Path) -> Result<HashMap<u64, u64>, ChatLogError> {
        let mut counts = HashMap::new();

        if !path.exists() {
            return Ok(counts);
        }

        let reader = BufReader::new(File::open(path)?);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<ChatExchange>(&line) {
                Ok(exchange) => *counts.entry(exchange.owner_id).or_insert(0) += 1,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unparsable chat log line");
                }
            }
        }

        Ok(counts)
    }
}

impl ChatLog for JsonlChatLog {
    fn record(&self, exchange: ChatExchange) -> Result<(), ChatLogError> {
        let line = serde_json::to_string(&exchange)
            .map_err(|e| ChatLogError::Serialization(e.to_string()))?;

        {
            let mut file = self.file.lock();
            writeln!(file, "{line}")?;
            file.flush()?;
        }

        *self.counts.write().entry(exchange.owner_id).or_insert(0) += 1;
        Ok(())
    }

    fn count_for_owner(&self, owner_id: u64) -> Result<u64, ChatLogError> {
        Ok(self.counts.read().get(&owner_id).copied().unwrap_or(0))
    }
}

impl<L: ChatLog + ?Sized> ChatLog for Arc<L> {
    fn record(&self, exchange: ChatExchange) -> Result<(), ChatLogError> {
        (**self).record(exchange)
    }

    fn count_for_owner(&self, owner_id: u64) -> Result<u64, ChatLogError> {
        (**self).count_for_owner(owner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exchange(owner_id: u64, message: &str) -> ChatExchange {
        ChatExchange {
            owner_id,
            session_id: "session-1".to_string(),
            user_message: message.to_string(),
            bot_response: "a response".to_string(),
            outcome: "matched".to_string(),
            timestamp: 1_702_500_000,
        }
    }

    #[test]
    fn test_memory_log_counts_per_owner() {
        let log = MemoryChatLog::new();
        log.record(exchange(1, "a")).unwrap();
        log.record(exchange(1, "b")).unwrap();
        log.record(exchange(2, "c")).unwrap();

        assert_eq!(log.count_for_owner(1).unwrap(), 2);
        assert_eq!(log.count_for_owner(2).unwrap(), 1);
        assert_eq!(log.count_for_owner(3).unwrap(), 0);
    }

    #[test]
    fn test_jsonl_log_roundtrip_counts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chat_log.jsonl");

        {
            let log = JsonlChatLog::open(&path).unwrap();
            log.record(exchange(1, "a")).unwrap();
            log.record(exchange(1, "b")).unwrap();
            log.record(exchange(2, "c")).unwrap();
            assert_eq!(log.count_for_owner(1).unwrap(), 2);
        }

        // counts survive reopen via the scan
        let reopened = JsonlChatLog::open(&path).unwrap();
        assert_eq!(reopened.count_for_owner(1).unwrap(), 2);
        assert_eq!(reopened.count_for_owner(2).unwrap(), 1);
    }

    #[test]
    fn test_jsonl_log_skips_garbage_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chat_log.jsonl");

        std::fs::write(&path, "not json\n").unwrap();

        let log = JsonlChatLog::open(&path).unwrap();
        log.record(exchange(1, "a")).unwrap();
        assert_eq!(log.count_for_owner(1).unwrap(), 1);
    }

    #[test]
    fn test_jsonl_log_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("chat_log.jsonl");

        let log = JsonlChatLog::open(&path).unwrap();
        log.record(exchange(1, "a")).unwrap();
        assert!(path.exists());
    }
}
