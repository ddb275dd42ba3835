//! Append-only audit trail.
//!
//! Every workflow that changes the inventory, and a few notable reads, leave
//! one line here. Lines are never edited or removed.
//!
//! Format: `[19/10/2026 14:03:27] Product created: id=4, name='Camiseta'`

use crate::error::{DressError, Result};
use chrono::{Local, NaiveDateTime};
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub trait AuditLog {
    /// Create an empty log if none exists yet.
    fn ensure(&self) -> Result<()>;

    /// Append one timestamped line describing `action`.
    fn log_action(&self, action: &str) -> Result<()>;

    /// The last `n` lines, oldest first. `n == 0` returns every line.
    fn tail(&self, n: usize) -> Result<Vec<String>>;
}

pub fn format_entry(at: NaiveDateTime, action: &str) -> String {
    format!("[{}] {}", at.format(TIMESTAMP_FORMAT), action)
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn last_lines<I: IntoIterator<Item = String>>(lines: I, n: usize) -> Vec<String> {
    let lines: Vec<String> = lines.into_iter().collect();
    if n == 0 || n >= lines.len() {
        return lines;
    }
    lines[lines.len() - n..].to_vec()
}

pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(DressError::Io)?;
            }
        }
        Ok(())
    }
}

impl AuditLog for FileAuditLog {
    fn ensure(&self) -> Result<()> {
        self.ensure_parent()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(DressError::Io)?;
        Ok(())
    }

    fn log_action(&self, action: &str) -> Result<()> {
        self.ensure_parent()?;
        let mut line = format_entry(now(), action);
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(DressError::Io)?;
        file.write_all(line.as_bytes()).map_err(DressError::Io)?;

        debug!(action, "audit entry written");
        Ok(())
    }

    fn tail(&self, n: usize) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DressError::LogNotFound(self.path.clone()))
            }
            Err(e) => return Err(DressError::Io(e)),
        };
        Ok(last_lines(content.lines().map(str::to_string), n))
    }
}

/// Audit log kept in memory, for tests.
#[derive(Default)]
pub struct MemoryAuditLog {
    entries: RefCell<Vec<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl AuditLog for MemoryAuditLog {
    fn ensure(&self) -> Result<()> {
        Ok(())
    }

    fn log_action(&self, action: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(DressError::Store("Simulated write error".to_string()));
        }
        self.entries.borrow_mut().push(format_entry(now(), action));
        Ok(())
    }

    fn tail(&self, n: usize) -> Result<Vec<String>> {
        Ok(last_lines(self.entries(), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn entry_format_is_day_first() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        assert_eq!(
            format_entry(at, "Saída do sistema"),
            "[07/03/2024 09:05:01] Saída do sistema"
        );
    }

    #[test]
    fn appends_lines_in_order() {
        let temp = TempDir::new().unwrap();
        let log = FileAuditLog::new(temp.path().join("dados").join("log.txt"));

        log.log_action("first").unwrap();
        log.log_action("second").unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] first"));
        assert!(lines[1].ends_with("] second"));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn ensure_creates_empty_file_once() {
        let temp = TempDir::new().unwrap();
        let log = FileAuditLog::new(temp.path().join("log.txt"));

        log.ensure().unwrap();
        log.log_action("kept").unwrap();
        log.ensure().unwrap();

        assert_eq!(log.tail(10).unwrap().len(), 1);
    }

    #[test]
    fn tail_returns_last_lines() {
        let log = MemoryAuditLog::new();
        for i in 1..=5 {
            log.log_action(&format!("action {}", i)).unwrap();
        }

        let last = log.tail(2).unwrap();
        assert_eq!(last.len(), 2);
        assert!(last[0].ends_with("action 4"));
        assert!(last[1].ends_with("action 5"));

        assert_eq!(log.tail(50).unwrap().len(), 5);
        assert_eq!(log.tail(0).unwrap().len(), 5);
    }

    #[test]
    fn tail_on_missing_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let log = FileAuditLog::new(temp.path().join("missing.txt"));
        assert!(matches!(log.tail(3), Err(DressError::LogNotFound(_))));
    }
}
