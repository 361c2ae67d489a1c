//! Size-rotated trace file writing.
//!
//! Bounds disk usage for trace exports: once the live file passes the size
//! ceiling it is renamed aside with a timestamp suffix and a fresh file
//! starts, keeping only a few of the most recent rollovers.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Size ceiling for the live file before it rolls over (10 MB).
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;

/// How many rolled-over files to keep.
const KEEP_ROLLOVERS: usize = 3;

/// Appends JSON lines to a file, rolling it over past a size ceiling.
///
/// Writes are serialized behind a `Mutex` since the exporter may be driven
/// from more than one thread. The file opens in append mode on every write;
/// the exporter is low-volume enough that a cached handle is not worth the
/// rotation bookkeeping it would need.
pub struct FileWriter {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileWriter {
    /// Creates a writer for the given path. Nothing touches the filesystem
    /// until the first append.
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    /// Appends one line, rolling the file over first if it grew too large.
    ///
    /// # Errors
    ///
    /// Fails on filesystem permission problems, a full disk, or a poisoned
    /// internal lock.
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let _held = self
            .guard
            .lock()
            .map_err(|e| std::io::Error::other(format!("writer lock poisoned: {e}")))?;

        if self.over_ceiling() {
            self.roll_over()?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{json}")?;
        file.flush()
    }

    fn over_ceiling(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > ROTATE_AT_BYTES)
    }

    /// Renames the live file to `<name>.json.<unix_seconds>` and prunes old
    /// rollovers beyond the retention count.
    fn roll_over(&self) -> std::io::Result<()> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        let aside = self.path.with_extension(format!("json.{stamp}"));

        if self.path.exists() {
            fs::rename(&self.path, &aside)?;
        }
        self.prune_rollovers()
    }

    /// Deletes all but the newest [`KEEP_ROLLOVERS`] rolled-over files.
    ///
    /// Rollover names end in their creation timestamp, so a reverse name
    /// sort orders newest first. Individual delete failures are ignored so
    /// one stubborn file cannot stall pruning.
    fn prune_rollovers(&self) -> std::io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Err(std::io::Error::other("no parent directory"));
        };
        let Some(stem) = self.path.file_stem().and_then(|s| s.to_str()) else {
            return Err(std::io::Error::other("invalid file name"));
        };

        let mut rollovers: Vec<String> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| name.starts_with(stem) && name.contains(".json."))
            .collect();
        rollovers.sort_by(|a, b| b.cmp(a));

        for stale in rollovers.into_iter().skip(KEEP_ROLLOVERS) {
            let _ = fs::remove_file(dir.join(stale));
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
