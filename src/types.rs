use std::fmt;

/// Exit codes understood by the supervising process.
///
/// Process termination is the whole signalling protocol: the supervisor runs
/// `bundlewatch`, waits for it to exit, rebuilds on `Rebuild` and restarts
/// the watcher.
///
/// - `Rebuild` (0): a debounced change was observed. Stdout carries one
///   `Updating <path> [HH:MM:SS]` line.
/// - `RuntimeFailure` (1): the watcher could not keep running. Usually a
///   scan I/O error; also covers failing to install the log subscriber.
///   Nothing was rebuilt.
/// - `InvalidConfig` (2): config file or CLI values were rejected. Matches
///   the code `clap` uses for usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Rebuild,
    RuntimeFailure,
    InvalidConfig,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Rebuild => 0,
            ExitStatus::RuntimeFailure => 1,
            ExitStatus::InvalidConfig => 2,
        }
    }
}

/// How a file differs between two consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Added => f.write_str("added"),
            ChangeKind::Modified => f.write_str("modified"),
            ChangeKind::Removed => f.write_str("removed"),
        }
    }
}
