//! The sweep core: depth-bounded scanning, size aggregation, and safe
//! recursive deletion of target-named directories.
//!
//! Three collaborating pieces make up the core:
//!
//! - [`scan`]: a lazy depth-first search that prunes at matched targets and
//!   at a fixed system-folder denylist
//! - [`directory_size`]: best-effort recursive size aggregation that never
//!   follows symlinks and never fails
//! - [`delete_directory`]: bottom-up deletion that clears read-only
//!   attributes and removes reparse points as leaf links
//!
//! [`Sweep`] composes the first two into a reportable result list; deletion
//! batches are driven sequentially by the caller, one directory at a time,
//! so per-item success/failure reporting stays deterministic.
//!
//! # Example
//!
//! ```no_run
//! use dirsweep::sweep::{Sweep, TargetSet};
//!
//! let sweep = Sweep::builder()
//!     .root("/home/me/projects")
//!     .max_depth(Some(4))
//!     .min_size(Some(50 * 1024 * 1024)) // 50 MiB
//!     .targets(TargetSet::new(["node_modules", ".venv"]))
//!     .build();
//!
//! for result in sweep.run()? {
//!     println!("{} {}", result.size(), result.path().display());
//! }
//! # Ok::<(), dirsweep::error::SweepError>(())
//! ```

mod deleter;
mod params;
mod scanner;
mod size;
#[cfg(test)]
mod tests;
mod usage;

pub use deleter::{DeleteError, DeleteOutcome, DeleteSummary, delete_directory};
pub use params::{ScanResult, Sweep, SweepBuilder};
pub use scanner::{DEFAULT_TARGET, ScanIter, TargetSet, scan};
pub use usage::directory_size;

pub(crate) use size::{format_size, parse_size};
