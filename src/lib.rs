//
// lib.rs
// sortdiff
//
// Library entry that re-exports modules so the binary and any external users can read sorted line files, merge-diff them, and write the unique lines of each side.
//
// Thales Matheus Mendonça Santos - November 2025
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod diff;
pub mod error;
pub mod logging;
pub mod merge;
pub mod sink;
pub mod source;
pub mod utils;

pub use cli::{build_options, Args, Options};
pub use diff::{run_sortdiff, ComparisonService, Counters};
pub use error::{CompareError, Result};
pub use logging::{LogFormat, Logger, TracingLogger};
pub use merge::{merge_diff, Comparer, Line, MergeComparer};
pub use sink::{FileLineSink, LineSink};
pub use source::{FileLineSource, LineSource, DEFAULT_MAX_BYTES};
