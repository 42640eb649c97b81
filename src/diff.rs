use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::cli::Options;
use crate::error::Result;
use crate::logging::{Logger, TracingLogger};
use crate::merge::{Comparer, Line, MergeComparer};
use crate::sink::{FileLineSink, LineSink};
use crate::source::{FileLineSource, LineSource};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub unique_a: usize,
    pub unique_b: usize,
    pub total_a: usize,
    pub total_b: usize,
}

/// Reads two sorted inputs, merge-diffs them and writes both results.
pub struct ComparisonService<S, W, C> {
    source: S,
    sink: W,
    comparer: C,
    logger: Arc<dyn Logger>,
    max_bytes: u64,
}

impl ComparisonService<FileLineSource, FileLineSink, MergeComparer> {
    /// File-backed service with the merge comparer.
    pub fn with_files(logger: Arc<dyn Logger>, max_bytes: u64) -> Self {
        Self::new(
            FileLineSource::new(logger.clone()).with_max_bytes(max_bytes),
            FileLineSink::new(logger.clone()),
            MergeComparer,
            logger,
            max_bytes,
        )
    }
}

impl<S: LineSource, W: LineSink, C: Comparer> ComparisonService<S, W, C> {
    pub fn new(source: S, sink: W, comparer: C, logger: Arc<dyn Logger>, max_bytes: u64) -> Self {
        Self {
            source,
            sink,
            comparer,
            logger,
            max_bytes,
        }
    }

    /// Compare `in_a` against `in_b`, writing the lines unique to each side
    /// to `out_a` and `out_b`.
    ///
    /// Stops at the first error. Outputs already written are left in place.
    pub fn compare_files(
        &self,
        in_a: &Path,
        in_b: &Path,
        out_a: &Path,
        out_b: &Path,
    ) -> Result<Counters> {
        self.logger.log("Starting file comparison...", Level::INFO);

        let lines_a = self.source.read_lines(in_a, self.max_bytes)?;
        let lines_b = self.source.read_lines(in_b, self.max_bytes)?;

        let (unique_a, unique_b) = self.comparer.compare(&lines_a, &lines_b);

        self.sink.write_lines(out_a, &unique_a)?;
        self.sink.write_lines(out_b, &unique_b)?;

        self.logger.log("File comparison completed.", Level::INFO);

        Ok(Counters {
            unique_a: unique_a.len(),
            unique_b: unique_b.len(),
            total_a: lines_a.len(),
            total_b: lines_b.len(),
        })
    }

    /// In-memory comparison for callers that already hold both sequences.
    pub fn compare_lines(&self, a: &[Line], b: &[Line]) -> (Vec<Line>, Vec<Line>) {
        self.logger.log(
            &format!(
                "Processing {} lines from file 1 and {} lines from file 2",
                a.len(),
                b.len()
            ),
            Level::INFO,
        );
        self.comparer.compare(a, b)
    }
}

pub fn run_sortdiff(
    in_a: &Path,
    in_b: &Path,
    out_a: &Path,
    out_b: &Path,
    opts: &Options,
) -> Result<Counters> {
    ComparisonService::with_files(Arc::new(TracingLogger), opts.max_bytes)
        .compare_files(in_a, in_b, out_a, out_b)
}
