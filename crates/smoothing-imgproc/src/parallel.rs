use rayon::prelude::*;
use thiserror::Error;

use smoothing_image::ImageError;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride must be non-zero and divide the buffer length.
    #[error("invalid row stride {0} for a buffer of length {1}")]
    InvalidRowStride(usize, usize),
}

impl From<ParallelError> for ImageError {
    fn from(err: ParallelError) -> Self {
        ImageError::Parallel(err.to_string())
    }
}

/// Controls how row-wise operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Apply `f` to every row of `data`, where a row spans `row_stride` elements.
///
/// The closure receives the row index and the mutable row slice. Rows are disjoint,
/// so the result does not depend on the strategy.
pub fn for_each_row_mut<T, F>(
    data: &mut [T],
    row_stride: usize,
    strategy: ExecutionStrategy,
    f: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if row_stride == 0 || data.len() % row_stride != 0 {
        return Err(ParallelError::InvalidRowStride(row_stride, data.len()));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            data.chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(r, row)| f(r, row));
        }
        ExecutionStrategy::ParallelRows => {
            data.par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(r, row)| f(r, row));
        }
        ExecutionStrategy::Fixed(num_threads) => {
            if num_threads == 0 {
                return Err(ParallelError::InvalidThreadCount(num_threads));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;
            pool.install(|| {
                data.par_chunks_exact_mut(row_stride)
                    .enumerate()
                    .for_each(|(r, row)| f(r, row));
            });
        }
    }

    Ok(())
}
