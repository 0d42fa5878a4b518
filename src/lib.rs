//! # statistik
//!
//! Elementary descriptive statistics over a finite numeric sample.
//!
//! ## Modules
//!
//! - [`stats`] — mean, population variance, standard deviation, median
//!
//! ## Conventions
//!
//! - **Borrowed, read-only input**: every function takes `&[f64]` and
//!   leaves the caller's data untouched.
//! - **Explicit failure**: an empty sample is an error, reported as
//!   [`StatsError::EmptyInput`], never a NaN or a panic.
//! - **Population variance**: [`variance`] and [`stddev`] divide by `n`.
//!
//! ```
//! use statistik::{mean, median, stddev, variance};
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(mean(&data)?, 5.0);
//! assert_eq!(variance(&data)?, 4.0);
//! assert_eq!(stddev(&data)?, 2.0);
//! assert_eq!(median(&data)?, 4.5);
//! # Ok::<(), statistik::StatsError>(())
//! ```

pub mod stats;

pub use stats::{mean, median, stddev, variance, StatsError};

/// Result type returned by every statistic in this crate.
pub type Result<T> = std::result::Result<T, StatsError>;
