//! Elementary descriptive statistics over a finite sample.
//!
//! Every function borrows the sample as `&[f64]`, never mutates it, and
//! rejects an empty slice with [`StatsError::EmptyInput`] before doing any
//! arithmetic.
//!
//! # Algorithms
//!
//! - **Mean**: plain left-to-right `f64` summation divided by `n`.
//! - **Variance/StdDev**: two-pass **population** estimator (denominator
//!   `n`), i.e. the mean of squared deviations from the mean.
//! - **Median**: sort an owned copy, take the middle element or the
//!   average of the two middle elements.

use log::debug;

use crate::Result;

/// Error returned when a statistic cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// The sample was empty. Carries the name of the rejecting operation.
    #[error("empty input: {0} requires at least one value")]
    EmptyInput(&'static str),
}

fn ensure_non_empty(data: &[f64], op: &'static str) -> Result<()> {
    if data.is_empty() {
        debug!("{op}: rejecting empty sample");
        return Err(StatsError::EmptyInput(op));
    }
    Ok(())
}

/// Computes the arithmetic mean: the sum of all values divided by the count.
///
/// Values are summed in slice order with ordinary floating-point addition.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use statistik::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "mean")?;
    debug!("mean: {} values", data.len());
    let sum: f64 = data.iter().sum();
    Ok(sum / data.len() as f64)
}

/// Computes the **population** variance.
///
/// ```text
/// Var(X) = Σ(xᵢ − x̄)² / n
/// ```
///
/// The denominator is `n`, not `n − 1`: this is the biased estimator. For
/// the unbiased sample variance multiply the result by `n / (n − 1)`.
///
/// # Complexity
/// Time: O(n) (two passes), Space: O(1)
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use statistik::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&v), Ok(4.0));
/// ```
pub fn variance(data: &[f64]) -> Result<f64> {
    let m = mean(data).map_err(|_| StatsError::EmptyInput("variance"))?;
    debug!("variance: {} values around mean {m}", data.len());
    let sum_sq: f64 = data
        .iter()
        .map(|&x| {
            let d = x - m;
            d * d
        })
        .sum();
    Ok(sum_sq / data.len() as f64)
}

/// Computes the population standard deviation, `sqrt(variance(data))`.
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use statistik::stats::stddev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(stddev(&v), Ok(2.0));
/// ```
pub fn stddev(data: &[f64]) -> Result<f64> {
    let var = variance(data).map_err(|_| StatsError::EmptyInput("stddev"))?;
    Ok(var.sqrt())
}

/// Computes the median of `data` without mutating the input.
///
/// Copies and sorts the data ascending, then returns the middle element,
/// or the average of the two middle elements for even-length data.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// [`StatsError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use statistik::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn median(data: &[f64]) -> Result<f64> {
    ensure_non_empty(data, "median")?;
    debug!("median: sorting copy of {} values", data.len());
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Ok(sorted[mid])
    } else {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
