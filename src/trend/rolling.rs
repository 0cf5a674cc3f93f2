use crate::error::RentstatError;
use std::collections::VecDeque;

/// Window used for the dashboard trend line unless configured otherwise.
pub const DEFAULT_ROLLING_WINDOW: usize = 30;

/// A validated, non-zero rolling window length, counted in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollingWindow(usize);

impl RollingWindow {
    /// # Errors
    ///
    /// [`RentstatError::InvalidWindow`] for a zero-length window.
    pub fn new(days: usize) -> Result<Self, RentstatError> {
        if days == 0 {
            return Err(RentstatError::InvalidWindow(days));
        }
        Ok(Self(days))
    }

    pub fn days(self) -> usize {
        self.0
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self(DEFAULT_ROLLING_WINDOW)
    }
}

/// Moving average over `values` with a fixed `window`.
///
/// The output has the same length as the input. Position `i` holds the mean of
/// `values[i + 1 - window..=i]` once `window` values are available and `None`
/// before that; consumers should draw those positions as gaps.
///
/// The window counts positions, so it only matches calendar days when the
/// input has one entry per day.
///
/// ```
/// use rentstat::rolling_mean;
///
/// let means = rolling_mean(&[10, 20, 30], 2).unwrap();
/// assert_eq!(means, vec![None, Some(15.0), Some(25.0)]);
/// ```
pub fn rolling_mean(values: &[u64], window: usize) -> Result<Vec<Option<f64>>, RentstatError> {
    if window == 0 {
        return Err(RentstatError::InvalidWindow(window));
    }

    let mut slots: VecDeque<u64> = VecDeque::with_capacity(window);
    let mut sum: u128 = 0;

    Ok(values
        .iter()
        .map(|&value| {
            slots.push_back(value);
            sum += value as u128;
            if slots.len() > window {
                if let Some(evicted) = slots.pop_front() {
                    sum -= evicted as u128;
                }
            }
            (slots.len() == window).then(|| sum as f64 / window as f64)
        })
        .collect())
}
