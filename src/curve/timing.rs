use std::fmt;

use crate::foundation::error::{KeysplineError, KeysplineResult};

/// Position inside one span of a spline: `time` of the way through span `index`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpanTime {
    /// Span index (span `i` runs from point `i` to point `i + 1`).
    pub index: i32,
    /// Local time in `[0, 1]`.
    pub time: f64,
}

impl SpanTime {
    /// Create a span time.
    pub fn new(index: i32, time: f64) -> Self {
        Self { index, time }
    }
}

impl fmt::Display for SpanTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.time)
    }
}

/// Converts a normalized curve time in `[0, 1]` into a [`SpanTime`].
pub trait TimingHandler: fmt::Debug + Send + Sync {
    /// Locate the span containing `t` and the local time within it.
    fn transform_time(&self, t: f64) -> KeysplineResult<SpanTime>;
}

/// Every span lasts the same amount of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformTiming {
    point_count: usize,
}

impl UniformTiming {
    /// Timing for `point_count` evenly spaced points.
    pub fn new(point_count: usize) -> Self {
        Self { point_count }
    }

    /// Number of points this timing was built for.
    pub fn point_count(&self) -> usize {
        self.point_count
    }
}

impl TimingHandler for UniformTiming {
    fn transform_time(&self, t: f64) -> KeysplineResult<SpanTime> {
        if self.point_count < 2 {
            return Ok(SpanTime::new(0, 0.0));
        }
        let last_span = i32::try_from(self.point_count - 2).unwrap_or(i32::MAX);
        let spans = (self.point_count - 1) as f64;
        let scaled = t.clamp(0.0, 1.0) * spans;
        // t = 1 lands on the end of the last span, not the start of a missing one.
        let index = (scaled.floor() as i32).clamp(0, last_span);
        Ok(SpanTime::new(index, scaled - f64::from(index)))
    }
}

/// Each span has its own duration; spans are located by binary search.
#[derive(Clone, Debug, PartialEq)]
pub struct ArbitraryTiming {
    durations: Vec<f64>,
    starts: Vec<f64>,
    total: f64,
}

impl ArbitraryTiming {
    /// Timing where span `i` lasts `durations[i]`.
    ///
    /// Durations must be finite and non-negative with a positive sum.
    pub fn new(durations: Vec<f64>) -> KeysplineResult<Self> {
        if durations.is_empty() {
            return Err(KeysplineError::validation(
                "arbitrary timing requires at least one span duration",
            ));
        }
        if let Some(bad) = durations.iter().find(|d| !d.is_finite() || **d < 0.0) {
            return Err(KeysplineError::validation(format!(
                "span durations must be finite and non-negative (got {bad})"
            )));
        }

        let mut starts = Vec::with_capacity(durations.len());
        let mut total = 0.0;
        for d in &durations {
            starts.push(total);
            total += d;
        }
        if total <= 0.0 {
            return Err(KeysplineError::validation(
                "span durations must sum to a positive number",
            ));
        }

        Ok(Self {
            durations,
            starts,
            total,
        })
    }

    /// Per-span durations.
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// Cumulative start time of each span.
    pub fn starts(&self) -> &[f64] {
        &self.starts
    }

    /// Sum of all span durations.
    pub fn total(&self) -> f64 {
        self.total
    }

    fn contains(&self, index: usize, time: f64) -> bool {
        let start = self.starts[index];
        start <= time && time <= start + self.durations[index]
    }

    fn inconsistent(&self, time: f64, lo: usize, hi: usize, index: usize) -> KeysplineError {
        tracing::error!(
            time,
            lo,
            hi,
            index,
            starts = ?self.starts,
            durations = ?self.durations,
            "span search failed to bracket a span"
        );
        KeysplineError::internal(format!(
            "impossible timing: no span contains time {time} (lo={lo}, hi={hi}, index={index})"
        ))
    }
}

impl TimingHandler for ArbitraryTiming {
    fn transform_time(&self, t: f64) -> KeysplineResult<SpanTime> {
        if t.is_nan() {
            return Err(KeysplineError::validation("curve time must not be NaN"));
        }
        let time = t.clamp(0.0, self.total);
        let last = self.durations.len() - 1;

        // Start from the proportional guess, then bisect.
        let mut lo = 0usize;
        let mut hi = last;
        let mut index = ((time * last as f64 / self.total) as usize).min(last);
        let budget = (usize::BITS - self.durations.len().leading_zeros()) as usize + 2;
        let mut iterations = 0usize;

        while !self.contains(index, time) {
            if self.starts[index] > time {
                hi = match index.checked_sub(1) {
                    Some(h) => h,
                    None => return Err(self.inconsistent(time, lo, hi, index)),
                };
            } else {
                lo = index + 1;
            }
            if lo > hi {
                return Err(self.inconsistent(time, lo, hi, index));
            }
            index = lo + (hi - lo) / 2;

            iterations += 1;
            if iterations > budget {
                tracing::error!(iterations, budget, "span search exceeded its iteration budget");
                return Err(KeysplineError::internal(format!(
                    "span search exceeded {budget} iterations (time={time}, lo={lo}, hi={hi}, index={index})"
                )));
            }
        }

        let duration = self.durations[index];
        let local = if duration > 0.0 {
            ((time - self.starts[index]) / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let index = i32::try_from(index)
            .map_err(|_| KeysplineError::internal(format!("span index {index} exceeds i32")))?;
        Ok(SpanTime::new(index, local))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/timing.rs"]
mod tests;
