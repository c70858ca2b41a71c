/// Policy for mapping an out-of-range index into `[0, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexWrapMode {
    /// Saturate below at `0` and above at `len - 1`.
    #[default]
    Clamp,
    /// Modular indexing; `-1` maps to `len - 1`.
    Wrap,
    /// Mirror back and forth across the ends, repeating the edge element.
    ///
    /// For `len = 5`, indices `-6..=7` map to `4 4 3 2 1 0 0 1 2 3 4 4 3 2`.
    Reflect,
}

impl IndexWrapMode {
    /// Map `index` into `[0, len)`.
    ///
    /// `len` must be non-zero; an empty sequence has no valid index.
    pub fn handle(self, index: i32, len: usize) -> usize {
        debug_assert!(len > 0, "index wrap on empty sequence");
        let n = i64::try_from(len).unwrap_or(i64::MAX).max(1);
        let i = i64::from(index);
        let mapped = match self {
            Self::Clamp => i.clamp(0, n - 1),
            Self::Wrap => ((i % n) + n) % n,
            Self::Reflect => {
                // Negative indices mirror onto -i-1 so the fold is symmetric about -0.5.
                let i = if i < 0 { -i - 1 } else { i };
                let rem = i % n;
                if (i / n) % 2 == 0 { rem } else { n - 1 - rem }
            }
        };
        mapped as usize
    }
}

/// Policy for mapping an out-of-range time into `[0, duration]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWrapMode {
    /// Saturate to `[0, duration]`.
    Clamp,
    /// Modular time; negative times wrap from the end.
    #[default]
    Wrap,
    /// Triangle wave: run forward, then backward, then forward again.
    Reflect,
}

impl TimeWrapMode {
    /// Map `time` into `[0, duration]`.
    pub fn handle(self, time: f64, duration: f64) -> f64 {
        match self {
            Self::Clamp => {
                if time < 0.0 {
                    0.0
                } else if time > duration {
                    duration
                } else {
                    time
                }
            }
            Self::Wrap => {
                if time >= 0.0 {
                    time % duration
                } else {
                    duration + (time % duration)
                }
            }
            Self::Reflect => {
                let time = time.abs();
                let rem = time % duration;
                if ((time / duration).floor() as i64) % 2 == 0 {
                    rem
                } else {
                    duration - rem
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/wrap.rs"]
mod tests;
