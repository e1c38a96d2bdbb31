use core::fmt;

/// A half-open `[start, end)` interval of indexes into the backing collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl ListRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Returns `true` when `other` lies entirely inside `self`.
    ///
    /// Empty ranges are contained by every range.
    pub fn contains_range(&self, other: ListRange) -> bool {
        other.is_empty() || (other.start >= self.start && other.end <= self.end)
    }

    /// Clamps both ends into `[0, len]` while keeping `start <= end`.
    pub fn clamped(self, len: usize) -> Self {
        let start = self.start.min(len);
        let end = self.end.clamp(start, len);
        Self { start, end }
    }

    pub fn iter(&self) -> core::ops::Range<usize> {
        self.start..self.end.max(self.start)
    }
}

impl From<core::ops::Range<usize>> for ListRange {
    fn from(r: core::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl fmt::Display for ListRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Interval equality: two ranges are equal when both bounds match.
pub fn ranges_equal(a: ListRange, b: ListRange) -> bool {
    a.start == b.start && a.end == b.end
}

/// Clamps `value` into `[min, max]`.
///
/// Unlike `f64::clamp` this never panics: when `min > max` the result is `min`, and a `NaN`
/// input comes back as `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.min(max).max(min)
}
