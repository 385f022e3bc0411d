// File: crates/antrieb-core/src/scale.rs
// Summary: Time (X) and value (Y) scales mapping data to pixels and back.

use chrono::{DateTime, Datelike, Utc};

use crate::ticks;

/// Domain value → pixel and pixel → domain value.
pub trait ScaleTransform {
    fn to_px(&self, v: f64) -> f32;
    fn from_px(&self, px: f32) -> f64;
}

/// Unclamped linear map from `[d0, d1]` onto `[r0, r1]`.
/// A zero-width domain maps everything to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn set_range(&mut self, r0: f32, r1: f32) {
        self.r0 = r0;
        self.r1 = r1;
    }

    /// Round the domain outward so it starts and ends on a tick.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = ticks::nice(self.d0, self.d1, count);
        self.d0 = d0;
        self.d1 = d1;
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.d0, self.d1, count)
    }

    /// Decimal places that distinguish the ticks returned by `ticks(count)`.
    pub fn tick_precision(&self, count: usize) -> usize {
        ticks::precision_fixed(ticks::tick_step(self.d0, self.d1, count))
    }
}

fn normalize(v: f64, a: f64, b: f64) -> f64 {
    let span = b - a;
    if span == 0.0 || span.is_nan() { 0.5 } else { (v - a) / span }
}

impl ScaleTransform for LinearScale {
    #[inline]
    fn to_px(&self, v: f64) -> f32 {
        let t = normalize(v, self.d0, self.d1);
        (self.r0 as f64 + t * (self.r1 - self.r0) as f64) as f32
    }

    #[inline]
    fn from_px(&self, px: f32) -> f64 {
        let t = normalize(px as f64, self.r0 as f64, self.r1 as f64);
        self.d0 + t * (self.d1 - self.d0)
    }
}

/// Horizontal UTC time scale; domain values are epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain_ms: (f64, f64), left_px: f32, right_px: f32) -> Self {
        Self { inner: LinearScale::new(domain_ms, (left_px, right_px)) }
    }

    pub fn set_range(&mut self, left_px: f32, right_px: f32) {
        self.inner.set_range(left_px, right_px);
    }

    pub fn range(&self) -> (f32, f32) {
        (self.inner.r0, self.inner.r1)
    }

    pub fn date_to_px(&self, d: &DateTime<Utc>) -> f32 {
        self.inner.to_px(d.timestamp_millis() as f64)
    }

    /// January 1st of each ticked year, as `(year, epoch ms)`.
    pub fn year_ticks(&self, count: usize) -> Vec<(i32, f64)> {
        let (lo, hi) = if self.inner.d1 < self.inner.d0 {
            (self.inner.d1, self.inner.d0)
        } else {
            (self.inner.d0, self.inner.d1)
        };
        let (Some(start), Some(end)) = (ms_to_datetime(lo), ms_to_datetime(hi)) else {
            return Vec::new();
        };
        let mut first = start.year();
        if crate::dataset::year_start(first).is_some_and(|d| (d.timestamp_millis() as f64) < lo) {
            first += 1;
        }
        ticks::year_ticks(first, end.year(), count)
            .into_iter()
            .filter_map(|y| crate::dataset::year_start(y).map(|d| (y, d.timestamp_millis() as f64)))
            .collect()
    }
}

impl ScaleTransform for TimeScale {
    fn to_px(&self, v: f64) -> f32 {
        self.inner.to_px(v)
    }

    fn from_px(&self, px: f32) -> f64 {
        self.inner.from_px(px)
    }
}

fn ms_to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(ms.round() as i64)
}
