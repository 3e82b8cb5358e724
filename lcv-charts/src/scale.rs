//! Extents and the two scale kinds the charts use.
//!
//! Scales are rebuilt from the data on every update; the only state they keep
//! between updates is the pixel range fixed at construction.

use lcv_data::Row;
use std::collections::HashMap;

/// Default number of ticks requested for a linear axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Minimum and maximum of `attr` over `rows`.
///
/// Non-finite values are skipped, so a NaN cell does not widen (or poison)
/// the domain. Returns `None` when no finite value exists.
pub fn extent<'a>(rows: impl IntoIterator<Item = &'a Row>, attr: &str) -> Option<(f64, f64)> {
    rows.into_iter()
        .map(|r| r.value(attr))
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Render a number the way the tooltips show it: shortest round-trip form,
/// integers without a fractional part, and exponent notation below 1e-6 or
/// from 1e21 up (as JavaScript prints numbers).
pub fn format_number(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    let magnitude = v.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let s = format!("{:e}", v);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", v)
}

/// Continuous linear mapping from a data domain to a pixel range.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: Option<(f64, f64)>,
    range: (f64, f64),
}

impl LinearScale {
    /// A scale over the given pixel range with no domain yet. The range may be
    /// inverted (e.g. `(height, 0.0)` for a y axis).
    pub fn new(r0: f64, r1: f64) -> Self {
        Self {
            domain: None,
            range: (r0, r1),
        }
    }

    pub fn set_domain(&mut self, domain: Option<(f64, f64)>) {
        self.domain = domain;
    }

    pub fn domain(&self) -> Option<(f64, f64)> {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a data value to pixels.
    ///
    /// A missing or zero-width domain maps every finite value to the middle of
    /// the range. Non-finite input stays NaN.
    pub fn scale(&self, v: f64) -> f64 {
        if !v.is_finite() {
            return f64::NAN;
        }
        let (r0, r1) = self.range;
        match self.domain {
            Some((d0, d1)) if d1 != d0 => r0 + (v - d0) / (d1 - d0) * (r1 - r0),
            _ => (r0 + r1) / 2.0,
        }
    }

    /// Roughly `count` evenly spaced, human-friendly values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let Some((d0, d1)) = self.domain else {
            return Vec::new();
        };
        let (start, stop) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        if start == stop {
            return vec![start];
        }
        let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
            return Vec::new();
        };
        (i1..=i2)
            .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
            .collect()
    }

    /// Ticks paired with labels whose precision follows the tick step.
    pub fn labelled_ticks(&self, count: usize) -> Vec<(f64, String)> {
        let ticks = self.ticks(count);
        let decimals = match ticks.as_slice() {
            [a, b, ..] => decimals_for_step((b - a).abs()),
            _ => 0,
        };
        ticks
            .into_iter()
            .map(|t| (t, format!("{:.*}", decimals, t)))
            .collect()
    }
}

// Thresholds between the 1/2/5/10 step multipliers.
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Upper bound on ticks generated per requested tick.
const MAX_TICKS_PER_COUNT: f64 = 4.0;

/// Integer tick bounds plus increment. A negative increment means "divide by
/// `-inc`", which keeps sub-unit steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    if !(start.is_finite() && stop.is_finite()) || count <= 0.0 {
        return None;
    }
    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let i = 10f64.powf(-power) / factor;
        i1 = (start * i).round();
        i2 = (stop * i).round();
        if i1 / i < start {
            i1 += 1.0;
        }
        if i2 / i > stop {
            i2 -= 1.0;
        }
        inc = -i;
    } else {
        let i = 10f64.powf(power) * factor;
        i1 = (start / i).round();
        i2 = (stop / i).round();
        if i1 * i < start {
            i1 += 1.0;
        }
        if i2 * i > stop {
            i2 -= 1.0;
        }
        inc = i;
    }
    // Subnormal spans overflow the power of ten.
    if !(i1.is_finite() && i2.is_finite() && inc.is_finite()) || inc == 0.0 {
        return None;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if i2 < i1 || i2 - i1 > MAX_TICKS_PER_COUNT * count.max(1.0) {
        return None;
    }
    Some((i1 as i64, i2 as i64, inc))
}

fn decimals_for_step(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Discrete mapping from an ordered set of keys to evenly spaced bands.
///
/// Band positions are rounded to whole pixels; the leftover space is split
/// evenly before the first and after the last band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding_inner: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(r0: f64, r1: f64, padding_inner: f64) -> Self {
        Self {
            domain: Vec::new(),
            index: HashMap::new(),
            range: (r0, r1),
            padding_inner: padding_inner.clamp(0.0, 1.0),
            start: r0,
            step: 0.0,
            bandwidth: 0.0,
        }
    }

    /// Replace the domain. Order matters: it decides band positions. Repeated
    /// keys keep their first position.
    pub fn set_domain<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain.clear();
        self.index.clear();
        for key in keys {
            let key = key.into();
            if !self.index.contains_key(&key) {
                self.index.insert(key.clone(), self.domain.len());
                self.domain.push(key);
            }
        }
        self.rescale();
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
        if n == 0.0 {
            self.start = lo;
            self.step = 0.0;
            self.bandwidth = 0.0;
            return;
        }
        let step = ((hi - lo) / (n - self.padding_inner).max(1.0)).floor();
        let start = lo + (hi - lo - step * (n - self.padding_inner)) * 0.5;
        self.step = step;
        self.start = start.round();
        self.bandwidth = (step * (1.0 - self.padding_inner)).round();
        if r1 < r0 {
            // Inverted range: first key at the far end.
            self.start = self.start + step * (n - 1.0);
            self.step = -step;
        }
    }

    /// Start offset of the band for `key`.
    pub fn scale(&self, key: &str) -> Option<f64> {
        self.index
            .get(key)
            .map(|&i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        self.step.abs()
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
