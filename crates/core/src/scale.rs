//! Position scales: a continuous linear scale for years and a band scale for
//! categorical rows (months, legend samples).

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Number of ticks an axis asks a linear scale for.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Unclamped linear map from `domain` onto `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Position of `x` in the domain, 0 at the start and 1 at the end. A
    /// degenerate domain puts everything in the middle.
    #[inline]
    pub fn normalize(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 || span.is_nan() {
            return if span.is_nan() { f64::NAN } else { 0.5 };
        }
        (x - d0) / span
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        let (r0, r1) = self.range;
        let t = self.normalize(x);
        r0 * (1.0 - t) + r1 * t
    }

    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) / 2.0;
        }
        let t = (px - r0) / span;
        d0 * (1.0 - t) + d1 * t
    }

    /// Round values spaced 1, 2 or 5 times a power of ten, inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// `(first, last, increment)`; a negative increment is the reciprocal of
/// the step, used below 1 to keep the tick values exact.
#[allow(clippy::cast_possible_truncation)]
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
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
        let scale = 10_f64.powf(-power) / factor;
        i1 = js_round(start * scale);
        i2 = js_round(stop * scale);
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        inc = 10_f64.powf(power) * factor;
        i1 = js_round(start / inc);
        i2 = js_round(stop / inc);
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    (0..n)
        .map(|i| {
            let i = i as f64;
            if reverse {
                value(i2 - i)
            } else {
                value(i1 + i)
            }
        })
        .collect()
}

/// `Math.round`: halves go towards positive infinity.
#[inline]
fn js_round(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Ordered categories laid out as equal, contiguous bands.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
}

impl<T: PartialEq + Clone> BandScale<T> {
    /// Later duplicates of a value are dropped; the first one keeps its slot.
    pub fn new(values: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut domain: Vec<T> = Vec::new();
        for value in values {
            if !domain.contains(&value) {
                domain.push(value);
            }
        }
        Self { domain, range }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub const fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        (r1 - r0).abs() / self.domain.len().max(1) as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.domain.iter().position(|candidate| candidate == value)
    }

    /// Start of the band for `value`, or `None` if it is not in the domain.
    pub fn apply(&self, value: &T) -> Option<f64> {
        let index = self.index_of(value)?;
        let (r0, r1) = self.range;
        let step = self.step();
        let n = self.domain.len();
        // A reversed range hands out bands from the far end.
        let slot = if r1 < r0 { n - 1 - index } else { index };
        Some(r0.min(r1) + step * slot as f64)
    }

    /// Centre of the band, offset the way axis ticks are.
    pub fn center(&self, value: &T, offset: f64) -> Option<f64> {
        let start = self.apply(value)?;
        Some(start + (self.bandwidth() - offset * 2.0).max(0.0) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ticks, BandScale, LinearScale};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual}, diff {diff}"
        );
    }

    #[test]
    fn linear_scale_maps_domain_ends_to_range_ends() {
        let scale = LinearScale::new((1753.0, 2015.0), (0.0, 900.0));
        assert_close(scale.apply(1753.0), 0.0);
        assert_close(scale.apply(2015.0), 900.0);
        assert_close(scale.apply(1884.0), 450.0);
        assert_close(scale.invert(450.0), 1884.0);
    }

    #[test]
    fn linear_scale_does_not_clamp() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_close(scale.apply(-1.0), -10.0);
        assert_close(scale.apply(12.0), 120.0);
    }

    #[test]
    fn degenerate_domain_maps_to_middle_of_range() {
        let scale = LinearScale::new((1900.0, 1900.0), (0.0, 800.0));
        assert_close(scale.apply(1900.0), 400.0);
        assert_close(scale.apply(2000.0), 400.0);
    }

    #[test]
    fn year_ticks_step_by_twenty() {
        let values = ticks(1753.0, 2015.0, 10);
        assert_eq!(values.len(), 13);
        assert_close(values[0], 1760.0);
        assert_close(values[12], 2000.0);
        assert!(values.windows(2).all(|pair| (pair[1] - pair[0] - 20.0).abs() < 1e-9));
    }

    #[test]
    fn fractional_ticks_are_exact_decimals() {
        let values = ticks(0.0, 1.0, 10);
        assert_eq!(values.len(), 11);
        assert_eq!(values[3], 0.3);
        assert_eq!(values[10], 1.0);
    }

    #[test]
    fn reversed_and_degenerate_ticks() {
        let values = ticks(10.0, 0.0, 5);
        assert_eq!(values, vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
        assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn month_bands_are_even() {
        let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
        let scale = BandScale::new(months, (0.0, 480.0));
        assert_close(scale.bandwidth(), 40.0);
        assert_eq!(scale.apply(&"Jan"), Some(0.0));
        assert_eq!(scale.apply(&"Dec"), Some(440.0));
        assert_eq!(scale.apply(&"Smarch"), None);
        assert_eq!(scale.center(&"Feb", 0.5), Some(40.0 + 19.5));
    }

    #[test]
    fn band_domain_drops_duplicates() {
        let scale = BandScale::new([1.0, 2.0, 1.0, 3.0], (0.0, 90.0));
        assert_eq!(scale.domain(), &[1.0, 2.0, 3.0]);
        assert_close(scale.step(), 30.0);
        assert_eq!(scale.apply(&3.0), Some(60.0));
    }
}
