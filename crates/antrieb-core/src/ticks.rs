// File: crates/antrieb-core/src/ticks.rs
// Summary: Tick step, nice-domain and tick layout helpers ("1-2-5" stepping).

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

fn step_multiplier(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Signed increment between ticks for roughly `count` ticks over `[start, stop]`.
/// Positive results are the step itself; negative results encode `-1/step`
/// so that sub-unit steps stay exact when multiplied back.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    if power >= 0.0 {
        step_multiplier(error) * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / step_multiplier(error)
    }
}

/// Absolute tick step (always the real distance between ticks).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start).abs() / count.max(1) as f64;
    let mut step1 = 10f64.powf(step0.log10().floor());
    step1 *= step_multiplier(step0 / step1);
    if stop < start { -step1 } else { step1 }
}

/// Extend `[start, stop]` outward to multiples of the tick step.
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let (mut lo, mut hi) = if stop < start { (stop, start) } else { (start, stop) };
    let mut step = tick_increment(lo, hi, count);
    // Two passes: the first rounding can change the step.
    for _ in 0..2 {
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        step = tick_increment(lo, hi, count);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return if stop < start { (stop, start) } else { (start, stop) };
    }
    if stop < start { (hi, lo) } else { (lo, hi) }
}

/// Round tick values inside `[start, stop]`, ascending for ascending input.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop && count > 0 {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }
    let mut out = Vec::new();
    if step > 0.0 {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = (last - first + 1.0).ceil().max(0.0) as usize;
        out.extend((0..n).map(|i| (first + i as f64) * step));
    } else {
        let first = (lo * step).floor();
        let last = (hi * step).ceil();
        let n = (first - last + 1.0).ceil().max(0.0) as usize;
        out.extend((0..n).map(|i| (first - i as f64) / step));
    }
    if reverse {
        out.reverse();
    }
    out
}

/// Decimal places needed to tell ticks `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Whole-year ticks between two years; the stride follows the same 1-2-5
/// stepping and ticks sit on multiples of it.
pub fn year_ticks(first_year: i32, last_year: i32, count: usize) -> Vec<i32> {
    let (lo, hi) = if last_year < first_year { (last_year, first_year) } else { (first_year, last_year) };
    let stride = tick_step(lo as f64, hi as f64, count).abs().max(1.0).round() as i32;
    (lo..=hi).filter(|y| y.rem_euclid(stride) == 0).collect()
}
