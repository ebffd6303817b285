pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn constrain(v: f64, lo: f64, hi: f64) -> f64 {
    if lo <= hi { v.clamp(lo, hi) } else { v.clamp(hi, lo) }
}

/// Linear remap of `v` from `[in_lo, in_hi]` to `[out_lo, out_hi]` (unclamped).
pub fn map_range(v: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let span = in_hi - in_lo;
    if span == 0.0 {
        return out_lo;
    }
    out_lo + (v - in_lo) / span * (out_hi - out_lo)
}

/// Clamp into `[min, max]` and align to the step grid anchored at `min`.
pub fn snap_to_step(v: f64, min: f64, max: f64, step: f64) -> f64 {
    let v = constrain(v, min, max);
    if !step.is_finite() || step <= 0.0 {
        return v;
    }
    let snapped = min + ((v - min) / step).round() * step;
    constrain(snapped, min, max)
}

const B64_DIGITS: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";

/// URL-safe, most-significant-digit-first base-64 rendering of an integer.
pub fn to_b64(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(B64_DIGITS[(n % 64) as usize]);
        n /= 64;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

pub fn from_b64(s: &str) -> Option<u64> {
    s.bytes().try_fold(0u64, |acc, c| {
        let digit = B64_DIGITS.iter().position(|&d| d == c)? as u64;
        acc.checked_mul(64)?.checked_add(digit)
    })
}

/// Millisecond wall-clock timestamp in [`to_b64`] form, used to tag output files.
pub fn timestamp_b64() -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    to_b64(millis)
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
