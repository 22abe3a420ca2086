// PM2.5 concentration to US EPA AQI conversion

pub const AQI_MAX: u32 = 500;

/// One segment of the EPA piecewise-linear mapping:
/// concentration `[c_lo, c_hi]` (µg/m³) maps onto index `[i_lo, i_hi]`.
#[derive(Debug, Clone, Copy)]
struct Breakpoint {
    c_lo: f64,
    c_hi: f64,
    i_lo: f64,
    i_hi: f64,
}

const fn bp(c_lo: f64, c_hi: f64, i_lo: f64, i_hi: f64) -> Breakpoint {
    Breakpoint { c_lo, c_hi, i_lo, i_hi }
}

const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    bp(0.0, 12.0, 0.0, 50.0),
    bp(12.1, 35.4, 51.0, 100.0),
    bp(35.5, 55.4, 101.0, 150.0),
    bp(55.5, 150.4, 151.0, 200.0),
    bp(150.5, 250.4, 201.0, 300.0),
    bp(250.5, 350.4, 301.0, 400.0),
    bp(350.5, 500.4, 401.0, 500.0),
];

/// Convert a PM2.5 concentration into a 0-500 AQI.
///
/// The concentration is rounded to one decimal before the segment lookup, so
/// every value lands in exactly one segment. Negative input counts as zero and
/// anything above the last breakpoint clamps to 500.
pub fn pm25_to_aqi(pm25: f64) -> u32 {
    if !pm25.is_finite() {
        return if pm25 > 0.0 { AQI_MAX } else { 0 };
    }

    let c = (pm25.max(0.0) * 10.0).round() / 10.0;

    let Some(segment) = PM25_BREAKPOINTS.iter().find(|b| c <= b.c_hi) else {
        return AQI_MAX;
    };

    let aqi = (segment.i_hi - segment.i_lo) / (segment.c_hi - segment.c_lo) * (c - segment.c_lo)
        + segment.i_lo;

    (aqi.round() as u32).min(AQI_MAX)
}
