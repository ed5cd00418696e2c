/// Wet-bulb temperature (°C) from dry-bulb (°C) and relative humidity (%).
///
/// Stull's empirical fit. `relative_humidity_pct` is a percentage, not a
/// fraction. Inputs are not validated or clamped: RH outside 0..=100 gives a
/// number with no physical meaning, so callers clamp first.
pub fn wet_bulb(dry_bulb_c: f64, relative_humidity_pct: f64) -> f64 {
    let t = dry_bulb_c;
    let rh = relative_humidity_pct;
    t * (0.151977 * (rh + 8.313659).sqrt()).atan() + (t + rh).atan() - (rh - 1.676331).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035
}
