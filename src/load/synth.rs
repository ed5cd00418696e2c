use super::LoadProfileParameters;
use crate::calendar::{HOURS_PER_YEAR, YearClock};

/// Expands `params` into one value per hour of the year (kW).
///
/// The day of week comes from [`CalendarHour::day_of_week`], a repeating
/// 7-day cycle that starts at index 0 on hour 0 rather than a real calendar.
/// Pure: call it again after editing the parameters.
///
/// [`CalendarHour::day_of_week`]: crate::calendar::CalendarHour::day_of_week
pub fn synthesize_annual_load(params: &LoadProfileParameters) -> Vec<f64> {
    let mut series = vec![0.0; HOURS_PER_YEAR];

    YearClock::new().run(|h| {
        if h.hour_index >= HOURS_PER_YEAR {
            return;
        }
        let shape = if h.is_weekend() {
            &params.weekend_shape
        } else {
            &params.weekday_shape
        };
        let kw = params.peak_power_kw
            * shape[h.hour_of_day]
            * params.weekly_factor[h.day_of_week()]
            * params.monthly_factor[h.month_index];
        series[h.hour_index] = kw.max(0.0);
    });

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::StandardProfile;

    fn flat(peak: f64) -> LoadProfileParameters {
        LoadProfileParameters {
            peak_power_kw: peak,
            weekday_shape: [1.0; 24],
            weekend_shape: [1.0; 24],
            weekly_factor: [1.0; 7],
            monthly_factor: [1.0; 12],
        }
    }

    #[test]
    fn always_one_year_long() {
        assert_eq!(synthesize_annual_load(&flat(10.0)).len(), HOURS_PER_YEAR);
        let office = LoadProfileParameters::from_standard(80.0, StandardProfile::Office);
        assert_eq!(synthesize_annual_load(&office).len(), HOURS_PER_YEAR);
    }

    #[test]
    fn flat_profile_is_constant_peak() {
        let series = synthesize_annual_load(&flat(42.0));
        assert!(series.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn maximum_equals_product_of_maxima_when_they_coincide() {
        let mut p = flat(200.0);
        p.weekday_shape = [0.5; 24];
        p.weekday_shape[14] = 0.9;
        p.weekend_shape = [0.2; 24];
        p.weekly_factor = [0.8, 1.0, 0.8, 0.8, 0.8, 0.5, 0.5];
        p.monthly_factor = [0.6, 0.6, 0.6, 0.6, 0.6, 0.6, 1.2, 0.6, 0.6, 0.6, 0.6, 0.6];
        // Day index 1 of the cycle is a weekday and occurs in July.
        let series = synthesize_annual_load(&p);
        let max = series.iter().cloned().fold(0.0_f64, f64::max);
        assert_eq!(max, 200.0 * 0.9 * 1.0 * 1.2);
    }

    #[test]
    fn weekend_days_use_weekend_shape() {
        let mut p = flat(10.0);
        p.weekend_shape = [0.0; 24];
        let series = synthesize_annual_load(&p);
        // Days 5 and 6 of the year are the first weekend.
        assert!(series[5 * 24..7 * 24].iter().all(|&v| v == 0.0));
        assert!(series[7 * 24..12 * 24].iter().all(|&v| v == 10.0));
    }

    #[test]
    fn negative_products_clamp_to_zero() {
        let mut p = flat(10.0);
        p.monthly_factor[0] = -1.0;
        let series = synthesize_annual_load(&p);
        assert!(series[..744].iter().all(|&v| v == 0.0));
    }
}
