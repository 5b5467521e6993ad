use chrono::Duration;

pub struct HourFormat {}

impl HourFormat {
    pub fn new() -> Self {
        HourFormat {}
    }

    /// `HH:MM`, part minutes dropped.
    pub fn format(&self, time: &Duration) -> String {
        let (hours, min) = Self::split(time);
        format!("{:02}:{:02}", hours, min)
    }

    /// `Xh Ym`, part minutes dropped.
    pub fn format_long(&self, time: &Duration) -> String {
        let (hours, min) = Self::split(time);
        format!("{}h {}m", hours, min)
    }

    fn split(time: &Duration) -> (i64, i64) {
        let total = time.num_seconds().div_euclid(60);
        (total.div_euclid(60), total.rem_euclid(60))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::HourFormat;

    #[test]
    fn test_fmt_time_as_hours() {
        let format = HourFormat::new();
        assert_eq!(format.format(&Duration::minutes(330)), "05:30");
        assert_eq!(format.format(&Duration::seconds(2 * 3600 + 9 * 60)), "02:09");
        assert_eq!(format.format(&Duration::seconds(15 * 3600 + 55 * 60 + 19)), "15:55");
        assert_eq!(format.format(&Duration::seconds(15 * 3600 + 59 * 60 + 40)), "15:59");
        assert_eq!(format.format(&Duration::hours(1)), "01:00");
        assert_eq!(format.format(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_fmt_time_long() {
        let format = HourFormat::new();
        assert_eq!(format.format_long(&Duration::minutes(350)), "5h 50m");
        assert_eq!(format.format_long(&Duration::zero()), "0h 0m");
        assert_eq!(format.format_long(&Duration::seconds(59 * 60 + 31)), "0h 59m");
        assert_eq!(format.format_long(&Duration::seconds(9 * 3600 + 11 * 60 + 59)), "9h 11m");
    }
}
