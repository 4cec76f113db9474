pub const NOT_INFORMED: &str = "N/I";

const DAYS_PER_MONTH: f64 = 30.44;

/// Display heuristic, not a calendar-accurate duration: whole days under
/// a month, otherwise months on a 30.44-day average.
pub fn format_duration(
  start: Option<chrono::NaiveDate>,
  end: Option<chrono::NaiveDate>,
) -> String {
  let (start, end) = match (start, end) {
    (Some(start), Some(end)) => (start, end),
    _ => return NOT_INFORMED.to_string(),
  };

  let days = end.signed_duration_since(start).num_days().abs();
  if days < 30 {
    return format!("{} dias", days);
  }

  let months = (days as f64 / DAYS_PER_MONTH).round() as i64;
  return format!("{} meses", months);
}
