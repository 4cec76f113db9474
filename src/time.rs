/// Date payload as the backend emits it: either an ISO-8601 text value
/// or a year/month/day integer array (month 1-based). Arrays may carry
/// trailing time components, only the first three elements are read.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RawDate {
  Text(String),
  Parts(Vec<i64>),
}

/// Normalizes both wire shapes into one date type. Anything that fails
/// to parse resolves to `None`, never to an invalid-date sentinel.
pub fn parse_date(raw: Option<&RawDate>) -> Option<chrono::NaiveDate> {
  match raw {
    Some(RawDate::Text(text)) => parse_text(text),
    Some(RawDate::Parts(parts)) => parse_parts(parts),
    None => None,
  }
}

fn parse_text(text: &str) -> Option<chrono::NaiveDate> {
  if let Ok(date) = chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d") {
    return Some(date);
  }
  if let Ok(datetime) = chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
    return Some(datetime.date());
  }
  if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(text) {
    return Some(datetime.date_naive());
  }
  return None;
}

fn parse_parts(parts: &[i64]) -> Option<chrono::NaiveDate> {
  if parts.len() < 3 {
    return None;
  }

  let year = i32::try_from(parts[0]).ok()?;
  let month = u32::try_from(parts[1]).ok()?;
  let day = u32::try_from(parts[2]).ok()?;
  return chrono::NaiveDate::from_ymd_opt(year, month, day);
}
