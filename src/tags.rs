/// Technology options offered on project creation and tag filtering.
pub const TAG_OPTIONS: [&str; 14] = [
  "JavaScript",
  "Python",
  "Java",
  "C#",
  "C++",
  "React",
  "Angular",
  "Vue.js",
  "Node.js",
  "Spring Boot",
  "SQL",
  "MongoDB",
  "AWS",
  "Docker",
];

/// The backend joins tags into one comma-separated string. Splitting
/// keeps insertion order and duplicates, drops empty fragments.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
  match raw {
    Some(raw) => raw
      .split(',')
      .map(|tag| tag.trim())
      .filter(|tag| !tag.is_empty())
      .map(|tag| tag.to_string())
      .collect(),
    None => Vec::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::parse_tags;

  #[test]
  fn test_parse_trims_fragments() {
    assert_eq!(parse_tags(Some("a, b ,c")), vec!["a", "b", "c"]);
  }

  #[test]
  fn test_empty_input_yields_empty_list() {
    assert!(parse_tags(Some("")).is_empty());
    assert!(parse_tags(Some(" , ,")).is_empty());
    assert!(parse_tags(None).is_empty());
  }

  #[test]
  fn test_order_and_duplicates_are_kept() {
    assert_eq!(parse_tags(Some("React,SQL,React")), vec!["React", "SQL", "React"]);
  }
}
