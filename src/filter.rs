use crate::project::Project;
use crate::regime::Regime;

/// Values behind the search controls. `None` regime/tag stands for the
/// TODOS/TODAS option: that predicate is skipped.
#[derive(Debug, Clone, Default)]
pub struct Filter {
  pub text: String,
  pub regime: Option<Regime>,
  pub tag: Option<String>,
}

impl Filter {
  /// All three predicates must hold: case-insensitive substring on the
  /// name or any tag, regime equality, exact tag membership.
  pub fn matches(&self, project: &Project) -> bool {
    let needle = self.text.to_lowercase();
    let matches_text = project.name().to_lowercase().contains(&needle)
      || project
        .tags()
        .iter()
        .any(|tag| tag.to_lowercase().contains(&needle));

    let matches_regime = match self.regime {
      Some(regime) => project.regime() == regime,
      None => true,
    };

    let matches_tag = match &self.tag {
      Some(tag) => project.tags().iter().any(|candidate| candidate == tag),
      None => true,
    };

    return matches_text && matches_regime && matches_tag;
  }
}

#[cfg(test)]
mod tests {
  use super::Filter;
  use crate::api::RawProject;
  use crate::project::Project;
  use crate::regime::Regime;

  fn project(name: &str, tags: &str, regime: &str) -> Project {
    Project::from_raw(
      RawProject {
        nome: name.to_string(),
        tags: Some(tags.to_string()),
        regime: Some(regime.to_string()),
        ..RawProject::default()
      },
      false,
    )
  }

  #[test]
  fn test_text_matches_name_or_tag() {
    let filter = Filter {
      text: "react".to_string(),
      ..Filter::default()
    };

    assert!(filter.matches(&project("X", "React", "PJ")));
    assert!(!filter.matches(&project("Y", "Vue.js", "PJ")));
    assert!(filter.matches(&project("reactive store", "SQL", "PJ")));
  }

  #[test]
  fn test_empty_filter_matches_everything() {
    assert!(Filter::default().matches(&project("X", "", "")));
  }

  #[test]
  fn test_regime_equality() {
    let filter = Filter {
      regime: Some(Regime::Clt),
      ..Filter::default()
    };

    assert!(filter.matches(&project("X", "React", "clt")));
    assert!(!filter.matches(&project("Y", "React", "PJ")));
  }

  #[test]
  fn test_tag_membership_is_exact() {
    let filter = Filter {
      tag: Some("Java".to_string()),
      ..Filter::default()
    };

    assert!(filter.matches(&project("X", "Java, SQL", "PJ")));
    assert!(!filter.matches(&project("Y", "JavaScript", "PJ")));
  }

  #[test]
  fn test_predicates_combine_with_and() {
    let filter = Filter {
      text: "x".to_string(),
      regime: Some(Regime::Pj),
      tag: Some("React".to_string()),
    };

    assert!(filter.matches(&project("X", "React", "PJ")));
    assert!(!filter.matches(&project("X", "React", "CLT")));
  }
}
