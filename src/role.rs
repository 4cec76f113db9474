/// Account kind, derived once from the stored identity. Decision points
/// match on this enum instead of comparing backend role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Guest,
  Student,
  Company,
}

impl Default for Role {
  fn default() -> Self {
    Role::Guest
  }
}

impl Role {
  pub fn parse(raw: Option<&str>) -> Self {
    match raw {
      Some("ROLE_ALUNO") => Role::Student,
      Some("ROLE_EMPRESA") => Role::Company,
      _ => Role::Guest,
    }
  }

  pub fn describe(&self) -> &'static str {
    match self {
      Role::Guest => "visitante",
      Role::Student => "aluno",
      Role::Company => "empresa",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Role;

  #[test]
  fn test_parse_backend_role_strings() {
    assert_eq!(Role::parse(Some("ROLE_ALUNO")), Role::Student);
    assert_eq!(Role::parse(Some("ROLE_EMPRESA")), Role::Company);
    assert_eq!(Role::parse(Some("ROLE_ADMIN")), Role::Guest);
    assert_eq!(Role::parse(None), Role::Guest);
  }
}
