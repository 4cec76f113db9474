use crate::api::RawProject;
use crate::regime::Regime;
use crate::tags::parse_tags;
use crate::time::parse_date;

pub const COMPANY_NOT_INFORMED: &str = "Não informado";

/// Status of a student's enrollment. Anything the backend sends besides
/// the pending marker is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentStatus {
  Pending,
  Other(String),
}

impl EnrollmentStatus {
  pub fn parse(raw: &str) -> Self {
    match raw.eq_ignore_ascii_case("pendente") {
      true => EnrollmentStatus::Pending,
      false => EnrollmentStatus::Other(raw.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      EnrollmentStatus::Pending => "PENDENTE",
      EnrollmentStatus::Other(status) => status.as_str(),
    }
  }
}

/// Client-side view of a project, normalized from the raw server shape.
#[derive(Debug, Clone)]
pub struct Project {
  id: i64,
  name: String,
  description: String,
  created_at: Option<chrono::NaiveDate>,
  company_name: String,
  closed: bool,
  tags: Vec<String>,
  regime: Regime,
  start_date: Option<chrono::NaiveDate>,
  end_date: Option<chrono::NaiveDate>,
  enrollment_status: Option<EnrollmentStatus>,
}

impl Project {
  /// `enrolled_view` tells whether the item came from the enrollments
  /// listing, the only source that carries a per-item status.
  pub fn from_raw(raw: RawProject, enrolled_view: bool) -> Self {
    let company_name = raw
      .empresa_nome
      .filter(|name| !name.is_empty())
      .or_else(|| {
        raw
          .empresa
          .and_then(|company| company.nome)
          .filter(|name| !name.is_empty())
      })
      .unwrap_or_else(|| COMPANY_NOT_INFORMED.to_string());

    let enrollment_status = match enrolled_view {
      true => raw
        .status
        .map(|status| EnrollmentStatus::parse(status.as_str())),
      false => None,
    };

    Self {
      id: raw.id,
      name: raw.nome,
      description: raw.descricao,
      created_at: parse_date(raw.data_criacao.as_ref()),
      company_name,
      closed: raw.encerrado.unwrap_or(false) || raw.is_encerrado.unwrap_or(false),
      tags: parse_tags(raw.tags.as_deref()),
      regime: Regime::parse(raw.regime.as_deref()),
      start_date: parse_date(raw.data_inicio.as_ref()),
      end_date: parse_date(raw.data_fim.as_ref()),
      enrollment_status,
    }
  }

  pub fn id(&self) -> i64 {
    self.id
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }

  pub fn description(&self) -> &str {
    self.description.as_str()
  }

  pub fn created_at(&self) -> Option<chrono::NaiveDate> {
    self.created_at
  }

  pub fn company_name(&self) -> &str {
    self.company_name.as_str()
  }

  pub fn closed(&self) -> bool {
    self.closed
  }

  pub fn mark_closed(&mut self) {
    self.closed = true;
  }

  pub fn tags(&self) -> &Vec<String> {
    &self.tags
  }

  pub fn regime(&self) -> Regime {
    self.regime
  }

  pub fn start_date(&self) -> Option<chrono::NaiveDate> {
    self.start_date
  }

  pub fn end_date(&self) -> Option<chrono::NaiveDate> {
    self.end_date
  }

  pub fn enrollment_status(&self) -> Option<&EnrollmentStatus> {
    self.enrollment_status.as_ref()
  }
}
