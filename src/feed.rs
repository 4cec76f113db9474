use log::debug;

use crate::api::{ApiError, Client, CreateProjectRequest};
use crate::filter::Filter;
use crate::project::Project;
use crate::regime::Regime;
use crate::role::Role;
use crate::session::Session;

const CREATE_VALIDATION_MSG: &str =
  "Preencha todos os campos obrigatórios (Nome, Descrição, Datas e Tags).";
const CREATE_FALLBACK_MSG: &str = "Erro ao criar projeto. Verifique se está logado como empresa.";
const CLOSE_FALLBACK_MSG: &str = "Você não tem permissão para encerrar este projeto.";
const ENROLL_FALLBACK_MSG: &str = "Erro ao se inscrever. Tente novamente.";
const CANCEL_FALLBACK_MSG: &str = "Erro ao cancelar inscrição. Tente novamente.";
const ENROLL_LOGIN_MSG: &str = "Você precisa estar logado para se inscrever!";
const SESSION_REQUIRED_MSG: &str = "Você precisa estar logado.";
const ALREADY_ENROLLED_MSG: &str = "Você já está inscrito neste projeto.";

/// Which collection a student browses: the public listing or their own
/// enrollments. Companies always see their own projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  All,
  Enrolled,
}

/// Input for project creation, validated before any request is sent.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
  pub name: String,
  pub description: String,
  pub tags: Vec<String>,
  pub regime: Regime,
  pub start_date: Option<chrono::NaiveDate>,
  pub end_date: Option<chrono::NaiveDate>,
}

/// The project feed: fetches the role-dependent collection, keeps the
/// enrolled-id set, and applies the optimistic mutations. Collection and
/// set are rebuilt from scratch on every reload, never merged.
pub struct Feed {
  client: Box<dyn Client>,
  session: Session,
  mode: Mode,
  projects: Vec<Project>,
  enrolled_ids: Vec<i64>,
}

impl Feed {
  pub fn new(client: Box<dyn Client>, session: Session, mode: Mode) -> Self {
    Self {
      client,
      session,
      mode,
      projects: Vec::new(),
      enrolled_ids: Vec::new(),
    }
  }

  pub fn session(&self) -> &Session {
    &self.session
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub fn projects(&self) -> &Vec<Project> {
    &self.projects
  }

  pub fn is_enrolled(&self, project_id: i64) -> bool {
    self.enrolled_ids.contains(&project_id)
  }

  /// Rebuilds the collection and the enrolled-id set from the backend.
  /// Fetch failures degrade to an empty collection.
  pub fn reload(&mut self) {
    match self.fetch_projects() {
      Ok(projects) => self.projects = projects,
      Err(err) => {
        debug!("fetch projects err: {}", err);
        self.projects.clear();
      }
    }
    self.refresh_enrolled_ids();
  }

  fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
    let token = self.session.token();
    let (raw, enrolled_view) = match (self.session.role(), token) {
      (Role::Company, Some(token)) => (self.client.my_projects(token)?, false),
      (Role::Student, Some(token)) if self.mode == Mode::Enrolled => {
        (self.client.enrollments(token)?, true)
      }
      _ => (self.client.public_projects()?, false),
    };

    return Ok(
      raw
        .into_iter()
        .map(|raw| Project::from_raw(raw, enrolled_view))
        .collect(),
    );
  }

  /// Membership is fetched independently of the current mode so the
  /// all-projects view can mark already-enrolled items.
  fn refresh_enrolled_ids(&mut self) {
    self.enrolled_ids.clear();
    if self.session.role() != Role::Student {
      return;
    }
    let token = match self.session.token() {
      Some(token) => token,
      None => return,
    };

    match self.client.enrollments(token) {
      Ok(enrolled) => self.enrolled_ids = enrolled.iter().map(|raw| raw.id).collect(),
      Err(err) => debug!("fetch enrollments err: {}", err),
    };
  }

  /// Collection as displayed: newest first, items without a parseable
  /// creation date last in fetch order, then the combined filters.
  pub fn visible(&self, filter: &Filter) -> Vec<Project> {
    let mut ordered = self.projects.clone();
    ordered.sort_by(|a, b| match (a.created_at(), b.created_at()) {
      (Some(first), Some(second)) => second.cmp(&first),
      (Some(_), None) => std::cmp::Ordering::Less,
      (None, Some(_)) => std::cmp::Ordering::Greater,
      (None, None) => std::cmp::Ordering::Equal,
    });

    return ordered
      .into_iter()
      .filter(|project| filter.matches(project))
      .collect();
  }

  /// Submits the draft and prepends the backend's echo to the in-memory
  /// collection, no re-fetch.
  pub fn create(&mut self, draft: ProjectDraft) -> Result<Project, String> {
    if draft.name.trim().is_empty()
      || draft.description.trim().is_empty()
      || draft.start_date.is_none()
      || draft.end_date.is_none()
      || draft.tags.is_empty()
    {
      return Err(CREATE_VALIDATION_MSG.to_string());
    }

    let request = CreateProjectRequest {
      nome: draft.name.clone(),
      descricao: draft.description.clone(),
      tags: draft.tags.join(","),
      regime: draft.regime.as_str().to_string(),
      data_inicio: draft.start_date.unwrap().format("%Y-%m-%d").to_string(),
      data_fim: draft.end_date.unwrap().format("%Y-%m-%d").to_string(),
    };

    let token = match self.session.token() {
      Some(token) => token,
      None => return Err(SESSION_REQUIRED_MSG.to_string()),
    };
    let raw = self
      .client
      .create_project(token, &request)
      .map_err(|err| err.user_message(CREATE_FALLBACK_MSG))?;

    let project = Project::from_raw(raw, false);
    self.projects.insert(0, project.clone());
    return Ok(project);
  }

  pub fn close(&mut self, project_id: i64) -> Result<(), String> {
    let token = match self.session.token() {
      Some(token) => token,
      None => return Err(SESSION_REQUIRED_MSG.to_string()),
    };
    self
      .client
      .close_project(token, project_id)
      .map_err(|err| err.user_message(CLOSE_FALLBACK_MSG))?;

    if let Some(project) = self.projects.iter_mut().find(|p| p.id() == project_id) {
      project.mark_closed();
    }
    return Ok(());
  }

  /// Refuses locally when the membership set already holds the id, so a
  /// successful enrollment adds it exactly once.
  pub fn enroll(&mut self, project_id: i64) -> Result<(), String> {
    if self.session.token().is_none() {
      return Err(ENROLL_LOGIN_MSG.to_string());
    }
    if self.is_enrolled(project_id) {
      return Err(ALREADY_ENROLLED_MSG.to_string());
    }

    let token = self.session.token().unwrap();
    self
      .client
      .enroll(token, project_id)
      .map_err(|err| err.user_message(ENROLL_FALLBACK_MSG))?;

    self.enrolled_ids.push(project_id);
    return Ok(());
  }

  /// Drops the item from the displayed collection only in enrolled mode;
  /// the id leaves the membership set unconditionally. An id that was
  /// never in the set is a no-op there, the request is still sent.
  pub fn cancel_enrollment(&mut self, project_id: i64) -> Result<(), String> {
    let token = match self.session.token() {
      Some(token) => token,
      None => return Err(SESSION_REQUIRED_MSG.to_string()),
    };
    self
      .client
      .cancel_enrollment(token, project_id)
      .map_err(|err| err.user_message(CANCEL_FALLBACK_MSG))?;

    if self.mode == Mode::Enrolled {
      self.projects.retain(|project| project.id() != project_id);
    }
    self.enrolled_ids.retain(|id| *id != project_id);
    return Ok(());
  }
}
