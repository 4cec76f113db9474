use std::cell::RefCell;
use std::rc::Rc;

use crate::time::RawDate;

use super::client::{ApiError, Client};
use super::types::{CreateProjectRequest, LoginResponse, RawProject};

/// Canned-response client for controller and session tests. Calls and
/// the injected failure live behind `Rc` handles so tests keep access
/// after the client moves into the feed.
#[derive(Default)]
pub struct FakeClient {
  pub public: Vec<RawProject>,
  pub mine: Vec<RawProject>,
  pub enrolled: Vec<RawProject>,
  pub created: Option<RawProject>,
  pub login_response: Option<LoginResponse>,
  pub reset_message: String,
  pub fail_with: Rc<RefCell<Option<(u16, String)>>>,
  pub calls: Rc<RefCell<Vec<String>>>,
}

impl FakeClient {
  pub fn failing(status: u16, body: &str) -> Self {
    let client = Self::default();
    *client.fail_with.borrow_mut() = Some((status, body.to_string()));
    return client;
  }

  pub fn calls(&self) -> Vec<String> {
    self.calls.borrow().clone()
  }

  fn record(&self, call: &str) -> Result<(), ApiError> {
    self.calls.borrow_mut().push(call.to_string());
    match self.fail_with.borrow().as_ref() {
      Some((status, body)) => Err(ApiError::Api {
        status: *status,
        body: body.clone(),
      }),
      None => Ok(()),
    }
  }
}

impl Client for FakeClient {
  fn public_projects(&self) -> Result<Vec<RawProject>, ApiError> {
    self.record("public")?;
    Ok(self.public.clone())
  }

  fn my_projects(&self, _token: &str) -> Result<Vec<RawProject>, ApiError> {
    self.record("meus")?;
    Ok(self.mine.clone())
  }

  fn enrollments(&self, _token: &str) -> Result<Vec<RawProject>, ApiError> {
    self.record("inscricoes")?;
    Ok(self.enrolled.clone())
  }

  fn create_project(
    &self,
    _token: &str,
    request: &CreateProjectRequest,
  ) -> Result<RawProject, ApiError> {
    self.record("criar")?;
    match &self.created {
      Some(raw) => Ok(raw.clone()),
      None => Ok(RawProject {
        id: 99,
        nome: request.nome.clone(),
        descricao: request.descricao.clone(),
        tags: Some(request.tags.clone()),
        regime: Some(request.regime.clone()),
        data_inicio: Some(RawDate::Text(request.data_inicio.clone())),
        data_fim: Some(RawDate::Text(request.data_fim.clone())),
        ..RawProject::default()
      }),
    }
  }

  fn close_project(&self, _token: &str, project_id: i64) -> Result<(), ApiError> {
    self.record(&format!("encerrar:{}", project_id))
  }

  fn enroll(&self, _token: &str, project_id: i64) -> Result<(), ApiError> {
    self.record(&format!("inscrever:{}", project_id))
  }

  fn cancel_enrollment(&self, _token: &str, project_id: i64) -> Result<(), ApiError> {
    self.record(&format!("cancelar:{}", project_id))
  }

  fn login(&self, _email: &str, _senha: &str) -> Result<LoginResponse, ApiError> {
    self.record("login")?;
    match &self.login_response {
      Some(response) => Ok(response.clone()),
      None => Err(ApiError::Api {
        status: 401,
        body: "Credenciais inválidas".to_string(),
      }),
    }
  }

  fn reset_password(&self, _email: &str, _nova_senha: &str) -> Result<String, ApiError> {
    self.record("resetar-senha")?;
    Ok(self.reset_message.clone())
  }
}
