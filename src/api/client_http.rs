use log::debug;

use super::client::{ApiError, Client};
use super::types::{
  CreateProjectRequest, LoginRequest, LoginResponse, RawProject, ResetPasswordRequest,
};

/// reqwest-backed implementation of the backend seam. Authenticated
/// calls attach the session token as a bearer credential.
pub struct HttpClient {
  client: reqwest::blocking::Client,
  base_url: String,
}

impl HttpClient {
  pub fn new(base_url: &str) -> Self {
    Self {
      client: reqwest::blocking::Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
    }
  }

  fn projects_url(&self, suffix: &str) -> String {
    format!("{}/projetos{}", self.base_url, suffix)
  }

  fn get_projects(&self, url: String, token: Option<&str>) -> Result<Vec<RawProject>, ApiError> {
    debug!("GET {}", url);
    let mut request = self.client.get(url);
    if let Some(token) = token {
      request = request.bearer_auth(token);
    }

    let response = ensure_success(request.send()?)?;
    return Ok(response.json::<Vec<RawProject>>()?);
  }

  fn post_empty(&self, url: String, token: &str) -> Result<(), ApiError> {
    debug!("POST {}", url);
    let response = self
      .client
      .post(url)
      .bearer_auth(token)
      .json(&serde_json::json!({}))
      .send()?;

    ensure_success(response)?;
    return Ok(());
  }
}

impl Client for HttpClient {
  fn public_projects(&self) -> Result<Vec<RawProject>, ApiError> {
    self.get_projects(self.projects_url("/public"), None)
  }

  fn my_projects(&self, token: &str) -> Result<Vec<RawProject>, ApiError> {
    self.get_projects(self.projects_url("/meus"), Some(token))
  }

  fn enrollments(&self, token: &str) -> Result<Vec<RawProject>, ApiError> {
    self.get_projects(self.projects_url("/inscricoes"), Some(token))
  }

  fn create_project(
    &self,
    token: &str,
    request: &CreateProjectRequest,
  ) -> Result<RawProject, ApiError> {
    let url = self.projects_url("/criar");
    debug!("POST {}", url);
    let response = self
      .client
      .post(url)
      .bearer_auth(token)
      .json(request)
      .send()?;

    let response = ensure_success(response)?;
    return Ok(response.json::<RawProject>()?);
  }

  fn close_project(&self, token: &str, project_id: i64) -> Result<(), ApiError> {
    self.post_empty(self.projects_url(&format!("/{}/encerrar", project_id)), token)
  }

  fn enroll(&self, token: &str, project_id: i64) -> Result<(), ApiError> {
    self.post_empty(self.projects_url(&format!("/{}/inscrever", project_id)), token)
  }

  fn cancel_enrollment(&self, token: &str, project_id: i64) -> Result<(), ApiError> {
    let url = self.projects_url(&format!("/{}/cancelar-inscricao", project_id));
    debug!("DELETE {}", url);
    let response = self.client.delete(url).bearer_auth(token).send()?;

    ensure_success(response)?;
    return Ok(());
  }

  fn login(&self, email: &str, senha: &str) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/auth/login", self.base_url);
    debug!("POST {}", url);
    let payload = LoginRequest {
      email: email.to_string(),
      senha: senha.to_string(),
    };

    let response = ensure_success(self.client.post(url).json(&payload).send()?)?;
    return Ok(response.json::<LoginResponse>()?);
  }

  fn reset_password(&self, email: &str, nova_senha: &str) -> Result<String, ApiError> {
    let url = format!("{}/auth/resetar-senha", self.base_url);
    debug!("POST {}", url);
    let payload = ResetPasswordRequest {
      email: email.to_string(),
      nova_senha: nova_senha.to_string(),
    };

    let response = ensure_success(self.client.post(url).json(&payload).send()?)?;
    return Ok(response.text()?);
  }
}

fn ensure_success(
  response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, ApiError> {
  let status = response.status();
  if !status.is_success() {
    let body = response.text().unwrap_or_default();
    return Err(ApiError::Api {
      status: status.as_u16(),
      body,
    });
  }
  return Ok(response);
}
