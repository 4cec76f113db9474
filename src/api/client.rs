use super::types::{CreateProjectRequest, LoginResponse, RawProject};

/// Errors from the backend API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// The HTTP request itself failed (network, DNS, TLS).
  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),

  /// The backend returned a non-2xx status code.
  #[error("backend error ({status}): {body}")]
  Api {
    status: u16,
    body: String,
  },
}

impl ApiError {
  /// Message shown to the user: the server payload verbatim when there
  /// is one, the given fallback otherwise. The payload may be plain
  /// text, a JSON string, or an object carrying a `message` field.
  pub fn user_message(&self, fallback: &str) -> String {
    match self {
      ApiError::Api { body, .. } if !body.trim().is_empty() => extract_message(body),
      _ => fallback.to_string(),
    }
  }
}

fn extract_message(body: &str) -> String {
  match serde_json::from_str::<serde_json::Value>(body) {
    Ok(serde_json::Value::String(message)) => message,
    Ok(serde_json::Value::Object(fields)) => match fields.get("message").and_then(|m| m.as_str()) {
      Some(message) => message.to_string(),
      None => body.to_string(),
    },
    _ => body.to_string(),
  }
}

/// Seam between the feed controller and the marketplace backend.
pub trait Client {
  fn public_projects(&self) -> Result<Vec<RawProject>, ApiError>;
  fn my_projects(&self, token: &str) -> Result<Vec<RawProject>, ApiError>;
  fn enrollments(&self, token: &str) -> Result<Vec<RawProject>, ApiError>;

  fn create_project(
    &self,
    token: &str,
    request: &CreateProjectRequest,
  ) -> Result<RawProject, ApiError>;
  fn close_project(&self, token: &str, project_id: i64) -> Result<(), ApiError>;
  fn enroll(&self, token: &str, project_id: i64) -> Result<(), ApiError>;
  fn cancel_enrollment(&self, token: &str, project_id: i64) -> Result<(), ApiError>;

  fn login(&self, email: &str, senha: &str) -> Result<LoginResponse, ApiError>;
  fn reset_password(&self, email: &str, nova_senha: &str) -> Result<String, ApiError>;
}

#[cfg(test)]
mod tests {
  use super::ApiError;

  fn api_error(body: &str) -> ApiError {
    ApiError::Api {
      status: 400,
      body: body.to_string(),
    }
  }

  #[test]
  fn test_plain_text_payload_is_shown_verbatim() {
    let message = api_error("Você já está inscrito").user_message("fallback");
    assert_eq!(message, "Você já está inscrito");
  }

  #[test]
  fn test_json_string_payload_is_unwrapped() {
    let message = api_error("\"Projeto encerrado\"").user_message("fallback");
    assert_eq!(message, "Projeto encerrado");
  }

  #[test]
  fn test_message_field_is_extracted() {
    let message = api_error("{\"message\": \"Sem permissão\"}").user_message("fallback");
    assert_eq!(message, "Sem permissão");
  }

  #[test]
  fn test_empty_payload_uses_fallback() {
    let message = api_error("  ").user_message("fallback");
    assert_eq!(message, "fallback");
  }
}
