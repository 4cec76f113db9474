use crate::time::RawDate;

/// Nested company object some listings carry instead of a flat name.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawCompany {
  #[serde(default)]
  pub nome: Option<String>,
}

/// Project exactly as the backend sends it. Every field except the id is
/// optional or defaulted: the three listings disagree on which fields
/// they carry, normalization happens in `Project::from_raw`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct RawProject {
  #[serde(default)]
  pub id: i64,
  #[serde(default)]
  pub nome: String,
  #[serde(default)]
  pub descricao: String,
  #[serde(default, rename = "dataCriacao")]
  pub data_criacao: Option<RawDate>,
  #[serde(default, rename = "empresaNome")]
  pub empresa_nome: Option<String>,
  #[serde(default)]
  pub empresa: Option<RawCompany>,
  #[serde(default)]
  pub encerrado: Option<bool>,
  #[serde(default, rename = "isEncerrado")]
  pub is_encerrado: Option<bool>,
  #[serde(default)]
  pub tags: Option<String>,
  #[serde(default)]
  pub regime: Option<String>,
  #[serde(default, rename = "dataInicio")]
  pub data_inicio: Option<RawDate>,
  #[serde(default, rename = "dataFim")]
  pub data_fim: Option<RawDate>,
  #[serde(default)]
  pub status: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct CreateProjectRequest {
  pub nome: String,
  pub descricao: String,
  pub tags: String,
  pub regime: String,
  #[serde(rename = "dataInicio")]
  pub data_inicio: String,
  #[serde(rename = "dataFim")]
  pub data_fim: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginRequest {
  pub email: String,
  pub senha: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginResponse {
  pub token: String,
  pub email: String,
  pub role: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ResetPasswordRequest {
  pub email: String,
  #[serde(rename = "novaSenha")]
  pub nova_senha: String,
}
