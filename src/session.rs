use crate::api::Client;
use crate::role::Role;
use crate::storage::SessionStore;

const LOGIN_FALLBACK_MSG: &str = "Erro ao logar. Verifique suas credenciais.";
const RESET_FALLBACK_MSG: &str = "Erro ao redefinir senha.";
const RESET_DEFAULT_MSG: &str = "Senha redefinida com sucesso!";
const PASSWORDS_MISMATCH_MSG: &str = "As senhas não coincidem.";

/// Identity summary persisted between runs, exactly as the login
/// endpoint returns it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct User {
  pub email: String,
  pub role: String,
}

/// Session context handed to the feed controller at construction. The
/// role is parsed once here, nothing else compares role strings.
#[derive(Debug, Clone, Default)]
pub struct Session {
  token: Option<String>,
  email: Option<String>,
  role: Role,
}

impl Session {
  pub fn new(token: Option<String>, email: Option<String>, role: Role) -> Self {
    Self { token, email, role }
  }

  pub fn from_store(store: &dyn SessionStore) -> Self {
    let user = store.user();
    Self {
      token: store.token(),
      email: user.as_ref().map(|user| user.email.clone()),
      role: Role::parse(user.as_ref().map(|user| user.role.as_str())),
    }
  }

  pub fn token(&self) -> Option<&str> {
    self.token.as_deref()
  }

  pub fn email(&self) -> Option<&str> {
    self.email.as_deref()
  }

  pub fn role(&self) -> Role {
    self.role
  }
}

pub fn login(
  client: &dyn Client,
  store: &mut dyn SessionStore,
  email: &str,
  senha: &str,
) -> Result<Session, String> {
  let response = client
    .login(email, senha)
    .map_err(|err| err.user_message(LOGIN_FALLBACK_MSG))?;

  store.set_token(&response.token);
  store.set_user(&User {
    email: response.email,
    role: response.role,
  });

  return Ok(Session::from_store(store));
}

pub fn logout(store: &mut dyn SessionStore) {
  store.clear();
}

/// The mismatch check happens before any network call; a blank server
/// confirmation falls back to a canned success message.
pub fn reset_password(
  client: &dyn Client,
  email: &str,
  nova_senha: &str,
  confirmar_senha: &str,
) -> Result<String, String> {
  if nova_senha != confirmar_senha {
    return Err(PASSWORDS_MISMATCH_MSG.to_string());
  }

  let message = client
    .reset_password(email, nova_senha)
    .map_err(|err| err.user_message(RESET_FALLBACK_MSG))?;

  return match message.trim().is_empty() {
    true => Ok(RESET_DEFAULT_MSG.to_string()),
    false => Ok(message),
  };
}
