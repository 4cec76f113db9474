use crate::session::User;

/// The two durable session keys the client keeps between runs.
pub trait SessionStore {
  fn token(&self) -> Option<String>;
  fn set_token(&mut self, token: &str);

  fn user(&self) -> Option<User>;
  fn set_user(&mut self, user: &User);

  fn clear(&mut self);
}
