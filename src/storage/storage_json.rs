use std::io::{Seek, Write};

use log::debug;

use crate::session::User;

use super::storage::SessionStore;

/// One JSON file per session key, restored on open and rewritten in
/// place on every change.
pub struct JsonSessionStore {
  token: JsonItem<String>,
  user: JsonItem<User>,
}

impl JsonSessionStore {
  pub fn new(storage_folder: &str) -> Self {
    let storage_path = std::path::Path::new(storage_folder);

    let join_path = |filename: &str| storage_path.join(filename).to_str().unwrap().to_owned();

    Self {
      token: JsonItem::new(join_path("token.json").as_str()),
      user: JsonItem::new(join_path("user.json").as_str()),
    }
  }
}

impl SessionStore for JsonSessionStore {
  fn token(&self) -> Option<String> {
    self.token.get()
  }

  fn set_token(&mut self, token: &str) {
    self.token.set(token.to_string());
  }

  fn user(&self) -> Option<User> {
    self.user.get()
  }

  fn set_user(&mut self, user: &User) {
    self.user.set(user.clone());
  }

  fn clear(&mut self) {
    self.token.unset();
    self.user.unset();
  }
}

struct JsonItem<T> {
  filepath: String,
  file: std::fs::File,
  value: Option<T>,
}

impl<T> JsonItem<T>
where
  T: Clone + serde::de::DeserializeOwned + serde::ser::Serialize,
{
  fn new(filepath: &str) -> Self {
    let mut item = Self {
      filepath: filepath.to_owned(),
      file: std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .read(true)
        .open(filepath)
        .unwrap(),
      value: None,
    };

    item.restore();

    debug!(
      "restored session key ({}) from: {}",
      match item.value.is_some() {
        true => "set",
        false => "empty",
      },
      item.filepath
    );

    return item;
  }

  fn get(&self) -> Option<T> {
    self.value.clone()
  }

  fn set(&mut self, value: T) {
    self.value = Some(value);
    self.flush();
  }

  fn unset(&mut self) {
    self.value = None;
    self.flush();
  }

  fn restore(&mut self) {
    self.file.rewind().unwrap();
    self.value = serde_json::from_reader(&self.file).unwrap_or_default();
  }

  fn flush(&mut self) {
    self.file.set_len(0).unwrap();
    self.file.rewind().unwrap();
    self
      .file
      .write_all(
        serde_json::to_string_pretty(&self.value)
          .unwrap()
          .as_bytes(),
      )
      .expect("can't write session key");

    self.file.flush().expect("session store flush error");
  }
}
