/// Client configuration: where the session keys live and which backend
/// to talk to. Created with defaults on first run.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub storage_dir_path: String,
  pub base_url: String,
}

impl Config {
  pub fn new() -> Self {
    const DEFAULT_STORAGE_DIR: &str = ".projetos";
    const DEFAULT_CONFIG_NAME: &str = ".projetos.json";
    const DEFAULT_BASE_URL: &str = "http://localhost:8081/api";

    let home_env = std::env::var("HOME").unwrap();
    let home = std::path::Path::new(home_env.as_str());

    let config_file_path = match std::env::var("PROJETOS_CONFIG") {
      Ok(file_path) => std::path::Path::new(&file_path).to_path_buf(),
      Err(_) => home.join(DEFAULT_CONFIG_NAME),
    };

    let get_config_file = || {
      std::fs::File::options()
        .create(true)
        .write(true)
        .read(true)
        .open(config_file_path.clone())
        .unwrap()
    };

    if !config_file_path.exists() {
      let config = Self {
        storage_dir_path: home.join(DEFAULT_STORAGE_DIR).to_str().unwrap().to_owned(),
        base_url: DEFAULT_BASE_URL.to_owned(),
      };

      serde_json::to_writer_pretty(get_config_file(), &config).unwrap();
      return config;
    }

    return serde_json::from_reader(get_config_file()).unwrap();
  }
}
