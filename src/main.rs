extern crate chrono;
extern crate clap;

use std::io::Write;
use std::{cell::RefCell, rc::Rc};

use projetos::api::HttpClient;
use projetos::config::Config;
use projetos::filter::Filter;
use projetos::regime::Regime;
use projetos::session::{self, Session};
use projetos::storage::JsonSessionStore;
use projetos::tags;
use projetos::viewer::Viewer;
use projetos::{Feed, Mode, ProjectDraft};

fn main() {
  env_logger::init();

  let matches = build_cli().get_matches();

  let config = Config::new();
  std::fs::create_dir_all(&config.storage_dir_path).unwrap();

  let mut store = JsonSessionStore::new(&config.storage_dir_path);
  let session = Session::from_store(&store);
  let client = HttpClient::new(&config.base_url);

  match matches.subcommand_name() {
    Some("login") => {
      let command_matches = matches.subcommand_matches("login").unwrap();
      let email = command_matches.value_of("email").unwrap();
      let senha = command_matches.value_of("senha").unwrap();

      match session::login(&client, &mut store, email, senha) {
        Ok(session) => println!(
          "logado como {} ({})",
          session.email().unwrap_or_default(),
          session.role().describe()
        ),
        Err(err) => println!("{}", err),
      };
    }

    Some("logout") => {
      session::logout(&mut store);
      println!("sessão encerrada");
    }

    Some("whoami") => match session.email() {
      Some(email) => println!("{} ({})", email, session.role().describe()),
      None => println!("não logado"),
    },

    Some("reset-password") => {
      let command_matches = matches.subcommand_matches("reset-password").unwrap();
      let result = session::reset_password(
        &client,
        command_matches.value_of("email").unwrap(),
        command_matches.value_of("nova_senha").unwrap(),
        command_matches.value_of("confirmar_senha").unwrap(),
      );

      match result {
        Ok(message) => println!("{}", message),
        Err(err) => println!("{}", err),
      };
    }

    Some("list") => {
      let command_matches = matches.subcommand_matches("list").unwrap();
      let filter = match build_filter(command_matches) {
        Ok(filter) => filter,
        Err(err) => return println!("{}", err),
      };
      let mode = match command_matches.is_present("enrolled") {
        true => Mode::Enrolled,
        false => Mode::All,
      };

      let feed = Rc::new(RefCell::new(Feed::new(Box::new(client), session, mode)));
      feed.borrow_mut().reload();

      let viewer = Viewer::new(Rc::clone(&feed));
      viewer.print_feed(&filter, command_matches.is_present("full"));
    }

    Some("create") => {
      let command_matches = matches.subcommand_matches("create").unwrap();
      let draft = match build_draft(command_matches) {
        Ok(draft) => draft,
        Err(err) => return println!("{}", err),
      };

      let mut feed = Feed::new(Box::new(client), session, Mode::All);
      match feed.create(draft) {
        Ok(project) => println!("projeto criado: {} ({})", project.name(), project.id()),
        Err(err) => println!("{}", err),
      };
    }

    Some("close") => {
      let command_matches = matches.subcommand_matches("close").unwrap();
      let project_id = match parse_project_id(command_matches) {
        Ok(project_id) => project_id,
        Err(err) => return println!("{}", err),
      };
      if !command_matches.is_present("yes")
        && !confirm("Tem certeza que deseja encerrar este projeto?")
      {
        return;
      }

      let mut feed = Feed::new(Box::new(client), session, Mode::All);
      match feed.close(project_id) {
        Ok(_) => println!("projeto {} encerrado", project_id),
        Err(err) => println!("{}", err),
      };
    }

    Some("enroll") => {
      let command_matches = matches.subcommand_matches("enroll").unwrap();
      let project_id = match parse_project_id(command_matches) {
        Ok(project_id) => project_id,
        Err(err) => return println!("{}", err),
      };

      let mut feed = Feed::new(Box::new(client), session, Mode::All);
      feed.reload();
      match feed.enroll(project_id) {
        Ok(_) => println!("Inscrição no projeto {} realizada com sucesso!", project_id),
        Err(err) => println!("{}", err),
      };
    }

    Some("cancel") => {
      let command_matches = matches.subcommand_matches("cancel").unwrap();
      let project_id = match parse_project_id(command_matches) {
        Ok(project_id) => project_id,
        Err(err) => return println!("{}", err),
      };
      if !command_matches.is_present("yes")
        && !confirm("Tem certeza que deseja cancelar sua inscrição neste projeto?")
      {
        return;
      }

      let mut feed = Feed::new(Box::new(client), session, Mode::Enrolled);
      feed.reload();
      match feed.cancel_enrollment(project_id) {
        Ok(_) => println!("Inscrição no projeto {} cancelada com sucesso!", project_id),
        Err(err) => println!("{}", err),
      };
    }

    Some("tags") => {
      for tag in tags::TAG_OPTIONS.iter() {
        println!("{}", tag);
      }
    }

    Some("completions") => {
      let command_matches = matches.subcommand_matches("completions").unwrap();
      let shell = command_matches
        .value_of_t::<clap_complete::Shell>("shell")
        .unwrap();
      clap_complete::generate(shell, &mut build_cli(), "projetos", &mut std::io::stdout());
    }

    Some(subcmd) => println!("unknown subcommand {}", subcmd),
    None => println!("subcommand not found"),
  };
}

fn build_cli() -> clap::Command<'static> {
  clap::Command::new("projetos")
    .arg_required_else_help(true)
    .subcommand(clap::Command::new("login").args(&[
      clap::Arg::new("email").required(true).index(1),
      clap::Arg::new("senha").required(true).index(2),
    ]))
    .subcommand(clap::Command::new("logout"))
    .subcommand(clap::Command::new("whoami"))
    .subcommand(clap::Command::new("reset-password").args(&[
      clap::Arg::new("email").required(true).index(1),
      clap::Arg::new("nova_senha").required(true).index(2),
      clap::Arg::new("confirmar_senha").required(true).index(3),
    ]))
    .subcommand(clap::Command::new("list").args(&[
      clap::Arg::new("text").long("text").takes_value(true),
      clap::Arg::new("regime").long("regime").takes_value(true),
      clap::Arg::new("tag").long("tag").takes_value(true),
      clap::Arg::new("enrolled").long("enrolled"),
      clap::Arg::new("full").long("full"),
    ]))
    .subcommand(clap::Command::new("create").args(&[
      clap::Arg::new("name").long("name").takes_value(true).required(true),
      clap::Arg::new("description")
        .long("description")
        .takes_value(true)
        .required(true),
      clap::Arg::new("tags").long("tags").takes_value(true).required(true),
      clap::Arg::new("regime")
        .long("regime")
        .takes_value(true)
        .default_value("PJ"),
      clap::Arg::new("start").long("start").takes_value(true).required(true),
      clap::Arg::new("end").long("end").takes_value(true).required(true),
    ]))
    .subcommand(clap::Command::new("close").args(&[
      clap::Arg::new("project_id").required(true).index(1),
      clap::Arg::new("yes").long("yes"),
    ]))
    .subcommand(
      clap::Command::new("enroll").args(&[clap::Arg::new("project_id").required(true).index(1)]),
    )
    .subcommand(clap::Command::new("cancel").args(&[
      clap::Arg::new("project_id").required(true).index(1),
      clap::Arg::new("yes").long("yes"),
    ]))
    .subcommand(clap::Command::new("tags"))
    .subcommand(
      clap::Command::new("completions").args(&[clap::Arg::new("shell")
        .required(true)
        .index(1)
        .possible_values(["bash", "zsh", "fish"])]),
    )
}

fn build_filter(matches: &clap::ArgMatches) -> Result<Filter, String> {
  let regime = match matches.value_of("regime") {
    None => None,
    Some(raw) if raw.eq_ignore_ascii_case("todos") => None,
    Some(raw) => match Regime::parse_strict(raw) {
      Some(regime) => Some(regime),
      None => return Err(format!("regime inválido: {} (use PJ, CLT ou TODOS)", raw)),
    },
  };

  let tag = match matches.value_of("tag") {
    None => None,
    Some(raw) if raw.eq_ignore_ascii_case("todas") => None,
    Some(raw) => Some(raw.to_string()),
  };

  return Ok(Filter {
    text: matches.value_of("text").unwrap_or_default().to_string(),
    regime,
    tag,
  });
}

fn build_draft(matches: &clap::ArgMatches) -> Result<ProjectDraft, String> {
  let regime_arg = matches.value_of("regime").unwrap();
  let regime = match Regime::parse_strict(regime_arg) {
    Some(regime) => regime,
    None => return Err(format!("regime inválido: {} (use PJ ou CLT)", regime_arg)),
  };

  return Ok(ProjectDraft {
    name: matches.value_of("name").unwrap().to_string(),
    description: matches.value_of("description").unwrap().to_string(),
    tags: tags::parse_tags(matches.value_of("tags")),
    regime,
    start_date: Some(parse_cli_date(matches.value_of("start").unwrap())?),
    end_date: Some(parse_cli_date(matches.value_of("end").unwrap())?),
  });
}

fn parse_cli_date(raw: &str) -> Result<chrono::NaiveDate, String> {
  chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .map_err(|_| format!("data inválida: {} (use AAAA-MM-DD)", raw))
}

fn parse_project_id(matches: &clap::ArgMatches) -> Result<i64, String> {
  let raw = matches.value_of("project_id").unwrap();
  raw
    .parse::<i64>()
    .map_err(|_| format!("id inválido: {}", raw))
}

fn confirm(question: &str) -> bool {
  print!("{} [s/N]: ", question);
  let _ = std::io::stdout().flush();

  let mut answer = String::new();
  if std::io::stdin().read_line(&mut answer).is_err() {
    return false;
  }
  return matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes");
}
