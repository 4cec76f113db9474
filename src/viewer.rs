use std::{cell::RefCell, rc::Rc};

use colored::Colorize;

use crate::{
  duration_fmt::{format_duration, NOT_INFORMED},
  feed::{Feed, Mode},
  filter::Filter,
  project::{EnrollmentStatus, Project},
  role::Role,
};

pub struct Viewer {
  feed: Rc<RefCell<Feed>>,
}

impl Viewer {
  pub fn new(feed: Rc<RefCell<Feed>>) -> Self {
    Self { feed }
  }

  pub fn print_feed(&self, filter: &Filter, show_full: bool) {
    let feed = self.feed.borrow();
    println!("{}", header(&feed).bold().cyan());

    let projects = feed.visible(filter);
    if projects.is_empty() {
      println!("Nenhum projeto encontrado");
      return;
    }

    println!("");
    for project in projects.iter() {
      self.print_project(&feed, project, show_full);
    }
  }

  fn print_project(&self, feed: &Feed, project: &Project, show_full: bool) {
    let mut badges: Vec<String> = vec![project.regime().as_str().magenta().to_string()];
    if project.closed() {
      badges.push("Encerrado".red().bold().to_string());
    }
    if let Some(status) = status_badge(feed, project) {
      badges.push(status);
    }

    println!(
      "{id:>6}  {name}  {badges}",
      id = project.id().to_string().yellow(),
      name = project.name().bold(),
      badges = badges.join(" "),
    );
    println!(
      "{padding}Início: {start}  Duração: {duration}  Empresa: {company}  Criado em: {created}",
      padding = " ".repeat(8),
      start = format_date(project.start_date()).green(),
      duration = format_duration(project.start_date(), project.end_date()).bright_yellow(),
      company = project.company_name().red(),
      created = creation_date(project).green(),
    );

    let tags: Vec<String> = project
      .tags()
      .iter()
      .map(|tag| tag.cyan().to_string())
      .collect();
    println!("{}[{}]", " ".repeat(8), tags.join(", ").italic());

    if show_full {
      println!("{}{}", " ".repeat(8), project.description().dimmed().italic());
    }
    println!("");
  }
}

fn header(feed: &Feed) -> String {
  match feed.session().role() {
    Role::Company => "Meus Projetos".to_string(),
    Role::Student if feed.mode() == Mode::Enrolled => "Minhas Inscrições".to_string(),
    _ => "Projetos Disponíveis".to_string(),
  }
}

/// Students see their enrollment state on open projects: the status tag
/// in the enrollments view (pending when the backend sent none), the
/// enrolled marker in the all-projects view.
fn status_badge(feed: &Feed, project: &Project) -> Option<String> {
  if feed.session().role() != Role::Student || project.closed() {
    return None;
  }

  if feed.mode() == Mode::Enrolled {
    let status = project
      .enrollment_status()
      .cloned()
      .unwrap_or(EnrollmentStatus::Pending);
    return Some(status.as_str().blue().bold().to_string());
  }

  return match feed.is_enrolled(project.id()) {
    true => Some("Inscrito".green().bold().to_string()),
    false => None,
  };
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
  match date {
    Some(date) => date.format("%d/%m/%Y").to_string(),
    None => NOT_INFORMED.to_string(),
  }
}

fn creation_date(project: &Project) -> String {
  match project.created_at() {
    Some(date) => date.format("%d/%m/%Y").to_string(),
    None => "-".to_string(),
  }
}
