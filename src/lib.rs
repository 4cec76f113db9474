extern crate chrono;
extern crate colored;
extern crate serde;
extern crate serde_json;

mod feed;

pub mod api;
pub mod config;
pub mod duration_fmt;
pub mod filter;
pub mod project;
pub mod regime;
pub mod role;
pub mod session;
pub mod storage;
pub mod tags;
pub mod time;
pub mod viewer;

pub use feed::*;
