mod client;
mod client_http;
mod types;

#[cfg(test)]
mod client_fake;

pub use client::{ApiError, Client};
pub use client_http::HttpClient;
pub use types::{
  CreateProjectRequest, LoginRequest, LoginResponse, RawCompany, RawProject,
  ResetPasswordRequest,
};

#[cfg(test)]
pub use client_fake::FakeClient;
