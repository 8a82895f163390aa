//! Credential-injecting wrappers around [`HttpClient`](super::HttpClient).

mod bearer;

pub use bearer::Bearer;
