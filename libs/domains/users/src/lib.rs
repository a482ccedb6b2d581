//! Users Domain
//!
//! CRUD over a single `users` table, exposed as JSON over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, method enforcement, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required-field validation, outcome policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Parameterized SQL (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, payloads, JSON codec
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::http::HeaderValue;
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//!
//! let router = handlers::router(service, HeaderValue::from_static("User Service"));
//! ```

pub mod codec;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validator;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUserPayload, CreatedResponse, UpdateUserPayload, User, UserFields};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
