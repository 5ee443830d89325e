//! Server-side web application and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations and
//! tower-sessions for cookie sessions stored in the same Sqlite database.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and view model shaping
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication
//! - **View** (`view`) - Template names, view models and the renderer seam
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, renderer, news provider)
//! - **Startup** (`startup`) - Database and session initialization
//! - **Router** (`router`) - Route composition and API documentation
//!
//! # Request Flow
//!
//! 1. **Session layer** loads the session from the cookie
//! 2. **Current user loader** attaches the logged-in user, if any
//! 3. **Router** matches the request; protected routes run their auth middleware
//! 4. **Controller** calls services and shapes the view model or DTO
//! 5. **Service** executes business logic through repositories
//! 6. **Controller** returns exactly one rendered view, redirect, or JSON body

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod view;
