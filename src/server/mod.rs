//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework, SeaORM for relational storage and
//! `jsonwebtoken` for bearer authentication.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Repository trait, relational and in-memory backends, seeding
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard for protected routes
//! - **Auth** (`auth/`) - Token issuing and validation, password hashing
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Layered settings files and environment variables
//! - **State** (`state`) - Shared application state (store, validator, issuer, encrypter)
//! - **Startup** (`startup`) - Backend selection and database migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** validates the bearer token and attaches the `Principal`
//! 3. **Controller** converts DTOs to params and builds a per-request service
//! 4. **Service** validates input and calls repositories built from the store
//! 5. **Data** reads or writes the backend, returning domain models
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod auth;
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
pub mod util;
