//! Core library for newswire
//!
//! This crate implements the **Functional Core** of the newswire
//! application: request construction, validation, serialization, response
//! deserialization, and output rendering, all with zero I/O. The
//! `newswire` binary crate is the Imperative Shell that owns argument
//! parsing, the HTTP transport, and stdout/file output.
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`enums`]: domain enumerations and their wire-string codecs
//! - [`dates`]: strict date and date-time validation for range filters
//! - [`request`]: typed request models and query-parameter serialization
//! - [`response`]: typed response models and body deserialization
//! - [`render`]: Markdown and JSON rendering over a normalized payload
//! - [`error`]: the error taxonomy shared with the shell

pub mod dates;
pub mod enums;
pub mod error;
pub mod render;
pub mod request;
pub mod response;

pub use error::Error;
