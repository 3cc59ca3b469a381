// src/lib.rs
// Roaster - AI critique of landing page screenshots

pub mod api;
pub mod capture;
pub mod config;
pub mod error;
pub mod http;
pub mod image;
pub mod llm;
pub mod roast;

pub use error::{DecodeError, Result, RoasterError};
