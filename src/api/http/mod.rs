// src/api/http/mod.rs

mod handlers;
pub mod pages;
mod router;

pub use router::create_router;
