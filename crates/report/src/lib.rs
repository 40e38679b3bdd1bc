pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod domain;
pub mod export;
pub mod handler;
pub mod service;
pub mod state;
