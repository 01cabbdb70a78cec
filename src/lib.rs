pub mod app;
pub mod config;
pub mod console;
pub mod domain;
pub mod infra;

pub use crate::app::session::{Session, SessionEvent};
pub use crate::infra::store::{EntityStore, Record, StoreError};
