// Library entry so integration tests can reference internal modules.
// The binary (`main.rs`) wires these into the serenity client.
pub mod catalog;
pub mod commands;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod handler;
pub mod health;
pub mod interactions;
pub mod model;
pub mod services;
pub mod session;
pub mod ui;

pub use model::AppState;
