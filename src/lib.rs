pub mod config;
pub mod error;
pub mod hardware;
pub mod phone;
pub mod ui;

pub use error::PhoneError;
pub use phone::{LineState, Phone, PhoneStatus};
