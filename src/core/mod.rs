pub mod broadcast;
pub mod launcher;
pub mod resolver;
pub mod validator;

pub use crate::domain::model::{LaunchCommand, LaunchOutcome, RunOutcome, Tool};
pub use crate::domain::ports::{CommandRunner, ConfigProvider, Confirmer};
pub use crate::utils::error::Result;
