mod command;
mod form;
pub mod google;
mod row;
mod value_object;

pub use command::*;
pub use form::*;
pub use google::{GoogleSheets, GoogleSheetsConfig, ServiceAccount};
pub use row::*;
pub use value_object::*;

/// Path the relay is mounted on.
pub const SUBMIT_PATH: &str = "/api/submit-contact";
