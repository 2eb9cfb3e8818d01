//! Line-oriented front end for the layout designer.

pub mod command;
pub mod config;
mod error;
pub mod session;
pub mod storage;

pub use command::{Command, StyleArgs};
pub use config::{Config, LogFormat};
pub use error::{ClientError, Result};
pub use session::{Reply, Session};
pub use storage::FileStore;
