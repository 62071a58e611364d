mod admin_reference;
mod client;
mod config_format;
mod deployment;
mod features;

pub use self::admin_reference::*;
pub use self::client::*;
pub use self::config_format::*;
pub use self::deployment::*;
pub use self::features::*;
