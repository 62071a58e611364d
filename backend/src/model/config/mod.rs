pub mod macros;
mod admin;
mod app;
mod client;
mod paths;

pub use self::admin::*;
pub use self::app::*;
pub use self::client::*;
pub use self::paths::*;
