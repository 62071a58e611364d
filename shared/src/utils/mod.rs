mod constants;
mod default_utils;
mod request;
mod size_utils;
mod string_utils;

pub use self::constants::*;
pub use self::default_utils::*;
pub use self::request::*;
pub use self::size_utils::*;
pub use self::string_utils::*;
