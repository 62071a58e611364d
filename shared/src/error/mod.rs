mod webconf_error;

pub use self::webconf_error::*;
