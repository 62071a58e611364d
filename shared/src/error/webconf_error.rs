use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! config_err {
    ($($arg:tt)*) => {
        $crate::error::WebConfError::new($crate::error::WebConfErrorKind::Config, format!($($arg)*))
    };
}
pub use config_err;

#[macro_export]
macro_rules! config_err_res {
    ($($arg:tt)*) => {
        Err($crate::error::WebConfError::new($crate::error::WebConfErrorKind::Config, format!($($arg)*)))
    };
}
pub use config_err_res;

#[macro_export]
macro_rules! feature_err {
    ($($arg:tt)*) => {
        $crate::error::WebConfError::new($crate::error::WebConfErrorKind::FeatureUnavailable, format!($($arg)*))
    };
}
pub use feature_err;

/// Collects every failed result of the iterator into one error of the given kind.
/// Returns early from the surrounding function if at least one result failed.
#[macro_export]
macro_rules! handle_webconf_error_result_list {
    ($kind:expr, $result: expr) => {
        let errors = $result
            .filter_map(|result| {
                if let Err(err) = result {
                    Some(err.message)
                } else {
                    None
                }
            })
            .collect::<Vec<String>>();
        if !errors.is_empty() {
            return Err($crate::error::WebConfError::new($kind, errors.join("\n")));
        }
    }
}
pub use handle_webconf_error_result_list;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WebConfErrorKind {
    // fatal, the client must not start
    Config,
    // an optional feature is not configured, the ui hides it
    FeatureUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfError {
    pub kind: WebConfErrorKind,
    pub message: String,
}

impl WebConfError {
    pub const fn new(kind: WebConfErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == WebConfErrorKind::Config
    }
}

impl Display for WebConfError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.kind {
            WebConfErrorKind::Config => write!(f, "Configuration error: {}", self.message),
            WebConfErrorKind::FeatureUnavailable => write!(f, "Feature unavailable: {}", self.message),
        }
    }
}

impl Error for WebConfError {}
