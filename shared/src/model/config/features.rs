use bitflags::bitflags;
use std::fmt::{Display, Formatter};

bitflags! {
    /// Ui modules the web client renders. Derived from the toggles and optional values of the descriptor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ClientFeatures: u16 {
        const AUTHORIZE     = 1;
        const CRM           = 1 << 1;
        const DRIVER        = 1 << 2;
        const OCPP          = 1 << 3;
        const ADMIN         = 1 << 4;
        const GOOGLE_SIGNIN = 1 << 5;
        const MAP           = 1 << 6;
        const UPLOAD        = 1 << 7;
    }
}

impl Display for ClientFeatures {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self.iter_names()
            .map(|(name, _)| name.to_lowercase().replace('_', "-"))
            .collect::<Vec<String>>();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}
