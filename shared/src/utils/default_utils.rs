pub const fn default_remote_timeout_secs() -> u64 { 10 }
