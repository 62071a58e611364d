#[macro_export]
macro_rules! include_modules {
    () => {
        extern crate env_logger;
        extern crate pest;
        pub mod model;
        pub mod utils;
    }
}
