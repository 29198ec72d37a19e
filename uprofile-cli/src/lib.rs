pub mod fetch;
pub mod utils;
