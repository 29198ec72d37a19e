pub mod model;

mod inner;
pub use inner::API;

pub use reqwest;
pub use serde_json;
