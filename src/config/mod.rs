mod io;
mod models;
mod tables;

pub use io::{load_config, serialize_config};
pub use models::AppConfig;
