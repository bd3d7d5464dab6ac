pub mod client;
pub mod config;
pub mod domain;
pub mod errors;
pub mod models;

pub use client::ImgflipClient;
pub use config::Config;
pub use domain::MemeSource;
pub use errors::FetchError;
pub use models::MemeRecord;
