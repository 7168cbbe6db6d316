pub mod config;
pub mod logging;

pub mod client;
pub mod describe;
pub mod html_format;
pub mod model;
pub mod normalize;
pub mod presentation;
pub mod session;
pub mod url_model;
