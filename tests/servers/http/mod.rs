pub mod asserts;
pub mod client;
pub mod environment;
pub mod v1;

use pixel_tracker::servers::http::server;

pub type Started = environment::Environment<server::Running>;
