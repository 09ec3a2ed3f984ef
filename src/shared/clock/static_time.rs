//! When the pixel tracker was started. The stopped clock uses it as its
//! default time outside unit tests.
use std::time::SystemTime;

lazy_static! {
    pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();
}
