pub mod endpoint;
pub mod snapshot;
pub mod util;
