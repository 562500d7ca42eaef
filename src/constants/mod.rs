pub mod banner;
pub mod prompt;
pub mod tree;

use std::time::Duration;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(500);
