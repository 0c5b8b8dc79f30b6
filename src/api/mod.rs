pub mod config;
pub mod preview;

pub use config::{handle_current_config, __path_handle_current_config};
pub use preview::{handle_image, ErrorResponse, __path_handle_image};
