//! Tauri command handlers for the frontend.
//!
//! This module exposes commands that can be invoked from the web frontend:
//! - [`load_image`] / [`pick_image`]: Select the source raster
//! - [`get_image_preview`]: Raw bytes of the selected raster for display
//! - [`convert_image`]: Start a conversion on a background worker
//! - [`save_svg`]: Write the last result to disk
//! - parameter panel commands in [`params`]

mod events;
mod export;
mod image;
mod params;

pub use events::{
    TauriNotifier, FAILED_EVENT, FINISHED_EVENT, PARAMETER_EVENT, PROGRESS_EVENT, notify,
};
pub use export::*;
pub use self::image::*;
pub use params::*;
