pub mod tracer;
pub mod executor;
pub mod dispatcher;

pub use tracer::{Tracer, VtracerEngine};
pub use executor::{ConversionHandle, run_conversion, spawn_conversion};
pub use dispatcher::{ConversionNotifier, drive_conversion};
