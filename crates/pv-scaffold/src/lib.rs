pub mod emitter;
pub mod error;
pub mod template;

pub use emitter::{emit, emit_to, write_app_file, EmitOptions};
pub use error::{EmitError, Result};
pub use template::{APP_CODE, CONFIRMATION, DEFAULT_DESTINATION};
