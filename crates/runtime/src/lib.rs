mod config;
pub mod logging;

pub use config::{DATE_FORMAT, MISSING_DATE, PROGRAM_LOG_LEVEL, PROGRAM_NAME, ROOT_LABEL};

pub use logging::init_with_verbosity;
