pub mod app;
pub mod bands;
pub mod charge;
pub mod config;
pub mod expr;
pub mod field;
pub mod init_config;
pub mod profiler;
pub mod renderer;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
