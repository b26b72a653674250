pub mod body;
pub mod cell_list;
pub mod config;
pub mod diagnostics;
pub mod fields;
pub mod init_config;
pub mod io;
pub mod lightning;
pub mod molecule;
pub mod plotting;
pub mod profiler;
pub mod scenario;
pub mod simulation;
pub mod units;

pub mod app;

#[cfg(feature = "profiling")]
use once_cell::sync::Lazy;
#[cfg(feature = "profiling")]
use parking_lot::Mutex;

#[cfg(feature = "profiling")]
pub static PROFILER: Lazy<Mutex<profiler::Profiler>> =
    Lazy::new(|| Mutex::new(profiler::Profiler::new()));
