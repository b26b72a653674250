// app/mod.rs
// Headless entry point: builds the rayon pool, loads init_config.toml when
// present, and dispatches to the requested experiment.

use crate::init_config::InitConfig;

pub mod fields_demo;
pub mod lightning_loop;
pub mod md_loop;

pub fn run() {
    // Global thread pool with threads = max(3, total cores - 2)
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(crate::config::MIN_THREADS)
        .max(crate::config::MIN_THREADS + crate::config::THREADS_LEAVE_FREE)
        - crate::config::THREADS_LEAVE_FREE;
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        eprintln!("[app] rayon pool already initialized: {}", e);
    }

    let experiment = std::env::args().nth(1).unwrap_or_else(|| "all".to_string());

    let init = match InitConfig::load_default() {
        Ok(config) => {
            println!("[app] loaded init_config.toml");
            config
        }
        Err(e) => {
            eprintln!("[app] no init_config.toml ({}), using defaults", e);
            InitConfig::default()
        }
    };

    let result = match experiment.as_str() {
        "md" => md_loop::run_md(&init.md.unwrap_or_default()),
        "lightning" => lightning_loop::run_lightning(&init.lightning.unwrap_or_default()),
        "fields" => fields_demo::run_fields(),
        "all" => md_loop::run_md(&init.md.unwrap_or_default())
            .and_then(|_| lightning_loop::run_lightning(&init.lightning.unwrap_or_default()))
            .and_then(|_| fields_demo::run_fields()),
        other => {
            eprintln!("[app] unknown experiment '{}', expected md | lightning | fields | all", other);
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("[app] run failed: {}", e);
        std::process::exit(1);
    }

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().print_and_clear();
}
