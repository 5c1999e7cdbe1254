use log::LevelFilter;

/// `Debug` when asked for, `Info` otherwise.
fn default_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the process-wide logger.
///
/// - **Native (CLI):** `env_logger` at the default level; `RUST_LOG`, when set,
///   overrides it. Search statistics from both solvers appear at `Debug`.
/// - **WASM:** `console_log` at the default level, writing to the browser console.
///
/// Calling this a second time leaves the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    let level = default_level(debug_enabled);

    #[cfg(target_arch = "wasm32")]
    {
        let wasm_level = level.to_level().unwrap_or(log::Level::Info);
        if let Err(e) = console_log::init_with_level(wasm_level) {
            // no logger to report through, so go straight to the console
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
            return;
        }
        log::info!("WASM logger initialized at {level:?} level");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("native logger initialized at {level:?} level");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger(false);
        init_logger(true);
    }
}
