use std::fs::File;
use std::io::stderr;
use std::path::Path;
use std::sync::OnceLock;

use chrono::Local;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

static INIT: OnceLock<()> = OnceLock::new();

const LOG_DIR: &str = "/tmp/rankfile_logs";

/// Initialize tracing with a console layer only. Safe to call more than
/// once; only the first call installs the subscriber (tests lean on this).
pub fn init() {
    init_inner(false);
}

/// Initialize tracing with the console layer plus a debug-level file layer
/// under `/tmp/rankfile_logs`.
pub fn init_with_file() {
    init_inner(true);
}

fn init_inner(with_file: bool) {
    INIT.get_or_init(|| {
        #[cfg(feature = "dev-tools")]
        color_backtrace::install();

        let console_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();
        let console_layer = fmt::layer()
            .without_time()
            .with_writer(stderr)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry().with(console_layer);

        if with_file {
            let log_dir = Path::new(LOG_DIR);
            if !log_dir.exists() {
                std::fs::create_dir(log_dir).expect("Failed to create log directory");
            }

            let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
            let log_filename = format!("{LOG_DIR}/rankfile_{timestamp}.log");
            let log_file = File::create(&log_filename)
                .unwrap_or_else(|_| panic!("Failed to create log file: {log_filename}"));

            let (non_blocking_writer, _guard) = non_blocking(log_file);
            std::mem::forget(_guard); // Keep the guard alive.

            let file_layer = fmt::layer()
                .with_writer(non_blocking_writer)
                .with_ansi(false) // No colors in file
                .with_filter(LevelFilter::DEBUG);

            registry.with(file_layer).init();
        } else {
            registry.init();
        }
    });
}
