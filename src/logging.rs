// src/logging.rs
//! Routes `log` records from every workspace crate to stderr.

use tracing_subscriber::EnvFilter;

const WORKSPACE_TARGETS: [&str; 4] = ["feedjoin", "feedjoin_usecase", "feedjoin_infra", "feedjoin_domain"];

/// `-v` flags win over `RUST_LOG`; without either only warnings are shown.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        n => EnvFilter::new(directives(n)),
    };

    // A second initialisation (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let mut directives = vec!["warn".to_string()];
    directives.extend(WORKSPACE_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}
