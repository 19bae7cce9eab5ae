use std::time::Duration;

use crate::cli::Command;
use crate::logging::{LogFormat, LogOptions};

pub(super) fn init_logging(options: &LogOptions) {
    use std::io::IsTerminal;
    use std::sync::OnceLock;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::{EnvFilter, fmt};

    static INITIALISED: OnceLock<()> = OnceLock::new();

    let _ = INITIALISED.get_or_init(|| {
        let use_ansi = std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let level = options.level;
        // RUST_LOG wins over the configured level when it is set.
        let make_filter = || {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::default()
                    .add_directive(LevelFilter::from_level(level.as_tracing_level()).into())
            })
        };

        match options.format {
            LogFormat::Json => {
                let subscriber = fmt::fmt()
                    .with_env_filter(make_filter())
                    .with_ansi(false)
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .json()
                    .finish();
                let _ = tracing::subscriber::set_global_default(subscriber);
            }
            LogFormat::Text | LogFormat::Auto => {
                let subscriber = fmt::fmt()
                    .with_env_filter(make_filter())
                    .with_ansi(use_ansi)
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .compact()
                    .finish();
                let _ = tracing::subscriber::set_global_default(subscriber);
            }
        }
    });
}

fn input_of(command: &Command) -> String {
    match command {
        Command::Lower { input, .. } => input.display().to_string(),
        Command::Help { .. } | Command::Version => "<none>".into(),
    }
}

pub(super) fn log_run_start(command: &Command, options: &LogOptions) {
    let (entry_point, entry_policy) = match command {
        Command::Lower {
            options: lowering, ..
        } => (
            Some(lowering.entry_point.as_str()),
            Some(lowering.entry_policy.as_str()),
        ),
        _ => (None, None),
    };
    tracing::info!(
        target: "pipeline",
        stage = "cli.run.start",
        command = command.name(),
        log_level = %options.level,
        log_format = %options.format,
        input = %input_of(command),
        entry_point = entry_point.unwrap_or("-"),
        entry_policy = entry_policy.unwrap_or("-"),
    );
}

pub(super) fn log_run_complete(
    command: &Command,
    elapsed: Duration,
    result: &crate::error::Result<()>,
) {
    let elapsed_ms = elapsed.as_millis() as u64;
    match result {
        Ok(()) => tracing::info!(
            target: "pipeline",
            stage = "cli.run.footer",
            command = command.name(),
            status = "ok",
            input = %input_of(command),
            elapsed_ms
        ),
        Err(err) => tracing::error!(
            target: "pipeline",
            stage = "cli.run.footer",
            command = command.name(),
            status = "error",
            input = %input_of(command),
            elapsed_ms,
            error = %err
        ),
    }
}
