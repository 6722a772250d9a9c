use std::{
    error::Error,
    io::{self, IsTerminal},
    process::ExitCode,
};

use mars_rover::configuration::{Configuration, LogFormat, DEFAULT_LOG_FILTER};
use tracing::{error, warn};
use tracing_log::LogTracer;
use tracing_subscriber::{prelude::*, registry::Registry, EnvFilter};

fn main() -> ExitCode {
    let configuration = Configuration::from_env();

    if let Err(e) = init_logging(configuration.log_format) {
        eprintln!("logging disabled: {}", e);
    }
    for ignored in &configuration.ignored {
        warn!("{}", ignored);
    }

    let stdin = io::stdin();
    let prompts = configuration.prompts.enabled(stdin.is_terminal());
    let mut stdout = io::stdout().lock();

    match mars_rover::run_session(stdin.lock(), &mut stdout, prompts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("mission aborted: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(format: LogFormat) -> Result<(), Box<dyn Error>> {
    LogTracer::init()?;

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    let subscriber = Registry::default().with(filter_layer);
    let fmt_layer = tracing_subscriber::fmt::Layer::default().with_writer(io::stderr);

    match format {
        LogFormat::Pretty => tracing::subscriber::set_global_default(subscriber.with(fmt_layer))?,
        LogFormat::Json => {
            tracing::subscriber::set_global_default(subscriber.with(fmt_layer.json()))?
        }
    }

    Ok(())
}
