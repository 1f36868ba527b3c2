//! Paw-Mate storefront CLI

use std::{
    error::Error as _,
    fs::File,
    io::{self, BufReader},
    process,
};

use pawmate_app::{
    config::AppConfig,
    context::{AppContext, AppInitError},
    observability::{ObservabilityError, init_subscriber},
    session::{Session, SessionError},
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to initialise logging")]
    Observability(#[from] ObservabilityError),

    #[error("failed to initialise api clients")]
    Init(#[from] AppInitError),

    #[error("failed to open script {path}")]
    Script {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("session failed")]
    Session(#[from] SessionError),
}

#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    let config = AppConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = run(&config).await {
        report(&error);
        process::exit(1);
    }
}

async fn run(config: &AppConfig) -> Result<(), AppError> {
    init_subscriber(&config.logging)?;

    let context = AppContext::from_config(&config.api)?;
    let mut session = Session::new(&context);

    info!(
        submit_url = %config.api.submit_url,
        random_image_url = %config.api.random_image_url,
        "starting session"
    );

    let stdout = io::stdout();

    match &config.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| AppError::Script {
                path: path.display().to_string(),
                source,
            })?;

            session.run(BufReader::new(file), stdout.lock()).await?;
        }
        None => session.run(io::stdin().lock(), stdout.lock()).await?,
    }

    Ok(())
}

#[expect(clippy::print_stderr, reason = "fatal errors are reported before exiting")]
fn report(error: &AppError) {
    eprintln!("error: {error}");

    let mut source = error.source();

    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
