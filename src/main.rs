#![deny(clippy::all, nonstandard_style, rust_2018_idioms)]

#[macro_use]
extern crate eyre;

#[macro_use]
extern crate tracing;

use std::{path::Path, process::ExitCode};

use eyre::{Context as _, Report, Result};
use tokio::runtime::Builder as RuntimeBuilder;

use self::{
    client::{Client, ClientError, SteamApi},
    config::{Config, MissingKey},
    context::{Context, DumpRequest},
    util::Args,
};

mod client;
mod config;
mod context;
mod logging;
mod model;
mod output;
mod util;

fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let _log_worker_guard = logging::init(args.quiet, config::log_dir().as_deref());

    let runtime = match RuntimeBuilder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("{:?}", Report::new(err).wrap_err("Failed to build runtime"));

            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(async_main(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);

            ExitCode::from(exit_code(&err))
        }
    }
}

async fn async_main(args: Args) -> Result<()> {
    // Resolved before the client exists so no request is sent without a key
    let config = Config::init(args.key.as_deref())?;
    let ctx = Context::new(Client::new(&config));

    export(&ctx, &args.request, args.out.as_deref()).await
}

/// Dumps all data and writes it once it is complete.
async fn export<A: SteamApi>(
    ctx: &Context<A>,
    request: &DumpRequest,
    out: Option<&Path>,
) -> Result<()> {
    let record = ctx.dump(request).await?;

    output::write_json(&record, out).context("failed to write output")
}

fn exit_code(err: &Report) -> u8 {
    if err.downcast_ref::<MissingKey>().is_some() {
        2
    } else {
        1
    }
}

fn report(err: &Report) {
    if let Some(missing) = err.downcast_ref::<MissingKey>() {
        error!("{missing}");

        return;
    }

    match err.downcast_ref::<ClientError>() {
        Some(client_err) => {
            error!("Steam API error: {err:?}");

            if let Some(excerpt) = client_err.body_excerpt() {
                error!("Response: {excerpt}");
            }
        }
        None => error!("{err:?}"),
    }
}
