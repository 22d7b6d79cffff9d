#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

use std::env;
use std::process;

use anyhow::Error;
use contextlab::application::cli;
use yansi::Paint;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "contextlab failed with the following version and error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    process::exit(1);
}

#[tokio::main]
async fn main() {
    let debug_log_dir = env::var("CONTEXTLAB_LOG_DIR").unwrap_or_else(|_| {
        return dirs::cache_dir()
            .unwrap()
            .join("contextlab")
            .to_string_lossy()
            .to_string();
    });

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("contextlab")
    {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    if let Err(err) = cli::parse().await {
        handle_error(err);
    }

    process::exit(0);
}
