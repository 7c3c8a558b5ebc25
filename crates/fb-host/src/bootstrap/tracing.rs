//! Tracing configuration for feedbridge
//!
//! This module provides the tracing-subscriber initialization for structured
//! logging with spans.
//!
//! ## Architecture / 架构
//!
//! - **stderr only on the terminal**: stdout carries the UI wire protocol
//! - **Optional file output**: non-blocking appender in the platform log dir
//! - **Optional Sentry**: enabled when `SENTRY_DSN` is set
//! - **Environment-aware**: debug in dev builds, info in release builds

use std::{fs, io, path::PathBuf, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static SENTRY_GUARD: OnceLock<sentry::ClientInitGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "feedbridge.log";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level everywhere
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("fb_app={level}"),
        format!("fb_infra={level}"),
        format!("fb_host={level}"),
        "fb_core=info".to_string(),
    ]
}

/// Directory for the log file: `<data_local_dir>/feedbridge/logs`.
fn log_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("No local data directory on this platform")?;
    Ok(base.join("feedbridge").join("logs"))
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// ## Behavior / 行为
///
/// 1. Creates an env-filter for level control (`RUST_LOG` wins when set)
/// 2. Registers a Sentry layer when `SENTRY_DSN` is set
/// 3. Sets up a stderr fmt layer and, when `file_logging` is on, a file layer
/// 4. Registers the global subscriber
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(file_logging: bool) -> anyhow::Result<()> {
    let is_dev = is_development();

    // Step 1: Build environment filter
    let filter_directives = build_filter_directives(is_dev);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // Step 2: Initialize Sentry (guard must be kept alive)
    let sentry_layer = if let Ok(dsn) = std::env::var("SENTRY_DSN") {
        let guard = sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        ));

        if SENTRY_GUARD.set(guard).is_err() {
            eprintln!("Sentry guard already initialized");
        }

        Some(sentry_tracing::layer())
    } else {
        None
    };

    // Step 3: Create writers
    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = if file_logging {
        match build_file_writer() {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
                None
            }
        }
    } else {
        None
    };

    // Format: "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    // Step 4: Register the global subscriber
    let subscriber = registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(stderr_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = log_dir()?;
    fs::create_dir_all(&logs_dir)?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
