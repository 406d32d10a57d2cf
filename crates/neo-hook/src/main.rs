//! Neo keyboard remapper entry point.
//!
//! Builds the engine, binds it to the keyboard hook and keeps the process
//! alive until Ctrl-C.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Dispatcher::new(WindowsInputSink)   -- engine + SendInput sink
//!  └─ hook::install(dispatcher)           -- binds engine, starts hook thread
//!       └─ neo-hook-loop (time-critical Win32 message loop)
//!  └─ ctrl_c().await
//!  └─ HookThread::stop()                  -- WM_QUIT + join
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Neo remapper starting");
    run().await?;
    info!("Neo remapper stopped");
    Ok(())
}

#[cfg(target_os = "windows")]
async fn run() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use neo_core::Dispatcher;
    use neo_hook::infrastructure::hook;
    use neo_hook::infrastructure::send_input::WindowsInputSink;

    let dispatcher = Dispatcher::new(Arc::new(WindowsInputSink::new()));
    let hook_thread = hook::install(Box::new(dispatcher)).context("starting keyboard hook")?;

    info!("Neo remapper ready.  Press End to toggle bypass, Ctrl-C to exit.");
    tokio::signal::ctrl_c()
        .await
        .context("waiting for Ctrl-C")?;
    info!("shutdown signal received");

    hook_thread.stop().context("stopping keyboard hook")?;
    Ok(())
}

#[cfg(not(target_os = "windows"))]
async fn run() -> anyhow::Result<()> {
    use neo_hook::infrastructure::hook::HookError;

    Err(HookError::UnsupportedPlatform(format!(
        "{} has no low-level keyboard hook; only Windows is supported",
        std::env::consts::OS
    ))
    .into())
}
