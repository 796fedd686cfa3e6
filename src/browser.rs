//! Opens web UI links in the user's default browser.

use crate::error::{NavigatorError, Result};
use futures::future::BoxFuture;
use std::io;
use tokio::process::Command;
use url::Url;

pub trait BrowserLauncher: Send + Sync + 'static {
    fn open<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<()>>;
}

/// Launches the platform's URL opener and waits for it to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let err = |source: io::Error| NavigatorError::Browser {
                url: url.to_string(),
                source,
            };

            let (program, args) = opener().map_err(err)?;
            tracing::debug!(%url, program = %program, "opening browser");

            let status = Command::new(&program)
                .args(args)
                .arg(url.as_str())
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .status()
                .await
                .map_err(err)?;

            if !status.success() {
                return Err(err(io::Error::other(format!(
                    "{program} exited with {status}"
                ))));
            }
            Ok(())
        })
    }
}

#[cfg(target_os = "macos")]
fn opener() -> io::Result<(String, &'static [&'static str])> {
    Ok(("open".to_string(), &[]))
}

#[cfg(target_os = "windows")]
fn opener() -> io::Result<(String, &'static [&'static str])> {
    // The empty argument is the window title expected by `start`.
    Ok(("cmd".to_string(), &["/C", "start", ""]))
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener() -> io::Result<(String, &'static [&'static str])> {
    const CANDIDATES: [&str; 3] = ["xdg-open", "wslview", "x-www-browser"];
    const NO_ARGS: &[&str] = &[];
    CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
        .map(|path| (path.display().to_string(), NO_ARGS))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("none of {} found on PATH", CANDIDATES.join(", ")),
            )
        })
}
