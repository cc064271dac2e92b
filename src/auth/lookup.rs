//! Slow user lookup
//!
//! Answers whether a username is in the credential table after a delay
//! proportional to the username's length, mimicking a slow remote server.
//! One step is charged per character and a progress marker is written after
//! each step.

use log::{debug, warn};
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::credentials;
use crate::config::LookupConfig;

/// Total delay a lookup of `username` incurs under `config`
pub fn simulated_latency(username: &str, config: &LookupConfig) -> Duration {
    let steps = u32::try_from(step_count(username)).unwrap_or(u32::MAX);
    config.step_delay().saturating_mul(steps)
}

/// Checks whether `username` exists, blocking for one second per character
/// and printing a `.` to stdout after each second.
///
/// Any input is accepted; the empty string returns `false` immediately.
pub fn check_user_exists(username: &str) -> bool {
    let config = LookupConfig::default();
    // Unlocked handle: stdout is only locked for each marker write.
    let mut stdout = LossyProgress::new(io::stdout());

    match check_user_exists_with(username, &config, &mut stdout) {
        Ok(exists) => exists,
        Err(e) => {
            warn!("Failed to write lookup progress for {:?}: {}", username, e);
            credentials::contains(username)
        }
    }
}

/// Progress sink that logs the first write failure and then discards output,
/// so a broken sink never cuts the simulated delay short.
pub(crate) struct LossyProgress<W> {
    inner: W,
    failed: bool,
}

impl<W: Write> LossyProgress<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    fn absorb(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            warn!("Progress output failed, continuing silently: {}", e);
            self.failed = true;
        }
    }
}

impl<W: Write> Write for LossyProgress<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.failed {
            let result = self.inner.write_all(buf);
            self.absorb(result);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.failed {
            let result = self.inner.flush();
            self.absorb(result);
        }
        Ok(())
    }
}

/// Blocking lookup with explicit settings and progress sink.
///
/// Errors only when writing progress fails.
pub fn check_user_exists_with<W: Write>(
    username: &str,
    config: &LookupConfig,
    out: &mut W,
) -> io::Result<bool> {
    debug!(
        "Looking up {:?} (simulated latency {:?})",
        username,
        simulated_latency(username, config)
    );

    let step = config.step_delay();
    let mut wait = step_count(username);
    while wait > 0 {
        std::thread::sleep(step);
        if config.show_progress {
            out.write_all(config.progress_marker.as_bytes())?;
            out.flush()?;
        }
        wait -= 1;
    }

    Ok(finish(username))
}

/// Async lookup; sleeps on the tokio timer instead of blocking the thread
pub async fn check_user_exists_async<W>(
    username: &str,
    config: &LookupConfig,
    out: &mut W,
) -> io::Result<bool>
where
    W: AsyncWrite + Unpin,
{
    debug!(
        "Looking up {:?} (simulated latency {:?})",
        username,
        simulated_latency(username, config)
    );

    let step = config.step_delay();
    let mut wait = step_count(username);
    while wait > 0 {
        tokio::time::sleep(step).await;
        if config.show_progress {
            out.write_all(config.progress_marker.as_bytes()).await?;
            out.flush().await?;
        }
        wait -= 1;
    }

    Ok(finish(username))
}

fn step_count(username: &str) -> usize {
    username.chars().count()
}

fn finish(username: &str) -> bool {
    let exists = credentials::contains(username);
    debug!("Lookup of {:?} finished: exists={}", username, exists);
    exists
}
