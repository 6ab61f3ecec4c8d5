//! Dynamic-linker version probe.
//!
//! The environment classifier sometimes needs text that only the host's
//! dynamic linker can provide, which means spawning a child process —
//! the one blocking operation in the whole crate. The contract is
//! deliberately blunt: return the first line of `<ldd> --version`
//! stdout, ASCII-lowercased, within a short timeout, or an empty string
//! on any failure at all. The child is force-killed and reaped on every
//! exit path, so a hanging or chatty `ldd` can neither block the caller
//! past the deadline nor leak a process.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// How long the probe waits for the child to exit.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// First stdout line of `<ldd> --version`, lowercased, or `""`.
///
/// `ldd` defaults to plain `ldd`, resolved through `PATH`. This function
/// never fails: a missing binary, a spawn error, a timeout, or an I/O
/// error all collapse to the empty string, which downstream classifies
/// as an unknown environment.
pub fn ldd_version(ldd: Option<&Path>) -> String {
    probe_first_line(ldd.unwrap_or(Path::new("ldd")), PROBE_TIMEOUT)
}

pub(crate) fn probe_first_line(program: &Path, timeout: Duration) -> String {
    let mut child = match Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            log::debug!("probe spawn failed for {}: {err}", program.display());
            return String::new();
        }
    };

    let line = wait_and_read_first_line(&mut child, timeout).unwrap_or_default();

    // Kill unconditionally; if the child already exited this is a no-op
    // error. The wait reaps the process so nothing is left behind.
    let _ = child.kill();
    let _ = child.wait();

    line
}

/// Waits for the child to exit within `timeout` and reads the first
/// stdout line. `None` on timeout or any I/O error.
fn wait_and_read_first_line(child: &mut Child, timeout: Duration) -> Option<String> {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => break,
            Ok(None) => {
                if Instant::now() >= deadline {
                    log::debug!("probe timed out after {timeout:?}");
                    return None;
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(err) => {
                log::debug!("probe wait failed: {err}");
                return None;
            }
        }
    }

    let stdout = child.stdout.take()?;
    let mut line = String::new();
    for byte in stdout.bytes() {
        match byte {
            Ok(b'\n') => break,
            Ok(c) => line.push(c.to_ascii_lowercase() as char),
            Err(err) => {
                log::debug!("probe read failed: {err}");
                return None;
            }
        }
    }
    Some(line)
}
