//! Ctrl-C registration.
//!
//! A dedicated thread drives a single-threaded tokio runtime whose only job
//! is to wait for Ctrl-C and raise the interrupt flag. The listener is
//! registered on the calling thread, so Ctrl-C is caught as soon as
//! [`install_ctrl_c`] returns.

use hexdiff_core::InterruptFlag;
use std::io;
use std::thread;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

#[cfg(unix)]
fn listen() -> io::Result<Signal> {
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn listen() -> io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}

/// Start the Ctrl-C listener.
///
/// # Errors
///
/// Fails if the runtime, the signal registration or the listener thread
/// cannot be created.
pub fn install_ctrl_c(flag: InterruptFlag) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut listener = {
        let _guard = runtime.enter();
        listen()?
    };

    thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(move || {
            runtime.block_on(async {
                if listener.recv().await.is_some() {
                    flag.request();
                }
            });
        })?;

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;
    use std::time::{Duration, Instant};

    #[test]
    fn test_interrupt_right_after_install_raises_flag() {
        let flag = InterruptFlag::new();
        install_ctrl_c(flag.clone()).unwrap();

        let status = Command::new("kill")
            .args(["-INT", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        let deadline = Instant::now() + Duration::from_secs(5);
        while !flag.is_requested() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        assert!(flag.is_requested());
    }
}
