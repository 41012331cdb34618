//! Trailer rendering demo
//!
//! Drives a controller against stdout on a timer: scrollback lines grow
//! above while the trailer block changes shape below. Watch for the partial
//! line that fills in piece by piece, the trailer growing and shrinking, and
//! multi-break writes landing in one piece.
//!
//! Logging goes to stderr so it never reaches the controlled sink; set
//! `RUST_LOG=terminal_trailer=trace` to watch the write classification.

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use terminal_trailer::Controller;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> terminal_trailer::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"output before the controller takes over\n")?;

    let mut term = Controller::new(stdout)?;
    term.write(b"controlled output begins\n")?;
    pause();

    term.set_trailer(trailer(&["^^^^^^^^", " -> trailer line 2"]))?;
    pause();

    term.write(b"this is a whole line\n")?;
    pause();
    term.write(b"all at once\n")?;
    pause();

    term.write(b"this line takes")?;
    pause();
    term.write(b"... \x1b[32msome time")?;
    pause();
    term.write(b".")?;
    pause();
    term.write(b".")?;
    pause();
    term.write(b".\n")?;
    pause();

    term.write(b"plain scrollback\n")?;
    pause();

    term.set_trailer(trailer(&[
        "^^^^^^^^",
        " -> trailer line 2",
        " -> trailer line longer",
        " -> and line 3",
    ]))?;
    term.write(b"more plain scrollback\n")?;
    pause();

    term.write(b"even more plain scrollback\n")?;
    pause();

    term.set_trailer(trailer(&["^^^^^^^^", " -> trailer shorter now"]))?;
    term.write(b"yet more plain scrollback\n")?;
    pause();

    term.write(b"here's two\n lines in one write\n")?;
    pause();

    term.write(b"here's one line and\n a partial... ")?;
    pause();

    term.write(b"... done\nwith another full, too.\n")?;
    pause();

    term.write(b"edge case test: several breaks in a row\n\nsurvived?")?;
    pause();

    term.write(b"...hope so.\n\nshould work regardless of if the last line was partial, too.\n")?;
    pause();

    term.write(b"next the trailer goes away entirely\n")?;
    pause();

    term.clear_trailer()?;
    pause();

    term.write(b"signing off\n")?;
    pause();

    Ok(())
}

fn trailer(strs: &[&str]) -> Vec<Vec<u8>> {
    strs.iter().map(|s| s.as_bytes().to_vec()).collect()
}

fn pause() {
    thread::sleep(Duration::from_millis(1000));
}
