use expbackoff::Backoff;
use std::thread;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn flaky_connect(attempt: u32) -> Result<(), &'static str> {
    if attempt < 4 {
        Err("connection refused")
    } else {
        Ok(())
    }
}

fn main() {
    // Init logging to stderr only
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(std::io::stderr)
        .try_init();

    let mut backoff = Backoff::new(0.5, 5);
    let mut attempt = 0;
    loop {
        match flaky_connect(attempt) {
            Ok(()) => {
                backoff.update(true);
                info!("connected after {} attempts", attempt + 1);
                break;
            }
            Err(err) => {
                backoff.update(false);
                let delay = backoff.delay_with_jitter();
                warn!("{} retrying in {:?}", err, delay);
                thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}
