use std::time::{Duration, Instant};

/// Filter directives to use: an explicit level wins over the debug flag.
pub fn log_filter(debug: bool, level: Option<&str>) -> String {
    match level.map(str::trim).filter(|level| !level.is_empty()) {
        Some(level) => level.to_string(),
        None if debug => "debug".to_string(),
        None => "info".to_string(),
    }
}

/// Initialise `env_logger` with a timestamped line format.
pub fn init_logging(debug: bool, level: Option<&str>) {
    let filter = log_filter(debug, level);

    env_logger::Builder::new()
        .parse_filters(&filter)
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{}] {} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .init();
}

const SLOW_AFTER: Duration = Duration::from_secs(10);

/// Measures an operation and warns on drop when it ran past [`SLOW_AFTER`].
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    pub fn debug(&self, session_id: &str) {
        log::debug!(
            "[{}] {} completed in {}ms",
            session_id,
            self.name,
            self.elapsed().as_millis()
        );
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        if elapsed > SLOW_AFTER {
            log::warn!("{} took {}ms (slow!)", self.name, elapsed.as_millis());
        }
    }
}
