//! Append-only run log.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Env, Target, WriteStyle};

/// Install the process-wide logger, appending to `path`.
///
/// Level defaults to `info`; `RUST_LOG` overrides it. Lines end in CRLF.
pub fn init(path: &Path) -> Result<(), String> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format(|buf, record| {
            write!(
                buf,
                "{} {:<5} {}\r\n",
                chrono::Local::now().format("%Y/%m/%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| format!("cannot install logger: {e}"))
}

/// Flush pending records before the process exits.
pub fn finish() {
    log::logger().flush();
}
