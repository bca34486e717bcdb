// reelforge-cli/src/logging.rs
//
// Logging setup: fern dispatch to stderr with timestamps.

use log::LevelFilter;

/// Initializes logging for the CLI. Verbosity: 0 = info, 1 = debug,
/// 2 or more = trace.
pub fn init(verbosity: u8) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
