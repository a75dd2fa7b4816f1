use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Timestamped terminal log at Info, RUST_LOG overrides the level
pub fn log_init() -> Result<(), log::SetLoggerError> {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}][{}]: {}",
                chrono::Local::now().format("%m-%dT%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .try_init()
}
