// src/logging.rs
use log::LevelFilter;

/// `-q` / `-v` の指定からログレベルを決める。既定は warn。
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// stderr へのロガーを初期化する。`RUST_LOG` が設定されていればそちらを優先する。
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false);
    // テストなどで二重に初期化されても無視する
    let _ = builder.try_init();
}
