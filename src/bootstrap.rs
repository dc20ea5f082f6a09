// src/bootstrap.rs
use std::io::{self, Write};

use anyhow::Result;
use user_stats_infra::{notifier::LogNotifier, persistence::FileWriter, source::CsvRecordSource};
use user_stats_shared_kernel::InfrastructureError;
use user_stats_usecase::{AnalysisReport, RunAnalysisCommand};

use crate::{cli, config::Config, logging, presentation};

pub fn run() -> Result<()> {
    let config = cli::load_config()?;
    logging::init(config.log_level);
    run_with_config(&config).map(|_| ())
}

/// 設定どおりに読み込み・集計・出力を行い、出力したレポートを返す。
pub fn run_with_config(config: &Config) -> Result<AnalysisReport> {
    log::debug!("user_stats v{} · input={}", crate::VERSION, config.input.display());

    let source = CsvRecordSource::new(&config.input).with_delimiter(config.delimiter);
    let presenter = presentation::presenter_for(config.format);
    let notifier = LogNotifier;
    let command = RunAnalysisCommand::new(&source, presenter.as_ref(), Some(&notifier));

    let report = match &config.output {
        Some(path) => {
            let mut buf = Vec::new();
            let report = command.execute(config.policy, &mut buf)?;
            FileWriter::atomic_write(path, &buf)
                .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
            log::info!("report written to {}", path.display());
            report
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let report = command.execute(config.policy, &mut out)?;
            out.flush()?;
            report
        }
    };

    Ok(report)
}
