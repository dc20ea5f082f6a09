// src/presentation.rs
use std::io::Write;

use user_stats_shared_kernel::Result;
use user_stats_usecase::{AnalysisReport, SummaryPresenter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    Md,
}

pub fn presenter_for(format: OutputFormat) -> Box<dyn SummaryPresenter> {
    match format {
        OutputFormat::Text => Box::new(TextPresenter),
        OutputFormat::Json => Box::new(JsonPresenter),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => Box::new(YamlPresenter),
        OutputFormat::Md => Box::new(MarkdownPresenter),
    }
}

/// コンソール向けの行形式。
pub struct TextPresenter;

impl SummaryPresenter for TextPresenter {
    fn present(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<()> {
        let summary = &report.summary;
        writeln!(out, "Number of Active Users: {}", summary.active_count())?;
        writeln!(out, "Percentage of Females: {:.2}%", summary.female_percentage())?;
        writeln!(out, "Users Count per Age Group:")?;
        for (bracket, count) in summary.age_group_counts().iter() {
            writeln!(out, "{bracket}: {count}")?;
        }
        Ok(())
    }
}

pub struct JsonPresenter;

impl SummaryPresenter for JsonPresenter {
    fn present(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(feature = "yaml")]
pub struct YamlPresenter;

#[cfg(feature = "yaml")]
impl SummaryPresenter for YamlPresenter {
    fn present(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<()> {
        serde_yaml::to_writer(&mut *out, report)?;
        Ok(())
    }
}

pub struct MarkdownPresenter;

impl SummaryPresenter for MarkdownPresenter {
    fn present(&self, report: &AnalysisReport, out: &mut dyn Write) -> Result<()> {
        let summary = &report.summary;
        writeln!(out, "### User Statistics")?;
        writeln!(out)?;
        writeln!(out, "- Active Users: {}", summary.active_count())?;
        writeln!(out, "- Percentage of Females: {:.2}%", summary.female_percentage())?;
        if report.skipped > 0 {
            writeln!(out, "- Skipped Rows: {}", report.skipped)?;
        }
        writeln!(out)?;
        writeln!(out, "| Age Group | Users |")?;
        writeln!(out, "|:---|---:|")?;
        for (bracket, count) in summary.age_group_counts().iter() {
            writeln!(out, "| {bracket} | {count} |")?;
        }
        Ok(())
    }
}
