use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::genome::skew::SkewProfile;
use crate::motif::rank::MotifRanking;
use crate::pipeline::oric::{OriReport, WindowOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Write the ranking of one window, one tied motif per line
pub fn write_ranking<W: Write>(writer: &mut W, ranking: &MotifRanking) -> io::Result<()> {
    for motif in &ranking.motifs {
        writeln!(writer, "\t* {} [{} hits]", motif, ranking.score)?;
    }
    Ok(())
}

/// Human-readable report; locations are printed 1-based
pub fn write_text_report<W: Write>(writer: &mut W, report: &OriReport) -> io::Result<()> {
    if report.windows.is_empty() {
        writeln!(
            writer,
            "No C-anchored skew minimum found (minimum skew {})",
            report.minimum_skew
        )?;
    }
    for window in &report.windows {
        writeln!(
            writer,
            "Calculating frequent {}-mers around location {}:",
            report.config.k,
            window.location + 1
        )?;
        match &window.outcome {
            WindowOutcome::Ranked(ranking) => write_ranking(writer, ranking)?,
            WindowOutcome::Failed { error } => writeln!(writer, "\t! skipped: {}", error)?,
        }
    }
    Ok(())
}

pub fn write_json_report<W: Write>(writer: W, report: &OriReport) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

pub fn write_report<W: Write>(mut writer: W, report: &OriReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => write_text_report(&mut writer, report)?,
        ReportFormat::Json => {
            write_json_report(&mut writer, report)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Skew profile as `position\tskew`, positions 1-based
pub fn write_skew_tsv<W: Write>(writer: &mut W, profile: &SkewProfile) -> io::Result<()> {
    writeln!(writer, "position\tskew")?;
    for (i, value) in profile.values.iter().enumerate() {
        writeln!(writer, "{}\t{}", i + 1, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FinderConfig;
    use crate::genome::skew::skew_profile;
    use crate::pipeline::oric::WindowReport;

    fn sample_report() -> OriReport {
        OriReport {
            config: FinderConfig { k: 3, ..Default::default() },
            genome_length: 20,
            minimum_skew: -2,
            minimum_skew_locations: vec![12, 19],
            windows: vec![
                WindowReport {
                    location: 12,
                    window_start: Some(8),
                    outcome: WindowOutcome::Ranked(MotifRanking {
                        score: 6,
                        motifs: vec!["ACG".parse().unwrap(), "CGT".parse().unwrap()],
                        candidates: 4,
                    }),
                },
                WindowReport {
                    location: 19,
                    window_start: None,
                    outcome: WindowOutcome::Failed { error: "out of range".into() },
                },
            ],
        }
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        write_text_report(&mut out, &sample_report()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Calculating frequent 3-mers around location 13:\n\
             \t* ACG [6 hits]\n\
             \t* CGT [6 hits]\n\
             Calculating frequent 3-mers around location 20:\n\
             \t! skipped: out of range\n"
        );
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(), ReportFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["genome_length"], 20);
        assert_eq!(json["config"]["k"], 3);
        assert_eq!(json["windows"][0]["status"], "ranked");
        assert_eq!(json["windows"][0]["motifs"][1], "CGT");
        assert_eq!(json["windows"][1]["status"], "failed");
    }

    #[test]
    fn test_skew_tsv() {
        let profile = skew_profile(b"GCC").unwrap();
        let mut out = Vec::new();
        write_skew_tsv(&mut out, &profile).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "position\tskew\n1\t1\n2\t0\n3\t-1\n");
    }
}
