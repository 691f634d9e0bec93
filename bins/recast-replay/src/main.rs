mod sink;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use clap::Parser;

use recast_api::ChangeRecord;
use recast_engine::{ConversionStats, EngineError, RecastConfig, RecordConverter};

#[derive(Parser)]
#[command(name = "recast-replay", about = "Replay captured change records through a field converter")]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(long, default_value = "recast.toml", env = "RECAST_CONFIG")]
    config: String,

    /// JSON-lines file of change records; `-` reads stdin.
    #[arg(long, default_value = "-")]
    input: String,

    /// Where converted records go; `-` writes stdout.
    #[arg(long, default_value = "-")]
    output: String,

    /// Override the configured source name.
    #[arg(long, env = "RECAST_SOURCE")]
    source: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("line {line}: {source}")]
    Line { line: usize, source: EngineError },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn open_input(path: &str) -> io::Result<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn open_output(path: &str) -> io::Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout().lock())))
    } else {
        Ok(Box::new(BufWriter::new(File::create(path)?)))
    }
}

/// Reports each multiple of `interval` once, however many input lines
/// pass while the record count stands still.
struct Progress {
    interval: u64,
    last_logged: u64,
}

impl Progress {
    fn new(interval: u64) -> Self {
        Self {
            interval,
            last_logged: 0,
        }
    }

    fn due(&mut self, records: u64) -> Option<u64> {
        if self.interval == 0 || records == self.last_logged || records % self.interval != 0 {
            return None;
        }
        self.last_logged = records;
        Some(records)
    }
}

fn replay(
    converter: &mut RecordConverter,
    input: impl BufRead,
    output: &mut dyn Write,
    progress_interval: u64,
) -> Result<ConversionStats, ReplayError> {
    let mut progress = Progress::new(progress_interval);
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: ChangeRecord = serde_json::from_str(&line).map_err(|e| ReplayError::Line {
            line: line_no,
            source: e.into(),
        })?;
        let converted = converter
            .convert(&record)
            .map_err(|source| ReplayError::Line { line: line_no, source })?;
        if let Some(converted) = converted {
            sink::write_record(output, &converted)?;
        }

        if let Some(records) = progress.due(converter.stats().records) {
            tracing::info!(records, line = line_no, "replay progress");
        }
    }
    output.flush()?;
    Ok(converter.stats())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    tracing::info!(config = %cli.config, "loading configuration");
    let mut config = match RecastConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            std::process::exit(1);
        }
    };
    if let Some(source) = cli.source {
        config.source = source;
    }

    let mut converter = match RecordConverter::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(source = %config.source, error = %e, "failed to set up converter");
            std::process::exit(1);
        }
    };

    let (input, mut output) = match open_input(&cli.input).and_then(|i| Ok((i, open_output(&cli.output)?))) {
        Ok(io) => io,
        Err(e) => {
            tracing::error!(input = %cli.input, output = %cli.output, error = %e, "failed to open streams");
            std::process::exit(1);
        }
    };

    match replay(&mut converter, input, &mut output, config.progress_interval) {
        Ok(stats) => tracing::info!(
            records = stats.records,
            fields = stats.fields,
            failed_fields = stats.failed_fields,
            skipped_records = stats.skipped_records,
            "replay finished"
        ),
        Err(e) => {
            let stats = converter.stats();
            tracing::error!(error = %e, records = stats.records, "replay failed");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use recast_engine::FieldErrorPolicy;

    use super::*;

    fn run(source: &str, policy: FieldErrorPolicy, input: &str) -> (Result<ConversionStats, ReplayError>, String) {
        let converter = recast_engine::converter_for(source).unwrap();
        let mut converter = RecordConverter::new(converter, policy);
        let mut out = Vec::new();
        let result = replay(&mut converter, input.as_bytes(), &mut out, 0);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_replay_writes_one_line_per_record() {
        let input = concat!(
            r#"{"operation":"INSERT","source_timestamp":1,"fields":[{"type_code":1700,"value":{"Decimal":"1.50"}}]}"#,
            "\n\n",
            r#"{"operation":"COMMIT","source_timestamp":1}"#,
            "\n",
        );
        let (result, out) = run("pg", FieldErrorPolicy::Abort, input);
        let stats = result.unwrap();
        assert_eq!(stats.records, 2);

        let lines: Vec<serde_json::Value> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["fields"][0]["value"], "1.50");
        assert_eq!(lines[1]["operation"], "COMMIT");
    }

    #[test]
    fn test_progress_fires_once_per_multiple() {
        let mut progress = Progress::new(2);
        let seen: Vec<_> = [0, 1, 2, 2, 2, 3, 4, 4]
            .into_iter()
            .filter_map(|records| progress.due(records))
            .collect();
        assert_eq!(seen, [2, 4]);

        let mut disabled = Progress::new(0);
        assert_eq!(disabled.due(10), None);
    }

    #[test]
    fn test_filtered_lines_keep_stats_steady() {
        let input = concat!(
            r#"{"operation":"BEGIN","source_timestamp":50}"#,
            "\n",
            r#"{"operation":"BEGIN","source_timestamp":1}"#,
            "\n",
            r#"{"operation":"COMMIT","source_timestamp":2}"#,
            "\n",
        );
        let converter = recast_engine::converter_for("mysql").unwrap();
        let mut converter = RecordConverter::new(converter, FieldErrorPolicy::Abort).with_start_timestamp(Some(10));
        let mut out = Vec::new();
        let stats = replay(&mut converter, input.as_bytes(), &mut out, 1).unwrap();
        assert_eq!(stats.records, 1);
        assert_eq!(stats.skipped_records, 2);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn test_bad_json_reports_line() {
        let input = "\n{not json}\n";
        let (result, _) = run("oracle", FieldErrorPolicy::Abort, input);
        match result {
            Err(ReplayError::Line { line, source: EngineError::Json(_) }) => assert_eq!(line, 2),
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn test_field_error_reports_line() {
        let input = r#"{"operation":"DELETE","source_timestamp":1,"fields":[{"type_code":0,"value":{"TextObject":"x"}}]}"#;
        let (result, _) = run("oracle", FieldErrorPolicy::Abort, input);
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "line 1: field #0: oracle: unknown field type code 0");
    }
}
