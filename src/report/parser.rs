//! Core report parser implementation
//!
//! Orchestrates the parse: reads the report, classifies each line, and
//! drives the table accumulator. Each call owns its own accumulator and
//! model, so separate parses may run on separate threads freely.

use std::path::Path;

use tracing::{debug, info};

use super::accumulator::{SealOutcome, TableAccumulator};
use super::classifier::{LineClass, LineClassifier};
use super::stats::{ParseResult, ParseStats};
use super::tokens::{parse_row, tokenize};
use crate::constants::{HEADER_TEXT_TERMINATOR, SUPPRESSED_HEADER_INTRODUCER};
use crate::model::ReportModel;
use crate::{Result, XTurbError};

/// Parser for XTurb output reports.
///
/// Stateless between calls; the classification policy is the only
/// configuration. Failure to open the file is the only error the parse
/// can return — all malformed content degrades to a smaller model.
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    classifier: LineClassifier,
}

impl ReportParser {
    /// Parser with the standard XTurb classification policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with an injected classification policy.
    pub fn with_classifier(classifier: LineClassifier) -> Self {
        Self { classifier }
    }

    /// Parse a report file, returning the model and parse statistics.
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing report file: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| XTurbError::file_not_found(path, e))?;

        let result = self.parse_str(&content);
        info!(
            "Parsed {} with {} tables, {} scalars ({} rows accepted, {} dropped)",
            path.display(),
            result.model.table_count(),
            result.model.scalars.len(),
            result.stats.rows_accepted,
            result.stats.rows_dropped
        );
        Ok(result)
    }

    /// Parse a report file, returning only the model.
    pub fn parse(&self, path: &Path) -> Result<ReportModel> {
        self.parse_file(path).map(|result| result.model)
    }

    /// Parse report content already in memory. Cannot fail: with the
    /// file open out of the picture, every problem is absorbed locally.
    pub fn parse_str(&self, content: &str) -> ParseResult {
        let mut model = ReportModel::new();
        let mut stats = ParseStats::new();
        let mut accumulator = TableAccumulator::new();

        // `lines()` splits on `\n` and strips a trailing `\r`, so CRLF
        // and LF reports read identically.
        for raw_line in content.lines() {
            stats.lines_read += 1;
            self.process_line(raw_line, &mut model, &mut stats, &mut accumulator);
        }

        // A report may end without a trailing banner.
        record_seal(accumulator.finish(&mut model), &mut stats, "at end of input");

        ParseResult { model, stats }
    }

    fn process_line(
        &self,
        raw_line: &str,
        model: &mut ReportModel,
        stats: &mut ParseStats,
        accumulator: &mut TableAccumulator,
    ) {
        let line = raw_line.trim();
        let class = self.classifier.classify(
            line,
            accumulator.in_table_section(),
            accumulator.has_headers(),
        );

        match class {
            LineClass::Empty => {
                append_header_text(model, raw_line);
            }
            LineClass::Delimiter => {
                let outcome = accumulator.on_delimiter(model);
                record_seal(outcome, stats, "at section boundary");
                append_header_text(model, raw_line);
            }
            LineClass::Header => {
                let header_tokens = tokenize(line);
                // The spanwise table's own banner would duplicate the
                // most prominent plot title in the display, so that one
                // header line stays out of the text blob.
                if header_tokens.first() != Some(&SUPPRESSED_HEADER_INTRODUCER) {
                    append_header_text(model, raw_line);
                }
                accumulator.set_headers(&header_tokens);
            }
            LineClass::Row => {
                let expected = accumulator.header_count();
                let values = parse_row(line);
                stats.invalid_tokens += values.iter().filter(|v| v.is_nan()).count();
                let got = values.len();
                if accumulator.push_row(values) {
                    stats.rows_accepted += 1;
                } else {
                    stats.rows_dropped += 1;
                    stats.errors.push(format!(
                        "Line {}: row with {} values does not match {} columns",
                        stats.lines_read, got, expected
                    ));
                }
            }
            LineClass::Scalar { key, value } => {
                debug!("Scalar: {} = {}", key, value);
                model.scalars.insert(key.to_string(), value.to_string());
                stats.scalars_parsed += 1;
                append_header_text(model, raw_line);
            }
            LineClass::Prose => {
                append_header_text(model, raw_line);
            }
            LineClass::Stray => {
                debug!("Line inside table section before headers ignored: {}", line);
            }
        }
    }
}

fn record_seal(outcome: SealOutcome, stats: &mut ParseStats, context: &str) {
    match outcome {
        SealOutcome::Sealed => stats.tables_sealed += 1,
        SealOutcome::Discarded => {
            stats.tables_discarded += 1;
            stats
                .errors
                .push(format!("Table with headers but no rows discarded {context}"));
        }
        SealOutcome::Nothing => {}
    }
}

/// Append a line to the display text blob, verbatim plus terminator.
fn append_header_text(model: &mut ReportModel, raw_line: &str) {
    model.header_text.push_str(raw_line);
    model.header_text.push_str(HEADER_TEXT_TERMINATOR);
}
