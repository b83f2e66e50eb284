//! Command implementations for the winnower CLI.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::analysis::token_filter::stop::DEFAULT_KOREAN_STOP_WORDS_SET;
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::cli::args::*;
use crate::corpus::{Corpus, Document};
use crate::error::{Result, WinnowerError};
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::prune::DocumentFrequencyPruner;

/// Execute a CLI command.
pub fn execute_command(args: WinnowerArgs) -> Result<()> {
    match &args.command {
        Command::Process(process_args) => process(process_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Preprocess a JSONL corpus and re-emit each record with the processed
/// text attached under a new field. Existing fields are never touched.
fn process(args: ProcessArgs, cli_args: &WinnowerArgs) -> Result<()> {
    let records = read_records(&args.input)?;
    let corpus = corpus_from_records(&records, &args.filter.text_field);

    let config = build_config(
        &args.filter,
        args.min_doc_frequency,
        args.max_doc_frequency_ratio,
    )?;
    let pipeline = build_pipeline(config, args.filter.threads)?;

    let output = pipeline.run(&corpus)?;
    for (index, error) in output.errors.iter().enumerate() {
        if let Some(error) = error {
            eprintln!("document {index}: {error}");
        }
    }

    let document_count = output.texts.len();
    let error_count = output.error_count();

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    for (mut record, text) in records.into_iter().zip(output.texts) {
        record.insert(args.output_field.clone(), Value::String(text));
        serde_json::to_writer(&mut writer, &Value::Object(record))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    if cli_args.verbosity() > 0 {
        eprintln!("Processed {document_count} documents ({error_count} errors)");
    }

    Ok(())
}

/// Run stage 1 only and print the document-frequency table, most frequent
/// forms first. Useful for picking frequency-band bounds before a real run.
fn stats(args: StatsArgs, cli_args: &WinnowerArgs) -> Result<()> {
    let records = read_records(&args.input)?;
    let corpus = corpus_from_records(&records, &args.filter.text_field);

    // Band bounds are irrelevant for counting; use the no-op band.
    let config = build_config(&args.filter, 1, 1.0)?;
    let pipeline = build_pipeline(config, args.filter.threads)?;

    let (per_doc, errors) = pipeline.analyze_documents(&corpus);
    for (index, error) in errors.iter().enumerate() {
        if let Some(error) = error {
            eprintln!("document {index}: {error}");
        }
    }

    let frequencies = DocumentFrequencyPruner::document_frequencies(&per_doc);
    let mut table: Vec<(String, usize)> = frequencies.into_iter().collect();
    table.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    if let Some(top) = args.top {
        table.truncate(top);
    }

    let mut stdout = io::stdout().lock();
    for (form, doc_frequency) in &table {
        let row = serde_json::json!({ "form": form, "doc_frequency": doc_frequency });
        serde_json::to_writer(&mut stdout, &row)?;
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    if cli_args.verbosity() > 0 {
        eprintln!(
            "{} distinct forms across {} documents",
            table.len(),
            corpus.len()
        );
    }

    Ok(())
}

/// Read a JSONL file into one map per line. Blank lines are skipped.
fn read_records(path: &Path) -> Result<Vec<Map<String, Value>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)?;
        match value {
            Value::Object(map) => records.push(map),
            _ => {
                return Err(WinnowerError::other(format!(
                    "line {}: expected a JSON object",
                    line_number + 1
                )));
            }
        }
    }
    Ok(records)
}

/// Build the corpus from the configured text field. A missing or non-string
/// field becomes a document with no text, which processes to "".
fn corpus_from_records(records: &[Map<String, Value>], text_field: &str) -> Corpus {
    records
        .iter()
        .map(|record| match record.get(text_field) {
            Some(Value::String(text)) => Document::new(text.clone()),
            _ => Document::empty(),
        })
        .collect()
}

fn build_config(
    filter: &FilterOptions,
    min_doc_frequency: usize,
    max_doc_frequency_ratio: f64,
) -> Result<PipelineConfig> {
    let stopwords = match &filter.stopwords {
        Some(path) => load_stopwords(path)?,
        None => DEFAULT_KOREAN_STOP_WORDS_SET.clone(),
    };

    Ok(PipelineConfig {
        allowed_tags: filter.tags.iter().cloned().collect(),
        stopwords,
        min_token_length: filter.min_token_length,
        exclude_numeric: !filter.keep_numeric,
        min_doc_frequency,
        max_doc_frequency_ratio,
    })
}

fn build_pipeline(config: PipelineConfig, threads: Option<usize>) -> Result<Pipeline> {
    let tokenizer = Arc::new(WhitespaceTokenizer::new());
    match threads {
        Some(threads) => Pipeline::with_thread_count(config, tokenizer, threads),
        None => Pipeline::new(config, tokenizer),
    }
}

/// Load a newline-delimited stopword file, skipping blanks and `#` comments.
fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.insert(word.to_string());
    }
    Ok(words)
}
