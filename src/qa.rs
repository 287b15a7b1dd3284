//! TVQA question records converted to the episode-aware schema.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clip_key::ClipKey;
use crate::error::{ConvertError, Result};
use crate::jsonl::JsonlSource;
use crate::output::write_pretty_json;

/// One line of the TVQA JSONL files.
///
/// Only `vid_name` and `ts` are interpreted; the other fields are copied as
/// whatever JSON they hold.
#[derive(Debug, Clone, Deserialize)]
pub struct QaRecord {
    pub vid_name: String,
    pub qid: Value,
    pub q: Value,
    pub a0: Value,
    pub a1: Value,
    pub a2: Value,
    pub a3: Value,
    pub a4: Value,
    pub ts: String,
    #[serde(default)]
    pub answer_idx: Option<i64>,
    #[serde(default)]
    pub show_name: Option<Value>,
}

/// Output record. `answer` is left out entirely for unlabeled questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedQa {
    pub qid: Value,
    pub q: Value,
    pub a0: Value,
    pub a1: Value,
    pub a2: Value,
    pub a3: Value,
    pub a4: Value,
    pub ts: [f64; 2],
    pub episode_name: String,
    pub occur_clip: String,
    pub show_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Parse `"start-end"` into seconds.
///
/// Splits once, at the first dash; whatever follows is parsed as the end.
pub fn parse_timestamp(ts: &str) -> Result<[f64; 2]> {
    let bad = || ConvertError::Timestamp(ts.to_owned());
    let (start, end) = ts.split_once('-').ok_or_else(bad)?;
    let start: f64 = start.trim().parse().map_err(|_| bad())?;
    let end: f64 = end.trim().parse().map_err(|_| bad())?;
    if !start.is_finite() || !end.is_finite() {
        return Err(bad());
    }
    Ok([start, end])
}

pub fn convert_record(record: QaRecord, include_show_prefix: bool) -> Result<ConvertedQa> {
    let clip: ClipKey = record.vid_name.parse()?;
    let ts = parse_timestamp(&record.ts)?;

    Ok(ConvertedQa {
        qid: record.qid,
        q: record.q,
        a0: record.a0,
        a1: record.a1,
        a2: record.a2,
        a3: record.a3,
        a4: record.a4,
        ts,
        episode_name: clip.episode_key(include_show_prefix),
        occur_clip: record.vid_name,
        show_name: record.show_name,
        answer: record.answer_idx.map(|idx| format!("a{idx}")),
    })
}

/// Inputs of one QA conversion run.
#[derive(Debug, Clone)]
pub struct ConvertQa {
    pub input: PathBuf,
    pub output: PathBuf,
    pub episode_with_show_prefix: bool,
}

/// What a finished QA conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaSummary {
    pub records: usize,
    pub answered: usize,
}

/// Convert every record of `job.input` and write them as one JSON array.
///
/// The output file is written only once every record has converted.
pub fn convert_qa(job: &ConvertQa) -> Result<QaSummary> {
    let records: Vec<QaRecord> = JsonlSource::new(&job.input).load()?;
    info!("Loaded {} QA records from {:?}", records.len(), job.input);

    let bar = ProgressBar::new(records.len() as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut converted = Vec::with_capacity(records.len());
    for record in records {
        converted.push(convert_record(record, job.episode_with_show_prefix)?);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let answered = converted.iter().filter(|r| r.answer.is_some()).count();
    write_pretty_json(&job.output, &converted)?;
    info!("Wrote {} records → {:?}", converted.len(), job.output);

    Ok(QaSummary {
        records: converted.len(),
        answered,
    })
}
