//! Clip-level subtitles folded into one text per episode.

use std::collections::HashMap;
use std::path::PathBuf;

use log::info;
use serde_json::{Map, Value};

use crate::clip_key::ClipKey;
use crate::error::{ConvertError, Result};
use crate::output::{read_json, write_pretty_json};

/// Clip key string to subtitle text, in input order.
pub type ClipSubtitles = Map<String, Value>;

/// Episode key to concatenated subtitle text, in first-seen order.
pub type EpisodeSubtitles = Map<String, Value>;

/// Group clip subtitles by episode and join them in `(segment, clip)` order.
///
/// Each clip becomes `"<segSS_clip_CC> text"`; fragments are joined with one
/// space. Clips with equal positions keep their input order. A single bad
/// clip key fails the whole call.
pub fn build_episode_subtitles<'a, I>(clips: I, include_show_prefix: bool) -> Result<EpisodeSubtitles>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<(ClipKey, &'a str)>)> = Vec::new();

    for (clip_name, text) in clips {
        let clip: ClipKey = clip_name.parse()?;
        let episode = clip.episode_key(include_show_prefix);
        let slot = *slots.entry(episode.clone()).or_insert_with(|| {
            groups.push((episode, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push((clip, text));
    }

    let mut episodes = EpisodeSubtitles::new();
    for (episode, mut entries) in groups {
        entries.sort_by_key(|(clip, _)| (clip.segment, clip.clip));
        let joined = entries
            .iter()
            .map(|(clip, text)| format!("{} {}", clip.marker(), text))
            .collect::<Vec<_>>()
            .join(" ");
        episodes.insert(episode, Value::String(joined));
    }
    Ok(episodes)
}

/// Borrow the subtitle map as `(clip key, text)` pairs, rejecting non-string text.
pub fn subtitle_pairs(clips: &ClipSubtitles) -> Result<Vec<(&str, &str)>> {
    clips
        .iter()
        .map(|(name, text)| match text.as_str() {
            Some(text) => Ok((name.as_str(), text)),
            None => Err(ConvertError::SubtitleText(name.clone())),
        })
        .collect()
}

/// Inputs of one subtitle-builder run.
#[derive(Debug, Clone)]
pub struct BuildSubtitles {
    pub input: PathBuf,
    pub output_clip: PathBuf,
    pub output_episode: PathBuf,
    pub episode_with_show_prefix: bool,
}

/// What a finished subtitle-builder run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleSummary {
    pub clips: usize,
    pub episodes: usize,
}

/// Read the clip map, aggregate it, then write the clip copy and the episode map.
///
/// Nothing is written unless aggregation succeeds.
pub fn build_subtitles(job: &BuildSubtitles) -> Result<SubtitleSummary> {
    let clips: ClipSubtitles = read_json(&job.input)?;
    info!("Loaded {} clip subtitles from {:?}", clips.len(), job.input);

    let episodes =
        build_episode_subtitles(subtitle_pairs(&clips)?, job.episode_with_show_prefix)?;
    info!("Aggregated into {} episodes", episodes.len());

    write_pretty_json(&job.output_clip, &clips)?;
    info!("Wrote clip subtitles → {:?}", job.output_clip);
    write_pretty_json(&job.output_episode, &episodes)?;
    info!("Wrote episode subtitles → {:?}", job.output_episode);

    Ok(SubtitleSummary {
        clips: clips.len(),
        episodes: episodes.len(),
    })
}
