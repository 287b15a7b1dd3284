//! Clip identifiers such as `bbt_s01e02_seg02_clip_09`.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ConvertError;

static VID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?P<show>[a-z0-9]+)_)?s(?P<season>[0-9]{2})e(?P<episode>[0-9]{2})_seg(?P<seg>[0-9]{2})_clip_(?P<clip>[0-9]{2})$",
    )
    .expect("clip key pattern is valid")
});

/// Structured fields of one clip identifier.
///
/// Season and episode keep the matched digits verbatim so leading zeros
/// survive; segment and clip are numeric because they drive ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipKey {
    pub show_prefix: Option<String>,
    pub season: String,
    pub episode: String,
    pub segment: u32,
    pub clip: u32,
}

impl ClipKey {
    /// Key shared by every clip of the same episode.
    pub fn episode_key(&self, include_show_prefix: bool) -> String {
        match (&self.show_prefix, include_show_prefix) {
            (Some(show), true) => format!("{show}_s{}e{}", self.season, self.episode),
            _ => format!("s{}e{}", self.season, self.episode),
        }
    }

    /// Tag placed in front of the clip's text inside episode-level subtitles.
    pub fn marker(&self) -> String {
        format!("<seg{:02}_clip_{:02}>", self.segment, self.clip)
    }
}

impl FromStr for ClipKey {
    type Err = ConvertError;

    fn from_str(vid_name: &str) -> Result<Self, Self::Err> {
        let bad = || ConvertError::ClipKey(vid_name.to_owned());
        let caps = VID_PATTERN.captures(vid_name).ok_or_else(bad)?;

        // two ASCII digits always fit, the map_err only guards the types
        let segment = caps["seg"].parse().map_err(|_| bad())?;
        let clip = caps["clip"].parse().map_err(|_| bad())?;

        Ok(ClipKey {
            show_prefix: caps.name("show").map(|m| m.as_str().to_owned()),
            season: caps["season"].to_owned(),
            episode: caps["episode"].to_owned(),
            segment,
            clip,
        })
    }
}

impl fmt::Display for ClipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(show) = &self.show_prefix {
            write!(f, "{show}_")?;
        }
        write!(
            f,
            "s{}e{}_seg{:02}_clip_{:02}",
            self.season, self.episode, self.segment, self.clip
        )
    }
}
