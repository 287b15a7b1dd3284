use std::fs;

use tempfile::tempdir;
use tvqa_convert::subtitles::{build_subtitles, BuildSubtitles, SubtitleSummary};
use tvqa_convert::ErrorKind;

#[test]
fn writes_clip_copy_and_episode_map() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("subs.json");
    fs::write(
        &input,
        r#"{"bbt_s01e01_seg01_clip_10": "Ten.", "bbt_s01e01_seg01_clip_09": "Nine — ça va?",
            "house_s02e03_seg02_clip_00": "Everybody lies."}"#,
    )
    .unwrap();

    let job = BuildSubtitles {
        input,
        output_clip: dir.path().join("out/clip.json"),
        output_episode: dir.path().join("out/nested/episode.json"),
        episode_with_show_prefix: true,
    };
    let summary = build_subtitles(&job).unwrap();
    assert_eq!(summary, SubtitleSummary { clips: 3, episodes: 2 });

    let clip = fs::read_to_string(&job.output_clip).unwrap();
    assert_eq!(
        clip,
        "{\n  \"bbt_s01e01_seg01_clip_10\": \"Ten.\",\n  \
         \"bbt_s01e01_seg01_clip_09\": \"Nine — ça va?\",\n  \
         \"house_s02e03_seg02_clip_00\": \"Everybody lies.\"\n}\n"
    );

    let episode = fs::read_to_string(&job.output_episode).unwrap();
    assert_eq!(
        episode,
        "{\n  \"bbt_s01e01\": \"<seg01_clip_09> Nine — ça va? <seg01_clip_10> Ten.\",\n  \
         \"house_s02e03\": \"<seg02_clip_00> Everybody lies.\"\n}\n"
    );
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("subs.json");
    fs::write(
        &input,
        r#"{"s03e01_seg02_clip_01": "b", "s03e01_seg01_clip_05": "a", "s01e09_seg01_clip_01": "c"}"#,
    )
    .unwrap();

    let job = BuildSubtitles {
        input,
        output_clip: dir.path().join("clip.json"),
        output_episode: dir.path().join("episode.json"),
        episode_with_show_prefix: false,
    };
    build_subtitles(&job).unwrap();
    let first = fs::read(&job.output_episode).unwrap();
    build_subtitles(&job).unwrap();
    assert_eq!(fs::read(&job.output_episode).unwrap(), first);
}

#[test]
fn malformed_clip_key_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("subs.json");
    fs::write(
        &input,
        r#"{"s01e01_seg01_clip_01": "fine", "s01e01_seg01_01": "missing clip token"}"#,
    )
    .unwrap();

    let job = BuildSubtitles {
        input,
        output_clip: dir.path().join("out/clip.json"),
        output_episode: dir.path().join("out/episode.json"),
        episode_with_show_prefix: false,
    };
    let err = build_subtitles(&job).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("s01e01_seg01_01"));
    assert!(!job.output_clip.exists());
    assert!(!job.output_episode.exists());
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempdir().unwrap();
    let job = BuildSubtitles {
        input: dir.path().join("nope.json"),
        output_clip: dir.path().join("clip.json"),
        output_episode: dir.path().join("episode.json"),
        episode_with_show_prefix: false,
    };
    assert_eq!(build_subtitles(&job).unwrap_err().kind(), ErrorKind::Io);
}

#[test]
fn non_object_input_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("subs.json");
    fs::write(&input, r#"["s01e01_seg01_clip_01"]"#).unwrap();
    let job = BuildSubtitles {
        input,
        output_clip: dir.path().join("clip.json"),
        output_episode: dir.path().join("episode.json"),
        episode_with_show_prefix: false,
    };
    assert_eq!(build_subtitles(&job).unwrap_err().kind(), ErrorKind::Parse);
    assert!(!job.output_clip.exists());
}
