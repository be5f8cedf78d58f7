// Tests for the speaker-segment grouping transform
//
// These verify that diarized word sequences collapse into one segment per
// maximal run of equal consecutive speaker ids, with text space-joined and
// time spans taken from the first and last word of each run.

use warmly::transcribe::{group_by_speaker, TranscriptionResult, Word};

fn word(text: &str, start: f64, end: f64, speaker: u32) -> Word {
    Word {
        text: text.to_string(),
        start_time: start,
        end_time: end,
        speaker_id: speaker,
    }
}

#[test]
fn test_empty_word_list_yields_no_segments() {
    let segments = group_by_speaker(&[]);
    assert!(segments.is_empty());
}

#[test]
fn test_single_speaker_yields_one_segment() {
    let words = vec![
        word("so", 0.0, 0.4, 3),
        word("nice", 0.4, 0.8, 3),
        word("meeting", 0.8, 1.5, 3),
        word("you", 1.5, 1.9, 3),
    ];

    let segments = group_by_speaker(&words);

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].speaker_id, 3);
    assert_eq!(segments[0].text, "so nice meeting you");
    assert_eq!(segments[0].start_time, 0.0);
    assert_eq!(segments[0].end_time, 1.9);
}

#[test]
fn test_two_speakers_split_on_change() {
    // Worked example: hi/there by speaker 0, hey by speaker 1
    let words = vec![
        word("hi", 0.0, 1.0, 0),
        word("there", 1.0, 2.0, 0),
        word("hey", 2.0, 3.0, 1),
    ];

    let segments = group_by_speaker(&words);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].speaker_id, 0);
    assert_eq!(segments[0].text, "hi there");
    assert_eq!(segments[0].start_time, 0.0);
    assert_eq!(segments[0].end_time, 2.0);
    assert_eq!(segments[1].speaker_id, 1);
    assert_eq!(segments[1].text, "hey");
    assert_eq!(segments[1].start_time, 2.0);
    assert_eq!(segments[1].end_time, 3.0);
}

#[test]
fn test_segment_count_matches_speaker_runs() {
    // Speaker ids 0,0,1,1,1,0,2,2 -> four maximal runs
    let speakers = [0, 0, 1, 1, 1, 0, 2, 2];
    let words: Vec<Word> = speakers
        .iter()
        .enumerate()
        .map(|(i, &s)| word("w", i as f64, i as f64 + 1.0, s))
        .collect();

    let segments = group_by_speaker(&words);

    assert_eq!(segments.len(), 4);
    let run_speakers: Vec<u32> = segments.iter().map(|s| s.speaker_id).collect();
    assert_eq!(run_speakers, vec![0, 1, 0, 2]);
}

#[test]
fn test_returning_speaker_gets_a_new_segment() {
    let words = vec![
        word("one", 0.0, 0.5, 0),
        word("two", 0.5, 1.0, 1),
        word("three", 1.0, 1.5, 0),
    ];

    let segments = group_by_speaker(&words);

    // Speaker 0 appears twice but the runs are separate
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].text, "one");
    assert_eq!(segments[1].text, "two");
    assert_eq!(segments[2].text, "three");
}

#[test]
fn test_result_keeps_metadata_speaker_count() {
    let words = vec![word("hello", 0.0, 0.5, 0), word("world", 0.5, 1.0, 1)];

    // Provider metadata says 5 even though the words only show 2 speakers;
    // the metadata value wins
    let result = TranscriptionResult::new("hello world".to_string(), &words, 5);

    assert_eq!(result.speaker_count, 5);
    assert_eq!(result.segments.len(), 2);
}

#[test]
fn test_result_with_no_words() {
    let result = TranscriptionResult::new(String::new(), &[], 0);

    assert_eq!(result.full_text, "");
    assert!(result.segments.is_empty());
    assert_eq!(result.speaker_count, 0);
}

#[test]
fn test_segments_serialize_with_wire_names() {
    let words = vec![word("hi", 0.0, 1.0, 0)];
    let result = TranscriptionResult::new("hi".to_string(), &words, 1);

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["transcript"], "hi");
    assert_eq!(json["totalSpeakers"], 1);
    assert_eq!(json["speakerSegments"][0]["speaker"], 0);
    assert_eq!(json["speakerSegments"][0]["text"], "hi");
    assert_eq!(json["speakerSegments"][0]["start"], 0.0);
    assert_eq!(json["speakerSegments"][0]["end"], 1.0);
}
