//! End-to-end tests for the editing workflow
//!
//! Drives the public API the way the host application does: load cues
//! from the backend, hand-edit, filter, bulk replace, read derived
//! state, and export.

use pretty_assertions::assert_eq;
use std::sync::Arc;
use subcue_editor::{
    compile_matcher, export_units, filter_cues, reconstruct_current, reconstruct_original,
    CueExporter, CueStore, RawCue, ReplaceAllCommand, ScrubFillerWordsCommand, SearchOptions,
    SegmentKind, SrtExporter, StoreCommand, StoreEvent,
};

fn backend_payload() -> Vec<RawCue> {
    vec![
        RawCue::new(1, "01:00:00:00", "01:00:02:00", "Hello world"),
        RawCue::new(2, "01:00:02:00", "01:00:04:12", "a test case"),
        RawCue::new(3, "01:00:04:12", "01:00:06:00", "no match here"),
    ]
}

#[test]
fn edit_session_from_load_to_export() {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut store = CueStore::with_event_channel(tx);

    // Load: originals become baselines, nothing is modified.
    store.load_all(backend_payload());
    assert!(store.modified_indices().is_empty());

    // Hand edit of one cue.
    store.update_text(1, "Hello brave world");
    assert_eq!(store.modified_indices(), vec![0]);

    let cue = store.get(1).unwrap();
    let inserted: Vec<_> = cue
        .segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Inserted)
        .collect();
    assert_eq!(inserted.len(), 1);
    assert!(inserted[0].value.contains("brave"));

    // Bulk replace touches only the matching cue.
    let untouched = Arc::clone(store.get(3).unwrap());
    let outcome = ReplaceAllCommand::new("test", "REPLACED", SearchOptions::default())
        .execute(&mut store)
        .unwrap();
    assert_eq!(outcome.changed, 1);
    assert_eq!(store.get(2).unwrap().text, "a REPLACED case");
    assert!(Arc::ptr_eq(&untouched, store.get(3).unwrap()));
    assert_eq!(store.modified_indices(), vec![0, 1]);

    // Export carries diff segments; SRT output is built from them.
    let units = export_units(&store);
    assert_eq!(units.len(), 3);
    assert_eq!(units[1].exported_text(), "a REPLACED case");

    let exporter = SrtExporter::new(24).with_base_timecode("01:00:00:00").unwrap();
    let (srt, summary) = exporter.export_to_string(&units).unwrap();
    assert_eq!(summary.exported, 3);
    assert!(srt.starts_with("1\n00:00:00,000 --> 00:00:02,000\nHello brave world"));
    assert!(srt.contains("00:00:04,500"));

    // The whole session produced exactly these notifications.
    let events: Vec<StoreEvent> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![
            StoreEvent::Loaded { count: 3 },
            StoreEvent::TextUpdated { id: 1 },
            StoreEvent::BulkReplaced { changed: 1 },
        ]
    );
}

#[test]
fn filtering_drives_the_search_surface() {
    let mut store = CueStore::new();
    store.load_all(backend_payload());

    // Idle state: no query, everything shows.
    let all = filter_cues(store.cues(), None);
    assert_eq!(all.len(), 3);

    // Filtering state: live query narrows the table.
    let matcher = compile_matcher("case", &SearchOptions::default());
    let filtered = filter_cues(store.cues(), matcher.as_ref());
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);

    // Filter runs against the live text, not the baseline.
    store.update_text(3, "an extra case");
    let filtered = filter_cues(store.cues(), matcher.as_ref());
    let ids: Vec<u32> = filtered.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn invalid_regex_degrades_across_the_whole_surface() {
    let mut store = CueStore::new();
    store.load_all(backend_payload());
    let before: Vec<Arc<_>> = store.cues().to_vec();

    let options = SearchOptions::default().use_regex(true);
    let matcher = compile_matcher("test(", &options);
    assert!(matcher.is_none());

    // Filtering falls back to the unfiltered collection.
    assert_eq!(filter_cues(store.cues(), matcher.as_ref()).len(), 3);

    // Replacing performs no mutation.
    let outcome = ReplaceAllCommand::new("test(", "x", options)
        .execute(&mut store)
        .unwrap();
    assert!(!outcome.content_changed);
    for (kept, original) in store.cues().iter().zip(&before) {
        assert!(Arc::ptr_eq(kept, original));
    }
}

#[test]
fn reload_resets_the_session_baseline() {
    let mut store = CueStore::new();
    store.load_all(backend_payload());
    store.update_text(1, "edited once");
    ReplaceAllCommand::new("case", "box", SearchOptions::default())
        .execute(&mut store)
        .unwrap();
    assert_eq!(store.modified_indices(), vec![0, 1]);

    // A fresh load replaces everything, edits and all.
    store.load_all(backend_payload());
    assert!(store.modified_indices().is_empty());
    assert_eq!(store.get(1).unwrap().text, "Hello world");
}

#[test]
fn scrub_then_replace_keeps_diffing_against_the_load_baseline() {
    let mut store = CueStore::new();
    store.load_all(vec![RawCue::new(
        1,
        "00:00:00:00",
        "00:00:02:00",
        "um, this is, um, the take",
    )]);

    ScrubFillerWordsCommand::new(vec!["um, ".to_string()])
        .execute(&mut store)
        .unwrap();
    assert_eq!(store.get(1).unwrap().text, "this is, the take");

    ReplaceAllCommand::new("take", "shot", SearchOptions::default())
        .execute(&mut store)
        .unwrap();

    let cue = store.get(1).unwrap();
    assert_eq!(cue.text, "this is, the shot");
    assert_eq!(cue.original_text, "um, this is, um, the take");
    assert_eq!(reconstruct_current(&cue.segments), "this is, the shot");
    assert_eq!(reconstruct_original(&cue.segments), "um, this is, um, the take");
}
