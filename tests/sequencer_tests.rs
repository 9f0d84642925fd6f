// Host-side tests for caption sequencing.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::sequencer::{CaptionSequencer, CaptionStyle};

fn settle(seq: &mut CaptionSequencer) {
    for _ in 0..30 {
        seq.tick(0.1);
    }
}

#[test]
fn first_caption_fades_in_on_start() {
    let mut seq = CaptionSequencer::new(4);
    assert_eq!(seq.current_index(), 0);
    assert_eq!(seq.styles()[0], CaptionStyle::HIDDEN);
    seq.tick(0.4);
    let mid = seq.styles()[0];
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    seq.tick(1.0);
    assert_eq!(seq.styles()[0].opacity, 1.0);
    assert_eq!(seq.styles()[0].offset_y, 0.0);
    for s in &seq.styles()[1..] {
        assert_eq!(*s, CaptionStyle::HIDDEN);
    }
}

#[test]
fn switch_to_current_is_ignored() {
    let mut seq = CaptionSequencer::new(3);
    assert!(!seq.switch_text(0));
    assert!(!seq.is_busy());
}

#[test]
fn out_of_range_switch_is_ignored() {
    let mut seq = CaptionSequencer::new(3);
    assert!(!seq.switch_text(3));
    assert!(!seq.is_busy());
}

#[test]
fn first_accepted_switch_wins() {
    let mut seq = CaptionSequencer::new(4);
    settle(&mut seq);
    assert!(seq.switch_text(2));
    assert!(!seq.switch_text(3));
    assert!(seq.is_busy());
    settle(&mut seq);
    assert_eq!(seq.current_index(), 2);
    assert!(!seq.is_busy());
    assert_eq!(seq.styles()[2].opacity, 1.0);
    assert_eq!(seq.styles()[3], CaptionStyle::HIDDEN);
}

#[test]
fn fade_out_then_fade_in() {
    let mut seq = CaptionSequencer::new(2);
    settle(&mut seq);
    assert!(seq.switch_text(1));

    // Midway through the fade-out: caption 0 dims and rises, caption 1 still hidden.
    seq.tick(0.25);
    let out = seq.styles()[0];
    assert!(out.opacity < 1.0 && out.opacity > 0.0);
    assert!(out.offset_y < 0.0);
    assert_eq!(seq.styles()[1], CaptionStyle::HIDDEN);

    // Fade-out done (0.5 s): caption 0 has left, caption 1 starts to appear.
    seq.tick(0.35);
    assert_eq!(seq.styles()[0].opacity, 0.0);
    assert_eq!(seq.styles()[0].offset_y, -30.0);
    assert!(seq.styles()[1].opacity > 0.0);
    assert!(seq.is_busy());
    assert_eq!(seq.current_index(), 0);

    seq.tick(1.0);
    assert_eq!(seq.current_index(), 1);
    assert!(!seq.is_busy());
    assert_eq!(seq.styles()[1].opacity, 1.0);
}

#[test]
fn switch_during_intro_starts_from_partial_style() {
    let mut seq = CaptionSequencer::new(2);
    seq.tick(0.2);
    let partial = seq.styles()[0].opacity;
    assert!(seq.switch_text(1));
    seq.tick(0.01);
    assert!(seq.styles()[0].opacity <= partial);
    settle(&mut seq);
    assert_eq!(seq.current_index(), 1);
    assert_eq!(seq.styles()[0].opacity, 0.0);
}

#[test]
fn switch_back_after_settling() {
    let mut seq = CaptionSequencer::new(3);
    settle(&mut seq);
    assert!(seq.switch_text(2));
    settle(&mut seq);
    assert!(seq.switch_text(0));
    settle(&mut seq);
    assert_eq!(seq.current_index(), 0);
    assert_eq!(seq.styles()[0].opacity, 1.0);
    assert_eq!(seq.styles()[2].opacity, 0.0);
}

#[test]
fn empty_sequencer_does_nothing() {
    let mut seq = CaptionSequencer::new(0);
    assert!(seq.is_empty());
    assert!(!seq.switch_text(0));
    seq.tick(1.0);
}
