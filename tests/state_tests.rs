// Host-side tests for card and page UI state transitions.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod tilt {
    include!("../src/tilt.rs");
}
mod state {
    include!("../src/state.rs");
}

use state::*;
use tilt::{PointerSample, TiltConfig};

fn hovered_at(u: f32, v: f32) -> CardUiState {
    let mut s = CardUiState::default();
    s.pointer_enter();
    assert!(s.pointer_move(PointerSample { u, v }, &TiltConfig::default()));
    s
}

#[test]
fn default_card_is_idle_front_and_untilted() {
    let s = CardUiState::default();
    assert!(!s.hovering);
    assert_eq!(s.face(), Face::Front);
    assert_eq!(s.tilt, TiltState { x: 0.0, y: 0.0 });
    assert_eq!(s.glare.opacity, 0.0);
    assert_eq!((s.glare.x, s.glare.y), (50.0, 50.0));
    assert!(s.holo_enabled);
}

#[test]
fn move_while_hovering_updates_tilt_and_glare() {
    let s = hovered_at(0.0, 0.0);
    assert_eq!(s.tilt, TiltState { x: 18.0, y: -18.0 });
    assert_eq!((s.glare.x, s.glare.y, s.glare.opacity), (0.0, 0.0, 1.0));
}

#[test]
fn move_while_idle_is_ignored() {
    let mut s = CardUiState::default();
    let applied = s.pointer_move(PointerSample { u: 1.0, v: 0.0 }, &TiltConfig::default());
    assert!(!applied);
    assert_eq!(s, CardUiState::default());
}

#[test]
fn leave_snaps_back_regardless_of_last_sample() {
    let mut s = hovered_at(0.9, 0.1);
    s.pointer_leave();
    assert!(!s.hovering);
    assert_eq!(s.tilt, TiltState::default());
    assert_eq!(s.glare.opacity, 0.0);
    assert_eq!(s.glare_opacity(), 0.0);
}

#[test]
fn double_flip_restores_front() {
    let mut s = CardUiState::default();
    assert_eq!(s.toggle_flip(), Face::Back);
    assert_eq!(s.toggle_flip(), Face::Front);
    assert!(!s.flipped);
}

#[test]
fn flip_is_independent_of_tilt() {
    let mut s = hovered_at(0.25, 0.75);
    let tilt = s.tilt;
    s.toggle_flip();
    assert!(s.flipped && s.hovering);
    assert_eq!(s.tilt, tilt);

    s.pointer_leave();
    assert!(s.flipped);
}

#[test]
fn glare_hidden_when_holo_disabled() {
    let mut s = hovered_at(0.5, 0.5);
    assert_eq!(s.glare_opacity(), 1.0);
    s.set_holo(false);
    assert_eq!(s.glare_opacity(), 0.0);
}

#[test]
fn hover_scales_the_card() {
    let cfg = TiltConfig::default();
    let mut s = CardUiState::default();
    assert_eq!(s.scale(&cfg), 1.0);
    s.pointer_enter();
    assert_eq!(s.scale(&cfg), cfg.scale_on_hover);
}

#[test]
fn holo_toggle_while_flipped_keeps_face_and_tilt() {
    let mut page = PageState::default();
    let mut card = hovered_at(0.2, 0.8);
    card.toggle_flip();
    let before = card;

    let on = page.toggle_holo();
    assert!(!on);
    assert_eq!(card.set_holo(on), HoloChange::Unmount);
    assert_eq!(card.face(), Face::Back);
    assert_eq!(card.tilt, before.tilt);
    assert!(card.hovering);

    let on = page.toggle_holo();
    assert_eq!(card.set_holo(on), HoloChange::Mount);
    assert_eq!(card, before);
}

#[test]
fn repeated_holo_value_keeps_overlay() {
    let mut card = CardUiState::new(false);
    assert_eq!(card.set_holo(false), HoloChange::Keep);
    assert_eq!(card.set_holo(true), HoloChange::Mount);
    assert_eq!(card.set_holo(true), HoloChange::Keep);
}

#[test]
fn active_card_is_bookkeeping_only() {
    let mut page = PageState::default();
    page.set_active(Some(2));
    assert_eq!(page.active_id, Some(2));
    page.set_active(None);
    assert_eq!(page.active_id, None);
    assert!(page.holo_enabled);
}
