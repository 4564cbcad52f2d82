#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libbana::test_support::{bana_with_mock, feed_all};
use proptest::prelude::*;

#[test]
fn corrupt_checksum_produces_zero_response_bytes() {
    let (mut bana, _rf, out) = bana_with_mock();

    let mut wire = fixtures::poll_start_frame();
    let last = wire.len() - 1;
    wire[last] ^= 0x01;

    feed_all(&mut bana, &wire);
    assert!(out.borrow().is_empty());
    assert!(!bana.is_active());
}

#[test]
fn valid_frame_produces_exactly_one_response() {
    let (mut bana, _rf, out) = bana_with_mock();
    feed_all(&mut bana, &fixtures::poll_start_frame());

    // Exactly one complete response frame, no trailing bytes.
    let bytes = out.borrow().clone();
    let (response, used) = fixtures::take_response(&bytes);
    assert_eq!(used, bytes.len());
    assert_eq!(response.command, 0x40);
}

#[test]
fn noise_bytes_are_rejected_but_do_not_stick() {
    let (mut bana, _rf, out) = bana_with_mock();

    for b in [0x00u8, 0x55, 0x13, 0x37] {
        assert!(!bana.feed(b), "noise byte {:#04x} must be rejected", b);
    }

    let accepted = feed_all(&mut bana, &fixtures::poll_start_frame());
    assert_eq!(accepted, fixtures::poll_start_frame().len());
    assert!(bana.is_active());
    assert!(!out.borrow().is_empty());
}

#[test]
fn unknown_command_is_dropped_silently() {
    let (mut bana, _rf, out) = bana_with_mock();
    let wire = fixtures::frame_bytes(0x77, &[1, 2, 3]);
    let accepted = feed_all(&mut bana, &wire);
    // Structurally the frame is fine, so every byte is accepted.
    assert_eq!(accepted, wire.len());
    assert!(out.borrow().is_empty());
}

#[test]
fn oversize_declared_length_aborts_the_frame() {
    let (mut bana, _rf, out) = bana_with_mock();

    assert!(bana.feed(0xE0));
    assert!(bana.feed(0x42));
    // Length way beyond the wire limit: rejected, frame dropped.
    assert!(!bana.feed(0xF0));
    assert!(out.borrow().is_empty());

    // The decoder resynchronizes on the next frame.
    feed_all(&mut bana, &fixtures::poll_start_frame());
    assert!(bana.is_active());
}

proptest! {
    // The dispatcher must survive arbitrary byte soup without panicking
    // and stay responsive afterwards.
    #[test]
    fn dispatcher_survives_any_input(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let (mut bana, _rf, out) = bana_with_mock();
        for b in bytes {
            let _ = bana.feed(b);
        }

        // The byte soup may have left a frame in progress. Any partial
        // frame needs at most 64 payload bytes plus a checksum to
        // terminate, so 65 non-sync bytes drain the decoder back to idle.
        for _ in 0..65 {
            let _ = bana.feed(0x00);
        }

        out.borrow_mut().clear();
        feed_all(&mut bana, &fixtures::get_version_frame());
        prop_assert!(!out.borrow().is_empty());
    }
}
