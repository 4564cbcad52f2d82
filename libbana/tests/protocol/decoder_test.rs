#[path = "../common/mod.rs"]
mod common;

use libbana::protocol::{Frame, FrameDecoder, Push};
use proptest::prelude::*;

fn collect_frames(decoder: &mut FrameDecoder, bytes: &[u8]) -> Vec<Frame> {
    let mut out = Vec::new();
    for &b in bytes {
        if let Push::Complete(frame) = decoder.push(b) {
            out.push(frame);
        }
    }
    out
}

#[test]
fn split_feeding_equals_contiguous_feeding() {
    let wire = common::fixtures::mifare_auth_frame(
        [0xAA, 0xBB, 0xCC, 0xDD],
        4,
        0,
        &libbana::MifareKey::FACTORY,
    );

    let mut contiguous = FrameDecoder::new();
    let a = collect_frames(&mut contiguous, &wire);

    // One byte at a time into a fresh decoder, in separate push calls.
    let mut split = FrameDecoder::new();
    let mut b = Vec::new();
    for &byte in &wire {
        b.extend(collect_frames(&mut split, &[byte]));
    }

    assert_eq!(a, b);
    assert_eq!(a.len(), 1);
}

#[test]
fn leading_noise_does_not_mask_a_frame() {
    let mut wire = vec![0x00, 0x13, 0x37, 0xFF];
    wire.extend(common::fixtures::poll_start_frame());

    let mut decoder = FrameDecoder::new();
    let frames = collect_frames(&mut decoder, &wire);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].command, 0x40);
}

#[test]
fn corrupt_frame_then_valid_frame() {
    let mut corrupt = common::fixtures::poll_card_frame();
    let last = corrupt.len() - 1;
    corrupt[last] ^= 0x80;
    corrupt.extend(common::fixtures::poll_card_frame());

    let mut decoder = FrameDecoder::new();
    let frames = collect_frames(&mut decoder, &corrupt);
    assert_eq!(frames.len(), 1);
}

proptest! {
    // Arbitrary byte soup must never panic and must always leave the
    // decoder in a well-defined state.
    #[test]
    fn decoder_survives_any_input(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut decoder = FrameDecoder::new();
        for b in bytes {
            let _ = decoder.push(b);
        }
        // Still usable: a valid frame parses afterwards.
        decoder.reset();
        let wire = Frame::new(0x42, vec![]).unwrap().encode();
        let frames = collect_frames(&mut decoder, &wire);
        prop_assert_eq!(frames.len(), 1);
    }

    // Any encoded frame survives the decoder regardless of how the byte
    // stream is interleaved with leading noise.
    #[test]
    fn any_frame_decodes_after_noise(
        command in any::<u8>(),
        payload in prop::collection::vec(any::<u8>(), 0..32),
        noise in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let frame = Frame::new(command, payload).unwrap();
        // Noise must not contain the sync marker itself, or it would
        // legitimately open a bogus frame that swallows the real one.
        let mut wire: Vec<u8> = noise.iter().copied().filter(|&b| b != 0xE0).collect();
        wire.extend(frame.encode());

        let mut decoder = FrameDecoder::new();
        let frames = collect_frames(&mut decoder, &wire);
        prop_assert_eq!(frames.len(), 1);
        prop_assert_eq!(&frames[0], &frame);
    }
}
