use libbana::protocol::checksum::frame_checksum;
use libbana::protocol::Frame;

#[test]
fn checksum_matches_encoded_frame_tail() {
    let frame = Frame::new(0x43, vec![0xAA, 0xBB, 0xCC, 0xDD, 0x04, 0x00]).unwrap();
    let wire = frame.encode();
    assert_eq!(*wire.last().unwrap(), frame_checksum(0x43, &frame.payload));
}

#[test]
fn checksum_depends_on_payload_values() {
    assert_ne!(
        frame_checksum(0x42, &[0x01, 0x02]),
        frame_checksum(0x42, &[0x02, 0x10])
    );
}

#[test]
fn empty_payload_checksum_covers_header() {
    // With no payload the checksum still covers command + length.
    assert_eq!(frame_checksum(0x40, &[]), 0u8.wrapping_sub(0x40));
}
