// libbana/src/protocol/checksum.rs

/// Compute the Bana frame checksum.
///
/// Checksum = 0x100 - (command + length + sum(payload)) mod 256, so the
/// frame body including the checksum byte sums to zero.
pub fn frame_checksum(command: u8, payload: &[u8]) -> u8 {
    let sum = payload
        .iter()
        .fold(command.wrapping_add(payload.len() as u8), |acc, &b| {
            acc.wrapping_add(b)
        });
    0u8.wrapping_sub(sum)
}
