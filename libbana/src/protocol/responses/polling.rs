// libbana/src/protocol/responses/polling.rs

use super::Status;
use crate::nfc::Card;

/// Encode a PollCard response payload for a found card.
/// Layout: [status] [card_type] [id_len] [id bytes...], with
/// [pmm(8)] [system_code(2 BE)] appended for FeliCa.
///
/// `Card::None` never reaches this builder through dispatch (the
/// dispatcher answers NoCard itself); it still encodes to a bare NoCard
/// status so the payload stays well-formed.
pub fn encode_card(card: &Card) -> Vec<u8> {
    if card.is_none() {
        return vec![Status::NoCard.as_u8()];
    }

    let id = card.id_bytes();
    let mut buf = Vec::with_capacity(3 + id.len() + 10);
    buf.push(Status::Ok.as_u8());
    buf.push(card.card_type() as u8);
    buf.push(id.len() as u8);
    buf.extend_from_slice(id);
    if let Card::Felica {
        pmm, system_code, ..
    } = card
    {
        buf.extend_from_slice(pmm.as_bytes());
        buf.extend_from_slice(&system_code.to_be_bytes());
    }
    buf
}
