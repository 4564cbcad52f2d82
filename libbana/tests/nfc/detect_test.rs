#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libbana::nfc::{Card, Nfc};
use libbana::test_support::SharedRf;
use libbana::transport::mock::MockTag;
use libbana::types::{CardType, Uid};

fn nfc_with_shared() -> (Nfc, SharedRf) {
    let rf = SharedRf::new();
    let nfc = Nfc::new(Box::new(rf.clone()));
    (nfc, rf)
}

#[test]
fn empty_field_returns_none_record() {
    let (mut nfc, rf) = nfc_with_shared();
    let card = nfc.detect_card();
    assert!(card.is_none());
    assert_eq!(card.card_type(), CardType::None);
    assert_eq!(card.id_bytes().len(), 0);
    // The sweep probed every technology exactly once.
    assert_eq!(
        rf.0.borrow().ops,
        vec!["poll_mifare", "poll_felica", "poll_vicinity"]
    );
}

#[test]
fn mifare_probe_short_circuits_the_sweep() {
    let (mut nfc, rf) = nfc_with_shared();
    rf.0.borrow_mut().insert(fixtures::sample_mifare_tag());

    let card = nfc.detect_card();
    assert_eq!(card.card_type(), CardType::Mifare);
    assert_eq!(rf.0.borrow().ops, vec!["poll_mifare"]);
}

#[test]
fn each_detection_produces_a_fresh_record() {
    let (mut nfc, rf) = nfc_with_shared();
    rf.0.borrow_mut().insert(fixtures::sample_mifare_tag());
    let first = nfc.detect_card();

    rf.0.borrow_mut()
        .insert(MockTag::Vicinity(Uid::from([7u8; 8])));
    let second = nfc.detect_card();

    assert_eq!(first.card_type(), CardType::Mifare);
    assert_eq!(second.card_type(), CardType::Vicinity);
    assert_ne!(first, second);
}

#[test]
fn rf_field_commands_reach_the_transport() {
    let (mut nfc, rf) = nfc_with_shared();
    nfc.rf_field(true);
    nfc.rf_field(false);
    assert_eq!(rf.0.borrow().ops, vec!["field_on", "field_off"]);
    assert!(!rf.0.borrow().field_on);
}

#[test]
fn rf_field_swallows_bus_faults() {
    let (mut nfc, rf) = nfc_with_shared();
    rf.0.borrow_mut().set_bus_failures(1);
    // Must not panic or surface the error.
    nfc.rf_field(true);
}

#[test]
fn module_name_comes_from_the_transport() {
    let (nfc, _rf) = nfc_with_shared();
    assert_eq!(nfc.module_name(), "MOCK");
}

#[test]
fn display_card_matches_detection() {
    let (mut nfc, rf) = nfc_with_shared();
    rf.0.borrow_mut().insert(fixtures::sample_mifare_tag());
    let card = nfc.detect_card();
    assert_eq!(card.to_string(), "MIFARE uid=aabbccdd");
    assert_eq!(Card::None.to_string(), "no card");
}
