#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libbana::protocol::Status;
use libbana::test_support::{bana_with_mock, feed_all};
use serial_test::serial;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
#[serial]
fn host_session_end_to_end() {
    init_logger();
    let (mut bana, rf, out) = bana_with_mock();
    bana.set_debug(true);

    // Host opens a polling session.
    feed_all(&mut bana, &fixtures::poll_start_frame());
    assert!(bana.is_active());
    let (response, used) = fixtures::take_response(&out.borrow());
    assert_eq!(response.command, 0x40);
    assert_eq!(response.payload, vec![Status::Ok.as_u8()]);
    out.borrow_mut().drain(..used);

    // A MIFARE tag appears and the host polls for it.
    rf.0.borrow_mut().insert(fixtures::sample_mifare_tag());
    feed_all(&mut bana, &fixtures::poll_card_frame());
    let (response, used) = fixtures::take_response(&out.borrow());
    assert_eq!(response.command, 0x42);
    assert_eq!(response.payload[0], Status::Ok.as_u8());
    assert_eq!(response.payload[1], 1); // MIFARE
    assert_eq!(response.payload[2], 4);
    assert_eq!(&response.payload[3..7], &[0xAA, 0xBB, 0xCC, 0xDD]);
    out.borrow_mut().drain(..used);

    // Host closes the session.
    feed_all(&mut bana, &fixtures::poll_end_frame());
    assert!(!bana.is_active());
    let (response, _) = fixtures::take_response(&out.borrow());
    assert_eq!(response.command, 0x41);
    assert_eq!(response.payload, vec![Status::Ok.as_u8()]);
}

#[test]
#[serial]
fn poll_card_with_empty_field_reports_no_card() {
    init_logger();
    let (mut bana, _rf, out) = bana_with_mock();
    feed_all(&mut bana, &fixtures::poll_card_frame());
    let (response, _) = fixtures::take_response(&out.borrow());
    assert_eq!(response.command, 0x42);
    assert_eq!(response.payload, vec![Status::NoCard.as_u8()]);
}

#[test]
fn poll_card_reports_felica_identity() {
    use libbana::transport::mock::MockTag;
    use libbana::transport::FelicaTarget;
    use libbana::types::{Idm, Pmm, SystemCode};

    let (mut bana, rf, out) = bana_with_mock();
    rf.0.borrow_mut().insert(MockTag::Felica(FelicaTarget {
        idm: Idm::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]),
        pmm: Pmm::from_bytes([11, 12, 13, 14, 15, 16, 17, 18]),
        system_code: SystemCode::new(0x8008),
    }));

    feed_all(&mut bana, &fixtures::poll_card_frame());
    let (response, _) = fixtures::take_response(&out.borrow());
    assert_eq!(response.payload[0], Status::Ok.as_u8());
    assert_eq!(response.payload[1], 2); // FeliCa
    assert_eq!(response.payload[2], 8);
    assert_eq!(&response.payload[3..11], &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(&response.payload[11..19], &[11, 12, 13, 14, 15, 16, 17, 18]);
    assert_eq!(&response.payload[19..], &[0x80, 0x08]);
}

#[test]
fn get_version_and_led() {
    let (mut bana, _rf, out) = bana_with_mock();

    feed_all(&mut bana, &fixtures::get_version_frame());
    let (response, used) = fixtures::take_response(&out.borrow());
    assert_eq!(response.command, 0x63);
    assert_eq!(response.payload.len(), 3);
    assert_eq!(response.payload[0], Status::Ok.as_u8());
    out.borrow_mut().drain(..used);

    feed_all(&mut bana, &fixtures::set_led_frame(0xFF, 0x00, 0x80));
    assert_eq!(bana.led_color().as_u32(), 0xFF0080);
    let (response, _) = fixtures::take_response(&out.borrow());
    assert_eq!(response.payload, vec![Status::Ok.as_u8()]);
}

#[test]
fn reset_ends_the_session_and_acknowledges() {
    let (mut bana, rf, out) = bana_with_mock();
    feed_all(&mut bana, &fixtures::poll_start_frame());
    assert!(bana.is_active());
    assert!(rf.0.borrow().field_on);
    out.borrow_mut().clear();

    feed_all(&mut bana, &fixtures::reset_frame());
    assert!(!bana.is_active());
    assert!(!rf.0.borrow().field_on);
    let (response, _) = fixtures::take_response(&out.borrow());
    assert_eq!(response.command, 0x62);
    assert_eq!(response.payload, vec![Status::Ok.as_u8()]);
}

#[test]
fn two_instances_do_not_share_state() {
    let (mut a, _rf_a, _out_a) = bana_with_mock();
    let (b, _rf_b, _out_b) = bana_with_mock();

    feed_all(&mut a, &fixtures::poll_start_frame());
    assert!(a.is_active());
    assert!(!b.is_active());
}
