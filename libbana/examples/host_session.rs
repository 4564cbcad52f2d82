//! Drive a full host conversation against the mock RF front-end.
//!
//! Run with `RUST_LOG=debug cargo run --example host_session` to see the
//! dispatcher's wire diagnostics.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use libbana::nfc::Nfc;
use libbana::protocol::Frame;
use libbana::test_support::SharedRf;
use libbana::transport::mock::{MockMifare, MockTag};
use libbana::types::{BlockData, MifareKey, Uid};
use libbana::Bana;

fn main() -> Result<()> {
    env_logger::init();

    let rf = SharedRf::new();
    rf.0.borrow_mut().insert(MockTag::Mifare(
        MockMifare::with_factory_keys(Uid::from([0xAA, 0xBB, 0xCC, 0xDD]))
            .with_block(4, BlockData::from_bytes(*b"BANAPASSPORT 001")),
    ));

    let out: Rc<RefCell<Vec<u8>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let out = out.clone();
        move |byte| out.borrow_mut().push(byte)
    };
    let mut bana = Bana::new(Nfc::new(Box::new(rf.clone())), sink);
    bana.set_debug(true);

    let mut auth_payload = vec![0xAA, 0xBB, 0xCC, 0xDD, 0x04, 0x00];
    auth_payload.extend_from_slice(MifareKey::FACTORY.as_bytes());

    let conversation: Vec<(&str, Vec<u8>)> = vec![
        ("get version", frame(0x63, &[])),
        ("poll start", frame(0x40, &[])),
        ("set led", frame(0x81, &[0x00, 0x40, 0xFF])),
        ("poll card", frame(0x42, &[])),
        ("mifare auth", frame(0x43, &auth_payload)),
        ("mifare read", frame(0x44, &[0x04])),
        ("poll end", frame(0x41, &[])),
    ];

    for (name, wire) in conversation {
        for byte in wire {
            bana.feed(byte);
        }
        let bytes = out.borrow_mut().split_off(0);
        let response = Frame::decode(&bytes)?;
        println!(
            "{:<12} -> cmd {:#04x}, payload [{}]",
            name,
            response.command,
            libbana::utils::bytes_to_hex_spaced(&response.payload)
        );
    }

    println!(
        "reader active: {}, led: #{:06x}",
        bana.is_active(),
        bana.led_color().as_u32()
    );
    Ok(())
}

fn frame(command: u8, payload: &[u8]) -> Vec<u8> {
    Frame::new(command, payload.to_vec())
        .expect("payload fits the wire limit")
        .encode()
}
