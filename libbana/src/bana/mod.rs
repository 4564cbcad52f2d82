// libbana/src/bana/mod.rs

//! The Bana protocol decoder/dispatcher: reassembles host frames one byte
//! at a time, runs the matching command handler against the card layer,
//! and emits response frames through the injected byte sink.

mod sink;
mod state;

pub use sink::ByteSink;
pub use state::ReaderState;

use log::debug;

use crate::constants::{FIRMWARE_VERSION_MAJOR, FIRMWARE_VERSION_MINOR};
use crate::nfc::Nfc;
use crate::protocol::{codec, CommandCode, Frame, FrameDecoder, Push, Request, Response, Status};
use crate::types::LedColor;
use crate::Error;

/// One Bana protocol instance per host link. Owns the decoder state, the
/// reader state and the card layer; nothing here is global, so tests can
/// run several independent instances.
pub struct Bana<S: ByteSink> {
    decoder: FrameDecoder,
    state: ReaderState,
    nfc: Nfc,
    sink: S,
    debug: bool,
}

impl<S: ByteSink> Bana<S> {
    /// Install the byte sink and start idle. Must exist before any byte
    /// is fed.
    pub fn new(nfc: Nfc, sink: S) -> Self {
        Self {
            decoder: FrameDecoder::new(),
            state: ReaderState::default(),
            nfc,
            sink,
            debug: false,
        }
    }

    /// Toggle verbose wire diagnostics. Observability only; protocol
    /// behavior is unchanged.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Whether the host currently has a polling session open.
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Last commanded indicator color.
    pub fn led_color(&self) -> LedColor {
        self.state.led_color
    }

    /// The card layer, for host glue that polls outside the protocol.
    pub fn nfc(&self) -> &Nfc {
        &self.nfc
    }

    pub fn nfc_mut(&mut self) -> &mut Nfc {
        &mut self.nfc
    }

    /// Feed one byte from the host link. Returns whether the byte was
    /// accepted as part of a recognized frame structure, so callers
    /// multiplexing several protocols over one link know when to try
    /// another decoder. May synchronously emit response bytes through the
    /// sink. Not reentrant.
    pub fn feed(&mut self, byte: u8) -> bool {
        match self.decoder.push(byte) {
            Push::Rejected => false,
            Push::Consumed => true,
            Push::Invalid { expected, actual } => {
                if self.debug {
                    debug!(
                        "frame dropped: checksum {:#04x}, expected {:#04x}",
                        actual, expected
                    );
                }
                true
            }
            Push::Complete(frame) => {
                self.dispatch(&frame);
                true
            }
        }
    }

    fn dispatch(&mut self, frame: &Frame) {
        let request = match codec::decode_request_frame(frame) {
            Ok(request) => request,
            Err(Error::UnknownCommand { command }) => {
                if self.debug {
                    debug!("unknown command {:#04x}", command);
                }
                return;
            }
            Err(e) => {
                if self.debug {
                    debug!("bad payload for command {:#04x}: {}", frame.command, e);
                }
                // The frame itself validated, so the command code is known
                // here; answer with a parameter error.
                if let Some(command) = CommandCode::from_u8(frame.command) {
                    self.respond(Response::Status {
                        command,
                        status: Status::InvalidParam,
                    });
                }
                return;
            }
        };
        self.handle(request);
    }

    fn handle(&mut self, request: Request) {
        let response = match request {
            Request::Reset => {
                self.state.active = false;
                self.nfc.rf_field(false);
                Response::Status {
                    command: CommandCode::Reset,
                    status: Status::Ok,
                }
            }
            Request::GetVersion => Response::Version {
                major: FIRMWARE_VERSION_MAJOR,
                minor: FIRMWARE_VERSION_MINOR,
            },
            Request::PollStart => {
                self.state.active = true;
                self.nfc.rf_field(true);
                Response::Status {
                    command: CommandCode::PollStart,
                    status: Status::Ok,
                }
            }
            Request::PollEnd => {
                self.state.active = false;
                self.nfc.rf_field(false);
                Response::Status {
                    command: CommandCode::PollEnd,
                    status: Status::Ok,
                }
            }
            Request::PollCard => {
                let card = self.nfc.detect_card();
                if card.is_none() {
                    Response::Status {
                        command: CommandCode::PollCard,
                        status: Status::NoCard,
                    }
                } else {
                    if self.debug {
                        debug!("card: {}", card);
                    }
                    Response::Card { card }
                }
            }
            Request::MifareAuth {
                uid,
                block,
                key_slot,
                key,
            } => {
                let status = if self.nfc.mifare_auth(uid, block, key_slot, &key) {
                    Status::Ok
                } else {
                    Status::AuthFailed
                };
                Response::Status {
                    command: CommandCode::MifareAuth,
                    status,
                }
            }
            Request::MifareRead { block } => match self.nfc.mifare_read(block) {
                Ok(data) => Response::Block { data },
                Err(e) => {
                    if self.debug {
                        debug!("mifare read: {}", e);
                    }
                    Response::Status {
                        command: CommandCode::MifareRead,
                        status: Status::ReadFailed,
                    }
                }
            },
            Request::SetLed { color } => {
                self.state.led_color = color;
                Response::Status {
                    command: CommandCode::SetLed,
                    status: Status::Ok,
                }
            }
        };
        self.respond(response);
    }

    fn respond(&mut self, response: Response) {
        match codec::encode_response_frame(&response) {
            Ok(bytes) => {
                if self.debug {
                    debug!("tx: {}", crate::utils::bytes_to_hex_spaced(&bytes));
                }
                for byte in bytes {
                    self.sink.put_byte(byte);
                }
            }
            Err(e) => debug!("response encode: {}", e),
        }
    }
}
