// pn532/src/protocol/codec.rs

use crate::constants::{HOST_TO_PN532, PN532_TO_HOST};
use crate::protocol::parser::byte_at;
use crate::{Error, Result};

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Build the host frame for a raw command code and its parameters:
/// payload = D4 <command> <params...>
pub fn encode_host_frame(command: u8, params: &[u8]) -> Result<Frame> {
    let mut payload = Vec::with_capacity(2 + params.len());
    payload.push(HOST_TO_PN532);
    payload.push(command);
    payload.extend_from_slice(params);
    Frame::new(&payload)
}

/// Encode a Command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    encode_host_frame(cmd.command_code(), &cmd.params()).map(Frame::into_bytes)
}

/// Validate the D5 <command + 1> header of a result payload and return the
/// bytes that follow it.
pub fn strip_result_header(command: u8, payload: &[u8]) -> Result<&[u8]> {
    let direction = byte_at(payload, 0)?;
    if direction != PN532_TO_HOST {
        return Err(Error::UnexpectedDirection {
            expected: PN532_TO_HOST,
            actual: direction,
        });
    }
    let expected = command.wrapping_add(1);
    let actual = byte_at(payload, 1)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(&payload[2..])
}

/// Decode a raw result frame and parse it for the command that produced it.
pub fn decode_response_frame(cmd: &Command, raw: &[u8]) -> Result<Response> {
    let payload = Frame::decode(raw)?;
    let data = strip_result_header(cmd.command_code(), payload)?;
    Response::decode(cmd, data)
}
