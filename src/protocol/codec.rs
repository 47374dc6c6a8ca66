//! Protocol codec
//!
//! Encoding and decoding functions for the test channel wire protocol.
//!
//! ## Wire Format
//! ```text
//! Frame := NameLen(1) Name ArgCount(1) { ArgLen(1) Arg } x ArgCount
//! ```
//!
//! Oversized fields are rejected, never truncated: the simulator reads
//! exactly one octet per length.

use std::io::{Read, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{ChannelError, Result};
use super::Command;

/// Largest name or argument, in bytes
pub const MAX_FIELD_LEN: usize = u8::MAX as usize;

/// Largest number of arguments in one frame
pub const MAX_ARG_COUNT: usize = u8::MAX as usize;

// =============================================================================
// Validation
// =============================================================================

/// Check that a command fits the single-octet framing
fn lint_command<S: AsRef<str>>(name: &str, args: &[S]) -> Result<()> {
    if name.len() > MAX_FIELD_LEN {
        return Err(ChannelError::Validation(format!(
            "command name is {} bytes (max {})",
            name.len(),
            MAX_FIELD_LEN
        )));
    }
    if args.len() > MAX_ARG_COUNT {
        return Err(ChannelError::Validation(format!(
            "{} arguments given (max {})",
            args.len(),
            MAX_ARG_COUNT
        )));
    }
    for (index, arg) in args.iter().enumerate() {
        let len = arg.as_ref().len();
        if len > MAX_FIELD_LEN {
            return Err(ChannelError::Validation(format!(
                "argument {} is {} bytes (max {})",
                index, len, MAX_FIELD_LEN
            )));
        }
    }
    Ok(())
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a command name and arguments into one frame
///
/// Fails with `ChannelError::Validation` if any field or the argument
/// count does not fit in one octet. Text is always UTF-8 here, so the
/// encoded bytes are exactly the string bytes.
pub fn encode<S: AsRef<str>>(name: &str, args: &[S]) -> Result<Bytes> {
    lint_command(name, args)?;

    let args_len: usize = args.iter().map(|arg| 1 + arg.as_ref().len()).sum();
    let mut frame = BytesMut::with_capacity(2 + name.len() + args_len);

    frame.put_u8(name.len() as u8);
    frame.put_slice(name.as_bytes());
    frame.put_u8(args.len() as u8);
    for arg in args {
        let arg = arg.as_ref();
        frame.put_u8(arg.len() as u8);
        frame.put_slice(arg.as_bytes());
    }

    Ok(frame.freeze())
}

/// Encode a `Command` into one frame
pub fn encode_command(command: &Command) -> Result<Bytes> {
    encode(&command.name, &command.args)
}

// =============================================================================
// Decoding
// =============================================================================

/// Take one length-prefixed UTF-8 field off the front of `buf`
fn take_field(buf: &mut &[u8], what: &str) -> Result<String> {
    if !buf.has_remaining() {
        return Err(ChannelError::Protocol(format!("missing {} length", what)));
    }
    let len = buf.get_u8() as usize;
    if buf.remaining() < len {
        return Err(ChannelError::Protocol(format!(
            "incomplete {}: expected {} bytes, got {}",
            what,
            len,
            buf.remaining()
        )));
    }
    let field = buf.copy_to_bytes(len);
    into_text(field.to_vec(), what)
}

fn into_text(raw: Vec<u8>, what: &str) -> Result<String> {
    String::from_utf8(raw)
        .map_err(|e| ChannelError::Protocol(format!("{} is not valid UTF-8: {}", what, e)))
}

/// Decode exactly one frame
///
/// The slice must hold one complete frame and nothing else.
pub fn decode_command(bytes: &[u8]) -> Result<Command> {
    let mut buf = bytes;

    let name = take_field(&mut buf, "name")?;

    if !buf.has_remaining() {
        return Err(ChannelError::Protocol("missing argument count".to_string()));
    }
    let arg_count = buf.get_u8() as usize;

    let mut args = Vec::with_capacity(arg_count);
    for index in 0..arg_count {
        args.push(take_field(&mut buf, &format!("argument {}", index))?);
    }

    if buf.has_remaining() {
        return Err(ChannelError::Protocol(format!(
            "{} trailing bytes after frame",
            buf.remaining()
        )));
    }

    Ok(Command { name, args })
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut octet = [0u8; 1];
    reader.read_exact(&mut octet)?;
    Ok(octet[0])
}

fn read_field<R: Read>(reader: &mut R, what: &str) -> Result<String> {
    let len = read_u8(reader)? as usize;
    let mut raw = vec![0u8; len];
    reader.read_exact(&mut raw)?;
    into_text(raw, what)
}

/// Read one complete frame from a stream
///
/// Blocks until the frame is complete. A stream that ends early surfaces as
/// `ChannelError::Io` with `UnexpectedEof`.
pub fn read_command<R: Read>(reader: &mut R) -> Result<Command> {
    let name = read_field(reader, "name")?;
    let arg_count = read_u8(reader)? as usize;

    let mut args = Vec::with_capacity(arg_count);
    for index in 0..arg_count {
        args.push(read_field(reader, &format!("argument {}", index))?);
    }

    Ok(Command { name, args })
}

/// Write a command to a stream in a single `write_all`
pub fn write_command<W: Write>(writer: &mut W, command: &Command) -> Result<()> {
    let frame = encode_command(command)?;
    writer.write_all(&frame)?;
    writer.flush()?;
    Ok(())
}
