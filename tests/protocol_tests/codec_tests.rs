//! Codec Tests
//!
//! Tests for frame encoding/decoding and the one-octet field limits.

use std::io::{Cursor, ErrorKind};
use test_channel::protocol::{
    Command, CommandType, HCI_RESET_PACKET, MAX_ARG_COUNT, MAX_FIELD_LEN,
    encode, encode_command, decode_command,
    read_command, write_command,
};
use test_channel::ChannelError;

const NO_ARGS: [&str; 0] = [];

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_discover_no_args() {
    let encoded = encode("DISCOVER", &NO_ARGS).unwrap();
    assert_eq!(
        &encoded[..],
        &[0x08, b'D', b'I', b'S', b'C', b'O', b'V', b'E', b'R', 0x00][..]
    );
}

#[test]
fn test_encode_clear_no_args() {
    let encoded = encode("CLEAR", &NO_ARGS).unwrap();
    assert_eq!(&encoded[..], &[0x05, b'C', b'L', b'E', b'A', b'R', 0x00][..]);
}

#[test]
fn test_encode_with_args() {
    let encoded = encode("DISCOVER", &["foo", "ba"]).unwrap();

    let mut expected = vec![0x08];
    expected.extend_from_slice(b"DISCOVER");
    expected.push(0x02);
    expected.push(0x03);
    expected.extend_from_slice(b"foo");
    expected.push(0x02);
    expected.extend_from_slice(b"ba");

    assert_eq!(&encoded[..], &expected[..]);
}

#[test]
fn test_encode_empty_name_and_empty_arg() {
    let encoded = encode("", &[""]).unwrap();
    assert_eq!(&encoded[..], &[0x00, 0x01, 0x00][..]);
}

#[test]
fn test_encode_counts_utf8_bytes() {
    // "é" is one char but two bytes on the wire
    let encoded = encode("N", &["é"]).unwrap();
    assert_eq!(&encoded[..], &[0x01, b'N', 0x01, 0x02, 0xC3, 0xA9][..]);
}

#[test]
fn test_encode_command_matches_encode() {
    let cmd = Command::of(CommandType::DiscoverInterval, ["250"]);
    assert_eq!(
        encode_command(&cmd).unwrap(),
        encode("DISCOVER_INTERVAL", &["250"]).unwrap()
    );
}

// =============================================================================
// Limit Tests
// =============================================================================

#[test]
fn test_name_at_limit_is_accepted() {
    let name = "N".repeat(MAX_FIELD_LEN);
    let encoded = encode(&name, &NO_ARGS).unwrap();
    assert_eq!(encoded[0], 0xFF);
    assert_eq!(encoded.len(), 1 + 255 + 1);
}

#[test]
fn test_name_over_limit_is_rejected() {
    let name = "N".repeat(256);
    let result = encode(&name, &NO_ARGS);
    assert!(matches!(result, Err(ChannelError::Validation(_))));
}

#[test]
fn test_arg_over_limit_is_rejected() {
    let long = "a".repeat(256);
    let result = encode("DISCOVER", &["ok", long.as_str()]);
    match result {
        Err(ChannelError::Validation(msg)) => assert!(msg.contains("argument 1")),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_multibyte_arg_over_limit_is_rejected() {
    // 128 chars, 256 bytes
    let long = "é".repeat(128);
    let result = encode("DISCOVER", &[long]);
    assert!(matches!(result, Err(ChannelError::Validation(_))));
}

#[test]
fn test_arg_count_at_limit_is_accepted() {
    let args = vec!["x"; MAX_ARG_COUNT];
    let encoded = encode("DISCOVER", &args).unwrap();
    assert_eq!(encoded[9], 0xFF);
}

#[test]
fn test_arg_count_over_limit_is_rejected() {
    let args = vec!["x"; 256];
    let result = encode("DISCOVER", &args);
    match result {
        Err(ChannelError::Validation(msg)) => assert!(msg.contains("256 arguments")),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_inverts_encode() {
    let cmd = Command::new("DISCOVER", ["AB12CD", "", "héllo"]);
    let encoded = encode_command(&cmd).unwrap();
    assert_eq!(decode_command(&encoded).unwrap(), cmd);
}

#[test]
fn test_decode_limit_sized_frame() {
    let cmd = Command::new("N".repeat(255), vec!["a".repeat(255); 255]);
    let encoded = encode_command(&cmd).unwrap();
    assert_eq!(decode_command(&encoded).unwrap(), cmd);
}

#[test]
fn test_decode_empty_input() {
    let result = decode_command(&[]);
    assert!(result.unwrap_err().to_string().contains("missing name length"));
}

#[test]
fn test_decode_missing_arg_count() {
    let bytes = [0x02, b'O', b'K'];
    let result = decode_command(&bytes);
    assert!(result.unwrap_err().to_string().contains("missing argument count"));
}

#[test]
fn test_decode_incomplete_name() {
    let bytes = [0x05, b'C', b'L'];
    let result = decode_command(&bytes);
    assert!(matches!(result, Err(ChannelError::Protocol(_))));
    assert!(result.unwrap_err().to_string().contains("incomplete name"));
}

#[test]
fn test_decode_incomplete_argument() {
    // Two arguments promised, one delivered
    let bytes = [0x01, b'X', 0x02, 0x01, b'a'];
    let result = decode_command(&bytes);
    assert!(result.unwrap_err().to_string().contains("argument 1"));
}

#[test]
fn test_decode_trailing_bytes() {
    let mut bytes = encode("CLEAR", &NO_ARGS).unwrap().to_vec();
    bytes.push(0x00);
    let result = decode_command(&bytes);
    assert!(result.unwrap_err().to_string().contains("trailing"));
}

#[test]
fn test_decode_invalid_utf8() {
    let bytes = [0x02, 0xFF, 0xFE, 0x00];
    let result = decode_command(&bytes);
    assert!(result.unwrap_err().to_string().contains("not valid UTF-8"));
}

// =============================================================================
// Stream Tests
// =============================================================================

#[test]
fn test_read_consecutive_frames() {
    let mut stream = Vec::new();
    write_command(&mut stream, &Command::bare(CommandType::Clear)).unwrap();
    write_command(&mut stream, &Command::of(CommandType::Discover, ["A", "B"])).unwrap();

    let mut reader = Cursor::new(stream);
    assert_eq!(read_command(&mut reader).unwrap(), Command::bare(CommandType::Clear));
    assert_eq!(
        read_command(&mut reader).unwrap(),
        Command::new("DISCOVER", ["A", "B"])
    );

    match read_command(&mut reader) {
        Err(ChannelError::Io(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
        other => panic!("Expected EOF, got {:?}", other),
    }
}

#[test]
fn test_read_truncated_frame() {
    let bytes = encode("TIMEOUT_ALL", &NO_ARGS).unwrap();
    let mut reader = Cursor::new(bytes[..5].to_vec());
    assert!(matches!(read_command(&mut reader), Err(ChannelError::Io(_))));
}

#[test]
fn test_write_rejects_oversized_command() {
    let mut sink = Vec::new();
    let cmd = Command::new("X".repeat(300), NO_ARGS);
    let result = write_command(&mut sink, &cmd);
    assert!(matches!(result, Err(ChannelError::Validation(_))));
    assert!(sink.is_empty());
}

// =============================================================================
// Command Definition Tests
// =============================================================================

#[test]
fn test_wire_names_round_trip() {
    for ty in CommandType::ALL {
        assert_eq!(CommandType::from_wire_name(ty.wire_name()), Some(ty));
    }
    assert_eq!(CommandType::from_wire_name("TimeoutAll"), None);
}

#[test]
fn test_command_type_lookup() {
    assert_eq!(
        Command::bare(CommandType::CloseTestChannel).command_type(),
        Some(CommandType::CloseTestChannel)
    );
    assert_eq!(Command::new("BOGUS", NO_ARGS).command_type(), None);
}

#[test]
fn test_hci_reset_packet() {
    assert_eq!(HCI_RESET_PACKET, [1, 3, 12, 0]);
}
