/// Decodes one 2-byte record into a signed sample.
///
/// The wire format is little-endian two's complement, so this is a direct
/// reinterpretation of the raw frame.
pub fn decode_sample(frame: [u8; 2]) -> i16 {
    i16::from_le_bytes(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_boundary_values() {
        assert_eq!(decode_sample([0x00, 0x80]), -32768);
        assert_eq!(decode_sample([0xFF, 0x7F]), 32767);
        assert_eq!(decode_sample([0x00, 0x00]), 0);
    }

    #[test]
    fn round_trips_full_signed_range() {
        for value in i16::MIN..=i16::MAX {
            assert_eq!(decode_sample(value.to_le_bytes()), value);
        }
    }
}
