//! Property tests for the inverse laws between encoders and decoders.

use proptest::prelude::*;
use unibytes::{base64, convert, hex, uri, utf8, SourceFormat};

proptest! {
    #[test]
    fn prop_hex_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(hex::decode(&hex::encode(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn prop_base64_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let encoded = base64::encode(&bytes);
        prop_assert_eq!(base64::decode(&encoded, base64::UNALIGNED).unwrap(), bytes);
    }

    #[test]
    fn prop_base64_block_size_pads_with_zeros(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        block in 1usize..16,
    ) {
        let block_size = std::num::NonZeroUsize::new(block).unwrap();
        let decoded = base64::decode(&base64::encode(&bytes), block_size).unwrap();

        prop_assert_eq!(decoded.len() % block, 0);
        prop_assert_eq!(&decoded[..bytes.len()], bytes.as_slice());
        prop_assert!(decoded[bytes.len()..].iter().all(|&b| b == 0));
    }

    #[test]
    fn prop_utf8_round_trip(text in any::<String>()) {
        prop_assert_eq!(utf8::decode(&utf8::encode(&text)).unwrap(), text);
    }

    #[test]
    fn prop_uri_round_trip(text in any::<String>()) {
        prop_assert_eq!(uri::decode_text(&uri::encode(&text)).unwrap(), text);
    }

    #[test]
    fn prop_code_points_match_chars(text in any::<String>()) {
        let result = convert(SourceFormat::Text, &text);
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        let actual: Vec<u32> = result.code_points.iter().map(|cp| cp.value()).collect();

        prop_assert!(result.is_complete());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_utf16_segmentation_matches_utf8(text in any::<String>()) {
        let units: Vec<u16> = text.encode_utf16().collect();
        prop_assert_eq!(
            utf8::segment_utf16(&units).unwrap(),
            utf8::segment_code_points(&text)
        );
    }

    #[test]
    fn prop_validity_flags_are_consistent(input in ".{0,32}", format in 0usize..4) {
        let result = convert(SourceFormat::ALL[format], &input);

        prop_assert!(!result.text_valid || result.bytes_valid);
        prop_assert!(result.code_points.is_empty() || result.text_valid);
        prop_assert_eq!(result.bytes_valid, result.error.is_none());
    }
}
