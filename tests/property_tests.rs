use dv::layouts::{DVORAK, QWERTY};
use dv::stream::transcode_stream;
use dv::{decode, encode, Direction, Transcoder};
use proptest::prelude::*;
use std::io::Cursor;

prop_compose! {
    fn arb_dvorak_byte()(i in 0..DVORAK.len()) -> u8 {
        DVORAK[i]
    }
}

prop_compose! {
    fn arb_qwerty_byte()(i in 0..QWERTY.len()) -> u8 {
        QWERTY[i]
    }
}

prop_compose! {
    fn arb_unmapped_byte()(c in any::<u8>().prop_filter("in table", |c| !QWERTY.contains(c))) -> u8 {
        c
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_decode_inverts_encode(c in arb_dvorak_byte()) {
        prop_assert_eq!(decode(encode(c)), c);
    }

    #[test]
    fn test_encode_inverts_decode(c in arb_qwerty_byte()) {
        prop_assert_eq!(encode(decode(c)), c);
    }

    #[test]
    fn test_unmapped_is_identity(c in arb_unmapped_byte()) {
        prop_assert_eq!(encode(c), c);
        prop_assert_eq!(decode(c), c);
    }

    #[test]
    fn test_any_byte_round_trips(c in any::<u8>()) {
        prop_assert_eq!(decode(encode(c)), c);
        prop_assert_eq!(encode(decode(c)), c);
    }

    #[test]
    fn test_stream_preserves_length_and_order(
        input in proptest::collection::vec(any::<u8>(), 0..4096),
        encode_first in any::<bool>()
    ) {
        let direction = if encode_first { Direction::Encode } else { Direction::Decode };
        let codec = Transcoder::standard();

        let mut out = Vec::new();
        let n = transcode_stream(codec, direction, Cursor::new(&input), &mut out).unwrap();
        prop_assert_eq!(n as usize, input.len());
        prop_assert_eq!(out.len(), input.len());

        for (i, (&a, &b)) in input.iter().zip(out.iter()).enumerate() {
            prop_assert_eq!(codec.apply(direction, a), b, "position {}", i);
        }

        let mut back = Vec::new();
        transcode_stream(codec, direction.inverse(), Cursor::new(&out), &mut back).unwrap();
        prop_assert_eq!(back, input);
    }
}
