//! Property-based tests for the UTF-8 encoder.

use gridpaint::codec::{encode, encoded_len, MAX_UTF8_LEN};
use gridpaint::Error;
use proptest::prelude::*;

proptest! {
    #[test]
    fn matches_std_for_scalar_values(c in any::<char>()) {
        let mut out = [0; MAX_UTF8_LEN];
        let len = encode(u32::from(c), &mut out).unwrap();

        let mut expected = [0; 4];
        let expected = c.encode_utf8(&mut expected).as_bytes();
        prop_assert_eq!(&out[..len], expected);
        prop_assert_eq!(encoded_len(u32::from(c)).unwrap(), c.len_utf8());
    }

    #[test]
    fn rejects_surrogates(c in 0xD800u32..=0xDFFF) {
        let mut out = [0; MAX_UTF8_LEN];
        let rejected = matches!(encode(c, &mut out), Err(Error::EncodingOutOfRange(v)) if v == c);
        prop_assert!(rejected);
    }

    #[test]
    fn rejects_beyond_unicode(c in 0x11_0000u32..) {
        let rejected = matches!(encoded_len(c), Err(Error::EncodingOutOfRange(v)) if v == c);
        prop_assert!(rejected);
    }
}
