//! CRC-64 checksums (ISO and ECMA polynomials).
//!
//! Both variants are reflected (LSB-first) with an all-ones initial value and a
//! final inversion. The ECMA variant is the one published as CRC-64/XZ.
//!
//! | Variant | Catalog algorithm      | Check (`"123456789"`)  |
//! |---------|------------------------|------------------------|
//! | ISO     | `CRC_64_GO_ISO`        | `0xB90956C775A41001`   |
//! | ECMA    | `CRC_64_XZ`            | `0x995DC9BBDF1939FA`   |

use crc::{Crc, CRC_64_GO_ISO, CRC_64_XZ};

static ISO: Crc<u64> = Crc::<u64>::new(&CRC_64_GO_ISO);
static ECMA: Crc<u64> = Crc::<u64>::new(&CRC_64_XZ);

/// CRC-64/ISO of `data`.
#[must_use]
pub fn crc64_iso(data: &[u8]) -> u64 {
    ISO.checksum(data)
}

/// CRC-64/ECMA of `data`.
#[must_use]
pub fn crc64_ecma(data: &[u8]) -> u64 {
    ECMA.checksum(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_values() {
        assert_eq!(crc64_iso(b"123456789"), 0xB909_56C7_75A4_1001);
        assert_eq!(crc64_ecma(b"123456789"), 0x995D_C9BB_DF19_39FA);
    }

    #[test]
    fn test_known_payload() {
        assert_eq!(crc64_iso(b"test data"), 0x8DFF_6413_09B8_7C72);
        assert_eq!(crc64_ecma(b"test data"), 0x8D49_D818_FDB0_71A5);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(crc64_iso(b""), 0);
        assert_eq!(crc64_ecma(b""), 0);
    }

    #[test]
    fn test_variants_differ() {
        assert_ne!(crc64_iso(b"bloom"), crc64_ecma(b"bloom"));
    }
}
