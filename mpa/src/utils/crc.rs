//! CRC-16 validation for error-protected frames.
//!
//! A frame whose protection bit is cleared carries a 16-bit CRC right after
//! the header. It covers the last two header bytes and the side information,
//! using the CRC-16 polynomial 0x8005 with an all-ones initial value.

/// CRC algorithm specification with polynomial and initial value.
pub struct Algorithm<T> {
    poly: T,
    init: T,
}

/// CRC-16 algorithm for MPEG audio frame protection.
pub const CRC_FRAME_PROTECTION_ALG: Algorithm<u16> = Algorithm {
    poly: 0x8005,
    init: 0xFFFF,
};

/// Shifts `value` through `len` rounds of polynomial division, MSB first.
#[inline(always)]
pub const fn crc16(poly: u16, mut value: u16, len: usize) -> u16 {
    value <<= 8;

    let mut i = 0;
    while i < len {
        value = (value << 1) ^ (((value >> 15) & 1) * poly);
        i += 1;
    }

    value
}

#[inline(always)]
const fn crc16_table(poly: u16) -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = crc16(poly, i as u16, 8);
        i += 1;
    }

    table
}

#[derive(Debug)]
pub struct Crc16 {
    pub poly: u16,
    pub init: u16,
    table: [u16; 256],
}

impl Crc16 {
    pub const fn new(algorithm: &Algorithm<u16>) -> Self {
        Self {
            poly: algorithm.poly,
            init: algorithm.init,
            table: crc16_table(algorithm.poly),
        }
    }

    #[inline(always)]
    pub const fn update(&self, mut crc: u16, bytes: &[u8]) -> u16 {
        let mut i = 0;

        while i < bytes.len() {
            crc = (crc << 8) ^ self.table[(((crc >> 8) ^ bytes[i] as u16) & 0xFF) as usize];
            i += 1;
        }

        crc
    }

    /// Checksum of the protected part of a frame.
    pub const fn frame_checksum(&self, header: &[u8; 4], side_info: &[u8]) -> u16 {
        let crc = self.update(self.init, &[header[2], header[3]]);
        self.update(crc, side_info)
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new(&CRC_FRAME_PROTECTION_ALG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc16_check_value() {
        let crc = Crc16::default();
        assert_eq!(crc.update(crc.init, b"123456789"), 0xAEE7);

        let split = crc.update(crc.update(crc.init, b"1234"), b"56789");
        assert_eq!(split, 0xAEE7);
    }
}
