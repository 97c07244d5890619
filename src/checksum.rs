//! Kobuki frames carry a single trailing checksum byte: the XOR of the
//! length byte and every payload-region byte. Any single corrupted bit in
//! the covered region changes the result, which is all the integrity this
//! line-rate serial link affords per byte.

/// Computes the frame checksum over the length byte and payload region.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, byte| acc ^ byte)
}

#[cfg(test)]
mod tests {
    use super::checksum;

    #[test]
    fn xor_fold() {
        assert_eq!(checksum(&[]), 0x00);
        assert_eq!(checksum(&[0x02, 0x07, 0x02]), 0x07);
    }

    #[test]
    fn single_bit_sensitivity() {
        let bytes = [0x12, 0x0F, 0x00, 0xA5];
        let reference = checksum(&bytes);
        for i in 0..bytes.len() {
            for bit in 0..8 {
                let mut flipped = bytes;
                flipped[i] ^= 1 << bit;
                assert_ne!(checksum(&flipped), reference);
            }
        }
    }
}
