//! 32-bit string hashes behind the availability oracle
//!
//! Both hashes walk UTF-16 code units and wrap at 2^32, so the same
//! inputs produce the same numbers in a browser and here.

/// Multiplier for the reservation seed hash
pub const SEED_MULTIPLIER: u32 = 31;

/// Multiplier for the per-table hash
pub const TABLE_MULTIPLIER: u32 = 33;

/// `acc = acc * 31 + unit (mod 2^32)` over the seed, starting at 0
pub fn seed_hash(seed: &str) -> u32 {
    fold_units(0, seed, SEED_MULTIPLIER)
}

/// `h = h * 33 + unit (mod 2^32)` over the table id, starting at `seed_hash`
///
/// An empty id hashes to `seed_hash` itself.
pub fn table_hash(seed_hash: u32, table_id: &str) -> u32 {
    fold_units(seed_hash, table_id, TABLE_MULTIPLIER)
}

#[inline]
fn fold_units(start: u32, s: &str, multiplier: u32) -> u32 {
    s.encode_utf16().fold(start, |acc, unit| {
        acc.wrapping_mul(multiplier).wrapping_add(u32::from(unit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_hash_known_values() {
        assert_eq!(seed_hash(""), 0);
        assert_eq!(seed_hash("a"), 97);
        assert_eq!(seed_hash("ab"), 97 * 31 + 98);
        assert_eq!(seed_hash("1|2025-01-01|18:00"), 2_686_979_683);
    }

    #[test]
    fn test_table_hash_known_values() {
        let seed = seed_hash("1|2025-01-01|18:00");
        assert_eq!(table_hash(seed, "A1"), 1_248_148_405);
        assert_eq!(table_hash(seed, "C1"), 1_248_148_471);
    }

    #[test]
    fn test_empty_table_id_is_seed() {
        assert_eq!(table_hash(12345, ""), 12345);
        assert_eq!(table_hash(u32::MAX, ""), u32::MAX);
    }

    #[test]
    fn test_wraps_at_u32() {
        // (2^32 - 1) * 33 + 65 wraps to 32 (mod 2^32)
        let expected = ((u64::from(u32::MAX) * 33 + 65) % (1u64 << 32)) as u32;
        assert_eq!(table_hash(u32::MAX, "A"), expected);
        assert_eq!(expected, 32);
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // U+D55C (한) is a single UTF-16 unit
        assert_eq!(seed_hash("한"), 0xD55C);
        // U+1F37D is a surrogate pair: 0xD83C 0xDF7D
        assert_eq!(seed_hash("🍽"), 0xD83C * 31 + 0xDF7D);
    }
}
