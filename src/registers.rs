use crate::error::{Error, Result};

/// Conventional o32 names, indexed by register number.
pub const NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", //
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", //
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", //
    "t8", "t9", "k0", "k1", "gp", "sp", "fp", "ra",
];

pub fn reg_name(index: u8) -> Result<&'static str> {
    NAMES
        .get(index as usize)
        .copied()
        .ok_or(Error::UnsupportedRegister { index })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names() {
        assert_eq!(reg_name(0).unwrap(), "zero");
        assert_eq!(reg_name(1).unwrap(), "at");
        assert_eq!(reg_name(8).unwrap(), "t0");
        assert_eq!(reg_name(15).unwrap(), "t7");
        assert_eq!(reg_name(24).unwrap(), "t8");
        assert_eq!(reg_name(25).unwrap(), "t9");
        assert_eq!(reg_name(31).unwrap(), "ra");
    }

    #[test]
    fn every_five_bit_index_has_a_name() {
        for i in 0..32u8 {
            assert!(reg_name(i).is_ok(), "r{i}");
        }
        assert_eq!(reg_name(32), Err(Error::UnsupportedRegister { index: 32 }));
    }
}
