// ----------------------------------------------------------------------------
// Word format

/// Width of one instruction word in bits.
pub const WORD_WIDTH: usize = 16;

/// First RAM address handed out to auto-allocated variables.
pub const VAR_BASE: u16 = 16;

/// Opcode prefix of every compute instruction.
pub const COMPUTE_PREFIX: &str = "111";

/// Encode an address as a `WORD_WIDTH` binary string, MSB first.
pub fn to_word(addr: u16) -> String {
    format!("{:0width$b}", addr, width = WORD_WIDTH)
}

/// Check that `s` looks like an encoded word.
pub fn is_word(s: &str) -> bool {
    s.len() == WORD_WIDTH && is_bits(s)
}

/// Non-empty string over `{0,1}`.
pub fn is_bits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b == b'0' || b == b'1')
}

#[test]
fn test() {
    assert_eq!(to_word(0), "0000000000000000");
    assert_eq!(to_word(2), "0000000000000010");
    assert_eq!(to_word(16384), "0100000000000000");
    assert_eq!(to_word(u16::MAX), "1111111111111111");
    assert!(is_word(&to_word(24576)));
    assert!(!is_word("0101"));
    assert!(!is_word("000000000000000x"));
    assert!(is_bits("0"));
    assert!(!is_bits(""));
}
