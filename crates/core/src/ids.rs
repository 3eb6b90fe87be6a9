use std::fmt;

use serde::{Deserialize, Serialize};

/// A network identifier as the sequencer stores it: a bytes32 value,
/// usually a short ASCII label zero-padded on the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkId(pub [u8; 32]);

impl NetworkId {
    /// Build a network id from a human label, truncating at 32 bytes.
    pub fn from_label(label: &str) -> Self {
        let mut bytes = [0u8; 32];
        let src = label.as_bytes();
        let len = src.len().min(32);
        bytes[..len].copy_from_slice(&src[..len]);
        NetworkId(bytes)
    }

    /// The label with trailing zero padding stripped.
    pub fn label(&self) -> String {
        let end = self
            .0
            .iter()
            .rposition(|&b| b != 0)
            .map_or(0, |pos| pos + 1);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        if !label.is_empty() && label.bytes().all(|b| b.is_ascii_graphic()) {
            f.write_str(&label)
        } else {
            write!(f, "0x{}", hex::encode(self.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_round_trips() {
        let id = NetworkId::from_label("NTWK-MAIN");
        assert_eq!(id.label(), "NTWK-MAIN");
        assert_eq!(id.to_string(), "NTWK-MAIN");
    }

    #[test]
    fn long_label_truncates_at_32_bytes() {
        let long = "a".repeat(40);
        let id = NetworkId::from_label(&long);
        assert_eq!(id.label().len(), 32);
    }

    #[test]
    fn non_printable_id_displays_as_hex() {
        let id = NetworkId([0x01; 32]);
        assert!(id.to_string().starts_with("0x0101"));
    }
}
