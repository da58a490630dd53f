//! MAC address value type.
//!
//! The canonical text form is six two-digit hex groups separated by `:`.
//! Input may use `-` as the separator; it is rewritten on construction.
//! Letter case is kept as given, so `aa:bb:..` and `AA:BB:..` are distinct
//! stored values.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated MAC address in `XX:XX:XX:XX:XX:XX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    /// Length of the textual form, separators included.
    pub const TEXT_LEN: usize = 17;

    /// Parses a MAC address, accepting `:` or `-` separators in any case.
    pub fn parse(s: &str) -> Result<Self> {
        if !Self::is_valid(s) {
            return Err(Error::InvalidMac(s.to_string()));
        }
        Ok(Self(s.replace('-', ":")))
    }

    /// Returns true when `s` is six hex pairs joined by `:` or `-`.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == Self::TEXT_LEN
            && bytes.iter().enumerate().all(|(i, b)| {
                if i % 3 == 2 {
                    *b == b':' || *b == b'-'
                } else {
                    b.is_ascii_hexdigit()
                }
            })
    }

    /// Builds the upper-case canonical form from raw octets.
    #[must_use]
    pub fn from_octets(octets: [u8; 6]) -> Self {
        Self(format!(
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            octets[0], octets[1], octets[2], octets[3], octets[4], octets[5]
        ))
    }

    /// Returns the six octets of the address.
    #[must_use]
    pub fn octets(&self) -> [u8; 6] {
        let bytes = self.0.as_bytes();
        let mut octets = [0u8; 6];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = (hex_val(bytes[i * 3]) << 4) | hex_val(bytes[i * 3 + 1]);
        }
        octets
    }

    /// Returns the canonical text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn hex_val(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
