//! Name-resolution flag selection
//!
//! The resolution option takes a string of single-letter flags choosing
//! which classes of addresses and ports get resolved to names. Parsing
//! is all-or-nothing: one unknown letter rejects the whole string and no
//! partial set reaches the engine.

use bitflags::bitflags;

bitflags! {
    /// Which classes of addresses and ports are resolved to names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ResolvFlags: u8 {
        /// Use addresses found in captured DNS traffic ('d')
        const CAPTURED_DNS      = 0b0000_0001;
        /// MAC address resolution ('m')
        const MAC_NAME          = 0b0000_0010;
        /// Network address resolution ('n')
        const NETWORK_NAME      = 0b0000_0100;
        /// Ask external resolvers for network names ('N')
        const EXTERNAL_RESOLVER = 0b0000_1000;
        /// Transport-layer port number resolution ('t')
        const TRANSPORT_NAME    = 0b0001_0000;
        /// VLAN ID to name resolution ('v')
        const VLAN_NAME         = 0b0010_0000;
    }
}

impl ResolvFlags {
    /// Parse a resolution-flag string.
    ///
    /// Rejects on the first character outside the set, returning it.
    /// The empty string is a valid empty set.
    pub fn from_letters(s: &str) -> Result<Self, char> {
        let mut flags = Self::empty();
        for c in s.chars() {
            match c {
                'd' => flags |= Self::CAPTURED_DNS,
                'm' => flags |= Self::MAC_NAME,
                'n' => flags |= Self::NETWORK_NAME,
                'N' => flags |= Self::EXTERNAL_RESOLVER,
                't' => flags |= Self::TRANSPORT_NAME,
                'v' => flags |= Self::VLAN_NAME,
                _ => return Err(c),
            }
        }
        Ok(flags)
    }

    /// Letter form, for diagnostics.
    pub fn letters(&self) -> String {
        let mut s = String::with_capacity(6);
        if self.contains(Self::CAPTURED_DNS) {
            s.push('d');
        }
        if self.contains(Self::MAC_NAME) {
            s.push('m');
        }
        if self.contains(Self::NETWORK_NAME) {
            s.push('n');
        }
        if self.contains(Self::EXTERNAL_RESOLVER) {
            s.push('N');
        }
        if self.contains(Self::TRANSPORT_NAME) {
            s.push('t');
        }
        if self.contains(Self::VLAN_NAME) {
            s.push('v');
        }
        s
    }
}

impl std::fmt::Display for ResolvFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters())
    }
}
