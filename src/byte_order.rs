/// Selects whether multi-byte values are copied as-is or byte-reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ByteOrder {
    /// The byte order of the running platform.
    #[default]
    Native,
    /// The opposite of [ByteOrder::Native].
    Reversed,
}

impl ByteOrder {
    #[cfg(target_endian = "little")]
    pub const LITTLE_ENDIAN: ByteOrder = ByteOrder::Native;
    #[cfg(target_endian = "little")]
    pub const BIG_ENDIAN: ByteOrder = ByteOrder::Reversed;

    #[cfg(target_endian = "big")]
    pub const LITTLE_ENDIAN: ByteOrder = ByteOrder::Reversed;
    #[cfg(target_endian = "big")]
    pub const BIG_ENDIAN: ByteOrder = ByteOrder::Native;

    #[inline(always)]
    pub const fn is_native(self) -> bool {
        matches!(self, ByteOrder::Native)
    }

    pub const fn flipped(self) -> Self {
        match self {
            ByteOrder::Native => ByteOrder::Reversed,
            ByteOrder::Reversed => ByteOrder::Native,
        }
    }
}
