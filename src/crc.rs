//! Checksum accumulators fed from byte views and buffers.
//!
//! Both CRCs are computed bit by bit, trading speed for not needing a lookup
//! table on small targets.

/// An incremental checksum. Feeding `a` then `b` gives the same value as
/// feeding `a` and `b` concatenated.
pub trait Digest {
    type Output: Copy;

    fn reset(&mut self);

    /// Consumes `bytes` and returns the running value.
    fn update(&mut self, bytes: &[u8]) -> Self::Output;

    fn value(&self) -> Self::Output;

    fn checksum(bytes: &[u8]) -> Self::Output
    where
        Self: Default,
    {
        Self::default().update(bytes)
    }
}

/// CRC-16/CCITT-FALSE: poly 0x1021, init 0xFFFF, no reflection, no final xor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc16CcittFalse {
    crc: u16,
}

impl Crc16CcittFalse {
    const INIT: u16 = 0xFFFF;
    const POLY: u16 = 0x1021;

    pub const fn new() -> Self {
        Crc16CcittFalse { crc: Self::INIT }
    }
}

impl Default for Crc16CcittFalse {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Crc16CcittFalse {
    type Output = u16;

    fn reset(&mut self) {
        self.crc = Self::INIT;
    }

    fn update(&mut self, bytes: &[u8]) -> u16 {
        for &byte in bytes {
            self.crc ^= (byte as u16) << 8;
            for _ in 0..8 {
                self.crc = if self.crc & 0x8000 != 0 {
                    (self.crc << 1) ^ Self::POLY
                } else {
                    self.crc << 1
                };
            }
        }
        self.crc
    }

    fn value(&self) -> u16 {
        self.crc
    }
}

/// CRC-32 (IEEE 802.3): reflected poly 0xEDB88320, init and final xor 0xFFFFFFFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc32 {
    // stored before the final xor
    state: u32,
}

impl Crc32 {
    const INIT: u32 = 0xFFFF_FFFF;
    const POLY: u32 = 0xEDB8_8320;

    pub const fn new() -> Self {
        Crc32 { state: Self::INIT }
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Digest for Crc32 {
    type Output = u32;

    fn reset(&mut self) {
        self.state = Self::INIT;
    }

    fn update(&mut self, bytes: &[u8]) -> u32 {
        for &byte in bytes {
            self.state ^= byte as u32;
            for _ in 0..8 {
                self.state = if self.state & 1 != 0 {
                    (self.state >> 1) ^ Self::POLY
                } else {
                    self.state >> 1
                };
            }
        }
        self.value()
    }

    fn value(&self) -> u32 {
        !self.state
    }
}
