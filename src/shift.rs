//! Shift and copy primitives shared by [ByteView](crate::ByteView) and
//! [ByteBuffer](crate::ByteBuffer).
//!
//! None of these validate their arguments beyond what slice indexing does:
//! callers prove the ranges are in bounds before calling, so an out of range
//! call here is a bug in the caller.

use crate::ByteOrder;

/// Moves `data[offset..data.len() - amount]` up by `amount` bytes, opening a
/// gap of `amount` bytes at `offset`. The gap keeps its old contents.
///
/// `data` must include the `amount` bytes of headroom at its end.
#[inline]
pub fn shift_right(data: &mut [u8], offset: usize, amount: usize) -> usize {
    debug_assert!(offset + amount <= data.len());
    let end = data.len() - amount;
    data.copy_within(offset..end, offset + amount);
    amount
}

/// Moves `data[offset + amount..]` down by `amount` bytes, closing the gap at
/// `offset`. The last `amount` bytes of `data` keep their old contents.
#[inline]
pub fn shift_left(data: &mut [u8], offset: usize, amount: usize) -> usize {
    debug_assert!(offset + amount <= data.len());
    data.copy_within(offset + amount.., offset);
    amount
}

/// Copies `src` into `dst` byte for byte. Both must have the same length.
#[inline]
pub fn copy_forward(dst: &mut [u8], src: &[u8]) -> usize {
    dst.copy_from_slice(src);
    dst.len()
}

/// Copies `src` into `dst` with the byte order flipped. Both must have the same length.
#[inline]
pub fn copy_reverse(dst: &mut [u8], src: &[u8]) -> usize {
    debug_assert_eq!(dst.len(), src.len());
    for (dst, src) in dst.iter_mut().zip(src.iter().rev()) {
        *dst = *src;
    }
    dst.len()
}

#[inline(always)]
pub(crate) fn copy_ordered(dst: &mut [u8], src: &[u8], order: ByteOrder) -> usize {
    match order {
        ByteOrder::Native => copy_forward(dst, src),
        ByteOrder::Reversed => copy_reverse(dst, src),
    }
}
