use crate::{
    ByteOrder, Digest, Scalar,
    error::{BlobError, BlobResult, OrRaise},
    shift::copy_ordered,
};

/// The read surface shared by [ByteView] and [ByteBuffer](crate::ByteBuffer).
///
/// Implementors only expose the region that is currently readable; every
/// offset taken by the provided methods is relative to the start of that
/// region. All `try_` methods validate the whole requested range, including
/// `offset + len` overflowing `usize`, before copying a single byte.
pub trait ReadBytes {
    fn readable(&self) -> &[u8];

    #[inline]
    fn readable_len(&self) -> usize {
        self.readable().len()
    }

    /// Borrows `len` readable bytes starting at `offset`.
    #[inline]
    fn try_peek(&self, offset: usize, len: usize) -> BlobResult<&[u8]> {
        let readable = self.readable();
        offset
            .checked_add(len)
            .and_then(|end| readable.get(offset..end))
            .ok_or(BlobError::Read {
                len,
                available: readable.len(),
            })
    }

    /// Borrows the last `len` readable bytes.
    #[inline]
    fn try_peek_back(&self, len: usize) -> BlobResult<&[u8]> {
        let available = self.readable_len();
        let offset = available
            .checked_sub(len)
            .ok_or(BlobError::Read { len, available })?;
        self.try_peek(offset, len)
    }

    #[inline]
    fn try_read_bytes_ordered(
        &self,
        offset: usize,
        target: &mut [u8],
        order: ByteOrder,
    ) -> BlobResult<()> {
        let src = self.try_peek(offset, target.len())?;
        copy_ordered(target, src, order);
        Ok(())
    }

    #[inline]
    fn try_read_back_bytes_ordered(&self, target: &mut [u8], order: ByteOrder) -> BlobResult<()> {
        let src = self.try_peek_back(target.len())?;
        copy_ordered(target, src, order);
        Ok(())
    }

    fn try_read_bytes(&self, offset: usize, target: &mut [u8]) -> BlobResult<()> {
        self.try_read_bytes_ordered(offset, target, ByteOrder::Native)
    }
    fn try_read_bytes_reverse(&self, offset: usize, target: &mut [u8]) -> BlobResult<()> {
        self.try_read_bytes_ordered(offset, target, ByteOrder::Reversed)
    }
    fn try_read_front_bytes(&self, target: &mut [u8]) -> BlobResult<()> {
        self.try_read_bytes_ordered(0, target, ByteOrder::Native)
    }
    fn try_read_front_bytes_reverse(&self, target: &mut [u8]) -> BlobResult<()> {
        self.try_read_bytes_ordered(0, target, ByteOrder::Reversed)
    }
    fn try_read_back_bytes(&self, target: &mut [u8]) -> BlobResult<()> {
        self.try_read_back_bytes_ordered(target, ByteOrder::Native)
    }
    fn try_read_back_bytes_reverse(&self, target: &mut [u8]) -> BlobResult<()> {
        self.try_read_back_bytes_ordered(target, ByteOrder::Reversed)
    }

    #[track_caller]
    fn read_bytes(&self, offset: usize, target: &mut [u8]) {
        self.try_read_bytes(offset, target).or_raise()
    }
    #[track_caller]
    fn read_bytes_reverse(&self, offset: usize, target: &mut [u8]) {
        self.try_read_bytes_reverse(offset, target).or_raise()
    }
    #[track_caller]
    fn read_front_bytes(&self, target: &mut [u8]) {
        self.try_read_front_bytes(target).or_raise()
    }
    #[track_caller]
    fn read_front_bytes_reverse(&self, target: &mut [u8]) {
        self.try_read_front_bytes_reverse(target).or_raise()
    }
    #[track_caller]
    fn read_back_bytes(&self, target: &mut [u8]) {
        self.try_read_back_bytes(target).or_raise()
    }
    #[track_caller]
    fn read_back_bytes_reverse(&self, target: &mut [u8]) {
        self.try_read_back_bytes_reverse(target).or_raise()
    }

    /// Reads a `T` stored at `offset` in the given byte order.
    #[inline]
    fn try_read<T: Scalar>(&self, offset: usize, order: ByteOrder) -> BlobResult<T> {
        let mut bytes = T::Bytes::default();
        self.try_read_bytes_ordered(offset, bytes.as_mut(), order)?;
        Ok(T::from_native_bytes(bytes))
    }
    #[inline]
    fn try_read_front<T: Scalar>(&self, order: ByteOrder) -> BlobResult<T> {
        self.try_read(0, order)
    }
    #[inline]
    fn try_read_back<T: Scalar>(&self, order: ByteOrder) -> BlobResult<T> {
        let mut bytes = T::Bytes::default();
        self.try_read_back_bytes_ordered(bytes.as_mut(), order)?;
        Ok(T::from_native_bytes(bytes))
    }

    #[track_caller]
    fn read<T: Scalar>(&self, offset: usize, order: ByteOrder) -> T {
        self.try_read(offset, order).or_raise()
    }
    #[track_caller]
    fn read_front<T: Scalar>(&self, order: ByteOrder) -> T {
        self.try_read_front(order).or_raise()
    }
    #[track_caller]
    fn read_back<T: Scalar>(&self, order: ByteOrder) -> T {
        self.try_read_back(order).or_raise()
    }

    /// Feeds `len` readable bytes at `offset` into `digest`, returning its running value.
    fn try_digest<D: Digest>(
        &self,
        offset: usize,
        len: usize,
        digest: &mut D,
    ) -> BlobResult<D::Output> {
        let bytes = self.try_peek(offset, len)?;
        Ok(digest.update(bytes))
    }
}

/// A read-only view over borrowed bytes, consumed from both ends.
///
/// Reads never move the cursors; only the remove and extract operations do.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ByteView<'a> {
    data: &'a [u8],
    // SAFETY: front <= back <= data.len() must always be upheld
    front: usize,
    back: usize,
}

impl<'a> ByteView<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        ByteView {
            data,
            front: 0,
            back: data.len(),
        }
    }

    pub const fn total_len(&self) -> usize {
        self.data.len()
    }

    pub const fn remaining_len(&self) -> usize {
        self.back - self.front
    }

    /// Bytes removed from either end so far.
    pub const fn consumed_len(&self) -> usize {
        self.data.len() - self.remaining_len()
    }

    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        // SAFETY: front <= back <= data.len() is an invariant of this data structure
        unsafe { self.data.get_unchecked(self.front..self.back) }
    }

    pub fn reset(&mut self) {
        self.front = 0;
        self.back = self.data.len();
    }

    #[inline]
    fn check_remove(&self, count: usize) -> BlobResult<()> {
        let available = self.remaining_len();
        if available < count {
            return Err(BlobError::Remove {
                len: count,
                available,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn try_remove_front(&mut self, count: usize) -> BlobResult<()> {
        self.check_remove(count)?;
        self.front += count;
        Ok(())
    }

    #[inline]
    pub fn try_remove_back(&mut self, count: usize) -> BlobResult<()> {
        self.check_remove(count)?;
        self.back -= count;
        Ok(())
    }

    pub fn try_remove_front_scalar<T: Scalar>(&mut self) -> BlobResult<()> {
        self.try_remove_front(T::SIZE)
    }

    pub fn try_remove_back_scalar<T: Scalar>(&mut self) -> BlobResult<()> {
        self.try_remove_back(T::SIZE)
    }

    #[track_caller]
    pub fn remove_front(&mut self, count: usize) {
        self.try_remove_front(count).or_raise()
    }

    #[track_caller]
    pub fn remove_back(&mut self, count: usize) {
        self.try_remove_back(count).or_raise()
    }

    #[track_caller]
    pub fn remove_front_scalar<T: Scalar>(&mut self) {
        self.try_remove_front_scalar::<T>().or_raise()
    }

    #[track_caller]
    pub fn remove_back_scalar<T: Scalar>(&mut self) {
        self.try_remove_back_scalar::<T>().or_raise()
    }

    /// Removes `len` bytes from the front and hands them out.
    #[inline]
    pub fn try_take_front(&mut self, len: usize) -> BlobResult<&'a [u8]> {
        let taken = self.remaining().get(..len).ok_or(BlobError::Read {
            len,
            available: self.remaining_len(),
        })?;
        self.front += len;
        Ok(taken)
    }

    #[track_caller]
    pub fn take_front(&mut self, len: usize) -> &'a [u8] {
        self.try_take_front(len).or_raise()
    }

    /// Reads a `T` from the front and removes it. Nothing moves if either
    /// step fails.
    pub fn try_extract_front<T: Scalar>(&mut self, order: ByteOrder) -> BlobResult<T> {
        let value = self.try_read_front(order)?;
        self.try_remove_front(T::SIZE)?;
        Ok(value)
    }

    /// Reads a `T` from the back and removes it. Nothing moves if either
    /// step fails.
    pub fn try_extract_back<T: Scalar>(&mut self, order: ByteOrder) -> BlobResult<T> {
        let value = self.try_read_back(order)?;
        self.try_remove_back(T::SIZE)?;
        Ok(value)
    }

    #[track_caller]
    pub fn extract_front<T: Scalar>(&mut self, order: ByteOrder) -> T {
        self.try_extract_front(order).or_raise()
    }

    #[track_caller]
    pub fn extract_back<T: Scalar>(&mut self, order: ByteOrder) -> T {
        self.try_extract_back(order).or_raise()
    }
}

impl ReadBytes for ByteView<'_> {
    #[inline]
    fn readable(&self) -> &[u8] {
        self.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    // claims four bytes but only carries one
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Lopsided(u8);

    impl Scalar for Lopsided {
        const SIZE: usize = 4;
        type Bytes = [u8; 1];

        fn to_native_bytes(self) -> [u8; 1] {
            [self.0]
        }

        fn from_native_bytes(bytes: [u8; 1]) -> Self {
            Lopsided(bytes[0])
        }
    }

    #[test]
    fn lengths() {
        let mut view = ByteView::new(&DATA);
        assert_eq!(view.total_len(), 8);
        assert_eq!(view.remaining_len(), 8);
        assert_eq!(view.consumed_len(), 0);

        view.remove_front(3);
        view.remove_back(2);
        assert_eq!(view.remaining_len(), 3);
        assert_eq!(view.consumed_len(), 5);
        assert_eq!(view.remaining(), &[0x04, 0x05, 0x06]);

        view.reset();
        assert_eq!(view.remaining_len(), view.total_len());
        assert_eq!(view.remaining(), &DATA);
    }

    #[test]
    fn reads_are_relative_to_front() {
        let mut view = ByteView::new(&DATA);
        view.remove_front(2);
        let mut target = [0; 3];
        view.try_read_bytes(1, &mut target).unwrap();
        assert_eq!(target, [0x04, 0x05, 0x06]);
        view.try_read_bytes_reverse(1, &mut target).unwrap();
        assert_eq!(target, [0x06, 0x05, 0x04]);
        view.try_read_front_bytes(&mut target).unwrap();
        assert_eq!(target, [0x03, 0x04, 0x05]);
        view.try_read_back_bytes(&mut target).unwrap();
        assert_eq!(target, [0x06, 0x07, 0x08]);
        view.try_read_back_bytes_reverse(&mut target).unwrap();
        assert_eq!(target, [0x08, 0x07, 0x06]);
        view.try_read_front_bytes_reverse(&mut target).unwrap();
        assert_eq!(target, [0x05, 0x04, 0x03]);
        // reads do not consume
        assert_eq!(view.remaining_len(), 6);
    }

    #[test]
    fn read_bounds() {
        let mut view = ByteView::new(&DATA);
        view.remove_back(2);
        let mut target = [0xEE; 2];
        assert!(view.try_read_bytes(4, &mut target).is_ok());
        assert_eq!(
            view.try_read_bytes(5, &mut target),
            Err(BlobError::Read {
                len: 2,
                available: 6
            })
        );
        assert_eq!(target, [0x05, 0x06]);
        assert!(view.try_read_bytes(usize::MAX, &mut target).is_err());
        let mut big = [0; 7];
        assert!(view.try_read_back_bytes(&mut big).is_err());
        assert!(view.try_read_front_bytes(&mut big).is_err());
    }

    #[test]
    fn typed_reads() {
        let view = ByteView::new(&DATA);
        assert_eq!(
            view.read::<u16>(0, ByteOrder::BIG_ENDIAN),
            0x0102,
            "big endian at front"
        );
        assert_eq!(view.read::<u16>(0, ByteOrder::LITTLE_ENDIAN), 0x0201);
        assert_eq!(view.read_back::<u32>(ByteOrder::BIG_ENDIAN), 0x0506_0708);
        assert_eq!(view.read_front::<i8>(ByteOrder::Native), 1);
        let native = view.read::<u32>(2, ByteOrder::Native);
        let reversed = view.read::<u32>(2, ByteOrder::Reversed);
        assert_eq!(native.swap_bytes(), reversed);
        assert!(view.try_read::<u64>(1, ByteOrder::Native).is_err());
    }

    #[test]
    fn remove_never_crosses() {
        let mut view = ByteView::new(&DATA);
        assert!(view.try_remove_front(5).is_ok());
        assert_eq!(
            view.try_remove_back(4),
            Err(BlobError::Remove {
                len: 4,
                available: 3
            })
        );
        assert!(view.try_remove_back(3).is_ok());
        assert_eq!(view.remaining_len(), 0);
        assert!(view.try_remove_front(1).is_err());
        assert!(view.try_remove_front(0).is_ok());
    }

    #[test]
    fn remove_scalars() {
        let mut view = ByteView::new(&DATA);
        view.try_remove_front_scalar::<u16>().unwrap();
        view.try_remove_back_scalar::<u32>().unwrap();
        assert_eq!(view.remaining(), &[0x03, 0x04]);
        assert!(view.try_remove_back_scalar::<u32>().is_err());
    }

    #[test]
    fn extract_from_both_ends() {
        let mut view = ByteView::new(&DATA);
        assert_eq!(view.extract_front::<u16>(ByteOrder::BIG_ENDIAN), 0x0102);
        assert_eq!(view.extract_back::<u16>(ByteOrder::LITTLE_ENDIAN), 0x0807);
        assert_eq!(view.remaining_len(), 4);
        assert!(view.try_extract_front::<u64>(ByteOrder::Native).is_err());
        assert_eq!(view.remaining_len(), 4, "failed extract must not move");
        assert_eq!(view.extract_front::<u32>(ByteOrder::BIG_ENDIAN), 0x0304_0506);
        assert_eq!(
            view.try_extract_back::<u8>(ByteOrder::Native),
            Err(BlobError::Read {
                len: 1,
                available: 0
            })
        );
    }

    #[test]
    fn extract_with_lopsided_scalar_keeps_cursors() {
        let mut view = ByteView::new(&DATA[..2]);
        let err = BlobError::Remove {
            len: 4,
            available: 2,
        };
        assert_eq!(
            view.try_extract_front::<Lopsided>(ByteOrder::Native),
            Err(err)
        );
        assert_eq!(view.try_extract_back::<Lopsided>(ByteOrder::Native), Err(err));
        assert_eq!(view.remaining_len(), 2);
        assert_eq!(view.remaining(), &DATA[..2]);
    }

    #[test]
    fn asserting_byte_reads() {
        let view = ByteView::new(&DATA);
        let mut target = [0; 2];
        view.read_bytes(3, &mut target);
        assert_eq!(target, [0x04, 0x05]);
        view.read_bytes_reverse(3, &mut target);
        assert_eq!(target, [0x05, 0x04]);
        view.read_front_bytes(&mut target);
        assert_eq!(target, [0x01, 0x02]);
        view.read_front_bytes_reverse(&mut target);
        assert_eq!(target, [0x02, 0x01]);
        view.read_back_bytes(&mut target);
        assert_eq!(target, [0x07, 0x08]);
        view.read_back_bytes_reverse(&mut target);
        assert_eq!(target, [0x08, 0x07]);
    }

    #[test]
    fn take_front() {
        let mut view = ByteView::new(&DATA);
        assert_eq!(view.try_take_front(3), Ok(&DATA[..3]));
        assert!(view.try_take_front(6).is_err());
        assert_eq!(view.try_take_front(5), Ok(&DATA[3..]));
        view.reset();
        assert_eq!(view.take_front(2), &DATA[..2]);
        view.remove_front_scalar::<u16>();
        view.remove_back_scalar::<u32>();
        assert_eq!(view.remaining_len(), 0);
    }

    #[test]
    #[should_panic(expected = "read of 8 bytes failed")]
    fn extract_past_end_raises_read() {
        let mut view = ByteView::new(&DATA[..4]);
        let _ = view.extract_back::<u64>(ByteOrder::Native);
    }

    #[test]
    #[should_panic(expected = "remove of 9 bytes failed")]
    fn remove_past_end_raises_remove() {
        let mut view = ByteView::new(&DATA);
        view.remove_front(9);
    }

    #[test]
    #[should_panic(expected = "read of 3 bytes failed")]
    fn byte_read_past_end_raises_read() {
        let view = ByteView::new(&DATA);
        let mut target = [0; 3];
        view.read_bytes(6, &mut target);
    }

    #[test]
    #[should_panic(expected = "read of 9 bytes failed")]
    fn take_past_end_raises_read() {
        let mut view = ByteView::new(&DATA);
        let _ = view.take_front(9);
    }

    #[test]
    #[should_panic(expected = "remove of 4 bytes failed")]
    fn scalar_remove_past_end_raises_remove() {
        let mut view = ByteView::new(&DATA[..3]);
        view.remove_back_scalar::<u32>();
    }
}
