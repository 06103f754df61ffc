use core::fmt::{self, Debug};

use crate::{
    ByteOrder, ReadBytes, Scalar,
    error::{BlobError, BlobResult, OrRaise},
    shift::{copy_ordered, shift_left, shift_right},
};

/// A fixed-capacity byte buffer with a single "used" cursor.
///
/// `[0, used)` is the logical content and `[used, capacity)` is free space
/// that inserts grow into. Inserts and removes happen in place by shifting
/// the bytes behind the touched range. The storage is either borrowed
/// (`ByteBuffer<&mut [u8]>`) or owned inline ([FixedBuffer]).
pub struct ByteBuffer<S> {
    storage: S,
    // SAFETY: used <= storage.as_ref().len() must always be upheld
    used: usize,
}

/// A [ByteBuffer] that owns `N` bytes of inline storage.
pub type FixedBuffer<const N: usize> = ByteBuffer<[u8; N]>;

impl<S: AsRef<[u8]>> ByteBuffer<S> {
    /// Wraps `storage` with no bytes in use.
    pub const fn new(storage: S) -> Self {
        ByteBuffer { storage, used: 0 }
    }

    /// Wraps `storage` treating its first `used` bytes as content.
    pub fn with_used(storage: S, used: usize) -> BlobResult<Self> {
        let capacity = storage.as_ref().len();
        if used > capacity {
            return Err(BlobError::Position {
                current: 0,
                requested: used,
                capacity,
            });
        }
        Ok(ByteBuffer { storage, used })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.as_ref().len()
    }

    #[inline]
    pub const fn used_len(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.capacity() - self.used
    }

    pub const fn is_empty(&self) -> bool {
        self.used == 0
    }

    pub fn is_full(&self) -> bool {
        self.used == self.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: used <= capacity is an invariant of this data structure
        unsafe { self.storage.as_ref().get_unchecked(..self.used) }
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> ByteBuffer<S> {
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let used = self.used;
        // SAFETY: used <= capacity is an invariant of this data structure
        unsafe { self.storage.as_mut().get_unchecked_mut(..used) }
    }

    /// The free region behind the content. Bytes written here become content
    /// once committed with [ByteBuffer::adjust_position].
    pub fn spare_mut(&mut self) -> &mut [u8] {
        let used = self.used;
        // SAFETY: used <= capacity is an invariant of this data structure
        unsafe { self.storage.as_mut().get_unchecked_mut(used..) }
    }

    /// Forgets the content. The storage itself is left untouched.
    pub fn clear(&mut self) {
        self.used = 0;
    }

    pub fn try_set_position(&mut self, position: usize) -> BlobResult<()> {
        let capacity = self.capacity();
        if position > capacity {
            return Err(BlobError::Position {
                current: self.used,
                requested: position,
                capacity,
            });
        }
        tracing::trace!(from = self.used, to = position, "set buffer position");
        self.used = position;
        Ok(())
    }

    /// Moves the used cursor by `delta` bytes in either direction.
    ///
    /// A move below zero is reported with the wrapped `requested` position.
    pub fn try_adjust_position(&mut self, delta: isize) -> BlobResult<()> {
        let capacity = self.capacity();
        let position = self
            .used
            .checked_add_signed(delta)
            .filter(|&position| position <= capacity)
            .ok_or(BlobError::Position {
                current: self.used,
                requested: self.used.wrapping_add_signed(delta),
                capacity,
            })?;
        tracing::trace!(from = self.used, to = position, "adjust buffer position");
        self.used = position;
        Ok(())
    }

    #[track_caller]
    pub fn set_position(&mut self, position: usize) {
        self.try_set_position(position).or_raise()
    }

    #[track_caller]
    pub fn adjust_position(&mut self, delta: isize) {
        self.try_adjust_position(delta).or_raise()
    }

    fn try_overwrite_ordered(
        &mut self,
        offset: usize,
        data: &[u8],
        order: ByteOrder,
    ) -> BlobResult<()> {
        let err = BlobError::Overwrite {
            len: data.len(),
            available: self.used,
        };
        let end = offset
            .checked_add(data.len())
            .filter(|&end| end <= self.used)
            .ok_or(err)?;
        copy_ordered(&mut self.storage.as_mut()[offset..end], data, order);
        Ok(())
    }

    fn try_overwrite_back_ordered(&mut self, data: &[u8], order: ByteOrder) -> BlobResult<()> {
        let offset = self.used.checked_sub(data.len()).ok_or(BlobError::Overwrite {
            len: data.len(),
            available: self.used,
        })?;
        self.try_overwrite_ordered(offset, data, order)
    }

    pub fn try_overwrite_bytes(&mut self, offset: usize, data: &[u8]) -> BlobResult<()> {
        self.try_overwrite_ordered(offset, data, ByteOrder::Native)
    }
    pub fn try_overwrite_bytes_reverse(&mut self, offset: usize, data: &[u8]) -> BlobResult<()> {
        self.try_overwrite_ordered(offset, data, ByteOrder::Reversed)
    }
    pub fn try_overwrite_front_bytes(&mut self, data: &[u8]) -> BlobResult<()> {
        self.try_overwrite_ordered(0, data, ByteOrder::Native)
    }
    pub fn try_overwrite_front_bytes_reverse(&mut self, data: &[u8]) -> BlobResult<()> {
        self.try_overwrite_ordered(0, data, ByteOrder::Reversed)
    }
    pub fn try_overwrite_back_bytes(&mut self, data: &[u8]) -> BlobResult<()> {
        self.try_overwrite_back_ordered(data, ByteOrder::Native)
    }
    pub fn try_overwrite_back_bytes_reverse(&mut self, data: &[u8]) -> BlobResult<()> {
        self.try_overwrite_back_ordered(data, ByteOrder::Reversed)
    }

    #[track_caller]
    pub fn overwrite_bytes(&mut self, offset: usize, data: &[u8]) {
        self.try_overwrite_bytes(offset, data).or_raise()
    }
    #[track_caller]
    pub fn overwrite_bytes_reverse(&mut self, offset: usize, data: &[u8]) {
        self.try_overwrite_bytes_reverse(offset, data).or_raise()
    }
    #[track_caller]
    pub fn overwrite_front_bytes(&mut self, data: &[u8]) {
        self.try_overwrite_front_bytes(data).or_raise()
    }
    #[track_caller]
    pub fn overwrite_front_bytes_reverse(&mut self, data: &[u8]) {
        self.try_overwrite_front_bytes_reverse(data).or_raise()
    }
    #[track_caller]
    pub fn overwrite_back_bytes(&mut self, data: &[u8]) {
        self.try_overwrite_back_bytes(data).or_raise()
    }
    #[track_caller]
    pub fn overwrite_back_bytes_reverse(&mut self, data: &[u8]) {
        self.try_overwrite_back_bytes_reverse(data).or_raise()
    }

    /// Replaces the `T::SIZE` bytes at `offset`, which must already be in use.
    pub fn try_overwrite<T: Scalar>(
        &mut self,
        offset: usize,
        value: T,
        order: ByteOrder,
    ) -> BlobResult<()> {
        self.try_overwrite_ordered(offset, value.to_native_bytes().as_ref(), order)
    }
    pub fn try_overwrite_front<T: Scalar>(&mut self, value: T, order: ByteOrder) -> BlobResult<()> {
        self.try_overwrite_ordered(0, value.to_native_bytes().as_ref(), order)
    }
    pub fn try_overwrite_back<T: Scalar>(&mut self, value: T, order: ByteOrder) -> BlobResult<()> {
        self.try_overwrite_back_ordered(value.to_native_bytes().as_ref(), order)
    }

    #[track_caller]
    pub fn overwrite<T: Scalar>(&mut self, offset: usize, value: T, order: ByteOrder) {
        self.try_overwrite(offset, value, order).or_raise()
    }
    #[track_caller]
    pub fn overwrite_front<T: Scalar>(&mut self, value: T, order: ByteOrder) {
        self.try_overwrite_front(value, order).or_raise()
    }
    #[track_caller]
    pub fn overwrite_back<T: Scalar>(&mut self, value: T, order: ByteOrder) {
        self.try_overwrite_back(value, order).or_raise()
    }

    fn try_insert_ordered(
        &mut self,
        offset: usize,
        data: &[u8],
        order: ByteOrder,
    ) -> BlobResult<()> {
        let len = data.len();
        let capacity = self.capacity();
        let err = BlobError::Insert {
            len,
            available: capacity - self.used,
        };
        if offset > self.used {
            return Err(err);
        }
        let used = self
            .used
            .checked_add(len)
            .filter(|&used| used <= capacity)
            .ok_or(err)?;
        let content = &mut self.storage.as_mut()[..used];
        shift_right(content, offset, len);
        self.used += copy_ordered(&mut content[offset..offset + len], data, order);
        Ok(())
    }

    pub fn try_insert_bytes(&mut self, offset: usize, data: &[u8]) -> BlobResult<()> {
        self.try_insert_ordered(offset, data, ByteOrder::Native)
    }
    pub fn try_insert_bytes_reverse(&mut self, offset: usize, data: &[u8]) -> BlobResult<()> {
        self.try_insert_ordered(offset, data, ByteOrder::Reversed)
    }
    pub fn try_insert_front_bytes(&mut self, data: &[u8]) -> BlobResult<()> {
        self.try_insert_ordered(0, data, ByteOrder::Native)
    }
    pub fn try_insert_front_bytes_reverse(&mut self, data: &[u8]) -> BlobResult<()> {
        self.try_insert_ordered(0, data, ByteOrder::Reversed)
    }
    pub fn try_insert_back_bytes(&mut self, data: &[u8]) -> BlobResult<()> {
        self.try_insert_ordered(self.used, data, ByteOrder::Native)
    }
    pub fn try_insert_back_bytes_reverse(&mut self, data: &[u8]) -> BlobResult<()> {
        self.try_insert_ordered(self.used, data, ByteOrder::Reversed)
    }

    #[track_caller]
    pub fn insert_bytes(&mut self, offset: usize, data: &[u8]) {
        self.try_insert_bytes(offset, data).or_raise()
    }
    #[track_caller]
    pub fn insert_bytes_reverse(&mut self, offset: usize, data: &[u8]) {
        self.try_insert_bytes_reverse(offset, data).or_raise()
    }
    #[track_caller]
    pub fn insert_front_bytes(&mut self, data: &[u8]) {
        self.try_insert_front_bytes(data).or_raise()
    }
    #[track_caller]
    pub fn insert_front_bytes_reverse(&mut self, data: &[u8]) {
        self.try_insert_front_bytes_reverse(data).or_raise()
    }
    #[track_caller]
    pub fn insert_back_bytes(&mut self, data: &[u8]) {
        self.try_insert_back_bytes(data).or_raise()
    }
    #[track_caller]
    pub fn insert_back_bytes_reverse(&mut self, data: &[u8]) {
        self.try_insert_back_bytes_reverse(data).or_raise()
    }

    /// Inserts `value` at `offset`, shifting everything behind it up by `T::SIZE` bytes.
    pub fn try_insert<T: Scalar>(
        &mut self,
        offset: usize,
        value: T,
        order: ByteOrder,
    ) -> BlobResult<()> {
        self.try_insert_ordered(offset, value.to_native_bytes().as_ref(), order)
    }
    pub fn try_insert_front<T: Scalar>(&mut self, value: T, order: ByteOrder) -> BlobResult<()> {
        self.try_insert_ordered(0, value.to_native_bytes().as_ref(), order)
    }
    pub fn try_insert_back<T: Scalar>(&mut self, value: T, order: ByteOrder) -> BlobResult<()> {
        self.try_insert_ordered(self.used, value.to_native_bytes().as_ref(), order)
    }

    #[track_caller]
    pub fn insert<T: Scalar>(&mut self, offset: usize, value: T, order: ByteOrder) {
        self.try_insert(offset, value, order).or_raise()
    }
    #[track_caller]
    pub fn insert_front<T: Scalar>(&mut self, value: T, order: ByteOrder) {
        self.try_insert_front(value, order).or_raise()
    }
    #[track_caller]
    pub fn insert_back<T: Scalar>(&mut self, value: T, order: ByteOrder) {
        self.try_insert_back(value, order).or_raise()
    }

    /// Removes `count` bytes at `offset`, shifting everything behind them down.
    pub fn try_remove(&mut self, offset: usize, count: usize) -> BlobResult<()> {
        let used = self.used;
        offset
            .checked_add(count)
            .filter(|&end| end <= used)
            .ok_or(BlobError::Remove {
                len: count,
                available: used,
            })?;
        self.used -= shift_left(&mut self.storage.as_mut()[..used], offset, count);
        Ok(())
    }
    pub fn try_remove_front(&mut self, count: usize) -> BlobResult<()> {
        self.try_remove(0, count)
    }
    pub fn try_remove_back(&mut self, count: usize) -> BlobResult<()> {
        let offset = self.used.checked_sub(count).ok_or(BlobError::Remove {
            len: count,
            available: self.used,
        })?;
        self.try_remove(offset, count)
    }

    pub fn try_remove_scalar<T: Scalar>(&mut self, offset: usize) -> BlobResult<()> {
        self.try_remove(offset, T::SIZE)
    }
    pub fn try_remove_front_scalar<T: Scalar>(&mut self) -> BlobResult<()> {
        self.try_remove_front(T::SIZE)
    }
    pub fn try_remove_back_scalar<T: Scalar>(&mut self) -> BlobResult<()> {
        self.try_remove_back(T::SIZE)
    }

    #[track_caller]
    pub fn remove(&mut self, offset: usize, count: usize) {
        self.try_remove(offset, count).or_raise()
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
    pub fn remove_scalar<T: Scalar>(&mut self, offset: usize) {
        self.try_remove_scalar::<T>(offset).or_raise()
    }
    #[track_caller]
    pub fn remove_front_scalar<T: Scalar>(&mut self) {
        self.try_remove_front_scalar::<T>().or_raise()
    }
    #[track_caller]
    pub fn remove_back_scalar<T: Scalar>(&mut self) {
        self.try_remove_back_scalar::<T>().or_raise()
    }

    /// Reads a `T` at `offset` and removes it. Nothing changes if the read fails.
    pub fn try_extract<T: Scalar>(&mut self, offset: usize, order: ByteOrder) -> BlobResult<T> {
        let value = self.try_read(offset, order)?;
        self.try_remove(offset, T::SIZE)?;
        Ok(value)
    }
    pub fn try_extract_front<T: Scalar>(&mut self, order: ByteOrder) -> BlobResult<T> {
        self.try_extract(0, order)
    }
    pub fn try_extract_back<T: Scalar>(&mut self, order: ByteOrder) -> BlobResult<T> {
        let value = self.try_read_back(order)?;
        self.try_remove_back(T::SIZE)?;
        Ok(value)
    }

    #[track_caller]
    pub fn extract<T: Scalar>(&mut self, offset: usize, order: ByteOrder) -> T {
        self.try_extract(offset, order).or_raise()
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

impl<S: AsRef<[u8]>> ReadBytes for ByteBuffer<S> {
    #[inline]
    fn readable(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<S: AsRef<[u8]>, O: AsRef<[u8]>> PartialEq<ByteBuffer<O>> for ByteBuffer<S> {
    fn eq(&self, other: &ByteBuffer<O>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<S: AsRef<[u8]>> Eq for ByteBuffer<S> {}

impl<S: AsRef<[u8]>> Debug for ByteBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("capacity", &self.capacity())
            .field("content", &self.as_slice())
            .finish()
    }
}

impl<const N: usize> ByteBuffer<[u8; N]> {
    pub const fn empty() -> Self {
        ByteBuffer {
            storage: [0; N],
            used: 0,
        }
    }
}

impl<const N: usize> Default for ByteBuffer<[u8; N]> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> Clone for ByteBuffer<[u8; N]> {
    fn clone(&self) -> Self {
        let mut copy = Self::empty();
        copy.clone_from(self);
        copy
    }

    /// Re-inserts every byte of content, so only `[0, used)` is carried over.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for &byte in source.as_slice() {
            self.insert_back(byte, ByteOrder::Native);
        }
    }
}
