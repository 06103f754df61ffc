//! Streaming scalar (de)serialization on top of [ByteBuffer] and [ByteView].
//!
//! Both sides work on the serialized byte stream of a value or a slice of
//! values, and may stop part way through when the buffer fills up or the
//! view runs dry. The returned byte count can be passed back in as
//! `byte_offset` to pick up where the previous call stopped, which lets a
//! large block move through a small buffer over several rounds.

use core::fmt::{self, Debug};

use crate::{ByteBuffer, ByteOrder, ByteView, Scalar};

/// Appends scalars to the back of a [ByteBuffer] in a fixed byte order.
pub struct Serializer<'b, S> {
    buffer: &'b mut ByteBuffer<S>,
    order: ByteOrder,
}

impl<S: AsRef<[u8]>> Debug for Serializer<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer")
            .field("buffer", &self.buffer)
            .field("order", &self.order)
            .finish()
    }
}

impl<'b, S: AsRef<[u8]> + AsMut<[u8]>> Serializer<'b, S> {
    pub fn new(buffer: &'b mut ByteBuffer<S>, order: ByteOrder) -> Self {
        Serializer { buffer, order }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    pub fn buffer(&self) -> &ByteBuffer<S> {
        &*self.buffer
    }

    /// Forgets everything written into the underlying buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Writes as much of `value` as fits, returning the number of bytes written.
    pub fn push<T: Scalar>(&mut self, value: T) -> usize {
        self.push_from(value, 0)
    }

    /// Writes `value` starting `byte_offset` bytes into its serialized form.
    pub fn push_from<T: Scalar>(&mut self, value: T, byte_offset: usize) -> usize {
        self.push_with(value, byte_offset, self.order)
    }

    /// Like [Serializer::push_from], in `order` instead of the wrapper's byte order.
    pub fn push_with<T: Scalar>(
        &mut self,
        value: T,
        byte_offset: usize,
        order: ByteOrder,
    ) -> usize {
        self.push_ordered(core::slice::from_ref(&value), byte_offset, order)
    }

    /// Writes `values` back to back, starting `byte_offset` bytes into the
    /// stream, until either the stream ends or the buffer is full.
    pub fn push_slice<T: Scalar>(&mut self, values: &[T], byte_offset: usize) -> usize {
        self.push_ordered(values, byte_offset, self.order)
    }

    fn push_ordered<T: Scalar>(
        &mut self,
        values: &[T],
        byte_offset: usize,
        order: ByteOrder,
    ) -> usize {
        if T::SIZE == 0 {
            return 0;
        }
        let total = values.len().saturating_mul(T::SIZE);
        let mut position = byte_offset;
        while position < total {
            let free = self.buffer.free_len();
            if free == 0 {
                break;
            }
            let within = position % T::SIZE;
            let bytes = values[position / T::SIZE].to_ordered_bytes(order);
            let chunk = &bytes.as_ref()[within..];
            let chunk = &chunk[..chunk.len().min(free)];
            if self.buffer.try_insert_back_bytes(chunk).is_err() {
                break;
            }
            position += chunk.len();
        }
        position.saturating_sub(byte_offset)
    }
}

/// Consumes scalars from the front of a [ByteView] in a fixed byte order.
#[derive(Debug)]
pub struct Deserializer<'v, 'a> {
    view: &'v mut ByteView<'a>,
    order: ByteOrder,
}

impl<'v, 'a> Deserializer<'v, 'a> {
    pub fn new(view: &'v mut ByteView<'a>, order: ByteOrder) -> Self {
        Deserializer { view, order }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    pub fn view(&self) -> &ByteView<'a> {
        &*self.view
    }

    /// Puts every consumed byte back.
    pub fn rewind(&mut self) {
        self.view.reset();
    }

    /// Fills as much of `target` as the view holds, returning the bytes consumed.
    pub fn pull<T: Scalar>(&mut self, target: &mut T) -> usize {
        self.pull_from(target, 0)
    }

    /// Fills `target` starting `byte_offset` bytes into its serialized form.
    pub fn pull_from<T: Scalar>(&mut self, target: &mut T, byte_offset: usize) -> usize {
        self.pull_with(target, byte_offset, self.order)
    }

    /// Like [Deserializer::pull_from], in `order` instead of the wrapper's byte order.
    pub fn pull_with<T: Scalar>(
        &mut self,
        target: &mut T,
        byte_offset: usize,
        order: ByteOrder,
    ) -> usize {
        self.pull_ordered(core::slice::from_mut(target), byte_offset, order)
    }

    /// Fills `targets` back to back, starting `byte_offset` bytes into the
    /// stream. Bytes of a target that were not available keep their old value.
    pub fn pull_slice<T: Scalar>(&mut self, targets: &mut [T], byte_offset: usize) -> usize {
        self.pull_ordered(targets, byte_offset, self.order)
    }

    fn pull_ordered<T: Scalar>(
        &mut self,
        targets: &mut [T],
        byte_offset: usize,
        order: ByteOrder,
    ) -> usize {
        if T::SIZE == 0 {
            return 0;
        }
        let total = targets.len().saturating_mul(T::SIZE);
        let mut position = byte_offset;
        while position < total {
            let available = self.view.remaining_len();
            if available == 0 {
                break;
            }
            let within = position % T::SIZE;
            let target = &mut targets[position / T::SIZE];
            let len = (T::SIZE - within).min(available);
            let Ok(src) = self.view.try_take_front(len) else {
                break;
            };
            let mut bytes = target.to_ordered_bytes(order);
            bytes.as_mut()[within..within + len].copy_from_slice(src);
            *target = T::from_ordered_bytes(bytes, order);
            position += len;
        }
        position.saturating_sub(byte_offset)
    }
}
