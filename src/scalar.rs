use core::fmt::Debug;

use crate::ByteOrder;

/// A fixed-width value that can be read from and written into a byte region by value.
///
/// Implemented for all primitive integers and floats. Types with their own
/// fixed byte layout can implement it too, as long as `Bytes` is exactly
/// `SIZE` bytes long.
pub trait Scalar: Sized + Copy + Debug {
    const SIZE: usize;

    /// `[u8; SIZE]` in practice.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    fn to_native_bytes(self) -> Self::Bytes;

    fn from_native_bytes(bytes: Self::Bytes) -> Self;

    #[inline]
    fn to_ordered_bytes(self, order: ByteOrder) -> Self::Bytes {
        let mut bytes = self.to_native_bytes();
        if !order.is_native() {
            bytes.as_mut().reverse();
        }
        bytes
    }

    #[inline]
    fn from_ordered_bytes(mut bytes: Self::Bytes, order: ByteOrder) -> Self {
        if !order.is_native() {
            bytes.as_mut().reverse();
        }
        Self::from_native_bytes(bytes)
    }
}

macro_rules! basic_scalar_impl {
    ($($t:ty),*) => {
        $(impl Scalar for $t {
            const SIZE: usize = core::mem::size_of::<$t>();
            type Bytes = [u8; core::mem::size_of::<$t>()];

            #[inline(always)]
            fn to_native_bytes(self) -> Self::Bytes {
                <$t>::to_ne_bytes(self)
            }

            #[inline(always)]
            fn from_native_bytes(bytes: Self::Bytes) -> Self {
                <$t>::from_ne_bytes(bytes)
            }
        })*
    };
}
basic_scalar_impl!(i8, i16, i32, i64, i128, isize);
basic_scalar_impl!(u8, u16, u32, u64, u128, usize);
basic_scalar_impl!(f32, f64);
