#![no_std]
mod buf;
mod byte_order;
pub mod crc;
pub mod error;
mod scalar;
pub mod serial;
pub mod shift;
mod view;

pub use buf::{ByteBuffer, FixedBuffer};
pub use byte_order::ByteOrder;
pub use crc::{Crc16CcittFalse, Crc32, Digest};
pub use error::{BlobError, BlobResult};
pub use scalar::Scalar;
pub use serial::{Deserializer, Serializer};
pub use view::{ByteView, ReadBytes};
