use thiserror::Error;

pub type BlobResult<T> = Result<T, BlobError>;

/// Why a byte view or buffer operation was rejected.
///
/// Every variant is produced before any byte or cursor is touched, so an
/// `Err` always means the wrapper is exactly as it was before the call.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlobError {
    #[error("overwrite of {len} bytes failed, only {available} bytes are in use")]
    Overwrite { len: usize, available: usize },
    #[error("insert of {len} bytes failed, only {available} bytes can be placed")]
    Insert { len: usize, available: usize },
    #[error("remove of {len} bytes failed, only {available} bytes are in use")]
    Remove { len: usize, available: usize },
    #[error("read of {len} bytes failed, only {available} bytes are readable")]
    Read { len: usize, available: usize },
    #[error("position failed to move from {current} to {requested}, capacity is {capacity}")]
    Position {
        current: usize,
        requested: usize,
        capacity: usize,
    },
}

impl BlobError {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            BlobError::Overwrite { .. } => "overwrite",
            BlobError::Insert { .. } => "insert",
            BlobError::Remove { .. } => "remove",
            BlobError::Read { .. } => "read",
            BlobError::Position { .. } => "position",
        }
    }
}

/// Failure handler behind every non-`try_` operation.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn raise(err: BlobError) -> ! {
    tracing::error!(kind = err.kind_name(), error = %err, "byte blob operation failed");
    panic!("{err}")
}

pub(crate) trait OrRaise<T> {
    fn or_raise(self) -> T;
}

impl<T> OrRaise<T> for BlobResult<T> {
    #[inline(always)]
    #[track_caller]
    fn or_raise(self) -> T {
        match self {
            Ok(val) => val,
            Err(err) => raise(err),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_sizes() {
        let err = BlobError::Insert {
            len: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "insert of 4 bytes failed, only 2 bytes can be placed"
        );
        assert_eq!(err.kind_name(), "insert");
    }

    #[test]
    fn every_category_is_distinct() {
        let kinds = [
            BlobError::Overwrite {
                len: 0,
                available: 0,
            },
            BlobError::Insert {
                len: 0,
                available: 0,
            },
            BlobError::Remove {
                len: 0,
                available: 0,
            },
            BlobError::Read {
                len: 0,
                available: 0,
            },
            BlobError::Position {
                current: 0,
                requested: 0,
                capacity: 0,
            },
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.kind_name(), b.kind_name());
            }
        }
    }

    #[test]
    fn position_message_names_both_ends() {
        let err = BlobError::Position {
            current: 2,
            requested: 9,
            capacity: 8,
        };
        assert_eq!(
            err.to_string(),
            "position failed to move from 2 to 9, capacity is 8"
        );
    }

    #[test]
    #[should_panic(expected = "remove of 3 bytes failed")]
    fn raise_panics_with_message() {
        let res: BlobResult<()> = Err(BlobError::Remove {
            len: 3,
            available: 1,
        });
        res.or_raise();
    }
}
