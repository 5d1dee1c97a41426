use crate::decoder::{Format, OpKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("out of bounds: need 4 bytes at offset {offset:#x}, buffer has {len}")]
    OutOfBounds { offset: usize, len: usize },
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    #[error("unrecognized format: opcode {opcode} in word {word:#010x}")]
    UnrecognizedFormat { opcode: u8, word: u32 },
    #[error("unsupported funct {funct} in word {word:#010x}")]
    UnsupportedFunct { funct: u8, word: u32 },
    #[error("unsupported register index {index}")]
    UnsupportedRegister { index: u8 },
    #[error("no operand template for {format:?}/{kind:?}")]
    UnhandledTemplate { format: Format, kind: OpKind },
    /// A failure inside a batch, tagged with the word's position.
    #[error("word {index} (offset {offset:#x}): {source}")]
    At {
        index: usize,
        offset: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument { reason: reason.into() }
    }

    pub(crate) fn at(self, index: usize) -> Self {
        Self::At { index, offset: index * 4, source: Box::new(self) }
    }

    /// Strips any positional wrapper.
    pub fn root(&self) -> &Error {
        match self {
            Error::At { source, .. } => source.root(),
            other => other,
        }
    }
}
