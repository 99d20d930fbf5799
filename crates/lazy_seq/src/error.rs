use std::fmt;

/// Kinds of source the entry function refuses to wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// One-shot iterator; neither finite nor indexable.
    Stream,
    /// Collection without a defined element order.
    Unordered,
    /// Ring buffer whose storage wraps around.
    FragmentedDeque,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stream => "stream",
            Self::Unordered => "unordered collection",
            Self::FragmentedDeque => "fragmented deque",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unsupported source kind: {kind}")]
    UnsupportedSourceKind { kind: SourceKind },
}

pub type Result<T> = std::result::Result<T, Error>;
