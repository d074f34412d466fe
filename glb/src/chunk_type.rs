use std::fmt::Debug;

const JSON_TAG: u32 = b(b"JSON");
const BIN_TAG: u32 = b(b"BIN\0");

/// Type of a chunk
///
/// The value is stored as little endian [`u32`] of the original byte string.
#[repr(u32)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum ChunkType {
    /// glTF document (UTF-8 encoded JSON text)
    JSON = JSON_TAG,
    /// Binary buffer (raw geometry, animation, and image data)
    BIN = BIN_TAG,
    Unknown(u32),
}

impl From<u32> for ChunkType {
    fn from(v: u32) -> Self {
        match v {
            JSON_TAG => Self::JSON,
            BIN_TAG => Self::BIN,
            other => Self::Unknown(other),
        }
    }
}

impl From<ChunkType> for u32 {
    fn from(v: ChunkType) -> Self {
        match v {
            ChunkType::JSON => JSON_TAG,
            ChunkType::BIN => BIN_TAG,
            ChunkType::Unknown(other) => other,
        }
    }
}

impl Debug for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.bytes();
        let name = String::from_utf8(bytes.to_vec())
            .ok()
            .and_then(|x| bytes.is_ascii().then_some(x))
            .map(|x| x.trim_end_matches('\0').to_string())
            .unwrap_or_else(|| <Self as Into<u32>>::into(*self).to_string());

        match self {
            Self::Unknown(_) => write!(f, "Unknown({name:?})"),
            _ => f.write_str(&name),
        }
    }
}

impl ChunkType {
    /// Returns the byte string of the chunk
    pub fn bytes(self) -> [u8; 4] {
        u32::to_le_bytes(self.into())
    }
}

/// Convert bytes to u32
const fn b(d: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*d)
}
