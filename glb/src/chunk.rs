use std::ops::Range;

pub use crate::*;

#[derive(Debug, Clone)]
pub struct RawChunk {
    pub(crate) chunk_type: ChunkType,
    pub(crate) payload: Range<usize>,
}

impl RawChunk {
    pub(crate) fn chunk<'a>(&self, glb: &'a Glb) -> Chunk<'a> {
        Chunk {
            chunk_type: self.chunk_type,
            payload: self.payload.clone(),
            glb,
        }
    }

    pub fn total_len(&self) -> usize {
        self.payload
            .len()
            .checked_add(8)
            .expect("Unreachable: The chunk length and type must be part of the data")
    }
}

#[derive(Debug, Clone)]
pub struct Chunk<'a> {
    pub(crate) chunk_type: ChunkType,
    pub(crate) payload: Range<usize>,
    pub(crate) glb: &'a Glb,
}

impl<'a> Chunk<'a> {
    pub fn chunk_type(&self) -> ChunkType {
        self.chunk_type
    }

    pub fn payload(&self) -> &[u8] {
        self.glb
            .data
            .get(self.payload.clone())
            .expect("Unreachable: The payload must be part of the data")
    }

    /// Declared payload length in bytes
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}
