use std::io::{Cursor, Read};
use std::slice::SliceIndex;

pub use super::*;

pub const MAGIC_BYTES: &[u8] = b"glTF";

/// Fixed 12-byte file header
///
/// The magic bytes are validated while parsing and not stored. `version` and
/// `length` are carried as declared in the file; neither is cross-checked
/// against the actual data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Container format version
    pub version: u32,
    /// Total file length declared by the producer
    pub length: u32,
}

#[derive(Debug, Clone)]
pub struct Glb {
    /// Raw data
    pub(crate) data: Vec<u8>,
    /// File header
    pub(crate) header: Header,
    /// Chunks in the order in which they appear in the data
    pub(crate) chunks: Vec<RawChunk>,
}

/// Representation of a GLB file
impl Glb {
    /// Returns GLB file representation
    ///
    /// * `data`: GLB data starting with magic bytes
    pub fn new(data: Vec<u8>) -> Result<Self, Error> {
        let (header, chunks) = Self::find_chunks(&data)?;

        Ok(Self {
            data,
            header,
            chunks,
        })
    }

    /// Checks if passed data have GLB magic bytes
    pub fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(MAGIC_BYTES)
    }

    /// Convert into raw data
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Get part of the raw data
    pub fn get(&self, index: impl SliceIndex<[u8], Output = [u8]>) -> Option<&[u8]> {
        self.data.get(index)
    }

    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns all chunks
    pub fn chunks(&self) -> Vec<Chunk> {
        self.chunks.iter().map(|x| x.chunk(self)).collect()
    }

    /// Returns the payload of the glTF document chunk if available
    ///
    /// If multiple [`JSON`](ChunkType::JSON) chunks exist, the last one is
    /// used.
    pub fn json_data(&self) -> Option<&[u8]> {
        self.chunks
            .iter()
            .rev()
            .find(|x| x.chunk_type == ChunkType::JSON)
            .and_then(|x| self.get(x.payload.clone()))
    }

    /// Returns the payload of the binary buffer chunk if available
    ///
    /// If multiple [`BIN`](ChunkType::BIN) chunks exist, the last one is used.
    pub fn binary_data(&self) -> Option<&[u8]> {
        self.chunks
            .iter()
            .rev()
            .find(|x| x.chunk_type == ChunkType::BIN)
            .and_then(|x| self.get(x.payload.clone()))
    }

    /// List all chunks in the data
    fn find_chunks(data: &[u8]) -> Result<(Header, Vec<RawChunk>), Error> {
        let mut cur = Cursor::new(data);

        // First 4 bytes are the magic bytes
        let magic_bytes = &mut [0; MAGIC_BYTES.len()];
        cur.read_exact(magic_bytes)
            .map_err(|_| Error::UnexpectedEof)?;
        if magic_bytes != MAGIC_BYTES {
            return Err(Error::InvalidMagicBytes(*magic_bytes));
        }

        // Next 4 bytes are the format version
        let version_data = &mut [0; 4];
        cur.read_exact(version_data)
            .map_err(|_| Error::UnexpectedEof)?;
        let version = u32::from_le_bytes(*version_data);

        // Next 4 bytes are the declared total file length
        let length_data = &mut [0; 4];
        cur.read_exact(length_data)
            .map_err(|_| Error::UnexpectedEof)?;
        let length = u32::from_le_bytes(*length_data);

        let header = Header { version, length };

        let mut chunks = Vec::new();
        loop {
            let position: usize = cur
                .position()
                .try_into()
                .map_err(|_| Error::PositionTooLarge)?;

            // Chunks repeat until the data end
            if position == data.len() {
                break;
            }

            // First 4 bytes are the payload length
            let chunk_length_data = &mut [0; 4];
            cur.read_exact(chunk_length_data)
                .map_err(|_| Error::UnexpectedEof)?;
            let chunk_length = u32::from_le_bytes(*chunk_length_data);

            // Next 4 bytes are the chunk type
            let chunk_type_data = &mut [0; 4];
            cur.read_exact(chunk_type_data)
                .map_err(|_| Error::UnexpectedEof)?;
            let chunk_type = ChunkType::from(u32::from_le_bytes(*chunk_type_data));

            // Next are the payload bytes
            let payload_start: usize = cur
                .position()
                .try_into()
                .map_err(|_| Error::PositionTooLarge)?;
            let payload_end = payload_start
                .checked_add(chunk_length as usize)
                .ok_or(Error::PositionTooLarge)?;

            // A declared length past the data end must not yield a short
            // payload
            if payload_end > data.len() {
                return Err(Error::UnexpectedEof);
            }

            let payload = payload_start..payload_end;

            // Jump to end of payload
            cur.set_position(payload_end as u64);

            tracing::debug!("Found {chunk_type:?} chunk with {chunk_length} payload bytes");

            chunks.push(RawChunk {
                chunk_type,
                payload,
            });
        }

        Ok((header, chunks))
    }
}
