use serde_json::Value;

pub use crate::*;

/// Decoded content of the two standardized chunk types
///
/// Both fields are absent if the file carries no recognized chunks, which is
/// unusual but valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Asset {
    /// Parsed glTF document
    pub json: Option<Value>,
    /// Binary buffer
    pub binary: Option<Vec<u8>>,
}

impl Glb {
    /// Decodes the glTF document and the binary buffer
    ///
    /// Chunks are visited in the order in which they appear in the data. If a
    /// recognized chunk type appears more than once, the last occurrence wins.
    /// Chunks of unrecognized types are skipped; they remain accessible via
    /// [`chunks`](Self::chunks).
    pub fn decode(&self) -> Result<Asset, Error> {
        let mut asset = Asset::default();

        for chunk in self.chunks() {
            match chunk.chunk_type() {
                ChunkType::JSON => {
                    let text =
                        std::str::from_utf8(chunk.payload()).map_err(Error::JsonEncoding)?;
                    asset.json = Some(serde_json::from_str(text).map_err(Error::JsonParse)?);
                }
                ChunkType::BIN => {
                    asset.binary = Some(chunk.payload().to_vec());
                }
                _ => (),
            }
        }

        Ok(asset)
    }
}
