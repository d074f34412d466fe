use glb::{Asset, ChunkType, Error, Glb};

const JSON_TAG: &[u8; 4] = b"JSON";
const BIN_TAG: &[u8; 4] = b"BIN\0";

const GLTF_DOCUMENT: &[u8] = br#"{"asset":{"version":"2.0"}}"#;

/// Builds a GLB byte stream with a version 2 header and the given chunks
fn build(chunks: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (tag, payload) in chunks {
        let chunk_length = u32::try_from(payload.len()).unwrap();
        body.extend_from_slice(&chunk_length.to_le_bytes());
        body.extend_from_slice(*tag);
        body.extend_from_slice(payload);
    }

    let total_length = u32::try_from(body.len())
        .unwrap()
        .checked_add(12)
        .unwrap();

    let mut data = Vec::new();
    data.extend_from_slice(glb::MAGIC_BYTES);
    data.extend_from_slice(&2_u32.to_le_bytes());
    data.extend_from_slice(&total_length.to_le_bytes());
    data.extend_from_slice(&body);

    data
}

#[test]
fn header_fields() {
    let glb = Glb::new(build(&[])).unwrap();

    assert_eq!(glb.header().version, 2);
    assert_eq!(glb.header().length, 12);
}

#[test]
fn chunk_roundtrip() {
    let chunks: &[(&[u8; 4], &[u8])] = &[
        (JSON_TAG, GLTF_DOCUMENT),
        (b"TEST", b"arbitrary bytes"),
        (BIN_TAG, &[1, 2, 3, 4]),
    ];

    let glb = Glb::new(build(chunks)).unwrap();

    let found = glb.chunks();
    assert_eq!(found.len(), chunks.len());
    for (chunk, (tag, payload)) in found.iter().zip(chunks) {
        assert_eq!(&chunk.chunk_type().bytes(), *tag);
        assert_eq!(chunk.payload_len(), payload.len());
        assert_eq!(chunk.payload(), *payload);
    }
}

#[test]
fn invalid_magic() {
    let mut data = build(&[(JSON_TAG, GLTF_DOCUMENT)]);
    data[..4].copy_from_slice(b"HTML");

    let err = Glb::new(data).unwrap_err();
    assert!(matches!(err, Error::InvalidMagicBytes(bytes) if &bytes == b"HTML"));
}

#[test]
fn truncated_file_header() {
    let mut data = build(&[]);
    data.truncate(10);

    assert!(matches!(Glb::new(data).unwrap_err(), Error::UnexpectedEof));
}

#[test]
fn partial_chunk_header() {
    let mut data = build(&[]);
    data.extend_from_slice(&[0; 5]);

    assert!(matches!(Glb::new(data).unwrap_err(), Error::UnexpectedEof));
}

#[test]
fn short_payload() {
    let mut data = build(&[]);
    data.extend_from_slice(&100_u32.to_le_bytes());
    data.extend_from_slice(BIN_TAG);
    data.extend_from_slice(&[0; 50]);

    assert!(matches!(Glb::new(data).unwrap_err(), Error::UnexpectedEof));
}

#[test]
fn decode_json() {
    let glb = Glb::new(build(&[(JSON_TAG, GLTF_DOCUMENT)])).unwrap();
    let asset = glb.decode().unwrap();

    assert_eq!(
        asset.json,
        Some(serde_json::json!({"asset": {"version": "2.0"}}))
    );
    assert_eq!(asset.binary, None);
}

#[test]
fn decode_empty_binary_chunk() {
    let glb = Glb::new(build(&[(BIN_TAG, b"")])).unwrap();
    let asset = glb.decode().unwrap();

    // Present but empty, not absent
    assert_eq!(asset.binary, Some(Vec::new()));
    assert_eq!(glb.binary_data(), Some(&[][..]));
}

#[test]
fn zero_length_chunk_continues_iteration() {
    let glb = Glb::new(build(&[(BIN_TAG, b""), (JSON_TAG, GLTF_DOCUMENT)])).unwrap();

    assert_eq!(glb.chunks().len(), 2);

    let asset = glb.decode().unwrap();
    assert!(asset.json.is_some());
    assert!(asset.binary.is_some());
}

#[test]
fn last_json_chunk_wins() {
    let first = br#"{"asset":{"version":"1.0"}}"#;
    let glb = Glb::new(build(&[(JSON_TAG, first), (JSON_TAG, GLTF_DOCUMENT)])).unwrap();

    assert_eq!(glb.json_data(), Some(GLTF_DOCUMENT));

    let asset = glb.decode().unwrap();
    assert_eq!(
        asset.json,
        Some(serde_json::json!({"asset": {"version": "2.0"}}))
    );
}

#[test]
fn unknown_chunks_do_not_affect_asset() {
    let glb = Glb::new(build(&[(b"TEST", b"opaque")])).unwrap();

    assert_eq!(
        glb.chunks()[0].chunk_type(),
        ChunkType::Unknown(u32::from_le_bytes(*b"TEST"))
    );
    assert_eq!(glb.decode().unwrap(), Asset::default());
}

#[test]
fn no_chunks_is_valid() {
    let glb = Glb::new(build(&[])).unwrap();

    assert!(glb.chunks().is_empty());
    assert_eq!(glb.decode().unwrap(), Asset::default());
}

#[test]
fn json_chunk_with_invalid_utf8() {
    let glb = Glb::new(build(&[(JSON_TAG, &[0xFF, 0xFE, 0xFD])])).unwrap();

    assert!(matches!(glb.decode().unwrap_err(), Error::JsonEncoding(_)));
}

#[test]
fn json_chunk_with_malformed_json() {
    let glb = Glb::new(build(&[(JSON_TAG, b"{\"asset\":")])).unwrap();

    assert!(matches!(glb.decode().unwrap_err(), Error::JsonParse(_)));
}

#[test]
fn filetype_probe() {
    assert!(Glb::is_filetype(&build(&[])));
    assert!(!Glb::is_filetype(b"RIFF\0\0\0\0WEBP"));
    assert!(!Glb::is_filetype(b"gl"));
}
