fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("First agument must be a path.");
    let data = std::fs::read(path).unwrap();
    let glb = glb::Glb::new(data).unwrap();

    let header = glb.header();
    println!("GLB version {} ({} bytes declared)", header.version, header.length);

    for chunk in glb.chunks() {
        match chunk.chunk_type() {
            glb::ChunkType::Unknown(unknown) => println!(
                "Unknown({}): {} bytes",
                String::from_utf8_lossy(&u32::to_le_bytes(unknown)),
                chunk.payload_len()
            ),
            chunk_type => println!("{chunk_type:?}: {} bytes", chunk.payload_len()),
        }
    }
}
