use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let file_data = std::fs::read(path).unwrap();
    let glb = glb::Glb::new(file_data).unwrap();

    let header = glb.header();
    println!("Header:");
    println!(" - version: {}", header.version);
    println!(" - declared length: {}", header.length);

    println!("Chunks:");
    for chunk in glb.chunks() {
        match chunk.chunk_type() {
            glb::ChunkType::Unknown(unknown) => println!(
                " - Unknown({}) ({} bytes)",
                String::from_utf8_lossy(&u32::to_le_bytes(unknown)),
                chunk.payload_len()
            ),
            chunk_type => println!(" - {chunk_type:?} ({} bytes)", chunk.payload_len()),
        }
    }
}
