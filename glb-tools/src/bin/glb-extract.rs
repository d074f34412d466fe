use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args().nth(1).unwrap();
    let binary_path = std::env::args().nth(2);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let file_data = std::fs::read(path).unwrap();
    let glb = glb::Glb::new(file_data).unwrap();
    let asset = glb.decode().unwrap();

    match asset.json {
        Some(json) => println!("{}", serde_json::to_string_pretty(&json).unwrap()),
        None => eprintln!("No glTF document chunk"),
    }

    if let Some(binary_path) = binary_path {
        match asset.binary {
            Some(binary) => std::fs::write(binary_path, binary).unwrap(),
            None => eprintln!("No binary buffer chunk"),
        }
    }
}
