//! Export the GraphQL schema as SDL.
//!
//! Usage: cargo run --bin export-schema [output_path]

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let sdl = garden_server::graphql::schema_builder().finish().sdl();

    let out_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "schema.graphql".to_string());

    std::fs::write(&out_path, &sdl).with_context(|| format!("writing {out_path}"))?;
    eprintln!("Schema exported to {out_path} ({} bytes)", sdl.len());
    Ok(())
}
