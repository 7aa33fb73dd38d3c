use anyhow::Result;
use workshop_catalog::Config;
use workshop_catalog::source;

use super::{print_json, separator};

pub fn run(config: &Config, json: bool) -> Result<()> {
    let pieces = source::load_signature_pieces(config);

    if json {
        return print_json(&pieces);
    }

    if pieces.is_empty() {
        println!("No signature pieces to show.");
        return Ok(());
    }

    println!("{:>4}  {:<16}  Image", "#", "Stable id");
    separator(90);
    for p in &pieces {
        println!("{:>4}  {:016x}  {}", p.id, p.stable_id(), p.image_url);
    }

    Ok(())
}
