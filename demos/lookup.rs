use std::{env, error::Error};

use termcap_registry::Registry;

fn main() -> Result<(), Box<dyn Error>> {
    let registry = Registry::builtin()?;
    let names: Vec<String> = env::args().skip(1).collect();
    if names.is_empty() {
        println!("Usage: lookup CAPABILITY...");
        return Ok(());
    }

    for name in &names {
        match registry.lookup(name) {
            Ok(entry) => println!(
                "{name}: terminfo code {}, {:?}",
                entry.terminfo_code, entry.options
            ),
            Err(err) => println!("{err}"),
        }
        if let Ok(pattern) = registry.raw_pattern_for(name) {
            println!("\tfallback pattern {:?}", pattern.as_str());
        }
        if registry.causes_movement(name) {
            println!("\tmoves the cursor");
        }
    }

    Ok(())
}
