use crate::cli::args::{ConfigAction, ConfigCategory};
use base58check::{AlphabetRegistry, HashAlgorithm};

pub fn handle(
    action: ConfigAction,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { category, json } => handle_list(category, json, registry),
        ConfigAction::Show { alphabet } => handle_show(&alphabet, registry),
    }
}

fn handle_list(
    category: Option<ConfigCategory>,
    json: bool,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let hash_list: Vec<&str> = HashAlgorithm::ALL.iter().map(|h| h.as_str()).collect();
    let alphabet_list = registry.names();

    if json {
        let output = match category {
            Some(ConfigCategory::Alphabets) => serde_json::json!({ "alphabets": alphabet_list }),
            Some(ConfigCategory::Hashes) => serde_json::json!({ "hashes": hash_list }),
            None => serde_json::json!({
                "alphabets": alphabet_list,
                "hashes": hash_list,
                "settings": {
                    "default_alphabet": registry.settings.default_alphabet(),
                    "checksum_length": registry.settings.checksum_length(),
                    "checksum_hash": registry.settings.checksum_hash(),
                    "checksum_iterations": registry.settings.checksum_iterations(),
                },
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match category {
        Some(ConfigCategory::Alphabets) => {
            println!("{}", alphabet_list.join(","));
        }
        Some(ConfigCategory::Hashes) => {
            println!("{}", hash_list.join(","));
        }
        None => {
            let default = registry.settings.default_alphabet();
            println!("Alphabets:");
            for name in &alphabet_list {
                let marker = if name == default { "*" } else { " " };
                let description = registry
                    .get_alphabet(name)
                    .and_then(|a| a.description.as_deref())
                    .unwrap_or("");
                println!("  {} {:<12} {}", marker, name, description);
            }
            println!("Hash algorithms: {}", hash_list.join(", "));
            println!(
                "Checksum: {} bytes of {} x{}",
                registry.settings.checksum_length(),
                registry.settings.checksum_hash(),
                registry.settings.checksum_iterations()
            );
            println!("\nUse 'config list alphabets|hashes' for machine-readable output");
            println!("Use --json for structured output");
        }
    }

    Ok(())
}

fn handle_show(name: &str, registry: &AlphabetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    // Builds the codec first so unknown names and bad entries surface here
    let codec = registry.codec(Some(name))?;
    let entry = registry
        .get_alphabet(name)
        .ok_or_else(|| format!("alphabet '{}' not found", name))?;

    println!("Alphabet: {}", name);
    if let Some(description) = &entry.description {
        println!("  Description: {}", description);
    }
    println!("  Characters: {}", entry.chars);
    println!("  Zero character: {}", codec.alphabet().zero());
    println!("  Checksum length: {} bytes", codec.checksum_length());
    println!(
        "  Checksum hash: {} x{}",
        entry
            .checksum_hash
            .as_deref()
            .unwrap_or(registry.settings.checksum_hash()),
        entry
            .checksum_iterations
            .unwrap_or(registry.settings.checksum_iterations())
    );

    Ok(())
}
