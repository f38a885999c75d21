use crate::cli::{args::CodecArgs, global::GlobalArgs};
use base58check::{Alphabet, AlphabetRegistry, Base58Check, HashAlgorithm, HashChecksum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Loads the registry with user overrides plus the optional `--config` file.
pub fn load_registry(global: &GlobalArgs) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let mut registry = AlphabetRegistry::load_with_overrides(global.quiet)?;
    if let Some(path) = &global.config {
        let extra = AlphabetRegistry::load_from_file(path)
            .map_err(|e| format!("Cannot load config {:?}: {}", path, e))?;
        registry.merge(extra);
    }
    Ok(registry)
}

/// Builds the codec for a command: registry defaults first, then flags.
pub fn build_codec(
    registry: &AlphabetRegistry,
    args: &CodecArgs,
) -> Result<Base58Check, Box<dyn std::error::Error>> {
    let base = registry.codec(args.alphabet.as_deref())?;
    let mut builder = base.to_builder();

    if let Some(chars) = &args.chars {
        builder = builder.alphabet(Alphabet::base58(chars)?);
    }

    if let Some(length) = args.checksum_len {
        builder = builder.checksum_length(length);
    }

    if args.hash.is_some() || args.iterations.is_some() {
        let name = args.alphabet.as_deref().unwrap_or(registry.settings.default_alphabet());
        let entry = registry.get_alphabet(name);

        let algorithm: HashAlgorithm = match &args.hash {
            Some(hash) => hash.parse()?,
            None => entry
                .and_then(|e| e.checksum_hash.as_deref())
                .unwrap_or(registry.settings.checksum_hash())
                .parse()?,
        };
        let iterations = args.iterations.unwrap_or_else(|| {
            entry
                .and_then(|e| e.checksum_iterations)
                .unwrap_or(registry.settings.checksum_iterations())
        });
        builder = builder.checksum_strategy(HashChecksum::new(algorithm, iterations)?);
    }

    Ok(builder.build()?)
}

/// Reads a file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let data = if let Some(file_path) = file {
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;
            if file_size > global.max_size {
                return Err(format!(
                    "File size ({} bytes) exceeds limit ({} bytes). Use --max-size 0 to lift it.",
                    file_size, global.max_size
                )
                .into());
            }
        }
        fs::read(file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        if global.max_size > 0 && buffer.len() > global.max_size {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes)",
                buffer.len(),
                global.max_size
            )
            .into());
        }
        buffer
    };
    Ok(data)
}

/// Reads input as text with surrounding whitespace removed.
pub fn read_text_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let data = read_input(file, global)?;
    let text = String::from_utf8(data).map_err(|_| "Input is not valid UTF-8 text")?;
    Ok(text.trim().to_string())
}

/// Writes to a file or stdout.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        fs::write(output_path, data)?;
    } else {
        io::stdout().write_all(data)?;
    }
    Ok(())
}
