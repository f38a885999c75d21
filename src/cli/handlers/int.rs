use crate::cli::args::IntAction;
use base58check::{Alphabet, AlphabetRegistry, Base58, BaseConverter, BigUint};

pub fn handle(
    action: IntAction,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        IntAction::Encode { number, alphabet } => {
            let codec = int_codec(registry, alphabet.as_deref())?;
            let value = parse_number(number.trim())?;
            println!("{}", codec.encode(&value));
        }
        IntAction::Decode {
            encoded,
            hex,
            alphabet,
        } => {
            let codec = int_codec(registry, alphabet.as_deref())?;
            let value = codec.decode_from_string(encoded.trim())?;
            if hex {
                println!("0x{}", BaseConverter::to_hex(&value));
            } else {
                println!("{}", value);
            }
        }
    }
    Ok(())
}

fn int_codec(
    registry: &AlphabetRegistry,
    name: Option<&str>,
) -> Result<Base58, Box<dyn std::error::Error>> {
    let name = name.unwrap_or(registry.settings.default_alphabet());
    Ok(Base58::with_alphabet(registry.alphabet(name)?)?)
}

/// Decimal, or hex with a `0x` prefix.
fn parse_number(number: &str) -> Result<BigUint, Box<dyn std::error::Error>> {
    let hex_digits = number
        .strip_prefix("0x")
        .or_else(|| number.strip_prefix("0X"));
    let value = match hex_digits {
        Some(digits) => BaseConverter::from_hex(digits)?,
        None => BaseConverter::to_base10(number, &Alphabet::decimal())?,
    };
    Ok(value)
}
