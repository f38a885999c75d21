use crate::cli::{
    args::EncodeArgs,
    config::{build_codec, read_input, write_output},
    global::GlobalArgs,
};
use base58check::AlphabetRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = build_codec(registry, &args.codec)?;
    let input_data = read_input(args.file.as_ref(), global)?;

    let encoded = if args.hex {
        let text = String::from_utf8(input_data).map_err(|_| "Hex input is not valid UTF-8")?;
        codec.encode_hex(text.trim())?
    } else {
        codec.encode(&input_data)?
    };

    let mut line = encoded.into_string();
    line.push('\n');
    write_output(args.output.as_ref(), line.as_bytes())
}
