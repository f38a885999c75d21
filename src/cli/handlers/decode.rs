use crate::cli::{
    args::DecodeArgs,
    config::{build_codec, read_text_input, write_output},
    global::GlobalArgs,
};
use base58check::AlphabetRegistry;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = build_codec(registry, &args.codec)?;
    let text = read_text_input(args.file.as_ref(), global)?;

    let decoded = codec.decode_detailed(&text, !args.keep_leading_ones)?;

    if args.verbose {
        eprintln!(
            "checksum: {} ({} bytes, {:?})",
            hex::encode(&decoded.checksum),
            codec.checksum_length(),
            codec.strategy()
        );
        eprintln!("leading zero bytes: {}", decoded.leading_zeros);
    }

    if args.binary {
        write_output(args.output.as_ref(), &decoded.payload)
    } else {
        let mut line = hex::encode(&decoded.payload);
        line.push('\n');
        write_output(args.output.as_ref(), line.as_bytes())
    }
}
