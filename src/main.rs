use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use unibytes::{Converter, SourceFormat};

fn usage() -> ExitCode {
    eprintln!("usage: unibytes <text|uri|hex|base64> <input>");
    eprintln!("       unibytes --demo");
    ExitCode::from(2)
}

fn print_conversion(converter: &Converter, format: SourceFormat, input: &str) {
    let result = converter.convert(format, input);

    println!("  [{}] {:?}", format, input);
    if !result.bytes_valid {
        println!("    ✗ {}", result.error_message);
        return;
    }

    println!("    Hex:     {}", result.hex_view());
    println!("    Base64:  {}", result.base64_view().replace("\r\n", "\n             "));
    if result.text_valid {
        println!("    Text:    {}", result.text);
        println!("    URI:     {}", result.uri_view());
        println!("    Unicode: {}", result.unicode_view());
    } else {
        println!("    Text:    (not valid UTF-8)");
    }
}

fn run_demo(converter: &Converter) {
    println!("unibytes conversion demo");
    println!("========================");

    let cases = [
        (SourceFormat::Text, "€"),
        (SourceFormat::Text, "\u{1F600} ok"),
        (SourceFormat::Uri, "caf%C3%A9%20au%20lait"),
        (SourceFormat::Hex, "48 65 6C 6C 6F"),
        (SourceFormat::Hex, "FF FE"),
        (SourceFormat::Hex, "ABC"),
        (SourceFormat::Base64, "SGVsbG8="),
        (SourceFormat::Base64, "SG=sbG8="),
    ];

    for (format, input) in cases {
        print_conversion(converter, format, input);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let converter = Converter::new();

    match args.as_slice() {
        [flag] if flag == "--demo" => {
            run_demo(&converter);
            ExitCode::SUCCESS
        }
        [format, input] => match format.parse::<SourceFormat>() {
            Ok(format) => {
                print_conversion(&converter, format, input);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                usage()
            }
        },
        _ => usage(),
    }
}
