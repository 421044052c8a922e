use huffarray::{compress_str, decompress_str, to_bit_string, FrequencyTable};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 1 {
        println!("expected one argument");
        return ExitCode::FAILURE;
    }
    let message = &args[0];

    println!("--Input Message--");
    println!("{}", message);

    let compressed = match compress_str(message) {
        Ok(bits) => bits,
        Err(e) => {
            eprintln!("compression failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("\n--Compressed Message--");
    println!("{}", to_bit_string(&compressed));

    let decompressed = match decompress_str(&compressed) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("decompression failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("\n--Decompressed Message--");
    println!("{}", decompressed);

    let frequencies = FrequencyTable::from_symbols(message.as_bytes());
    println!("\n--Compression Results--");
    println!("Input Size: {} bits", message.len() * 8);
    println!("Output Size (including header): {} bits", compressed.len());
    println!(
        "Entropy Bound (payload only): {:.1} bits",
        frequencies.entropy() * message.len() as f64
    );

    ExitCode::SUCCESS
}
