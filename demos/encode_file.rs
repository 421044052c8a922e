use huffarray::{compress, decompress, Bits, PackedBits};
use std::env;
use std::fs;

fn main() {
    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");

    let input_bytes = fs::read(fp).expect("First argument was not a valid filepath.");

    // encode scope - save to file
    {
        let encoded = compress(&input_bytes).unwrap();
        let packed = PackedBits::from(encoded.as_bitslice());
        let data = rmp_serde::to_vec(&packed).unwrap();

        println!("{} bytes -> {} bytes", input_bytes.len(), data.len());
        fs::write("encoded.mp", data).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let packed: PackedBits = rmp_serde::from_slice(&file_data).unwrap();
        let decoded = decompress(&Bits::from(packed)).unwrap();

        fs::write("decoded.txt", decoded).unwrap();
    }
}
