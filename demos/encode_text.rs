use huffarray::{compress_str, decompress_str, to_bit_string, Encoder};

fn main() {
    let s = String::from("Hello my name is Sam!");
    let out = compress_str(&s).unwrap();
    println!("{}", to_bit_string(&out));

    let encoder = Encoder::new(s.as_bytes()).unwrap();
    let mut codes: Vec<_> = encoder.code_table().iter().collect();
    codes.sort_by_key(|(_, c)| c.len());
    for (symbol, code) in codes {
        println!("{:?}\t{}", *symbol as char, to_bit_string(code));
    }

    let dec = decompress_str(&out);
    println!("{:?}", dec);
}
