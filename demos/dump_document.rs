use litemark::parse_document;
use std::io::{self, Read};

fn main() {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .expect("Failed to read stdin");

    let document = parse_document(&input);
    let json = serde_json::to_string_pretty(&document).expect("Failed to serialize document");
    println!("{}", json);
}
