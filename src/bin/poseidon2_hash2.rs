use std::env;
use std::process;

use poseidon2_bn254::hash2_dec;

const USAGE: &str = "usage: poseidon2_hash2 <a> <b>  (base-10 field elements)";

fn main() {
    let mut args = env::args().skip(1);
    let a = match args.next() {
        Some(v) => v,
        None => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };
    let b = match args.next() {
        Some(v) => v,
        None => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if args.next().is_some() {
        eprintln!("{USAGE}");
        process::exit(1);
    }

    match hash2_dec(&a, &b) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
