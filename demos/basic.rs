extern crate argtable;
use argtable::argtable;

#[derive(Debug)]
pub struct Options {
    datadir: String,
    debug: bool,
    listen: bool,
    port: i64,
    connect: Vec<String>,
}

fn handle_args() -> Options {
    let mut args = argtable!();

    // -connect disables listening unless -listen was given
    if !args.get_all("-connect").is_empty() {
        args.soft_set_bool("-listen", false);
    }

    for (idx, arg) in args.unused() {
        println!("ignoring argument {}: {}", idx, arg);
    }

    Options {
        datadir: args.get_string("-datadir", "default.dir").to_string(),
        debug: args.get_bool("-debug", false),
        listen: args.get_bool("-listen", true),
        port: args.get_int("-port", 8333),
        connect: args.get_all("-connect").to_vec(),
    }
}

fn main() {
    let opts = handle_args();
    println!("final config: {:?}", opts);
}
