use argwise::{Argument, ArgumentParser};

fn main() {
    let mut x: i32 = 0;
    let mut y: i32 = 0;
    let mut negate: bool = false;
    let mut x_arg = Argument::positional(&mut x, "x").help("The first integer to add.");
    let mut y_arg = Argument::positional(&mut y, "y").help("The second integer to add.");
    let mut negate_arg = Argument::toggle(&mut negate)
        .flag('n')
        .name("--negate")
        .help("Negate the sum.");

    let mut parser = ArgumentParser::new("summer").description("Adds two integers together.");
    if let Err(error) = parser.add_all([&mut x_arg, &mut y_arg, &mut negate_arg]) {
        eprintln!("{error}");
        std::process::exit(1);
    }
    parser.parse();

    let sum = i64::from(x) + i64::from(y);
    println!("Sum: {}", if negate { -sum } else { sum });
}
