use argwise::{Argument, ArgumentParser};

fn main() {
    let mut verbosity: i32 = 0;
    let mut quiet: bool = false;
    let mut colour: String = "red".to_string();
    let mut ratio: f32 = 1.0;
    let mut verbosity_arg = Argument::count(&mut verbosity)
        .flag('v')
        .name("--verbose")
        .help("Increase the verbosity; repeat for more.");
    let mut quiet_arg = Argument::flag_true(&mut quiet)
        .flag('q')
        .name("--quiet")
        .help("Print nothing.");
    let mut colour_arg = Argument::option(&mut colour)
        .flag('c')
        .name("--colour")
        .help("The output colour.")
        .choices(["red", "green", "blue"]);
    let mut ratio_arg = Argument::option(&mut ratio)
        .name("--ratio")
        .help("The scaling ratio.");

    let mut parser = ArgumentParser::new("verbosity")
        .description("Demonstrates counting, choices and flags.")
        .epilog("Try: verbosity -vvq --colour blue");
    if let Err(error) = parser.add_all([
        &mut verbosity_arg,
        &mut quiet_arg,
        &mut colour_arg,
        &mut ratio_arg,
    ]) {
        eprintln!("{error}");
        std::process::exit(1);
    }
    parser.parse();

    let colour_given = colour_arg.occurrences() > 0;

    if !quiet {
        println!("verbosity: {verbosity}");
        println!("colour: {colour} (given: {colour_given})");
        println!("ratio: {ratio}");
    }
}
