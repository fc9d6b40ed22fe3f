use argwise::*;
use assert_matches::assert_matches;
use rstest::rstest;

#[test]
fn parse_empty() {
    let parser = ArgumentParser::new("program");
    assert_eq!(parser.parse_tokens(&[]), Ok(()));
}

#[rstest]
#[case(vec!["--value", "52"])]
#[case(vec!["-v", "52"])]
#[case(vec!["-v", "0x34"])]
#[case(vec!["--value", "064"])]
#[case(vec!["-v", "1", "--value", "52"])]
fn store_int(#[case] tokens: Vec<&str>) {
    // Setup
    let mut value: i32 = 9999;
    let mut value_arg = Argument::option(&mut value)
        .flag('v')
        .name("--value")
        .help("a value");
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut value_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(value_arg.occurrences() as usize, tokens.len() / 2);
    assert_eq!(value, 52);
}

#[test]
fn store_multi_int_with_optional() {
    // Setup
    let mut x: i32 = 9999;
    let mut y: i32 = 9999;
    let mut z: i32 = 23;
    let mut sum: i32 = -1;
    let mut x_arg = Argument::option(&mut x).flag('x').name("--value1");
    let mut y_arg = Argument::option(&mut y).flag('y').name("--value2");
    let mut z_arg = Argument::option(&mut z).flag('z').name("--value3");
    let mut sum_arg = Argument::option(&mut sum).flag('s').name("--sum");
    let mut parser = ArgumentParser::new("program");
    parser
        .add_all([&mut x_arg, &mut y_arg, &mut z_arg, &mut sum_arg])
        .unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["-x", "52", "-y", "42", "--sum", "94"]);

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(x_arg.occurrences(), 1);
    assert_eq!(y_arg.occurrences(), 1);
    assert_eq!(z_arg.occurrences(), 0);
    assert_eq!(sum_arg.occurrences(), 1);
    assert_eq!(x, 52);
    assert_eq!(y, 42);
    assert_eq!(z, 23);
    assert_eq!(sum, 94);
}

#[test]
fn store_int_missing_required() {
    // Setup
    let mut x: i32 = 9999;
    let mut y: i32 = 9999;
    let mut sum: i32 = -1;
    let mut x_arg = Argument::option(&mut x).flag('x').name("--value1");
    let mut y_arg = Argument::option(&mut y).flag('y').name("--value2");
    let mut sum_arg = Argument::option(&mut sum)
        .flag('s')
        .name("--sum")
        .required();
    let mut parser = ArgumentParser::new("program");
    parser.add_all([&mut x_arg, &mut y_arg, &mut sum_arg]).unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["-x", "52", "-y", "42"]);

    // Verify
    assert_matches!(result, Err((8, ParseError::MissingArgument(identity))) => {
        assert_eq!(identity.flag(), Some('s'));
        assert_eq!(identity.name(), Some("--sum"));
    });
    assert_eq!(sum_arg.occurrences(), 0);
    assert_eq!(x, 52);
    assert_eq!(y, 42);
    assert_eq!(sum, -1);
}

#[test]
fn store_positionals() {
    // Setup
    let mut first: i32 = 9999;
    let mut second: f32 = 0.0;
    let mut third: String = String::default();
    let mut first_arg = Argument::positional(&mut first, "first");
    let mut second_arg = Argument::positional(&mut second, "second");
    let mut third_arg = Argument::positional(&mut third, "third");
    let mut parser = ArgumentParser::new("program");
    parser
        .add_all([&mut first_arg, &mut second_arg, &mut third_arg])
        .unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["54321", "87.9", "sample"]);

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(first_arg.occurrences(), 1);
    assert_eq!(second_arg.occurrences(), 1);
    assert_eq!(third_arg.occurrences(), 1);
    assert_eq!(first, 54321);
    assert!((second - 87.9).abs() < 0.001);
    assert_eq!(third, "sample");
}

#[test]
fn store_positionals_missing() {
    // Setup
    let mut first: i32 = 9999;
    let mut second: i32 = 9999;
    let mut first_arg = Argument::positional(&mut first, "first");
    let mut second_arg = Argument::positional(&mut second, "second");
    let mut parser = ArgumentParser::new("program");
    parser.add_all([&mut first_arg, &mut second_arg]).unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["54321"]);

    // Verify
    assert_matches!(result, Err((5, ParseError::MissingArgument(identity))) => {
        assert_eq!(identity.name(), Some("second"));
    });
    assert_eq!(first, 54321);
    assert_eq!(second, 9999);
}

#[rstest]
#[case(vec!["alpha", "99", "--enable"])]
#[case(vec!["--enable", "alpha", "99"])]
#[case(vec!["alpha", "-e", "99"])]
fn flags_and_positionals(#[case] tokens: Vec<&str>) {
    // Setup
    let mut label: String = String::default();
    let mut score: i32 = 0;
    let mut enable: bool = false;
    let mut label_arg = Argument::positional(&mut label, "label");
    let mut score_arg = Argument::positional(&mut score, "score");
    let mut enable_arg = Argument::flag_true(&mut enable).flag('e').name("--enable");
    let mut parser = ArgumentParser::new("program");
    parser
        .add_all([&mut label_arg, &mut score_arg, &mut enable_arg])
        .unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(enable_arg.occurrences(), 1);
    assert_eq!(label, "alpha");
    assert_eq!(score, 99);
    assert!(enable);
}

#[rstest]
#[case(vec!["3"], Ok(3))]
#[case(vec!["5"], Err("5"))]
fn int_choices(#[case] tokens: Vec<&str>, #[case] expected: Result<i32, &str>) {
    // Setup
    let mut value: i32 = 9999;
    let mut value_arg = Argument::positional(&mut value, "value").choices([1, 2, 3]);
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut value_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    match expected {
        Ok(v) => {
            assert_eq!(result, Ok(Outcome::Complete));
            assert_eq!(value, v);
        }
        Err(token) => {
            assert_eq!(
                result,
                Err((0, ParseError::InvalidChoice(token.to_string())))
            );
            assert_eq!(value, 9999);
        }
    }
}

#[rstest]
#[case(vec!["-f", "54.5"], Ok(54.5))]
#[case(vec!["-f", "54.500001"], Ok(54.500001))]
#[case(vec!["-f", "54.6"], Err("-f"))]
fn float_choices(#[case] tokens: Vec<&str>, #[case] expected: Result<f32, &str>) {
    // Setup
    let mut value: f32 = 0.0;
    let mut value_arg = Argument::option(&mut value)
        .flag('f')
        .choices([1.5f32, 54.5]);
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut value_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    match expected {
        Ok(v) => {
            assert_eq!(result, Ok(Outcome::Complete));
            assert_eq!(value, v);
        }
        Err(token) => {
            assert_eq!(
                result,
                Err((2, ParseError::InvalidChoice(token.to_string())))
            );
            assert_eq!(value, 0.0);
        }
    }
}

#[rstest]
#[case(vec!["--colour", "blue"], Ok("blue"))]
#[case(vec!["--colour", "Blue"], Err("--colour"))]
fn string_choices(#[case] tokens: Vec<&str>, #[case] expected: Result<&str, &str>) {
    // Setup
    let mut colour: String = "red".to_string();
    let mut colour_arg = Argument::option(&mut colour)
        .name("--colour")
        .choices(["red", "blue"]);
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut colour_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    match expected {
        Ok(v) => {
            assert_eq!(result, Ok(Outcome::Complete));
            assert_eq!(colour, v);
        }
        Err(token) => {
            assert_eq!(
                result,
                Err((8, ParseError::InvalidChoice(token.to_string())))
            );
            assert_eq!(colour, "red");
        }
    }
}

#[rstest]
#[case(vec!["--verbose"], true, 1)]
#[case(vec!["--no-verbose"], false, 1)]
#[case(vec!["-v", "--no-verbose"], false, 2)]
#[case(vec!["--verbose", "--no-verbose", "--verbose"], true, 3)]
#[case(vec![], true, 0)]
fn toggle(#[case] tokens: Vec<&str>, #[case] expected: bool, #[case] occurrences: u32) {
    // Setup
    let mut verbose: bool = true;
    let mut verbose_arg = Argument::toggle(&mut verbose).flag('v').name("--verbose");
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut verbose_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(verbose_arg.occurrences(), occurrences);
    assert_eq!(verbose, expected);
}

#[rstest]
#[case(vec!["-t"], true, true)]
#[case(vec!["-f"], false, false)]
#[case(vec!["-t", "-f", "-t"], true, false)]
#[case(vec!["-tf"], true, false)]
fn store_true_false(
    #[case] tokens: Vec<&str>,
    #[case] expected_t: bool,
    #[case] expected_f: bool,
) {
    // Setup
    let mut t: bool = false;
    let mut f: bool = true;
    let mut t_arg = Argument::flag_true(&mut t).flag('t');
    let mut f_arg = Argument::flag_false(&mut f).flag('f');
    let mut parser = ArgumentParser::new("program");
    parser.add_all([&mut t_arg, &mut f_arg]).unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(t, expected_t);
    assert_eq!(f, expected_f);
}

#[rstest]
#[case(vec!["--verbose"], 1)]
#[case(vec!["--verbose", "--verbose"], 2)]
#[case(vec!["-v"], 1)]
#[case(vec!["-v", "-v", "-v"], 3)]
#[case(vec!["-v", "--verbose"], 2)]
#[case(vec!["-vvv"], 3)]
#[case(vec!["-vvv", "-vvvvv"], 8)]
#[case(vec!["-vvv", "-v", "--verbose"], 5)]
#[case(vec![], 0)]
fn count(#[case] tokens: Vec<&str>, #[case] expected: i32) {
    // Setup
    let mut verbosity: i32 = 7;
    let mut verbosity_arg = Argument::count(&mut verbosity).flag('v').name("--verbose");
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut verbosity_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(verbosity_arg.occurrences(), expected as u32);
    assert_eq!(verbosity, expected);
}

#[test]
fn grouped_toggles() {
    // Setup
    let mut a: bool = false;
    let mut b: bool = false;
    let mut a_arg = Argument::toggle(&mut a).flag('a').name("--apple");
    let mut b_arg = Argument::toggle(&mut b).flag('b').name("--banana");
    let mut parser = ArgumentParser::new("program");
    parser.add_all([&mut a_arg, &mut b_arg]).unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["-ab"]);

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(a_arg.occurrences(), 1);
    assert_eq!(b_arg.occurrences(), 1);
    assert!(a);
    assert!(b);
}

#[test]
fn grouped_with_store() {
    // Setup
    let mut a: bool = false;
    let mut b: i32 = 999;
    let mut c: i32 = 999;
    let mut a_arg = Argument::toggle(&mut a).flag('a').name("--apple");
    let mut b_arg = Argument::option(&mut b).flag('b').name("--banana");
    let mut c_arg = Argument::option(&mut c).flag('c').name("--carrot");
    let mut parser = ArgumentParser::new("program");
    parser.add_all([&mut a_arg, &mut b_arg, &mut c_arg]).unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["-ab", "3", "--carrot", "321"]);

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert!(a);
    assert_eq!(b, 3);
    assert_eq!(c, 321);
}

#[test]
fn mixed_options() {
    // Setup
    let mut level: i32 = 0;
    let mut debug: bool = false;
    let mut name: String = String::default();
    let mut level_arg = Argument::option(&mut level).flag('l').name("--level");
    let mut debug_arg = Argument::toggle(&mut debug).flag('d').name("--debug");
    let mut name_arg = Argument::option(&mut name).flag('n').name("--name");
    let mut parser = ArgumentParser::new("program");
    parser
        .add_all([&mut level_arg, &mut debug_arg, &mut name_arg])
        .unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["--level", "3", "--debug", "--name", "Alice"]);

    // Verify
    assert_eq!(result, Ok(Outcome::Complete));
    assert_eq!(level, 3);
    assert!(debug);
    assert_eq!(name, "Alice");
}

#[test]
fn help_requested() {
    // Setup
    let mut value: i32 = 0;
    let mut value_arg = Argument::positional(&mut value, "value");
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut value_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["--help", "--unknown"]);

    // Verify
    assert_eq!(result, Ok(Outcome::Help));
    assert_eq!(value_arg.occurrences(), 0);
}

#[rstest]
#[case(vec!["--verbos"], 0, "--verbos")]
#[case(vec!["-x"], 0, "-x")]
#[case(vec!["-vx"], 0, "-vx")]
#[case(vec!["-v", "extra"], 2, "extra")]
#[case(vec!["-"], 0, "-")]
fn unknown_argument(#[case] tokens: Vec<&str>, #[case] offset: usize, #[case] token: &str) {
    // Setup
    let mut verbose: bool = false;
    let mut verbose_arg = Argument::toggle(&mut verbose).flag('v').name("--verbose");
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut verbose_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(tokens.as_slice());

    // Verify
    assert_eq!(result, Err((offset, ParseError::Unknown(token.to_string()))));
}

#[test]
fn unknown_until_registered() {
    let parser = ArgumentParser::new("program");
    assert_eq!(
        parser.try_parse_tokens(&["--verbose"]),
        Err((0, ParseError::Unknown("--verbose".to_string())))
    );

    let mut verbose: bool = false;
    let mut verbose_arg = Argument::toggle(&mut verbose).flag('v').name("--verbose");
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut verbose_arg).unwrap();
    assert_eq!(parser.try_parse_tokens(&["--verbose"]), Ok(Outcome::Complete));
}

#[test]
fn missing_value() {
    // Setup
    let mut value: i32 = 0;
    let mut value_arg = Argument::option(&mut value).flag('v').name("--value");
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut value_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["--value"]);

    // Verify
    assert_eq!(
        result,
        Err((0, ParseError::MissingValue("--value".to_string())))
    );
}

#[rstest]
#[case("12345678901")]
#[case("2147483648")]
#[case("-2147483649")]
#[case("99999999999999999999")]
fn range_exceeded(#[case] token: &str) {
    // Setup
    let mut value: i32 = 0;
    let mut value_arg = Argument::option(&mut value).flag('v').name("--value");
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut value_arg).unwrap();

    // Execute
    let result = parser.try_parse_tokens(&["--value", token]);

    // Verify
    assert_matches!(result, Err((7, ParseError::IntRangeExceeded { token: t, .. })) => {
        assert_eq!(t, token);
    });
    assert_eq!(value, 0);
}

#[test]
fn invalid_identity() {
    let mut value: i32 = 0;
    let mut value_arg = Argument::option(&mut value).name("").help("empty");
    let mut parser = ArgumentParser::new("program");
    assert_eq!(parser.add(&mut value_arg), Err(ConfigError::MissingIdentity));
}

#[test]
fn invalid_name() {
    let mut value: i32 = 0;
    let mut value_arg = Argument::option(&mut value).name("--").help("empty");
    let mut parser = ArgumentParser::new("program");
    assert_eq!(
        parser.add(&mut value_arg),
        Err(ConfigError::BarePrefix("--".to_string()))
    );
}

#[rstest]
#[case(Action::BooleanToggle)]
#[case(Action::StoreTrue)]
#[case(Action::StoreFalse)]
fn unsupported_choices(#[case] action: Action) {
    let mut value: bool = false;
    let mut value_arg = Argument::new(&mut value, action)
        .flag('i')
        .name("--igloo")
        .choices([1, 0]);
    let mut parser = ArgumentParser::new("program");
    assert_matches!(
        parser.add(&mut value_arg),
        Err(ConfigError::UnsupportedChoices(_))
    );
}

#[rstest]
#[case('v', "--value2", "-v")]
#[case('y', "--value", "--value")]
fn conflicting_options(#[case] flag: char, #[case] name: &str, #[case] expected: &str) {
    let mut a: i32 = 0;
    let mut b: i32 = 0;
    let mut a_arg = Argument::option(&mut a).flag('v').name("--value");
    let mut b_arg = Argument::option(&mut b).flag(flag).name(name);
    let mut parser = ArgumentParser::new("program");
    parser.add(&mut a_arg).unwrap();
    assert_eq!(
        parser.add(&mut b_arg),
        Err(ConfigError::Conflicting(expected.to_string()))
    );
}

#[rstest]
#[case('h', "--hello", "-h")]
#[case('a', "--help", "--help")]
fn conflicting_help(#[case] flag: char, #[case] name: &str, #[case] expected: &str) {
    let mut value: i32 = 0;
    let mut value_arg = Argument::option(&mut value).flag(flag).name(name);
    let mut parser = ArgumentParser::new("program");
    assert_eq!(
        parser.add(&mut value_arg),
        Err(ConfigError::Conflicting(expected.to_string()))
    );
}

#[test]
fn error_messages() {
    let mut value: i32 = 0;
    let identity = Argument::option(&mut value)
        .flag('v')
        .name("--value")
        .identity();

    assert_eq!(
        ParseError::MissingArgument(identity.clone()).to_string(),
        "Parse error: missing required argument '--value'."
    );
    assert_eq!(
        ParseError::Unknown("--verbos".to_string()).to_string(),
        "Parse error: unknown argument '--verbos'."
    );
    assert_eq!(
        ConfigError::Conflicting("-v".to_string()).to_string(),
        "Config error: option string '-v' is already in use."
    );
}
