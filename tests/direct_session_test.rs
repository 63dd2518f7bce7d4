use console_adder::{app, Console, Outcome, Settings};
use std::io::{self, Cursor, Write};

fn run(input: &str) -> (Outcome, String) {
    let console = Console::new(Vec::new(), false).shared();
    let outcome = app::run_direct(Cursor::new(input.to_string()), console.clone(), &Settings::default());
    let output = String::from_utf8(console.borrow().get_ref().clone()).unwrap();
    (outcome, output)
}

#[test]
fn test_two_plus_three() {
    let (outcome, output) = run("2\n3\n\n");

    assert_eq!(outcome.sum(), Some(5.0));
    assert_eq!(
        output,
        "Введите первое число: Введите второе число: Сумма чисел 2 и 3 равна 5\n"
    );
}

#[test]
fn test_decimal_comma_input() {
    let (outcome, output) = run("1,5\n2,25\n\n");

    assert_eq!(outcome.sum(), Some(3.75));
    assert!(output.ends_with("Сумма чисел 1,5 и 2,25 равна 3,75\n"));
}

#[test]
fn test_invalid_first_number() {
    let (outcome, output) = run("abc\n3\n\n");

    assert_eq!(outcome, Outcome::InvalidInput);
    assert!(output.contains("Ошибка: Введено некорректное число."));
    assert!(!output.contains("Сумма"));
    assert!(!output.contains("Введите второе число"));
}

#[test]
fn test_invalid_second_number() {
    let (outcome, output) = run("2\nxyz\n\n");

    assert_eq!(outcome, Outcome::InvalidInput);
    assert!(output.contains("Введите второе число: "));
    assert!(output.ends_with("Ошибка: Введено некорректное число.\n"));
    assert!(!output.contains("Сумма"));
}

#[test]
fn test_closed_input_is_invalid() {
    let (outcome, output) = run("");

    assert_eq!(outcome, Outcome::InvalidInput);
    assert_eq!(
        output,
        "Введите первое число: Ошибка: Введено некорректное число.\n"
    );
}

#[test]
fn test_decimal_point_setting() {
    let console = Console::new(Vec::new(), false).shared();
    let settings = Settings {
        decimal_separator: '.',
        ..Default::default()
    };
    app::run_direct(Cursor::new("0,5\n0.25\n"), console.clone(), &settings);

    let output = String::from_utf8(console.borrow().get_ref().clone()).unwrap();
    assert!(output.ends_with("Сумма чисел 0.5 и 0.25 равна 0.75\n"));
}

#[test]
fn test_non_utf8_input_is_invalid() {
    let console = Console::new(Vec::new(), false).shared();
    let outcome = app::run_direct(
        Cursor::new(b"\xff\xfe\n3\n\n".to_vec()),
        console.clone(),
        &Settings::default(),
    );

    assert_eq!(outcome, Outcome::InvalidInput);
    let output = String::from_utf8(console.borrow().get_ref().clone()).unwrap();
    assert_eq!(
        output,
        "Введите первое число: Ошибка: Введено некорректное число.\n"
    );
}

#[test]
fn test_large_and_infinite_sums_use_exponent_form() {
    let (_, output) = run("1e20\n1\n\n");
    assert!(output.ends_with("Сумма чисел 1E+20 и 1 равна 1E+20\n"));

    let (outcome, output) = run("1e308\n1e308\n\n");
    assert_eq!(outcome.sum(), Some(f64::INFINITY));
    assert!(output.ends_with("Сумма чисел 1E+308 и 1E+308 равна ∞\n"));
}

/// Prompts and error lines succeed, the result line fails.
struct FailOnSumWriter {
    written: Vec<u8>,
}

impl Write for FailOnSumWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.starts_with("Сумма".as_bytes()) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_unexpected_failure_prints_generic_error() {
    let console = Console::new(FailOnSumWriter { written: Vec::new() }, false).shared();
    let outcome = app::run_direct(Cursor::new("2\n3\n\n"), console.clone(), &Settings::default());

    assert_eq!(
        outcome,
        Outcome::Failed {
            message: "сбой ввода-вывода: console closed".to_string()
        }
    );
    let output = String::from_utf8(console.borrow().get_ref().written.clone()).unwrap();
    assert_eq!(
        output,
        "Введите первое число: Введите второе число: Ошибка: сбой ввода-вывода: console closed\n"
    );
}
