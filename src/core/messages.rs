use crate::core::input::format_number;

pub const FIRST_NUMBER_PROMPT: &str = "Введите первое число: ";
pub const SECOND_NUMBER_PROMPT: &str = "Введите второе число: ";
pub const INVALID_NUMBER_LINE: &str = "Ошибка: Введено некорректное число.";

pub fn sum_line(a: f64, b: f64, sum: f64, separator: char) -> String {
    format!(
        "Сумма чисел {} и {} равна {}",
        format_number(a, separator),
        format_number(b, separator),
        format_number(sum, separator)
    )
}

pub fn addition_started(a: f64, b: f64, separator: char) -> String {
    format!(
        "Выполняется сложение: {} + {}",
        format_number(a, separator),
        format_number(b, separator)
    )
}

pub fn addition_result(sum: f64, separator: char) -> String {
    format!("Результат сложения: {}", format_number(sum, separator))
}

pub fn input_error(message: &str) -> String {
    format!("Ошибка ввода: {}", message)
}

pub fn generic_error(message: &str) -> String {
    format!("Ошибка: {}", message)
}
