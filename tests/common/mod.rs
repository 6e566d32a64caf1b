#![allow(dead_code)]

use format_css::{format, FormatOptions};

pub fn pretty(css: &str) -> String {
    pretty_with(css, &FormatOptions::new())
}

pub fn pretty_with(css: &str, options: &FormatOptions) -> String {
    format(css, options)
        .unwrap_or_else(|error| panic!("formatting failed: {error}"))
        .into_css()
}

/// Compares two outputs line by line and reports the first difference
pub fn assert_format_eq(actual: &str, expected: &str, test_name: &str) {
    let actual = actual.replace("\r\n", "\n");
    let expected = expected.replace("\r\n", "\n");

    if actual == expected {
        return;
    }

    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();
    let max_lines = actual_lines.len().max(expected_lines.len());

    println!("\n✗ {test_name}: output differs");
    for i in 0..max_lines {
        let actual_line = actual_lines.get(i).copied().unwrap_or("");
        let expected_line = expected_lines.get(i).copied().unwrap_or("");

        if actual_line != expected_line {
            println!("\nline {} differs:", i + 1);
            println!("  expected: {expected_line:?}");
            println!("  actual:   {actual_line:?}");

            let column = actual_line
                .chars()
                .zip(expected_line.chars())
                .take_while(|(a, b)| a == b)
                .count();
            println!("  first difference at column {}", column + 1);
            break;
        }
    }

    if actual_lines.len() != expected_lines.len() {
        println!(
            "\nline count differs: expected {}, actual {}",
            expected_lines.len(),
            actual_lines.len()
        );
    }

    println!("\n---- expected ----\n{expected}\n---- actual ----\n{actual}\n------------------");
    panic!("{test_name}: formatted output does not match");
}
