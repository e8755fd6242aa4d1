use std::io::Cursor;

use crate::cli::input::InputReader;
use crate::cli::menu::MenuChoice;
use crate::errors::RentdeskError;

fn reader(script: &str) -> InputReader<Cursor<String>> {
    InputReader::new(Cursor::new(script.to_string()))
}

#[test]
fn menu_choice_reprompts_until_a_valid_digit() {
    let mut input = reader("9\nx\n3\n");
    assert_eq!(input.read_menu_choice().unwrap(), MenuChoice::Delete);
}

#[test]
fn menu_choice_accepts_all_six_entries() {
    let mut input = reader("1\n2\n3\n4\n5\n6\n");
    let choices: Vec<MenuChoice> = (0..6).map(|_| input.read_menu_choice().unwrap()).collect();
    assert_eq!(
        choices,
        vec![
            MenuChoice::Add,
            MenuChoice::Find,
            MenuChoice::Delete,
            MenuChoice::Update,
            MenuChoice::List,
            MenuChoice::Exit,
        ]
    );
}

#[test]
fn read_int_reprompts_on_garbage() {
    let mut input = reader("abc\n12x\n450\n");
    assert_eq!(input.read_int(None).unwrap(), 450);
}

#[test]
fn read_int_blank_returns_the_default() {
    let mut input = reader("\n");
    assert_eq!(input.read_int(Some(-1)).unwrap(), -1);
}

#[test]
fn read_int_rejects_lines_over_ten_characters() {
    // eleven digits, then an acceptable value
    let mut input = reader("12345678901\n77\n");
    assert_eq!(input.read_int(None).unwrap(), 77);
}

#[test]
fn read_string_enforces_the_length_bound() {
    let mut input = reader("far too long a name\nAmy\n");
    assert_eq!(input.read_string(8, None).unwrap(), "Amy");
}

#[test]
fn read_string_blank_returns_the_default() {
    let mut input = reader("\n");
    assert_eq!(input.read_string(8, Some("unchanged")).unwrap(), "unchanged");
}

#[test]
fn read_string_without_default_reprompts_on_blank() {
    let mut input = reader("\nAmy\n");
    assert_eq!(input.read_string(8, None).unwrap(), "Amy");
}

#[test]
fn read_char_blank_uses_the_default() {
    let mut input = reader("\n");
    assert_eq!(input.read_char(Some('Q')).unwrap(), 'Q');
}

#[test]
fn read_confirmation_normalizes_case_and_reprompts() {
    // "maybe" fails the one-character bound, "z" fails the Y/N check
    let mut input = reader("maybe\nz\ny\n");
    assert!(input.read_confirmation().unwrap());

    let mut input = reader("n\n");
    assert!(!input.read_confirmation().unwrap());
}

#[test]
fn crlf_line_endings_are_trimmed() {
    let mut input = reader("3\r\n");
    assert_eq!(input.read_menu_choice().unwrap(), MenuChoice::Delete);
}

#[test]
fn closed_input_surfaces_as_an_error() {
    let mut input = reader("");
    let err = input.read_int(None).unwrap_err();
    assert!(matches!(err, RentdeskError::InputClosed));
}
