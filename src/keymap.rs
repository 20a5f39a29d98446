//! Key and button mapping
//!
//! The fixed lookup table from key presses to state machine events, and the
//! keypad layout that clicks go through.

use crate::state_machine::{Digit, Event, Operation};

/// A key press, independent of the terminal library that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Enter,
    Escape,
    Backspace,
}

impl KeyInput {
    /// Event for this key, if it is a calculator key
    pub fn to_event(self) -> Option<Event> {
        match self {
            KeyInput::Char(c) => char_event(c),
            KeyInput::Enter => Some(Event::Compute),
            KeyInput::Escape => Some(Event::Clear),
            KeyInput::Backspace => Some(Event::DeleteLastDigit),
        }
    }

    /// Keys spelled out by one whitespace-separated token of batch input.
    ///
    /// Named keys (`Enter`, `Esc`, `Escape`, `Backspace`, `Del`) match
    /// case-insensitively; anything else is one key per character.
    pub fn parse_token(token: &str) -> Vec<KeyInput> {
        match token.to_ascii_lowercase().as_str() {
            "enter" => vec![KeyInput::Enter],
            "esc" | "escape" => vec![KeyInput::Escape],
            "backspace" | "del" => vec![KeyInput::Backspace],
            _ => token.chars().map(KeyInput::Char).collect(),
        }
    }
}

fn char_event(c: char) -> Option<Event> {
    if let Some(digit) = Digit::new(c) {
        return Some(Event::AppendDigit(digit));
    }
    let event = match c {
        '+' => Event::ChooseOperation(Operation::Add),
        '-' => Event::ChooseOperation(Operation::Subtract),
        '*' => Event::ChooseOperation(Operation::Multiply),
        '/' => Event::ChooseOperation(Operation::Divide),
        '%' => Event::InlinePercentage,
        '=' => Event::Compute,
        _ => return None,
    };
    Some(event)
}

/// One on-screen keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub key: KeyInput,
}

const fn button(label: &'static str, key: KeyInput) -> Button {
    Button { label, key }
}

const fn char_button(label: &'static str, c: char) -> Button {
    button(label, KeyInput::Char(c))
}

/// Keypad rows, top to bottom
pub const KEYPAD: [&[Button]; 5] = [
    &[
        button("C", KeyInput::Escape),
        button("DEL", KeyInput::Backspace),
        char_button("%", '%'),
        char_button("\u{f7}", '/'),
    ],
    &[
        char_button("7", '7'),
        char_button("8", '8'),
        char_button("9", '9'),
        char_button("\u{d7}", '*'),
    ],
    &[
        char_button("4", '4'),
        char_button("5", '5'),
        char_button("6", '6'),
        char_button("\u{2212}", '-'),
    ],
    &[
        char_button("1", '1'),
        char_button("2", '2'),
        char_button("3", '3'),
        char_button("+", '+'),
    ],
    &[
        char_button("0", '0'),
        char_button(".", '.'),
        button("=", KeyInput::Enter),
    ],
];

impl Button {
    /// Position `(row, column)` of the button a key press corresponds to
    pub fn position_for_key(key: KeyInput) -> Option<(usize, usize)> {
        let key = match key {
            KeyInput::Char('=') => KeyInput::Enter,
            other => other,
        };
        KEYPAD.iter().enumerate().find_map(|(row, buttons)| {
            buttons
                .iter()
                .position(|b| b.key == key)
                .map(|col| (row, col))
        })
    }
}
