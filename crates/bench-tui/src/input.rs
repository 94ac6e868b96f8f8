//! Key decoding.
//!
//! Three input shapes converge on one [`KeyInput`]: crossterm key events,
//! raw terminal bytes (with `ESC [` arrow sequences), and symbolic key names
//! as delivered by renderers that parse keys themselves.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Normalized key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Quit,
    /// Any other printable key, lower-cased.
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
        }
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
/// Longest CSI parameter string we wait for (`1;2`).
const MAX_CSI_PARAMS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Pending {
    #[default]
    Idle,
    Escape,
    Csi(String),
}

/// Stateful decoder. Holds a partially received escape sequence between
/// bytes, and a pending `[` between symbolic key names.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    pending: Pending,
    bracket_pending: bool,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while part of an escape sequence is buffered.
    pub fn is_pending(&self) -> bool {
        self.pending != Pending::Idle || self.bracket_pending
    }

    /// Feed one raw byte. Emits at most one key.
    pub fn feed_byte(&mut self, byte: u8) -> Option<KeyInput> {
        match std::mem::take(&mut self.pending) {
            Pending::Idle => decode_plain_byte(byte).or_else(|| {
                if byte == ESC {
                    self.pending = Pending::Escape;
                }
                None
            }),
            // A fresh ESC restarts the sequence.
            Pending::Escape | Pending::Csi(_) if byte == ESC => {
                self.pending = Pending::Escape;
                None
            }
            Pending::Escape => {
                if byte == b'[' {
                    self.pending = Pending::Csi(String::new());
                }
                None
            }
            Pending::Csi(mut params) => match byte {
                b'A'..=b'D' => {
                    let shift = match params.as_str() {
                        "" => false,
                        "1;2" => true,
                        _ => return None,
                    };
                    arrow(byte).map(|key| KeyInput::new(key).with_shift(shift))
                }
                b'0'..=b'9' | b';' if params.len() < MAX_CSI_PARAMS => {
                    params.push(byte as char);
                    self.pending = Pending::Csi(params);
                    None
                }
                _ => None,
            },
        }
    }

    /// Decode a raw byte buffer, in order.
    pub fn decode_bytes(&mut self, bytes: &[u8]) -> Vec<KeyInput> {
        bytes.iter().filter_map(|b| self.feed_byte(*b)).collect()
    }

    /// Decode a symbolic key name (`"arrowup"`, `"return"`, `"space"`, `"k"`).
    /// Modifier flags are copied as given.
    pub fn decode_named(&mut self, name: &str, ctrl: bool, shift: bool) -> Option<KeyInput> {
        let name = name.to_lowercase();

        // Some renderers split an unparsed arrow into `[` followed by a letter.
        if std::mem::take(&mut self.bracket_pending) {
            return match name.as_str() {
                "a" => Some(Key::Up),
                "b" => Some(Key::Down),
                "c" => Some(Key::Right),
                "d" => Some(Key::Left),
                _ => None,
            }
            .map(|key| KeyInput::new(key).with_ctrl(ctrl).with_shift(shift));
        }

        let key = match name.as_str() {
            "[" => {
                self.bracket_pending = true;
                return None;
            }
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "return" | "enter" | "linefeed" => Key::Enter,
            " " | "space" => Key::Space,
            "c" if ctrl => Key::Quit,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(KeyInput::new(key).with_ctrl(ctrl).with_shift(shift))
    }
}

fn decode_plain_byte(byte: u8) -> Option<KeyInput> {
    match byte {
        CTRL_C => Some(KeyInput::new(Key::Quit).with_ctrl(true)),
        b'\r' | b'\n' => Some(KeyInput::new(Key::Enter)),
        b' ' => Some(KeyInput::new(Key::Space)),
        0x21..=0x7e => {
            let lower = byte.to_ascii_lowercase();
            Some(KeyInput::new(Key::Char(lower as char)).with_shift(lower != byte))
        }
        _ => None,
    }
}

fn arrow(letter: u8) -> Option<Key> {
    match letter {
        b'A' => Some(Key::Up),
        b'B' => Some(Key::Down),
        b'C' => Some(Key::Right),
        b'D' => Some(Key::Left),
        _ => None,
    }
}

/// Decode a crossterm key event. Release events are ignored.
pub fn decode_event(event: &KeyEvent) -> Option<KeyInput> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);
    let key = match event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Key::Quit,
        KeyCode::Char(c) => {
            let lower = c.to_ascii_lowercase();
            return Some(
                KeyInput::new(Key::Char(lower))
                    .with_ctrl(ctrl)
                    .with_shift(shift || lower != c),
            );
        }
        _ => return None,
    };
    Some(KeyInput::new(key).with_ctrl(ctrl).with_shift(shift))
}

/// What a key means to the selection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Up,
    Down,
    Left,
    Right,
    Toggle,
    Confirm,
    Quit,
}

impl NavCommand {
    /// Resolve key aliases (`k`/`i` up, `j` down, `h`/`u` left, `l`/`o` right).
    pub fn from_input(input: &KeyInput) -> Option<NavCommand> {
        match input.key {
            Key::Up | Key::Char('k') | Key::Char('i') => Some(NavCommand::Up),
            Key::Down | Key::Char('j') => Some(NavCommand::Down),
            Key::Left | Key::Char('h') | Key::Char('u') => Some(NavCommand::Left),
            Key::Right | Key::Char('l') | Key::Char('o') => Some(NavCommand::Right),
            Key::Space => Some(NavCommand::Toggle),
            Key::Enter => Some(NavCommand::Confirm),
            Key::Quit | Key::Char('q') => Some(NavCommand::Quit),
            Key::Char(_) => None,
        }
    }
}
