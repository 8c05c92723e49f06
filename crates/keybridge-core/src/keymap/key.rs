//! Abstract key identities.
//!
//! A [`Key`] names the *meaning* of a key (the character or control function
//! it produces under the active layout), not its position on the board.  On a
//! French AZERTY keyboard the key labelled "A" sits where QWERTY has "Q", and
//! it still reports [`Key::A`].  Position-based identities live in
//! [`Scancode`](super::scancode::Scancode).
//!
//! Every variant carries a stable lowercase *script name* (`"return"`, `"a"`,
//! `"kp+"`, ...).  Scripts refer to keys exclusively by these names, so they
//! must never change once published.
//!
//! # The `Unknown` sentinel
//!
//! [`Key::Unknown`] (discriminant 0) is returned by every lookup that has no
//! answer.  Callers treat it as "no match", never as an error.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::ConstantError;

/// Layout-independent key identity.
///
/// The discriminants are dense and start at zero so a `Key` can index a
/// fixed-size table directly (see [`KeyMap`](super::KeyMap)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Key {
    // Sentinel
    Unknown = 0,

    // Control and printable ASCII keys
    Return,
    Escape,
    Backspace,
    Tab,
    Space,
    Exclaim,
    QuoteDbl,
    Hash,
    Percent,
    Dollar,
    Ampersand,
    Quote,
    LeftParen,
    RightParen,
    Asterisk,
    Plus,
    Comma,
    Minus,
    Period,
    Slash,

    // Digits
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Colon,
    Semicolon,
    Less,
    Equals,
    Greater,
    Question,
    At,
    LeftBracket,
    Backslash,
    RightBracket,
    Caret,
    Underscore,
    Backquote,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Lock keys
    CapsLock,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Navigation cluster
    PrintScreen,
    ScrollLock,
    Pause,
    Insert,
    Home,
    PageUp,
    Delete,
    End,
    PageDown,
    Right,
    Left,
    Down,
    Up,

    // Keypad
    NumLockClear,
    KpDivide,
    KpMultiply,
    KpMinus,
    KpPlus,
    KpEnter,
    Kp0,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    KpPeriod,
    KpComma,
    KpEquals,

    // Extended keys
    Application,
    Power,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    Execute,
    Help,
    Menu,
    Select,
    Stop,
    Again,
    Undo,
    Cut,
    Copy,
    Paste,
    Find,
    Mute,
    VolumeUp,
    VolumeDown,

    // Rare editing keys
    AltErase,
    SysReq,
    Cancel,
    Clear,
    Prior,
    Return2,
    Separator,
    Out,
    Oper,
    ClearAgain,

    // Locale separators
    ThousandsSeparator,
    DecimalSeparator,
    CurrencyUnit,
    CurrencySubunit,

    // Modifiers
    LCtrl,
    LShift,
    LAlt,
    LGui,
    RCtrl,
    RShift,
    RAlt,
    RGui,
    Mode,

    // Media and application-control keys
    AudioNext,
    AudioPrev,
    AudioStop,
    AudioPlay,
    AudioMute,
    MediaSelect,
    Www,
    Mail,
    Calculator,
    Computer,
    AppSearch,
    AppHome,
    AppBack,
    AppForward,
    AppStop,
    AppRefresh,
    AppBookmarks,

    // Hardware control keys
    BrightnessDown,
    BrightnessUp,
    DisplaySwitch,
    KbdIllumToggle,
    KbdIllumDown,
    KbdIllumUp,
    Eject,
    Sleep,
}

impl Key {
    /// Number of variants, including [`Key::Unknown`].
    pub const COUNT: usize = 191;

    /// Every variant in discriminant order.
    pub const ALL: [Key; Key::COUNT] = [
        Key::Unknown,
        Key::Return,
        Key::Escape,
        Key::Backspace,
        Key::Tab,
        Key::Space,
        Key::Exclaim,
        Key::QuoteDbl,
        Key::Hash,
        Key::Percent,
        Key::Dollar,
        Key::Ampersand,
        Key::Quote,
        Key::LeftParen,
        Key::RightParen,
        Key::Asterisk,
        Key::Plus,
        Key::Comma,
        Key::Minus,
        Key::Period,
        Key::Slash,
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::Colon,
        Key::Semicolon,
        Key::Less,
        Key::Equals,
        Key::Greater,
        Key::Question,
        Key::At,
        Key::LeftBracket,
        Key::Backslash,
        Key::RightBracket,
        Key::Caret,
        Key::Underscore,
        Key::Backquote,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::CapsLock,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::PrintScreen,
        Key::ScrollLock,
        Key::Pause,
        Key::Insert,
        Key::Home,
        Key::PageUp,
        Key::Delete,
        Key::End,
        Key::PageDown,
        Key::Right,
        Key::Left,
        Key::Down,
        Key::Up,
        Key::NumLockClear,
        Key::KpDivide,
        Key::KpMultiply,
        Key::KpMinus,
        Key::KpPlus,
        Key::KpEnter,
        Key::Kp0,
        Key::Kp1,
        Key::Kp2,
        Key::Kp3,
        Key::Kp4,
        Key::Kp5,
        Key::Kp6,
        Key::Kp7,
        Key::Kp8,
        Key::Kp9,
        Key::KpPeriod,
        Key::KpComma,
        Key::KpEquals,
        Key::Application,
        Key::Power,
        Key::F13,
        Key::F14,
        Key::F15,
        Key::F16,
        Key::F17,
        Key::F18,
        Key::F19,
        Key::F20,
        Key::F21,
        Key::F22,
        Key::F23,
        Key::F24,
        Key::Execute,
        Key::Help,
        Key::Menu,
        Key::Select,
        Key::Stop,
        Key::Again,
        Key::Undo,
        Key::Cut,
        Key::Copy,
        Key::Paste,
        Key::Find,
        Key::Mute,
        Key::VolumeUp,
        Key::VolumeDown,
        Key::AltErase,
        Key::SysReq,
        Key::Cancel,
        Key::Clear,
        Key::Prior,
        Key::Return2,
        Key::Separator,
        Key::Out,
        Key::Oper,
        Key::ClearAgain,
        Key::ThousandsSeparator,
        Key::DecimalSeparator,
        Key::CurrencyUnit,
        Key::CurrencySubunit,
        Key::LCtrl,
        Key::LShift,
        Key::LAlt,
        Key::LGui,
        Key::RCtrl,
        Key::RShift,
        Key::RAlt,
        Key::RGui,
        Key::Mode,
        Key::AudioNext,
        Key::AudioPrev,
        Key::AudioStop,
        Key::AudioPlay,
        Key::AudioMute,
        Key::MediaSelect,
        Key::Www,
        Key::Mail,
        Key::Calculator,
        Key::Computer,
        Key::AppSearch,
        Key::AppHome,
        Key::AppBack,
        Key::AppForward,
        Key::AppStop,
        Key::AppRefresh,
        Key::AppBookmarks,
        Key::BrightnessDown,
        Key::BrightnessUp,
        Key::DisplaySwitch,
        Key::KbdIllumToggle,
        Key::KbdIllumDown,
        Key::KbdIllumUp,
        Key::Eject,
        Key::Sleep,
    ];

    /// Returns the dense table index of this key.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the script name of this key.
    pub fn name(self) -> &'static str {
        match self {
            Key::Unknown => "unknown",
            Key::Return => "return",
            Key::Escape => "escape",
            Key::Backspace => "backspace",
            Key::Tab => "tab",
            Key::Space => "space",
            Key::Exclaim => "!",
            Key::QuoteDbl => "\"",
            Key::Hash => "#",
            Key::Percent => "%",
            Key::Dollar => "$",
            Key::Ampersand => "&",
            Key::Quote => "'",
            Key::LeftParen => "(",
            Key::RightParen => ")",
            Key::Asterisk => "*",
            Key::Plus => "+",
            Key::Comma => ",",
            Key::Minus => "-",
            Key::Period => ".",
            Key::Slash => "/",
            Key::Num0 => "0",
            Key::Num1 => "1",
            Key::Num2 => "2",
            Key::Num3 => "3",
            Key::Num4 => "4",
            Key::Num5 => "5",
            Key::Num6 => "6",
            Key::Num7 => "7",
            Key::Num8 => "8",
            Key::Num9 => "9",
            Key::Colon => ":",
            Key::Semicolon => ";",
            Key::Less => "<",
            Key::Equals => "=",
            Key::Greater => ">",
            Key::Question => "?",
            Key::At => "@",
            Key::LeftBracket => "[",
            Key::Backslash => "\\",
            Key::RightBracket => "]",
            Key::Caret => "^",
            Key::Underscore => "_",
            Key::Backquote => "`",
            Key::A => "a",
            Key::B => "b",
            Key::C => "c",
            Key::D => "d",
            Key::E => "e",
            Key::F => "f",
            Key::G => "g",
            Key::H => "h",
            Key::I => "i",
            Key::J => "j",
            Key::K => "k",
            Key::L => "l",
            Key::M => "m",
            Key::N => "n",
            Key::O => "o",
            Key::P => "p",
            Key::Q => "q",
            Key::R => "r",
            Key::S => "s",
            Key::T => "t",
            Key::U => "u",
            Key::V => "v",
            Key::W => "w",
            Key::X => "x",
            Key::Y => "y",
            Key::Z => "z",
            Key::CapsLock => "capslock",
            Key::F1 => "f1",
            Key::F2 => "f2",
            Key::F3 => "f3",
            Key::F4 => "f4",
            Key::F5 => "f5",
            Key::F6 => "f6",
            Key::F7 => "f7",
            Key::F8 => "f8",
            Key::F9 => "f9",
            Key::F10 => "f10",
            Key::F11 => "f11",
            Key::F12 => "f12",
            Key::PrintScreen => "printscreen",
            Key::ScrollLock => "scrolllock",
            Key::Pause => "pause",
            Key::Insert => "insert",
            Key::Home => "home",
            Key::PageUp => "pageup",
            Key::Delete => "delete",
            Key::End => "end",
            Key::PageDown => "pagedown",
            Key::Right => "right",
            Key::Left => "left",
            Key::Down => "down",
            Key::Up => "up",
            Key::NumLockClear => "numlock",
            Key::KpDivide => "kp/",
            Key::KpMultiply => "kp*",
            Key::KpMinus => "kp-",
            Key::KpPlus => "kp+",
            Key::KpEnter => "kpenter",
            Key::Kp0 => "kp0",
            Key::Kp1 => "kp1",
            Key::Kp2 => "kp2",
            Key::Kp3 => "kp3",
            Key::Kp4 => "kp4",
            Key::Kp5 => "kp5",
            Key::Kp6 => "kp6",
            Key::Kp7 => "kp7",
            Key::Kp8 => "kp8",
            Key::Kp9 => "kp9",
            Key::KpPeriod => "kp.",
            Key::KpComma => "kp,",
            Key::KpEquals => "kp=",
            Key::Application => "application",
            Key::Power => "power",
            Key::F13 => "f13",
            Key::F14 => "f14",
            Key::F15 => "f15",
            Key::F16 => "f16",
            Key::F17 => "f17",
            Key::F18 => "f18",
            Key::F19 => "f19",
            Key::F20 => "f20",
            Key::F21 => "f21",
            Key::F22 => "f22",
            Key::F23 => "f23",
            Key::F24 => "f24",
            Key::Execute => "execute",
            Key::Help => "help",
            Key::Menu => "menu",
            Key::Select => "select",
            Key::Stop => "stop",
            Key::Again => "again",
            Key::Undo => "undo",
            Key::Cut => "cut",
            Key::Copy => "copy",
            Key::Paste => "paste",
            Key::Find => "find",
            Key::Mute => "mute",
            Key::VolumeUp => "volumeup",
            Key::VolumeDown => "volumedown",
            Key::AltErase => "alterase",
            Key::SysReq => "sysreq",
            Key::Cancel => "cancel",
            Key::Clear => "clear",
            Key::Prior => "prior",
            Key::Return2 => "return2",
            Key::Separator => "separator",
            Key::Out => "out",
            Key::Oper => "oper",
            Key::ClearAgain => "clearagain",
            Key::ThousandsSeparator => "thousandsseparator",
            Key::DecimalSeparator => "decimalseparator",
            Key::CurrencyUnit => "currencyunit",
            Key::CurrencySubunit => "currencysubunit",
            Key::LCtrl => "lctrl",
            Key::LShift => "lshift",
            Key::LAlt => "lalt",
            Key::LGui => "lgui",
            Key::RCtrl => "rctrl",
            Key::RShift => "rshift",
            Key::RAlt => "ralt",
            Key::RGui => "rgui",
            Key::Mode => "mode",
            Key::AudioNext => "audionext",
            Key::AudioPrev => "audioprev",
            Key::AudioStop => "audiostop",
            Key::AudioPlay => "audioplay",
            Key::AudioMute => "audiomute",
            Key::MediaSelect => "mediaselect",
            Key::Www => "www",
            Key::Mail => "mail",
            Key::Calculator => "calculator",
            Key::Computer => "computer",
            Key::AppSearch => "appsearch",
            Key::AppHome => "apphome",
            Key::AppBack => "appback",
            Key::AppForward => "appforward",
            Key::AppStop => "appstop",
            Key::AppRefresh => "apprefresh",
            Key::AppBookmarks => "appbookmarks",
            Key::BrightnessDown => "brightnessdown",
            Key::BrightnessUp => "brightnessup",
            Key::DisplaySwitch => "displayswitch",
            Key::KbdIllumToggle => "kbdillumtoggle",
            Key::KbdIllumDown => "kbdillumdown",
            Key::KbdIllumUp => "kbdillumup",
            Key::Eject => "eject",
            Key::Sleep => "sleep",
        }
    }

    /// Looks a key up by its script name.
    ///
    /// Returns `None` for names that are not recognised.  Matching is exact
    /// and case-sensitive.
    pub fn from_name(name: &str) -> Option<Key> {
        match name {
            "unknown" => Some(Key::Unknown),
            "return" => Some(Key::Return),
            "escape" => Some(Key::Escape),
            "backspace" => Some(Key::Backspace),
            "tab" => Some(Key::Tab),
            "space" => Some(Key::Space),
            "!" => Some(Key::Exclaim),
            "\"" => Some(Key::QuoteDbl),
            "#" => Some(Key::Hash),
            "%" => Some(Key::Percent),
            "$" => Some(Key::Dollar),
            "&" => Some(Key::Ampersand),
            "'" => Some(Key::Quote),
            "(" => Some(Key::LeftParen),
            ")" => Some(Key::RightParen),
            "*" => Some(Key::Asterisk),
            "+" => Some(Key::Plus),
            "," => Some(Key::Comma),
            "-" => Some(Key::Minus),
            "." => Some(Key::Period),
            "/" => Some(Key::Slash),
            "0" => Some(Key::Num0),
            "1" => Some(Key::Num1),
            "2" => Some(Key::Num2),
            "3" => Some(Key::Num3),
            "4" => Some(Key::Num4),
            "5" => Some(Key::Num5),
            "6" => Some(Key::Num6),
            "7" => Some(Key::Num7),
            "8" => Some(Key::Num8),
            "9" => Some(Key::Num9),
            ":" => Some(Key::Colon),
            ";" => Some(Key::Semicolon),
            "<" => Some(Key::Less),
            "=" => Some(Key::Equals),
            ">" => Some(Key::Greater),
            "?" => Some(Key::Question),
            "@" => Some(Key::At),
            "[" => Some(Key::LeftBracket),
            "\\" => Some(Key::Backslash),
            "]" => Some(Key::RightBracket),
            "^" => Some(Key::Caret),
            "_" => Some(Key::Underscore),
            "`" => Some(Key::Backquote),
            "a" => Some(Key::A),
            "b" => Some(Key::B),
            "c" => Some(Key::C),
            "d" => Some(Key::D),
            "e" => Some(Key::E),
            "f" => Some(Key::F),
            "g" => Some(Key::G),
            "h" => Some(Key::H),
            "i" => Some(Key::I),
            "j" => Some(Key::J),
            "k" => Some(Key::K),
            "l" => Some(Key::L),
            "m" => Some(Key::M),
            "n" => Some(Key::N),
            "o" => Some(Key::O),
            "p" => Some(Key::P),
            "q" => Some(Key::Q),
            "r" => Some(Key::R),
            "s" => Some(Key::S),
            "t" => Some(Key::T),
            "u" => Some(Key::U),
            "v" => Some(Key::V),
            "w" => Some(Key::W),
            "x" => Some(Key::X),
            "y" => Some(Key::Y),
            "z" => Some(Key::Z),
            "capslock" => Some(Key::CapsLock),
            "f1" => Some(Key::F1),
            "f2" => Some(Key::F2),
            "f3" => Some(Key::F3),
            "f4" => Some(Key::F4),
            "f5" => Some(Key::F5),
            "f6" => Some(Key::F6),
            "f7" => Some(Key::F7),
            "f8" => Some(Key::F8),
            "f9" => Some(Key::F9),
            "f10" => Some(Key::F10),
            "f11" => Some(Key::F11),
            "f12" => Some(Key::F12),
            "printscreen" => Some(Key::PrintScreen),
            "scrolllock" => Some(Key::ScrollLock),
            "pause" => Some(Key::Pause),
            "insert" => Some(Key::Insert),
            "home" => Some(Key::Home),
            "pageup" => Some(Key::PageUp),
            "delete" => Some(Key::Delete),
            "end" => Some(Key::End),
            "pagedown" => Some(Key::PageDown),
            "right" => Some(Key::Right),
            "left" => Some(Key::Left),
            "down" => Some(Key::Down),
            "up" => Some(Key::Up),
            "numlock" => Some(Key::NumLockClear),
            "kp/" => Some(Key::KpDivide),
            "kp*" => Some(Key::KpMultiply),
            "kp-" => Some(Key::KpMinus),
            "kp+" => Some(Key::KpPlus),
            "kpenter" => Some(Key::KpEnter),
            "kp0" => Some(Key::Kp0),
            "kp1" => Some(Key::Kp1),
            "kp2" => Some(Key::Kp2),
            "kp3" => Some(Key::Kp3),
            "kp4" => Some(Key::Kp4),
            "kp5" => Some(Key::Kp5),
            "kp6" => Some(Key::Kp6),
            "kp7" => Some(Key::Kp7),
            "kp8" => Some(Key::Kp8),
            "kp9" => Some(Key::Kp9),
            "kp." => Some(Key::KpPeriod),
            "kp," => Some(Key::KpComma),
            "kp=" => Some(Key::KpEquals),
            "application" => Some(Key::Application),
            "power" => Some(Key::Power),
            "f13" => Some(Key::F13),
            "f14" => Some(Key::F14),
            "f15" => Some(Key::F15),
            "f16" => Some(Key::F16),
            "f17" => Some(Key::F17),
            "f18" => Some(Key::F18),
            "f19" => Some(Key::F19),
            "f20" => Some(Key::F20),
            "f21" => Some(Key::F21),
            "f22" => Some(Key::F22),
            "f23" => Some(Key::F23),
            "f24" => Some(Key::F24),
            "execute" => Some(Key::Execute),
            "help" => Some(Key::Help),
            "menu" => Some(Key::Menu),
            "select" => Some(Key::Select),
            "stop" => Some(Key::Stop),
            "again" => Some(Key::Again),
            "undo" => Some(Key::Undo),
            "cut" => Some(Key::Cut),
            "copy" => Some(Key::Copy),
            "paste" => Some(Key::Paste),
            "find" => Some(Key::Find),
            "mute" => Some(Key::Mute),
            "volumeup" => Some(Key::VolumeUp),
            "volumedown" => Some(Key::VolumeDown),
            "alterase" => Some(Key::AltErase),
            "sysreq" => Some(Key::SysReq),
            "cancel" => Some(Key::Cancel),
            "clear" => Some(Key::Clear),
            "prior" => Some(Key::Prior),
            "return2" => Some(Key::Return2),
            "separator" => Some(Key::Separator),
            "out" => Some(Key::Out),
            "oper" => Some(Key::Oper),
            "clearagain" => Some(Key::ClearAgain),
            "thousandsseparator" => Some(Key::ThousandsSeparator),
            "decimalseparator" => Some(Key::DecimalSeparator),
            "currencyunit" => Some(Key::CurrencyUnit),
            "currencysubunit" => Some(Key::CurrencySubunit),
            "lctrl" => Some(Key::LCtrl),
            "lshift" => Some(Key::LShift),
            "lalt" => Some(Key::LAlt),
            "lgui" => Some(Key::LGui),
            "rctrl" => Some(Key::RCtrl),
            "rshift" => Some(Key::RShift),
            "ralt" => Some(Key::RAlt),
            "rgui" => Some(Key::RGui),
            "mode" => Some(Key::Mode),
            "audionext" => Some(Key::AudioNext),
            "audioprev" => Some(Key::AudioPrev),
            "audiostop" => Some(Key::AudioStop),
            "audioplay" => Some(Key::AudioPlay),
            "audiomute" => Some(Key::AudioMute),
            "mediaselect" => Some(Key::MediaSelect),
            "www" => Some(Key::Www),
            "mail" => Some(Key::Mail),
            "calculator" => Some(Key::Calculator),
            "computer" => Some(Key::Computer),
            "appsearch" => Some(Key::AppSearch),
            "apphome" => Some(Key::AppHome),
            "appback" => Some(Key::AppBack),
            "appforward" => Some(Key::AppForward),
            "appstop" => Some(Key::AppStop),
            "apprefresh" => Some(Key::AppRefresh),
            "appbookmarks" => Some(Key::AppBookmarks),
            "brightnessdown" => Some(Key::BrightnessDown),
            "brightnessup" => Some(Key::BrightnessUp),
            "displayswitch" => Some(Key::DisplaySwitch),
            "kbdillumtoggle" => Some(Key::KbdIllumToggle),
            "kbdillumdown" => Some(Key::KbdIllumDown),
            "kbdillumup" => Some(Key::KbdIllumUp),
            "eject" => Some(Key::Eject),
            "sleep" => Some(Key::Sleep),
            _ => None,
        }
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::Unknown
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = ConstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_name(s).ok_or_else(|| ConstantError::InvalidKey(s.to_string()))
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, key) in Key::ALL.iter().enumerate() {
            assert_eq!(key.index(), i, "{key:?} is out of order in Key::ALL");
        }
    }

    #[test]
    fn test_every_name_round_trips_through_from_name() {
        for key in Key::ALL {
            // Arrange / Act
            let parsed = Key::from_name(key.name());

            // Assert
            assert_eq!(parsed, Some(key), "name {:?} should parse back", key.name());
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Key::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), Key::COUNT);
    }

    #[test]
    fn test_from_name_rejects_unrecognised_and_uppercase_names() {
        for bad in ["", "A", "Return", "enter", "kp10", "f25"] {
            assert_eq!(Key::from_name(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_punctuation_names_are_the_characters_themselves() {
        assert_eq!(Key::Exclaim.name(), "!");
        assert_eq!(Key::QuoteDbl.name(), "\"");
        assert_eq!(Key::Backslash.name(), "\\");
        assert_eq!(Key::Num7.name(), "7");
        assert_eq!(Key::KpPlus.name(), "kp+");
    }

    #[test]
    fn test_from_str_reports_invalid_key_constant() {
        let err = "nope".parse::<Key>().unwrap_err();
        assert_eq!(err.to_string(), "invalid key constant: nope");
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Key::default(), Key::Unknown);
        assert_eq!(Key::Unknown.index(), 0);
    }

    #[test]
    fn test_serde_uses_script_names() {
        // Arrange
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Binding {
            key: Key,
        }

        // Act
        let text = toml::to_string(&Binding { key: Key::KpEnter }).expect("serialize");
        let back: Binding = toml::from_str(&text).expect("deserialize");

        // Assert
        assert!(text.contains("\"kpenter\""), "unexpected encoding: {text}");
        assert_eq!(back.key, Key::KpEnter);
    }

    #[test]
    fn test_deserialize_rejects_unknown_names() {
        #[derive(Deserialize, Debug)]
        struct Binding {
            #[allow(dead_code)]
            key: Key,
        }

        let result: Result<Binding, _> = toml::from_str("key = \"hyper\"");
        assert!(result.is_err());
    }
}
