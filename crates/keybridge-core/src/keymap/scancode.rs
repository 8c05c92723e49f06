//! Physical key-position identities.
//!
//! A [`Scancode`] names *where* a key is, independent of the active layout or
//! locale.  The variants follow the USB HID keyboard page ordering, which is
//! also the numbering most host input libraries use for their own scancodes.
//! Games that want WASD movement regardless of layout query scancodes; games
//! that want "the key that types Q" query [`Key`](super::key::Key)s.
//!
//! Script names are lowercase and stable.  Keys that only exist on non-US
//! boards use the `nonus` prefix, keypad keys use the `kp` prefix.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::ConstantError;

/// Layout-independent physical key position.
///
/// Discriminants are dense and start at zero; [`Scancode::Unknown`] is the
/// sentinel returned by lookups that have no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Scancode {
    // Sentinel
    Unknown = 0,

    // Letters (native 4-29)
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

    // Digit row (native 30-39)
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Num0,

    // Control and punctuation (native 40-56)
    Return,
    Escape,
    Backspace,
    Tab,
    Space,
    Minus,
    Equals,
    LeftBracket,
    RightBracket,
    Backslash,
    NonUsHash,
    Semicolon,
    Apostrophe,
    Grave,
    Comma,
    Period,
    Slash,

    // Lock keys
    CapsLock,

    // Function keys F1-F12 (native 58-69)
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

    // Navigation cluster (native 70-82)
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

    // Keypad (native 83-99)
    NumLockClear,
    KpDivide,
    KpMultiply,
    KpMinus,
    KpPlus,
    KpEnter,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    Kp0,
    KpPeriod,

    // Extended keys (native 100-134)
    NonUsBackslash,
    Application,
    Power,
    KpEquals,
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
    KpComma,
    KpEqualsAs400,

    // International and language keys (native 135-152)
    International1,
    International2,
    International3,
    International4,
    International5,
    International6,
    International7,
    International8,
    International9,
    Lang1,
    Lang2,
    Lang3,
    Lang4,
    Lang5,
    Lang6,
    Lang7,
    Lang8,
    Lang9,

    // Rare editing keys (native 153-164)
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
    CrSel,
    ExSel,

    // Extended keypad (native 176-221)
    Kp00,
    Kp000,
    ThousandsSeparator,
    DecimalSeparator,
    CurrencyUnit,
    CurrencySubunit,
    KpLeftParen,
    KpRightParen,
    KpLeftBrace,
    KpRightBrace,
    KpTab,
    KpBackspace,
    KpA,
    KpB,
    KpC,
    KpD,
    KpE,
    KpF,
    KpXor,
    KpPower,
    KpPercent,
    KpLess,
    KpGreater,
    KpAmpersand,
    KpDblAmpersand,
    KpVerticalBar,
    KpDblVerticalBar,
    KpColon,
    KpHash,
    KpSpace,
    KpAt,
    KpExclam,
    KpMemStore,
    KpMemRecall,
    KpMemClear,
    KpMemAdd,
    KpMemSubtract,
    KpMemMultiply,
    KpMemDivide,
    KpPlusMinus,
    KpClear,
    KpClearEntry,
    KpBinary,
    KpOctal,
    KpDecimal,
    KpHexadecimal,

    // Modifiers (native 224-231)
    LCtrl,
    LShift,
    LAlt,
    LGui,
    RCtrl,
    RShift,
    RAlt,
    RGui,

    // Mode switch and media keys (native 257-274)
    Mode,
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
    AcSearch,
    AcHome,
    AcBack,
    AcForward,
    AcStop,
    AcRefresh,
    AcBookmarks,

    // Hardware control keys (native 275-284)
    BrightnessDown,
    BrightnessUp,
    DisplaySwitch,
    KbdIllumToggle,
    KbdIllumDown,
    KbdIllumUp,
    Eject,
    Sleep,
    App1,
    App2,
}

impl Scancode {
    /// Number of variants, including [`Scancode::Unknown`].
    pub const COUNT: usize = 241;

    /// Every variant in discriminant order.
    pub const ALL: [Scancode; Scancode::COUNT] = [
        Scancode::Unknown,
        Scancode::A,
        Scancode::B,
        Scancode::C,
        Scancode::D,
        Scancode::E,
        Scancode::F,
        Scancode::G,
        Scancode::H,
        Scancode::I,
        Scancode::J,
        Scancode::K,
        Scancode::L,
        Scancode::M,
        Scancode::N,
        Scancode::O,
        Scancode::P,
        Scancode::Q,
        Scancode::R,
        Scancode::S,
        Scancode::T,
        Scancode::U,
        Scancode::V,
        Scancode::W,
        Scancode::X,
        Scancode::Y,
        Scancode::Z,
        Scancode::Num1,
        Scancode::Num2,
        Scancode::Num3,
        Scancode::Num4,
        Scancode::Num5,
        Scancode::Num6,
        Scancode::Num7,
        Scancode::Num8,
        Scancode::Num9,
        Scancode::Num0,
        Scancode::Return,
        Scancode::Escape,
        Scancode::Backspace,
        Scancode::Tab,
        Scancode::Space,
        Scancode::Minus,
        Scancode::Equals,
        Scancode::LeftBracket,
        Scancode::RightBracket,
        Scancode::Backslash,
        Scancode::NonUsHash,
        Scancode::Semicolon,
        Scancode::Apostrophe,
        Scancode::Grave,
        Scancode::Comma,
        Scancode::Period,
        Scancode::Slash,
        Scancode::CapsLock,
        Scancode::F1,
        Scancode::F2,
        Scancode::F3,
        Scancode::F4,
        Scancode::F5,
        Scancode::F6,
        Scancode::F7,
        Scancode::F8,
        Scancode::F9,
        Scancode::F10,
        Scancode::F11,
        Scancode::F12,
        Scancode::PrintScreen,
        Scancode::ScrollLock,
        Scancode::Pause,
        Scancode::Insert,
        Scancode::Home,
        Scancode::PageUp,
        Scancode::Delete,
        Scancode::End,
        Scancode::PageDown,
        Scancode::Right,
        Scancode::Left,
        Scancode::Down,
        Scancode::Up,
        Scancode::NumLockClear,
        Scancode::KpDivide,
        Scancode::KpMultiply,
        Scancode::KpMinus,
        Scancode::KpPlus,
        Scancode::KpEnter,
        Scancode::Kp1,
        Scancode::Kp2,
        Scancode::Kp3,
        Scancode::Kp4,
        Scancode::Kp5,
        Scancode::Kp6,
        Scancode::Kp7,
        Scancode::Kp8,
        Scancode::Kp9,
        Scancode::Kp0,
        Scancode::KpPeriod,
        Scancode::NonUsBackslash,
        Scancode::Application,
        Scancode::Power,
        Scancode::KpEquals,
        Scancode::F13,
        Scancode::F14,
        Scancode::F15,
        Scancode::F16,
        Scancode::F17,
        Scancode::F18,
        Scancode::F19,
        Scancode::F20,
        Scancode::F21,
        Scancode::F22,
        Scancode::F23,
        Scancode::F24,
        Scancode::Execute,
        Scancode::Help,
        Scancode::Menu,
        Scancode::Select,
        Scancode::Stop,
        Scancode::Again,
        Scancode::Undo,
        Scancode::Cut,
        Scancode::Copy,
        Scancode::Paste,
        Scancode::Find,
        Scancode::Mute,
        Scancode::VolumeUp,
        Scancode::VolumeDown,
        Scancode::KpComma,
        Scancode::KpEqualsAs400,
        Scancode::International1,
        Scancode::International2,
        Scancode::International3,
        Scancode::International4,
        Scancode::International5,
        Scancode::International6,
        Scancode::International7,
        Scancode::International8,
        Scancode::International9,
        Scancode::Lang1,
        Scancode::Lang2,
        Scancode::Lang3,
        Scancode::Lang4,
        Scancode::Lang5,
        Scancode::Lang6,
        Scancode::Lang7,
        Scancode::Lang8,
        Scancode::Lang9,
        Scancode::AltErase,
        Scancode::SysReq,
        Scancode::Cancel,
        Scancode::Clear,
        Scancode::Prior,
        Scancode::Return2,
        Scancode::Separator,
        Scancode::Out,
        Scancode::Oper,
        Scancode::ClearAgain,
        Scancode::CrSel,
        Scancode::ExSel,
        Scancode::Kp00,
        Scancode::Kp000,
        Scancode::ThousandsSeparator,
        Scancode::DecimalSeparator,
        Scancode::CurrencyUnit,
        Scancode::CurrencySubunit,
        Scancode::KpLeftParen,
        Scancode::KpRightParen,
        Scancode::KpLeftBrace,
        Scancode::KpRightBrace,
        Scancode::KpTab,
        Scancode::KpBackspace,
        Scancode::KpA,
        Scancode::KpB,
        Scancode::KpC,
        Scancode::KpD,
        Scancode::KpE,
        Scancode::KpF,
        Scancode::KpXor,
        Scancode::KpPower,
        Scancode::KpPercent,
        Scancode::KpLess,
        Scancode::KpGreater,
        Scancode::KpAmpersand,
        Scancode::KpDblAmpersand,
        Scancode::KpVerticalBar,
        Scancode::KpDblVerticalBar,
        Scancode::KpColon,
        Scancode::KpHash,
        Scancode::KpSpace,
        Scancode::KpAt,
        Scancode::KpExclam,
        Scancode::KpMemStore,
        Scancode::KpMemRecall,
        Scancode::KpMemClear,
        Scancode::KpMemAdd,
        Scancode::KpMemSubtract,
        Scancode::KpMemMultiply,
        Scancode::KpMemDivide,
        Scancode::KpPlusMinus,
        Scancode::KpClear,
        Scancode::KpClearEntry,
        Scancode::KpBinary,
        Scancode::KpOctal,
        Scancode::KpDecimal,
        Scancode::KpHexadecimal,
        Scancode::LCtrl,
        Scancode::LShift,
        Scancode::LAlt,
        Scancode::LGui,
        Scancode::RCtrl,
        Scancode::RShift,
        Scancode::RAlt,
        Scancode::RGui,
        Scancode::Mode,
        Scancode::AudioNext,
        Scancode::AudioPrev,
        Scancode::AudioStop,
        Scancode::AudioPlay,
        Scancode::AudioMute,
        Scancode::MediaSelect,
        Scancode::Www,
        Scancode::Mail,
        Scancode::Calculator,
        Scancode::Computer,
        Scancode::AcSearch,
        Scancode::AcHome,
        Scancode::AcBack,
        Scancode::AcForward,
        Scancode::AcStop,
        Scancode::AcRefresh,
        Scancode::AcBookmarks,
        Scancode::BrightnessDown,
        Scancode::BrightnessUp,
        Scancode::DisplaySwitch,
        Scancode::KbdIllumToggle,
        Scancode::KbdIllumDown,
        Scancode::KbdIllumUp,
        Scancode::Eject,
        Scancode::Sleep,
        Scancode::App1,
        Scancode::App2,
    ];

    /// Returns the dense table index of this scancode.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the script name of this scancode.
    pub fn name(self) -> &'static str {
        match self {
            Scancode::Unknown => "unknown",
            Scancode::A => "a",
            Scancode::B => "b",
            Scancode::C => "c",
            Scancode::D => "d",
            Scancode::E => "e",
            Scancode::F => "f",
            Scancode::G => "g",
            Scancode::H => "h",
            Scancode::I => "i",
            Scancode::J => "j",
            Scancode::K => "k",
            Scancode::L => "l",
            Scancode::M => "m",
            Scancode::N => "n",
            Scancode::O => "o",
            Scancode::P => "p",
            Scancode::Q => "q",
            Scancode::R => "r",
            Scancode::S => "s",
            Scancode::T => "t",
            Scancode::U => "u",
            Scancode::V => "v",
            Scancode::W => "w",
            Scancode::X => "x",
            Scancode::Y => "y",
            Scancode::Z => "z",
            Scancode::Num1 => "1",
            Scancode::Num2 => "2",
            Scancode::Num3 => "3",
            Scancode::Num4 => "4",
            Scancode::Num5 => "5",
            Scancode::Num6 => "6",
            Scancode::Num7 => "7",
            Scancode::Num8 => "8",
            Scancode::Num9 => "9",
            Scancode::Num0 => "0",
            Scancode::Return => "return",
            Scancode::Escape => "escape",
            Scancode::Backspace => "backspace",
            Scancode::Tab => "tab",
            Scancode::Space => "space",
            Scancode::Minus => "-",
            Scancode::Equals => "=",
            Scancode::LeftBracket => "[",
            Scancode::RightBracket => "]",
            Scancode::Backslash => "\\",
            Scancode::NonUsHash => "nonus#",
            Scancode::Semicolon => ";",
            Scancode::Apostrophe => "'",
            Scancode::Grave => "`",
            Scancode::Comma => ",",
            Scancode::Period => ".",
            Scancode::Slash => "/",
            Scancode::CapsLock => "capslock",
            Scancode::F1 => "f1",
            Scancode::F2 => "f2",
            Scancode::F3 => "f3",
            Scancode::F4 => "f4",
            Scancode::F5 => "f5",
            Scancode::F6 => "f6",
            Scancode::F7 => "f7",
            Scancode::F8 => "f8",
            Scancode::F9 => "f9",
            Scancode::F10 => "f10",
            Scancode::F11 => "f11",
            Scancode::F12 => "f12",
            Scancode::PrintScreen => "printscreen",
            Scancode::ScrollLock => "scrolllock",
            Scancode::Pause => "pause",
            Scancode::Insert => "insert",
            Scancode::Home => "home",
            Scancode::PageUp => "pageup",
            Scancode::Delete => "delete",
            Scancode::End => "end",
            Scancode::PageDown => "pagedown",
            Scancode::Right => "right",
            Scancode::Left => "left",
            Scancode::Down => "down",
            Scancode::Up => "up",
            Scancode::NumLockClear => "numlock",
            Scancode::KpDivide => "kp/",
            Scancode::KpMultiply => "kp*",
            Scancode::KpMinus => "kp-",
            Scancode::KpPlus => "kp+",
            Scancode::KpEnter => "kpenter",
            Scancode::Kp1 => "kp1",
            Scancode::Kp2 => "kp2",
            Scancode::Kp3 => "kp3",
            Scancode::Kp4 => "kp4",
            Scancode::Kp5 => "kp5",
            Scancode::Kp6 => "kp6",
            Scancode::Kp7 => "kp7",
            Scancode::Kp8 => "kp8",
            Scancode::Kp9 => "kp9",
            Scancode::Kp0 => "kp0",
            Scancode::KpPeriod => "kp.",
            Scancode::NonUsBackslash => "nonusbackslash",
            Scancode::Application => "application",
            Scancode::Power => "power",
            Scancode::KpEquals => "kp=",
            Scancode::F13 => "f13",
            Scancode::F14 => "f14",
            Scancode::F15 => "f15",
            Scancode::F16 => "f16",
            Scancode::F17 => "f17",
            Scancode::F18 => "f18",
            Scancode::F19 => "f19",
            Scancode::F20 => "f20",
            Scancode::F21 => "f21",
            Scancode::F22 => "f22",
            Scancode::F23 => "f23",
            Scancode::F24 => "f24",
            Scancode::Execute => "execute",
            Scancode::Help => "help",
            Scancode::Menu => "menu",
            Scancode::Select => "select",
            Scancode::Stop => "stop",
            Scancode::Again => "again",
            Scancode::Undo => "undo",
            Scancode::Cut => "cut",
            Scancode::Copy => "copy",
            Scancode::Paste => "paste",
            Scancode::Find => "find",
            Scancode::Mute => "mute",
            Scancode::VolumeUp => "volumeup",
            Scancode::VolumeDown => "volumedown",
            Scancode::KpComma => "kp,",
            Scancode::KpEqualsAs400 => "kp=400",
            Scancode::International1 => "international1",
            Scancode::International2 => "international2",
            Scancode::International3 => "international3",
            Scancode::International4 => "international4",
            Scancode::International5 => "international5",
            Scancode::International6 => "international6",
            Scancode::International7 => "international7",
            Scancode::International8 => "international8",
            Scancode::International9 => "international9",
            Scancode::Lang1 => "lang1",
            Scancode::Lang2 => "lang2",
            Scancode::Lang3 => "lang3",
            Scancode::Lang4 => "lang4",
            Scancode::Lang5 => "lang5",
            Scancode::Lang6 => "lang6",
            Scancode::Lang7 => "lang7",
            Scancode::Lang8 => "lang8",
            Scancode::Lang9 => "lang9",
            Scancode::AltErase => "alterase",
            Scancode::SysReq => "sysreq",
            Scancode::Cancel => "cancel",
            Scancode::Clear => "clear",
            Scancode::Prior => "prior",
            Scancode::Return2 => "return2",
            Scancode::Separator => "separator",
            Scancode::Out => "out",
            Scancode::Oper => "oper",
            Scancode::ClearAgain => "clearagain",
            Scancode::CrSel => "crsel",
            Scancode::ExSel => "exsel",
            Scancode::Kp00 => "kp00",
            Scancode::Kp000 => "kp000",
            Scancode::ThousandsSeparator => "thousandsseparator",
            Scancode::DecimalSeparator => "decimalseparator",
            Scancode::CurrencyUnit => "currencyunit",
            Scancode::CurrencySubunit => "currencysubunit",
            Scancode::KpLeftParen => "kp(",
            Scancode::KpRightParen => "kp)",
            Scancode::KpLeftBrace => "kp{",
            Scancode::KpRightBrace => "kp}",
            Scancode::KpTab => "kptab",
            Scancode::KpBackspace => "kpbackspace",
            Scancode::KpA => "kpa",
            Scancode::KpB => "kpb",
            Scancode::KpC => "kpc",
            Scancode::KpD => "kpd",
            Scancode::KpE => "kpe",
            Scancode::KpF => "kpf",
            Scancode::KpXor => "kpxor",
            Scancode::KpPower => "kpower",
            Scancode::KpPercent => "kp%",
            Scancode::KpLess => "kp<",
            Scancode::KpGreater => "kp>",
            Scancode::KpAmpersand => "kp&",
            Scancode::KpDblAmpersand => "kp&&",
            Scancode::KpVerticalBar => "kp|",
            Scancode::KpDblVerticalBar => "kp||",
            Scancode::KpColon => "kp:",
            Scancode::KpHash => "kp#",
            Scancode::KpSpace => "kp ",
            Scancode::KpAt => "kp@",
            Scancode::KpExclam => "kp!",
            Scancode::KpMemStore => "kpmemstore",
            Scancode::KpMemRecall => "kpmemrecall",
            Scancode::KpMemClear => "kpmemclear",
            Scancode::KpMemAdd => "kpmem+",
            Scancode::KpMemSubtract => "kpmem-",
            Scancode::KpMemMultiply => "kpmem*",
            Scancode::KpMemDivide => "kpmem/",
            Scancode::KpPlusMinus => "kp+-",
            Scancode::KpClear => "kpclear",
            Scancode::KpClearEntry => "kpclearentry",
            Scancode::KpBinary => "kpbinary",
            Scancode::KpOctal => "kpoctal",
            Scancode::KpDecimal => "kpdecimal",
            Scancode::KpHexadecimal => "kphex",
            Scancode::LCtrl => "lctrl",
            Scancode::LShift => "lshift",
            Scancode::LAlt => "lalt",
            Scancode::LGui => "lgui",
            Scancode::RCtrl => "rctrl",
            Scancode::RShift => "rshift",
            Scancode::RAlt => "ralt",
            Scancode::RGui => "rgui",
            Scancode::Mode => "mode",
            Scancode::AudioNext => "audionext",
            Scancode::AudioPrev => "audioprev",
            Scancode::AudioStop => "audiostop",
            Scancode::AudioPlay => "audioplay",
            Scancode::AudioMute => "audiomute",
            Scancode::MediaSelect => "mediaselect",
            Scancode::Www => "www",
            Scancode::Mail => "mail",
            Scancode::Calculator => "calculator",
            Scancode::Computer => "computer",
            Scancode::AcSearch => "acsearch",
            Scancode::AcHome => "achome",
            Scancode::AcBack => "acback",
            Scancode::AcForward => "acforward",
            Scancode::AcStop => "acstop",
            Scancode::AcRefresh => "acrefresh",
            Scancode::AcBookmarks => "acbookmarks",
            Scancode::BrightnessDown => "brightnessdown",
            Scancode::BrightnessUp => "brightnessup",
            Scancode::DisplaySwitch => "displayswitch",
            Scancode::KbdIllumToggle => "kbdillumtoggle",
            Scancode::KbdIllumDown => "kbdillumdown",
            Scancode::KbdIllumUp => "kbdillumup",
            Scancode::Eject => "eject",
            Scancode::Sleep => "sleep",
            Scancode::App1 => "app1",
            Scancode::App2 => "app2",
        }
    }

    /// Looks a scancode up by its script name.
    pub fn from_name(name: &str) -> Option<Scancode> {
        match name {
            "unknown" => Some(Scancode::Unknown),
            "a" => Some(Scancode::A),
            "b" => Some(Scancode::B),
            "c" => Some(Scancode::C),
            "d" => Some(Scancode::D),
            "e" => Some(Scancode::E),
            "f" => Some(Scancode::F),
            "g" => Some(Scancode::G),
            "h" => Some(Scancode::H),
            "i" => Some(Scancode::I),
            "j" => Some(Scancode::J),
            "k" => Some(Scancode::K),
            "l" => Some(Scancode::L),
            "m" => Some(Scancode::M),
            "n" => Some(Scancode::N),
            "o" => Some(Scancode::O),
            "p" => Some(Scancode::P),
            "q" => Some(Scancode::Q),
            "r" => Some(Scancode::R),
            "s" => Some(Scancode::S),
            "t" => Some(Scancode::T),
            "u" => Some(Scancode::U),
            "v" => Some(Scancode::V),
            "w" => Some(Scancode::W),
            "x" => Some(Scancode::X),
            "y" => Some(Scancode::Y),
            "z" => Some(Scancode::Z),
            "1" => Some(Scancode::Num1),
            "2" => Some(Scancode::Num2),
            "3" => Some(Scancode::Num3),
            "4" => Some(Scancode::Num4),
            "5" => Some(Scancode::Num5),
            "6" => Some(Scancode::Num6),
            "7" => Some(Scancode::Num7),
            "8" => Some(Scancode::Num8),
            "9" => Some(Scancode::Num9),
            "0" => Some(Scancode::Num0),
            "return" => Some(Scancode::Return),
            "escape" => Some(Scancode::Escape),
            "backspace" => Some(Scancode::Backspace),
            "tab" => Some(Scancode::Tab),
            "space" => Some(Scancode::Space),
            "-" => Some(Scancode::Minus),
            "=" => Some(Scancode::Equals),
            "[" => Some(Scancode::LeftBracket),
            "]" => Some(Scancode::RightBracket),
            "\\" => Some(Scancode::Backslash),
            "nonus#" => Some(Scancode::NonUsHash),
            ";" => Some(Scancode::Semicolon),
            "'" => Some(Scancode::Apostrophe),
            "`" => Some(Scancode::Grave),
            "," => Some(Scancode::Comma),
            "." => Some(Scancode::Period),
            "/" => Some(Scancode::Slash),
            "capslock" => Some(Scancode::CapsLock),
            "f1" => Some(Scancode::F1),
            "f2" => Some(Scancode::F2),
            "f3" => Some(Scancode::F3),
            "f4" => Some(Scancode::F4),
            "f5" => Some(Scancode::F5),
            "f6" => Some(Scancode::F6),
            "f7" => Some(Scancode::F7),
            "f8" => Some(Scancode::F8),
            "f9" => Some(Scancode::F9),
            "f10" => Some(Scancode::F10),
            "f11" => Some(Scancode::F11),
            "f12" => Some(Scancode::F12),
            "printscreen" => Some(Scancode::PrintScreen),
            "scrolllock" => Some(Scancode::ScrollLock),
            "pause" => Some(Scancode::Pause),
            "insert" => Some(Scancode::Insert),
            "home" => Some(Scancode::Home),
            "pageup" => Some(Scancode::PageUp),
            "delete" => Some(Scancode::Delete),
            "end" => Some(Scancode::End),
            "pagedown" => Some(Scancode::PageDown),
            "right" => Some(Scancode::Right),
            "left" => Some(Scancode::Left),
            "down" => Some(Scancode::Down),
            "up" => Some(Scancode::Up),
            "numlock" => Some(Scancode::NumLockClear),
            "kp/" => Some(Scancode::KpDivide),
            "kp*" => Some(Scancode::KpMultiply),
            "kp-" => Some(Scancode::KpMinus),
            "kp+" => Some(Scancode::KpPlus),
            "kpenter" => Some(Scancode::KpEnter),
            "kp1" => Some(Scancode::Kp1),
            "kp2" => Some(Scancode::Kp2),
            "kp3" => Some(Scancode::Kp3),
            "kp4" => Some(Scancode::Kp4),
            "kp5" => Some(Scancode::Kp5),
            "kp6" => Some(Scancode::Kp6),
            "kp7" => Some(Scancode::Kp7),
            "kp8" => Some(Scancode::Kp8),
            "kp9" => Some(Scancode::Kp9),
            "kp0" => Some(Scancode::Kp0),
            "kp." => Some(Scancode::KpPeriod),
            "nonusbackslash" => Some(Scancode::NonUsBackslash),
            "application" => Some(Scancode::Application),
            "power" => Some(Scancode::Power),
            "kp=" => Some(Scancode::KpEquals),
            "f13" => Some(Scancode::F13),
            "f14" => Some(Scancode::F14),
            "f15" => Some(Scancode::F15),
            "f16" => Some(Scancode::F16),
            "f17" => Some(Scancode::F17),
            "f18" => Some(Scancode::F18),
            "f19" => Some(Scancode::F19),
            "f20" => Some(Scancode::F20),
            "f21" => Some(Scancode::F21),
            "f22" => Some(Scancode::F22),
            "f23" => Some(Scancode::F23),
            "f24" => Some(Scancode::F24),
            "execute" => Some(Scancode::Execute),
            "help" => Some(Scancode::Help),
            "menu" => Some(Scancode::Menu),
            "select" => Some(Scancode::Select),
            "stop" => Some(Scancode::Stop),
            "again" => Some(Scancode::Again),
            "undo" => Some(Scancode::Undo),
            "cut" => Some(Scancode::Cut),
            "copy" => Some(Scancode::Copy),
            "paste" => Some(Scancode::Paste),
            "find" => Some(Scancode::Find),
            "mute" => Some(Scancode::Mute),
            "volumeup" => Some(Scancode::VolumeUp),
            "volumedown" => Some(Scancode::VolumeDown),
            "kp," => Some(Scancode::KpComma),
            "kp=400" => Some(Scancode::KpEqualsAs400),
            "international1" => Some(Scancode::International1),
            "international2" => Some(Scancode::International2),
            "international3" => Some(Scancode::International3),
            "international4" => Some(Scancode::International4),
            "international5" => Some(Scancode::International5),
            "international6" => Some(Scancode::International6),
            "international7" => Some(Scancode::International7),
            "international8" => Some(Scancode::International8),
            "international9" => Some(Scancode::International9),
            "lang1" => Some(Scancode::Lang1),
            "lang2" => Some(Scancode::Lang2),
            "lang3" => Some(Scancode::Lang3),
            "lang4" => Some(Scancode::Lang4),
            "lang5" => Some(Scancode::Lang5),
            "lang6" => Some(Scancode::Lang6),
            "lang7" => Some(Scancode::Lang7),
            "lang8" => Some(Scancode::Lang8),
            "lang9" => Some(Scancode::Lang9),
            "alterase" => Some(Scancode::AltErase),
            "sysreq" => Some(Scancode::SysReq),
            "cancel" => Some(Scancode::Cancel),
            "clear" => Some(Scancode::Clear),
            "prior" => Some(Scancode::Prior),
            "return2" => Some(Scancode::Return2),
            "separator" => Some(Scancode::Separator),
            "out" => Some(Scancode::Out),
            "oper" => Some(Scancode::Oper),
            "clearagain" => Some(Scancode::ClearAgain),
            "crsel" => Some(Scancode::CrSel),
            "exsel" => Some(Scancode::ExSel),
            "kp00" => Some(Scancode::Kp00),
            "kp000" => Some(Scancode::Kp000),
            "thousandsseparator" => Some(Scancode::ThousandsSeparator),
            "decimalseparator" => Some(Scancode::DecimalSeparator),
            "currencyunit" => Some(Scancode::CurrencyUnit),
            "currencysubunit" => Some(Scancode::CurrencySubunit),
            "kp(" => Some(Scancode::KpLeftParen),
            "kp)" => Some(Scancode::KpRightParen),
            "kp{" => Some(Scancode::KpLeftBrace),
            "kp}" => Some(Scancode::KpRightBrace),
            "kptab" => Some(Scancode::KpTab),
            "kpbackspace" => Some(Scancode::KpBackspace),
            "kpa" => Some(Scancode::KpA),
            "kpb" => Some(Scancode::KpB),
            "kpc" => Some(Scancode::KpC),
            "kpd" => Some(Scancode::KpD),
            "kpe" => Some(Scancode::KpE),
            "kpf" => Some(Scancode::KpF),
            "kpxor" => Some(Scancode::KpXor),
            "kpower" => Some(Scancode::KpPower),
            "kp%" => Some(Scancode::KpPercent),
            "kp<" => Some(Scancode::KpLess),
            "kp>" => Some(Scancode::KpGreater),
            "kp&" => Some(Scancode::KpAmpersand),
            "kp&&" => Some(Scancode::KpDblAmpersand),
            "kp|" => Some(Scancode::KpVerticalBar),
            "kp||" => Some(Scancode::KpDblVerticalBar),
            "kp:" => Some(Scancode::KpColon),
            "kp#" => Some(Scancode::KpHash),
            "kp " => Some(Scancode::KpSpace),
            "kp@" => Some(Scancode::KpAt),
            "kp!" => Some(Scancode::KpExclam),
            "kpmemstore" => Some(Scancode::KpMemStore),
            "kpmemrecall" => Some(Scancode::KpMemRecall),
            "kpmemclear" => Some(Scancode::KpMemClear),
            "kpmem+" => Some(Scancode::KpMemAdd),
            "kpmem-" => Some(Scancode::KpMemSubtract),
            "kpmem*" => Some(Scancode::KpMemMultiply),
            "kpmem/" => Some(Scancode::KpMemDivide),
            "kp+-" => Some(Scancode::KpPlusMinus),
            "kpclear" => Some(Scancode::KpClear),
            "kpclearentry" => Some(Scancode::KpClearEntry),
            "kpbinary" => Some(Scancode::KpBinary),
            "kpoctal" => Some(Scancode::KpOctal),
            "kpdecimal" => Some(Scancode::KpDecimal),
            "kphex" => Some(Scancode::KpHexadecimal),
            "lctrl" => Some(Scancode::LCtrl),
            "lshift" => Some(Scancode::LShift),
            "lalt" => Some(Scancode::LAlt),
            "lgui" => Some(Scancode::LGui),
            "rctrl" => Some(Scancode::RCtrl),
            "rshift" => Some(Scancode::RShift),
            "ralt" => Some(Scancode::RAlt),
            "rgui" => Some(Scancode::RGui),
            "mode" => Some(Scancode::Mode),
            "audionext" => Some(Scancode::AudioNext),
            "audioprev" => Some(Scancode::AudioPrev),
            "audiostop" => Some(Scancode::AudioStop),
            "audioplay" => Some(Scancode::AudioPlay),
            "audiomute" => Some(Scancode::AudioMute),
            "mediaselect" => Some(Scancode::MediaSelect),
            "www" => Some(Scancode::Www),
            "mail" => Some(Scancode::Mail),
            "calculator" => Some(Scancode::Calculator),
            "computer" => Some(Scancode::Computer),
            "acsearch" => Some(Scancode::AcSearch),
            "achome" => Some(Scancode::AcHome),
            "acback" => Some(Scancode::AcBack),
            "acforward" => Some(Scancode::AcForward),
            "acstop" => Some(Scancode::AcStop),
            "acrefresh" => Some(Scancode::AcRefresh),
            "acbookmarks" => Some(Scancode::AcBookmarks),
            "brightnessdown" => Some(Scancode::BrightnessDown),
            "brightnessup" => Some(Scancode::BrightnessUp),
            "displayswitch" => Some(Scancode::DisplaySwitch),
            "kbdillumtoggle" => Some(Scancode::KbdIllumToggle),
            "kbdillumdown" => Some(Scancode::KbdIllumDown),
            "kbdillumup" => Some(Scancode::KbdIllumUp),
            "eject" => Some(Scancode::Eject),
            "sleep" => Some(Scancode::Sleep),
            "app1" => Some(Scancode::App1),
            "app2" => Some(Scancode::App2),
            _ => None,
        }
    }
}

impl Default for Scancode {
    fn default() -> Self {
        Scancode::Unknown
    }
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scancode {
    type Err = ConstantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scancode::from_name(s).ok_or_else(|| ConstantError::InvalidScancode(s.to_string()))
    }
}

impl Serialize for Scancode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Scancode {
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
        for (i, sc) in Scancode::ALL.iter().enumerate() {
            assert_eq!(sc.index(), i, "{sc:?} is out of order in Scancode::ALL");
        }
    }

    #[test]
    fn test_every_name_round_trips_through_from_name() {
        for sc in Scancode::ALL {
            assert_eq!(Scancode::from_name(sc.name()), Some(sc));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Scancode::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Scancode::COUNT);
    }

    #[test]
    fn test_digit_row_names() {
        assert_eq!(Scancode::Num1.name(), "1");
        assert_eq!(Scancode::Num0.name(), "0");
        assert_eq!(Scancode::from_name("0"), Some(Scancode::Num0));
    }

    #[test]
    fn test_keypad_space_name_contains_the_space() {
        assert_eq!(Scancode::KpSpace.name(), "kp ");
        assert_eq!(Scancode::from_name("kp "), Some(Scancode::KpSpace));
        assert_eq!(Scancode::from_name("kp"), None);
    }

    #[test]
    fn test_from_str_reports_invalid_scancode() {
        let err = "lang0".parse::<Scancode>().unwrap_err();
        assert_eq!(err.to_string(), "invalid scancode: lang0");
    }
}
