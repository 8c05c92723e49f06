//! Translation tables between engine key identities and host-library codes.
//!
//! Two tables live here, both compile-time constants:
//!
//! - [`KeyMap`]: one [`NativeKeycode`] per [`Key`], indexed by the key's
//!   discriminant.  The reverse direction is a linear scan, which is fine for
//!   the rare keycode-to-key queries.
//! - [`ScancodeMap`]: a bidirectional association between [`Scancode`] and
//!   [`NativeScancode`].  The forward array is indexed by scancode
//!   discriminant; the reverse array is indexed by native scancode and is
//!   derived from the forward one at compile time, so the two can never
//!   disagree.
//!
//! Neither table is ever mutated.  Every lookup that has no answer resolves to
//! the relevant unknown sentinel instead of failing.

pub mod key;
pub mod native;
pub mod scancode;

use thiserror::Error;

pub use key::Key;
pub use native::{NativeKeycode, NativeScancode};
pub use scancode::Scancode;

/// Error returned when a script name does not name a known constant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstantError {
    #[error("invalid key constant: {0}")]
    InvalidKey(String),
    #[error("invalid scancode: {0}")]
    InvalidScancode(String),
}

/// Fixed [`Key`] to [`NativeKeycode`] table.
#[derive(Debug)]
pub struct KeyMap {
    codes: [NativeKeycode; Key::COUNT],
}

impl KeyMap {
    /// Returns the native keycode for `key`.
    ///
    /// [`Key::Unknown`] maps to [`NativeKeycode::UNKNOWN`].
    pub const fn native(&self, key: Key) -> NativeKeycode {
        self.codes[key.index()]
    }

    /// Returns the first key whose native keycode is `native`.
    ///
    /// Returns [`Key::Unknown`] when no key matches.
    pub fn key(&self, native: NativeKeycode) -> Key {
        Key::ALL
            .iter()
            .copied()
            .find(|k| self.codes[k.index()] == native)
            .unwrap_or(Key::Unknown)
    }

    /// Iterates over every `(key, native keycode)` pair in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, NativeKeycode)> + '_ {
        Key::ALL.iter().map(move |&k| (k, self.codes[k.index()]))
    }
}

/// Fixed two-way [`Scancode`] <-> [`NativeScancode`] association.
#[derive(Debug)]
pub struct ScancodeMap {
    to_native: [NativeScancode; Scancode::COUNT],
    from_native: [Option<Scancode>; NativeScancode::COUNT],
}

impl ScancodeMap {
    const fn build(to_native: [NativeScancode; Scancode::COUNT]) -> Self {
        let mut from_native = [None; NativeScancode::COUNT];
        let mut i = 0;
        while i < Scancode::COUNT {
            from_native[to_native[i].index()] = Some(Scancode::ALL[i]);
            i += 1;
        }
        Self {
            to_native,
            from_native,
        }
    }

    /// Returns the native scancode for `scancode`.
    ///
    /// Every variant has a native counterpart; [`Scancode::Unknown`] maps to
    /// [`NativeScancode::UNKNOWN`].
    pub const fn native(&self, scancode: Scancode) -> NativeScancode {
        self.to_native[scancode.index()]
    }

    /// Returns the scancode for a native value, or `None` if the value is out
    /// of range or has no engine counterpart.
    pub fn scancode(&self, native: NativeScancode) -> Option<Scancode> {
        if !native.is_in_range() {
            return None;
        }
        self.from_native[native.index()]
    }

    /// Like [`Self::scancode`] but degrades to [`Scancode::Unknown`].
    pub fn scancode_or_unknown(&self, native: NativeScancode) -> Scancode {
        self.scancode(native).unwrap_or(Scancode::Unknown)
    }

    /// Iterates over every `(scancode, native scancode)` pair in scancode order.
    pub fn iter(&self) -> impl Iterator<Item = (Scancode, NativeScancode)> + '_ {
        Scancode::ALL
            .iter()
            .map(move |&s| (s, self.to_native[s.index()]))
    }
}

/// The process-wide key table.
pub static KEY_MAP: KeyMap = KeyMap {
    codes: KEY_TO_NATIVE,
};

/// The process-wide scancode table.
pub static SCANCODE_MAP: ScancodeMap = ScancodeMap::build(SCANCODE_TO_NATIVE);

const fn ch(c: char) -> NativeKeycode {
    NativeKeycode::from_char(c)
}

const fn sc(scancode: u16) -> NativeKeycode {
    NativeKeycode::from_scancode(NativeScancode(scancode))
}

/// Key -> native keycode, indexed by [`Key`] discriminant.
///
/// Printable keys use their character and Escape, Backspace and Delete use
/// their ASCII control values; everything else is the scancode of the key on
/// a US board with the scancode mask applied.
const KEY_TO_NATIVE: [NativeKeycode; Key::COUNT] = {
    use Key::*;
    let mut t = [NativeKeycode::UNKNOWN; Key::COUNT];

    t[Return as usize] = ch('\r');               // SDLK_RETURN
    t[Escape as usize] = NativeKeycode(0x1B);    // SDLK_ESCAPE
    t[Backspace as usize] = NativeKeycode(0x08); // SDLK_BACKSPACE
    t[Tab as usize] = ch('\t');                  // SDLK_TAB
    t[Space as usize] = ch(' ');                 // SDLK_SPACE
    t[Exclaim as usize] = ch('!');               // SDLK_EXCLAIM
    t[QuoteDbl as usize] = ch('"');              // SDLK_QUOTEDBL
    t[Hash as usize] = ch('#');                  // SDLK_HASH
    t[Percent as usize] = ch('%');               // SDLK_PERCENT
    t[Dollar as usize] = ch('$');                // SDLK_DOLLAR
    t[Ampersand as usize] = ch('&');             // SDLK_AMPERSAND
    t[Quote as usize] = ch('\'');                // SDLK_QUOTE
    t[LeftParen as usize] = ch('(');             // SDLK_LEFTPAREN
    t[RightParen as usize] = ch(')');            // SDLK_RIGHTPAREN
    t[Asterisk as usize] = ch('*');              // SDLK_ASTERISK
    t[Plus as usize] = ch('+');                  // SDLK_PLUS
    t[Comma as usize] = ch(',');                 // SDLK_COMMA
    t[Minus as usize] = ch('-');                 // SDLK_MINUS
    t[Period as usize] = ch('.');                // SDLK_PERIOD
    t[Slash as usize] = ch('/');                 // SDLK_SLASH
    t[Num0 as usize] = ch('0');                  // SDLK_0
    t[Num1 as usize] = ch('1');                  // SDLK_1
    t[Num2 as usize] = ch('2');                  // SDLK_2
    t[Num3 as usize] = ch('3');                  // SDLK_3
    t[Num4 as usize] = ch('4');                  // SDLK_4
    t[Num5 as usize] = ch('5');                  // SDLK_5
    t[Num6 as usize] = ch('6');                  // SDLK_6
    t[Num7 as usize] = ch('7');                  // SDLK_7
    t[Num8 as usize] = ch('8');                  // SDLK_8
    t[Num9 as usize] = ch('9');                  // SDLK_9
    t[Colon as usize] = ch(':');                 // SDLK_COLON
    t[Semicolon as usize] = ch(';');             // SDLK_SEMICOLON
    t[Less as usize] = ch('<');                  // SDLK_LESS
    t[Equals as usize] = ch('=');                // SDLK_EQUALS
    t[Greater as usize] = ch('>');               // SDLK_GREATER
    t[Question as usize] = ch('?');              // SDLK_QUESTION
    t[At as usize] = ch('@');                    // SDLK_AT
    t[LeftBracket as usize] = ch('[');           // SDLK_LEFTBRACKET
    t[Backslash as usize] = ch('\\');            // SDLK_BACKSLASH
    t[RightBracket as usize] = ch(']');          // SDLK_RIGHTBRACKET
    t[Caret as usize] = ch('^');                 // SDLK_CARET
    t[Underscore as usize] = ch('_');            // SDLK_UNDERSCORE
    t[Backquote as usize] = ch('`');             // SDLK_BACKQUOTE
    t[A as usize] = ch('a');                     // SDLK_a
    t[B as usize] = ch('b');                     // SDLK_b
    t[C as usize] = ch('c');                     // SDLK_c
    t[D as usize] = ch('d');                     // SDLK_d
    t[E as usize] = ch('e');                     // SDLK_e
    t[F as usize] = ch('f');                     // SDLK_f
    t[G as usize] = ch('g');                     // SDLK_g
    t[H as usize] = ch('h');                     // SDLK_h
    t[I as usize] = ch('i');                     // SDLK_i
    t[J as usize] = ch('j');                     // SDLK_j
    t[K as usize] = ch('k');                     // SDLK_k
    t[L as usize] = ch('l');                     // SDLK_l
    t[M as usize] = ch('m');                     // SDLK_m
    t[N as usize] = ch('n');                     // SDLK_n
    t[O as usize] = ch('o');                     // SDLK_o
    t[P as usize] = ch('p');                     // SDLK_p
    t[Q as usize] = ch('q');                     // SDLK_q
    t[R as usize] = ch('r');                     // SDLK_r
    t[S as usize] = ch('s');                     // SDLK_s
    t[T as usize] = ch('t');                     // SDLK_t
    t[U as usize] = ch('u');                     // SDLK_u
    t[V as usize] = ch('v');                     // SDLK_v
    t[W as usize] = ch('w');                     // SDLK_w
    t[X as usize] = ch('x');                     // SDLK_x
    t[Y as usize] = ch('y');                     // SDLK_y
    t[Z as usize] = ch('z');                     // SDLK_z
    t[CapsLock as usize] = sc(57);               // SDLK_CAPSLOCK
    t[F1 as usize] = sc(58);                     // SDLK_F1
    t[F2 as usize] = sc(59);                     // SDLK_F2
    t[F3 as usize] = sc(60);                     // SDLK_F3
    t[F4 as usize] = sc(61);                     // SDLK_F4
    t[F5 as usize] = sc(62);                     // SDLK_F5
    t[F6 as usize] = sc(63);                     // SDLK_F6
    t[F7 as usize] = sc(64);                     // SDLK_F7
    t[F8 as usize] = sc(65);                     // SDLK_F8
    t[F9 as usize] = sc(66);                     // SDLK_F9
    t[F10 as usize] = sc(67);                    // SDLK_F10
    t[F11 as usize] = sc(68);                    // SDLK_F11
    t[F12 as usize] = sc(69);                    // SDLK_F12
    t[PrintScreen as usize] = sc(70);            // SDLK_PRINTSCREEN
    t[ScrollLock as usize] = sc(71);             // SDLK_SCROLLLOCK
    t[Pause as usize] = sc(72);                  // SDLK_PAUSE
    t[Insert as usize] = sc(73);                 // SDLK_INSERT
    t[Home as usize] = sc(74);                   // SDLK_HOME
    t[PageUp as usize] = sc(75);                 // SDLK_PAGEUP
    t[Delete as usize] = NativeKeycode(0x7F);    // SDLK_DELETE
    t[End as usize] = sc(77);                    // SDLK_END
    t[PageDown as usize] = sc(78);               // SDLK_PAGEDOWN
    t[Right as usize] = sc(79);                  // SDLK_RIGHT
    t[Left as usize] = sc(80);                   // SDLK_LEFT
    t[Down as usize] = sc(81);                   // SDLK_DOWN
    t[Up as usize] = sc(82);                     // SDLK_UP
    t[NumLockClear as usize] = sc(83);           // SDLK_NUMLOCKCLEAR
    t[KpDivide as usize] = sc(84);               // SDLK_KPDIVIDE
    t[KpMultiply as usize] = sc(85);             // SDLK_KPMULTIPLY
    t[KpMinus as usize] = sc(86);                // SDLK_KPMINUS
    t[KpPlus as usize] = sc(87);                 // SDLK_KPPLUS
    t[KpEnter as usize] = sc(88);                // SDLK_KPENTER
    t[Kp0 as usize] = sc(98);                    // SDLK_KP_0
    t[Kp1 as usize] = sc(89);                    // SDLK_KP_1
    t[Kp2 as usize] = sc(90);                    // SDLK_KP_2
    t[Kp3 as usize] = sc(91);                    // SDLK_KP_3
    t[Kp4 as usize] = sc(92);                    // SDLK_KP_4
    t[Kp5 as usize] = sc(93);                    // SDLK_KP_5
    t[Kp6 as usize] = sc(94);                    // SDLK_KP_6
    t[Kp7 as usize] = sc(95);                    // SDLK_KP_7
    t[Kp8 as usize] = sc(96);                    // SDLK_KP_8
    t[Kp9 as usize] = sc(97);                    // SDLK_KP_9
    t[KpPeriod as usize] = sc(99);               // SDLK_KP_PERIOD
    t[KpComma as usize] = sc(133);               // SDLK_KP_COMMA
    t[KpEquals as usize] = sc(103);              // SDLK_KP_EQUALS
    t[Application as usize] = sc(101);           // SDLK_APPLICATION
    t[Power as usize] = sc(102);                 // SDLK_POWER
    t[F13 as usize] = sc(104);                   // SDLK_F13
    t[F14 as usize] = sc(105);                   // SDLK_F14
    t[F15 as usize] = sc(106);                   // SDLK_F15
    t[F16 as usize] = sc(107);                   // SDLK_F16
    t[F17 as usize] = sc(108);                   // SDLK_F17
    t[F18 as usize] = sc(109);                   // SDLK_F18
    t[F19 as usize] = sc(110);                   // SDLK_F19
    t[F20 as usize] = sc(111);                   // SDLK_F20
    t[F21 as usize] = sc(112);                   // SDLK_F21
    t[F22 as usize] = sc(113);                   // SDLK_F22
    t[F23 as usize] = sc(114);                   // SDLK_F23
    t[F24 as usize] = sc(115);                   // SDLK_F24
    t[Execute as usize] = sc(116);               // SDLK_EXECUTE
    t[Help as usize] = sc(117);                  // SDLK_HELP
    t[Menu as usize] = sc(118);                  // SDLK_MENU
    t[Select as usize] = sc(119);                // SDLK_SELECT
    t[Stop as usize] = sc(120);                  // SDLK_STOP
    t[Again as usize] = sc(121);                 // SDLK_AGAIN
    t[Undo as usize] = sc(122);                  // SDLK_UNDO
    t[Cut as usize] = sc(123);                   // SDLK_CUT
    t[Copy as usize] = sc(124);                  // SDLK_COPY
    t[Paste as usize] = sc(125);                 // SDLK_PASTE
    t[Find as usize] = sc(126);                  // SDLK_FIND
    t[Mute as usize] = sc(127);                  // SDLK_MUTE
    t[VolumeUp as usize] = sc(128);              // SDLK_VOLUMEUP
    t[VolumeDown as usize] = sc(129);            // SDLK_VOLUMEDOWN
    t[AltErase as usize] = sc(153);              // SDLK_ALTERASE
    t[SysReq as usize] = sc(154);                // SDLK_SYSREQ
    t[Cancel as usize] = sc(155);                // SDLK_CANCEL
    t[Clear as usize] = sc(156);                 // SDLK_CLEAR
    t[Prior as usize] = sc(157);                 // SDLK_PRIOR
    t[Return2 as usize] = sc(158);               // SDLK_RETURN2
    t[Separator as usize] = sc(159);             // SDLK_SEPARATOR
    t[Out as usize] = sc(160);                   // SDLK_OUT
    t[Oper as usize] = sc(161);                  // SDLK_OPER
    t[ClearAgain as usize] = sc(162);            // SDLK_CLEARAGAIN
    t[ThousandsSeparator as usize] = sc(178);    // SDLK_THOUSANDSSEPARATOR
    t[DecimalSeparator as usize] = sc(179);      // SDLK_DECIMALSEPARATOR
    t[CurrencyUnit as usize] = sc(180);          // SDLK_CURRENCYUNIT
    t[CurrencySubunit as usize] = sc(181);       // SDLK_CURRENCYSUBUNIT
    t[LCtrl as usize] = sc(224);                 // SDLK_LCTRL
    t[LShift as usize] = sc(225);                // SDLK_LSHIFT
    t[LAlt as usize] = sc(226);                  // SDLK_LALT
    t[LGui as usize] = sc(227);                  // SDLK_LGUI
    t[RCtrl as usize] = sc(228);                 // SDLK_RCTRL
    t[RShift as usize] = sc(229);                // SDLK_RSHIFT
    t[RAlt as usize] = sc(230);                  // SDLK_RALT
    t[RGui as usize] = sc(231);                  // SDLK_RGUI
    t[Mode as usize] = sc(257);                  // SDLK_MODE
    t[AudioNext as usize] = sc(258);             // SDLK_AUDIONEXT
    t[AudioPrev as usize] = sc(259);             // SDLK_AUDIOPREV
    t[AudioStop as usize] = sc(260);             // SDLK_AUDIOSTOP
    t[AudioPlay as usize] = sc(261);             // SDLK_AUDIOPLAY
    t[AudioMute as usize] = sc(262);             // SDLK_AUDIOMUTE
    t[MediaSelect as usize] = sc(263);           // SDLK_MEDIASELECT
    t[Www as usize] = sc(264);                   // SDLK_WWW
    t[Mail as usize] = sc(265);                  // SDLK_MAIL
    t[Calculator as usize] = sc(266);            // SDLK_CALCULATOR
    t[Computer as usize] = sc(267);              // SDLK_COMPUTER
    t[AppSearch as usize] = sc(268);             // SDLK_AC_SEARCH
    t[AppHome as usize] = sc(269);               // SDLK_AC_HOME
    t[AppBack as usize] = sc(270);               // SDLK_AC_BACK
    t[AppForward as usize] = sc(271);            // SDLK_AC_FORWARD
    t[AppStop as usize] = sc(272);               // SDLK_AC_STOP
    t[AppRefresh as usize] = sc(273);            // SDLK_AC_REFRESH
    t[AppBookmarks as usize] = sc(274);          // SDLK_AC_BOOKMARKS
    t[BrightnessDown as usize] = sc(275);        // SDLK_BRIGHTNESSDOWN
    t[BrightnessUp as usize] = sc(276);          // SDLK_BRIGHTNESSUP
    t[DisplaySwitch as usize] = sc(277);         // SDLK_DISPLAYSWITCH
    t[KbdIllumToggle as usize] = sc(278);        // SDLK_KBDILLUMTOGGLE
    t[KbdIllumDown as usize] = sc(279);          // SDLK_KBDILLUMDOWN
    t[KbdIllumUp as usize] = sc(280);            // SDLK_KBDILLUMUP
    t[Eject as usize] = sc(281);                 // SDLK_EJECT
    t[Sleep as usize] = sc(282);                 // SDLK_SLEEP

    t
};

/// Scancode -> native scancode, indexed by [`Scancode`] discriminant.
///
/// Native values 130-132 (locking keys) and 165-175 are reserved by the host
/// and have no engine counterpart.
const SCANCODE_TO_NATIVE: [NativeScancode; Scancode::COUNT] = {
    use Scancode::*;
    let mut t = [NativeScancode::UNKNOWN; Scancode::COUNT];

    t[A as usize] = NativeScancode(4);                    // SDL_SCANCODE_A
    t[B as usize] = NativeScancode(5);                    // SDL_SCANCODE_B
    t[C as usize] = NativeScancode(6);                    // SDL_SCANCODE_C
    t[D as usize] = NativeScancode(7);                    // SDL_SCANCODE_D
    t[E as usize] = NativeScancode(8);                    // SDL_SCANCODE_E
    t[F as usize] = NativeScancode(9);                    // SDL_SCANCODE_F
    t[G as usize] = NativeScancode(10);                   // SDL_SCANCODE_G
    t[H as usize] = NativeScancode(11);                   // SDL_SCANCODE_H
    t[I as usize] = NativeScancode(12);                   // SDL_SCANCODE_I
    t[J as usize] = NativeScancode(13);                   // SDL_SCANCODE_J
    t[K as usize] = NativeScancode(14);                   // SDL_SCANCODE_K
    t[L as usize] = NativeScancode(15);                   // SDL_SCANCODE_L
    t[M as usize] = NativeScancode(16);                   // SDL_SCANCODE_M
    t[N as usize] = NativeScancode(17);                   // SDL_SCANCODE_N
    t[O as usize] = NativeScancode(18);                   // SDL_SCANCODE_O
    t[P as usize] = NativeScancode(19);                   // SDL_SCANCODE_P
    t[Q as usize] = NativeScancode(20);                   // SDL_SCANCODE_Q
    t[R as usize] = NativeScancode(21);                   // SDL_SCANCODE_R
    t[S as usize] = NativeScancode(22);                   // SDL_SCANCODE_S
    t[T as usize] = NativeScancode(23);                   // SDL_SCANCODE_T
    t[U as usize] = NativeScancode(24);                   // SDL_SCANCODE_U
    t[V as usize] = NativeScancode(25);                   // SDL_SCANCODE_V
    t[W as usize] = NativeScancode(26);                   // SDL_SCANCODE_W
    t[X as usize] = NativeScancode(27);                   // SDL_SCANCODE_X
    t[Y as usize] = NativeScancode(28);                   // SDL_SCANCODE_Y
    t[Z as usize] = NativeScancode(29);                   // SDL_SCANCODE_Z
    t[Num1 as usize] = NativeScancode(30);                // SDL_SCANCODE_1
    t[Num2 as usize] = NativeScancode(31);                // SDL_SCANCODE_2
    t[Num3 as usize] = NativeScancode(32);                // SDL_SCANCODE_3
    t[Num4 as usize] = NativeScancode(33);                // SDL_SCANCODE_4
    t[Num5 as usize] = NativeScancode(34);                // SDL_SCANCODE_5
    t[Num6 as usize] = NativeScancode(35);                // SDL_SCANCODE_6
    t[Num7 as usize] = NativeScancode(36);                // SDL_SCANCODE_7
    t[Num8 as usize] = NativeScancode(37);                // SDL_SCANCODE_8
    t[Num9 as usize] = NativeScancode(38);                // SDL_SCANCODE_9
    t[Num0 as usize] = NativeScancode(39);                // SDL_SCANCODE_0
    t[Return as usize] = NativeScancode(40);              // SDL_SCANCODE_RETURN
    t[Escape as usize] = NativeScancode(41);              // SDL_SCANCODE_ESCAPE
    t[Backspace as usize] = NativeScancode(42);           // SDL_SCANCODE_BACKSPACE
    t[Tab as usize] = NativeScancode(43);                 // SDL_SCANCODE_TAB
    t[Space as usize] = NativeScancode(44);               // SDL_SCANCODE_SPACE
    t[Minus as usize] = NativeScancode(45);               // SDL_SCANCODE_MINUS
    t[Equals as usize] = NativeScancode(46);              // SDL_SCANCODE_EQUALS
    t[LeftBracket as usize] = NativeScancode(47);         // SDL_SCANCODE_LEFTBRACKET
    t[RightBracket as usize] = NativeScancode(48);        // SDL_SCANCODE_RIGHTBRACKET
    t[Backslash as usize] = NativeScancode(49);           // SDL_SCANCODE_BACKSLASH
    t[NonUsHash as usize] = NativeScancode(50);           // SDL_SCANCODE_NONUSHASH
    t[Semicolon as usize] = NativeScancode(51);           // SDL_SCANCODE_SEMICOLON
    t[Apostrophe as usize] = NativeScancode(52);          // SDL_SCANCODE_APOSTROPHE
    t[Grave as usize] = NativeScancode(53);               // SDL_SCANCODE_GRAVE
    t[Comma as usize] = NativeScancode(54);               // SDL_SCANCODE_COMMA
    t[Period as usize] = NativeScancode(55);              // SDL_SCANCODE_PERIOD
    t[Slash as usize] = NativeScancode(56);               // SDL_SCANCODE_SLASH
    t[CapsLock as usize] = NativeScancode(57);            // SDL_SCANCODE_CAPSLOCK
    t[F1 as usize] = NativeScancode(58);                  // SDL_SCANCODE_F1
    t[F2 as usize] = NativeScancode(59);                  // SDL_SCANCODE_F2
    t[F3 as usize] = NativeScancode(60);                  // SDL_SCANCODE_F3
    t[F4 as usize] = NativeScancode(61);                  // SDL_SCANCODE_F4
    t[F5 as usize] = NativeScancode(62);                  // SDL_SCANCODE_F5
    t[F6 as usize] = NativeScancode(63);                  // SDL_SCANCODE_F6
    t[F7 as usize] = NativeScancode(64);                  // SDL_SCANCODE_F7
    t[F8 as usize] = NativeScancode(65);                  // SDL_SCANCODE_F8
    t[F9 as usize] = NativeScancode(66);                  // SDL_SCANCODE_F9
    t[F10 as usize] = NativeScancode(67);                 // SDL_SCANCODE_F10
    t[F11 as usize] = NativeScancode(68);                 // SDL_SCANCODE_F11
    t[F12 as usize] = NativeScancode(69);                 // SDL_SCANCODE_F12
    t[PrintScreen as usize] = NativeScancode(70);         // SDL_SCANCODE_PRINTSCREEN
    t[ScrollLock as usize] = NativeScancode(71);          // SDL_SCANCODE_SCROLLLOCK
    t[Pause as usize] = NativeScancode(72);               // SDL_SCANCODE_PAUSE
    t[Insert as usize] = NativeScancode(73);              // SDL_SCANCODE_INSERT
    t[Home as usize] = NativeScancode(74);                // SDL_SCANCODE_HOME
    t[PageUp as usize] = NativeScancode(75);              // SDL_SCANCODE_PAGEUP
    t[Delete as usize] = NativeScancode(76);              // SDL_SCANCODE_DELETE
    t[End as usize] = NativeScancode(77);                 // SDL_SCANCODE_END
    t[PageDown as usize] = NativeScancode(78);            // SDL_SCANCODE_PAGEDOWN
    t[Right as usize] = NativeScancode(79);               // SDL_SCANCODE_RIGHT
    t[Left as usize] = NativeScancode(80);                // SDL_SCANCODE_LEFT
    t[Down as usize] = NativeScancode(81);                // SDL_SCANCODE_DOWN
    t[Up as usize] = NativeScancode(82);                  // SDL_SCANCODE_UP
    t[NumLockClear as usize] = NativeScancode(83);        // SDL_SCANCODE_NUMLOCKCLEAR
    t[KpDivide as usize] = NativeScancode(84);            // SDL_SCANCODE_KP_DIVIDE
    t[KpMultiply as usize] = NativeScancode(85);          // SDL_SCANCODE_KP_MULTIPLY
    t[KpMinus as usize] = NativeScancode(86);             // SDL_SCANCODE_KP_MINUS
    t[KpPlus as usize] = NativeScancode(87);              // SDL_SCANCODE_KP_PLUS
    t[KpEnter as usize] = NativeScancode(88);             // SDL_SCANCODE_KP_ENTER
    t[Kp1 as usize] = NativeScancode(89);                 // SDL_SCANCODE_KP_1
    t[Kp2 as usize] = NativeScancode(90);                 // SDL_SCANCODE_KP_2
    t[Kp3 as usize] = NativeScancode(91);                 // SDL_SCANCODE_KP_3
    t[Kp4 as usize] = NativeScancode(92);                 // SDL_SCANCODE_KP_4
    t[Kp5 as usize] = NativeScancode(93);                 // SDL_SCANCODE_KP_5
    t[Kp6 as usize] = NativeScancode(94);                 // SDL_SCANCODE_KP_6
    t[Kp7 as usize] = NativeScancode(95);                 // SDL_SCANCODE_KP_7
    t[Kp8 as usize] = NativeScancode(96);                 // SDL_SCANCODE_KP_8
    t[Kp9 as usize] = NativeScancode(97);                 // SDL_SCANCODE_KP_9
    t[Kp0 as usize] = NativeScancode(98);                 // SDL_SCANCODE_KP_0
    t[KpPeriod as usize] = NativeScancode(99);            // SDL_SCANCODE_KP_PERIOD
    t[NonUsBackslash as usize] = NativeScancode(100);     // SDL_SCANCODE_NONUSBACKSLASH
    t[Application as usize] = NativeScancode(101);        // SDL_SCANCODE_APPLICATION
    t[Power as usize] = NativeScancode(102);              // SDL_SCANCODE_POWER
    t[KpEquals as usize] = NativeScancode(103);           // SDL_SCANCODE_KP_EQUALS
    t[F13 as usize] = NativeScancode(104);                // SDL_SCANCODE_F13
    t[F14 as usize] = NativeScancode(105);                // SDL_SCANCODE_F14
    t[F15 as usize] = NativeScancode(106);                // SDL_SCANCODE_F15
    t[F16 as usize] = NativeScancode(107);                // SDL_SCANCODE_F16
    t[F17 as usize] = NativeScancode(108);                // SDL_SCANCODE_F17
    t[F18 as usize] = NativeScancode(109);                // SDL_SCANCODE_F18
    t[F19 as usize] = NativeScancode(110);                // SDL_SCANCODE_F19
    t[F20 as usize] = NativeScancode(111);                // SDL_SCANCODE_F20
    t[F21 as usize] = NativeScancode(112);                // SDL_SCANCODE_F21
    t[F22 as usize] = NativeScancode(113);                // SDL_SCANCODE_F22
    t[F23 as usize] = NativeScancode(114);                // SDL_SCANCODE_F23
    t[F24 as usize] = NativeScancode(115);                // SDL_SCANCODE_F24
    t[Execute as usize] = NativeScancode(116);            // SDL_SCANCODE_EXECUTE
    t[Help as usize] = NativeScancode(117);               // SDL_SCANCODE_HELP
    t[Menu as usize] = NativeScancode(118);               // SDL_SCANCODE_MENU
    t[Select as usize] = NativeScancode(119);             // SDL_SCANCODE_SELECT
    t[Stop as usize] = NativeScancode(120);               // SDL_SCANCODE_STOP
    t[Again as usize] = NativeScancode(121);              // SDL_SCANCODE_AGAIN
    t[Undo as usize] = NativeScancode(122);               // SDL_SCANCODE_UNDO
    t[Cut as usize] = NativeScancode(123);                // SDL_SCANCODE_CUT
    t[Copy as usize] = NativeScancode(124);               // SDL_SCANCODE_COPY
    t[Paste as usize] = NativeScancode(125);              // SDL_SCANCODE_PASTE
    t[Find as usize] = NativeScancode(126);               // SDL_SCANCODE_FIND
    t[Mute as usize] = NativeScancode(127);               // SDL_SCANCODE_MUTE
    t[VolumeUp as usize] = NativeScancode(128);           // SDL_SCANCODE_VOLUMEUP
    t[VolumeDown as usize] = NativeScancode(129);         // SDL_SCANCODE_VOLUMEDOWN
    t[KpComma as usize] = NativeScancode(133);            // SDL_SCANCODE_KP_COMMA
    t[KpEqualsAs400 as usize] = NativeScancode(134);      // SDL_SCANCODE_KP_EQUALSAS400
    t[International1 as usize] = NativeScancode(135);     // SDL_SCANCODE_INTERNATIONAL1
    t[International2 as usize] = NativeScancode(136);     // SDL_SCANCODE_INTERNATIONAL2
    t[International3 as usize] = NativeScancode(137);     // SDL_SCANCODE_INTERNATIONAL3
    t[International4 as usize] = NativeScancode(138);     // SDL_SCANCODE_INTERNATIONAL4
    t[International5 as usize] = NativeScancode(139);     // SDL_SCANCODE_INTERNATIONAL5
    t[International6 as usize] = NativeScancode(140);     // SDL_SCANCODE_INTERNATIONAL6
    t[International7 as usize] = NativeScancode(141);     // SDL_SCANCODE_INTERNATIONAL7
    t[International8 as usize] = NativeScancode(142);     // SDL_SCANCODE_INTERNATIONAL8
    t[International9 as usize] = NativeScancode(143);     // SDL_SCANCODE_INTERNATIONAL9
    t[Lang1 as usize] = NativeScancode(144);              // SDL_SCANCODE_LANG1
    t[Lang2 as usize] = NativeScancode(145);              // SDL_SCANCODE_LANG2
    t[Lang3 as usize] = NativeScancode(146);              // SDL_SCANCODE_LANG3
    t[Lang4 as usize] = NativeScancode(147);              // SDL_SCANCODE_LANG4
    t[Lang5 as usize] = NativeScancode(148);              // SDL_SCANCODE_LANG5
    t[Lang6 as usize] = NativeScancode(149);              // SDL_SCANCODE_LANG6
    t[Lang7 as usize] = NativeScancode(150);              // SDL_SCANCODE_LANG7
    t[Lang8 as usize] = NativeScancode(151);              // SDL_SCANCODE_LANG8
    t[Lang9 as usize] = NativeScancode(152);              // SDL_SCANCODE_LANG9
    t[AltErase as usize] = NativeScancode(153);           // SDL_SCANCODE_ALTERASE
    t[SysReq as usize] = NativeScancode(154);             // SDL_SCANCODE_SYSREQ
    t[Cancel as usize] = NativeScancode(155);             // SDL_SCANCODE_CANCEL
    t[Clear as usize] = NativeScancode(156);              // SDL_SCANCODE_CLEAR
    t[Prior as usize] = NativeScancode(157);              // SDL_SCANCODE_PRIOR
    t[Return2 as usize] = NativeScancode(158);            // SDL_SCANCODE_RETURN2
    t[Separator as usize] = NativeScancode(159);          // SDL_SCANCODE_SEPARATOR
    t[Out as usize] = NativeScancode(160);                // SDL_SCANCODE_OUT
    t[Oper as usize] = NativeScancode(161);               // SDL_SCANCODE_OPER
    t[ClearAgain as usize] = NativeScancode(162);         // SDL_SCANCODE_CLEARAGAIN
    t[CrSel as usize] = NativeScancode(163);              // SDL_SCANCODE_CRSEL
    t[ExSel as usize] = NativeScancode(164);              // SDL_SCANCODE_EXSEL
    t[Kp00 as usize] = NativeScancode(176);               // SDL_SCANCODE_KP_00
    t[Kp000 as usize] = NativeScancode(177);              // SDL_SCANCODE_KP_000
    t[ThousandsSeparator as usize] = NativeScancode(178); // SDL_SCANCODE_THOUSANDSSEPARATOR
    t[DecimalSeparator as usize] = NativeScancode(179);   // SDL_SCANCODE_DECIMALSEPARATOR
    t[CurrencyUnit as usize] = NativeScancode(180);       // SDL_SCANCODE_CURRENCYUNIT
    t[CurrencySubunit as usize] = NativeScancode(181);    // SDL_SCANCODE_CURRENCYSUBUNIT
    t[KpLeftParen as usize] = NativeScancode(182);        // SDL_SCANCODE_KP_LEFTPAREN
    t[KpRightParen as usize] = NativeScancode(183);       // SDL_SCANCODE_KP_RIGHTPAREN
    t[KpLeftBrace as usize] = NativeScancode(184);        // SDL_SCANCODE_KP_LEFTBRACE
    t[KpRightBrace as usize] = NativeScancode(185);       // SDL_SCANCODE_KP_RIGHTBRACE
    t[KpTab as usize] = NativeScancode(186);              // SDL_SCANCODE_KP_TAB
    t[KpBackspace as usize] = NativeScancode(187);        // SDL_SCANCODE_KP_BACKSPACE
    t[KpA as usize] = NativeScancode(188);                // SDL_SCANCODE_KP_A
    t[KpB as usize] = NativeScancode(189);                // SDL_SCANCODE_KP_B
    t[KpC as usize] = NativeScancode(190);                // SDL_SCANCODE_KP_C
    t[KpD as usize] = NativeScancode(191);                // SDL_SCANCODE_KP_D
    t[KpE as usize] = NativeScancode(192);                // SDL_SCANCODE_KP_E
    t[KpF as usize] = NativeScancode(193);                // SDL_SCANCODE_KP_F
    t[KpXor as usize] = NativeScancode(194);              // SDL_SCANCODE_KP_XOR
    t[KpPower as usize] = NativeScancode(195);            // SDL_SCANCODE_KP_POWER
    t[KpPercent as usize] = NativeScancode(196);          // SDL_SCANCODE_KP_PERCENT
    t[KpLess as usize] = NativeScancode(197);             // SDL_SCANCODE_KP_LESS
    t[KpGreater as usize] = NativeScancode(198);          // SDL_SCANCODE_KP_GREATER
    t[KpAmpersand as usize] = NativeScancode(199);        // SDL_SCANCODE_KP_AMPERSAND
    t[KpDblAmpersand as usize] = NativeScancode(200);     // SDL_SCANCODE_KP_DBLAMPERSAND
    t[KpVerticalBar as usize] = NativeScancode(201);      // SDL_SCANCODE_KP_VERTICALBAR
    t[KpDblVerticalBar as usize] = NativeScancode(202);   // SDL_SCANCODE_KP_DBLVERTICALBAR
    t[KpColon as usize] = NativeScancode(203);            // SDL_SCANCODE_KP_COLON
    t[KpHash as usize] = NativeScancode(204);             // SDL_SCANCODE_KP_HASH
    t[KpSpace as usize] = NativeScancode(205);            // SDL_SCANCODE_KP_SPACE
    t[KpAt as usize] = NativeScancode(206);               // SDL_SCANCODE_KP_AT
    t[KpExclam as usize] = NativeScancode(207);           // SDL_SCANCODE_KP_EXCLAM
    t[KpMemStore as usize] = NativeScancode(208);         // SDL_SCANCODE_KP_MEMSTORE
    t[KpMemRecall as usize] = NativeScancode(209);        // SDL_SCANCODE_KP_MEMRECALL
    t[KpMemClear as usize] = NativeScancode(210);         // SDL_SCANCODE_KP_MEMCLEAR
    t[KpMemAdd as usize] = NativeScancode(211);           // SDL_SCANCODE_KP_MEMADD
    t[KpMemSubtract as usize] = NativeScancode(212);      // SDL_SCANCODE_KP_MEMSUBTRACT
    t[KpMemMultiply as usize] = NativeScancode(213);      // SDL_SCANCODE_KP_MEMMULTIPLY
    t[KpMemDivide as usize] = NativeScancode(214);        // SDL_SCANCODE_KP_MEMDIVIDE
    t[KpPlusMinus as usize] = NativeScancode(215);        // SDL_SCANCODE_KP_PLUSMINUS
    t[KpClear as usize] = NativeScancode(216);            // SDL_SCANCODE_KP_CLEAR
    t[KpClearEntry as usize] = NativeScancode(217);       // SDL_SCANCODE_KP_CLEARENTRY
    t[KpBinary as usize] = NativeScancode(218);           // SDL_SCANCODE_KP_BINARY
    t[KpOctal as usize] = NativeScancode(219);            // SDL_SCANCODE_KP_OCTAL
    t[KpDecimal as usize] = NativeScancode(220);          // SDL_SCANCODE_KP_DECIMAL
    t[KpHexadecimal as usize] = NativeScancode(221);      // SDL_SCANCODE_KP_HEXADECIMAL
    t[LCtrl as usize] = NativeScancode(224);              // SDL_SCANCODE_LCTRL
    t[LShift as usize] = NativeScancode(225);             // SDL_SCANCODE_LSHIFT
    t[LAlt as usize] = NativeScancode(226);               // SDL_SCANCODE_LALT
    t[LGui as usize] = NativeScancode(227);               // SDL_SCANCODE_LGUI
    t[RCtrl as usize] = NativeScancode(228);              // SDL_SCANCODE_RCTRL
    t[RShift as usize] = NativeScancode(229);             // SDL_SCANCODE_RSHIFT
    t[RAlt as usize] = NativeScancode(230);               // SDL_SCANCODE_RALT
    t[RGui as usize] = NativeScancode(231);               // SDL_SCANCODE_RGUI
    t[Mode as usize] = NativeScancode(257);               // SDL_SCANCODE_MODE
    t[AudioNext as usize] = NativeScancode(258);          // SDL_SCANCODE_AUDIONEXT
    t[AudioPrev as usize] = NativeScancode(259);          // SDL_SCANCODE_AUDIOPREV
    t[AudioStop as usize] = NativeScancode(260);          // SDL_SCANCODE_AUDIOSTOP
    t[AudioPlay as usize] = NativeScancode(261);          // SDL_SCANCODE_AUDIOPLAY
    t[AudioMute as usize] = NativeScancode(262);          // SDL_SCANCODE_AUDIOMUTE
    t[MediaSelect as usize] = NativeScancode(263);        // SDL_SCANCODE_MEDIASELECT
    t[Www as usize] = NativeScancode(264);                // SDL_SCANCODE_WWW
    t[Mail as usize] = NativeScancode(265);               // SDL_SCANCODE_MAIL
    t[Calculator as usize] = NativeScancode(266);         // SDL_SCANCODE_CALCULATOR
    t[Computer as usize] = NativeScancode(267);           // SDL_SCANCODE_COMPUTER
    t[AcSearch as usize] = NativeScancode(268);           // SDL_SCANCODE_AC_SEARCH
    t[AcHome as usize] = NativeScancode(269);             // SDL_SCANCODE_AC_HOME
    t[AcBack as usize] = NativeScancode(270);             // SDL_SCANCODE_AC_BACK
    t[AcForward as usize] = NativeScancode(271);          // SDL_SCANCODE_AC_FORWARD
    t[AcStop as usize] = NativeScancode(272);             // SDL_SCANCODE_AC_STOP
    t[AcRefresh as usize] = NativeScancode(273);          // SDL_SCANCODE_AC_REFRESH
    t[AcBookmarks as usize] = NativeScancode(274);        // SDL_SCANCODE_AC_BOOKMARKS
    t[BrightnessDown as usize] = NativeScancode(275);     // SDL_SCANCODE_BRIGHTNESSDOWN
    t[BrightnessUp as usize] = NativeScancode(276);       // SDL_SCANCODE_BRIGHTNESSUP
    t[DisplaySwitch as usize] = NativeScancode(277);      // SDL_SCANCODE_DISPLAYSWITCH
    t[KbdIllumToggle as usize] = NativeScancode(278);     // SDL_SCANCODE_KBDILLUMTOGGLE
    t[KbdIllumDown as usize] = NativeScancode(279);       // SDL_SCANCODE_KBDILLUMDOWN
    t[KbdIllumUp as usize] = NativeScancode(280);         // SDL_SCANCODE_KBDILLUMUP
    t[Eject as usize] = NativeScancode(281);              // SDL_SCANCODE_EJECT
    t[Sleep as usize] = NativeScancode(282);              // SDL_SCANCODE_SLEEP
    t[App1 as usize] = NativeScancode(283);               // SDL_SCANCODE_APP1
    t[App2 as usize] = NativeScancode(284);               // SDL_SCANCODE_APP2

    t
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_unknown_key_maps_to_unknown_native() {
        assert_eq!(KEY_MAP.native(Key::Unknown), NativeKeycode::UNKNOWN);
        assert_eq!(KEY_MAP.key(NativeKeycode::UNKNOWN), Key::Unknown);
    }

    #[test]
    fn test_every_known_key_has_a_native_keycode() {
        for key in Key::ALL.iter().copied().filter(|&k| k != Key::Unknown) {
            assert_ne!(
                KEY_MAP.native(key),
                NativeKeycode::UNKNOWN,
                "{key:?} has no native keycode"
            );
        }
    }

    #[test]
    fn test_native_keycodes_are_unique() {
        let codes: HashSet<NativeKeycode> = KEY_MAP.iter().map(|(_, c)| c).collect();
        assert_eq!(codes.len(), Key::COUNT, "two keys share a native keycode");
    }

    #[test]
    fn test_key_reverse_lookup_inverts_forward_lookup() {
        for key in Key::ALL {
            assert_eq!(KEY_MAP.key(KEY_MAP.native(key)), key);
        }
    }

    #[test]
    fn test_unmapped_native_keycode_resolves_to_unknown() {
        // Arrange: bit 30 set on a reserved scancode
        let reserved = NativeKeycode::from_scancode(NativeScancode(131));

        // Act / Assert
        assert_eq!(KEY_MAP.key(reserved), Key::Unknown);
        assert_eq!(KEY_MAP.key(NativeKeycode(-1)), Key::Unknown);
    }

    #[test]
    fn test_representative_key_codes() {
        assert_eq!(KEY_MAP.native(Key::A).raw(), 0x61);
        assert_eq!(KEY_MAP.native(Key::Return).raw(), 0x0D);
        assert_eq!(KEY_MAP.native(Key::Delete).raw(), 0x7F);
        assert_eq!(KEY_MAP.native(Key::Mute).raw(), 0x4000_007F);
        assert_eq!(KEY_MAP.native(Key::LCtrl).raw(), 0x4000_00E0);
        assert_eq!(KEY_MAP.native(Key::Sleep).raw(), 0x4000_011A);
    }

    #[test]
    fn test_every_scancode_has_a_distinct_native_value() {
        let natives: HashSet<NativeScancode> = SCANCODE_MAP.iter().map(|(_, n)| n).collect();
        assert_eq!(natives.len(), Scancode::COUNT, "two scancodes share a native value");
        for (sc, native) in SCANCODE_MAP.iter() {
            assert!(native.is_in_range(), "{sc:?} maps out of range");
        }
    }

    #[test]
    fn test_scancode_map_is_bidirectional() {
        for sc in Scancode::ALL {
            // Arrange / Act
            let native = SCANCODE_MAP.native(sc);
            let back = SCANCODE_MAP.scancode(native);

            // Assert
            assert_eq!(back, Some(sc), "{sc:?} -> {native:?} did not map back");
        }
    }

    #[test]
    fn test_reserved_and_out_of_range_natives_have_no_scancode() {
        for raw in [1u16, 2, 3, 130, 131, 132, 165, 175, 222, 223, 232, 256, 285, 511, 512, 9000] {
            assert_eq!(
                SCANCODE_MAP.scancode(NativeScancode(raw)),
                None,
                "native {raw} should be unmapped"
            );
            assert_eq!(
                SCANCODE_MAP.scancode_or_unknown(NativeScancode(raw)),
                Scancode::Unknown
            );
        }
    }

    #[test]
    fn test_representative_scancodes() {
        assert_eq!(SCANCODE_MAP.native(Scancode::Unknown).raw(), 0);
        assert_eq!(SCANCODE_MAP.native(Scancode::A).raw(), 4);
        assert_eq!(SCANCODE_MAP.native(Scancode::Num0).raw(), 39);
        assert_eq!(SCANCODE_MAP.native(Scancode::KpHexadecimal).raw(), 221);
        assert_eq!(SCANCODE_MAP.native(Scancode::App2).raw(), 284);
    }

    #[test]
    fn test_scancode_derived_keys_agree_with_scancode_table() {
        // A key whose keycode carries the mask must point at a real scancode.
        for (key, code) in KEY_MAP.iter().filter(|(_, c)| c.is_scancode_derived()) {
            let native = NativeScancode((code.raw() & !NativeKeycode::SCANCODE_MASK) as u16);
            assert!(
                SCANCODE_MAP.scancode(native).is_some(),
                "{key:?} points at unmapped scancode {native:?}"
            );
        }
    }
}
