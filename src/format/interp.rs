//! Positional `%`-verb interpolation.
//!
//! Messages logged with extra arguments are treated as templates with
//! positional placeholders (`%s`, `%d`, `%f`, `%t`, `%v`, `%%`).
//! Interpolation never fails: mismatches between the template and its
//! arguments surface as inline markers in the produced string, so a
//! malformed call site can never crash the host process.
//!
//! Marker conventions:
//!
//! - wrong-typed argument: `%!d(str=oops)`
//! - missing argument: `%!s(MISSING)`
//! - `%` at the end of the template: `%!(NOVERB)`
//! - surplus arguments: `%!(EXTRA int=1, str=x)` appended to the line

use std::fmt;

/// An owned interpolation value.
///
/// Build these with [`Arg::from`] or the [`args!`](crate::args) macro.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i128),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    /// Short type name used in inline mismatch markers.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Str(_) => "str",
            Arg::Int(_) => "int",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "char",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Float(x) => write!(f, "{}", x),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Char(c) => write!(f, "{}", c),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

impl From<f32> for Arg {
    fn from(x: f32) -> Self {
        Arg::Float(x as f64)
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Arg::Float(x)
    }
}

macro_rules! arg_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(i: $t) -> Self {
                Arg::Int(i as i128)
            }
        })*
    };
}

arg_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for Arg {
    // Timer durations; values beyond i128::MAX nanoseconds do not occur.
    fn from(i: u128) -> Self {
        Arg::Int(i as i128)
    }
}

/// Builds a `Vec<Arg>` from mixed expressions.
///
/// # Example
///
/// ```rust
/// use tintlog::{args, format::interpolate};
///
/// let line = interpolate("%s took %dms", &args!["startup", 42]);
/// assert_eq!(line, "startup took 42ms");
/// ```
#[macro_export]
macro_rules! args {
    () => { Vec::<$crate::Arg>::new() };
    ($($a:expr),+ $(,)?) => { vec![$($crate::Arg::from($a)),+] };
}

/// Substitutes `args` into `template` positionally.
///
/// See the module docs for the verb set and the inline marker
/// conventions. This is a pure function; it performs no I/O and never
/// panics on malformed input.
pub fn interpolate(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len() + 16 * args.len());
    let mut next = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        // Flags, width and precision are accepted but not honored.
        while matches!(chars.peek(), Some('#' | '+' | '-' | '0' | ' ')) {
            chars.next();
        }
        while matches!(chars.peek(), Some('0'..='9')) {
            chars.next();
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            while matches!(chars.peek(), Some('0'..='9')) {
                chars.next();
            }
        }

        let verb = match chars.next() {
            Some(v) => v,
            None => {
                out.push_str("%!(NOVERB)");
                break;
            }
        };

        let arg = match args.get(next) {
            Some(arg) => {
                next += 1;
                arg
            }
            None => {
                out.push_str(&format!("%!{}(MISSING)", verb));
                continue;
            }
        };

        match (verb, arg) {
            ('v', _) => out.push_str(&arg.to_string()),
            ('s', Arg::Str(s)) => out.push_str(s),
            ('s', Arg::Char(c)) => out.push(*c),
            ('d', Arg::Int(i)) => out.push_str(&i.to_string()),
            ('f', Arg::Float(x)) => out.push_str(&format!("{:.6}", x)),
            ('t', Arg::Bool(b)) => out.push_str(&b.to_string()),
            _ => out.push_str(&format!("%!{}({}={})", verb, arg.kind(), arg)),
        }
    }

    if next < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{}={}", arg.kind(), arg));
        }
        out.push(')');
    }

    out
}
