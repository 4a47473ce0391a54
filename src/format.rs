//! Output table layouts for the two supported IME engines.
//!
//! * [`OutputFormat::Gcin`] – one `code character` line per pair inside a
//!   `%chardef` block, UTF-8.
//! * [`OutputFormat::MacOsx`] – one line per code listing all of its
//!   characters separated by `,`, UTF-16 big endian without a BOM.
//!
//! Lines are joined with `\n` and the file does not end with a newline.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::CODE_FIELD_WIDTH;
use crate::rank::Ranked;

/// gcin header directives, written verbatim before the key names.
pub const GCIN_DIRECTIVES: &[&str] = &[
    "%gen_inp",
    "%ename Dayi:en;大易:zh;",
    "%cname 大易",
    "%selkey 1234567890",
    "#%encoding utf-8",
    "#%endkey ='",
    "#%dupsel 9",
    "%space_style 1",
];

/// Keyboard key → Dayi radical shown by gcin.
pub const GCIN_KEY_NAMES: &[(char, char)] = &[
    (',', '力'), ('.', '點'), ('/', '竹'),
    ('0', '金'), ('1', '言'), ('2', '牛'), ('3', '目'), ('4', '四'),
    ('5', '王'), ('6', '門'), ('7', '田'), ('8', '米'), ('9', '足'),
    (';', '虫'),
    ('A', '人'), ('B', '馬'), ('C', '七'), ('D', '日'), ('E', '一'),
    ('F', '土'), ('G', '手'), ('H', '鳥'), ('I', '木'), ('J', '月'),
    ('K', '立'), ('L', '女'), ('M', '雨'), ('N', '魚'), ('O', '口'),
    ('P', '耳'), ('Q', '石'), ('R', '工'), ('S', '革'), ('T', '糸'),
    ('U', '艸'), ('V', '禾'), ('W', '山'), ('X', '水'), ('Y', '火'),
    ('Z', '心'),
    ('=', '符'), ('\'', '標'), ('`', '～'), ('-', '─'),
    ('[', '［'), (']', '］'), ('\\', '＼'),
];

/// Mac OS X table header fields, rendered as `NAME: value`.
pub const MACOSX_FIELDS: &[(&str, &str)] = &[
    ("METHOD", "TABLE"),
    ("ENCODE", "TC"),
    ("PROMPT", "大易"),
    ("VERSION", "1.0"),
    ("DELIMITER", ","),
    ("MAXINPUTCODE", "4"),
    (
        "VALIDINPUTKEY",
        "0123456789=;,./`-'[]ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz",
    ),
    ("TERMINPUTKEY", "123456"),
];

const MACOSX_DELIMITER: &str = ",";

/// Which engine the table is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Format A.
    #[default]
    Gcin,
    /// Format B.
    MacOsx,
}

impl OutputFormat {
    /// Human label used in the write report.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Gcin => "GCIN file",
            OutputFormat::MacOsx => "OSX input table file",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Gcin => write!(f, "gcin"),
            OutputFormat::MacOsx => write!(f, "macosx"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gcin" => Ok(OutputFormat::Gcin),
            "macosx" | "osx" => Ok(OutputFormat::MacOsx),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// A rendered table ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub bytes: Vec<u8>,
    /// Number of `(code, character)` pairs in the table body.
    pub pairs: usize,
}

fn code_field(code: &str) -> String {
    format!("{code:<width$}", width = CODE_FIELD_WIDTH)
}

fn gcin_header() -> Vec<String> {
    let mut lines: Vec<String> = GCIN_DIRECTIVES.iter().map(|s| s.to_string()).collect();
    lines.push("%keyname begin".into());
    lines.extend(GCIN_KEY_NAMES.iter().map(|(key, name)| format!("{key}   {name}")));
    lines.push("%keyname end".into());
    lines.push("%chardef begin".into());
    lines
}

fn macosx_header() -> Vec<String> {
    let mut lines: Vec<String> = MACOSX_FIELDS
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();
    lines.push("BEGINCHARACTER".into());
    lines
}

/// Text of a gcin table for `rows`.
pub fn gcin_text(rows: &[Ranked]) -> String {
    let mut lines = gcin_header();
    lines.extend(rows.iter().map(|r| format!("{}{}", code_field(&r.code), r.character)));
    lines.push("%chardef end".into());
    lines.join("\n")
}

/// Collapse consecutive rows sharing a code into `(code, characters)` groups.
pub fn group_by_code(rows: &[Ranked]) -> Vec<(&str, Vec<char>)> {
    let mut groups: Vec<(&str, Vec<char>)> = Vec::new();
    for row in rows {
        match groups.last_mut() {
            Some((code, chars)) if *code == row.code => chars.push(row.character),
            _ => groups.push((row.code.as_str(), vec![row.character])),
        }
    }
    groups
}

/// Text of a Mac OS X table for `rows`.
pub fn macosx_text(rows: &[Ranked]) -> String {
    let mut lines = macosx_header();
    for (code, chars) in group_by_code(rows) {
        let joined: Vec<String> = chars.iter().map(|c| c.to_string()).collect();
        lines.push(format!("{}{}", code_field(code), joined.join(MACOSX_DELIMITER)));
    }
    lines.push("ENDCHARACTER".into());
    lines.join("\n")
}

/// Encode `text` as UTF-16 big endian without a byte order mark.
pub fn encode_utf16_be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(|unit| unit.to_be_bytes()).collect()
}

/// Render `rows` in `format`.
pub fn render(rows: &[Ranked], format: OutputFormat) -> Rendered {
    let bytes = match format {
        OutputFormat::Gcin => gcin_text(rows).into_bytes(),
        OutputFormat::MacOsx => encode_utf16_be(&macosx_text(rows)),
    };
    Rendered {
        bytes,
        pairs: rows.len(),
    }
}
