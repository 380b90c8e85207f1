//! Field-level transforms: identifier padding, era dates, course codes.
//!
//! Every function here is pure apart from `log` warnings for values that
//! degrade to blank. A single bad cell never fails the run.

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Right-justify `field` in a `width`-character string filled with `'0'`.
///
/// A field longer than `width` keeps its rightmost `width` characters.
pub fn zero_pad(field: &str, width: usize) -> String {
    let len = field.chars().count();
    if len > width {
        log::warn!("'{field}' exceeds {width} characters, keeping the rightmost {width}");
        return field.chars().skip(len - width).collect();
    }
    format!("{field:0>width$}")
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Japanese imperial eras, keyed by their one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
}

impl Era {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(Self::Meiji),
            'T' => Some(Self::Taisho),
            'S' => Some(Self::Showa),
            'H' => Some(Self::Heisei),
            'R' => Some(Self::Reiwa),
            _ => None,
        }
    }

    /// Era year + offset = Gregorian year - 1900.
    pub fn offset(self) -> i32 {
        match self {
            Self::Meiji => -33,
            Self::Taisho => 11,
            Self::Showa => 25,
            Self::Heisei => 88,
            Self::Reiwa => 118,
        }
    }

    pub fn gregorian_year(self, era_year: i32) -> i32 {
        1900 + era_year + self.offset()
    }
}

/// `H01/04/01` → `19890401`.
///
/// Layout is era letter, two-digit era year, delimiter, two-digit month,
/// delimiter, two-digit day. Month and day are copied through as-is.
pub fn era_to_gregorian(field: &str) -> Option<String> {
    let chars: Vec<char> = field.chars().collect();
    if chars.len() < 9 {
        log::warn!("birth date '{field}' is too short for an era date");
        return None;
    }
    let Some(era) = Era::from_code(chars[0]) else {
        log::warn!("birth date '{field}' has unknown era code '{}'", chars[0]);
        return None;
    };
    let digits = &chars[1..3];
    if !digits.iter().all(char::is_ascii_digit) {
        log::warn!("birth date '{field}' has a non-numeric era year");
        return None;
    }
    let era_year = digits
        .iter()
        .fold(0, |acc, c| acc * 10 + c.to_digit(10).unwrap_or(0) as i32);
    let month: String = chars[4..6].iter().collect();
    let day: String = chars[7..9].iter().collect();
    Some(format!("{:04}{month}{day}", era.gregorian_year(era_year)))
}

/// `2024/04/01` → `20240401`. Delimiters sit at positions 4 and 7.
pub fn reformat_date(field: &str) -> Option<String> {
    let chars: Vec<char> = field.chars().collect();
    if chars.len() < 10 {
        log::warn!("date '{field}' is too short for YYYY/MM/DD");
        return None;
    }
    let mut out = String::with_capacity(8);
    out.extend(&chars[0..4]);
    out.extend(&chars[5..7]);
    out.extend(&chars[8..10]);
    Some(out)
}

/// `20240401` → `2024/04/01`. Anything that is not eight characters passes
/// through unchanged.
pub fn display_date(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();
    if chars.len() != 8 {
        return field.to_string();
    }
    let year: String = chars[0..4].iter().collect();
    let month: String = chars[4..6].iter().collect();
    let day: String = chars[6..8].iter().collect();
    format!("{year}/{month}/{day}")
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

struct Course {
    /// Course code as exported by the reservation system.
    raw: &'static str,
    /// Code used in the submission file and the insurer result.
    code: &'static str,
    label: &'static str,
}

const COURSES: &[Course] = &[
    Course { raw: "19", code: "1", label: "一般健診" },
    Course { raw: "20", code: "2", label: "一般健診＋付加" },
    Course { raw: "21", code: "3", label: "子宮がん単独" },
];

/// Reservation course code → submission course code.
pub fn map_course_code(raw: &str) -> Option<&'static str> {
    COURSES.iter().find(|c| c.raw == raw).map(|c| c.code)
}

/// Submission course code → display label.
pub fn map_course_label(code: &str) -> Option<&'static str> {
    COURSES.iter().find(|c| c.code == code).map(|c| c.label)
}
