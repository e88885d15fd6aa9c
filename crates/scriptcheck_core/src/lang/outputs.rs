//! Define the artifacts the external script runner deposits in the outputs directory.
//!
//! [`OUTPUTS`] lists every file name the runner may produce. Most entries carry a text
//! [`ContentRule`]: a minimum length plus a set of marker substrings, any one of which counts as
//! evidence the script ran its demonstration. A few entries are [`ContentRule::ListingOnly`]: they
//! are recognized when scanning the directory but never read.
//!
//! ## Notes
//! - Thresholds are strict: the content length must be **greater than** `min_len`.
//! - Matching case is chosen per marker, so a single artifact can mix both kinds.
//! - Thresholds are tutorial-driven defaults, not invariants. Tune them here.

/// How a marker is compared against artifact content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCase {
    Sensitive,
    /// Both sides are lowercased before comparison.
    Insensitive,
}

/// A substring whose presence is weak evidence the script ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub text: &'static str,
    pub case: MatchCase,
}

impl Marker {
    pub const fn exact(text: &'static str) -> Self {
        Self {
            text,
            case: MatchCase::Sensitive,
        }
    }

    pub const fn any_case(text: &'static str) -> Self {
        Self {
            text,
            case: MatchCase::Insensitive,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.case {
            MatchCase::Sensitive => write!(f, "{:?}", self.text),
            MatchCase::Insensitive => write!(f, "{:?} (any case)", self.text),
        }
    }
}

/// What the Output Verifier asserts about an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRule {
    /// Read as text; length must exceed `min_len` and, when `markers` is non-empty, at least one
    /// marker must appear.
    Text {
        min_len: usize,
        markers: &'static [Marker],
    },
    /// Known byproduct, tracked only for directory hygiene.
    ListingOnly,
}

/// An expected artifact under the outputs directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputExpectation {
    pub file_name: &'static str,
    pub rule: ContentRule,
}

impl OutputExpectation {
    pub fn is_content_checked(&self) -> bool {
        matches!(self.rule, ContentRule::Text { .. })
    }

    /// Stable check identifier, e.g. `outputs::bash_grep.txt`.
    pub fn check_id(&self) -> String {
        format!("outputs::{}", self.file_name)
    }
}

/// Length floor for short demonstrations.
pub const MIN_LEN_SHORT: usize = 50;
/// Length floor for most demonstrations.
pub const MIN_LEN_STANDARD: usize = 100;
/// Length floor for the broad language tours.
pub const MIN_LEN_EXTENDED: usize = 200;

/// Registry of every expected artifact.
pub const OUTPUTS: &[OutputExpectation] = &[
    text(
        "bash_basics.txt",
        MIN_LEN_STANDARD,
        &[Marker::exact("Variables"), Marker::exact("count=")],
    ),
    text("bash_grep.txt", MIN_LEN_STANDARD, &[Marker::any_case("grep")]),
    text(
        "bash_awk.txt",
        MIN_LEN_STANDARD,
        &[Marker::any_case("awk"), Marker::exact("$1")],
    ),
    text("perl_basics.txt", MIN_LEN_SHORT, &[]),
    text(
        "zsh_basics.txt",
        MIN_LEN_STANDARD,
        &[Marker::any_case("zsh"), Marker::exact("array")],
    ),
    text(
        "python_basics.txt",
        MIN_LEN_EXTENDED,
        &[
            Marker::exact("string"),
            Marker::exact("dict"),
            Marker::exact("list"),
            Marker::exact("function"),
        ],
    ),
    // The numpy and matplotlib demos print a skip notice when the library is absent.
    text(
        "python_numpy.txt",
        MIN_LEN_STANDARD,
        &[Marker::any_case("numpy"), Marker::any_case("array"), Marker::any_case("skip")],
    ),
    text(
        "python_matplotlib.txt",
        MIN_LEN_SHORT,
        &[
            Marker::any_case("plot"),
            Marker::any_case("matplotlib"),
            Marker::any_case("skip"),
        ],
    ),
    text(
        "cpp_basics.txt",
        MIN_LEN_EXTENDED,
        &[
            Marker::any_case("vector"),
            Marker::any_case("map"),
            Marker::any_case("class"),
            Marker::any_case("template"),
        ],
    ),
    listing_only("zsh_functions.txt"),
    // numpy demo's array dump
    listing_only("_tmp_array.npy"),
];

/// Find an expectation by file name.
pub fn find(file_name: &str) -> Option<&'static OutputExpectation> {
    OUTPUTS.iter().find(|o| o.file_name == file_name)
}

/// Whether `file_name` is a recognized artifact (content-checked or not).
pub fn is_known(file_name: &str) -> bool {
    find(file_name).is_some()
}

/// Expectations that are read and content-checked, in table order.
pub fn content_checked() -> impl Iterator<Item = &'static OutputExpectation> {
    OUTPUTS.iter().filter(|o| o.is_content_checked())
}

const fn text(file_name: &'static str, min_len: usize, markers: &'static [Marker]) -> OutputExpectation {
    OutputExpectation {
        file_name,
        rule: ContentRule::Text { min_len, markers },
    }
}

const fn listing_only(file_name: &'static str) -> OutputExpectation {
    OutputExpectation {
        file_name,
        rule: ContentRule::ListingOnly,
    }
}
