//! TestNG suite file rewriting.

use once_cell::sync::Lazy;
use regex::Regex;

/// Suite used when the configured suite file does not exist yet.
pub const SIMPLE_SUITE_CONTENTS: &str = "<suite name=\"Acceptance Test Suite\">\n\
<test name=\"Selected Acceptance\" preserve-order=\"false\">\n\
</test>\n\
</suite>\n";

pub const TEST_END_TAG: &str = "</test>";

static PACKAGES_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<packages>.*</packages>").unwrap());

/// Removes the package based selection, if any.
///
/// The match is greedy across lines, so everything from the first
/// `<packages>` to the last `</packages>` goes in a single substitution.
pub fn strip_package_selection(contents: &str) -> String {
    PACKAGES_SECTION.replace(contents, "").into_owned()
}

/// Renders the `<classes>` block for the selected suites.
pub fn classes_section<'a>(suites: impl IntoIterator<Item = &'a str>) -> String {
    let mut section = String::from("    <classes>\n");
    for suite in suites {
        section.push_str("      <class name=\"");
        section.push_str(suite);
        section.push_str("\"/>\n");
    }
    section.push_str("    </classes>\n");
    section
}

/// Inserts `classes` right before the first `</test>`. Text without a
/// `</test>` comes back unchanged.
pub fn set_classes_in_suite_contents(contents: &str, classes: &str) -> String {
    if !contents.contains(TEST_END_TAG) {
        return contents.to_string();
    }
    contents.replacen(TEST_END_TAG, &format!("{classes}\n{TEST_END_TAG}"), 1)
}

/// Produces the suite file text that runs exactly `suites`.
///
/// `existing` is the current suite file, or `None` when there is none, in
/// which case [`SIMPLE_SUITE_CONTENTS`] is the starting point.
pub fn patch_descriptor<'a>(
    existing: Option<&str>,
    suites: impl IntoIterator<Item = &'a str>,
) -> String {
    let base = match existing {
        Some(contents) => strip_package_selection(contents),
        None => SIMPLE_SUITE_CONTENTS.to_string(),
    };
    set_classes_in_suite_contents(&base, &classes_section(suites))
}
