use indexmap::IndexSet;

use crate::mapping::{FALLBACK_CODE_PATH, SuiteMapping, split_classes};

/// Computes the test classes to run for a set of changes.
///
/// Each changed file contributes the classes of the first path mapping key it
/// starts with (plain character prefix, not path-segment aware). Every pin
/// mapping key found anywhere in `changed_pins` contributes its classes. When
/// neither produced anything, the fallback entry of `suite_mappings` is used
/// verbatim.
pub fn select_suites(
    changed_files: &[String],
    changed_pins: &str,
    suite_mappings: &SuiteMapping,
    integration_suite_mappings: &SuiteMapping,
) -> IndexSet<String> {
    let mut suites: IndexSet<String> = IndexSet::new();

    for changed_file in changed_files {
        // A matching key with a blank value still ends the scan for this file.
        if let Some((_, classes)) = suite_mappings
            .iter()
            .find(|(prefix, _)| changed_file.starts_with(prefix))
        {
            suites.extend(split_classes(classes).map(str::to_string));
        }
    }

    if !changed_pins.is_empty() {
        integration_suite_mappings
            .iter()
            .filter(|(pin, _)| changed_pins.contains(pin))
            .for_each(|(_, classes)| suites.extend(split_classes(classes).map(str::to_string)));
    }

    if suites.is_empty() {
        if let Some(fallback) = suite_mappings.get(FALLBACK_CODE_PATH) {
            suites.insert(fallback.to_string());
        }
    }
    suites
}
