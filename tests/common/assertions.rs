//! Assertion helpers for tests.

use pixel_lut::LookupTable;

/// Assert every line starts with the right branch keyword and ends with `;`
pub fn assert_well_formed(table: &LookupTable) {
    assert!(!table.lines().is_empty(), "Expected at least one line");
    for (i, line) in table.lines().iter().enumerate() {
        let expected = if i == 0 { "if (" } else { "else if (" };
        assert!(
            line.starts_with(expected),
            "Line {} should start with {:?}: {}",
            i,
            expected,
            line
        );
        assert!(line.ends_with(';'), "Line {} should end with ';': {}", i, line);
    }
    assert!(
        !table.to_string().ends_with('\n'),
        "Rendered table should have no trailing newline"
    );
}

/// Assert the table matches exactly `expected_codes` in emission order
pub fn assert_codes_in_order(table: &LookupTable, expected_codes: &[&str]) {
    let codes: Vec<String> = table.statements().iter().map(|s| s.code.to_string()).collect();
    pretty_assertions::assert_eq!(codes, expected_codes);
}
