// crates/patch_marker/src/lib.rs

//! Fixed literals for the home page support-channel patch.

/// Page source, relative to the project root the tool is run from.
pub const TARGET_FILE: &str = "app/page.tsx";

/// Tail of the `supportChannels` array: the "Email the team" entry plus the
/// closing `];`. Must be present **verbatim** for the patch to apply.
pub const SUPPORT_CHANNELS_TAIL: &str = "    {\n      label: \"Email the team\",\n      value: \"help@funeralcoordinator.lk\",\n      href: \"mailto:help@funeralcoordinator.lk\",\n    },\n  ];";

/// Entry spliced in directly before [`SUPPORT_CHANNELS_TAIL`].
pub const IMPACT_PLEDGE_ENTRY: &str = "    {\n      label: \"Impact pledge\",\n      value: \"Packages uplift widows' cooperatives & grief counselling\",\n      href: \"/csr\",\n    },\n";

/// Reported when [`SUPPORT_CHANNELS_TAIL`] is missing from the target.
pub const MARKER_NOT_FOUND_MESSAGE: &str = "Support channels tail not found";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_closes_the_array() {
        assert!(SUPPORT_CHANNELS_TAIL.ends_with("  ];"));
        assert!(SUPPORT_CHANNELS_TAIL.contains("Email the team"));
    }

    #[test]
    fn test_entry_is_a_complete_line_block() {
        // The entry must end on a newline so the tail keeps its own indentation.
        assert!(IMPACT_PLEDGE_ENTRY.ends_with("},\n"));
        assert!(IMPACT_PLEDGE_ENTRY.starts_with("    {"));
        assert!(!IMPACT_PLEDGE_ENTRY.contains(SUPPORT_CHANNELS_TAIL));
    }
}
