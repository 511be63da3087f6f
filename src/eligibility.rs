//! File eligibility: build mode, extension and exclusion checks.

use crate::config::{BuildMode, TaggerOptions};

/// Whether `file_id` should be handed to the tagger at all.
pub fn is_eligible(file_id: &str, options: &TaggerOptions, mode: BuildMode) -> bool {
    options.is_enabled(mode) && matches_extension(file_id, options) && !is_excluded(file_id, options)
}

/// Extension/exclusion part of the check, without the build-mode switch.
pub fn matches_path(file_id: &str, options: &TaggerOptions) -> bool {
    matches_extension(file_id, options) && !is_excluded(file_id, options)
}

fn matches_extension(file_id: &str, options: &TaggerOptions) -> bool {
    options.include.iter().any(|ext| file_id.ends_with(ext.as_str()))
}

fn is_excluded(file_id: &str, options: &TaggerOptions) -> bool {
    options
        .exclude
        .iter()
        .any(|pattern| file_id.contains(pattern.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let options = TaggerOptions::default();
        let dev = BuildMode::Development;
        assert!(is_eligible("/app/src/App.tsx", &options, dev));
        assert!(is_eligible("/app/src/App.jsx", &options, dev));
        assert!(!is_eligible("/app/src/App.ts", &options, dev));
        assert!(!is_eligible("/app/src/styles.css", &options, dev));
    }

    #[test]
    fn test_exclusion_substring() {
        let options = TaggerOptions::default();
        assert!(!is_eligible(
            "/app/node_modules/lib/Button.tsx",
            &options,
            BuildMode::Development
        ));
    }

    #[test]
    fn test_production_disabled_unless_forced() {
        let mut options = TaggerOptions::default();
        assert!(!is_eligible("/app/src/App.tsx", &options, BuildMode::Production));

        options.enabled = Some(true);
        assert!(is_eligible("/app/src/App.tsx", &options, BuildMode::Production));
    }

    #[test]
    fn test_custom_include_and_exclude() {
        let options = TaggerOptions {
            include: vec![".mdx".to_string()],
            exclude: vec!["/generated/".to_string()],
            enabled: Some(true),
            ..TaggerOptions::default()
        };
        assert!(matches_path("/docs/intro.mdx", &options));
        assert!(!matches_path("/docs/generated/intro.mdx", &options));
        assert!(!matches_path("/docs/App.tsx", &options));
    }
}
