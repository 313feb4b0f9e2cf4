mod types;

pub use types::*;

use tracing::{debug, warn};

/// Validate the name the template is renamed to
pub fn validate_name(raw: &str) -> Result<ProjectName, NameError> {
    debug!(name = %raw, "Validating project name");

    if raw.is_empty() {
        warn!("Empty project name");
        return Err(NameError::Empty);
    }

    if raw.contains('-') {
        warn!(name = %raw, "Project name contains a hyphen");
        return Err(NameError::ContainsHyphen(raw.to_string()));
    }

    if raw.contains(['/', '\\']) {
        warn!(name = %raw, "Project name contains a path separator");
        return Err(NameError::ContainsSeparator(raw.to_string()));
    }

    Ok(ProjectName::new_unchecked(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_underscored_name() {
        let name = validate_name("my_proj").unwrap();

        assert_eq!(name.as_str(), "my_proj");
        assert_eq!(name.hyphenated(), "my-proj");
    }

    #[test]
    fn test_validate_plain_name() {
        let name = validate_name("latency").unwrap();

        assert_eq!(name.as_str(), "latency");
        assert_eq!(name.hyphenated(), "latency");
    }

    #[test]
    fn test_rejects_hyphen() {
        let result = validate_name("my-proj");
        assert_eq!(result, Err(NameError::ContainsHyphen("my-proj".to_string())));
    }

    #[test]
    fn test_rejects_leading_hyphen() {
        assert!(matches!(
            validate_name("-x"),
            Err(NameError::ContainsHyphen(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_path_separators() {
        assert!(matches!(
            validate_name("a/b"),
            Err(NameError::ContainsSeparator(_))
        ));
        assert!(matches!(
            validate_name("a\\b"),
            Err(NameError::ContainsSeparator(_))
        ));
    }

    #[test]
    fn test_hyphenate_maps_underscores_one_to_one() {
        assert_eq!(hyphenate("a__b_c"), "a--b-c");
        assert_eq!(hyphenate("_lead_trail_"), "-lead-trail-");
        assert_eq!(hyphenate("MixedCase9"), "MixedCase9");
        assert_eq!(hyphenate("ünï_cødé"), "ünï-cødé");
    }

    #[test]
    fn test_hyphen_error_message_suggests_underscores() {
        let msg = NameError::ContainsHyphen("my-proj".to_string()).format_error_message();
        assert!(msg.contains("my_proj"));
        assert!(msg.contains("underscores"));
    }
}
