use std::fmt::Debug;

/// Defines how template paths and their assets are expected to be named.
/// The core derives the template name from a path leaf and uses the
/// convention to say which asset names it was looking for.
pub trait NamingConvention: Send + Sync + Debug {
    /// Prefix expected on level assets (e.g. "L_").
    fn level_prefix(&self) -> &str;

    /// Prefix expected on thumbnail textures (e.g. "T_").
    fn thumbnail_prefix(&self) -> &str;

    /// Template name for a path leaf.
    ///
    /// A leaf named after its level (`L_Downtown`) is reduced to the bare
    /// template name (`Downtown`) so the thumbnail can be matched too.
    fn template_stem<'a>(&self, leaf: &'a str) -> &'a str {
        match leaf.strip_prefix(self.level_prefix()) {
            Some(stem) if !stem.is_empty() => stem,
            _ => leaf,
        }
    }

    /// Level name the convention expects for a template.
    fn expected_level_name(&self, stem: &str) -> String {
        format!("{}{}", self.level_prefix(), stem)
    }

    /// Thumbnail name the convention expects for a template.
    fn expected_thumbnail_name(&self, stem: &str) -> String {
        format!("{}{}", self.thumbnail_prefix(), stem)
    }
}

/// The `L_<Name>` / `T_<Name>` convention.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefixConvention;

impl NamingConvention for PrefixConvention {
    fn level_prefix(&self) -> &str {
        "L_"
    }

    fn thumbnail_prefix(&self) -> &str {
        "T_"
    }
}

/// Last segment of a `/`-separated content path, ignoring trailing slashes.
pub fn path_leaf(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_leaf() {
        assert_eq!(path_leaf("/Game/Templates/City"), "City");
        assert_eq!(path_leaf("/Game/Templates/City/"), "City");
        assert_eq!(path_leaf("City"), "City");
        assert_eq!(path_leaf(""), "");
    }

    #[test]
    fn test_template_stem_strips_level_prefix() {
        let convention = PrefixConvention;
        assert_eq!(convention.template_stem("L_Downtown"), "Downtown");
        assert_eq!(convention.template_stem("Downtown"), "Downtown");
        // A bare prefix is not a template name on its own
        assert_eq!(convention.template_stem("L_"), "L_");
        // Thumbnail prefix is left alone
        assert_eq!(convention.template_stem("T_Downtown"), "T_Downtown");
    }

    #[test]
    fn test_expected_names() {
        let convention = PrefixConvention;
        assert_eq!(convention.expected_level_name("Notes"), "L_Notes");
        assert_eq!(convention.expected_thumbnail_name("Harbor"), "T_Harbor");
    }
}
