//! Pairs a template path with its level and thumbnail by name.

use mapshelf_plugin::{AssetKind, AssetRef, NamingConvention, ScanWarning, path_leaf};

/// Level and optional thumbnail found under one template path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub level: AssetRef,
    pub thumbnail: Option<AssetRef>,
}

/// Outcome of matching a single template path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Template name derived from the path leaf
    pub stem: String,
    /// `None` when no level was found
    pub result: Option<MatchResult>,
    pub warnings: Vec<ScanWarning>,
}

/// Match the assets found under `sub_path`.
///
/// Candidates are assets whose name contains the template name
/// (case-sensitive, anywhere in the name). The first level and the first
/// thumbnail in index order win.
pub fn match_template(
    sub_path: &str,
    assets: &[AssetRef],
    naming: &dyn NamingConvention,
) -> MatchOutcome {
    let stem = naming.template_stem(path_leaf(sub_path));

    let mut level: Option<&AssetRef> = None;
    let mut thumbnail: Option<&AssetRef> = None;

    for asset in assets {
        if level.is_some() && thumbnail.is_some() {
            break;
        }

        if !asset.name.contains(stem) {
            continue;
        }

        match asset.kind {
            AssetKind::Level if level.is_none() => level = Some(asset),
            AssetKind::Thumbnail if thumbnail.is_none() => thumbnail = Some(asset),
            _ => {}
        }
    }

    let mut warnings = Vec::new();

    let Some(level) = level else {
        warnings.push(ScanWarning::MissingLevel {
            leaf: stem.to_string(),
            expected: naming.expected_level_name(stem),
        });
        return MatchOutcome {
            stem: stem.to_string(),
            result: None,
            warnings,
        };
    };

    // Thumbnail will be used if found, but is not essential
    if thumbnail.is_none() {
        warnings.push(ScanWarning::MissingThumbnail {
            leaf: stem.to_string(),
            expected: naming.expected_thumbnail_name(stem),
        });
    }

    MatchOutcome {
        stem: stem.to_string(),
        result: Some(MatchResult {
            level: level.clone(),
            thumbnail: thumbnail.cloned(),
        }),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapshelf_plugin::PrefixConvention;

    #[test]
    fn test_match_level_and_thumbnail() {
        let assets = vec![
            AssetRef::level("L_Downtown", "/T/City/L_Downtown/L_Downtown.L_Downtown"),
            AssetRef::thumbnail("T_Downtown", "/T/City/L_Downtown/T_Downtown.T_Downtown"),
        ];

        let outcome = match_template("/T/City/L_Downtown", &assets, &PrefixConvention);

        assert_eq!(outcome.stem, "Downtown");
        assert!(outcome.warnings.is_empty());
        let result = outcome.result.unwrap();
        assert_eq!(result.level.name, "L_Downtown");
        assert_eq!(result.thumbnail.unwrap().name, "T_Downtown");
    }

    #[test]
    fn test_first_candidate_wins() {
        let assets = vec![
            AssetRef::level("L_Forest_Day", "/a"),
            AssetRef::level("L_Forest_Night", "/b"),
            AssetRef::thumbnail("T_Forest_Day", "/c"),
            AssetRef::thumbnail("T_Forest_Night", "/d"),
        ];

        let outcome = match_template("/Maps/Forest", &assets, &PrefixConvention);
        let result = outcome.result.unwrap();
        assert_eq!(result.level.object_path, "/a");
        assert_eq!(result.thumbnail.unwrap().object_path, "/c");
    }

    #[test]
    fn test_names_must_contain_template_name() {
        let assets = vec![
            AssetRef::level("L_Other", "/a"),
            // Case-sensitive containment
            AssetRef::level("L_desert", "/b"),
            AssetRef::level("Big_Desert_Map", "/c"),
        ];

        let outcome = match_template("/Maps/Desert", &assets, &PrefixConvention);
        assert_eq!(outcome.result.unwrap().level.object_path, "/c");
    }

    #[test]
    fn test_missing_level() {
        let assets = vec![
            AssetRef::other("readme", "/Maps/Notes/readme.readme"),
            AssetRef::thumbnail("T_Notes", "/Maps/Notes/T_Notes.T_Notes"),
        ];

        let outcome = match_template("/Maps/Notes", &assets, &PrefixConvention);

        assert!(outcome.result.is_none());
        assert_eq!(
            outcome.warnings,
            vec![ScanWarning::MissingLevel {
                leaf: "Notes".to_string(),
                expected: "L_Notes".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_path_is_missing_level() {
        let outcome = match_template("/Maps/Empty", &[], &PrefixConvention);
        assert!(outcome.result.is_none());
        assert!(matches!(
            outcome.warnings.as_slice(),
            [ScanWarning::MissingLevel { .. }]
        ));
    }

    #[test]
    fn test_missing_thumbnail_still_matches() {
        let assets = vec![AssetRef::level("L_Harbor", "/Maps/L_Harbor/L_Harbor.L_Harbor")];

        let outcome = match_template("/Maps/L_Harbor", &assets, &PrefixConvention);

        let result = outcome.result.unwrap();
        assert!(result.thumbnail.is_none());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].expected(), "T_Harbor");
    }

    #[test]
    fn test_other_assets_are_ignored() {
        let assets = vec![
            AssetRef::other("Canyon_Foliage", "/a"),
            AssetRef::level("L_Canyon", "/b"),
        ];

        let outcome = match_template("/Maps/Canyon", &assets, &PrefixConvention);
        assert_eq!(outcome.result.unwrap().level.object_path, "/b");
    }
}
