#[cfg(test)]
use crate::config::PatchConfig;
#[cfg(test)]
use crate::patch::{apply_patch, plan_patch, PatchOutcome, PatchPlan, SubstitutionPolicy};
#[cfg(test)]
use std::fs;
#[cfg(test)]
use tempfile::TempDir;

#[cfg(test)]
fn create_test_config(content: &str) -> (PatchConfig, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("WatchContainer.tsx");
    fs::write(&target, content).unwrap();
    let config = PatchConfig {
        target,
        ..PatchConfig::default()
    };
    (config, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_replaces_marker() {
        let config = PatchConfig::default();
        let plan = plan_patch("import { List as ListIcon } from 'x'", &config);
        assert_eq!(
            plan,
            PatchPlan::Replace {
                content: "import { List as ListIcon, Monitor } from 'x'".to_string(),
                replacements: 1,
            }
        );
    }

    #[test]
    fn test_plan_skip_collects_diagnostic_lines() {
        let config = PatchConfig::default();
        let content = "import React from 'react'\nimport { Play, List } from 'lucide-react'\nexport default {}\n";
        let plan = plan_patch(content, &config);
        assert_eq!(
            plan,
            PatchPlan::Skip {
                diagnostic_lines: vec!["import { Play, List } from 'lucide-react'".to_string()],
            }
        );
    }

    #[test]
    fn test_plan_skip_without_diagnostic_matches() {
        let config = PatchConfig::default();
        let plan = plan_patch("const x = 1;\n", &config);
        assert_eq!(plan, PatchPlan::Skip { diagnostic_lines: vec![] });
    }

    #[test]
    fn test_plan_all_policy_replaces_every_occurrence() {
        let config = PatchConfig::default();
        let content = "{ List as ListIcon }\n{ List as ListIcon }\n";
        match plan_patch(content, &config) {
            PatchPlan::Replace { content, replacements } => {
                assert_eq!(replacements, 2);
                assert_eq!(content, "{ List as ListIcon, Monitor }\n{ List as ListIcon, Monitor }\n");
            }
            other => panic!("expected replace, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_first_policy_replaces_once() {
        let config = PatchConfig {
            policy: SubstitutionPolicy::First,
            ..PatchConfig::default()
        };
        let content = "{ List as ListIcon }\n{ List as ListIcon }\n";
        match plan_patch(content, &config) {
            PatchPlan::Replace { content, replacements } => {
                assert_eq!(replacements, 1);
                assert_eq!(content, "{ List as ListIcon, Monitor }\n{ List as ListIcon }\n");
            }
            other => panic!("expected replace, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_empty_marker_never_matches() {
        let config = PatchConfig {
            marker: String::new(),
            ..PatchConfig::default()
        };
        assert!(matches!(plan_patch("anything", &config), PatchPlan::Skip { .. }));
    }

    #[tokio::test]
    async fn test_apply_patch_rewrites_file() {
        let (config, _temp_dir) = create_test_config("import { List as ListIcon } from 'x'");

        let outcome = apply_patch(&config).await.unwrap();
        assert_eq!(outcome, PatchOutcome::Patched { replacements: 1 });

        let content = fs::read_to_string(&config.target).unwrap();
        assert_eq!(content, "import { List as ListIcon, Monitor } from 'x'");
    }

    #[tokio::test]
    async fn test_apply_patch_twice_skips_second_time() {
        let (config, _temp_dir) = create_test_config("import { List as ListIcon } from 'lucide-react'\n");

        assert!(apply_patch(&config).await.unwrap().is_patched());
        let after_first = fs::read(&config.target).unwrap();

        let second = apply_patch(&config).await.unwrap();
        assert!(!second.is_patched());
        assert_eq!(fs::read(&config.target).unwrap(), after_first);
    }

    #[tokio::test]
    async fn test_apply_patch_leaves_file_untouched_when_marker_absent() {
        let original = "line one\r\nline two without marker\n\n";
        let (config, _temp_dir) = create_test_config(original);

        let outcome = apply_patch(&config).await.unwrap();
        assert_eq!(outcome, PatchOutcome::Skipped { diagnostic_lines: vec![] });
        assert_eq!(fs::read(&config.target).unwrap(), original.as_bytes());
    }

    #[tokio::test]
    async fn test_apply_patch_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = PatchConfig {
            target: temp_dir.path().join("missing.tsx"),
            ..PatchConfig::default()
        };

        let err = apply_patch(&config).await.unwrap_err();
        assert!(matches!(err, crate::errors::PatchError::Read { .. }));
    }

    #[tokio::test]
    async fn test_apply_patch_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("binary.tsx");
        fs::write(&target, [0xff, 0xfe, 0x00]).unwrap();
        let config = PatchConfig {
            target,
            ..PatchConfig::default()
        };

        let err = apply_patch(&config).await.unwrap_err();
        assert!(matches!(err, crate::errors::PatchError::Encoding { .. }));
    }

    #[test]
    fn test_print_status_messages() {
        let mut out = Vec::new();
        PatchOutcome::Patched { replacements: 1 }.print_status(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "PATCHED: Monitor import added successfully\n"
        );

        let mut out = Vec::new();
        PatchOutcome::Skipped {
            diagnostic_lines: vec!["import { X } from 'lucide-react'".to_string()],
        }
        .print_status(&mut out)
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "SKIP: import already contains Monitor or pattern not found\n\
             Current import line: import { X } from 'lucide-react'\n"
        );
    }

    #[test]
    fn test_print_status_skip_without_diagnostics_is_one_line() {
        let mut out = Vec::new();
        PatchOutcome::Skipped { diagnostic_lines: vec![] }
            .print_status(&mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[tokio::test]
    async fn test_apply_patch_refuses_self_repeating_replacement() {
        let original = "import { Monitor } from 'lucide-react'\n";
        let (mut config, _temp_dir) = create_test_config(original);
        config.marker = "{ Monitor }".to_string();
        config.replacement = "{ Monitor }, { Tv }".to_string();

        let err = apply_patch(&config).await.unwrap_err();
        assert!(matches!(err, crate::errors::PatchError::ReplacementContainsMarker { .. }));
        assert_eq!(fs::read(&config.target).unwrap(), original.as_bytes());
    }
}
