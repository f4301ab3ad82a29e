//! @ai:module:intent Rewrite one file's lines: insert, replace, or strip annotations
//! @ai:module:layer application
//! @ai:module:public_api rewrite_lines, RewriteOutcome, InsertedAnnotation
//! @ai:module:depends_on config, matcher
//! @ai:module:stateless true

use crate::config::Config;
use crate::matcher::MethodMatcher;

/// @ai:intent Structural position while scanning a file top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforePackage,
    InImportBlock,
    InBody,
}

/// @ai:intent Record of one annotation inserted above a method declaration
#[derive(Debug, Clone)]
pub struct InsertedAnnotation {
    pub method: String,
    pub text: String,
}

/// @ai:intent Full result of rewriting one file's lines
#[derive(Debug, Default)]
pub struct RewriteOutcome {
    pub lines: Vec<String>,
    pub inserted: Vec<InsertedAnnotation>,
    pub removed: usize,
    pub import_replaced: bool,
}

/// @ai:intent Transform a file's lines according to the configured mode
/// @ai:pre config has been validated
/// @ai:post input lines are preserved verbatim except for rewritten import
///          lines and dropped annotation lines
/// @ai:invariant lines before and including the package declaration pass
///               through unchanged
/// @ai:effects pure
pub fn rewrite_lines(lines: &[String], config: &Config, matcher: &MethodMatcher) -> RewriteOutcome {
    let expected_import = format!(
        "import {}.{};",
        config.import_source_package, config.annotation
    );
    let replacement_import = format!(
        "import {}.{};",
        config.import_target_package, config.annotation
    );
    let removal_marker = format!("@{}", config.annotation);

    let mut outcome = RewriteOutcome {
        lines: Vec::with_capacity(lines.len()),
        ..Default::default()
    };
    let mut state = ScanState::BeforePackage;
    let mut end_of_imports = false;

    for line in lines {
        let trimmed = line.trim();

        match state {
            ScanState::BeforePackage => {
                // A file with no package declaration passes through untouched.
                if trimmed.starts_with("package ") {
                    state = ScanState::InImportBlock;
                }
                outcome.lines.push(line.clone());
            }

            ScanState::InImportBlock => {
                if !trimmed.is_empty() && !trimmed.starts_with("import ") {
                    end_of_imports = true;
                }

                if trimmed == expected_import {
                    state = ScanState::InBody;
                    if config.mode.replace_import() {
                        outcome.import_replaced = true;
                        outcome.lines.push(replacement_import.clone());
                        continue;
                    }
                } else if end_of_imports {
                    // First body line reached without seeing the import; body
                    // scanning starts on the next line, so this line itself is
                    // never annotated.
                    state = ScanState::InBody;
                    if config.mode.annotate() {
                        outcome.lines.push(expected_import.clone());
                    }
                }
                outcome.lines.push(line.clone());
            }

            ScanState::InBody => {
                if config.mode.remove_annotations() {
                    if trimmed.contains(&removal_marker) {
                        outcome.removed += 1;
                        continue;
                    }
                } else if config.mode.annotate() {
                    if let Some(method) = matcher.method_name(trimmed) {
                        let annotation = format!(
                            "    @{}(name = \"{}.{}.{}.{}\", absolute = true)",
                            config.annotation,
                            config.project,
                            config.folder,
                            method,
                            config.annotation_end
                        );
                        outcome.inserted.push(InsertedAnnotation {
                            method: method.to_string(),
                            text: annotation.clone(),
                        });
                        outcome.lines.push(annotation);
                    }
                }
                outcome.lines.push(line.clone());
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use std::path::PathBuf;

    fn config(mode: Mode) -> Config {
        Config {
            source_path: PathBuf::from("src"),
            project: "P".to_string(),
            folder: "F".to_string(),
            annotation: "Track".to_string(),
            annotation_end: "E".to_string(),
            mode,
            import_source_package: "".to_string(),
            import_target_package: "statsd".to_string(),
        }
    }

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_annotates_public_methods_in_body() {
        let input = lines(&[
            "package p;",
            "",
            "public class Widget {",
            "    public void foo() {",
            "    }",
            "}",
        ]);

        let outcome = rewrite_lines(&input, &config(Mode::new(true, false, false)), &MethodMatcher::new());

        assert_eq!(
            outcome.lines,
            lines(&[
                "package p;",
                "",
                "import .Track;",
                "public class Widget {",
                "    @Track(name = \"P.F.foo.E\", absolute = true)",
                "    public void foo() {",
                "    }",
                "}",
            ])
        );
        assert_eq!(outcome.inserted.len(), 1);
        assert_eq!(outcome.inserted[0].method, "foo");
    }

    #[test]
    fn test_line_ending_import_block_is_not_annotated() {
        // The line that triggers end-of-imports is copied under import-block
        // rules; body scanning begins on the following line.
        let input = lines(&["package p;", "", "public void foo() {", "}"]);

        let outcome = rewrite_lines(&input, &config(Mode::new(true, false, false)), &MethodMatcher::new());

        assert_eq!(
            outcome.lines,
            lines(&["package p;", "", "import .Track;", "public void foo() {", "}"])
        );
        assert!(outcome.inserted.is_empty());
    }

    #[test]
    fn test_existing_import_is_not_duplicated() {
        let input = lines(&[
            "package p;",
            "import .Track;",
            "public class Widget {",
            "    public void foo() {",
            "}",
        ]);

        let outcome = rewrite_lines(&input, &config(Mode::new(true, false, false)), &MethodMatcher::new());

        assert_eq!(outcome.lines[1], "import .Track;");
        assert_eq!(
            outcome
                .lines
                .iter()
                .filter(|l| l.as_str() == "import .Track;")
                .count(),
            1
        );
        assert_eq!(outcome.inserted.len(), 1);
    }

    #[test]
    fn test_file_without_package_passes_through() {
        let input = lines(&["public void foo() {", "}"]);

        let outcome = rewrite_lines(&input, &config(Mode::new(true, false, false)), &MethodMatcher::new());

        assert_eq!(outcome.lines, input);
        assert!(outcome.inserted.is_empty());
    }

    #[test]
    fn test_file_ending_in_import_block_gets_no_import() {
        let input = lines(&["package p;", "import a.B;", ""]);

        let outcome = rewrite_lines(&input, &config(Mode::new(true, false, false)), &MethodMatcher::new());

        assert_eq!(outcome.lines, input);
    }

    #[test]
    fn test_remove_drops_annotation_lines() {
        let input = lines(&[
            "package p;",
            "import .Track;",
            "public class Widget {",
            "    @Track(name = \"P.F.foo.E\", absolute = true)",
            "    public void foo() {",
            "}",
        ]);

        let outcome = rewrite_lines(&input, &config(Mode::new(false, false, true)), &MethodMatcher::new());

        assert_eq!(
            outcome.lines,
            lines(&[
                "package p;",
                "import .Track;",
                "public class Widget {",
                "    public void foo() {",
                "}",
            ])
        );
        assert_eq!(outcome.removed, 1);
    }

    #[test]
    fn test_replace_import_rewrites_package() {
        let mut cfg = config(Mode::new(false, true, false));
        cfg.import_source_package = "metrics".to_string();
        cfg.import_target_package = "statsd".to_string();
        let input = lines(&[
            "package p;",
            "import metrics.Track;",
            "public class Widget {",
            "}",
        ]);

        let outcome = rewrite_lines(&input, &cfg, &MethodMatcher::new());

        assert_eq!(outcome.lines[1], "import statsd.Track;");
        assert!(outcome.import_replaced);
    }

    #[test]
    fn test_replace_and_remove_act_independently() {
        let mut cfg = config(Mode::new(true, true, true));
        cfg.import_source_package = "metrics".to_string();
        let input = lines(&[
            "package p;",
            "import metrics.Track;",
            "public class Widget {",
            "    @Track(name = \"P.F.foo.E\", absolute = true)",
            "    public void foo() {",
            "}",
        ]);

        let outcome = rewrite_lines(&input, &cfg, &MethodMatcher::new());

        assert_eq!(outcome.lines[1], "import statsd.Track;");
        assert!(!outcome.lines.iter().any(|l| l.contains("@Track")));
        assert_eq!(outcome.removed, 1);
        assert!(outcome.inserted.is_empty());
    }

    #[test]
    fn test_annotate_then_remove_round_trips() {
        let original = lines(&[
            "package p;",
            "",
            "public class Widget {",
            "    public void foo() {",
            "    }",
            "    public int bar(int x) {",
            "    }",
            "}",
        ]);

        let matcher = MethodMatcher::new();
        let annotated = rewrite_lines(&original, &config(Mode::new(true, false, false)), &matcher);
        assert_eq!(annotated.inserted.len(), 2);

        let restored = rewrite_lines(&annotated.lines, &config(Mode::new(false, false, true)), &matcher);

        // Identical to the original except the import line remains.
        let mut expected = original.clone();
        expected.insert(2, "import .Track;".to_string());
        assert_eq!(restored.lines, expected);
    }
}
