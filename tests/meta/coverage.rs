//! Checks that every source file has a matching unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module declarations carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_paths(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_strip_error| io::Error::other("path outside base directory"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                out.insert(relative);
                relative_paths(&path, base, out)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                out.insert(relative);
            }
        }
        Ok(())
    }

    fn collect(dir: &str) -> BTreeSet<String> {
        let root = Path::new(dir);
        let mut paths = BTreeSet::new();
        if let Err(error) = relative_paths(root, root, &mut paths) {
            assert!(!root.exists(), "Failed to scan {dir}: {error}");
        }
        paths
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let src = collect(SRC_DIR);
        let unit = collect(UNIT_DIR);

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_exempt(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_file_has_a_source_file() {
        let src = collect(SRC_DIR);
        let unit = collect(UNIT_DIR);

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without source counterparts:\n{}",
            orphaned.join("\n")
        );
    }

    fn files_without_tests(dir: &Path, out: &mut Vec<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files_without_tests(&path, out)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            let is_harness = path.parent() == Some(Path::new("tests")) && name == "main.rs";
            if is_harness || name == "mod.rs" {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                out.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let mut empty = Vec::new();
        let tests_dir = Path::new("tests");
        if let Err(error) = files_without_tests(tests_dir, &mut empty) {
            assert!(!tests_dir.exists(), "Failed to scan tests directory: {error}");
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
