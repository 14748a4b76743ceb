//! Property tests for upward Taskfile discovery

use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;
use taskfile_cli::read::find_taskfile;
use tempfile::TempDir;

const ENTRYPOINT: &str = "Taskfile.yml";

/// Builds `root/d0/d1/.../d{depth-1}` and returns every level, root first
fn build_chain(root: &TempDir, depth: usize) -> Vec<PathBuf> {
    let mut levels = vec![root.path().to_path_buf()];
    for i in 0..depth {
        let next = levels[i].join(format!("d{i}"));
        levels.push(next);
    }
    fs::create_dir_all(levels.last().unwrap()).unwrap();
    levels
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn finds_the_only_ancestor_taskfile(depth in 0usize..6, pick in 0usize..6) {
        let root = TempDir::new().unwrap();
        let levels = build_chain(&root, depth);
        let holder = &levels[pick % levels.len()];
        fs::write(holder.join(ENTRYPOINT), "version: '3'\n").unwrap();

        let found = find_taskfile(levels.last().unwrap(), ENTRYPOINT).unwrap();

        prop_assert_eq!(found.parent().unwrap(), holder.as_path());
        prop_assert_eq!(found.file_name().unwrap(), ENTRYPOINT);
    }

    #[test]
    fn the_deepest_taskfile_shadows_the_others(depth in 1usize..6, picks in proptest::collection::vec(0usize..6, 1..4)) {
        let root = TempDir::new().unwrap();
        let levels = build_chain(&root, depth);
        let holders: Vec<usize> = picks.iter().map(|p| p % levels.len()).collect();
        for &i in &holders {
            fs::write(levels[i].join(ENTRYPOINT), "version: '3'\n").unwrap();
        }
        let deepest = *holders.iter().max().unwrap();

        let found = find_taskfile(levels.last().unwrap(), ENTRYPOINT).unwrap();

        prop_assert_eq!(found, levels[deepest].join(ENTRYPOINT));
    }

    #[test]
    fn start_directory_is_checked_first(depth in 0usize..6) {
        let root = TempDir::new().unwrap();
        let levels = build_chain(&root, depth);
        for level in &levels {
            fs::write(level.join(ENTRYPOINT), "version: '3'\n").unwrap();
        }
        let start = levels.last().unwrap();

        let found = find_taskfile(start, ENTRYPOINT).unwrap();

        prop_assert_eq!(found, start.join(ENTRYPOINT));
    }
}
