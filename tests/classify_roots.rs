use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use mjk::paths::{RootKind, classify, resolve_roots};

type TestResult = Result<(), Box<dyn Error>>;

fn roots(paths: &[&str]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

#[test]
fn classify_finds_the_single_containing_root() -> TestResult {
    let roots = roots(&["/srv/site", "/srv/other"]);
    let found = classify(Path::new("/srv/site/blog/post.md"), &roots);
    assert_eq!(found, Some(Path::new("/srv/site")));
    Ok(())
}

#[test]
fn classify_prefers_the_longest_matching_prefix() -> TestResult {
    let ordered = roots(&["/a", "/a/b"]);
    let found = classify(Path::new("/a/b/c/page.njk"), &ordered);
    assert_eq!(found, Some(Path::new("/a/b")));

    // Same answer regardless of root ordering.
    let reordered = roots(&["/a/b", "/a"]);
    let found = classify(Path::new("/a/b/c/page.njk"), &reordered);
    assert_eq!(found, Some(Path::new("/a/b")));
    Ok(())
}

#[test]
fn classify_breaks_length_ties_by_input_order() -> TestResult {
    // Two roots of equal length can only both contain a file when they are
    // the same path; the tie-break hands back the earlier entry.
    let roots = roots(&["/srv/site", "/srv/site"]);
    let found = classify(Path::new("/srv/site/page.njk"), &roots)
        .ok_or("expected a containing root")?;
    assert_eq!(found, Path::new("/srv/site"));
    assert!(std::ptr::eq(found, roots[0].as_path()));
    Ok(())
}

#[test]
fn classify_returns_none_without_a_containing_root() -> TestResult {
    let roots = roots(&["/srv/site"]);
    assert_eq!(classify(Path::new("/tmp/loose.md"), &roots), None);
    Ok(())
}

#[test]
fn classify_does_not_match_on_name_prefix_alone() -> TestResult {
    // /srv/site-old is not inside /srv/site even though the string is a
    // prefix; containment is component-wise.
    let roots = roots(&["/srv/site"]);
    assert_eq!(classify(Path::new("/srv/site-old/page.njk"), &roots), None);
    Ok(())
}

#[test]
fn resolver_keeps_directories_and_takes_parents_of_files() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let pages = tmp.path().join("pages");
    fs::create_dir(&pages)?;
    fs::write(pages.join("about.njk"), "hi")?;

    let patterns = vec![
        pages.to_string_lossy().into_owned(),
        pages.join("about.njk").to_string_lossy().into_owned(),
    ];
    let set = resolve_roots(&patterns, RootKind::Source);

    // Both arguments resolve to the same directory, once.
    assert_eq!(set.dirs(), &[fs::canonicalize(&pages)?]);
    Ok(())
}

#[test]
fn resolver_falls_back_to_cwd_on_zero_matches() -> TestResult {
    let set = resolve_roots(
        &["/no/such/path/**/*.njk".to_string()],
        RootKind::Template,
    );
    assert_eq!(set.dirs(), &[std::env::current_dir()?]);
    Ok(())
}

#[test]
fn resolver_ignores_invalid_patterns_instead_of_failing() -> TestResult {
    let set = resolve_roots(&["[".to_string()], RootKind::Source);
    assert!(!set.is_empty());
    assert_eq!(set.dirs(), &[std::env::current_dir()?]);
    Ok(())
}

#[test]
fn resolver_expands_globs_to_every_parent_directory() -> TestResult {
    let tmp = tempfile::tempdir()?;
    for dir in ["one", "two"] {
        let dir = tmp.path().join(dir);
        fs::create_dir(&dir)?;
        fs::write(dir.join("page.njk"), "hi")?;
    }

    let pattern = tmp.path().join("*/page.njk").to_string_lossy().into_owned();
    let set = resolve_roots(&[pattern], RootKind::Source);

    let mut dirs: Vec<_> = set.dirs().to_vec();
    dirs.sort();
    let canon = fs::canonicalize(tmp.path())?;
    assert_eq!(dirs, vec![canon.join("one"), canon.join("two")]);
    Ok(())
}
