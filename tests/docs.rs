// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

//! Keep the README and the files it links to in sync.

use std::path::{Path, PathBuf};

use regex::Regex;

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn readme() -> String {
    std::fs::read_to_string(repo_root().join("README.md")).unwrap()
}

/// Targets of `[text](target)` and `![alt](target)` that point into the repo.
fn local_links(markdown: &str) -> Vec<String> {
    let link = Regex::new(r"!?\[[^\]]*\]\(([^)\s]+)\)").unwrap();
    link.captures_iter(markdown)
        .map(|caps| caps[1].to_string())
        .filter(|target| !target.contains("://") && !target.starts_with('#'))
        .collect()
}

#[test]
fn readme_is_present() {
    assert!(
        repo_root().join("README.md").exists(),
        "README.md should exist at the repository root"
    );
}

#[test]
fn readme_local_links_resolve() {
    let links = local_links(&readme());
    assert!(
        links.iter().any(|l| l == "README_DEV.rst"),
        "README should link the developer guide"
    );
    assert!(
        links.iter().any(|l| l.ends_with("un-goal-16-peace-justice.jpg")),
        "README should embed the SDG 16 image"
    );

    for target in links {
        let relative = Path::new(target.trim_start_matches('/'));
        assert!(
            repo_root().join(relative).is_file(),
            "README links to missing file: {target}"
        );
    }
}

#[test]
fn readme_image_is_a_jpeg() {
    let bytes = std::fs::read(repo_root().join("images/un-goal-16-peace-justice.jpg")).unwrap();
    assert!(bytes.starts_with(&[0xFF, 0xD8]), "missing JPEG SOI marker");
    assert!(bytes.ends_with(&[0xFF, 0xD9]), "missing JPEG EOI marker");
}
