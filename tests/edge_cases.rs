//! Edge case tests for canopy


use harness::{TestSite, read_output, run_canopy};

#[test]
fn test_unknown_extension_gets_default_glyph() {
    let site = TestSite::new();
    site.add_file("data.xyz", "opaque");

    let (_stdout, _stderr, success) = run_canopy(site.path(), &[]);
    assert!(success);

    let output = read_output(site.path());
    assert!(
        output.contains("<span class=\"file-icon\">📄</span> <a href=\"#\" data-path=\"data.xyz\">data.xyz</a>"),
        "unknown extension falls back to the default glyph: {}",
        output
    );
}

#[test]
fn test_file_without_extension_gets_default_glyph() {
    let site = TestSite::new();
    site.add_file("Makefile", "all: build");

    let (_stdout, _stderr, success) = run_canopy(site.path(), &[]);
    assert!(success);

    let output = read_output(site.path());
    assert!(output.contains("<span class=\"file-icon\">📄</span> <a href=\"#\" data-path=\"Makefile\">Makefile</a>"));
}

#[test]
fn test_extension_match_is_case_insensitive() {
    let site = TestSite::new();
    site.add_file("PHOTO.PNG", "png");

    let (_stdout, _stderr, success) = run_canopy(site.path(), &[]);
    assert!(success);

    let output = read_output(site.path());
    assert!(
        output.contains("<span class=\"file-icon\">🖼️</span> <a href=\"#\" data-path=\"PHOTO.PNG\">PHOTO.PNG</a>"),
        "upper-cased extension still maps to the image glyph"
    );
}

#[test]
fn test_ignore_names_match_case_insensitively() {
    let site = TestSite::new();
    site.add_file("NODE_MODULES/dep.js", "x");
    site.add_file("Thumbs.db", "x");
    site.add_file("kept.js", "x");

    let (_stdout, _stderr, success) = run_canopy(site.path(), &[]);
    assert!(success);

    let output = read_output(site.path());
    assert!(!output.contains("NODE_MODULES"));
    assert!(!output.contains("dep.js"));
    assert!(!output.contains("Thumbs.db"));
    assert!(output.contains("kept.js"));
}

#[cfg(unix)]
#[test]
fn test_hostile_file_names_are_escaped() {
    let site = TestSite::new();
    site.add_file("a<b>&\"c.md", "# spicy");

    let (_stdout, _stderr, success) = run_canopy(site.path(), &[]);
    assert!(success);

    let output = read_output(site.path());
    assert!(
        output.contains("a&lt;b&gt;&amp;&quot;c.md"),
        "name is escaped in the output: {}",
        output
    );
    assert!(
        !output.contains(">a<b>"),
        "raw angle brackets must not leak into markup"
    );
}

#[test]
fn test_deeply_nested_tree() {
    let site = TestSite::new();
    site.add_file("a/b/c/d/e.md", "# deep");

    let (stdout, _stderr, success) = run_canopy(site.path(), &[]);
    assert!(success);
    assert!(stdout.contains("4 directories, 1 files"), "{}", stdout);

    let output = read_output(site.path());
    assert!(output.contains("data-path=\"a/b/c/d/e.md\""));
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_degrades_softly() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let site = TestSite::new();
    site.add_file("open/file.md", "# readable");
    let locked = site.add_dir("locked");
    site.add_file("locked/hidden.md", "# unreachable");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Permission checks don't apply to root; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (_stdout, stderr, success) = run_canopy(site.path(), &[]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "run completes despite the unreadable directory");
    assert!(
        stderr.contains("error reading directory"),
        "diagnostic line emitted: {}",
        stderr
    );

    let output = read_output(site.path());
    assert!(output.contains("📁 locked"), "the directory itself renders");
    assert!(
        output.contains("<li class=\"error\">Error reading directory</li>"),
        "error placeholder in place of its children: {}",
        output
    );
    assert!(!output.contains("hidden.md"), "unreachable children absent");
    assert!(
        output.contains("file.md"),
        "siblings at the same level still render fully"
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_root_still_produces_error_page() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let site = TestSite::new();
    site.add_file("a.md", "# a");

    // Write+execute without read: listing fails, writing the page succeeds.
    fs::set_permissions(site.path(), fs::Permissions::from_mode(0o333)).unwrap();
    if fs::read_dir(site.path()).is_ok() {
        fs::set_permissions(site.path(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (_stdout, stderr, success) = run_canopy(site.path(), &[]);

    fs::set_permissions(site.path(), fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success);
    assert!(stderr.contains("error reading directory"), "{}", stderr);

    let output = read_output(site.path());
    assert!(
        output.contains("<li class=\"error\">Error reading directory</li>"),
        "root failure renders the single error placeholder: {}",
        output
    );
    assert!(!output.contains("a.md"), "no tree content was readable");
}

#[test]
fn test_missing_root_reports_and_fails() {
    let site = TestSite::new();

    let (_stdout, stderr, success) = run_canopy(site.path(), &["does-not-exist"]);
    assert!(!success, "nothing could be written");
    assert!(
        stderr.contains("error reading directory"),
        "walk failure reported: {}",
        stderr
    );
    assert!(
        stderr.contains("error writing"),
        "write failure reported: {}",
        stderr
    );
}

#[test]
fn test_unwritable_output_reports_and_fails() {
    let site = TestSite::new();
    site.add_file("a.md", "# a");
    site.add_dir("index.html.d");

    // Target an output path that is an existing directory.
    let (_stdout, stderr, success) = run_canopy(site.path(), &["-o", "index.html.d"]);
    assert!(!success);
    assert!(
        stderr.contains("error writing"),
        "write failure reported: {}",
        stderr
    );
}

#[test]
fn test_dotfiles_are_listed() {
    let site = TestSite::new();
    site.add_file(".gitignore", "target/");

    let (_stdout, _stderr, success) = run_canopy(site.path(), &[]);
    assert!(success);

    let output = read_output(site.path());
    assert!(
        output.contains(">.gitignore</a>"),
        "dotfiles are not ignored by default: {}",
        output
    );
}
