mod common;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use mjk::options::BuildOptions;
use mjk::paths::{RootKind, RootSet, resolve_roots};
use mjk::pipeline::{discover_sources, run_pass};
use mjk::snapshot::Snapshot;
use serde_json::{Value, json};

type TestResult = Result<(), Box<dyn Error>>;

struct Project {
    _tmp: tempfile::TempDir,
    pub root: PathBuf,
    pub src: PathBuf,
    pub dist: PathBuf,
}

fn project() -> Result<Project, Box<dyn Error>> {
    let tmp = tempfile::tempdir()?;
    let root = fs::canonicalize(tmp.path())?;
    let src = root.join("src");
    fs::create_dir(&src)?;
    Ok(Project {
        dist: root.join("dist"),
        root,
        src,
        _tmp: tmp,
    })
}

fn snapshot(opts: &BuildOptions, data: Value) -> Snapshot {
    Snapshot {
        source_roots: resolve_roots(&opts.inputs, RootKind::Source),
        template_roots: resolve_roots(&opts.template_patterns, RootKind::Template),
        data,
    }
}

fn njk_pattern(project: &Project) -> String {
    project.src.join("**/*.njk").to_string_lossy().into_owned()
}

#[test]
fn renders_a_template_against_the_data_context() -> TestResult {
    let p = project()?;
    fs::write(p.src.join("page.njk"), "<h1>{{ title }}</h1>")?;

    let opts = common::options(&p.root, vec![njk_pattern(&p)], vec![]);
    let snap = snapshot(&opts, json!({"title": "Hello"}));

    let files = discover_sources(&opts.inputs);
    assert_eq!(files.len(), 1);
    assert_eq!(run_pass(&files, &snap, &opts), (1, 0));

    let out = fs::read_to_string(p.dist.join("page.html"))?;
    assert_eq!(out, "<h1>Hello</h1>");
    Ok(())
}

#[test]
fn markdown_converts_before_rendering() -> TestResult {
    let p = project()?;
    fs::write(p.src.join("post.md"), "# {{ title }}\n\nbody text\n")?;

    let pattern = p.src.join("**/*.md").to_string_lossy().into_owned();
    let opts = common::options(&p.root, vec![pattern], vec![]);
    let snap = snapshot(&opts, json!({"title": "Post"}));

    assert_eq!(run_pass(&discover_sources(&opts.inputs), &snap, &opts), (1, 0));

    let out = fs::read_to_string(p.dist.join("post.html"))?;
    assert!(out.contains("<h1>Post</h1>"));
    assert!(out.contains("<p>body text</p>"));
    Ok(())
}

#[test]
fn a_broken_template_does_not_abort_the_batch() -> TestResult {
    let p = project()?;
    fs::write(p.src.join("aa_bad.njk"), "{{ unclosed")?;
    fs::write(p.src.join("zz_good.njk"), "fine")?;

    let opts = common::options(&p.root, vec![njk_pattern(&p)], vec![]);
    let snap = snapshot(&opts, json!({}));

    assert_eq!(run_pass(&discover_sources(&opts.inputs), &snap, &opts), (1, 1));
    assert!(!p.dist.join("aa_bad.html").exists());
    assert_eq!(fs::read_to_string(p.dist.join("zz_good.html"))?, "fine");
    Ok(())
}

#[test]
fn pages_extend_layouts_from_the_template_roots() -> TestResult {
    let p = project()?;
    let templates = p.root.join("templates");
    fs::create_dir(&templates)?;
    fs::write(
        templates.join("layout.njk"),
        "<main>{% block content %}{% endblock %}</main>",
    )?;
    fs::write(
        p.src.join("page.njk"),
        "{% extends \"layout.njk\" %}{% block content %}Hi {{ name }}{% endblock %}",
    )?;

    let opts = common::options(
        &p.root,
        vec![njk_pattern(&p)],
        vec![templates.to_string_lossy().into_owned()],
    );
    let snap = snapshot(&opts, json!({"name": "World"}));

    assert_eq!(run_pass(&discover_sources(&opts.inputs), &snap, &opts), (1, 0));
    assert_eq!(
        fs::read_to_string(p.dist.join("page.html"))?,
        "<main>Hi World</main>"
    );
    Ok(())
}

#[test]
fn block_option_wraps_page_content() -> TestResult {
    let p = project()?;
    fs::write(p.src.join("page.njk"), "Hello {{ name }}")?;

    let mut opts = common::options(&p.root, vec![njk_pattern(&p)], vec![]);
    opts.block = true;
    let snap = snapshot(&opts, json!({"name": "World"}));

    assert_eq!(run_pass(&discover_sources(&opts.inputs), &snap, &opts), (1, 0));
    assert_eq!(fs::read_to_string(p.dist.join("page.html"))?, "Hello World");
    Ok(())
}

#[test]
fn minification_shrinks_output_but_keeps_content() -> TestResult {
    let p = project()?;
    let source = "<html><body>\n    <p>Hi</p>\n    </body></html>";
    fs::write(p.src.join("page.njk"), source)?;

    let mut opts = common::options(&p.root, vec![njk_pattern(&p)], vec![]);
    opts.minify = true;
    let snap = snapshot(&opts, json!({}));

    assert_eq!(run_pass(&discover_sources(&opts.inputs), &snap, &opts), (1, 0));

    let out = fs::read_to_string(p.dist.join("page.html"))?;
    assert!(out.contains("<p>Hi</p>"));
    assert!(out.len() <= source.len());
    Ok(())
}

#[test]
fn rewrites_replace_existing_output() -> TestResult {
    let p = project()?;
    fs::write(p.src.join("page.njk"), "{{ title }}")?;

    let opts = common::options(&p.root, vec![njk_pattern(&p)], vec![]);
    let files = discover_sources(&opts.inputs);

    run_pass(&files, &snapshot(&opts, json!({"title": "one"})), &opts);
    assert_eq!(fs::read_to_string(p.dist.join("page.html"))?, "one");

    run_pass(&files, &snapshot(&opts, json!({"title": "two"})), &opts);
    assert_eq!(fs::read_to_string(p.dist.join("page.html"))?, "two");
    Ok(())
}

#[test]
fn clean_urls_produce_directory_pages() -> TestResult {
    let p = project()?;
    fs::write(p.src.join("about.njk"), "about")?;
    fs::write(p.src.join("index.njk"), "home")?;

    let mut opts = common::options(&p.root, vec![njk_pattern(&p)], vec![]);
    opts.clean = true;
    let snap = snapshot(&opts, json!({}));

    assert_eq!(run_pass(&discover_sources(&opts.inputs), &snap, &opts), (2, 0));
    assert!(p.dist.join("about/index.html").exists());
    assert!(p.dist.join("index.html").exists());
    Ok(())
}

#[test]
fn directory_arguments_are_walked_recursively() -> TestResult {
    let p = project()?;
    let nested = p.src.join("blog");
    fs::create_dir(&nested)?;
    fs::write(p.src.join("top.njk"), "top")?;
    fs::write(nested.join("post.md"), "# post")?;
    fs::write(nested.join("photo.jpg"), "not a page")?;

    let files = discover_sources(&[p.src.to_string_lossy().into_owned()]);
    assert_eq!(files.len(), 2);
    Ok(())
}
