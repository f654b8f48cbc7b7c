use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_markdown2html"))
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "markdown2html-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn converts_input_file_to_output_file() {
    let dir = scratch_dir("convert");
    let input = dir.join("README.md");
    let output = dir.join("README.html");
    fs::write(
        &input,
        "# Title\n\n- one\n- two\n\nSome **bold** text\n[[hello]]\n",
    )
    .unwrap();

    let status = bin().arg(&input).arg(&output).status().unwrap();
    assert!(status.success());

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(
        html,
        "<h1>Title</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n\
         <p>Some <b>bold</b> text</p>\n<p>5d41402abc4b2a76b9719d911017c592</p>"
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn empty_input_writes_empty_output() {
    let dir = scratch_dir("empty");
    let input = dir.join("empty.md");
    let output = dir.join("nested").join("empty.html");
    fs::write(&input, "").unwrap();

    let status = bin().arg(&input).arg(&output).status().unwrap();
    assert!(status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn extra_arguments_are_ignored() {
    let dir = scratch_dir("extra");
    let input = dir.join("in.md");
    let output = dir.join("out.html");
    fs::write(&input, "hello __world__\n").unwrap();

    let status = bin()
        .arg(&input)
        .arg(&output)
        .arg("extra")
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<p>hello <em>world</em></p>"
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_arguments_print_usage() {
    let out = bin().arg("only-one.md").output().unwrap();
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("markdown2html README.md README.html"));
}

#[test]
fn missing_input_file_is_reported() {
    let dir = scratch_dir("missing");
    let input = dir.join("nope.md");
    let output = dir.join("nope.html");

    let out = bin().arg(&input).arg(&output).output().unwrap();
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(&format!("Missing {}", input.display())));
    assert!(!output.exists());

    fs::remove_dir_all(&dir).unwrap();
}
