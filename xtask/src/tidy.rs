use std::{
    fs,
    path::{Path, PathBuf},
};

fn library_sources() -> Vec<PathBuf> {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap().join("src");
    let mut res = Vec::new();
    for entry in fs::read_dir(src).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map_or(false, |it| it == "rs") {
            res.push(path);
        }
    }
    assert!(!res.is_empty());
    res
}

#[test]
fn library_does_not_print() {
    for path in library_sources() {
        let text = fs::read_to_string(&path).unwrap();
        for banned in ["println!", "eprintln!", "dbg!"] {
            assert!(!text.contains(banned), "{} uses `{}`", path.display(), banned);
        }
    }
}

#[test]
fn no_trailing_whitespace() {
    for path in library_sources() {
        let text = fs::read_to_string(&path).unwrap();
        for (i, line) in text.lines().enumerate() {
            assert!(!line.ends_with(' '), "trailing whitespace at {}:{}", path.display(), i + 1);
        }
    }
}
