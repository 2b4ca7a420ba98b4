#[cfg(test)]
mod tidy;

use std::{error::Error, time::Instant};

use xshell::{cmd, Shell};

fn main() -> Result<(), Box<dyn Error>> {
    let sh = Shell::new()?;

    cmd!(sh, "rustup toolchain install stable --no-self-update").run()?;
    let _e = sh.push_env("RUSTUP_TOOLCHAIN", "stable");
    cmd!(sh, "rustc --version").run()?;

    {
        let _s = section("BUILD");
        cmd!(sh, "cargo test --workspace --no-run").run()?;
    }

    {
        let _s = section("TEST");
        cmd!(sh, "cargo test --workspace -- --nocapture").run()?;
    }

    {
        let _s = section("EXAMPLES");
        cmd!(sh, "cargo run --example hello -- world").run()?;
        cmd!(sh, "cargo run --example subcommands -- -v server --dir . launch").run()?;
    }

    {
        let _s = section("PUBLISH");

        let pkgid = cmd!(sh, "cargo pkgid -p argtree").read()?;
        let version = pkgid_version(&pkgid)?;
        let tag = format!("v{version}");

        let current_branch = cmd!(sh, "git branch --show-current").read()?;
        let tag_exists =
            cmd!(sh, "git tag --list").read()?.split_ascii_whitespace().any(|it| it == tag);

        if current_branch == "master" && !tag_exists {
            cmd!(sh, "git tag v{version}").run()?;
            cmd!(sh, "cargo publish -p argtree").run()?;
            cmd!(sh, "git push --tags").run()?;
        }
    }

    Ok(())
}

fn pkgid_version(pkgid: &str) -> Result<&str, String> {
    match pkgid.rsplit_once('#') {
        Some((_, version)) => Ok(version.rsplit_once('@').map_or(version, |(_, it)| it)),
        None => Err(format!("no version in pkgid {pkgid:?}")),
    }
}

fn section(name: &'static str) -> impl Drop {
    println!("::group::{name}");
    let start = Instant::now();
    defer(move || {
        let elapsed = start.elapsed();
        eprintln!("{name}: {elapsed:.2?}");
        println!("::endgroup::");
    })
}

fn defer<F: FnOnce()>(f: F) -> impl Drop {
    struct D<F: FnOnce()>(Option<F>);
    impl<F: FnOnce()> Drop for D<F> {
        fn drop(&mut self) {
            if let Some(f) = self.0.take() {
                f()
            }
        }
    }
    D(Some(f))
}

#[test]
fn version_from_pkgid() {
    assert_eq!(pkgid_version("path+file:///src/argtree#0.1.0"), Ok("0.1.0"));
    assert_eq!(pkgid_version("path+file:///src/argtree#argtree@0.1.0"), Ok("0.1.0"));
    assert!(pkgid_version("argtree").is_err());
}
