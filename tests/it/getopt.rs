use argtree::{Error, GetOpt, Mode, Settings, UnknownMode, Value};

#[test]
fn end_to_end() {
    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    let rootopt1 = opt.string(root, "rootopt1", "").id();
    let cmd1 = opt.command(root, "cmd1", "");
    let sub1cmd1 = opt.command(cmd1, "sub1cmd1", "");
    let sub1cmd1opt1 = opt.string(sub1cmd1, "sub1cmd1opt1", "").id();

    let parsed = opt.parse(["cmd1", "sub1cmd1", "--sub1cmd1opt1=hello"]).unwrap();
    assert_eq!(parsed.node, sub1cmd1);

    let data = opt.tree().option(sub1cmd1opt1);
    assert!(data.called);
    assert_eq!(data.used_alias, "sub1cmd1opt1");
    assert_eq!(data.value(), &Value::Str("hello".to_string()));
    assert!(!opt.called(rootopt1));
}

#[test]
fn bundled_flags() {
    let mut opt = GetOpt::new("ls").with_settings(Settings::default().with_mode(Mode::Bundling));
    let root = opt.root();
    let all = opt.bool(root, "all", false).alias("a").id();
    let long = opt.bool(root, "long", false).alias("l").id();
    let output = opt.string(root, "output", "-").alias("o").id();

    let parsed = opt.parse(["-alo=out.txt", "dir"]).unwrap();
    assert_eq!(opt.value(all).as_bool(), Some(true));
    assert_eq!(opt.value(long).as_bool(), Some(true));
    assert_eq!(opt.value(output).as_str(), Some("out.txt"));
    assert_eq!(opt.tree().option(output).used_alias, "o");
    assert_eq!(opt.tree().node(parsed.node).text(), ["dir"]);

    let mut opt = GetOpt::new("ls").with_settings(Settings::default().with_mode(Mode::Bundling));
    let root = opt.root();
    opt.bool(root, "all", false).alias("a");
    let output = opt.string(root, "output", "-").alias("o").id();
    let parsed = opt.parse(["-ao", "out.txt", "dir"]).unwrap();
    assert_eq!(opt.value(output).as_str(), Some("out.txt"));
    assert_eq!(opt.tree().node(parsed.node).text(), ["dir"]);
}

#[test]
fn single_dash() {
    let mut opt = GetOpt::new("cc").with_settings(Settings::default().with_mode(Mode::SingleDash));
    let root = opt.root();
    let output = opt.string(root, "output", "a.out").alias("o").id();
    let include = opt.string_slice(root, "include").alias("I").id();

    opt.parse(["-ohello", "-I/usr/include", "-Isrc", "main.c"]).unwrap();
    assert_eq!(opt.value(output).as_str(), Some("hello"));
    assert_eq!(
        opt.value(include).as_list(),
        Some(&["/usr/include".to_string(), "src".to_string()][..])
    );
    assert_eq!(opt.tree().node(root).text(), ["main.c"]);
}

#[test]
fn bool_and_int() {
    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    let verbose = opt.bool(root, "verbose", false).id();
    let color = opt.bool(root, "color", true).id();
    let jobs = opt.int(root, "jobs", 1).alias("j").id();

    opt.parse(["--verbose", "file", "--color", "-j", "4"]).unwrap();
    assert_eq!(opt.value(verbose).as_bool(), Some(true));
    assert_eq!(opt.value(color).as_bool(), Some(false));
    assert_eq!(opt.value(jobs).as_int(), Some(4));
    assert_eq!(opt.tree().node(root).text(), ["file"]);

    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    let color = opt.bool(root, "color", true).id();
    opt.parse(["--color=true"]).unwrap();
    assert_eq!(opt.value(color).as_bool(), Some(true));

    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    opt.int(root, "jobs", 1);
    let err = opt.parse(["--jobs", "x"]).unwrap_err();
    assert_eq!(err.to_string(), "can't parse `jobs` value \"x\", invalid digit found in string");
}

#[test]
fn repeated_arguments() {
    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    let file = opt.string_slice(root, "file").args(1, 3).id();
    opt.parse(["--file", "a", "b", "--file=c", "d", "e", "f", "g"]).unwrap();

    let expected: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|it| it.to_string()).collect();
    assert_eq!(opt.value(file).as_list(), Some(&expected[..]));
    assert_eq!(opt.tree().node(root).text(), ["f", "g"]);

    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    let file = opt.string_slice(root, "file").args(1, 3).id();
    let run = opt.command(root, "run", "");
    let parsed = opt.parse(["--file", "a", "run", "x"]).unwrap();
    assert_eq!(parsed.node, run);
    assert_eq!(opt.value(file).as_list(), Some(&["a".to_string()][..]));
    assert_eq!(opt.tree().node(run).text(), ["x"]);

    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    opt.string_slice(root, "pair").args(2, 2);
    let err = opt.parse(["--pair", "a", "--pair"]).unwrap_err();
    assert_eq!(err, Error::MissingArgument { option: "pair".to_string(), expected: 2, got: 1 });
}

#[test]
fn ambiguous_alias() {
    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    let verbose = opt.bool(root, "verbose", false).alias("v").id();
    let show = opt.command(root, "show", "");
    opt.string(show, "version", "").alias("v");

    let err = opt.parse(["show", "-v"]).unwrap_err();
    assert_eq!(
        err,
        Error::AmbiguousOption {
            token: "v".to_string(),
            candidates: vec!["verbose".to_string(), "version".to_string()],
        }
    );
    assert_eq!(err.to_string(), "ambiguous option `v`, matches: verbose, version");
    assert!(!opt.called(verbose));

    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    let verbose = opt.bool(root, "verbose", false).alias("v").id();
    let show = opt.command(root, "show", "");
    opt.string(show, "version", "").alias("v");
    opt.parse(["-v", "show"]).unwrap();
    assert!(opt.called(verbose));
}

#[test]
fn bundled_pass_keeps_only_unknown_letters() {
    let settings = Settings::default().with_mode(Mode::Bundling).with_unknown(UnknownMode::Pass);
    let mut opt = GetOpt::new("prog").with_settings(settings);
    let root = opt.root();
    let verbose = opt.bool(root, "verbose", false).alias("v").id();

    opt.parse(["-vx", "-xvy=1", "-yz=1", "file"]).unwrap();
    assert_eq!(opt.value(verbose).as_bool(), Some(true));
    assert_eq!(opt.tree().node(root).text(), ["-x", "-xy=1", "-yz=1", "file"]);
}

#[test]
fn declared_lone_dash() {
    let mut opt = GetOpt::new("cat");
    let root = opt.root();
    let stdin = opt.bool(root, "stdin", false).alias("-").id();

    opt.parse(["-"]).unwrap();
    let data = opt.tree().option(stdin);
    assert!(data.called);
    assert_eq!(data.used_alias, "-");
    assert_eq!(opt.value(stdin).as_bool(), Some(false));
    assert_eq!(opt.tree().node(root).option("-"), Some(stdin));
}

#[test]
fn terminator_stays_on_current_node() {
    let mut opt = GetOpt::new("prog");
    let root = opt.root();
    let flag = opt.bool(root, "flag", false).id();
    let cmd = opt.command(root, "cmd", "");
    let sub = opt.command(cmd, "sub", "");

    let parsed = opt.parse(["cmd", "--", "sub", "--flag", "-x"]).unwrap();
    assert_eq!(parsed.node, cmd);
    assert_eq!(opt.tree().node(cmd).text(), ["sub", "--flag", "-x"]);
    assert!(opt.tree().node(sub).text().is_empty());
    assert!(!opt.called(flag));
}
