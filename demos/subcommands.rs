//! `RUST_LOG=argtree=trace cargo run --example subcommands -- -v server --dir . launch`

use argtree::{GetOpt, HandlerError, Mode, NodeId, Settings, Tree, UnknownMode};
use tracing_subscriber::EnvFilter;

fn launch(tree: &Tree, node: NodeId, text: &[String]) -> Result<(), HandlerError> {
    let server = tree.node(node).parent().ok_or("launch has no parent")?;
    let dir = tree.node(server).option("dir").ok_or("server has no --dir")?;
    println!("launching in {:?} with {:?}", tree.option(dir).value(), text);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::default().with_mode(Mode::Bundling).with_unknown(UnknownMode::Fail);
    let mut opt = GetOpt::new("rust-analyzer").with_settings(settings);
    let root = opt.root();
    let verbose = opt.bool(root, "verbose", false).alias("v").id();

    let server = opt.command(root, "server", "run the language server");
    opt.string(server, "dir", ".").alias("d");
    let launch_cmd = opt.command(server, "launch", "start the server");
    opt.set_handler(launch_cmd, launch);
    opt.command(server, "watch", "restart on changes");

    let stats = opt.command(root, "analysis-stats", "print statistics");
    opt.bool(stats, "parallel", false).alias("p");

    match opt.run(std::env::args().skip(1)) {
        Ok(parsed) => {
            let node = opt.tree().node(parsed.node);
            eprintln!("selected `{}`, verbose: {}", node.name(), opt.called(verbose));
            if std::env::var_os("ARGTREE_DUMP").is_some() {
                eprint!("{}", opt.tree().render(opt.root()));
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1)
        }
    }
}
