use argtree::GetOpt;

fn main() {
    let mut opt = GetOpt::new("hello");
    let root = opt.root();
    let emoji = opt.bool(root, "emoji", false).alias("e").id();

    let parsed = match opt.parse(std::env::args().skip(1)) {
        Ok(it) => it,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1)
        }
    };
    let name = match opt.tree().node(parsed.node).text() {
        [name] => name.clone(),
        _ => {
            eprintln!("usage: hello [-e] <name>");
            std::process::exit(1)
        }
    };
    let bang = if opt.value(emoji).as_bool() == Some(true) { "❣️" } else { "!" };
    println!("Hello {}{}", name, bang);
}
