use std::collections::{BTreeMap, HashSet};

use seqfmt::{ContainerFormatter, FormatError, FormatOptions, Param, Params, SeqExt};

fn main() -> Result<(), FormatError> {
    // print to stdout with the default options: {1, 2, 3}
    let mut formatter = ContainerFormatter::default();
    writeln!(formatter.print(&[1, 2, 3])?)?;

    // one element per line, in square brackets
    let options = FormatOptions::new("\n", "[\n", "\n]");
    writeln!(formatter.print_with(&vec!["alpha", "beta", "gamma"], &options)?)?;

    // override only the separator; the brackets keep their defaults
    let mut params = Params::default();
    params.insert(Param::Separator, " -> ".into());
    writeln!(formatter.print_params(&["parse", "check", "emit"], &params)?)?;

    // elements without a Display impl need a renderer
    let ages = BTreeMap::from([("ada", 36), ("alan", 41)]);
    let mut pairs = ContainerFormatter::default()
        .with_renderer(|(name, age): (&&str, &i32)| format!("{name}={age}"));
    writeln!(pairs.print(&ages)?)?;

    // Display view for format strings; set iteration order is whatever HashSet yields
    let tags: HashSet<_> = ["fast", "small"].into_iter().collect();
    println!("tags: {}", tags.iter().display_seq());
    Ok(())
}
