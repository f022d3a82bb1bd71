// bdic-info: Describe a BDIC dictionary.
//
// Prints the header fields and the sizes of the affix tables.
//
// Usage:
//   bdic-info [-d DICT_PATH] [-v]

use bdic_cli::CliArgs;
use bdic_spell::affix::AffixKind;

fn main() {
    let args = CliArgs::from_env();

    if args.help {
        println!("bdic-info: Describe a BDIC dictionary.");
        println!();
        println!("Usage: bdic-info [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file, or directory containing *.bdic");
        println!("  -v, --verbose          Log dictionary loading to stderr");
        println!("  -h, --help             Print this help");
        return;
    }

    bdic_cli::init_logging(args.verbose);

    let (checker, path) =
        bdic_cli::load_checker(args.dict_path.as_deref()).unwrap_or_else(|e| bdic_cli::fatal(&e));
    let dict = checker
        .initialize()
        .unwrap_or_else(|e| bdic_cli::fatal(&e.to_string()));
    let header = dict.header();

    println!("file:          {}", path.display());
    println!("size:          {} bytes", dict.trie().data().len());
    println!(
        "signature:     {:#010x}{}",
        header.signature,
        if header.has_signature() { "" } else { " (unexpected)" }
    );
    println!("version:       {}.{}", header.major, header.minor);
    println!("affix offset:  {}", header.affix_offset);
    println!("trie root:     {}", header.trie_offset);
    println!("affix groups:  {}", dict.groups().len() - 1);

    let (prefixes, suffixes): (Vec<_>, Vec<_>) = dict
        .rule_sets()
        .iter()
        .flat_map(|set| set.rules())
        .partition(|rule| rule.kind() == AffixKind::Prefix);
    println!(
        "rule sets:     {} ({} prefix rules, {} suffix rules)",
        dict.rule_sets().len(),
        prefixes.len(),
        suffixes.len()
    );
    println!("replacements:  {}", dict.replace_rules().len());
}
