use arch::Tables;
use hackasm::{msg, output, util, Error, Translation, TranslationContext};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file [default: input with .hack extension]
    #[clap(short, long)]
    output: Option<String>,

    /// Directory with Symbols.txt, dest.txt, comp.txt and jump.txt
    #[clap(short, long, conflicts_with = "config")]
    tables: Option<String>,

    /// YAML file with all four lookup tables
    #[clap(short, long)]
    config: Option<String>,

    /// Write the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Dump listing and symbol table
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    println!("1. Read Files and Parse Lines");
    let tables = match (&args.tables, &args.config) {
        (Some(dir), _) => {
            println!("  < {}/", dir);
            Tables::load_dir(dir).map_err(Error::from)
        }
        (None, Some(path)) => {
            println!("  < {}", path);
            Tables::load_yaml(path).map_err(Error::from)
        }
        (None, None) => Ok(arch::HACK.clone()),
    }
    .unwrap_or_else(|err| fail(&err, &args.input, &[]));

    println!("  < {}", args.input);
    let source =
        output::read_source(&args.input).unwrap_or_else(|err| fail(&err, &args.input, &[]));

    println!("2. Resolve Symbols & Generate Binary");
    let mut context = TranslationContext::new(&tables);
    let result = hackasm::run(&source, &tables, &mut context);
    msg::dump(context.msgs(), &args.input, &source);
    let (lines, words) = result.unwrap_or_else(|err| fail(&err, &args.input, &source));
    let translation = Translation {
        context,
        lines,
        words,
    };

    let out = args
        .output
        .clone()
        .unwrap_or_else(|| output::default_output(&args.input).display().to_string());
    println!("  > {}", out);
    output::commit(&out, &translation.words).unwrap_or_else(|err| fail(&err, &out, &[]));

    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        output::write_symbols(path, &translation.context.symbols)
            .unwrap_or_else(|err| fail(&err, path, &[]));
    }

    if args.dump {
        util::print_dump(&args.input, &source, &translation);
    }
}

fn fail(err: &Error, file: &str, source: &[String]) -> ! {
    err.print_diag(file, source);
    std::process::exit(1)
}
