use std::process::exit;

use argot::{parse, Console, Opt, OptSet, ParseContext, Printer, Style, UserInterface};

fn value_str(opt: &Opt) -> String {
    if opt.is_flag() {
        opt.is_set().to_string()
    } else {
        opt.value().unwrap_or("N/A").to_string()
    }
}

fn print_usage(opts: &OptSet, style: Style, console: &Console) {
    console.print("SYNOPSIS".to_string());
    console.print("  demo --foo foobar -z".to_string());
    console.print("  demo -f foobar -qz --lorem-ipsum".to_string());
    Printer::new(opts, style).print_help("demo", console);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let mut foo = Opt::arg("foo", "f", true, "the foo option. 'tis required.")
        .expect("Invalid option configuration");
    foo.set_arg_name("file");

    let mut opts = OptSet::new(vec![
        foo,
        Opt::arg("bar", "b", false, "the bar option. 'tis optional.")
            .expect("Invalid option configuration"),
        Opt::flag("baz", "z", "a useless flag").expect("Invalid option configuration"),
        // An option needs a long or a short name, but not both.
        Opt::flag("lorem-ipsum", "", "").expect("Invalid option configuration"),
        Opt::flag("", "q", "the quux flag").expect("Invalid option configuration"),
    ])
    .expect("Invalid option set configuration");

    let mut context = ParseContext::new(&args).collect_remaining();
    let console = Console::default();

    if args.len() == 1 {
        print_usage(&opts, Style::Posix, &console);
        return;
    }

    if let Err(error) = parse(&mut opts, &mut context) {
        console.print_error(error);
        exit(1);
    }

    for opt in opts.iter() {
        println!("{name}: <{value}>", name = opt.name(), value = value_str(opt));
    }

    if context.remaining_len() > 0 {
        let quoted: Vec<String> = context
            .remaining()
            .iter()
            .map(|token| format!("'{token}'"))
            .collect();
        println!("remaining args: {listing}", listing = quoted.join(", "));
    }
}
