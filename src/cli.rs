use clap::{crate_version, Arg, Command};

fn config_arg() -> Arg {
    Arg::new("config").long("config").value_name("JSON").help("settings as a JSON string")
        .required(false)
        .long_help("JSON object with optional sections, e.g. {\"tokenizer\":{\"address\":2049},\"renumber\":{\"first\":10,\"step\":10}}")
}

fn num_arg(name: &'static str,short: char,help: &'static str) -> Arg {
    Arg::new(name).short(short).long(name).value_name("NUM").help(help).required(false)
}

pub fn build_cli() -> Command {
    let long_help = "a2bas is always invoked with exactly one of several subcommands.
The subcommands are designed to function as nodes in a pipeline,
reading source from stdin and writing to stdout.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
show tokens:           `a2bas lex < prog.bas`
tokenize to file:      `a2bas tokenize -a 2049 < prog.bas > prog.atok`
renumber:              `a2bas renumber -f 100 -s 10 < prog.bas`";

    let mut main_cmd = Command::new("a2bas")
        .about("Lexes, tokenizes, and transforms Applesoft BASIC.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("lex")
        .about("read from stdin, write one token per line to stdout"));
    main_cmd = main_cmd.subcommand(Command::new("tokenize")
        .visible_alias("tok")
        .arg(Arg::new("addr").short('a').long("addr").value_name("ADDRESS")
            .help("address of tokenized code, decimal or hex (0x801 or $801)")
            .required(false))
        .arg(config_arg())
        .about("read from stdin, tokenize, write to stdout"));
    main_cmd = main_cmd.subcommand(Command::new("renumber")
        .arg(num_arg("beg",'b',"lowest number to renumber"))
        .arg(num_arg("end",'e',"highest number to renumber plus 1"))
        .arg(num_arg("first",'f',"first number"))
        .arg(num_arg("step",'s',"step between numbers"))
        .arg(config_arg())
        .about("renumber BASIC program lines"));
    main_cmd = main_cmd.subcommand(Command::new("list")
        .arg(config_arg())
        .about("read from stdin, write normalized listing to stdout"));
    main_cmd = main_cmd.subcommand(Command::new("completions")
        .arg(Arg::new("shell").short('s').long("shell").value_name("SHELL").help("shell type")
            .value_parser(["bash","elv","fish","ps1","zsh"])
            .required(true))
        .about("write completions script to stdout"));
    main_cmd
}
