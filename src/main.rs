pub mod args;

use kemono_anim_tool::COUNTER;
use kemono_anim_tool::rules::RuleConfig;
use kemono_anim_tool::transforms::{self, TransformBuilder};
use kemono_anim_tool::utils::name_replacement;

fn get_rule_config(arg: &args::Arg) -> anyhow::Result<RuleConfig> {
    let mut config = match &arg.rules {
        Some(rules) => RuleConfig::load(rules)?,
        None => RuleConfig::default(),
    };
    if let args::Command::RenameBones(rename) = &arg.command {
        if let Some(table) = &rename.name_table {
            config.rename = name_replacement::read_csv(table)?;
        }
        if rename.reverse {
            config.rename = name_replacement::reverse_table(&config.rename);
        }
    }
    Ok(config)
}

/// Fills in the built-in file names for anything not given on the command line.
fn resolve_files<'a>(
    builder: &'a dyn TransformBuilder,
    command: &'a args::Command,
) -> (Vec<&'a str>, &'a str) {
    let inputs = command
        .inputs()
        .into_iter()
        .zip(builder.default_inputs().iter().copied())
        .map(|(given, default)| given.unwrap_or(default))
        .collect();
    let output = command.output().unwrap_or(builder.default_output());
    (inputs, output)
}

fn run(arg: &args::Arg) -> anyhow::Result<()> {
    let config = get_rule_config(arg)?;
    let builder = transforms::find_builder(arg.command.transform_type())?;
    let (inputs, output) = resolve_files(&**builder, &arg.command);
    eprintln!(
        "Running {} on {}",
        builder.transform_type(),
        inputs.join(", ")
    );
    builder.transform_files(&inputs, output, &config)?;
    eprintln!("Wrote {}", output);
    Ok(())
}

fn main() {
    let arg = args::parse_args();
    if arg.backtrace {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") };
    }
    let re = run(&arg);
    eprintln!("{}", *COUNTER);
    if let Err(e) = re {
        eprintln!("Error: {:#}", e);
        if arg.backtrace {
            eprintln!("Backtrace: {}", e.backtrace());
        }
        std::process::exit(1);
    }
}
