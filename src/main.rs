use crate::cond::Select;
use crate::config::Config;
use crate::input::Input;
use crate::mapping::Mapping;
use crate::op::Op;
use crate::output::Output;
use itertools::Itertools;
use rview::{Pipeline, RvErr};

mod cond;
mod config;
mod input;
mod mapping;
mod op;
mod output;
mod parse;
mod print;

fn main() {
    if let Err(err) = run() {
        println_err!("{err}");
        std::process::exit(err.exit_code() as i32);
    }
}

fn run() -> Result<(), RvErr> {
    let mut args = std::env::args().skip(1).peekable();
    let configs = parse::args::parse_configs(&mut args);
    if configs.contains(&Config::Help) {
        print_help(args.next().as_deref());
        return Ok(());
    }
    if configs.contains(&Config::Version) {
        println!("rv {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let (input, ops, output) = parse::args::parse(args)?;
    if configs.contains(&Config::Verbose) {
        println_info!("Input:");
        println!("    {:?}", input);
        println_info!("Op:");
        println!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
        println_info!("Output:");
        println!("    {:?}", output);
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let configs: &'static [Config] = configs.leak();
    let mut pipeline = Pipeline::new(input.try_into_source()?);
    for op in ops {
        pipeline = op.wrap(pipeline, configs);
    }
    if configs.contains(&Config::Copy) {
        // 只遍历一次，之后输出的都是副本
        let copied = pipeline.collect()?;
        output.handle(copied.iter().copied().map(Ok))?;
        println!();
        output.handle(copied.iter().copied().map(Ok))
    } else {
        output.handle(pipeline.traverse())?;
        if configs.contains(&Config::Twice) {
            println!();
            output.handle(pipeline.traverse())?;
        }
        Ok(())
    }
}

fn print_help(topic: Option<&str>) {
    match topic.map(str::to_ascii_lowercase).as_deref() {
        Some("source") | Some("input") => print_topic("Source", Input::all_help()),
        Some("op") => print_topic("Op", Op::all_help()),
        Some("cond") | Some("condition") => print_topic("Cond", Select::all_help()),
        Some("map") | Some("mapping") => print_topic("Mapping", Mapping::all_help()),
        Some("out") | Some("output") => print_topic("Output", Output::all_help()),
        _ => {
            println!("rv {}", env!("CARGO_PKG_VERSION"));
            println!("Usage: rv [<config>...] [<source>] [<op>...] [to out[ <per_line>]]");
            println!();
            println_info!("Config:");
            println!("    -h[ <topic>]  打印帮助，<topic>可选：source、op、cond、map、out。");
            println!("    -V            打印版本。");
            println!("    -v            打印解析后的流水线。");
            println!("    -d            仅解析，不执行。");
            println!("    -t            打印每次谓词和映射调用，例如`even(2)`。");
            println!("    --twice       遍历两次，每次都重新执行全部计算。");
            println!("    --copy        只遍历一次并复制结果，再输出两次副本。");
            print_topic("Source", Input::all_help());
            print_topic("Op", Op::all_help());
            print_topic("Output", Output::all_help());
        }
    }
}

fn print_topic(title: &str, helps: &[(&str, &str)]) {
    println_info!("{title}:");
    for line in helps.iter().flat_map(|(_, help)| help.lines()) {
        println!("    {line}");
    }
}
