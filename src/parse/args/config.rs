use crate::config::Config;
use std::iter::Peekable;

pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg?.as_str() {
        "-h" | "--help" => Some(Config::Help),
        "-V" | "--version" => Some(Config::Version),
        "-v" => Some(Config::Verbose),
        "-d" => Some(Config::DryRun),
        "-t" => Some(Config::Trace),
        "--twice" => Some(Config::Twice),
        "--copy" => Some(Config::Copy),
        _ => None, // 遇到未知参数，停止解析（由调用者处理）
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;

    #[test]
    fn test_parse_configs() {
        let mut args = build_args("-v -t --twice of 1");
        assert_eq!(parse_configs(&mut args), vec![Config::Verbose, Config::Trace, Config::Twice]);
        assert_eq!(args.next(), Some("of".to_string()));

        let mut args = build_args("-d --copy -h -V");
        assert_eq!(parse_configs(&mut args), vec![Config::DryRun, Config::Copy, Config::Help, Config::Version]);
        assert!(args.next().is_none());

        let mut args = build_args("-x -v");
        assert!(parse_configs(&mut args).is_empty());
        assert_eq!(args.next(), Some("-x".to_string()));
    }
}
