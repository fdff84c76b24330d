#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h[ <topic>]`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印流水线信息 `-v`
    Verbose,
    /// 仅解析，不执行 `-d`
    DryRun,
    /// 打印每次谓词和映射调用 `-t`
    Trace,
    /// 遍历两次，每次都重新执行全部计算 `--twice`
    Twice,
    /// 先完整复制结果，再输出两次副本 `--copy`
    Copy,
}

#[inline]
pub(crate) fn is_trace(configs: &[Config]) -> bool {
    configs.contains(&Config::Trace)
}
