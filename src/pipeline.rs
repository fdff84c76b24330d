use crate::Integer;
use crate::source::Source;
use crate::view::{EvalRes, Filter, Limit, TakeWhile, Transform};
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

pub type Predicate<'f> = Box<dyn Fn(Integer) -> EvalRes<bool> + 'f>;
pub type Mapping<'f> = Box<dyn Fn(Integer) -> EvalRes<Integer> + 'f>;

/// 流水线中的一个阶段。
pub enum Stage<'f> {
    Filter(Predicate<'f>),
    Transform(Mapping<'f>),
    TakeWhile(Predicate<'f>),
    Limit(usize),
}

impl Debug for Stage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Filter(_) => write!(f, "Filter"),
            Stage::Transform(_) => write!(f, "Transform"),
            Stage::TakeWhile(_) => write!(f, "TakeWhile"),
            Stage::Limit(count) => write!(f, "Limit({count})"),
        }
    }
}

/// 惰性视图流水线：数据源加上有序的阶段列表。
///
/// 构造后不再修改。每次[`Pipeline::traverse`]都得到一个全新的[`Cursor`]，
/// 重新执行全部上游计算，不缓存任何结果。
#[derive(Debug)]
pub struct Pipeline<'f> {
    source: Source,
    stages: Vec<Stage<'f>>,
}

impl<'f> Pipeline<'f> {
    pub fn new(source: impl Into<Source>) -> Self {
        Pipeline { source: source.into(), stages: Vec::new() }
    }

    pub fn filter(mut self, predicate: impl Fn(Integer) -> EvalRes<bool> + 'f) -> Self {
        self.stages.push(Stage::Filter(Box::new(predicate)));
        self
    }

    pub fn transform(mut self, mapping: impl Fn(Integer) -> EvalRes<Integer> + 'f) -> Self {
        self.stages.push(Stage::Transform(Box::new(mapping)));
        self
    }

    pub fn take_while(mut self, predicate: impl Fn(Integer) -> EvalRes<bool> + 'f) -> Self {
        self.stages.push(Stage::TakeWhile(Box::new(predicate)));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.stages.push(Stage::Limit(count));
        self
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn stages(&self) -> &[Stage<'f>] {
        &self.stages
    }

    /// 开始一次新的遍历。
    pub fn traverse(&self) -> Cursor<'_> {
        let mut iter: Box<dyn Iterator<Item = EvalRes<Integer>> + '_> = Box::new(self.source.iter().map(Ok));
        for stage in &self.stages {
            iter = match stage {
                Stage::Filter(predicate) => Box::new(Filter::new(iter, predicate.as_ref())),
                Stage::Transform(mapping) => Box::new(Transform::new(iter, mapping.as_ref())),
                Stage::TakeWhile(predicate) => Box::new(TakeWhile::new(iter, predicate.as_ref())),
                Stage::Limit(count) => Box::new(Limit::new(iter, *count)),
            };
        }
        Cursor { iter, faulted: false }
    }

    /// 立即完成一次遍历并缓存结果，遇到第一个错误即返回该错误，不返回部分结果。
    pub fn collect(&self) -> EvalRes<Vec<Integer>> {
        self.traverse().collect()
    }
}

/// 由数据源、谓词和映射构造`转换∘过滤∘数据源`流水线。
pub fn make_pipeline<'f>(
    source: impl Into<Source>, predicate: impl Fn(Integer) -> EvalRes<bool> + 'f,
    mapping: impl Fn(Integer) -> EvalRes<Integer> + 'f,
) -> Pipeline<'f> {
    Pipeline::new(source).filter(predicate).transform(mapping)
}

pub fn traverse<'p>(pipeline: &'p Pipeline<'_>) -> Cursor<'p> {
    pipeline.traverse()
}

/// 一次遍历的游标，独占自己的读取位置。
///
/// 产生错误后游标结束，不再产生任何元素。提前丢弃游标即放弃本次遍历。
pub struct Cursor<'p> {
    iter: Box<dyn Iterator<Item = EvalRes<Integer>> + 'p>,
    faulted: bool,
}

impl Iterator for Cursor<'_> {
    type Item = EvalRes<Integer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.faulted {
            return None;
        }
        let next = self.iter.next();
        if matches!(next, Some(Err(_))) {
            self.faulted = true;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.faulted { (0, Some(0)) } else { self.iter.size_hint() }
    }
}

impl FusedIterator for Cursor<'_> {}
