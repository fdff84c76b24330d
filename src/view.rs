//! 惰性视图阶段。
//!
//! 每个阶段都是一个迭代器适配器：调用方拉取下一个元素时，阶段才向上游拉取，
//! 因此谓词与映射的调用严格按元素交错进行，不会先全部过滤再全部映射。
//!
//! 上游与下游传递的元素都是`Result<Integer, RvErr>`，阶段在产生第一个错误后即结束，
//! 之后不再拉取上游，也不再调用任何函数。

use crate::Integer;
use crate::err::RvErr;
use std::iter::FusedIterator;

pub type EvalRes<T> = Result<T, RvErr>;

/// 过滤阶段：只放行谓词为真的元素，保持上游顺序。
pub struct Filter<I, F> {
    upstream: I,
    predicate: F,
    done: bool,
}

impl<I, F> Filter<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<bool>,
{
    pub fn new(upstream: I, predicate: F) -> Self {
        Filter { upstream, predicate, done: false }
    }
}

impl<I, F> Iterator for Filter<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<bool>,
{
    type Item = EvalRes<Integer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let value = match self.upstream.next()? {
                Ok(value) => value,
                Err(err) => return fault(&mut self.done, err),
            };
            match (self.predicate)(value) {
                Ok(true) => return Some(Ok(value)),
                Ok(false) => continue,
                Err(err) => return fault(&mut self.done, err),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done { (0, Some(0)) } else { (0, self.upstream.size_hint().1) }
    }
}

impl<I, F> FusedIterator for Filter<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<bool>,
{
}

/// 转换阶段：每个上游元素映射为一个输出元素。
pub struct Transform<I, F> {
    upstream: I,
    mapping: F,
    done: bool,
}

impl<I, F> Transform<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<Integer>,
{
    pub fn new(upstream: I, mapping: F) -> Self {
        Transform { upstream, mapping, done: false }
    }
}

impl<I, F> Iterator for Transform<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<Integer>,
{
    type Item = EvalRes<Integer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.upstream.next()? {
            Ok(value) => match (self.mapping)(value) {
                Ok(mapped) => Some(Ok(mapped)),
                Err(err) => fault(&mut self.done, err),
            },
            Err(err) => fault(&mut self.done, err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done { (0, Some(0)) } else { self.upstream.size_hint() }
    }
}

impl<I, F> FusedIterator for Transform<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<Integer>,
{
}

/// 持续放行元素，直到谓词首次为假。
///
/// 使谓词为假的元素不会输出，其后的元素也不会再被拉取。
pub struct TakeWhile<I, F> {
    upstream: I,
    predicate: F,
    done: bool,
}

impl<I, F> TakeWhile<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<bool>,
{
    pub fn new(upstream: I, predicate: F) -> Self {
        TakeWhile { upstream, predicate, done: false }
    }
}

impl<I, F> Iterator for TakeWhile<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<bool>,
{
    type Item = EvalRes<Integer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.upstream.next()? {
            Ok(value) => match (self.predicate)(value) {
                Ok(true) => Some(Ok(value)),
                Ok(false) => {
                    self.done = true;
                    None
                }
                Err(err) => fault(&mut self.done, err),
            },
            Err(err) => fault(&mut self.done, err),
        }
    }
}

impl<I, F> FusedIterator for TakeWhile<I, F>
where
    I: Iterator<Item = EvalRes<Integer>>,
    F: Fn(Integer) -> EvalRes<bool>,
{
}

/// 最多放行`remaining`个元素，达到数量后不再拉取上游。
pub struct Limit<I> {
    upstream: I,
    remaining: usize,
}

impl<I> Limit<I>
where
    I: Iterator<Item = EvalRes<Integer>>,
{
    pub fn new(upstream: I, count: usize) -> Self {
        Limit { upstream, remaining: count }
    }
}

impl<I> Iterator for Limit<I>
where
    I: Iterator<Item = EvalRes<Integer>>,
{
    type Item = EvalRes<Integer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.next()? {
            Ok(value) => {
                self.remaining -= 1;
                Some(Ok(value))
            }
            Err(err) => {
                self.remaining = 0;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.upstream.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I> FusedIterator for Limit<I> where I: Iterator<Item = EvalRes<Integer>> {}

#[inline]
fn fault(done: &mut bool, err: RvErr) -> Option<EvalRes<Integer>> {
    *done = true;
    Some(Err(err))
}
