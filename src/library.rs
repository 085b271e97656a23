use std::{
    iter::{self, FusedIterator},
    mem,
};

use num::{Num, Zero};

#[derive(Debug, Clone, Copy)]
enum State<T, const N: usize> {
    Begin,
    Buffered {
        buffer: [T; N],
        // Number of non-padded elements still in the buffer; each window
        // consumes one, so this is also the number of windows left in it.
        live: usize,
    },
    Done,
}

impl<T, const N: usize> State<T, N> {
    fn take(&mut self) -> Self {
        mem::replace(self, State::Done)
    }
}

/// An iterator over fixed-size windows of an underlying iterator, producing
/// one window per starting index. Windows that would run past the end of the
/// input are padded with zeros rather than omitted, so an input of k items
/// yields exactly k windows.
#[derive(Debug, Clone, Copy)]
pub struct PaddedWindows<I: Iterator, const N: usize> {
    iter: I,
    state: State<I::Item, N>,
}

impl<I: Iterator, const N: usize> Iterator for PaddedWindows<I, N>
where
    I::Item: Num + Clone,
{
    type Item = [I::Item; N];

    fn next(&mut self) -> Option<Self::Item> {
        let (buffer, live) = match self.state.take() {
            State::Begin => {
                let mut live = 0;
                let buffer = brownstone::build_iter(
                    (&mut self.iter)
                        .inspect(|_| live += 1)
                        .chain(iter::repeat_with(I::Item::zero)),
                );

                if live == 0 {
                    return None;
                }

                (buffer, live)
            }
            State::Buffered { buffer, live } => (buffer, live),
            State::Done => return None,
        };

        let incoming = self.iter.next();
        let live = match incoming {
            Some(_) => live,
            None => live - 1,
        };

        if live > 0 {
            self.state = State::Buffered {
                buffer: brownstone::build_iter(
                    buffer[1..]
                        .iter()
                        .cloned()
                        .chain(Some(incoming.unwrap_or_else(I::Item::zero))),
                ),
                live,
            };
        }

        Some(buffer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Begin => self.iter.size_hint(),
            State::Buffered { live, .. } => {
                let (min, max) = self.iter.size_hint();
                (
                    min.saturating_add(live),
                    max.and_then(|max| max.checked_add(live)),
                )
            }
            State::Done => (0, Some(0)),
        }
    }
}

impl<I: Iterator, const N: usize> FusedIterator for PaddedWindows<I, N> where I::Item: Num + Clone {}

impl<I: ExactSizeIterator, const N: usize> ExactSizeIterator for PaddedWindows<I, N>
where
    I::Item: Num + Clone,
{
    fn len(&self) -> usize {
        match self.state {
            State::Begin => self.iter.len(),
            State::Buffered { live, .. } => self.iter.len() + live,
            State::Done => 0,
        }
    }
}

pub trait IterExt: Iterator + Sized {
    fn padded_windows<const N: usize>(self) -> PaddedWindows<Self, N>
    where
        Self::Item: Num + Clone,
    {
        PaddedWindows {
            iter: self,
            state: State::Begin,
        }
    }
}

impl<I: Iterator> IterExt for I {}
