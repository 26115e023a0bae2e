//! Lazy, possibly infinite streams of search results.

use std::ops::Deref;

/// A lazy sequence of alternative results.
///
/// `Suspended` streams are forced only when a consumer asks for the next
/// item, which lets a stream stand for an infinite search.
pub enum Stream<T> {
    Empty,
    Mature(T, Tail<T>),
    Suspended(Box<dyn FnOnce() -> Stream<T>>),
}

/// The rest of a stream after a realized head.
///
/// Dropping a tail unlinks the chain of mature nodes in a loop, so long
/// streams can be dropped without being consumed.
pub struct Tail<T>(Box<Stream<T>>);

impl<T> Tail<T> {
    pub fn new(stream: Stream<T>) -> Self {
        Tail(Box::new(stream))
    }

    pub fn into_inner(mut self) -> Stream<T> {
        std::mem::replace(&mut *self.0, Stream::Empty)
    }
}

impl<T> Deref for Tail<T> {
    type Target = Stream<T>;

    fn deref(&self) -> &Stream<T> {
        &self.0
    }
}

impl<T> Drop for Tail<T> {
    fn drop(&mut self) {
        let mut next = std::mem::replace(&mut *self.0, Stream::Empty);
        while let Stream::Mature(_head, tail) = next {
            next = tail.into_inner();
        }
    }
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Mature(a, Tail::new(d))
    }

    pub fn suspension(thunk: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspended(Box::new(thunk))
    }

    pub fn from_iter(iter: impl IntoIterator<Item = T>) -> Self {
        Stream::prepend(iter.into_iter().collect(), Stream::Empty)
    }

    /// Put `heads` in front of `tail`, keeping their order.
    fn prepend(heads: Vec<T>, tail: Stream<T>) -> Self {
        heads
            .into_iter()
            .rev()
            .fold(tail, |d, a| Stream::cons(a, d))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, Stream::Suspended(_))
    }

    /// Force suspensions until the stream is empty or has a head.
    pub fn realize(self) -> Stream<T> {
        let mut stream = self;
        while let Stream::Suspended(thunk) = stream {
            stream = thunk();
        }
        stream
    }

    /// Like `realize`, but gives up after forcing `max_steps` suspensions and
    /// returns the still-suspended remainder as `Err`.
    pub fn realize_within(self, max_steps: usize) -> Result<Stream<T>, Stream<T>> {
        let mut stream = self;
        let mut steps = 0;
        while let Stream::Suspended(thunk) = stream {
            if steps == max_steps {
                return Err(Stream::Suspended(thunk));
            }
            steps += 1;
            stream = thunk();
        }
        Ok(stream)
    }

    /// Realize at most `n` items into a finite stream.
    pub fn take(self, n: usize) -> Stream<T> {
        Stream::from_iter(self.into_iter().take(n))
    }
}

impl<T: 'static> Stream<T> {
    /// Interleave two streams of alternatives.
    ///
    /// Realized heads of `self` come first. When `self` is suspended, the
    /// result is a suspension that continues with `other` in front, so each
    /// forced step alternates between the two sides and an infinite `self`
    /// cannot starve `other`.
    pub fn merge(self, other: Stream<T>) -> Stream<T> {
        let mut heads = Vec::new();
        let mut rest = self;
        let tail = loop {
            match rest {
                Stream::Empty => break other,
                Stream::Mature(a, d) => {
                    heads.push(a);
                    rest = d.into_inner();
                }
                Stream::Suspended(thunk) => {
                    break Stream::suspension(move || other.merge(thunk()));
                }
            }
        };
        Stream::prepend(heads, tail)
    }

    /// Apply `goal` to every item and merge the resulting streams, in the
    /// order the items are produced.
    pub fn bind<G>(self, goal: G) -> Stream<T>
    where
        G: 'static + Clone + Fn(T) -> Stream<T>,
    {
        let mut heads = Vec::new();
        let mut rest = self;
        let mut result = loop {
            match rest {
                Stream::Empty => break Stream::Empty,
                Stream::Mature(a, d) => {
                    heads.push(a);
                    rest = d.into_inner();
                }
                Stream::Suspended(thunk) => {
                    let goal = goal.clone();
                    break Stream::suspension(move || thunk().bind(goal));
                }
            }
        };
        while let Some(a) = heads.pop() {
            result = goal(a).merge(result);
        }
        result
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        let (mut a, mut b) = (self, other);
        loop {
            match (a, b) {
                (Empty, Empty) => return true,
                (Mature(x, xs), Mature(y, ys)) if x == y => {
                    a = &**xs;
                    b = &**ys;
                }
                _ => return false,
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspended(_) => write!(f, "(...)"),
            Stream::Mature(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Mature(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspended(_) => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Single-pass iterator over the items of a stream.
pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.0, Stream::Empty).realize() {
            Stream::Mature(a, d) => {
                self.0 = d.into_inner();
                Some(a)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn naturals(from: u32) -> Stream<u32> {
        Stream::suspension(move || Stream::cons(from, naturals(from + 1)))
    }

    fn forever(x: u32) -> Stream<u32> {
        Stream::suspension(move || Stream::cons(x, forever(x)))
    }

    fn never() -> Stream<u32> {
        Stream::suspension(never)
    }

    #[test]
    fn realize_never_returns_a_suspension() {
        let s = Stream::suspension(|| Stream::suspension(|| Stream::singleton(1)));
        assert_eq!(s.realize(), Stream::singleton(1));
        assert!(!naturals(0).realize().is_suspended());
    }

    #[test]
    fn realize_within_stops_at_the_limit() {
        let s = never().realize_within(100);
        assert!(matches!(s, Err(ref rest) if rest.is_suspended()));
        let s = Stream::suspension(|| Stream::singleton(1)).realize_within(1);
        assert_eq!(s.ok(), Some(Stream::singleton(1)));
    }

    #[test]
    fn merging_empty_yields_the_other_stream() {
        let s = Stream::empty().merge(Stream::from_iter(vec![1, 2]));
        assert_eq!(s, Stream::from_iter(vec![1, 2]));
    }

    #[test]
    fn merge_keeps_realized_heads_first() {
        let s = Stream::from_iter(vec![1, 2]).merge(Stream::singleton(3));
        assert_eq!(s, Stream::from_iter(vec![1, 2, 3]));
    }

    #[test]
    fn merge_interleaves_suspended_streams() {
        let s = forever(1).merge(forever(2));
        assert_eq!(s.take(6), Stream::from_iter(vec![1, 2, 1, 2, 1, 2]));
    }

    #[test]
    fn infinite_left_side_does_not_starve_the_right() {
        let s = naturals(0).merge(Stream::suspension(|| Stream::singleton(100)));
        assert!(s.into_iter().take(10).any(|x| x == 100));
    }

    #[test]
    fn divergent_left_side_does_not_starve_the_right() {
        let s = never().merge(Stream::singleton(5));
        assert_eq!(s.into_iter().next(), Some(5));
    }

    #[test]
    fn bind_expands_each_item_in_order() {
        let s = Stream::from_iter(vec![1, 2, 3]).bind(|x| Stream::from_iter(vec![x, x * 10]));
        assert_eq!(s, Stream::from_iter(vec![1, 10, 2, 20, 3, 30]));
    }

    #[test]
    fn bind_of_empty_is_empty() {
        assert!(Stream::<u32>::empty().bind(Stream::singleton).is_empty());
    }

    #[test]
    fn bind_stays_lazy_on_suspensions() {
        let s = naturals(0).bind(|x| {
            if x % 2 == 0 {
                Stream::singleton(x)
            } else {
                Stream::empty()
            }
        });
        assert!(s.is_suspended());
        assert_eq!(s.take(3), Stream::from_iter(vec![0, 2, 4]));
    }

    #[test]
    fn long_mature_chains_do_not_exhaust_the_stack() {
        let n = 100_000;
        let s = Stream::from_iter(0..n).merge(Stream::singleton(n));
        let s = s.bind(Stream::singleton);
        assert_eq!(s.into_iter().count(), n as usize + 1);
    }

    #[test]
    fn long_streams_drop_without_being_consumed() {
        drop(Stream::from_iter(0..1_000_000u32));

        let mut iter = Stream::from_iter(0..1_000_000u32).into_iter();
        assert_eq!(iter.next(), Some(0));
        drop(iter);
    }

    #[test]
    fn take_realizes_a_finite_prefix() {
        assert_eq!(naturals(5).take(3), Stream::from_iter(vec![5, 6, 7]));
        assert_eq!(naturals(0).take(0), Stream::empty());
    }

    #[test]
    fn debug_shows_realized_prefix() {
        let s = Stream::cons(1, Stream::cons(2, never()));
        assert_eq!(format!("{:?}", s), "(1 2 ...)");
        assert_eq!(format!("{:?}", Stream::<u32>::empty()), "()");
    }
}
