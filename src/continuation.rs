//! Stack of frames recording the procedure applications currently active.

use log::warn;

use std::fmt;


/// Non-empty stack; the root frame is never popped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Continuation<Frame>(Vec<Frame>);

impl<Frame> Continuation<Frame> {
    pub fn new(root: Frame) -> Self {
        Self(vec![root])
    }

    pub fn push(&mut self, frame: Frame) {
        self.0.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        if self.depth() == 1 {
            warn!("Ignoring pop of root continuation frame");
            return None;
        }
        self.0.pop()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Iterator from most-recent to least-recent frame.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.0.iter().rev()
    }
}


impl<Frame> fmt::Display for Continuation<Frame> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Cont depth {}]", self.depth())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_survives_pop() {
        let mut cont = Continuation::new("root");
        cont.push("a");
        cont.push("b");
        assert_eq!(cont.iter().cloned().collect::<Vec<_>>(), vec!["b", "a", "root"]);

        assert_eq!(cont.pop(), Some("b"));
        assert_eq!(cont.pop(), Some("a"));
        assert_eq!(cont.pop(), None);
        assert_eq!(cont.depth(), 1);
    }
}
