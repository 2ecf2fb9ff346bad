/// A stack for state that is pushed on every move and popped on undo. It is
/// seeded with a base entry that can never be popped.
#[derive(Clone, Debug)]
pub struct StateStack<T> {
    stack: Vec<T>,
}

impl<T: Clone> StateStack<T> {
    pub fn new(initial: T) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn with_capacity(initial: T, capacity: usize) -> Self {
        let mut stack = Vec::with_capacity(capacity + 1);
        stack.push(initial);
        Self { stack }
    }

    pub fn push(&mut self, value: T) {
        self.stack.push(value);
    }

    pub fn peek(&self) -> &T {
        self.stack.last().expect("StateStack should never be empty")
    }

    /// Pops the most recent entry.
    ///
    /// # Panics
    ///
    /// Panics if only the base entry is left.
    pub fn pop(&mut self) -> T {
        assert!(self.depth() > 0, "cannot pop the base entry of a StateStack");
        self.stack.pop().expect("StateStack should never be empty")
    }

    /// Number of entries pushed on top of the base entry.
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Entries above the base, oldest first.
    pub fn entries(&self) -> &[T] {
        &self.stack[1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = StateStack::new(0);
        assert_eq!(stack.depth(), 0);
        assert_eq!(*stack.peek(), 0);

        stack.push(1);
        stack.push(2);
        assert_eq!(stack.depth(), 2);
        assert_eq!(*stack.peek(), 2);
        assert_eq!(stack.entries(), &[1, 2]);

        assert_eq!(stack.pop(), 2);
        assert_eq!(stack.pop(), 1);
        assert_eq!(*stack.peek(), 0);
    }

    #[test]
    #[should_panic(expected = "base entry")]
    fn test_pop_base_panics() {
        let mut stack = StateStack::with_capacity("base", 4);
        stack.pop();
    }
}
