/// The operand stack: a growable stack of signed 32-bit integers.
///
/// Underflow is defined away rather than trapped: peeking an empty stack
/// yields 0, and popping more values than are present yields 0 for the
/// missing (deepest) ones. Growth is geometric, so pushes are amortized
/// O(1); running out of memory during growth aborts the process, which is
/// the only way a push can fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    items: Vec<i32>,
}

impl Stack {
    /// Creates an empty stack with a little capacity reserved up front.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(64),
        }
    }

    /// Pushes a value onto the stack.
    pub fn push(&mut self, value: i32) {
        self.items.push(value);
    }

    /// Returns the value on top of the stack (or 0) without removing it.
    pub fn peek(&self) -> i32 {
        self.items.last().copied().unwrap_or(0)
    }

    /// Removes and returns the top `N` values in bottom-to-top order.
    ///
    /// If the stack holds fewer than `N` values, the missing deepest
    /// slots read as 0 and the stack is left empty: popping two from a
    /// stack holding just `5` yields `[0, 5]`, not `[5, 0]`.
    pub fn pop_n<const N: usize>(&mut self) -> [i32; N] {
        let mut out = [0; N];
        let take = N.min(self.items.len());
        let split = self.items.len() - take;
        out[N - take..].copy_from_slice(&self.items[split..]);
        self.items.truncate(split);
        out
    }

    /// Number of values currently on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The stack contents, bottom to top.
    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pop_two_matches_the_last_two_pushes(
            values in prop::collection::vec(any::<i32>(), 2..64)
        ) {
            let mut stack = Stack::new();
            for &v in &values {
                stack.push(v);
            }
            let n = values.len();
            prop_assert_eq!(stack.pop_n::<2>(), [values[n - 2], values[n - 1]]);
            prop_assert_eq!(stack.as_slice(), &values[..n - 2]);
        }

        #[test]
        fn underflow_zero_fills_and_empties(
            values in prop::collection::vec(any::<i32>(), 0..4)
        ) {
            let mut stack = Stack::new();
            for &v in &values {
                stack.push(v);
            }
            let got = stack.pop_n::<4>();
            let mut want = [0i32; 4];
            want[4 - values.len()..].copy_from_slice(&values);
            prop_assert_eq!(got, want);
            prop_assert!(stack.is_empty());
        }

        #[test]
        fn peek_agrees_with_last_push(
            values in prop::collection::vec(any::<i32>(), 1..64)
        ) {
            let mut stack = Stack::new();
            for &v in &values {
                stack.push(v);
            }
            prop_assert_eq!(stack.peek(), values[values.len() - 1]);
            prop_assert_eq!(stack.len(), values.len());
        }
    }
}
