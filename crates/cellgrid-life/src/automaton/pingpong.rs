/// Two equally-typed slots whose roles alternate every step.
///
/// Slot `step % 2` is *current*, the other one is *next*. Swapping only bumps
/// the step counter; the slots themselves never move, so any per-slot state
/// (bind groups, labels) built once at creation stays valid.
#[derive(Debug, Clone)]
pub struct PingPong<T> {
    slots: [T; 2],
    step: u64,
}

impl<T> PingPong<T> {
    /// `first` is current at step 0.
    pub fn new(first: T, second: T) -> Self {
        Self {
            slots: [first, second],
            step: 0,
        }
    }

    /// Number of completed steps.
    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Index of the current slot.
    #[inline]
    pub fn parity(&self) -> usize {
        (self.step % 2) as usize
    }

    #[inline]
    pub fn current(&self) -> &T {
        &self.slots[self.parity()]
    }

    #[inline]
    pub fn next(&self) -> &T {
        &self.slots[1 - self.parity()]
    }

    /// Current slot for reading and next slot for writing, never aliased.
    pub fn split_mut(&mut self) -> (&T, &mut T) {
        let [a, b] = &mut self.slots;
        if self.step % 2 == 0 { (&*a, b) } else { (&*b, a) }
    }

    /// Advances the step counter; `next` becomes `current`.
    #[inline]
    pub fn swap(&mut self) {
        self.step += 1;
    }
}
