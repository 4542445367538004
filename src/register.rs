//! Single-value registers with change notification.
//!
//! The display format and the theme are each held in a [`Register`]. A
//! register is owned by whoever creates it, so two apps (or two tests) never
//! see each other's state.

use tokio::sync::watch;

/// A single value with get/set and change notification.
#[derive(Debug)]
pub struct Register<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Register<T> {
    /// Creates a register holding `value`.
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self { tx }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Overwrites the value and returns the previous one.
    ///
    /// Subscribers are notified even when the new value equals the old one.
    pub fn set(&self, value: T) -> T {
        self.tx.send_replace(value)
    }

    /// Returns a receiver that observes every subsequent `set`.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Register<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_initial_value() {
        let register = Register::new(3);
        assert_eq!(register.get(), 3);
    }

    #[test]
    fn test_set_overwrites_and_returns_previous() {
        let register = Register::new("hex");
        assert_eq!(register.set("rgb"), "hex");
        assert_eq!(register.set("hsl"), "rgb");
        assert_eq!(register.get(), "hsl");
    }

    #[test]
    fn test_subscriber_sees_changes() {
        let register = Register::new(0);
        let mut rx = register.subscribe();
        assert!(!rx.has_changed().unwrap());

        register.set(1);
        register.set(2);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 2);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_registers_are_isolated() {
        let a = Register::new(1);
        let b = Register::new(1);
        a.set(5);
        assert_eq!(b.get(), 1);
    }
}
