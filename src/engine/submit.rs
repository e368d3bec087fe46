use std::cell::RefCell;
use std::rc::Rc;

/// Set of keys with a submission in progress.
///
/// Keys only need equality so DOM handles can be used directly.
#[derive(Debug)]
pub struct InFlight<K: PartialEq> {
    keys: Rc<RefCell<Vec<K>>>,
}

impl<K: PartialEq> Default for InFlight<K> {
    fn default() -> Self {
        Self {
            keys: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<K: PartialEq> Clone for InFlight<K> {
    fn clone(&self) -> Self {
        Self {
            keys: Rc::clone(&self.keys),
        }
    }
}

impl<K: PartialEq + Clone> InFlight<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `key`, or returns `None` while a ticket for it is still alive.
    pub fn try_acquire(&self, key: &K) -> Option<SubmitTicket<K>> {
        let mut keys = self.keys.borrow_mut();
        if keys.contains(key) {
            return None;
        }
        keys.push(key.clone());
        Some(SubmitTicket {
            keys: Rc::clone(&self.keys),
            key: key.clone(),
        })
    }

    pub fn is_busy(&self, key: &K) -> bool {
        self.keys.borrow().contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.borrow().is_empty()
    }
}

/// Releases its key when dropped, whichever way the submission ended.
#[derive(Debug)]
pub struct SubmitTicket<K: PartialEq> {
    keys: Rc<RefCell<Vec<K>>>,
    key: K,
}

impl<K: PartialEq> Drop for SubmitTicket<K> {
    fn drop(&mut self) {
        self.keys.borrow_mut().retain(|k| k != &self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_is_rejected_while_first_is_alive() {
        let forms = InFlight::new();
        let ticket = forms.try_acquire(&1);
        assert!(ticket.is_some());
        assert!(forms.try_acquire(&1).is_none());
        assert!(forms.is_busy(&1));
    }

    #[test]
    fn dropping_the_ticket_releases_the_key() {
        let forms = InFlight::new();
        let ticket = forms.try_acquire(&"contact");
        drop(ticket);
        assert!(!forms.is_busy(&"contact"));
        assert!(forms.try_acquire(&"contact").is_some());
    }

    #[test]
    fn keys_are_independent() {
        let forms = InFlight::new();
        let _a = forms.try_acquire(&1).unwrap();
        let _b = forms.try_acquire(&2).unwrap();
        assert_eq!(forms.len(), 2);
    }

    #[test]
    fn release_happens_on_early_return() {
        fn fails(forms: &InFlight<u8>) -> Result<(), &'static str> {
            let _ticket = forms.try_acquire(&7).ok_or("busy")?;
            Err("network")
        }

        let forms = InFlight::new();
        assert_eq!(fails(&forms), Err("network"));
        assert!(forms.is_empty());
    }
}
