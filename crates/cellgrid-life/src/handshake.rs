//! One-shot configuration handshake between a host and an embedded view.
//!
//! The child announces itself with [`Message::ChildReady`]; the parent answers
//! the first announcement with its payload and stops listening afterwards.

use std::fmt;

/// Wire text of [`Message::ChildReady`].
pub const CHILD_READY: &str = "child-ready";

#[derive(Debug, Clone, PartialEq)]
pub enum Message<T> {
    ChildReady,
    Payload(T),
}

impl<T> fmt::Display for Message<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ChildReady => f.write_str(CHILD_READY),
            Message::Payload(_) => f.write_str("payload"),
        }
    }
}

/// Parent side: holds the payload until a child asks for it.
#[derive(Debug, Clone)]
pub struct ParentLink<T> {
    data: T,
    listening: bool,
}

impl<T: Clone> ParentLink<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            listening: true,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Answers the first `ChildReady` with the payload, then deregisters.
    pub fn receive(&mut self, msg: &Message<T>) -> Option<Message<T>> {
        if !self.listening || !matches!(msg, Message::ChildReady) {
            return None;
        }
        self.listening = false;
        Some(Message::Payload(self.data.clone()))
    }
}

/// Child side: announces readiness and keeps the last payload received.
#[derive(Debug, Clone)]
pub struct ChildLink<T> {
    data: Option<T>,
}

impl<T> Default for ChildLink<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

impl<T> ChildLink<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announce(&self) -> Message<T> {
        Message::ChildReady
    }

    pub fn receive(&mut self, msg: Message<T>) {
        if let Message::Payload(data) = msg {
            self.data = Some(data);
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ready_gets_payload() {
        let mut parent = ParentLink::new(7u32);
        let child = ChildLink::<u32>::new();
        assert_eq!(parent.receive(&child.announce()), Some(Message::Payload(7)));
        assert!(!parent.is_listening());
    }

    #[test]
    fn parent_answers_only_once() {
        let mut parent = ParentLink::new("cfg");
        assert!(parent.receive(&Message::ChildReady).is_some());
        assert_eq!(parent.receive(&Message::ChildReady), None);
    }

    #[test]
    fn parent_ignores_other_messages() {
        let mut parent = ParentLink::new(1u8);
        assert_eq!(parent.receive(&Message::Payload(9)), None);
        assert!(parent.is_listening());
    }

    #[test]
    fn child_keeps_last_payload() {
        let mut child = ChildLink::new();
        assert_eq!(child.data(), None);
        child.receive(Message::Payload(1));
        child.receive(Message::ChildReady);
        child.receive(Message::Payload(2));
        assert_eq!(child.data(), Some(&2));
        assert_eq!(child.into_data(), Some(2));
    }

    #[test]
    fn ready_message_text() {
        assert_eq!(Message::<()>::ChildReady.to_string(), "child-ready");
    }
}
