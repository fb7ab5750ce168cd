//! Single-slot transient notifications.
//!
//! Lifecycle of one notification: created (hidden), `show` class on the next
//! tick, `fade-out` class after its ttl, removed after the fade. A new
//! notification removes the current one immediately; timers scheduled for the
//! old one still fire but produce no mutations.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::config::Config;
use crate::consts::{NOTIFICATION_CLASS, NOTIFICATION_FADE_CLASS, NOTIFICATION_SHOW_CLASS};
use crate::dom::{Mutation, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Element id of this notification.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("notification-{}", self.0)
    }

    #[must_use]
    pub fn target(self) -> Target {
        Target::Id(self.element_id())
    }
}

/// What the host must do for a freshly shown notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Shown {
    pub id: NotificationId,
    /// Remove the previous notification and create the new one.
    pub mutations: Vec<Mutation>,
    /// Delay before [`Notifier::begin_fade`].
    pub ttl_ms: u32,
    /// Delay after the fade starts before [`Notifier::finish`].
    pub fade_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Notifier {
    ttl_ms: u32,
    fade_ms: u32,
    seq: u64,
    current: Option<NotificationId>,
}

impl Notifier {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            ttl_ms: config.notification_ttl_ms,
            fade_ms: config.notification_fade_ms,
            seq: 0,
            current: None,
        }
    }

    /// Show `message` for the configured ttl.
    pub fn show(&mut self, message: &str) -> Shown {
        self.show_for(message, self.ttl_ms)
    }

    /// Show `message` for `ttl_ms`, discarding any notification on screen.
    pub fn show_for(&mut self, message: &str, ttl_ms: u32) -> Shown {
        let mut mutations = self.dismiss();
        self.seq += 1;
        let id = NotificationId(self.seq);
        mutations.push(Mutation::CreateElement {
            id: id.element_id(),
            tag: "div".to_owned(),
            class: NOTIFICATION_CLASS.to_owned(),
            text: message.to_owned(),
            attributes: vec![
                ("role".to_owned(), "status".to_owned()),
                ("aria-live".to_owned(), "polite".to_owned()),
            ],
            parent: Target::Body,
        });
        self.current = Some(id);
        Shown { id, mutations, ttl_ms, fade_ms: self.fade_ms }
    }

    /// Make `id` visible; no-op once superseded.
    #[must_use]
    pub fn reveal(&self, id: NotificationId) -> Vec<Mutation> {
        self.if_current(id, || Mutation::add_class(id.target(), NOTIFICATION_SHOW_CLASS))
    }

    /// Start fading `id` out; no-op once superseded.
    #[must_use]
    pub fn begin_fade(&self, id: NotificationId) -> Vec<Mutation> {
        self.if_current(id, || Mutation::add_class(id.target(), NOTIFICATION_FADE_CLASS))
    }

    /// Remove `id`; no-op once superseded or already removed.
    pub fn finish(&mut self, id: NotificationId) -> Vec<Mutation> {
        if self.current != Some(id) {
            return Vec::new();
        }
        self.dismiss()
    }

    /// Remove whatever notification is on screen.
    pub fn dismiss(&mut self) -> Vec<Mutation> {
        self.current
            .take()
            .map(|id| vec![Mutation::RemoveElement { target: id.target() }])
            .unwrap_or_default()
    }

    fn if_current(&self, id: NotificationId, make: impl FnOnce() -> Mutation) -> Vec<Mutation> {
        if self.current == Some(id) { vec![make()] } else { Vec::new() }
    }
}
