//! Scoped listener registration for a mounted reader
//!
//! A [`MountedReader`] owns every listener and the scroll lock it acquires.
//! Dropping it releases them, so nothing outlives the mount.

use super::controller::ReaderController;
use super::input::{ClickZone, Key, NavCommand};
use std::ops::Deref;

/// Where a key listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// Arrow-key navigation, live for the whole mount
    WindowKeydown,
    /// Escape handling, live while the about overlay is open
    DocumentKeydown,
}

/// Handle returned by [`EventHost::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The environment a reader is mounted into
pub trait EventHost {
    fn register(&mut self, target: ListenerTarget) -> ListenerId;

    fn unregister(&mut self, id: ListenerId);

    fn set_scroll_locked(&mut self, locked: bool);
}

impl<H: EventHost + ?Sized> EventHost for &mut H {
    fn register(&mut self, target: ListenerTarget) -> ListenerId {
        (**self).register(target)
    }

    fn unregister(&mut self, id: ListenerId) {
        (**self).unregister(id)
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        (**self).set_scroll_locked(locked)
    }
}

/// A controller bound to a host for the lifetime of a mount
pub struct MountedReader<'a, H: EventHost> {
    controller: ReaderController<'a>,
    host: H,
    keyboard: Option<ListenerId>,
    escape: Option<ListenerId>,
}

impl<'a, H: EventHost> MountedReader<'a, H> {
    /// Register the window keyboard listener and take over the controller
    pub fn mount(controller: ReaderController<'a>, mut host: H) -> Self {
        let keyboard = host.register(ListenerTarget::WindowKeydown);
        tracing::debug!(?keyboard, "Reader mounted");
        let mut mounted = Self {
            controller,
            host,
            keyboard: Some(keyboard),
            escape: None,
        };
        mounted.sync_overlay();
        mounted
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn key(&mut self, key: Key) -> Option<NavCommand> {
        let command = self.controller.handle_key(key);
        self.sync_overlay();
        command
    }

    pub fn click(&mut self, x: f64, width: f64) -> ClickZone {
        self.controller.handle_click(x, width)
    }

    pub fn apply(&mut self, command: NavCommand) -> bool {
        let changed = self.controller.apply(command);
        self.sync_overlay();
        changed
    }

    pub fn go_next(&mut self) -> bool {
        self.controller.go_next()
    }

    pub fn go_previous(&mut self) -> bool {
        self.controller.go_previous()
    }

    pub fn go_to_index(&mut self, index: usize) {
        self.controller.go_to_index(index)
    }

    pub fn open_about(&mut self) {
        self.controller.open_about();
        self.sync_overlay();
    }

    pub fn close_about(&mut self) {
        self.controller.close_about();
        self.sync_overlay();
    }

    /// Release everything now rather than at end of scope
    pub fn unmount(self) {}

    /// Make the escape listener and scroll lock follow the overlay state
    fn sync_overlay(&mut self) {
        match (self.controller.about_open(), self.escape) {
            (true, None) => {
                let id = self.host.register(ListenerTarget::DocumentKeydown);
                self.host.set_scroll_locked(true);
                self.escape = Some(id);
                tracing::debug!(?id, "About overlay opened");
            }
            (false, Some(id)) => {
                self.release_overlay(id);
                tracing::debug!(?id, "About overlay closed");
            }
            _ => {}
        }
    }

    fn release_overlay(&mut self, id: ListenerId) {
        self.host.unregister(id);
        self.host.set_scroll_locked(false);
        self.escape = None;
    }
}

impl<'a, H: EventHost> Deref for MountedReader<'a, H> {
    type Target = ReaderController<'a>;

    fn deref(&self) -> &Self::Target {
        &self.controller
    }
}

impl<H: EventHost> Drop for MountedReader<'_, H> {
    fn drop(&mut self) {
        if let Some(id) = self.escape {
            self.release_overlay(id);
        }
        if let Some(id) = self.keyboard.take() {
            self.host.unregister(id);
        }
        tracing::debug!("Reader unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::little_lost_note;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingHost {
        next_id: u64,
        live: HashMap<ListenerId, ListenerTarget>,
        scroll_locked: bool,
        lock_changes: usize,
    }

    impl EventHost for RecordingHost {
        fn register(&mut self, target: ListenerTarget) -> ListenerId {
            self.next_id += 1;
            let id = ListenerId(self.next_id);
            self.live.insert(id, target);
            id
        }

        fn unregister(&mut self, id: ListenerId) {
            assert!(self.live.remove(&id).is_some(), "double release of {id:?}");
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.scroll_locked = locked;
            self.lock_changes += 1;
        }
    }

    fn targets(host: &RecordingHost) -> Vec<ListenerTarget> {
        let mut targets: Vec<_> = host.live.values().copied().collect();
        targets.sort_by_key(|t| *t == ListenerTarget::DocumentKeydown);
        targets
    }

    #[test]
    fn test_mount_registers_keyboard_listener() {
        let mut host = RecordingHost::default();
        {
            let reader = ReaderController::new(little_lost_note()).unwrap();
            let mounted = MountedReader::mount(reader, &mut host);
            assert_eq!(targets(mounted.host()), vec![ListenerTarget::WindowKeydown]);
        }
        assert!(host.live.is_empty());
        assert!(!host.scroll_locked);
    }

    #[test]
    fn test_overlay_locks_scroll_and_escape_releases() {
        let mut host = RecordingHost::default();
        {
            let reader = ReaderController::new(little_lost_note()).unwrap();
            let mut mounted = MountedReader::mount(reader, &mut host);
            mounted.open_about();
            assert!(mounted.host().scroll_locked);
            assert_eq!(
                targets(mounted.host()),
                vec![ListenerTarget::WindowKeydown, ListenerTarget::DocumentKeydown]
            );

            assert_eq!(mounted.key(Key::Escape), Some(NavCommand::CloseAbout));
            assert!(!mounted.host().scroll_locked);
            assert_eq!(targets(mounted.host()), vec![ListenerTarget::WindowKeydown]);
        }
        assert!(host.live.is_empty());
    }

    #[test]
    fn test_drop_while_overlay_open_releases_everything() {
        let mut host = RecordingHost::default();
        {
            let reader = ReaderController::new(little_lost_note()).unwrap();
            let mut mounted = MountedReader::mount(reader, &mut host);
            mounted.open_about();
            mounted.open_about();
            mounted.key(Key::ArrowRight);
            assert_eq!(mounted.index(), 1);
            mounted.unmount();
        }
        assert!(host.live.is_empty());
        assert!(!host.scroll_locked);
        assert_eq!(host.lock_changes, 2);
    }

    #[test]
    fn test_close_command_releases_overlay() {
        let mut host = RecordingHost::default();
        {
            let reader = ReaderController::new(little_lost_note()).unwrap();
            let mut mounted = MountedReader::mount(reader, &mut host);
            mounted.open_about();
            assert!(mounted.apply(NavCommand::CloseAbout));
            assert!(!mounted.about_open());
            assert!(!mounted.host().scroll_locked);
            assert_eq!(targets(mounted.host()), vec![ListenerTarget::WindowKeydown]);

            mounted.open_about();
            mounted.close_about();
            assert!(!mounted.host().scroll_locked);
            assert_eq!(mounted.host().live.len(), 1);
        }
        assert!(host.live.is_empty());
    }

    #[test]
    fn test_navigation_keeps_overlay_listeners() {
        let mut host = RecordingHost::default();
        let reader = ReaderController::new(little_lost_note()).unwrap();
        let mut mounted = MountedReader::mount(reader, &mut host);
        mounted.open_about();
        assert!(mounted.go_next());
        mounted.go_to_index(1_000);
        assert_eq!(mounted.index(), mounted.page_count() - 1);
        assert!(mounted.go_previous());
        assert!(mounted.host().scroll_locked);
        assert_eq!(mounted.host().live.len(), 2);
    }

    #[test]
    fn test_controller_opened_before_mount() {
        let mut host = RecordingHost::default();
        let mut reader = ReaderController::new(little_lost_note()).unwrap();
        reader.open_about();
        let mounted = MountedReader::mount(reader, &mut host);
        assert!(mounted.host().scroll_locked);
        drop(mounted);
        assert!(host.live.is_empty());
    }
}
