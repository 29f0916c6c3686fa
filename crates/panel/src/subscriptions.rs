//! Per-panel subscription registry.
//!
//! Every callback a panel listens to is recorded here as
//! `(source, handler, id)`.  Controllers use [`Handler`]; the secondary-panel
//! coordinator brings its own handler type.  The whole set is acquired while enabling and
//! released in one go while disabling, so nothing can call back into a panel
//! that has been torn down.

use dock_config::{SettingKey, Settings};
use dock_core::{SignalKind, SignalSource, Signals, SubscriptionId, ZoneSide};

/// What the panel does when a subscription fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Recompute height, anchor and ghosts.
    SyncPanelPosition,
    UpdateStyle,
    /// Overview is showing or hiding.
    SyncOverview,
    /// A third party added a widget to a zone.
    AdoptWidget(ZoneSide),
    ShowDesktopPressed,
    ShowDesktopHover(bool),
    /// The user focused another app after a show-desktop.
    ForgetRestoreList,
    /// Taskbar or host dash icon size changed.
    SyncDashIconSize,
    /// A taskbar menu closed; the pointer may have left meanwhile.
    SyncHover,
    Setting(SettingKey),
}

impl From<SettingKey> for Handler {
    fn from(key: SettingKey) -> Self {
        Handler::Setting(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Host(SignalSource, SignalKind),
    Setting(SettingKey),
}

#[derive(Debug, Clone, Copy)]
pub struct Entry<H> {
    pub id:      SubscriptionId,
    pub source:  Source,
    pub handler: H,
}

/// Subscriptions of one owner, tagged with that owner's handler type.
#[derive(Debug)]
pub struct SubscriptionRegistry<H = Handler> {
    entries: Vec<Entry<H>>,
}

impl<H> Default for SubscriptionRegistry<H> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<H: Copy + PartialEq + From<SettingKey>> SubscriptionRegistry<H> {
    pub fn connect(
        &mut self,
        host: &mut impl Signals,
        source: SignalSource,
        kind: SignalKind,
        handler: H,
    ) -> SubscriptionId {
        let id = host.connect(source, kind);
        self.entries.push(Entry {
            id,
            source: Source::Host(source, kind),
            handler,
        });
        id
    }

    /// Subscribe to a settings key; the handler is `H::from(key)`.
    pub fn connect_setting(&mut self, settings: &mut Settings, key: SettingKey) -> SubscriptionId {
        let id = settings.connect(key);
        self.entries.push(Entry {
            id,
            source: Source::Setting(key),
            handler: H::from(key),
        });
        id
    }

    /// Handlers listening to `kind` on `source`, in connection order.
    pub fn handlers_for(&self, source: SignalSource, kind: SignalKind) -> Vec<H> {
        self.entries
            .iter()
            .filter(|e| e.source == Source::Host(source, kind))
            .map(|e| e.handler)
            .collect()
    }

    /// Handler of a settings notification, if the subscription is ours.
    pub fn setting_handler(&self, id: SubscriptionId) -> Option<H> {
        self.entries
            .iter()
            .find(|e| e.id == id && matches!(e.source, Source::Setting(_)))
            .map(|e| e.handler)
    }

    /// Drop every host subscription on `source`.
    pub fn release_source(&mut self, host: &mut impl Signals, source: SignalSource) {
        self.entries.retain(|e| match e.source {
            Source::Host(s, _) if s == source => {
                host.disconnect(e.id);
                false
            }
            _ => true,
        });
    }

    /// Drop host subscriptions carrying `handler`.
    pub fn release_handler(&mut self, host: &mut impl Signals, handler: H) {
        self.entries.retain(|e| {
            if e.handler == handler && matches!(e.source, Source::Host(..)) {
                host.disconnect(e.id);
                false
            } else {
                true
            }
        });
    }

    /// Disconnect everything.
    pub fn release(&mut self, host: &mut impl Signals, settings: &mut Settings) {
        for entry in self.entries.drain(..) {
            match entry.source {
                Source::Host(..) => host.disconnect(entry.id),
                Source::Setting(_) => {
                    settings.disconnect(entry.id);
                }
            }
        }
    }
}
