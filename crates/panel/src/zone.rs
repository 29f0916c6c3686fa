use dock_core::{PanelId, Rect, Stage, WidgetId, ZoneSide};

/// An ordered run of widgets plus the box it was last allocated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Zone {
    pub children:   Vec<WidgetId>,
    pub allocation: Rect,
}

impl Zone {
    pub fn new(children: Vec<WidgetId>) -> Self {
        Self { children, allocation: Rect::ZERO }
    }

    pub fn contains(&self, widget: WidgetId) -> bool {
        self.children.contains(&widget)
    }

    pub fn index_of(&self, widget: WidgetId) -> Option<usize> {
        self.children.iter().position(|w| *w == widget)
    }

    /// Insert at `index`, clamped to the end.
    pub fn insert(&mut self, index: usize, widget: WidgetId) {
        let index = index.min(self.children.len());
        self.children.insert(index, widget);
    }

    pub fn push(&mut self, widget: WidgetId) {
        self.children.push(widget);
    }

    pub fn remove(&mut self, widget: WidgetId) -> bool {
        match self.index_of(widget) {
            Some(i) => {
                self.children.remove(i);
                true
            }
            None => false,
        }
    }

    /// Move `widget` (already a child) right after `sibling`, or to the end
    /// when there is no such sibling.
    pub fn place_above(&mut self, widget: WidgetId, sibling: Option<WidgetId>) {
        self.remove(widget);
        match sibling.and_then(|s| self.index_of(s)) {
            Some(i) => self.children.insert(i + 1, widget),
            None => self.children.push(widget),
        }
    }

    /// Move `widget` right before `sibling`, or to the front.
    pub fn place_below(&mut self, widget: WidgetId, sibling: Option<WidgetId>) {
        self.remove(widget);
        match sibling.and_then(|s| self.index_of(s)) {
            Some(i) => self.children.insert(i, widget),
            None => self.children.insert(0, widget),
        }
    }

    /// `(minimum, natural)` width: the sum over visible children.
    pub fn preferred_width(&self, host: &impl Stage) -> (f32, f32) {
        self.children
            .iter()
            .filter(|w| host.is_visible(**w))
            .map(|w| host.preferred_width(*w))
            .fold((0.0, 0.0), |(min, nat), (m, n)| (min + m, nat + n))
    }
}

/// The three zones of one panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Zones {
    pub leading:  Zone,
    pub center:   Zone,
    pub trailing: Zone,
}

impl Zones {
    pub fn get(&self, side: ZoneSide) -> &Zone {
        match side {
            ZoneSide::Leading => &self.leading,
            ZoneSide::Center => &self.center,
            ZoneSide::Trailing => &self.trailing,
        }
    }

    pub fn get_mut(&mut self, side: ZoneSide) -> &mut Zone {
        match side {
            ZoneSide::Leading => &mut self.leading,
            ZoneSide::Center => &mut self.center,
            ZoneSide::Trailing => &mut self.trailing,
        }
    }

    /// Which zone currently holds `widget`.
    pub fn find(&self, widget: WidgetId) -> Option<ZoneSide> {
        ZoneSide::ALL.into_iter().find(|s| self.get(*s).contains(widget))
    }

    /// Remove `widget` from whatever zone holds it.
    pub fn detach(&mut self, widget: WidgetId) -> Option<ZoneSide> {
        let side = self.find(widget)?;
        self.get_mut(side).remove(widget);
        Some(side)
    }

    /// Push one zone's membership to the host.
    pub fn sync(&self, host: &mut impl Stage, panel: PanelId, side: ZoneSide) {
        host.set_zone_children(panel, side, &self.get(side).children);
    }

    pub fn sync_all(&self, host: &mut impl Stage, panel: PanelId) {
        for side in ZoneSide::ALL {
            self.sync(host, panel, side);
        }
    }
}
