use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Danger,
}

impl FlashKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashKind::Success => "flash flash-success",
            FlashKind::Danger => "flash flash-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub id: Uuid,
    pub kind: FlashKind,
    pub text: String,
    /// Set once the hide delay elapsed; the banner is fading out.
    pub hiding: bool,
}

/// Banners in display order, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashQueue {
    items: Vec<Flash>,
}

impl FlashQueue {
    pub fn push(&mut self, kind: FlashKind, text: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Flash {
            id,
            kind,
            text: text.into(),
            hiding: false,
        });
        id
    }

    pub fn hide(&mut self, id: Uuid) {
        if let Some(flash) = self.items.iter_mut().find(|f| f.id == id) {
            flash.hiding = true;
        }
    }

    /// Remove a banner. Only hidden banners leave, so a stray transition on a
    /// visible one does not drop it early.
    pub fn remove_hidden(&mut self, id: Uuid) {
        self.items.retain(|f| !(f.id == id && f.hiding));
    }

    pub fn items(&self) -> &[Flash] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
