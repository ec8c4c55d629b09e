use tokio::sync::watch;

/// Sidebar state: a mirrored favorites count and a local collapse toggle
#[derive(Debug)]
pub struct Sidebar {
    collapsed: bool,
    favorites_count: watch::Receiver<usize>,
}

impl Sidebar {
    pub fn new(favorites_count: watch::Receiver<usize>) -> Self {
        Self {
            collapsed: false,
            favorites_count,
        }
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn favorites_count(&self) -> usize {
        *self.favorites_count.borrow()
    }

    /// Label of the collapse button
    pub fn toggle_title(&self) -> &'static str {
        if self.collapsed {
            "Open Sidebar"
        } else {
            "Close Sidebar"
        }
    }
}
