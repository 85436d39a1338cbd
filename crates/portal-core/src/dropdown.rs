//! Dropdown group: at most one menu open at a time.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownGroup<K> {
    open: Option<K>,
}

impl<K> Default for DropdownGroup<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq + Clone> DropdownGroup<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_menu(&self) -> Option<&K> {
        self.open.as_ref()
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    /// Click on a toggle: flips that menu and closes every other one
    pub fn toggle(&mut self, key: K) {
        if self.is_open(&key) {
            self.open = None;
        } else {
            self.open = Some(key);
        }
    }

    /// Click landed outside every dropdown
    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_b_closes_a() {
        let mut group = DropdownGroup::new();
        group.toggle("a");
        assert!(group.is_open(&"a"));

        group.toggle("b");
        assert!(!group.is_open(&"a"));
        assert!(group.is_open(&"b"));
        assert_eq!(group.open_menu(), Some(&"b"));
    }

    #[test]
    fn test_toggle_same_closes() {
        let mut group = DropdownGroup::new();
        group.toggle(1);
        group.toggle(1);
        assert_eq!(group.open_menu(), None);
    }

    #[test]
    fn test_click_outside_closes_all() {
        let mut group = DropdownGroup::new();
        group.toggle("profile");
        group.close_all();
        assert!(!group.is_open(&"profile"));
    }
}
